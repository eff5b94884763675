//! Interactive loop and one-shot question handling

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use super::Dispatcher;
use crate::{
    output::{render_answer, render_error},
    Result,
};

pub const BANNER: &str = r#"
  ____ _   _    _  _____   _   _ ____    _
 / ___| | | |  / \|_   _| | \ | | __ )  / \
| |   | |_| | / _ \ | |   |  \| |  _ \ / _ \
| |___|  _  |/ ___ \| |   | |\  | |_) / ___ \
 \____|_| |_/_/   \_\_|   |_| \_|____/_/   \_\

Ask about leaders, player careers, team records, league averages and more.
Type 'exit' or 'quit' to leave.
"#;

const PROMPT: &str = "\n🏀 Ask an NBA question: ";

/// Presentation switches shared by `chat` and `ask`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatOptions {
    /// Print tables as JSON records.
    pub as_json: bool,
    /// Print the interpreted intent before answering.
    pub debug: bool,
}

/// True for the words that end the session.
pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

/// Answer one question, rendering either the answer or the failure.
/// Returns whether the question succeeded.
pub async fn respond<W: Write>(
    dispatcher: &Dispatcher<'_>,
    question: &str,
    options: ChatOptions,
    out: &mut W,
) -> Result<bool> {
    let outcome = if options.debug {
        match dispatcher.interpret(question).await {
            Ok(intent) => {
                writeln!(out, "🔍 Intent: {}", serde_json::to_string(&intent)?)?;
                dispatcher.dispatch(&intent).await
            }
            Err(e) => Err(e),
        }
    } else {
        dispatcher.answer_query(question).await
    };

    match outcome {
        Ok(answer) => {
            writeln!(out, "{}", render_answer(&answer, options.as_json))?;
            Ok(true)
        }
        Err(e) => {
            debug!("Query failed ({:?}): {}", e.kind(), e);
            writeln!(out, "{}", render_error(&e))?;
            Ok(false)
        }
    }
}

/// Read questions line by line until `exit`, `quit` or end of input.
/// Query failures are printed and the loop continues.
pub async fn run_repl<R, W>(
    dispatcher: &Dispatcher<'_>,
    input: R,
    out: &mut W,
    options: ChatOptions,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if is_exit_command(question) {
            writeln!(out, "👋 Goodbye!")?;
            break;
        }
        respond(dispatcher, question, options, out).await?;
    }
    Ok(())
}

/// Handle the `chat` command: banner, then the loop over stdin.
pub async fn handle_chat(dispatcher: &Dispatcher<'_>, options: ChatOptions) -> Result<()> {
    println!("{}", BANNER);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_repl(dispatcher, stdin, &mut stdout, options).await
}

/// Handle the `ask` command. Returns whether the question succeeded.
pub async fn handle_ask(
    dispatcher: &Dispatcher<'_>,
    question: &str,
    options: ChatOptions,
) -> Result<bool> {
    let mut stdout = std::io::stdout();
    respond(dispatcher, question.trim(), options, &mut stdout).await
}
