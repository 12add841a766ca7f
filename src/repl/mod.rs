//! REPL Module
//!
//! Reads commands line by line, dispatches them through the command table
//! and keeps per-session state between them.

pub mod commands;
mod input;
mod session;

use std::io::Write;

use tokio::sync::mpsc;
use tracing::warn;

use crate::error::Result;
pub use commands::{lookup, Command, CommandInfo, Outcome, COMMANDS};
pub use input::spawn_stdin_reader;
pub use session::Session;

/// Printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// Normalizes a line of input into lower-case words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

/// Runs the read-eval-print loop until `exit` or end of input.
///
/// `input` yields one line per message; a closed channel counts as end of
/// input. Command failures are reported on `out` and the loop continues;
/// only a failure to write output ends it with an error.
pub async fn run<W: Write>(
    session: &mut Session,
    mut input: mpsc::Receiver<String>,
    out: &mut W,
) -> Result<()> {
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = input.recv().await else {
            writeln!(out)?;
            break;
        };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        let Some(command) = lookup(name) else {
            writeln!(out, "Unknown command")?;
            continue;
        };

        match command.execute(session, args, out).await {
            Ok(Outcome::Exit) => break,
            Ok(Outcome::Continue) => {}
            Err(e) => {
                warn!(command = %name, error = %e, "Command failed");
                writeln!(out, "Error: {}", e)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::{ExpiringCache, PokeApiClient};

    fn offline_session() -> Session {
        let cache = ExpiringCache::new(Duration::from_secs(60));
        let client = PokeApiClient::with_base_url("http://127.0.0.1:9", cache).unwrap();
        Session::new(client)
    }

    #[test]
    fn test_clean_input() {
        let cases = [
            (" hello world ", vec!["hello", "world"]),
            ("learninggo", vec!["learninggo"]),
            ("tomorrow is gonna be sunny", vec!["tomorrow", "is", "gonna", "be", "sunny"]),
            ("Catch   PIKACHU\t", vec!["catch", "pikachu"]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_clean_input_blank() {
        assert!(clean_input("").is_empty());
        assert!(clean_input("   \t ").is_empty());
    }

    #[tokio::test]
    async fn test_run_stops_when_input_dropped() {
        let mut session = offline_session();
        let (tx, rx) = mpsc::channel(1);
        let mut out = Vec::new();

        let closer = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            drop(tx);
        });

        tokio::time::timeout(Duration::from_secs(1), run(&mut session, rx, &mut out))
            .await
            .expect("REPL should stop once its input is gone")
            .unwrap();
        closer.await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", PROMPT));
        session.into_client().into_cache().shutdown().await;
    }

    #[tokio::test]
    async fn test_run_processes_lines_then_stops() {
        let mut session = offline_session();
        let (tx, rx) = mpsc::channel(4);
        tx.send("  HELP ".to_string()).await.unwrap();
        tx.send("fly".to_string()).await.unwrap();
        drop(tx);

        let mut out = Vec::new();
        run(&mut session, rx, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Welcome to the Pokedex!"));
        assert!(text.ends_with("Unknown command\nPokedex > \n"));
        session.into_client().into_cache().shutdown().await;
    }
}
