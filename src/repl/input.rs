//! Line source for the REPL
//!
//! Stdin is read on a plain OS thread and forwarded over a channel, so a
//! read that is still waiting for the terminal never holds up runtime
//! shutdown.

use std::io::BufRead;
use std::thread;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::Result;

/// Lines buffered between the reader thread and the REPL
const LINE_BUFFER: usize = 16;

/// Spawns the stdin reader thread and returns the receiving end.
///
/// The channel closes at end of input. The thread stops on its own once
/// the receiver is dropped and the next line arrives.
pub fn spawn_stdin_reader() -> Result<mpsc::Receiver<String>> {
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || forward_lines(std::io::stdin().lock(), tx))?;

    Ok(rx)
}

/// Sends every line of `reader` to `tx` until EOF, a read error or a
/// closed receiver.
fn forward_lines<R: BufRead>(reader: R, tx: mpsc::Sender<String>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "Failed to read input");
                return;
            }
        };

        if tx.blocking_send(line).is_err() {
            debug!("Input receiver dropped, stopping reader");
            return;
        }
    }
    debug!("End of input");
}
