//! Child process spawning with threaded stdout/stderr capture.
//!
//! Each stream gets its own reader thread that assembles complete lines
//! and sends them over a channel; the main thread consumes them in
//! arrival order. Backpressure and partial-read buffering live entirely
//! on this side of the pipeline contract.

use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to wait for `{command}`: {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

/// One complete line of child output with its originating stream.
#[derive(Debug, Clone)]
pub struct OutputLine {
    pub stream: StreamKind,
    pub content: String,
}

/// A spawned child whose output arrives line by line over a channel.
pub struct ChildProcess {
    child: Child,
    command: String,
    receiver: Receiver<OutputLine>,
}

impl ChildProcess {
    pub fn spawn(command: &str, args: &[String]) -> Result<Self, ProcessError> {
        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                command: command.to_string(),
                source,
            })?;

        let (sender, receiver) = mpsc::channel();

        if let Some(stdout) = child.stdout.take() {
            let tx = sender.clone();
            thread::spawn(move || capture_stream(stdout, tx, StreamKind::Stdout));
        }
        if let Some(stderr) = child.stderr.take() {
            thread::spawn(move || capture_stream(stderr, sender, StreamKind::Stderr));
        }

        Ok(Self {
            child,
            command: command.to_string(),
            receiver,
        })
    }

    /// Blocks until the next complete line from either stream. Returns
    /// `None` once both reader threads have finished.
    pub fn next_line(&self) -> Option<OutputLine> {
        self.receiver.recv().ok()
    }

    /// Reaps the child and returns its exit status.
    pub fn wait(mut self) -> Result<ExitStatus, ProcessError> {
        self.child.wait().map_err(|source| ProcessError::Wait {
            command: self.command.clone(),
            source,
        })
    }
}

fn capture_stream(stream: impl Read, sender: Sender<OutputLine>, kind: StreamKind) {
    let reader = BufReader::new(stream);
    for line in reader.lines() {
        match line {
            Ok(content) => {
                // Receiver dropped means the driver is shutting down.
                if sender.send(OutputLine { stream: kind, content }).is_err() {
                    break;
                }
            }
            Err(e) => {
                warn!("error reading child {:?}: {}", kind, e);
                break;
            }
        }
    }
    debug!("child {:?} stream closed", kind);
}
