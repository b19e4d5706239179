//! Asynchronous deck file reads
//!
//! Each request spawns a one-shot read on a tokio runtime and delivers exactly
//! one [`LoadCompletion`]. Requests are numbered; only the completion of the
//! most recent request is handed out, so a slow earlier read can never
//! replace a deck opened after it.

use std::io;
use std::path::PathBuf;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

pub type LoadTicket = u64;

/// Outcome of one file read
#[derive(Debug)]
pub struct LoadCompletion {
    pub ticket: LoadTicket,
    pub path: PathBuf,
    pub result: io::Result<String>,
}

pub struct FileLoader {
    handle: Handle,
    sender: mpsc::UnboundedSender<LoadCompletion>,
    receiver: mpsc::UnboundedReceiver<LoadCompletion>,
    latest: LoadTicket,
    pending: bool,
}

impl FileLoader {
    pub fn new(handle: Handle) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            handle,
            sender,
            receiver,
            latest: 0,
            pending: false,
        }
    }

    /// Start reading `path`. Supersedes any read still in flight.
    pub fn request(&mut self, path: impl Into<PathBuf>) -> LoadTicket {
        self.latest += 1;
        self.pending = true;

        let ticket = self.latest;
        let path = path.into();
        let sender = self.sender.clone();
        log::debug!("Load #{} requested: {}", ticket, path.display());

        self.handle.spawn(async move {
            let result = tokio::fs::read_to_string(&path).await;
            let _ = sender.send(LoadCompletion {
                ticket,
                path,
                result,
            });
        });

        ticket
    }

    /// Whether the latest request has not completed yet
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Non-blocking poll for the latest request's completion
    pub fn try_next(&mut self) -> Option<LoadCompletion> {
        while let Ok(completion) = self.receiver.try_recv() {
            if let Some(completion) = self.accept(completion) {
                return Some(completion);
            }
        }
        None
    }

    /// Wait for the latest request's completion.
    ///
    /// Waits forever when nothing was requested.
    pub async fn next(&mut self) -> Option<LoadCompletion> {
        loop {
            let completion = self.receiver.recv().await?;
            if let Some(completion) = self.accept(completion) {
                return Some(completion);
            }
        }
    }

    fn accept(&mut self, completion: LoadCompletion) -> Option<LoadCompletion> {
        if completion.ticket != self.latest {
            log::debug!(
                "Dropping stale load #{} of {}",
                completion.ticket,
                completion.path.display()
            );
            return None;
        }

        self.pending = false;
        Some(completion)
    }
}
