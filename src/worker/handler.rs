//! Supply worker implementation.
//!
//! The worker owns a [`RecordSource`] and runs on its own thread so a slow network
//! never blocks rendering. The UI thread talks to it only through
//! [`SupplyHandle`], which wraps a pair of `std::sync::mpsc` channels.

use crate::domain::error::{PodshelfError, Result};
use crate::source::{dedup_by_id, RecordSource};
use crate::worker::{SupplyRequest, SupplyResponse};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;

/// Worker-side state: the source and nothing else.
pub struct SupplyWorker {
    source: Box<dyn RecordSource>,
}

impl SupplyWorker {
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Runs a fetch and packages the outcome.
    fn handle_fetch(&self, request_id: u64) -> SupplyResponse {
        match self.source.fetch() {
            Ok(records) => {
                let supplied = records.len();
                let records = dedup_by_id(records);
                tracing::debug!(
                    request_id,
                    supplied,
                    kept = records.len(),
                    source = %self.source.describe(),
                    "fetch successful"
                );
                SupplyResponse::Loaded { request_id, records }
            }
            Err(e) => {
                tracing::error!(request_id, error = %e, source = %self.source.describe(), "fetch failed");
                SupplyResponse::Failed {
                    request_id,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Processes one request. Returns `None` for [`SupplyRequest::Shutdown`].
    pub fn handle_message(&mut self, message: SupplyRequest) -> Option<SupplyResponse> {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            SupplyRequest::Fetch { request_id } => Some(self.handle_fetch(request_id)),
            SupplyRequest::Shutdown => None,
        }
    }

    /// Serves requests until shutdown or until either channel end is dropped.
    pub fn run(mut self, requests: &Receiver<SupplyRequest>, responses: &Sender<SupplyResponse>) {
        while let Ok(message) = requests.recv() {
            let Some(response) = self.handle_message(message) else {
                break;
            };
            if responses.send(response).is_err() {
                tracing::debug!("response channel closed, stopping worker");
                break;
            }
        }
        tracing::debug!("supply worker stopped");
    }
}

/// UI-side handle to a running supply worker.
///
/// Dropping the handle shuts the worker down and joins its thread.
pub struct SupplyHandle {
    sender: Sender<SupplyRequest>,
    receiver: Receiver<SupplyResponse>,
    thread: Option<JoinHandle<()>>,
}

impl SupplyHandle {
    /// Spawns a worker thread around `source`.
    ///
    /// # Errors
    ///
    /// Returns [`PodshelfError::Io`] if the thread cannot be spawned.
    pub fn spawn(source: Box<dyn RecordSource>) -> Result<Self> {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let worker = SupplyWorker::new(source);

        let thread = std::thread::Builder::new()
            .name("podshelf-supply".to_string())
            .spawn(move || worker.run(&request_rx, &response_tx))?;

        Ok(Self {
            sender: request_tx,
            receiver: response_rx,
            thread: Some(thread),
        })
    }

    /// Sends a request to the worker.
    ///
    /// # Errors
    ///
    /// Returns [`PodshelfError::Worker`] if the worker has stopped.
    pub fn post(&self, request: SupplyRequest) -> Result<()> {
        self.sender
            .send(request)
            .map_err(|e| PodshelfError::Worker(format!("worker unavailable: {e}")))
    }

    /// Returns the next response, if one is ready.
    ///
    /// # Errors
    ///
    /// Returns [`PodshelfError::Worker`] if the worker thread has exited.
    pub fn try_recv(&self) -> Result<Option<SupplyResponse>> {
        match self.receiver.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                Err(PodshelfError::Worker("worker thread exited".to_string()))
            }
        }
    }

    /// Blocks until the next response arrives.
    ///
    /// # Errors
    ///
    /// Returns [`PodshelfError::Worker`] if the worker thread has exited.
    pub fn recv(&self) -> Result<SupplyResponse> {
        self.receiver
            .recv()
            .map_err(|e| PodshelfError::Worker(format!("worker thread exited: {e}")))
    }

    /// Asks the worker to stop without waiting for an in-flight fetch.
    pub fn detach(mut self) {
        let _ = self.sender.send(SupplyRequest::Shutdown);
        drop(self.thread.take());
    }
}

impl Drop for SupplyHandle {
    fn drop(&mut self) {
        let _ = self.sender.send(SupplyRequest::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("supply worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;

    struct FixedSource(Vec<Record>);

    impl RecordSource for FixedSource {
        fn fetch(&self) -> Result<Vec<Record>> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    struct BrokenSource;

    impl RecordSource for BrokenSource {
        fn fetch(&self) -> Result<Vec<Record>> {
            Err(PodshelfError::Supply("connection refused".to_string()))
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    #[test]
    fn fetch_deduplicates_and_echoes_request_id() {
        let source = FixedSource(vec![
            Record::new("1", "One"),
            Record::new("1", "Duplicate"),
            Record::new("2", "Two"),
        ]);
        let mut worker = SupplyWorker::new(Box::new(source));
        match worker.handle_message(SupplyRequest::Fetch { request_id: 7 }) {
            Some(SupplyResponse::Loaded { request_id, records }) => {
                assert_eq!(request_id, 7);
                assert_eq!(records.len(), 2);
                assert_eq!(records[0].display_title(), "One");
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn failures_become_messages() {
        let mut worker = SupplyWorker::new(Box::new(BrokenSource));
        let response = worker.handle_message(SupplyRequest::Fetch { request_id: 1 });
        assert!(matches!(
            response,
            Some(SupplyResponse::Failed { request_id: 1, ref message }) if message.contains("connection refused")
        ));
    }

    #[test]
    fn shutdown_yields_no_response() {
        let mut worker = SupplyWorker::new(Box::new(BrokenSource));
        assert!(worker.handle_message(SupplyRequest::Shutdown).is_none());
    }

    #[test]
    fn handle_round_trips_through_the_thread() {
        let handle = SupplyHandle::spawn(Box::new(FixedSource(vec![Record::new("9", "Nine")]))).unwrap();
        handle.post(SupplyRequest::Fetch { request_id: 1 }).unwrap();
        handle.post(SupplyRequest::Fetch { request_id: 2 }).unwrap();
        assert_eq!(handle.recv().unwrap().request_id(), 1);
        assert_eq!(handle.recv().unwrap().request_id(), 2);
    }
}
