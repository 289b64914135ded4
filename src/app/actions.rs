//! Actions representing side effects to be executed by the terminal runner.
//!
//! The event handler returns a `Vec<Action>` after processing each event. State
//! changes happen inside the handler; anything that leaves the process (talking
//! to the worker thread, tearing down the terminal) is described here and
//! executed by `main`.
//!
//! # Example
//!
//! ```rust
//! use podshelf::app::Action;
//! use podshelf::worker::SupplyRequest;
//!
//! let actions = vec![Action::PostToWorker(SupplyRequest::Fetch { request_id: 1 })];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::SupplyRequest;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the event loop and restore the terminal.
    Quit,

    /// Posts a request to the background supply worker.
    PostToWorker(SupplyRequest),
}
