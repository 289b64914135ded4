//! Background worker thread for record supply.
//!
//! This module runs the configured record source off the UI thread so the terminal
//! stays responsive while the network is slow.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and the UI-side handle

pub mod handler;
pub mod messages;

pub use handler::{SupplyHandle, SupplyWorker};
pub use messages::{SupplyRequest, SupplyResponse};
