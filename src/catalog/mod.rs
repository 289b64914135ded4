//! Catalog core: derivation pipeline, pagination, selection and the controller.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐  intents   ┌───────────────────────────┐
//! │ app::handler          │──────────▶│ CatalogController          │
//! └──────────────────────┘            │  Criteria · Selection      │
//!                                      │  SearchDebouncer           │
//!                                      └─────────────┬─────────────┘
//!                                                    │ derive(records)
//!                                      ┌─────────────▼─────────────┐
//!                                      │ pipeline: search → genre  │
//!                                      │           → sort          │
//!                                      └─────────────┬─────────────┘
//!                                                    │
//!                                      ┌─────────────▼─────────────┐
//!                                      │ pagination → DerivedResult│
//!                                      └───────────────────────────┘
//! ```
//!
//! Everything below the controller is pure. The controller is the only place
//! criteria or selection change.

pub mod collate;
pub mod controller;
pub mod criteria;
pub mod debounce;
pub mod pagination;
pub mod pipeline;
pub mod selection;

pub use controller::{CatalogController, DerivedResult};
pub use criteria::{Criteria, SortCriterion, DEFAULT_PAGE_SIZE};
pub use debounce::{SearchDebouncer, DEFAULT_SEARCH_DEBOUNCE};
pub use pagination::{paginate, Page};
pub use pipeline::{derive, Derivation};
pub use selection::{RecordLookup, Resolution, Selection};
