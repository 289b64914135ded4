//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the terminal runner (main.rs) and the catalog,
//! source and worker layers. It implements the event-driven loop that powers
//! the interactive browser.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key / Tick → Events → Event Handler → State Mutations → Actions → Side Effects
//!                            ↑                                  ↓
//!                            └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keymap`]: Terminal key presses to events
//! - [`modes`]: Input mode and supply status types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use podshelf::app::{handle_event, Action, AppState, Event};
//! use podshelf::catalog::CatalogController;
//! use podshelf::domain::GenreCatalog;
//! use podshelf::ui::Theme;
//!
//! let mut state = AppState::new(CatalogController::default(), GenreCatalog::builtin(), Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::Refresh)?;
//! assert!(matches!(actions[0], Action::PostToWorker(_)));
//! # Ok::<(), podshelf::PodshelfError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keymap::map_key;
pub use modes::{InputMode, SupplyStatus};
pub use state::AppState;
