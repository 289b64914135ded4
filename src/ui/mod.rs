//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled frames through composable
//! rendering components. It provides theme support, responsive layout and
//! search match highlighting.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → frame (String) → terminal
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation, wrapping)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::{Theme, DEFAULT_THEME};
pub use viewmodel::{
    BannerInfo, Body, ControlsInfo, DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo,
    PaginationInfo, SearchBarInfo, UIViewModel,
};
