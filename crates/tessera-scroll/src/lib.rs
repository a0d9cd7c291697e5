//! Scrollbar coordination for tessera.
//!
//! A [`Scrollbar`] maps a draggable thumb onto the offset of a target
//! element along one axis. It is driven by [`ScrollInput`] events that the
//! host routes to it, and keeps the target and thumb in sync on
//! [`Scrollbar::refresh`].
//!
//! [`ScrollPane`] bundles a content container, a mask and up to two
//! scrollbars, and refreshes them whenever content is attached or laid out.
//!
//! # Example
//!
//! ```ignore
//! use tessera_scroll::{ScrollPane, ScrollPaneConfig};
//! use tessera_layout::Flow;
//!
//! let mut pane = ScrollPane::new(ScrollPaneConfig::default().with_size(320.0, 240.0));
//! pane.layout_content(&Flow::vertical().with_children(rows));
//! pane.handle_wheel(glam::DVec2::new(0.0, 40.0));
//! ```

pub mod config;
pub mod input;
pub mod pane;
pub mod scrollbar;

pub use config::{ScrollAxes, ScrollPaneConfig, ScrollbarConfig};
pub use input::{DragState, ScrollInput};
pub use pane::ScrollPane;
pub use scrollbar::Scrollbar;
