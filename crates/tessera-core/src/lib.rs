//! Core types for the tessera widget layer.
//!
//! This crate provides the vocabulary shared by the layout and scroll crates:
//! - [`Rect`], [`Axis`] and [`Align`] geometry values
//! - the [`Positionable`] contract implemented by host elements
//! - [`ParentCollection`] and a plain [`Container`]
//! - pure alignment primitives in [`align`]
//! - configuration errors
//!
//! The crate never draws anything. Hosts adapt their own element types by
//! implementing [`Positionable`] and hand shared handles ([`ElementRef`]) to
//! the layout nodes.

pub mod align;
pub mod container;
pub mod errors;
pub mod geometry;
pub mod positionable;

pub use align::{align_item, center_in, center_on, clamp_into, fill, order};
pub use container::{Container, ParentCollection, ParentRef};
pub use errors::ConfigError;
pub use geometry::{Align, Axis, Rect};
pub use positionable::{same_element, share, Element, ElementRef, Positionable};
