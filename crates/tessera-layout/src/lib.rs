//! Composable layout nodes.
//!
//! A layout node turns one available rectangle into placements for its
//! children. Nodes nest freely: every child is either another node or a
//! concrete host element ([`Child`]).
//!
//! # Node types
//!
//! 1. **Decorators** wrapping one child: [`Center`], [`Expand`], [`Padding`], [`SizedBox`]
//! 2. **Pairs**: [`Separate`] pushes two children to opposite edges
//! 3. **Lists**: [`EqualSpace`] divides space evenly, [`Flow`] packs items in sequence
//!
//! Every node returns a [`Placed`] result that can be moved again as a unit,
//! even when the elements it placed do not share a parent.
//!
//! # Example
//!
//! ```ignore
//! use tessera_core::{share, Element, Rect};
//! use tessera_layout::{Center, Layout, Padding};
//!
//! let button = share(Element::sized(80.0, 24.0));
//! let node = Padding::all(8.0, Center::new(button.clone()));
//! node.layout(Rect::new(0.0, 0.0, 200.0, 100.0), None);
//! ```

mod center;
mod equal_space;
mod expand;
mod flow;
mod node;
mod padding;
mod placed;
mod separate;
mod sized_box;

pub use center::Center;
pub use equal_space::EqualSpace;
pub use expand::Expand;
pub use flow::Flow;
pub use node::{attach, Child, Layout};
pub use padding::{Insets, Padding};
pub use placed::{Aggregate, Placed};
pub use separate::Separate;
pub use sized_box::SizedBox;

pub use tessera_core::{Align, Axis, Rect};
