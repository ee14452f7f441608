//! hb-core: Widget model for the Hanab table UI
//!
//! This crate contains the page model with no I/O dependencies: the
//! element tree standing in for the rendered page, the typed widget
//! descriptors read from its attributes, the one-shot hydration pass
//! that decorates the tree, and the hover/click interaction model.
//! It is designed to be pure and testable; terminal rendering lives
//! in `hb-tui`.

pub mod color;
pub mod hydrate;
pub mod interact;
pub mod markup;
pub mod page;
pub mod table;
pub mod widget;

mod error;

pub use color::CardColor;
pub use error::WidgetError;
pub use hydrate::hydrate;
pub use page::{Node, NodeId, Page};
pub use widget::{CardFace, CircleGroup};
