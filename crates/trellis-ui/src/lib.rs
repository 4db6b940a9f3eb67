//! Shared UI primitives used across the product family.
//!
//! Every interactive primitive here is polymorphic: a property bag decides
//! whether it renders a native tag, an anchor, or a caller-supplied
//! renderable, and the [`polymorphic`] core keeps the accessibility
//! attributes consistent across the three. Components ship styling hooks
//! (classes and `data-*` attributes) only; visual values live in the
//! per-component stylesheets.

pub mod components;
pub mod focus;
pub mod polymorphic;

pub use components::*;
pub use focus::*;
pub use polymorphic::*;
