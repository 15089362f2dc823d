//! Argument specification and binding.
//!
//! This is the engine that turns the raw tokens of a command line into the
//! arguments a command handler receives:
//!
//! - [`spec`] - [`ArgumentSpec`], the declared contract of one argument
//! - [`index`] - [`ArgumentIndex`], first-wins lookup by name and shorthand
//! - [`binder`] - [`extract`], the token walk that produces [`BoundArgs`]
//! - [`bound`] - [`BoundArgument`] and [`BoundArgs`]

pub mod binder;
pub mod bound;
pub mod index;
pub mod spec;

pub use binder::extract;
pub use bound::{BoundArgs, BoundArgument};
pub use index::{ArgumentIndex, Collision, CollisionKind};
pub use spec::{ArgumentKind, ArgumentSpec};
