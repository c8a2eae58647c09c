//! Structural patterns.
//!
//! These patterns compose objects into larger structures:
//!
//! - [`adapter`]: translate an incompatible interface into the expected one
//! - [`bridge`]: split a control abstraction from its implementation
//!
//! Composition here is by borrow wherever the composed object belongs to
//! the caller.

#[cfg(feature = "adapter")]
pub mod adapter;

#[cfg(feature = "bridge")]
pub mod bridge;

#[cfg(feature = "adapter")]
pub use adapter::{Adaptee, Adapter, DefaultTarget, Target};

#[cfg(feature = "bridge")]
pub use bridge::{
    Abstraction, Control, ExtendedAbstraction, Implementation, ImplementationA, ImplementationB,
};
