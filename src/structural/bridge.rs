//! Bridge: a control abstraction composed with an implementation hierarchy.
//!
//! The [`Abstraction`] side is the high-level control layer; it does no real
//! work and delegates to whichever [`Implementation`] it was linked with at
//! construction. Both sides vary independently. The link is a borrow: the
//! caller owns the implementation and the abstraction never outlives it.
//!
//! # Examples
//!
//! ```rust
//! use blueprints::structural::bridge::{
//!     Abstraction, Control, ExtendedAbstraction, ImplementationA, ImplementationB,
//! };
//!
//! fn client_code(abstraction: &dyn Control) -> i64 {
//!     abstraction.operation()
//! }
//!
//! let first = ImplementationA;
//! assert_eq!(client_code(&Abstraction::new(&first)), 30);
//!
//! let second = ImplementationB;
//! assert_eq!(client_code(&ExtendedAbstraction::new(&second)), 10);
//! ```

use std::cell::Cell;
use std::fmt;

/// Primitive operations the abstraction is built on.
pub trait Implementation {
    /// Performs the platform-specific primitive.
    fn do_operation(&self) -> i64;
}

/// High-level interface client code talks to.
pub trait Control {
    /// Runs the abstraction's operation.
    fn operation(&self) -> i64;
}

/// Plain abstraction: forwards straight to its implementation.
pub struct Abstraction<'a> {
    implementation: &'a dyn Implementation,
}

impl<'a> Abstraction<'a> {
    /// Links the abstraction with `implementation` for its whole lifetime.
    pub fn new(implementation: &'a dyn Implementation) -> Self {
        Self { implementation }
    }

    /// The linked implementation.
    pub fn implementation(&self) -> &'a dyn Implementation {
        self.implementation
    }
}

impl Control for Abstraction<'_> {
    fn operation(&self) -> i64 {
        self.implementation.do_operation()
    }
}

impl fmt::Debug for Abstraction<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Abstraction").finish_non_exhaustive()
    }
}

/// Abstraction that runs an extra step before delegating.
///
/// The extra step is a notification: a `tracing` event plus a counter bump.
/// It never touches the delegated result.
pub struct ExtendedAbstraction<'a> {
    implementation: &'a dyn Implementation,
    extra_steps: Cell<u64>,
}

impl<'a> ExtendedAbstraction<'a> {
    /// Links the abstraction with `implementation` for its whole lifetime.
    pub fn new(implementation: &'a dyn Implementation) -> Self {
        Self {
            implementation,
            extra_steps: Cell::new(0),
        }
    }

    /// The linked implementation.
    pub fn implementation(&self) -> &'a dyn Implementation {
        self.implementation
    }

    /// How many times the extra step has run.
    pub fn extra_steps(&self) -> u64 {
        self.extra_steps.get()
    }

    fn extra_step(&self) {
        let count = self.extra_steps.get() + 1;
        self.extra_steps.set(count);
        tracing::info!(count, "extended abstraction: doing extra steps");
    }
}

impl Control for ExtendedAbstraction<'_> {
    fn operation(&self) -> i64 {
        self.extra_step();
        self.implementation.do_operation()
    }
}

impl fmt::Debug for ExtendedAbstraction<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ExtendedAbstraction")
            .field("extra_steps", &self.extra_steps.get())
            .finish_non_exhaustive()
    }
}

/// Implementation for the first platform: `10 + 20`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImplementationA;

impl Implementation for ImplementationA {
    fn do_operation(&self) -> i64 {
        10 + 20
    }
}

/// Implementation for the second platform: `20 - 10`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImplementationB;

impl Implementation for ImplementationB {
    fn do_operation(&self) -> i64 {
        20 - 10
    }
}

static_assertions::assert_obj_safe!(Implementation, Control);
static_assertions::assert_not_impl_any!(ExtendedAbstraction<'static>: Sync);
