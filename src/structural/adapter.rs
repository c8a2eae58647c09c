//! Adapter: make an incompatible interface usable through the expected one.
//!
//! Client code speaks [`Target`]. The [`Adaptee`] has useful behavior behind
//! an interface the client does not understand; the [`Adapter`] wraps it and
//! translates.
//!
//! # Examples
//!
//! ```rust
//! use blueprints::structural::adapter::{Adaptee, Adapter, DefaultTarget, Target};
//!
//! fn client_code(target: &dyn Target) -> String {
//!     target.request()
//! }
//!
//! assert_eq!(client_code(&DefaultTarget), "Target: The default target's behavior.");
//! assert_eq!(
//!     client_code(&Adapter::new(Adaptee)),
//!     "Adapter: (TRANSLATED) Special behavior of the Adaptee."
//! );
//! ```

/// The domain-specific interface client code uses.
pub trait Target {
    /// Handles a client request.
    fn request(&self) -> String;
}

/// The plain target with default behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultTarget;

impl Target for DefaultTarget {
    fn request(&self) -> String {
        "Target: The default target's behavior.".to_string()
    }
}

/// Useful behavior behind an incompatible interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Adaptee;

impl Adaptee {
    /// Returns the adaptee's output in its own (reversed) format.
    pub const fn specific_request(&self) -> &'static str {
        ".eetpadA eht fo roivaheb laicepS"
    }
}

/// Serves [`Target`] requests by translating an [`Adaptee`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    /// Wraps `adaptee`.
    pub const fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }

    /// Releases the wrapped adaptee.
    pub fn into_inner(self) -> Adaptee {
        self.adaptee
    }
}

impl Target for Adapter {
    fn request(&self) -> String {
        let translated: String = self.adaptee.specific_request().chars().rev().collect();
        format!("Adapter: (TRANSLATED) {translated}")
    }
}

static_assertions::assert_obj_safe!(Target);
