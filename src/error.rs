//! Error types for pattern wiring mistakes.
//!
//! Every pattern in this crate is expressed as a trait without default
//! bodies, so calling an unimplemented operation on a concrete type is a
//! compile error. The only runtime path left is dynamic dispatch by name
//! through the [`PatternCatalog`](crate::catalog::PatternCatalog), where an
//! abstract entry (or a missing one) has nothing to dispatch to.

use thiserror::Error;

/// An abstract operation was invoked without a concrete variant behind it.
///
/// This signals a programming error: the caller reached for a base type
/// instead of a concrete one. It is never retried inside the crate.
///
/// # Examples
///
/// ```rust
/// use blueprints::error::NotImplemented;
///
/// let error = NotImplemented::new("create_primary", "AbstractFactory");
/// assert_eq!(
///     error.to_string(),
///     "AbstractFactory has not implemented method 'create_primary'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name} has not implemented method '{operation}'")]
pub struct NotImplemented {
    /// The name of the operation that was invoked.
    pub operation: &'static str,
    /// The name of the type the operation was invoked on.
    pub type_name: String,
}

impl NotImplemented {
    /// Creates a new error for `operation` invoked on `type_name`.
    pub fn new(operation: &'static str, type_name: impl Into<String>) -> Self {
        Self {
            operation,
            type_name: type_name.into(),
        }
    }
}

/// Result alias for operations that can hit an abstract base.
pub type PatternResult<T> = Result<T, NotImplemented>;

static_assertions::assert_impl_all!(NotImplemented: Send, Sync, std::error::Error);
