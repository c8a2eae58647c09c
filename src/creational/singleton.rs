//! Singleton: exactly one instance behind a single access point.
//!
//! [`Singleton`] has no public constructor. [`Singleton::instance`] lazily
//! initialises the one process-wide value and always hands back the same
//! reference.
//!
//! # Examples
//!
//! ```rust
//! use blueprints::creational::singleton::Singleton;
//!
//! let first = Singleton::instance();
//! let second = Singleton::instance();
//! assert!(std::ptr::eq(first, second));
//! ```

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// The one and only instance of its kind.
#[derive(Debug)]
pub struct Singleton {
    invocations: AtomicU64,
}

impl Singleton {
    const fn new() -> Self {
        Self {
            invocations: AtomicU64::new(0),
        }
    }

    /// Returns the shared instance, creating it on first access.
    pub fn instance() -> &'static Self {
        static INSTANCE: OnceLock<Singleton> = OnceLock::new();
        INSTANCE.get_or_init(Self::new)
    }

    /// The instance's business logic.
    ///
    /// Returns how many times it has run, this call included.
    pub fn some_logic(&self) -> u64 {
        let count = self.invocations.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(count, "singleton: running some logic");
        count
    }

    /// How many times [`Singleton::some_logic`] has run so far.
    pub fn invocations(&self) -> u64 {
        self.invocations.load(Ordering::Relaxed)
    }
}

static_assertions::assert_impl_all!(Singleton: Send, Sync);
static_assertions::assert_not_impl_any!(Singleton: Clone, Default);
