//! # blueprints
//!
//! Classic creational and structural design patterns, expressed as Rust
//! traits and small concrete types.
//!
//! ## Overview
//!
//! Each pattern is a handful of traits (the abstract roles) plus concrete
//! variants that implement them:
//!
//! - **Abstract Factory**: families of compatible products from one factory
//! - **Builder**: stepwise assembly, sequenced by a Director
//! - **Factory Method**: a template operation over a single creation hook
//! - **Singleton**: one shared instance behind a single access point
//! - **Adapter**: an incompatible interface served through the expected one
//! - **Bridge**: a control abstraction borrowing its implementation
//! - **Catalog**: runtime lookup of named variants, with abstract bases that
//!   fail fast with [`error::NotImplemented`]
//!
//! Abstract roles have no default bodies, so calling an operation that a
//! variant never implemented is a compile error. Links between collaborators
//! (Director to Builder, Abstraction to Implementation) are borrows; the
//! caller keeps ownership.
//!
//! ## Feature Flags
//!
//! - `abstract-factory`, `builder`, `factory-method`, `singleton`: one flag per
//!   creational pattern, grouped under `creational`
//! - `adapter`, `bridge`: one flag per structural pattern, grouped under
//!   `structural`
//! - `catalog`: the runtime pattern catalog
//! - `serde`: `Serialize`/`Deserialize` for parts lists
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (director steps, the extended bridge
//! abstraction's extra step, singleton logic, catalog misses) and never
//! installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(all(feature = "builder", feature = "bridge"))]
//! # {
//! use blueprints::prelude::*;
//!
//! let mut builder = AppleBuilder::new();
//! Director::new(&mut builder).build_computer();
//! assert_eq!(builder.result().to_string(), "case, screen, keyboard");
//!
//! let implementation = ImplementationA;
//! assert_eq!(Abstraction::new(&implementation).operation(), 30);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits. The factory method's product
/// trait is exported as `FactoryMethodProduct` to keep it apart from the
/// abstract factory's [`Product`](crate::creational::Product).
///
/// # Usage
///
/// ```rust
/// use blueprints::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{NotImplemented, PatternResult};

    #[cfg(feature = "abstract-factory")]
    pub use crate::creational::abstract_factory::*;

    #[cfg(feature = "builder")]
    pub use crate::creational::builder::{
        AppleBuilder, AppleComputer, AsusBuilder, AsusComputer, ComputerBuilder, Director,
        PartsList,
    };

    #[cfg(feature = "factory-method")]
    pub use crate::creational::factory_method::{
        Creator, CreatorA, CreatorB, Product as FactoryMethodProduct, ProductA, ProductB,
        ProductKind,
    };

    #[cfg(feature = "singleton")]
    pub use crate::creational::singleton::Singleton;

    #[cfg(feature = "adapter")]
    pub use crate::structural::adapter::*;

    #[cfg(feature = "bridge")]
    pub use crate::structural::bridge::*;

    #[cfg(feature = "catalog")]
    pub use crate::catalog::{Entry, PatternCatalog};
}

pub mod error;

pub mod creational;

pub mod structural;

#[cfg(feature = "catalog")]
pub mod catalog;
