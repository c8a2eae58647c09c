//! Creational patterns.
//!
//! These patterns decide how objects come into existence:
//!
//! - [`abstract_factory`]: families of related products from one factory
//! - [`builder`]: stepwise assembly sequenced by a [`Director`]
//! - [`factory_method`]: a template operation over one creation hook
//! - [`singleton`]: a single shared instance
//!
//! Every abstract role is a trait without default bodies, so a missing
//! operation is rejected at compile time rather than at the call site.
//!
//! # Examples
//!
//! Needs the `abstract-factory` and `builder` features:
//!
//! ```rust
//! # #[cfg(all(feature = "abstract-factory", feature = "builder"))]
//! # {
//! use blueprints::creational::{AbstractFactory, AsusFactory, AsusBuilder, ComputerBuilder, Director};
//!
//! let family = AsusFactory.create_family();
//! assert!(family.is_compatible());
//!
//! let mut builder = AsusBuilder::new();
//! Director::new(&mut builder).build_tablet();
//! assert_eq!(builder.result().to_string(), "case, screen");
//! # }
//! ```

#[cfg(feature = "abstract-factory")]
pub mod abstract_factory;

#[cfg(feature = "builder")]
pub mod builder;

#[cfg(feature = "factory-method")]
pub mod factory_method;

#[cfg(feature = "singleton")]
pub mod singleton;

#[cfg(feature = "abstract-factory")]
pub use abstract_factory::{
    AbstractFactory, AppleFactory, AsusFactory, Ipad, Laptop, MacPro, Product, ProductFamily,
    Tablet, ZenBook, ZenPad,
};

#[cfg(feature = "builder")]
pub use builder::{
    AppleBuilder, AppleComputer, AsusBuilder, AsusComputer, ComputerBuilder, Director, PartsList,
};

#[cfg(feature = "factory-method")]
pub use factory_method::{Creator, CreatorA, CreatorB, ProductA, ProductB, ProductKind};

#[cfg(feature = "singleton")]
pub use singleton::Singleton;
