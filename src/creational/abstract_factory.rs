//! Abstract Factory: whole product families without naming concrete types.
//!
//! An [`AbstractFactory`] declares one creation operation per distinct
//! product and leaves the choice of concrete type to each factory. Every
//! factory corresponds to one product variety, so products coming out of the
//! same factory are guaranteed to be compatible with one another.
//!
//! # Examples
//!
//! ```rust
//! use blueprints::creational::abstract_factory::{
//!     AbstractFactory, AppleFactory, AsusFactory, Laptop, Product,
//! };
//!
//! fn describe(factory: &dyn AbstractFactory) -> Vec<&'static str> {
//!     let laptop = factory.create_primary();
//!     let tablet = factory.create_secondary();
//!     vec![laptop.feature(), laptop.keyboard(), tablet.feature()]
//! }
//!
//! assert_eq!(
//!     describe(&AppleFactory),
//!     vec!["Mac-Pro features", "Mac-Pro has a keyboard", "Ipad features"]
//! );
//! assert_eq!(describe(&AsusFactory)[0], "ZenBook features");
//! ```

use std::fmt;

/// Capability shared by every product a factory can create.
pub trait Product {
    /// Describes what the product offers.
    fn feature(&self) -> &'static str;

    /// The compatibility family the product belongs to.
    ///
    /// Equal to the [`AbstractFactory::name`] of the factory that made it.
    fn family(&self) -> &'static str;
}

/// A laptop-like product: a [`Product`] that also carries a keyboard.
pub trait Laptop: Product {
    /// Describes the laptop's keyboard.
    fn keyboard(&self) -> &'static str;
}

/// A tablet-like product.
pub trait Tablet: Product {}

/// Creates a matched family of products.
///
/// Implementations must return products that all report the same
/// [`Product::family`], namely [`AbstractFactory::name`].
pub trait AbstractFactory {
    /// The factory's vendor name, which is also its product family.
    fn name(&self) -> &'static str;

    /// Creates the family's primary product.
    fn create_primary(&self) -> Box<dyn Laptop>;

    /// Creates the family's secondary product.
    fn create_secondary(&self) -> Box<dyn Tablet>;

    /// Creates both products in one call.
    fn create_family(&self) -> ProductFamily {
        ProductFamily {
            factory: self.name(),
            primary: self.create_primary(),
            secondary: self.create_secondary(),
        }
    }
}

/// A primary and a secondary product produced together by one factory.
pub struct ProductFamily {
    factory: &'static str,
    primary: Box<dyn Laptop>,
    secondary: Box<dyn Tablet>,
}

impl ProductFamily {
    /// The name of the factory that produced this family.
    pub const fn factory(&self) -> &'static str {
        self.factory
    }

    /// The family's laptop.
    pub fn primary(&self) -> &dyn Laptop {
        self.primary.as_ref()
    }

    /// The family's tablet.
    pub fn secondary(&self) -> &dyn Tablet {
        self.secondary.as_ref()
    }

    /// Returns `true` if both products belong to the producing factory's family.
    pub fn is_compatible(&self) -> bool {
        self.primary.family() == self.factory && self.secondary.family() == self.factory
    }

    /// Splits the family into its two products.
    pub fn into_parts(self) -> (Box<dyn Laptop>, Box<dyn Tablet>) {
        (self.primary, self.secondary)
    }
}

impl fmt::Debug for ProductFamily {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ProductFamily")
            .field("factory", &self.factory)
            .field("primary", &self.primary.feature())
            .field("secondary", &self.secondary.feature())
            .finish()
    }
}

// =============================================================================
// Apple
// =============================================================================

/// Factory for the Apple family: [`MacPro`] and [`Ipad`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppleFactory;

impl AbstractFactory for AppleFactory {
    fn name(&self) -> &'static str {
        "Apple"
    }

    fn create_primary(&self) -> Box<dyn Laptop> {
        Box::new(MacPro)
    }

    fn create_secondary(&self) -> Box<dyn Tablet> {
        Box::new(Ipad)
    }
}

/// Apple's laptop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacPro;

impl Product for MacPro {
    fn feature(&self) -> &'static str {
        "Mac-Pro features"
    }

    fn family(&self) -> &'static str {
        "Apple"
    }
}

impl Laptop for MacPro {
    fn keyboard(&self) -> &'static str {
        "Mac-Pro has a keyboard"
    }
}

/// Apple's tablet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ipad;

impl Product for Ipad {
    fn feature(&self) -> &'static str {
        "Ipad features"
    }

    fn family(&self) -> &'static str {
        "Apple"
    }
}

impl Tablet for Ipad {}

// =============================================================================
// Asus
// =============================================================================

/// Factory for the Asus family: [`ZenBook`] and [`ZenPad`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsusFactory;

impl AbstractFactory for AsusFactory {
    fn name(&self) -> &'static str {
        "Asus"
    }

    fn create_primary(&self) -> Box<dyn Laptop> {
        Box::new(ZenBook)
    }

    fn create_secondary(&self) -> Box<dyn Tablet> {
        Box::new(ZenPad)
    }
}

/// Asus' laptop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZenBook;

impl Product for ZenBook {
    fn feature(&self) -> &'static str {
        "ZenBook features"
    }

    fn family(&self) -> &'static str {
        "Asus"
    }
}

impl Laptop for ZenBook {
    fn keyboard(&self) -> &'static str {
        "ZenBook has a keyboard"
    }
}

/// Asus' tablet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZenPad;

impl Product for ZenPad {
    fn feature(&self) -> &'static str {
        "ZenPad features"
    }

    fn family(&self) -> &'static str {
        "Asus"
    }
}

impl Tablet for ZenPad {}

static_assertions::assert_obj_safe!(AbstractFactory, Laptop, Tablet, Product);
static_assertions::assert_impl_all!(AppleFactory: AbstractFactory, Send, Sync, Copy);
static_assertions::assert_impl_all!(AsusFactory: AbstractFactory, Send, Sync, Copy);
