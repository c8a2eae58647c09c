//! Factory Method: let implementors pick the concrete product type.
//!
//! [`Creator::create`] is a template operation built on a single extension
//! point, [`Creator::factory_method`]. Concrete creators override only the
//! extension point; everything else is inherited unchanged.
//!
//! # Examples
//!
//! ```rust
//! use blueprints::creational::factory_method::{Creator, CreatorA, Product, ProductKind};
//!
//! let product = CreatorA.create();
//! product.operation();
//! assert_eq!(product.kind(), ProductKind::A);
//! ```

use std::fmt;

/// Identifies a concrete product variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductKind {
    /// Made by [`CreatorA`].
    A,
    /// Made by [`CreatorB`].
    B,
}

impl fmt::Display for ProductKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => formatter.write_str("ProductA"),
            Self::B => formatter.write_str("ProductB"),
        }
    }
}

/// Interface every product made through a [`Creator`] implements.
pub trait Product {
    /// The product's domain action.
    fn operation(&self);

    /// Which concrete variant this is.
    fn kind(&self) -> ProductKind;
}

/// Declares the factory method and the template that uses it.
pub trait Creator {
    /// The concrete product this creator makes.
    type Output: Product;

    /// The extension point: returns a new product instance.
    fn factory_method(&self) -> Self::Output;

    /// Creates a product through [`Creator::factory_method`].
    ///
    /// No post-processing happens between the factory method and the caller.
    fn create(&self) -> Self::Output {
        self.factory_method()
    }
}

/// Creator whose factory method yields [`ProductA`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreatorA;

impl Creator for CreatorA {
    type Output = ProductA;

    fn factory_method(&self) -> Self::Output {
        ProductA
    }
}

/// Creator whose factory method yields [`ProductB`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreatorB;

impl Creator for CreatorB {
    type Output = ProductB;

    fn factory_method(&self) -> Self::Output {
        ProductB
    }
}

/// First concrete product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductA;

impl Product for ProductA {
    fn operation(&self) {}

    fn kind(&self) -> ProductKind {
        ProductKind::A
    }
}

/// Second concrete product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductB;

impl Product for ProductB {
    fn operation(&self) {}

    fn kind(&self) -> ProductKind {
        ProductKind::B
    }
}

static_assertions::assert_obj_safe!(Product);
static_assertions::assert_type_eq_all!(<CreatorA as Creator>::Output, ProductA);
static_assertions::assert_type_eq_all!(<CreatorB as Creator>::Output, ProductB);
