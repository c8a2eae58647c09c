//! Runtime registry of named pattern variants.
//!
//! Traits make unimplemented operations a compile error, but test suites
//! often want to pick variants by name at runtime. [`PatternCatalog`] stores
//! named entries for factories, builders, creators, and implementations.
//! An entry is either concrete or an [`Entry::Abstract`] base that was
//! declared without an implementation; dispatching through an abstract (or
//! unknown) entry fails fast with [`NotImplemented`].
//!
//! # Examples
//!
//! ```rust
//! use blueprints::catalog::PatternCatalog;
//! use blueprints::creational::abstract_factory::Product;
//!
//! let catalog = PatternCatalog::standard();
//!
//! let laptop = catalog.create_primary("Apple").unwrap();
//! assert_eq!(laptop.feature(), "Mac-Pro features");
//!
//! let error = catalog.create_primary("AbstractFactory").err().unwrap();
//! assert_eq!(error.operation, "create_primary");
//! assert_eq!(error.type_name, "AbstractFactory");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::creational::abstract_factory::{
    AbstractFactory, AppleFactory, AsusFactory, Laptop, Tablet,
};
use crate::creational::builder::{
    AppleBuilder, AsusBuilder, ComputerBuilder, Director, PartsList,
};
use crate::creational::factory_method::{self, Creator, CreatorA, CreatorB};
use crate::error::{NotImplemented, PatternResult};
use crate::structural::bridge::{Implementation, ImplementationA, ImplementationB};

/// A catalog slot: an abstract base or a concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<T> {
    /// Declared without an implementation. Every operation fails.
    Abstract,
    /// A usable variant.
    Concrete(T),
}

impl<T> Entry<T> {
    /// Returns `true` if this is [`Entry::Abstract`].
    pub const fn is_abstract(&self) -> bool {
        matches!(self, Self::Abstract)
    }

    /// Borrows the concrete variant, if any.
    pub const fn as_concrete(&self) -> Option<&T> {
        match self {
            Self::Abstract => None,
            Self::Concrete(value) => Some(value),
        }
    }
}

type BuilderConstructor = fn() -> Box<dyn ComputerBuilder>;
type ProductConstructor = Box<dyn Fn() -> Box<dyn factory_method::Product>>;

/// Named variants of the core patterns, dispatched at runtime.
#[derive(Default)]
pub struct PatternCatalog {
    factories: BTreeMap<String, Entry<Box<dyn AbstractFactory>>>,
    builders: BTreeMap<String, Entry<BuilderConstructor>>,
    creators: BTreeMap<String, Entry<ProductConstructor>>,
    implementations: BTreeMap<String, Entry<Box<dyn Implementation>>>,
}

impl PatternCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding every variant this crate ships, plus the
    /// abstract bases `AbstractFactory`, `ComputerBuilder`, `Creator`, and
    /// `Implementation`.
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.declare_factory("AbstractFactory");
        catalog.register_factory(AppleFactory);
        catalog.register_factory(AsusFactory);

        catalog.declare_builder("ComputerBuilder");
        catalog.register_builder::<AppleBuilder>("Apple");
        catalog.register_builder::<AsusBuilder>("Asus");

        catalog.declare_creator("Creator");
        catalog.register_creator("A", CreatorA);
        catalog.register_creator("B", CreatorB);

        catalog.declare_implementation("Implementation");
        catalog.register_implementation("ImplementationA", ImplementationA);
        catalog.register_implementation("ImplementationB", ImplementationB);

        catalog
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Registers a factory under its own [`AbstractFactory::name`].
    ///
    /// Replaces any entry already registered under that name.
    pub fn register_factory<F>(&mut self, factory: F)
    where
        F: AbstractFactory + 'static,
    {
        self.factories
            .insert(factory.name().to_string(), Entry::Concrete(Box::new(factory)));
    }

    /// Declares an abstract factory base under `name`.
    pub fn declare_factory(&mut self, name: impl Into<String>) {
        self.factories.insert(name.into(), Entry::Abstract);
    }

    /// Registers builder type `B` under `name`. Each build gets a fresh `B`.
    pub fn register_builder<B>(&mut self, name: impl Into<String>)
    where
        B: ComputerBuilder + Default + 'static,
    {
        let constructor: BuilderConstructor =
            || Box::new(B::default()) as Box<dyn ComputerBuilder>;
        self.builders.insert(name.into(), Entry::Concrete(constructor));
    }

    /// Declares an abstract builder base under `name`.
    pub fn declare_builder(&mut self, name: impl Into<String>) {
        self.builders.insert(name.into(), Entry::Abstract);
    }

    /// Registers `creator` under `name`.
    pub fn register_creator<C>(&mut self, name: impl Into<String>, creator: C)
    where
        C: Creator + 'static,
        C::Output: 'static,
    {
        let constructor: ProductConstructor =
            Box::new(move || Box::new(creator.create()) as Box<dyn factory_method::Product>);
        self.creators.insert(name.into(), Entry::Concrete(constructor));
    }

    /// Declares an abstract creator base under `name`.
    pub fn declare_creator(&mut self, name: impl Into<String>) {
        self.creators.insert(name.into(), Entry::Abstract);
    }

    /// Registers `implementation` under `name`.
    pub fn register_implementation<I>(&mut self, name: impl Into<String>, implementation: I)
    where
        I: Implementation + 'static,
    {
        self.implementations
            .insert(name.into(), Entry::Concrete(Box::new(implementation)));
    }

    /// Declares an abstract implementation base under `name`.
    pub fn declare_implementation(&mut self, name: impl Into<String>) {
        self.implementations.insert(name.into(), Entry::Abstract);
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Looks up the factory registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NotImplemented`] naming `operation` if the entry is abstract
    /// or missing.
    fn factory(&self, name: &str, operation: &'static str) -> PatternResult<&dyn AbstractFactory> {
        concrete(self.factories.get(name), name, operation).map(|factory| &**factory)
    }

    /// Returns the family name reported by the factory registered under
    /// `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NotImplemented`] naming `name` if `name` is abstract or
    /// unknown.
    pub fn factory_name(&self, name: &str) -> PatternResult<&'static str> {
        self.factory(name, "name").map(|factory| factory.name())
    }

    /// Creates the primary product of the factory registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NotImplemented`] if `name` is abstract or unknown.
    pub fn create_primary(&self, name: &str) -> PatternResult<Box<dyn Laptop>> {
        self.factory(name, "create_primary")
            .map(|factory| factory.create_primary())
    }

    /// Creates the secondary product of the factory registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NotImplemented`] if `name` is abstract or unknown.
    pub fn create_secondary(&self, name: &str) -> PatternResult<Box<dyn Tablet>> {
        self.factory(name, "create_secondary")
            .map(|factory| factory.create_secondary())
    }

    /// Creates a fresh builder of the type registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NotImplemented`] naming the first step, `build_case`, if
    /// `name` is abstract or unknown.
    pub fn new_builder(&self, name: &str) -> PatternResult<Box<dyn ComputerBuilder>> {
        concrete(self.builders.get(name), name, "build_case").map(|constructor| constructor())
    }

    /// Runs the director's full build on a fresh builder registered under
    /// `name` and returns the assembled parts.
    ///
    /// # Errors
    ///
    /// Returns [`NotImplemented`] naming the first step, `build_case`, if
    /// `name` is abstract or unknown.
    pub fn build_computer(&self, name: &str) -> PatternResult<PartsList> {
        self.direct(name, |director| director.build_computer())
    }

    /// Runs the director's partial build on a fresh builder registered under
    /// `name` and returns the assembled parts.
    ///
    /// # Errors
    ///
    /// Returns [`NotImplemented`] naming the first step, `build_case`, if
    /// `name` is abstract or unknown.
    pub fn build_tablet(&self, name: &str) -> PatternResult<PartsList> {
        self.direct(name, |director| director.build_tablet())
    }

    fn direct(&self, name: &str, sequence: fn(&mut Director<'_>)) -> PatternResult<PartsList> {
        let constructor = concrete(self.builders.get(name), name, "build_case")?;
        let mut builder = constructor();
        sequence(&mut Director::new(&mut *builder));
        Ok(builder.result().clone())
    }

    /// Creates a product through the creator registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NotImplemented`] naming `factory_method` if `name` is
    /// abstract or unknown.
    pub fn create_product(&self, name: &str) -> PatternResult<Box<dyn factory_method::Product>> {
        concrete(self.creators.get(name), name, "factory_method").map(|constructor| constructor())
    }

    /// Runs the primitive of the implementation registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NotImplemented`] if `name` is abstract or unknown.
    pub fn do_operation(&self, name: &str) -> PatternResult<i64> {
        concrete(self.implementations.get(name), name, "do_operation")
            .map(|implementation| implementation.do_operation())
    }

    /// Borrows the implementation registered under `name`, for linking into
    /// a bridge abstraction.
    ///
    /// # Errors
    ///
    /// Returns [`NotImplemented`] naming `do_operation` if `name` is abstract
    /// or unknown.
    pub fn implementation(&self, name: &str) -> PatternResult<&dyn Implementation> {
        concrete(self.implementations.get(name), name, "do_operation")
            .map(|implementation| &**implementation)
    }

    // =========================================================================
    // Listing
    // =========================================================================

    /// Registered factory names, sorted.
    pub fn factory_names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Registered builder names, sorted.
    pub fn builder_names(&self) -> Vec<&str> {
        self.builders.keys().map(String::as_str).collect()
    }

    /// Registered creator names, sorted.
    pub fn creator_names(&self) -> Vec<&str> {
        self.creators.keys().map(String::as_str).collect()
    }

    /// Registered implementation names, sorted.
    pub fn implementation_names(&self) -> Vec<&str> {
        self.implementations.keys().map(String::as_str).collect()
    }

    /// Returns `true` if `name` is a declared abstract factory.
    pub fn is_abstract_factory(&self, name: &str) -> bool {
        self.factories.get(name).is_some_and(Entry::is_abstract)
    }

    /// Returns `true` if `name` is a declared abstract builder.
    pub fn is_abstract_builder(&self, name: &str) -> bool {
        self.builders.get(name).is_some_and(Entry::is_abstract)
    }

    /// Returns `true` if `name` is a declared abstract creator.
    pub fn is_abstract_creator(&self, name: &str) -> bool {
        self.creators.get(name).is_some_and(Entry::is_abstract)
    }

    /// Returns `true` if `name` is a declared abstract implementation.
    pub fn is_abstract_implementation(&self, name: &str) -> bool {
        self.implementations.get(name).is_some_and(Entry::is_abstract)
    }
}

fn concrete<'a, T>(
    entry: Option<&'a Entry<T>>,
    name: &str,
    operation: &'static str,
) -> PatternResult<&'a T> {
    match entry {
        Some(Entry::Concrete(value)) => Ok(value),
        Some(Entry::Abstract) | None => {
            tracing::debug!(name, operation, "catalog: no concrete variant");
            Err(NotImplemented::new(operation, name))
        }
    }
}

impl fmt::Debug for PatternCatalog {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PatternCatalog")
            .field("factories", &self.factory_names())
            .field("builders", &self.builder_names())
            .field("creators", &self.creator_names())
            .field("implementations", &self.implementation_names())
            .finish()
    }
}
