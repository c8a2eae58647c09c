//! Builder and Director: stepwise construction with reusable step orderings.
//!
//! A [`ComputerBuilder`] declares the construction steps common to every
//! builder. Concrete builders own the product they assemble and may store
//! it however they like. The [`Director`] fixes the order in which steps are
//! called, independent of which builder is plugged in; it borrows the builder
//! and never owns it, so the result is always read back from the builder.
//!
//! # Examples
//!
//! ```rust
//! use blueprints::creational::builder::{AppleBuilder, AsusBuilder, ComputerBuilder, Director};
//!
//! let mut mac_pro = AppleBuilder::new();
//! let mut zen_pad = AsusBuilder::new();
//!
//! let mut director = Director::new(&mut mac_pro);
//! director.build_computer();
//! let previous = director.set_builder(&mut zen_pad);
//! director.build_tablet();
//!
//! assert_eq!(previous.result().as_slice(), ["case", "screen", "keyboard"]);
//! assert_eq!(zen_pad.result().as_slice(), ["case", "screen"]);
//! ```

use std::fmt;
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Part name appended by [`ComputerBuilder::build_case`].
pub const CASE: &str = "case";
/// Part name appended by [`ComputerBuilder::build_screen`].
pub const SCREEN: &str = "screen";
/// Part name appended by [`ComputerBuilder::build_keyboard`].
pub const KEYBOARD: &str = "keyboard";

/// Ordered, append-only sequence of part names.
///
/// Insertion order is significant and duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PartsList {
    parts: Vec<String>,
}

impl PartsList {
    /// Creates an empty parts list.
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Appends a part at the end of the list.
    pub fn push(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// Returns the parts as a slice, in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.parts
    }

    /// Consumes the list, returning the underlying vector.
    pub fn into_vec(self) -> Vec<String> {
        self.parts
    }
}

impl Deref for PartsList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.parts
    }
}

impl fmt::Display for PartsList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.parts.join(", "))
    }
}

impl<S: Into<String>> FromIterator<S> for PartsList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for PartsList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.parts.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a PartsList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

impl<const N: usize> PartialEq<[&str; N]> for PartsList {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.parts.len() == N && self.parts.iter().zip(other).all(|(part, other)| part == other)
    }
}

/// Construction steps shared by every computer builder.
///
/// Each step appends one fixed part name to the builder's product and
/// returns nothing. A builder assembles exactly one product: there is no
/// reset, so a fresh product needs a fresh builder.
pub trait ComputerBuilder {
    /// Appends [`CASE`].
    fn build_case(&mut self);

    /// Appends [`SCREEN`].
    fn build_screen(&mut self);

    /// Appends [`KEYBOARD`].
    fn build_keyboard(&mut self);

    /// The parts assembled so far. Readable at any point.
    fn result(&self) -> &PartsList;
}

// =============================================================================
// Apple
// =============================================================================

/// Product assembled by [`AppleBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppleComputer {
    parts: PartsList,
}

impl AppleComputer {
    /// Creates a computer with no parts.
    pub const fn new() -> Self {
        Self {
            parts: PartsList::new(),
        }
    }

    /// Fits a part.
    pub fn build(&mut self, part: &str) {
        self.parts.push(part);
    }

    /// Every part fitted so far.
    pub const fn all(&self) -> &PartsList {
        &self.parts
    }
}

/// Builder producing an [`AppleComputer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppleBuilder {
    computer: AppleComputer,
}

impl AppleBuilder {
    /// Creates a builder around a fresh [`AppleComputer`].
    pub const fn new() -> Self {
        Self {
            computer: AppleComputer::new(),
        }
    }

    /// Consumes the builder, handing back the assembled computer.
    pub fn into_product(self) -> AppleComputer {
        self.computer
    }

    /// Consumes the builder, handing back the assembled parts.
    pub fn into_parts(self) -> PartsList {
        self.computer.parts
    }
}

impl ComputerBuilder for AppleBuilder {
    fn build_case(&mut self) {
        self.computer.build(CASE);
    }

    fn build_screen(&mut self) {
        self.computer.build(SCREEN);
    }

    fn build_keyboard(&mut self) {
        self.computer.build(KEYBOARD);
    }

    fn result(&self) -> &PartsList {
        self.computer.all()
    }
}

// =============================================================================
// Asus
// =============================================================================

/// Product assembled by [`AsusBuilder`].
///
/// Shares no interface with [`AppleComputer`]; only the builders agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsusComputer {
    parts: PartsList,
}

impl AsusComputer {
    /// Creates a computer with no parts.
    pub const fn new() -> Self {
        Self {
            parts: PartsList::new(),
        }
    }

    /// Adds a part.
    pub fn add(&mut self, part: &str) {
        self.parts.push(part);
    }

    /// Every part added so far.
    pub const fn get_all(&self) -> &PartsList {
        &self.parts
    }
}

/// Builder producing an [`AsusComputer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsusBuilder {
    computer: AsusComputer,
}

impl AsusBuilder {
    /// Creates a builder around a fresh [`AsusComputer`].
    pub const fn new() -> Self {
        Self {
            computer: AsusComputer::new(),
        }
    }

    /// Consumes the builder, handing back the assembled computer.
    pub fn into_product(self) -> AsusComputer {
        self.computer
    }

    /// Consumes the builder, handing back the assembled parts.
    pub fn into_parts(self) -> PartsList {
        self.computer.parts
    }
}

impl ComputerBuilder for AsusBuilder {
    fn build_case(&mut self) {
        self.computer.add(CASE);
    }

    fn build_screen(&mut self) {
        self.computer.add(SCREEN);
    }

    fn build_keyboard(&mut self) {
        self.computer.add(KEYBOARD);
    }

    fn result(&self) -> &PartsList {
        self.computer.get_all()
    }
}

// =============================================================================
// Director
// =============================================================================

/// Sequences builder steps into reusable product configurations.
///
/// The director borrows its active builder mutably for `'a`; the caller keeps
/// ownership and reads the product back from the builder. The director holds
/// no product state of its own.
pub struct Director<'a> {
    builder: &'a mut dyn ComputerBuilder,
}

impl<'a> Director<'a> {
    /// Creates a director driving `builder`.
    pub fn new(builder: &'a mut dyn ComputerBuilder) -> Self {
        Self { builder }
    }

    /// Replaces the active builder, returning the one previously in use.
    ///
    /// Steps issued after the swap only touch the new builder.
    pub fn set_builder(
        &mut self,
        builder: &'a mut dyn ComputerBuilder,
    ) -> &'a mut dyn ComputerBuilder {
        std::mem::replace(&mut self.builder, builder)
    }

    /// The builder currently being driven.
    pub fn builder(&self) -> &dyn ComputerBuilder {
        &*self.builder
    }

    /// Full build: case, screen, keyboard.
    pub fn build_computer(&mut self) {
        tracing::trace!("director: full build");
        self.builder.build_case();
        self.builder.build_screen();
        self.builder.build_keyboard();
    }

    /// Partial build: case, screen.
    pub fn build_tablet(&mut self) {
        tracing::trace!("director: partial build");
        self.builder.build_case();
        self.builder.build_screen();
    }
}

impl fmt::Debug for Director<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Director")
            .field("parts", self.builder.result())
            .finish()
    }
}

static_assertions::assert_obj_safe!(ComputerBuilder);
static_assertions::assert_impl_all!(AppleBuilder: ComputerBuilder, Send, Sync, Clone);
static_assertions::assert_impl_all!(AsusBuilder: ComputerBuilder, Send, Sync, Clone);
