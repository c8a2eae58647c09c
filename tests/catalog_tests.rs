#![cfg(feature = "catalog")]
//! Integration tests for the runtime pattern catalog.

use blueprints::catalog::PatternCatalog;
use blueprints::creational::abstract_factory::{AbstractFactory, Laptop, Product, Tablet};
use blueprints::creational::builder::ComputerBuilder;
use blueprints::creational::factory_method::Product as _;
use blueprints::creational::factory_method::ProductKind;
use blueprints::error::NotImplemented;
use blueprints::structural::bridge::{Abstraction, Control, ExtendedAbstraction, Implementation};
use rstest::{fixture, rstest};

#[fixture]
fn catalog() -> PatternCatalog {
    PatternCatalog::standard()
}

// =============================================================================
// Abstract Bases
// =============================================================================

#[rstest]
#[case::primary("create_primary")]
#[case::secondary("create_secondary")]
fn abstract_factory_names_the_missing_method(
    catalog: PatternCatalog,
    #[case] operation: &'static str,
) {
    let error = match operation {
        "create_primary" => catalog.create_primary("AbstractFactory").err(),
        _ => catalog.create_secondary("AbstractFactory").err(),
    };
    assert_eq!(error, Some(NotImplemented::new(operation, "AbstractFactory")));
}

#[rstest]
fn abstract_builder_fails_before_any_step(catalog: PatternCatalog) {
    let error = catalog.build_tablet("ComputerBuilder").unwrap_err();
    assert_eq!(error.operation, "build_case");
    assert_eq!(
        error.to_string(),
        "ComputerBuilder has not implemented method 'build_case'"
    );
}

#[rstest]
#[case::declared("ComputerBuilder")]
#[case::unknown("Dell")]
fn new_builder_names_the_first_step(catalog: PatternCatalog, #[case] name: &str) {
    let error = catalog.new_builder(name).err();
    assert_eq!(error, Some(NotImplemented::new("build_case", name)));
}

#[rstest]
fn abstract_factory_has_no_name(catalog: PatternCatalog) {
    assert!(catalog.is_abstract_factory("AbstractFactory"));
    assert_eq!(
        catalog.factory_name("AbstractFactory"),
        Err(NotImplemented::new("name", "AbstractFactory"))
    );
    assert_eq!(catalog.factory_name("Apple"), Ok("Apple"));
}

#[rstest]
fn every_abstract_base_is_reported(catalog: PatternCatalog) {
    assert!(catalog.is_abstract_builder("ComputerBuilder"));
    assert!(catalog.is_abstract_creator("Creator"));
    assert!(catalog.is_abstract_implementation("Implementation"));
    assert!(!catalog.is_abstract_builder("Asus"));
    assert!(!catalog.is_abstract_creator("B"));
    assert!(!catalog.is_abstract_implementation("ImplementationB"));
}

#[rstest]
fn abstract_creator_names_factory_method(catalog: PatternCatalog) {
    let error = catalog.create_product("Creator").err();
    assert_eq!(error, Some(NotImplemented::new("factory_method", "Creator")));
}

#[rstest]
fn abstract_implementation_names_do_operation(catalog: PatternCatalog) {
    assert_eq!(
        catalog.do_operation("Implementation"),
        Err(NotImplemented::new("do_operation", "Implementation"))
    );
    assert!(catalog.implementation("Implementation").is_err());
}

// =============================================================================
// Concrete Variants
// =============================================================================

#[rstest]
#[case("Apple", "Mac-Pro features", "Ipad features")]
#[case("Asus", "ZenBook features", "ZenPad features")]
fn concrete_factories_create_their_family(
    catalog: PatternCatalog,
    #[case] name: &str,
    #[case] primary: &str,
    #[case] secondary: &str,
) {
    let laptop: Box<dyn Laptop> = catalog.create_primary(name).unwrap();
    let tablet: Box<dyn Tablet> = catalog.create_secondary(name).unwrap();
    assert_eq!(laptop.feature(), primary);
    assert_eq!(tablet.feature(), secondary);
    assert_eq!(laptop.family(), tablet.family());
}

#[rstest]
#[case("Apple")]
#[case("Asus")]
fn concrete_builders_follow_director_orderings(catalog: PatternCatalog, #[case] name: &str) {
    assert_eq!(catalog.build_computer(name).unwrap(), ["case", "screen", "keyboard"]);
    assert_eq!(catalog.build_tablet(name).unwrap(), ["case", "screen"]);
}

#[rstest]
fn new_builder_is_fresh_each_time(catalog: PatternCatalog) {
    let Ok(mut first) = catalog.new_builder("Apple") else {
        panic!("Apple builder is registered");
    };
    first.build_case();
    let Ok(second) = catalog.new_builder("Apple") else {
        panic!("Apple builder is registered");
    };
    assert_eq!(*first.result(), ["case"]);
    assert!(second.result().is_empty());
}

#[rstest]
#[case("A", ProductKind::A)]
#[case("B", ProductKind::B)]
fn creators_map_to_documented_products(
    catalog: PatternCatalog,
    #[case] name: &str,
    #[case] kind: ProductKind,
) {
    let Ok(product) = catalog.create_product(name) else {
        panic!("creator {name} is registered");
    };
    product.operation();
    assert_eq!(product.kind(), kind);
}

#[rstest]
fn implementations_link_into_bridges(catalog: PatternCatalog) {
    let implementation: &dyn Implementation = catalog.implementation("ImplementationB").unwrap();
    let extended = ExtendedAbstraction::new(implementation);
    assert_eq!(extended.operation(), 10);
    assert_eq!(
        Abstraction::new(catalog.implementation("ImplementationA").unwrap()).operation(),
        catalog.do_operation("ImplementationA").unwrap()
    );
}

// =============================================================================
// Registration
// =============================================================================

#[rstest]
fn custom_variants_can_be_registered() {
    struct Dell;

    impl AbstractFactory for Dell {
        fn name(&self) -> &'static str {
            "Dell"
        }

        fn create_primary(&self) -> Box<dyn Laptop> {
            Box::new(Xps)
        }

        fn create_secondary(&self) -> Box<dyn Tablet> {
            Box::new(Venue)
        }
    }

    struct Xps;
    impl Product for Xps {
        fn feature(&self) -> &'static str {
            "XPS features"
        }

        fn family(&self) -> &'static str {
            "Dell"
        }
    }
    impl Laptop for Xps {
        fn keyboard(&self) -> &'static str {
            "XPS has a keyboard"
        }
    }

    struct Venue;
    impl Product for Venue {
        fn feature(&self) -> &'static str {
            "Venue features"
        }

        fn family(&self) -> &'static str {
            "Dell"
        }
    }
    impl Tablet for Venue {}

    let mut catalog = PatternCatalog::new();
    assert!(catalog.create_primary("Dell").is_err());

    catalog.register_factory(Dell);
    assert_eq!(catalog.factory_names(), vec!["Dell"]);
    assert!(Dell.create_family().is_compatible());
    assert_eq!(
        catalog.create_secondary("Dell").map(|tablet| tablet.feature()).ok(),
        Some("Venue features")
    );
}

#[rstest]
fn empty_catalog_lists_nothing() {
    let catalog = PatternCatalog::new();
    assert!(catalog.factory_names().is_empty());
    assert!(catalog.builder_names().is_empty());
    assert!(catalog.creator_names().is_empty());
    assert!(catalog.implementation_names().is_empty());
}
