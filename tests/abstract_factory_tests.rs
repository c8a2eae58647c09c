#![cfg(feature = "abstract-factory")]
//! Integration tests for the Abstract Factory pattern.

use blueprints::creational::abstract_factory::{
    AbstractFactory, AppleFactory, AsusFactory, Laptop, Product, Tablet,
};
use rstest::rstest;

fn factories() -> Vec<Box<dyn AbstractFactory>> {
    vec![
        Box::new(AppleFactory) as Box<dyn AbstractFactory>,
        Box::new(AsusFactory),
    ]
}

/// Product names that belong to each family and never to the other one.
fn family_markers(family: &str) -> &'static [&'static str] {
    match family {
        "Apple" => &["Mac-Pro", "Ipad"],
        "Asus" => &["ZenBook", "ZenPad"],
        _ => &[],
    }
}

#[rstest]
fn every_factory_produces_non_empty_features() {
    for factory in factories() {
        let laptop = factory.create_primary();
        let tablet = factory.create_secondary();
        assert!(!laptop.feature().is_empty(), "{}", factory.name());
        assert!(!laptop.keyboard().is_empty(), "{}", factory.name());
        assert!(!tablet.feature().is_empty(), "{}", factory.name());
    }
}

#[rstest]
fn products_never_mention_another_family() {
    for factory in factories() {
        let family = factory.create_family();
        for other in ["Apple", "Asus"].into_iter().filter(|other| *other != factory.name()) {
            for marker in family_markers(other) {
                assert!(!family.primary().feature().contains(marker));
                assert!(!family.primary().keyboard().contains(marker));
                assert!(!family.secondary().feature().contains(marker));
            }
        }
    }
}

#[rstest]
fn apple_never_returns_zenbook() {
    let laptop = AppleFactory.create_primary();
    assert!(!laptop.feature().contains("ZenBook"));
    assert_eq!(laptop.feature(), "Mac-Pro features");
}

#[rstest]
#[case(&AppleFactory)]
#[case(&AsusFactory)]
fn family_is_compatible(#[case] factory: &dyn AbstractFactory) {
    let family = factory.create_family();
    assert!(family.is_compatible());
    assert_eq!(family.factory(), factory.name());
    assert_eq!(family.primary().family(), factory.name());
    assert_eq!(family.secondary().family(), factory.name());
}

#[rstest]
fn client_code_works_through_abstract_types_only() {
    fn client_request(factory: &dyn AbstractFactory) -> Vec<String> {
        let laptop: Box<dyn Laptop> = factory.create_primary();
        let tablet: Box<dyn Tablet> = factory.create_secondary();
        vec![
            format!("{} Laptop", factory.name()),
            laptop.feature().to_string(),
            laptop.keyboard().to_string(),
            format!("{} Tablet", factory.name()),
            tablet.feature().to_string(),
        ]
    }

    assert_eq!(
        client_request(&AsusFactory),
        vec![
            "Asus Laptop",
            "ZenBook features",
            "ZenBook has a keyboard",
            "Asus Tablet",
            "ZenPad features",
        ]
    );
}
