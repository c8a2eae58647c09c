#![cfg(feature = "factory-method")]
//! Integration tests for the Factory Method pattern.

use blueprints::creational::factory_method::{
    Creator, CreatorA, CreatorB, Product, ProductA, ProductB, ProductKind,
};
use rstest::rstest;
use std::any::TypeId;

fn output_type<C: Creator>(_creator: &C) -> TypeId
where
    C::Output: 'static,
{
    TypeId::of::<C::Output>()
}

fn client_code<C: Creator>(creator: &C) -> ProductKind {
    let product = creator.create();
    product.operation();
    product.kind()
}

#[rstest]
fn creator_a_maps_to_product_a() {
    assert_eq!(output_type(&CreatorA), TypeId::of::<ProductA>());
    assert_eq!(client_code(&CreatorA), ProductKind::A);
}

#[rstest]
fn creator_b_maps_to_product_b() {
    assert_eq!(output_type(&CreatorB), TypeId::of::<ProductB>());
    assert_eq!(client_code(&CreatorB), ProductKind::B);
}

#[rstest]
fn operation_runs_through_trait_objects() {
    let products: Vec<Box<dyn Product>> = vec![
        Box::new(CreatorA.create()) as Box<dyn Product>,
        Box::new(CreatorB.create()),
    ];
    let kinds: Vec<ProductKind> = products
        .iter()
        .map(|product| {
            product.operation();
            product.kind()
        })
        .collect();
    assert_eq!(kinds, vec![ProductKind::A, ProductKind::B]);
}

#[rstest]
fn custom_creator_only_overrides_factory_method() {
    struct Repeating;

    impl Creator for Repeating {
        type Output = ProductB;

        fn factory_method(&self) -> Self::Output {
            ProductB
        }
    }

    assert_eq!(Repeating.create(), ProductB);
    assert_eq!(client_code(&Repeating), ProductKind::B);
}
