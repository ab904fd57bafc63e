//! Inheritance and property identity merging against the catalog model.

use beanmeta_tests::prelude::*;
use pretty_assertions::assert_eq;

fn provider() -> DescriptorProvider {
    init_tracing();
    DescriptorProvider::new(catalog_registry().unwrap())
}

fn kinds(property: PropertyDescriptor<'_>) -> Vec<String> {
    let mut kinds: Vec<String> = property
        .constraint_descriptors()
        .iter()
        .map(|c| c.kind().to_string())
        .collect();
    kinds.sort();
    kinds
}

#[test]
fn test_constraints_accumulate_down_the_hierarchy() {
    let provider = provider();
    let bean = provider.constraints_for_class(DISCOUNTED_PRODUCT).unwrap();

    let names: Vec<&str> = bean.constrained_properties().names().collect();
    assert_eq!(names, vec!["discount", "id", "name", "price"]);

    assert_eq!(kinds(bean.constraints_for_property("id").unwrap()), vec!["NotNull"]);
    assert_eq!(kinds(bean.constraints_for_property("name").unwrap()), vec!["NotNull", "Size"]);
    assert_eq!(
        kinds(bean.constraints_for_property("price").unwrap()),
        vec!["DecimalMax", "DecimalMin"]
    );
    assert_eq!(kinds(bean.constraints_for_property("discount").unwrap()), vec!["Max", "Min"]);
    assert!(bean.constraints_for_property("description").is_none());
}

#[test]
fn test_class_constraints_are_inherited() {
    let provider = provider();
    for class in [ENTITY, PRODUCT, DISCOUNTED_PRODUCT] {
        let bean = provider.constraints_for_class(class).unwrap();
        assert!(bean.has_constraints(), "{} should inherit ValidEntity", class);
        assert_eq!(bean.constraint_descriptors()[0].kind(), "ValidEntity");
    }

    let named = provider.constraints_for_class(NAMED).unwrap();
    assert!(!named.has_constraints());
    assert!(named.is_bean_constrained());
}

#[test]
fn test_identical_declarations_collapse_across_levels() {
    let provider = provider();
    let product = provider.constraints_for_class(PRODUCT).unwrap();

    // NotNull on Product.getName() and Named.getName() is one constraint
    let name = product.constraints_for_property("name").unwrap();
    assert_eq!(name.constraint_descriptors().len(), 2);
    assert_eq!(
        name.member_kinds().collect::<Vec<_>>(),
        vec![MemberKind::Field, MemberKind::Method]
    );
}

#[test]
fn test_subclass_type_shadows_ancestor_type() {
    let provider = provider();

    let product = provider.constraints_for_class(PRODUCT).unwrap();
    let price = product.constraints_for_property("price").unwrap();
    assert_eq!(price.element_type(), Some("BigDecimal"));

    let discounted = provider.constraints_for_class(DISCOUNTED_PRODUCT).unwrap();
    let price = discounted.constraints_for_property("price").unwrap();
    assert_eq!(price.element_type(), Some("Money"));
}

#[test]
fn test_ancestor_metadata_is_unaffected_by_subclass() {
    let provider = provider();
    let discounted = provider.constraints_for_class(DISCOUNTED_PRODUCT).unwrap();
    let product = provider.constraints_for_class(PRODUCT).unwrap();

    assert!(discounted.constraints_for_property("discount").is_some());
    assert!(product.constraints_for_property("discount").is_none());
    assert_eq!(kinds(product.constraints_for_property("price").unwrap()), vec!["DecimalMin"]);
}

#[test]
fn test_self_referencing_cascade() {
    let provider = provider();
    let category = provider.constraints_for_class(CATEGORY).unwrap();

    let parent = category.constraints_for_property("parent").unwrap();
    assert!(parent.is_cascaded());
    assert_eq!(parent.element_type(), Some(CATEGORY));
    assert!(!category.has_constraints());
    assert!(category.is_bean_constrained());
}

#[test]
fn test_cascaded_type_without_constraints() {
    let provider = provider();
    let catalog = provider.constraints_for_class(CATALOG).unwrap();

    assert!(!catalog.has_constraints());
    assert!(catalog.is_bean_constrained());
    assert!(catalog.metadata().is_cascaded());
    assert!(catalog.constrained_properties().is_empty());
}

#[test]
fn test_direct_ancestors_are_recorded() {
    let provider = provider();
    let product = provider.constraints_for_class(PRODUCT).unwrap();
    assert_eq!(
        product.metadata().direct_ancestors(),
        &[ClassId::new(ENTITY), ClassId::new(NAMED)]
    );
}
