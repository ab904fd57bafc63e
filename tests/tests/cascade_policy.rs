//! Cascade merging policies and build failures.

use beanmeta_tests::prelude::*;
use pretty_assertions::assert_eq;

fn registry_with_partial_cascade() -> ClassRegistry {
    let mut builder = ClassRegistryBuilder::new();
    register_shop(&mut builder).unwrap();
    builder
        .add_class("Invoice")
        .member(RawMember::field("lines").typed("List<Line>").constraint(not_empty()))
        .member(RawMember::getter("getLines").typed("List<Line>").cascaded())
        .done()
        .unwrap();
    builder
        .add_class("Report")
        .member(RawMember::method("summarize", 2, true).constraint(not_null()))
        .done()
        .unwrap();
    builder
        .add_class("Legacy")
        .unsupported("raw generic type")
        .done()
        .unwrap();
    builder.add_class("LegacyOrder").extends("Legacy").done().unwrap();
    builder.build()
}

#[test]
fn test_permissive_policy_or_combines_cascade() {
    init_tracing();
    let provider = DescriptorProvider::new(registry_with_partial_cascade());
    let invoice = provider.constraints_for_class("Invoice").unwrap();

    let lines = invoice.constraints_for_property("lines").unwrap();
    assert!(lines.is_cascaded());
    assert_eq!(lines.constraint_descriptors().len(), 1);
}

#[test]
fn test_strict_policy_rejects_partial_cascade() {
    init_tracing();
    let provider =
        DescriptorProvider::with_config(registry_with_partial_cascade(), MetadataConfig::new().strict());

    let result = provider.constraints_for_class("Invoice");
    assert_eq!(
        result.err(),
        Some(MetadataError::ConflictingCascadeDeclaration {
            class: ClassId::new("Invoice"),
            property: "lines".to_string(),
        })
    );

    // Classes without disagreement still resolve under the strict policy
    let customer = provider.constraints_for_class(CUSTOMER).unwrap();
    assert!(customer.constraints_for_property("orderList").unwrap().is_cascaded());
}

#[test]
fn test_constrained_method_that_is_not_a_getter() {
    init_tracing();
    let provider = DescriptorProvider::new(registry_with_partial_cascade());

    let result = provider.constraints_for_class("Report");
    assert!(matches!(result, Err(MetadataError::NotAProperty { ref member, .. }) if member == "summarize"));
}

#[test]
fn test_ancestor_introspection_failure_aborts_build() {
    init_tracing();
    let introspector = std::sync::Arc::new(CountingIntrospector::new(registry_with_partial_cascade()));
    let provider = DescriptorProvider::new(std::sync::Arc::clone(&introspector));

    for attempt in 1..=2 {
        let result = provider.constraints_for_class("LegacyOrder");
        assert!(matches!(
            result,
            Err(MetadataError::Introspection(IntrospectionError::Unsupported { .. }))
        ));
        // Nothing is cached, so every attempt introspects again
        assert_eq!(introspector.count("LegacyOrder"), attempt);
        assert!(provider.cache().is_empty());
    }
}
