//! Concurrent first access to the metadata cache.

use beanmeta_tests::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

const THREADS: usize = 8;

#[test]
fn test_concurrent_first_access_builds_once() {
    init_tracing();
    let introspector = Arc::new(
        CountingIntrospector::new(full_registry().unwrap()).with_delay(Duration::from_millis(20)),
    );
    let cache = Arc::new(MetadataCache::new(Arc::clone(&introspector)));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                cache.get_metadata(&ClassId::new(DISCOUNTED_PRODUCT)).unwrap()
            })
        })
        .collect();

    let results: Vec<Arc<BeanMetadata>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    // Every thread sees the same fully built instance
    for metadata in &results[1..] {
        assert!(Arc::ptr_eq(&results[0], metadata));
    }
    assert_eq!(results[0].constrained_properties().count(), 4);

    // Each class in the hierarchy was introspected exactly once
    assert_eq!(introspector.count(DISCOUNTED_PRODUCT), 1);
    assert_eq!(introspector.count(PRODUCT), 1);
    assert_eq!(introspector.count(ENTITY), 1);
    assert_eq!(introspector.count(NAMED), 1);
    assert_eq!(introspector.total(), 4);
}

#[test]
fn test_concurrent_access_to_different_classes() {
    init_tracing();
    let introspector = Arc::new(CountingIntrospector::new(full_registry().unwrap()));
    let provider = Arc::new(DescriptorProvider::new(Arc::clone(&introspector)));
    let classes = [ORDER, CUSTOMER, ACCOUNT, UNCONSTRAINT_ENTITY, CATEGORY, CATALOG];

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let provider = Arc::clone(&provider);
            thread::spawn(move || {
                for offset in 0..classes.len() {
                    let class = classes[(i + offset) % classes.len()];
                    let bean = provider.constraints_for_class(class).unwrap();
                    assert_eq!(bean.element_class().name(), class);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for class in classes {
        assert_eq!(introspector.count(class), 1, "{} introspected more than once", class);
    }
    assert_eq!(provider.cache().len(), classes.len());
}

#[test]
fn test_published_metadata_is_stable() {
    init_tracing();
    let cache = MetadataCache::new(shop_registry().unwrap());
    let order = ClassId::new(ORDER);

    let first = cache.get_metadata(&order).unwrap();
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let expected = Arc::clone(&first);
            let cache = &cache;
            let order = order.clone();
            move || Arc::ptr_eq(&expected, &cache.get_metadata(&order).unwrap())
        })
        .collect();

    thread::scope(|scope| {
        let joins: Vec<_> = handles.into_iter().map(|f| scope.spawn(f)).collect();
        for join in joins {
            assert!(join.join().unwrap());
        }
    });
}

/// Fails its first introspection after a pause; later calls succeed.
struct FailsFirst {
    inner: ClassRegistry,
    calls: AtomicUsize,
}

impl RawTypeIntrospector for FailsFirst {
    fn introspect(&self, class: &ClassId) -> IntrospectionResult<RawClass> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            thread::sleep(Duration::from_millis(100));
            return Err(IntrospectionError::unsupported(class, "not yet loaded"));
        }
        thread::sleep(Duration::from_millis(50));
        self.inner.introspect(class)
    }
}

#[test]
fn test_waiter_on_failed_build_publishes_the_instance() {
    init_tracing();
    let introspector = Arc::new(FailsFirst {
        inner: shop_registry().unwrap(),
        calls: AtomicUsize::new(0),
    });
    let cache = Arc::new(MetadataCache::new(Arc::clone(&introspector)));
    let order = ClassId::new(ORDER);

    let first = {
        let cache = Arc::clone(&cache);
        let order = order.clone();
        thread::spawn(move || cache.get_metadata(&order))
    };
    // Start the second caller while the first build is still running
    while introspector.calls.load(Ordering::SeqCst) == 0 {
        thread::sleep(Duration::from_millis(1));
    }
    let second = {
        let cache = Arc::clone(&cache);
        let order = order.clone();
        thread::spawn(move || cache.get_metadata(&order))
    };

    assert!(matches!(first.join().unwrap(), Err(MetadataError::Introspection(_))));
    let published = second.join().unwrap().unwrap();

    // Every later caller sees the instance the second caller built
    for _ in 0..3 {
        let later = cache.get_metadata(&order).unwrap();
        assert!(Arc::ptr_eq(&published, &later));
    }
    assert_eq!(introspector.calls.load(Ordering::SeqCst), 2);
    assert_eq!(cache.len(), 1);
}
