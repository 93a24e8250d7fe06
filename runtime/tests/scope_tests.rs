use std::sync::{Arc, Mutex};

use beanforge::{Priority, ScopeBuilder};
use pretty_assertions::assert_eq;

/// Scenario A: `start(); get(M); close();` — a bean's `PostConstruct`
/// runs exactly once on `start`, and its `PreDestroy` runs exactly once
/// on `close`, regardless of how many times `close` is called afterward.
#[test]
fn lifecycle_hooks_run_exactly_once() {
    let post_count = Arc::new(Mutex::new(0));
    let pre_count = Arc::new(Mutex::new(0));

    let mut builder = ScopeBuilder::new();
    builder.bind::<i32>("Heater", None, vec![], Priority::Normal, None, 1);
    builder.on_post_construct("Heater", {
        let post_count = Arc::clone(&post_count);
        move || {
            *post_count.lock().unwrap() += 1;
            Ok(())
        }
    });
    builder.on_pre_destroy("Heater", {
        let pre_count = Arc::clone(&pre_count);
        move || {
            *pre_count.lock().unwrap() += 1;
            Ok(())
        }
    });

    let scope = builder.build();
    assert_eq!(*post_count.lock().unwrap(), 0);

    scope.start().unwrap();
    assert_eq!(*post_count.lock().unwrap(), 1);

    let _heater = scope.get::<i32>("Heater", None).unwrap();

    scope.close().unwrap();
    scope.close().unwrap();
    scope.close().unwrap();
    assert_eq!(*pre_count.lock().unwrap(), 1);
}

/// Scenario D: with a primary, a normal, and a secondary candidate all
/// registered, resolution prefers primary; removing it falls back to
/// normal, then to secondary once both are gone. Two primaries is an
/// error.
#[test]
fn priority_ladder_falls_back_tier_by_tier() {
    let build = |include_primary: bool, include_normal: bool| {
        let mut builder = ScopeBuilder::new();
        if include_normal {
            builder.bind::<&str>("Pump", None, vec![], Priority::Normal, None, "p1");
        }
        builder.bind::<&str>("Pump", None, vec![], Priority::Secondary, None, "p2");
        if include_primary {
            builder.bind::<&str>("Pump", None, vec![], Priority::Primary, None, "p3");
        }
        builder.build()
    };

    assert_eq!(*build(true, true).get::<&str>("Pump", None).unwrap(), "p3");
    assert_eq!(*build(false, true).get::<&str>("Pump", None).unwrap(), "p1");
    assert_eq!(*build(false, false).get::<&str>("Pump", None).unwrap(), "p2");

    let mut builder = ScopeBuilder::new();
    builder.bind::<&str>("Pump", None, vec![], Priority::Primary, None, "p3");
    builder.bind::<&str>("Pump", None, vec![], Priority::Primary, None, "p4");
    let scope = builder.build();
    assert!(matches!(
        scope.get::<&str>("Pump", None).unwrap_err(),
        beanforge::ScopeError::MultiplePrimary { count: 2, .. }
    ));
}

/// Scenario E: a supplied binding always wins, even over a primary
/// candidate for the same key.
#[test]
fn supplied_binding_wins_over_primary() {
    let mut builder = ScopeBuilder::new();
    builder.bind::<&str>("Heater", None, vec![], Priority::Primary, None, "electric");
    builder.bind::<&str>("Heater", None, vec![], Priority::Supplied, None, "test-double");
    let scope = builder.build();

    assert_eq!(*scope.get::<&str>("Heater", None).unwrap(), "test-double");
}

/// Scenario F: four beans with `@Priority(100)`, `@Priority(1000)`, no
/// annotation (default 5000), and `@Priority(50)` sort ascending by that
/// declared value.
#[test]
fn list_by_priority_sorts_by_declared_annotation_value() {
    let mut builder = ScopeBuilder::new();
    builder.bind::<&str>("Filter", Some("a"), vec![], Priority::Normal, Some(100), "hundred");
    builder.bind::<&str>("Filter", Some("b"), vec![], Priority::Normal, Some(1000), "thousand");
    builder.bind::<&str>("Filter", Some("c"), vec![], Priority::Normal, None, "default");
    builder.bind::<&str>("Filter", Some("d"), vec![], Priority::Normal, Some(50), "fifty");
    let scope = builder.build();

    let ordered = scope.list_by_priority::<&str>("Filter").unwrap();
    let as_vec = ordered.iter().map(|s| **s).collect::<Vec<_>>();
    assert_eq!(as_vec, vec!["fifty", "hundred", "thousand", "default"]);
}

#[test]
fn list_by_priority_keeps_insertion_order_when_nothing_declares_it() {
    let mut builder = ScopeBuilder::new();
    builder.bind::<&str>("Filter", Some("a"), vec![], Priority::Secondary, None, "oil");
    builder.bind::<&str>("Filter", Some("b"), vec![], Priority::Primary, None, "electric");
    builder.bind::<&str>("Filter", Some("c"), vec![], Priority::Normal, None, "gas");
    let scope = builder.build();

    let ordered = scope.list_by_priority::<&str>("Filter").unwrap();
    let as_vec = ordered.iter().map(|s| **s).collect::<Vec<_>>();
    assert_eq!(as_vec, vec!["oil", "electric", "gas"]);
}

#[test]
fn qualifiers_partition_candidates_independently() {
    let mut builder = ScopeBuilder::new();
    builder.bind::<&str>("Heater", Some("electric"), vec![], Priority::Normal, None, "e");
    builder.bind::<&str>("Heater", Some("ceramic"), vec![], Priority::Normal, None, "c");
    let scope = builder.build();

    assert_eq!(*scope.get::<&str>("Heater", Some("electric")).unwrap(), "e");
    assert_eq!(*scope.get::<&str>("Heater", Some("ceramic")).unwrap(), "c");
    assert!(scope.list::<&str>("Heater").unwrap().len() == 2);
}

#[test]
fn candidate_returns_none_rather_than_erroring_on_missing_bean() {
    let scope = ScopeBuilder::new().build();
    assert!(scope.candidate::<i32>("Heater", None).unwrap().is_none());
}

/// Scenario G: with no bean registered for an optional dependency's
/// type, resolving it yields `Unregistered` rather than panicking;
/// callers with a nullable injection point treat that as "leave null".
#[test]
fn missing_optional_dependency_is_a_plain_unregistered_error() {
    let scope = ScopeBuilder::new().build();
    let result = scope.candidate::<i32>("NoImplHere", None).unwrap();
    assert!(result.is_none());
}

/// A scope that has been closed refuses further lookups instead of
/// handing out beans whose `PreDestroy` hook may already have run.
#[test]
fn closed_scope_rejects_lookups() {
    let mut builder = ScopeBuilder::new();
    builder.bind::<i32>("Heater", None, vec![], Priority::Normal, None, 1);
    let scope = builder.build();
    scope.start().unwrap();
    scope.close().unwrap();

    assert!(matches!(
        scope.get::<i32>("Heater", None).unwrap_err(),
        beanforge::ScopeError::Closed
    ));
    assert!(matches!(
        scope.list::<i32>("Heater").unwrap_err(),
        beanforge::ScopeError::Closed
    ));
}
