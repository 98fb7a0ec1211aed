//! Tests for the host handle registry and its event log

use toroidal_sim_core::universe::DEFAULT_EVENT_LIMIT;
use toroidal_sim_core::{Event, HostRng, SimulationError, UniverseRegistry};

#[test]
fn test_create_update_get_destroy() {
    let mut host = HostRng::new(10);
    let mut registry = UniverseRegistry::new();

    let handle = registry.create(&[1, 2, 3, 4, 5, 6], 3, 2).unwrap();
    assert!(registry.contains(handle));
    assert_eq!(registry.get(handle).unwrap(), vec![1, 2, 3, 4, 5, 6]);

    registry.update(handle, &mut host.acquire()).unwrap();
    assert_eq!(registry.update_n(handle, &mut host.acquire(), 9).unwrap(), 9);
    assert_eq!(registry.universe(handle).unwrap().steps(), 10);

    registry.destroy(handle).unwrap();
    assert!(!registry.contains(handle));
    assert!(registry.is_empty());
}

#[test]
fn test_double_destroy_is_invalid_handle() {
    let mut registry = UniverseRegistry::new();
    let handle = registry.create(&[1, 2, 3, 4], 2, 2).unwrap();

    registry.destroy(handle).unwrap();
    assert!(matches!(
        registry.destroy(handle),
        Err(SimulationError::InvalidHandle(_))
    ));

    let destroyed = registry.events().events_of_type("UniverseDestroyed");
    assert_eq!(destroyed.len(), 1, "grid must be released exactly once");
}

#[test]
fn test_use_after_destroy_is_rejected() {
    let mut host = HostRng::new(10);
    let mut registry = UniverseRegistry::new();
    let handle = registry.create(&[1, 2, 3, 4], 2, 2).unwrap();
    registry.destroy(handle).unwrap();

    let state = host.state();
    assert!(matches!(
        registry.update(handle, &mut host.acquire()),
        Err(SimulationError::InvalidHandle(_))
    ));
    assert!(matches!(
        registry.get(handle),
        Err(SimulationError::InvalidHandle(_))
    ));
    assert_eq!(host.state(), state);
}

#[test]
fn test_universes_are_isolated() {
    let mut host = HostRng::new(4);
    let mut registry = UniverseRegistry::new();
    let a = registry.create(&[0; 9], 3, 3).unwrap();
    let b = registry.create(&[1; 9], 3, 3).unwrap();

    registry.update_n(a, &mut host.acquire(), 50).unwrap();

    assert_eq!(registry.get(b).unwrap(), vec![1; 9]);
    registry.destroy(a).unwrap();
    assert_eq!(registry.get(b).unwrap(), vec![1; 9]);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_shared_stream_interleaves_deterministically() {
    let run = || {
        let mut host = HostRng::new(99);
        let mut registry = UniverseRegistry::new();
        let a = registry.create(&(0..16).collect::<Vec<_>>(), 4, 4).unwrap();
        let b = registry.create(&(16..32).collect::<Vec<_>>(), 4, 4).unwrap();
        for _ in 0..20 {
            registry.update(a, &mut host.acquire()).unwrap();
            registry.update(b, &mut host.acquire()).unwrap();
        }
        (registry.get(a).unwrap(), registry.get(b).unwrap())
    };

    assert_eq!(run(), run());
}

#[test]
fn test_event_log_sequence() {
    let mut host = HostRng::new(1);
    let mut registry = UniverseRegistry::new();

    let handle = registry.create(&[1, 2, 3, 4], 2, 2).unwrap();
    registry.update_n(handle, &mut host.acquire(), 3).unwrap();
    assert!(registry.create(&[1, 2, 3], 2, 2).is_err());
    registry.destroy(handle).unwrap();

    let events = registry.events().events();
    let types: Vec<&str> = events.iter().map(Event::event_type).collect();
    assert_eq!(
        types,
        vec!["UniverseCreated", "UniverseStepped", "CallRejected", "UniverseDestroyed"]
    );
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.seq(), i as u64);
    }

    match &events[1] {
        Event::UniverseStepped {
            steps, total_steps, ..
        } => {
            assert_eq!(*steps, 3);
            assert_eq!(*total_steps, 3);
        }
        other => panic!("unexpected event {:?}", other),
    }
    match &events[3] {
        Event::UniverseDestroyed { total_steps, .. } => assert_eq!(*total_steps, 3),
        other => panic!("unexpected event {:?}", other),
    }

    assert_eq!(registry.events().events_for_handle(handle).len(), 3);
    assert!(registry.events().to_json().unwrap().contains("CallRejected"));
}

#[test]
fn test_long_single_step_runs_keep_log_size() {
    let mut host = HostRng::new(21);
    let mut registry = UniverseRegistry::new();
    let handle = registry.create(&(0..9).collect::<Vec<_>>(), 3, 3).unwrap();
    let before = registry.events().len();

    for _ in 0..100_000 {
        registry.update(handle, &mut host.acquire()).unwrap();
    }

    assert_eq!(registry.events().len(), before);
    assert_eq!(host.scopes_acquired(), 100_000);

    registry.destroy(handle).unwrap();
    match registry.events().events().back() {
        Some(Event::UniverseDestroyed { total_steps, .. }) => assert_eq!(*total_steps, 100_000),
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_churn_keeps_registry_bounded() {
    let mut registry = UniverseRegistry::new();
    for _ in 0..(2 * DEFAULT_EVENT_LIMIT) {
        let handle = registry.create(&[1, 2, 3, 4], 2, 2).unwrap();
        registry.destroy(handle).unwrap();
    }

    assert!(registry.is_empty());
    assert_eq!(registry.events().len(), DEFAULT_EVENT_LIMIT);
    assert_eq!(registry.events().next_seq(), 4 * DEFAULT_EVENT_LIMIT as u64);
}
