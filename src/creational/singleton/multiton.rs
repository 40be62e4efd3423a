// Multiton: a finite set of singletons, one per key, each created lazily.

use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use lazy_static::lazy_static;
use tracing::{debug, info};

// ============================================================================
// Example: Multiton<K, V> - lazy keyed registry
// ============================================================================

/// Registry holding at most one `V` per key.
///
/// Lookups of an existing key only take a shard read lock. A miss takes the
/// shard write lock and checks again before building, so each key's factory
/// runs at most once even when callers race.
pub struct Multiton<K, V>
where
    K: Eq + Hash,
{
    instances: DashMap<K, Arc<V>>,
    created: AtomicUsize,
}

impl<K, V> Multiton<K, V>
where
    K: Eq + Hash + Copy + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            instances: DashMap::new(),
            created: AtomicUsize::new(0),
        }
    }

    /// Returns the instance for `key`, building it with `factory` on first
    /// request. `factory` must not touch this registry.
    pub fn get_or_create<F>(&self, key: K, factory: F) -> Arc<V>
    where
        F: FnOnce(K) -> V,
    {
        if let Some(existing) = self.instances.get(&key) {
            return Arc::clone(existing.value());
        }

        let entry = self.instances.entry(key).or_insert_with(|| {
            self.created.fetch_add(1, Ordering::SeqCst);
            debug!(?key, "multiton miss, creating instance");
            Arc::new(factory(key))
        });
        Arc::clone(entry.value())
    }

    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.instances.get(key).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.instances.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Number of factory calls so far; equals `len()`.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl<K, V> Default for Multiton<K, V>
where
    K: Eq + Hash + Copy + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Example: Printer - one instance per Subsystem
// ============================================================================

/// At most one printer per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    Primary,
    Aux,
    Fallback,
}

impl Subsystem {
    pub const ALL: [Subsystem; 3] = [Subsystem::Primary, Subsystem::Aux, Subsystem::Fallback];
}

static PRINTER_SERIAL: AtomicUsize = AtomicUsize::new(0);

lazy_static! {
    static ref PRINTERS: Multiton<Subsystem, Printer> = Multiton::new();
}

#[derive(Debug)]
pub struct Printer {
    subsystem: Subsystem,
    serial: usize,
}

impl Printer {
    fn new(subsystem: Subsystem) -> Self {
        let serial = PRINTER_SERIAL.fetch_add(1, Ordering::SeqCst) + 1;
        info!(?subsystem, "Instance {} created.", serial);
        Self { subsystem, serial }
    }

    pub fn instance(subsystem: Subsystem) -> Arc<Printer> {
        PRINTERS.get_or_create(subsystem, Printer::new)
    }

    /// How many printers exist so far.
    pub fn created() -> usize {
        PRINTERS.created()
    }

    pub fn subsystem(&self) -> Subsystem {
        self.subsystem
    }

    /// 1-based creation order across all subsystems.
    pub fn serial(&self) -> usize {
        self.serial
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::thread;

    fn any_subsystem() -> impl Strategy<Value = Subsystem> {
        prop_oneof![
            Just(Subsystem::Primary),
            Just(Subsystem::Aux),
            Just(Subsystem::Fallback),
        ]
    }

    #[test]
    fn test_lazy_per_key() {
        let registry: Multiton<Subsystem, String> = Multiton::new();
        assert!(registry.is_empty());

        let main = registry.get_or_create(Subsystem::Primary, |k| format!("{:?}", k));
        assert_eq!(registry.created(), 1);
        assert!(!registry.contains(&Subsystem::Aux));
        assert!(!registry.contains(&Subsystem::Fallback));

        let aux = registry.get_or_create(Subsystem::Aux, |k| format!("{:?}", k));
        let aux2 = registry.get_or_create(Subsystem::Aux, |_| unreachable!());
        assert_eq!(registry.created(), 2);
        assert!(Arc::ptr_eq(&aux, &aux2));
        assert!(!Arc::ptr_eq(&main, &aux));
        assert!(registry.get(&Subsystem::Fallback).is_none());
    }

    #[test]
    fn test_concurrent_same_key() {
        let registry: Multiton<Subsystem, usize> = Multiton::new();
        let shared = &registry;

        thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|i| scope.spawn(move || shared.get_or_create(Subsystem::Aux, move |_| i)))
                .collect();
            let results: Vec<Arc<usize>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert!(results.iter().all(|r| Arc::ptr_eq(r, &results[0])));
        });

        assert_eq!(registry.created(), 1);
    }

    #[test]
    fn test_global_printers() {
        let aux = Printer::instance(Subsystem::Aux);
        let aux2 = Printer::instance(Subsystem::Aux);
        let main = Printer::instance(Subsystem::Primary);

        assert!(Arc::ptr_eq(&aux, &aux2));
        assert!(!Arc::ptr_eq(&aux, &main));
        assert_ne!(aux.serial(), main.serial());
        assert_eq!(main.subsystem(), Subsystem::Primary);
        assert!(Printer::created() <= Subsystem::ALL.len());

        let created = Printer::created();
        let serial = aux.serial();
        for _ in 0..10 {
            assert_eq!(Printer::instance(Subsystem::Aux).serial(), serial);
        }
        assert_eq!(Printer::created(), created);
    }

    proptest! {
        #[test]
        fn test_requests_match_distinct_keys(keys in prop::collection::vec(any_subsystem(), 0..20)) {
            let registry: Multiton<Subsystem, Subsystem> = Multiton::new();
            let handles: Vec<Arc<Subsystem>> = keys
                .iter()
                .map(|&k| registry.get_or_create(k, |k| k))
                .collect();

            let mut distinct = keys.clone();
            distinct.sort_by_key(|k| *k as u8);
            distinct.dedup();
            prop_assert_eq!(registry.created(), distinct.len());

            for (i, a) in handles.iter().enumerate() {
                for (j, b) in handles.iter().enumerate() {
                    prop_assert_eq!(Arc::ptr_eq(a, b), keys[i] == keys[j]);
                }
            }
        }
    }
}
