// Lazy singleton with double-checked locking.
// The instance is only built when first requested; racing first callers
// still observe exactly one construction.

use std::fmt;
use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use tracing::{debug, info};

// ============================================================================
// Example: DoubleChecked<T> - check, lock, re-check, construct, publish
// ============================================================================

/// One-time initialisation cell using double-checked locking.
///
/// Reads after the value is published are a single atomic load; the mutex is
/// only taken while the value is still missing.
pub struct DoubleChecked<T> {
    value: AtomicPtr<T>,
    init_lock: Mutex<()>,
    constructions: AtomicUsize,
    _owns: PhantomData<T>,
}

impl<T> DoubleChecked<T> {
    pub const fn new() -> Self {
        Self {
            value: AtomicPtr::new(ptr::null_mut()),
            init_lock: Mutex::new(()),
            constructions: AtomicUsize::new(0),
            _owns: PhantomData,
        }
    }

    /// Returns the value, building it with `init` if nobody has yet.
    ///
    /// `init` must not call back into the same cell: the init lock is held
    /// while it runs.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        // First check, no lock.
        if let Some(value) = self.get() {
            return value;
        }

        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Second check: another thread may have won while we waited.
        if let Some(value) = self.get() {
            debug!("lost the initialisation race, reusing published value");
            return value;
        }

        let raw = Box::into_raw(Box::new(init()));
        self.constructions.fetch_add(1, Ordering::Relaxed);
        self.value.store(raw, Ordering::Release);

        // SAFETY: `raw` came from Box::into_raw above and is only freed in Drop.
        unsafe { &*raw }
    }

    pub fn get(&self) -> Option<&T> {
        let raw = self.value.load(Ordering::Acquire);
        // SAFETY: a non-null pointer was published by get_or_init and stays
        // valid until the cell is dropped.
        unsafe { raw.as_ref() }
    }

    pub fn is_initialized(&self) -> bool {
        !self.value.load(Ordering::Acquire).is_null()
    }

    /// How many times an `init` closure ran to completion (0 or 1).
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::Relaxed)
    }
}

impl<T> Default for DoubleChecked<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoubleChecked<T> {
    fn drop(&mut self) {
        let raw = *self.value.get_mut();
        if !raw.is_null() {
            // SAFETY: we own the allocation and nobody can borrow from `self` anymore.
            drop(unsafe { Box::from_raw(raw) });
        }
    }
}

// Shared `&T` across threads, and the value may be created on any of them.
unsafe impl<T: Send + Sync> Sync for DoubleChecked<T> {}

impl<T: fmt::Debug> fmt::Debug for DoubleChecked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleChecked")
            .field("value", &self.get())
            .field("constructions", &self.constructions())
            .finish()
    }
}

// ============================================================================
// Example: LazySingleton - process-wide accessor over a static cell
// ============================================================================

static LAZY_INSTANCE: DoubleChecked<LazySingleton> = DoubleChecked::new();

#[derive(Debug)]
pub struct LazySingleton {
    initialised_by: String,
}

impl LazySingleton {
    fn new() -> Self {
        let initialised_by = thread::current().name().unwrap_or("unnamed").to_string();
        info!(thread = %initialised_by, "Initialising LazySingleton");
        Self { initialised_by }
    }

    pub fn instance() -> &'static LazySingleton {
        LAZY_INSTANCE.get_or_init(LazySingleton::new)
    }

    pub fn constructions() -> usize {
        LAZY_INSTANCE.constructions()
    }

    /// Name of the thread that won the race to build the instance.
    pub fn initialised_by(&self) -> &str {
        &self.initialised_by
    }
}

impl fmt::Display for LazySingleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LazySingleton@{:p}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
