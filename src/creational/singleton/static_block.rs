// Static block singleton: for when the constructor can fail.
//
// Construction is attempted once. A failure is logged and the accessor then
// reports "no instance" forever; nothing retries. That is a known limitation
// of the pattern and is kept as-is.

use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use tempfile::NamedTempFile;
use tracing::{error, info};

use crate::error::{PatternError, Result};

// ============================================================================
// Example: FallibleOnce<T> - one attempt, success or settled failure
// ============================================================================

pub struct FallibleOnce<T> {
    slot: OnceLock<Option<T>>,
    attempts: AtomicUsize,
}

impl<T> FallibleOnce<T> {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
            attempts: AtomicUsize::new(0),
        }
    }

    /// Runs `init` the first time only. An `Err` is logged under `what` and
    /// leaves the cell permanently empty.
    pub fn get_or_try_init<E, F>(&self, what: &str, init: F) -> Option<&T>
    where
        E: fmt::Display,
        F: FnOnce() -> std::result::Result<T, E>,
    {
        self.slot
            .get_or_init(|| {
                self.attempts.fetch_add(1, Ordering::SeqCst);
                match init() {
                    Ok(value) => Some(value),
                    Err(err) => {
                        error!(%err, "Failed to create the {}!", what);
                        None
                    }
                }
            })
            .as_ref()
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.get().and_then(Option::as_ref)
    }

    /// True once an attempt has finished, whatever its outcome.
    pub fn is_settled(&self) -> bool {
        self.slot.get().is_some()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl<T> Default for FallibleOnce<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Example: StaticBlockSingleton - needs a scratch file to exist
// ============================================================================

#[derive(Debug)]
pub struct StaticBlockSingleton {
    scratch: NamedTempFile,
}

impl StaticBlockSingleton {
    fn new() -> Result<Self> {
        Self::new_in(std::env::temp_dir())
    }

    /// Builds the singleton with its scratch file under `dir`.
    pub fn new_in(dir: impl AsRef<Path>) -> Result<Self> {
        info!("Initialising StaticBlockSingleton");
        let scratch = NamedTempFile::new_in(dir.as_ref()).map_err(|err| {
            PatternError::construction(
                "StaticBlockSingleton",
                format!("cannot create scratch file in {}: {}", dir.as_ref().display(), err),
            )
        })?;
        Ok(Self { scratch })
    }

    /// `None` if construction failed; later calls never retry.
    pub fn instance() -> Option<&'static StaticBlockSingleton> {
        static INSTANCE: FallibleOnce<StaticBlockSingleton> = FallibleOnce::new();
        INSTANCE.get_or_try_init("StaticBlockSingleton", StaticBlockSingleton::new)
    }

    pub fn scratch_path(&self) -> &Path {
        self.scratch.path()
    }
}

impl fmt::Display for StaticBlockSingleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StaticBlockSingleton@{:p}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_cached() {
        let cell = FallibleOnce::new();
        assert!(!cell.is_settled());

        let first = cell.get_or_try_init("test", || Ok::<_, String>(5)).copied();
        let second = cell.get_or_try_init("test", || Ok::<_, String>(6)).copied();

        assert_eq!(first, Some(5));
        assert_eq!(second, Some(5));
        assert_eq!(cell.attempts(), 1);
    }

    #[test]
    fn test_failure_is_permanent() {
        let cell: FallibleOnce<u32> = FallibleOnce::new();

        let first = cell.get_or_try_init("test", || Err("disk full"));
        assert!(first.is_none());
        assert!(cell.is_settled());

        // A constructor that would now succeed is never run.
        let second = cell.get_or_try_init("test", || Ok::<_, &str>(1));
        assert!(second.is_none());
        assert!(cell.get().is_none());
        assert_eq!(cell.attempts(), 1);
    }

    #[test]
    fn test_construction_fails_without_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");

        let result = StaticBlockSingleton::new_in(&missing);
        assert!(matches!(result, Err(PatternError::Construction { .. })));
    }

    #[test]
    fn test_global_instance() {
        let first = StaticBlockSingleton::instance().expect("temp dir is writable in tests");
        let second = StaticBlockSingleton::instance().unwrap();

        assert!(std::ptr::eq(first, second));
        assert!(first.scratch_path().exists());
    }
}
