// Simple (eager) singleton that survives a save/restore round trip.
// Deserialising never fabricates a second instance: the persisted state is
// read and discarded, and the caller gets the live instance back.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicI32, Ordering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::Result;

static SIMPLE_INSTANCE: SimpleSingleton = SimpleSingleton {
    val: AtomicI32::new(0),
};

#[derive(Debug)]
pub struct SimpleSingleton {
    val: AtomicI32,
}

/// Plain copy of the singleton's state as it is written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleSnapshot {
    pub val: i32,
}

impl SimpleSingleton {
    pub fn instance() -> &'static SimpleSingleton {
        &SIMPLE_INSTANCE
    }

    pub fn val(&self) -> i32 {
        self.val.load(Ordering::SeqCst)
    }

    pub fn set_val(&self, val: i32) {
        self.val.store(val, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> SimpleSnapshot {
        SimpleSnapshot { val: self.val() }
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        debug!(path = %path.as_ref().display(), val = self.val(), "saved SimpleSingleton");
        Ok(())
    }

    /// Reads a saved singleton back. The result is always the live instance.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<&'static SimpleSingleton> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let resolved: &'static SimpleSingleton = bincode::deserialize_from(reader)?;
        Ok(resolved)
    }
}

impl SimpleSnapshot {
    /// Reads the persisted state as-is, without resolving to the live
    /// instance. This is the detached "doubleton" the resolving path avoids.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        Ok(bincode::deserialize_from(reader)?)
    }
}

impl Serialize for SimpleSingleton {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.snapshot().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for &'static SimpleSingleton {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let persisted = SimpleSnapshot::deserialize(deserializer)?;
        debug!(
            persisted = persisted.val,
            "resolving deserialised SimpleSingleton to the live instance"
        );
        Ok(SimpleSingleton::instance())
    }
}
