// Singleton with an enum: a type with exactly one value.
// Only the variant is serialised, so restoring it can only ever yield the
// one instance, carrying whatever state is live at that moment.
// Limitation: the state itself is never persisted.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicI32, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::Result;

static ENUM_VAL: AtomicI32 = AtomicI32::new(394);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SingletonEnum {
    Instance,
}

impl SingletonEnum {
    pub fn val(self) -> i32 {
        ENUM_VAL.load(Ordering::SeqCst)
    }

    pub fn set_val(self, val: i32) {
        ENUM_VAL.store(val, Ordering::SeqCst);
    }

    pub fn save_to_file(self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, &self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }
}
