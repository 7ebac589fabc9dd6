use crate::error::CoreResult;
use crate::store::KeyValueStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One JSON text file per key under a root directory.
///
/// The root may be shared by other processes; concurrent writers race
/// last-writer-wins per key. Known limitation, not coordinated here.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: impl AsRef<Path>) -> CoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("read of {key} failed, treating as absent: {err}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> CoreResult<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        if let Err(err) = fs::remove_file(self.key_path(key)) {
            if err.kind() != ErrorKind::NotFound {
                log::warn!("remove of {key} failed: {err}");
            }
        }
    }
}
