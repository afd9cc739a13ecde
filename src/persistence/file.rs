//! Directory-backed store: `<dir>/<key>.json`

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{ScoreStore, StorageError, validate_key};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl ScoreStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Write then rename so a crash never leaves a torn file
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flip-runner-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_missing_key_reads_none() {
        let store = FileStore::new(scratch_dir("missing"));
        assert_eq!(store.read("nothing_here").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = scratch_dir("roundtrip");
        let mut store = FileStore::new(&dir);
        assert_eq!(store.dir(), dir.as_path());
        store.write("scores", "[10,4]").unwrap();
        assert_eq!(store.read("scores").unwrap().as_deref(), Some("[10,4]"));
        store.write("scores", "[12,10,4]").unwrap();
        assert_eq!(store.read("scores").unwrap().as_deref(), Some("[12,10,4]"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let mut store = FileStore::new(scratch_dir("keys"));
        assert!(matches!(
            store.write("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
