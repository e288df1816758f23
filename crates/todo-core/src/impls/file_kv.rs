//! FileKeyValueStore - JSON ファイルに永続化する KeyValueStore
//!
//! # 実装詳細
//! - 起動時（`open`）にファイル全体を読み込み、メモリ上の BTreeMap に保持
//! - 変更のたびに同じディレクトリの一時ファイル（`NamedTempFile`）へ書き出してから
//!   persist で置き換える（途中で落ちても壊れない）
//! - 書き出しに失敗した場合はメモリ上の状態も変更しない

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::ports::{KeyValueStore, StoreError};

type Entries = BTreeMap<String, Vec<u8>>;

#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl FileKeyValueStore {
    /// ファイルを開く。存在しなければ空のストアとして始める
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let bytes = fs::read(&path)?;
            serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::Corrupt(format!("{}: {e}", path.display())))?
        } else {
            Entries::new()
        };
        debug!(path = %path.display(), keys = entries.len(), "opened file store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, Entries>, StoreError> {
        self.entries.lock().map_err(|_| StoreError::Poisoned)
    }

    fn persist(&self, entries: &Entries) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(entries).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp_file = NamedTempFile::new_in(dir)?;
        tmp_file.write_all(&bytes)?;
        tmp_file.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }

    fn mutate(&self, f: impl FnOnce(&mut Entries)) -> Result<(), StoreError> {
        let mut guard = self.lock()?;
        let mut next = guard.clone();
        f(&mut next);
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value);
        })
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        if !self.lock()?.contains_key(key) {
            return Ok(());
        }
        self.mutate(|entries| {
            entries.remove(key);
        })
    }

    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, StoreError> {
        Ok(self
            .lock()?
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
