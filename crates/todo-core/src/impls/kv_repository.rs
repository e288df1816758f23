//! KvTaskRepository - KeyValueStore 上のタスクリポジトリ
//!
//! # 実装詳細
//! - 保存キーは `<key_prefix> + id`
//! - list は全キーを走査し、prefix で**始まる**キーだけを対象にする
//! - 壊れたエントリは list ではスキップ（warn ログ + skipped カウント）、
//!   get では `DecodingFailed` として返す
//! - 書き込み（add / update / delete）はこのインスタンス内で `write_lock` により直列化する。
//!   update は read-modify-write の間ずっと保持する。
//!   別プロセスとの競合は検出しない（last write wins）

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::domain::{DEFAULT_KEY_PREFIX, RepositoryError, StorageKey, TaskId};
use crate::ports::{IdGenerator, KeyValueStore, ListReport, Repository, StoreError};
use crate::storage::{JsonRecordCodec, RecordCodec, TodoTaskDto};

/// add 時の id の決め方
#[derive(Clone, Default)]
pub enum IdPolicy {
    /// 呼び出し側の id をそのまま使う（同じ add をリトライしても 1 件のまま）
    #[default]
    CallerSupplied,
    /// add のたびに新しい id を発行し、呼び出し側の id は無視する
    Minted(Arc<dyn IdGenerator>),
}

impl fmt::Debug for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CallerSupplied => f.write_str("CallerSupplied"),
            Self::Minted(_) => f.write_str("Minted"),
        }
    }
}

pub struct KvTaskRepository<S, C = JsonRecordCodec> {
    store: S,
    codec: C,
    key_prefix: String,
    id_policy: IdPolicy,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> KvTaskRepository<S, JsonRecordCodec> {
    pub fn new(store: S) -> Self {
        Self::with_codec(store, JsonRecordCodec)
    }
}

impl<S: KeyValueStore, C: RecordCodec> KvTaskRepository<S, C> {
    pub fn with_codec(store: S, codec: C) -> Self {
        Self {
            store,
            codec,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            id_policy: IdPolicy::default(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    pub fn key_for(&self, id: &TaskId) -> StorageKey {
        id.storage_key(&self.key_prefix)
    }

    fn lock_writes(&self) -> Result<MutexGuard<'_, ()>, RepositoryError> {
        Ok(self.write_lock.lock().map_err(|_| StoreError::Poisoned)?)
    }

    fn decode(&self, key: &str, bytes: &[u8]) -> Result<TodoTaskDto, RepositoryError> {
        self.codec
            .decode(bytes)
            .map_err(|source| RepositoryError::DecodingFailed {
                key: key.to_string(),
                source,
            })
    }

    fn store_record(&self, record: &TodoTaskDto) -> Result<(), RepositoryError> {
        let bytes = self
            .codec
            .encode(record)
            .map_err(|source| RepositoryError::EncodingFailed {
                id: record.id.clone(),
                source,
            })?;
        let key = self.key_for(&record.id);
        self.store.set(key.as_str(), bytes)?;
        Ok(())
    }
}

impl<S: KeyValueStore, C: RecordCodec> Repository for KvTaskRepository<S, C> {
    type Item = TodoTaskDto;

    fn get(&self, id: &TaskId) -> Result<TodoTaskDto, RepositoryError> {
        let key = self.key_for(id);
        debug!(%key, "get task");
        let bytes = self
            .store
            .get(key.as_str())?
            .ok_or_else(|| RepositoryError::not_found(id))?;
        self.decode(key.as_str(), &bytes)
    }

    fn list_report(&self) -> Result<ListReport<TodoTaskDto>, RepositoryError> {
        let mut items = Vec::new();
        let mut skipped = 0;
        for (key, bytes) in self.store.entries()? {
            if !StorageKey::has_prefix(&key, &self.key_prefix) {
                continue;
            }
            match self.decode(&key, &bytes) {
                Ok(item) => items.push(item),
                Err(error) => {
                    warn!(%key, %error, "skipping undecodable task record");
                    skipped += 1;
                }
            }
        }
        debug!(count = items.len(), skipped, "listed tasks");
        Ok(ListReport { items, skipped })
    }

    fn add(&self, mut item: TodoTaskDto) -> Result<TodoTaskDto, RepositoryError> {
        if let IdPolicy::Minted(ids) = &self.id_policy {
            item.id = ids.generate_task_id();
        }
        debug!(id = %item.id, policy = ?self.id_policy, "add task");
        let _guard = self.lock_writes()?;
        self.store_record(&item)?;
        Ok(item)
    }

    fn update(&self, item: TodoTaskDto) -> Result<TodoTaskDto, RepositoryError> {
        let _guard = self.lock_writes()?;
        let mut existing = self.get(&item.id)?;
        existing.overwrite_from(item);
        debug!(id = %existing.id, "update task");
        self.store_record(&existing)?;
        Ok(existing)
    }

    fn delete(&self, item: &TodoTaskDto) -> Result<bool, RepositoryError> {
        let key = self.key_for(&item.id);
        debug!(%key, "delete task");
        let _guard = self.lock_writes()?;
        self.store.delete(key.as_str())?;
        Ok(true)
    }
}
