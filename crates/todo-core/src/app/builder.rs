//! ServiceBuilder - ストア・キー設定・ID 方針をまとめて ApiService を組み立てる
//!
//! # Fail-fast 設計
//! - build() 時に設定を検証し、問題があれば BuildError を返す
//! - 空の prefix は全キーに一致してしまうので拒否する

use std::sync::Arc;

use crate::app::service::ApiService;
use crate::domain::DEFAULT_KEY_PREFIX;
use crate::impls::{IdPolicy, KvTaskRepository};
use crate::ports::{IdGenerator, KeyValueStore};

/// ServiceBuilder は ApiService を構築
///
/// # 使用例
/// ```ignore
/// let service = ServiceBuilder::new(FileKeyValueStore::open("todo.json")?)
///     .key_prefix("todo-task-")
///     .mint_ids(UlidGenerator::new(SystemClock))
///     .build()?;
/// ```
pub struct ServiceBuilder<S> {
    store: S,
    key_prefix: String,
    id_policy: IdPolicy,
}

/// BuildError は構築時の設定エラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("key prefix must not be empty")]
    EmptyKeyPrefix,
}

impl<S: KeyValueStore> ServiceBuilder<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            id_policy: IdPolicy::CallerSupplied,
        }
    }

    pub fn key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    /// add のたびに `ids` で新しい id を発行する
    pub fn mint_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.id_policy = IdPolicy::Minted(Arc::new(ids));
        self
    }

    pub fn build(self) -> Result<ApiService<KvTaskRepository<S>>, BuildError> {
        if self.key_prefix.is_empty() {
            return Err(BuildError::EmptyKeyPrefix);
        }
        let repository = KvTaskRepository::new(self.store)
            .with_key_prefix(self.key_prefix)
            .with_id_policy(self.id_policy);
        Ok(ApiService::new(Arc::new(repository)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::TodoService;
    use crate::domain::TodoTask;
    use crate::impls::InMemoryKeyValueStore;
    use crate::ports::{SystemClock, UlidGenerator};
    use chrono::Utc;

    #[test]
    fn test_build_defaults() {
        let service = ServiceBuilder::new(InMemoryKeyValueStore::new())
            .build()
            .unwrap();
        assert_eq!(service.repository().key_prefix(), "todo-task-");
    }

    #[test]
    fn test_build_rejects_empty_prefix() {
        let result = ServiceBuilder::new(InMemoryKeyValueStore::new())
            .key_prefix("")
            .build();
        assert!(matches!(result, Err(BuildError::EmptyKeyPrefix)));
    }

    #[tokio::test]
    async fn test_build_with_minted_ids() {
        let service = ServiceBuilder::new(InMemoryKeyValueStore::new())
            .key_prefix("chores-")
            .mint_ids(UlidGenerator::new(SystemClock))
            .build()
            .unwrap();

        let task = TodoTask::new("client-id", "hsimpson", "Watch TV", "", Utc::now());
        let created = service.create_async(task).await.unwrap();
        assert_ne!(created.id.as_str(), "client-id");
        assert_eq!(service.get_one_async(&created.id).await.unwrap(), created);
    }
}
