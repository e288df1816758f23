//! KeyValueStore port - 永続化された文字列キー → バイト列のストア
//!
//! リポジトリからはブラックボックスとして扱います。
//! 個々の get/set/delete の原子性はストア側に任せ、
//! 複数操作にまたがるロックはここでは提供しません。
//!
//! # 実装
//! - **InMemoryKeyValueStore**: テスト用
//! - **FileKeyValueStore**: JSON ファイルに永続化

use thiserror::Error;

/// StoreError はストア自体の障害
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is corrupt: {0}")]
    Corrupt(String),

    #[error("store lock poisoned")]
    Poisoned,
}

/// KeyValueStore は文字列キーでバイト列を保存する
///
/// # 設計原則
/// - 存在しないキーの delete は no-op（エラーではない）
/// - `entries()` は全キーと値のスナップショットを返す（順序は保証しない）
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    fn delete(&self, key: &str) -> Result<(), StoreError>;

    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, StoreError> {
        (**self).entries()
    }
}
