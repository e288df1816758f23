//! Domain identifiers.
//!
//! # TaskId
//! タスクの一意な識別子。中身は不透明な文字列として扱います。
//! 新規発行する場合は `IdGenerator`（ULID ベース）を使いますが、
//! 呼び出し側が任意の文字列を渡すことも許容します（冪等なリトライのため）。
//!
//! # StorageKey
//! KeyValueStore 上のキー。`<prefix> + id` で決定的に導出されます。
//! prefix が固定なら id → key は単射（異なる id が同じ key になることはない）。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 保存キーのデフォルトプレフィックス
pub const DEFAULT_KEY_PREFIX: &str = "todo-task-";

/// Identifier of a task (the sole lookup key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// prefix と連結して保存キーを作る
    pub fn storage_key(&self, prefix: &str) -> StorageKey {
        StorageKey(format!("{prefix}{}", self.0))
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// KeyValueStore 上のキー
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// キーが prefix で始まるかどうか（部分一致ではなく前方一致）
    pub fn has_prefix(key: &str, prefix: &str) -> bool {
        key.starts_with(prefix)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_is_prefix_plus_id() {
        let id = TaskId::new("t1");
        assert_eq!(id.storage_key(DEFAULT_KEY_PREFIX).as_str(), "todo-task-t1");
        // 同じ id からは常に同じ key
        assert_eq!(
            id.storage_key(DEFAULT_KEY_PREFIX),
            id.storage_key(DEFAULT_KEY_PREFIX)
        );
    }

    #[test]
    fn distinct_ids_never_collide() {
        let ids = ["a", "ab", "b", "", "todo-task-a", "A"];
        let keys: std::collections::HashSet<_> = ids
            .iter()
            .map(|id| TaskId::new(*id).storage_key(DEFAULT_KEY_PREFIX))
            .collect();
        assert_eq!(keys.len(), ids.len());
    }

    #[test]
    fn prefix_match_is_anchored() {
        assert!(StorageKey::has_prefix("todo-task-1", DEFAULT_KEY_PREFIX));
        assert!(!StorageKey::has_prefix("old-todo-task-1", DEFAULT_KEY_PREFIX));
        assert!(!StorageKey::has_prefix("settings", DEFAULT_KEY_PREFIX));
    }

    #[test]
    fn task_id_serializes_as_plain_string() {
        let id = TaskId::new("01HZZ");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"01HZZ\"");
    }
}
