//! Errors - リポジトリ操作のエラー分類
//!
//! 「存在しない」と「壊れている」を区別できるように variant を分けています。
//! Repository → Facade → 呼び出し側へ、変換せずそのまま伝播します。

use thiserror::Error;

use super::ids::TaskId;
use crate::ports::StoreError;
use crate::storage::CodecError;

/// RepositoryError はリポジトリ・ファサードの操作エラー
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 指定 id のレコードが存在しない
    #[error("task not found: id={id}")]
    NotFound { id: TaskId },

    /// レコードは存在するがデコードできない
    #[error("failed to decode record at key={key}")]
    DecodingFailed {
        key: String,
        #[source]
        source: CodecError,
    },

    /// 書き込み前のエンコードに失敗
    #[error("failed to encode task id={id}")]
    EncodingFailed {
        id: TaskId,
        #[source]
        source: CodecError,
    },

    /// KeyValueStore 自体の障害
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),

    /// completion が一度も呼ばれずに破棄された
    #[error("completion was dropped without a result")]
    Abandoned,
}

impl RepositoryError {
    pub fn not_found(id: &TaskId) -> Self {
        Self::NotFound { id: id.clone() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
