//! Repository port - 汎用 CRUD 契約
//!
//! 実装は `impls::KvTaskRepository`（KeyValueStore 上のタスクリポジトリ）。
//! ここで定義するのは「結果を返す」正準な同期 API で、
//! callback 形式と async 形式はファサード（`app::service`）がこの上に被せます。

use crate::domain::errors::RepositoryError;
use crate::domain::ids::TaskId;

/// list の結果と、壊れていてスキップしたエントリ数
#[derive(Debug, Clone, PartialEq)]
pub struct ListReport<T> {
    pub items: Vec<T>,
    pub skipped: usize,
}

/// Repository は 1 種類のレコードに対する CRUD
///
/// # 契約
/// - `get`: 無ければ `NotFound`、壊れていれば `DecodingFailed`
/// - `list`: 壊れたエントリはスキップして続行
/// - `update`: 既存が無ければ `NotFound`、id 以外の全フィールドを上書き
/// - `delete`: 無条件。存在しなくても `Ok(true)`
pub trait Repository: Send + Sync {
    type Item;

    fn get(&self, id: &TaskId) -> Result<Self::Item, RepositoryError>;

    fn list_report(&self) -> Result<ListReport<Self::Item>, RepositoryError>;

    fn list(&self) -> Result<Vec<Self::Item>, RepositoryError> {
        Ok(self.list_report()?.items)
    }

    fn add(&self, item: Self::Item) -> Result<Self::Item, RepositoryError>;

    fn update(&self, item: Self::Item) -> Result<Self::Item, RepositoryError>;

    /// `update` の bool 版
    fn edit(&self, item: Self::Item) -> Result<bool, RepositoryError> {
        self.update(item).map(|_| true)
    }

    fn delete(&self, item: &Self::Item) -> Result<bool, RepositoryError>;
}
