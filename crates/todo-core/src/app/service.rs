//! TodoService - タスク操作のファサード
//!
//! 各操作を 2 つの呼び出し規約で公開します。
//! - **callback 形式**: `Completion<T>` を受け取り、成功でも失敗でも必ず一度だけ呼ぶ
//! - **async 形式**: callback 形式を `resolve` で包んだだけのデフォルト実装
//!
//! ロジックは callback 形式にしか書きません。
//!
//! 「Service」という名前ですがネットワークには出ません。
//! すべてローカルの KeyValueStore に対して解決します。

use std::sync::Arc;

use async_trait::async_trait;

use super::completion::{Completion, resolve};
use crate::domain::{RepositoryError, TaskId, TodoTask};
use crate::ports::Repository;
use crate::storage::TodoTaskDto;

/// TodoService はタスクの CRUD を callback / async の両形式で提供する
///
/// # 使用例
/// ```ignore
/// let service = ServiceBuilder::new(InMemoryKeyValueStore::new()).build()?;
///
/// service.get_one(&id, Box::new(|result| println!("{result:?}")));
/// let task = service.get_one_async(&id).await?;
/// ```
#[async_trait]
pub trait TodoService: Send + Sync {
    fn get_one(&self, id: &TaskId, completion: Completion<TodoTask>);

    fn get_all(&self, completion: Completion<Vec<TodoTask>>);

    fn create(&self, task: TodoTask, completion: Completion<TodoTask>);

    fn update(&self, task: TodoTask, completion: Completion<TodoTask>);

    fn delete(&self, task: &TodoTask, completion: Completion<bool>);

    /// `is_completed = true` にしたコピーで `update` を呼ぶ
    ///
    /// すでに完了済みでも同じ内容を書き直すだけ（冪等）。
    fn complete_task(&self, task: &TodoTask, completion: Completion<TodoTask>) {
        self.update(task.completed(), completion)
    }

    async fn get_one_async(&self, id: &TaskId) -> Result<TodoTask, RepositoryError> {
        resolve(|done| self.get_one(id, done)).await
    }

    async fn get_all_async(&self) -> Result<Vec<TodoTask>, RepositoryError> {
        resolve(|done| self.get_all(done)).await
    }

    async fn create_async(&self, task: TodoTask) -> Result<TodoTask, RepositoryError> {
        resolve(|done| self.create(task, done)).await
    }

    async fn update_async(&self, task: TodoTask) -> Result<TodoTask, RepositoryError> {
        resolve(|done| self.update(task, done)).await
    }

    async fn delete_async(&self, task: &TodoTask) -> Result<bool, RepositoryError> {
        resolve(|done| self.delete(task, done)).await
    }

    async fn complete_task_async(&self, task: &TodoTask) -> Result<TodoTask, RepositoryError> {
        resolve(|done| self.complete_task(task, done)).await
    }
}

/// ApiService は Repository を 1 つだけ参照し、TodoTask ⇔ TodoTaskDto を詰め替える
pub struct ApiService<R> {
    repository: Arc<R>,
}

impl<R> ApiService<R>
where
    R: Repository<Item = TodoTaskDto>,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }
}

impl<R> Clone for ApiService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

#[async_trait]
impl<R> TodoService for ApiService<R>
where
    R: Repository<Item = TodoTaskDto>,
{
    fn get_one(&self, id: &TaskId, completion: Completion<TodoTask>) {
        completion(self.repository.get(id).map(TodoTask::from))
    }

    fn get_all(&self, completion: Completion<Vec<TodoTask>>) {
        completion(
            self.repository
                .list()
                .map(|items| items.into_iter().map(TodoTask::from).collect()),
        )
    }

    fn create(&self, task: TodoTask, completion: Completion<TodoTask>) {
        completion(self.repository.add(task.into()).map(TodoTask::from))
    }

    fn update(&self, task: TodoTask, completion: Completion<TodoTask>) {
        completion(self.repository.update(task.into()).map(TodoTask::from))
    }

    fn delete(&self, task: &TodoTask, completion: Completion<bool>) {
        completion(self.repository.delete(&task.clone().into()))
    }
}
