//! TodoTask - 公開側のタスクレコード
//!
//! 保存形式（`storage::TodoTaskDto`）とは別の型にして、
//! 公開 API を保存フォーマットから切り離しています。値は 1:1 で対応します。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::TaskId;
use crate::ports::{Clock, IdGenerator};

/// Domain-shaped task record handed to and returned from the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoTask {
    pub id: TaskId,
    pub avatar: String,
    pub username: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub is_completed: bool,
}

impl TodoTask {
    /// 未完了のタスクを作る
    pub fn new(
        id: impl Into<TaskId>,
        username: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            avatar: String::new(),
            username: username.into(),
            title: title.into(),
            date,
            description: description.into(),
            is_completed: false,
        }
    }

    /// 新しい id と現在時刻で未完了のタスクを作る
    pub fn draft(
        ids: &dyn IdGenerator,
        clock: &dyn Clock,
        username: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(ids.generate_task_id(), username, title, description, clock.now())
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// `is_completed` だけを true にしたコピー
    pub fn completed(&self) -> Self {
        Self {
            is_completed: true,
            ..self.clone()
        }
    }
}
