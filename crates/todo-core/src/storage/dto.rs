//! TodoTaskDto - 保存形式のタスクレコード
//!
//! メモリ上のフィールド名とワイヤ上のフィールド名が 2 つだけ異なります。
//!
//! | field | wire |
//! |---|---|
//! | `avatar` | `avatarUrl` |
//! | `is_complete` | `isCompleted` |
//!
//! スキーマバージョンは持たないので、形を変えると既存データは読めなくなります。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{TaskId, TodoTask};

/// Storage-shaped task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoTaskDto {
    pub id: TaskId,
    #[serde(rename = "avatarUrl")]
    pub avatar: String,
    pub username: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "isCompleted")]
    pub is_complete: bool,
}

impl TodoTaskDto {
    /// id 以外の全フィールドを `other` の値で上書き
    pub fn overwrite_from(&mut self, other: TodoTaskDto) {
        self.avatar = other.avatar;
        self.username = other.username;
        self.title = other.title;
        self.description = other.description;
        self.date = other.date;
        self.is_complete = other.is_complete;
    }
}

impl From<TodoTask> for TodoTaskDto {
    fn from(task: TodoTask) -> Self {
        Self {
            id: task.id,
            avatar: task.avatar,
            username: task.username,
            title: task.title,
            description: task.description,
            date: task.date,
            is_complete: task.is_completed,
        }
    }
}

impl From<TodoTaskDto> for TodoTask {
    fn from(dto: TodoTaskDto) -> Self {
        Self {
            id: dto.id,
            avatar: dto.avatar,
            username: dto.username,
            title: dto.title,
            date: dto.date,
            description: dto.description,
            is_completed: dto.is_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> TodoTask {
        let date = Utc.with_ymd_and_hms(2023, 12, 7, 11, 30, 0).unwrap();
        TodoTask::new("t2", "hsimpson", "Do laundry", "Go to the laundromat", date)
            .with_avatar("https://example.com/homer.png")
    }

    #[test]
    fn domain_and_dto_map_field_for_field() {
        let task = sample().completed();
        let dto = TodoTaskDto::from(task.clone());
        assert_eq!(dto.avatar, task.avatar);
        assert!(dto.is_complete);
        assert_eq!(TodoTask::from(dto), task);
    }

    #[test]
    fn overwrite_keeps_the_id() {
        let mut stored = TodoTaskDto::from(sample());
        let mut incoming = TodoTaskDto::from(sample().completed());
        incoming.id = TaskId::new("someone-else");
        incoming.title = "Do laundry twice".into();

        stored.overwrite_from(incoming);

        assert_eq!(stored.id.as_str(), "t2");
        assert_eq!(stored.title, "Do laundry twice");
        assert!(stored.is_complete);
    }
}
