//! todo-core
//!
//! ToDo アプリのローカル永続化レイヤー。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（TodoTask, TaskId, StorageKey, RepositoryError）
//! - **ports**: 抽象化レイヤー（KeyValueStore, Repository, Clock, IdGenerator）
//! - **storage**: 保存形式のレコード（TodoTaskDto）と RecordCodec
//! - **impls**: 実装（InMemory / File の KeyValueStore, KvTaskRepository）
//! - **app**: ファサード（TodoService, ApiService, ServiceBuilder）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod storage;

pub use app::{ApiService, ServiceBuilder, TodoService};
pub use domain::{RepositoryError, TaskId, TodoTask};
