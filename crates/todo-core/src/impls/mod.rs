//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryKeyValueStore**: 開発・テスト用のストア
//! - **FileKeyValueStore**: JSON ファイルに永続化するストア
//! - **KvTaskRepository**: KeyValueStore 上のタスクリポジトリ

pub mod file_kv;
pub mod inmem_kv;
pub mod kv_repository;

// 主要な型を再エクスポート
pub use self::file_kv::FileKeyValueStore;
pub use self::inmem_kv::InMemoryKeyValueStore;
pub use self::kv_repository::{IdPolicy, KvTaskRepository};
