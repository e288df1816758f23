//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部のストレージや時刻・ID 生成へのインターフェースを提供し、
//! 実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - KeyValueStore が正本（source of truth）
//! - Repository はキーの導出とレコードの (de)serialize だけを担う

pub mod clock;
pub mod id_generator;
pub mod kv_store;
pub mod repository;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::kv_store::{KeyValueStore, StoreError};
pub use self::repository::{ListReport, Repository};
