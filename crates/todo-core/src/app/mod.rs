//! App - アプリケーション層
//!
//! ports を組み合わせて、外部に見せるファサードを組み立てます。
//!
//! # 主要コンポーネント
//! - **TodoService / ApiService**: callback 形式と async 形式の CRUD
//! - **Completion / resolve**: callback → async のアダプタ
//! - **ServiceBuilder**: 構築と設定の検証
//! - **sample_tasks**: デモ用データ

pub mod builder;
pub mod completion;
pub mod samples;
pub mod service;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, ServiceBuilder};
pub use self::completion::{Completion, resolve};
pub use self::samples::sample_tasks;
pub use self::service::{ApiService, TodoService};
