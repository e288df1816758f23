//! Storage - 保存形式のレコードとコーデック
//!
//! - **dto**: `TodoTaskDto`（保存形式）と `TodoTask` との相互変換
//! - **codec**: `RecordCodec` trait と JSON 実装

pub mod codec;
pub mod dto;

pub use self::codec::{CodecError, JsonRecordCodec, RecordCodec};
pub use self::dto::TodoTaskDto;
