//! RecordCodec - TodoTaskDto とバイト列の相互変換
//!
//! # フロー
//! 1. Repository が KeyValueStore からバイト列を取得
//! 2. serde_json で TodoTaskDto にデシリアライズ
//! 3. 失敗時は `CodecError::Decode`（Repository が `DecodingFailed` に包む）

use thiserror::Error;

use super::dto::TodoTaskDto;

/// CodecError はエンコード/デコードの失敗
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("encode: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("decode: {0}")]
    Decode(#[source] serde_json::Error),
}

/// RecordCodec は保存レコードを不透明なバイト列に変換する
pub trait RecordCodec: Send + Sync {
    fn encode(&self, record: &TodoTaskDto) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, bytes: &[u8]) -> Result<TodoTaskDto, CodecError>;
}

/// JSON 実装
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecordCodec;

impl RecordCodec for JsonRecordCodec {
    fn encode(&self, record: &TodoTaskDto) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(record).map_err(CodecError::Encode)
    }

    fn decode(&self, bytes: &[u8]) -> Result<TodoTaskDto, CodecError> {
        serde_json::from_slice(bytes).map_err(CodecError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn record(avatar: &str, is_complete: bool) -> TodoTaskDto {
        TodoTaskDto {
            id: TaskId::new("t1"),
            avatar: avatar.to_string(),
            username: "hsimpson".into(),
            title: "Do groceries".into(),
            description: "Go to the supermarket".into(),
            date: Utc.with_ymd_and_hms(2023, 11, 3, 10, 10, 0).unwrap(),
            is_complete,
        }
    }

    #[rstest]
    #[case("", false)]
    #[case("https://example.com/homer.png", true)]
    fn decode_inverts_encode(#[case] avatar: &str, #[case] is_complete: bool) {
        let codec = JsonRecordCodec;
        let original = record(avatar, is_complete);
        let bytes = codec.encode(&original).unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), original);
    }

    #[test]
    fn wire_uses_renamed_fields() {
        let bytes = JsonRecordCodec.encode(&record("a.png", true)).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "t1",
                "avatarUrl": "a.png",
                "username": "hsimpson",
                "title": "Do groceries",
                "description": "Go to the supermarket",
                "date": "2023-11-03T10:10:00Z",
                "isCompleted": true,
            })
        );
        assert!(value.get("avatar").is_none());
        assert!(value.get("isComplete").is_none());
    }

    #[rstest]
    #[case::not_json(b"not json".as_slice())]
    #[case::missing_title(br#"{"id":"t1","avatarUrl":"","username":"u","description":"d","date":"2023-11-03T10:10:00Z"}"#.as_slice())]
    #[case::missing_is_completed(br#"{"id":"t1","avatarUrl":"","username":"u","title":"t","description":"d","date":"2023-11-03T10:10:00Z"}"#.as_slice())]
    #[case::memory_field_names(br#"{"id":"t1","avatar":"","username":"u","title":"t","description":"d","date":"2023-11-03T10:10:00Z"}"#.as_slice())]
    fn malformed_blobs_fail_to_decode(#[case] bytes: &[u8]) {
        assert!(matches!(
            JsonRecordCodec.decode(bytes),
            Err(CodecError::Decode(_))
        ));
    }
}
