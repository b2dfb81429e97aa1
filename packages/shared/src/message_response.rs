//! # メッセージレスポンス
//!
//! 削除系エンドポイントのように、返すべきリソースを持たない操作の
//! 完了通知 `{ "message": "..." }` を表現する。

use serde::{Deserialize, Serialize};

/// 操作完了メッセージ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
