//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 形式
//!
//! ```json
//! { "detail": "Item not found" }
//! ```
//!
//! 既存クライアントとの互換性のため、`detail` のみを持つフラットな形式とする。
//! HTTP ステータスコードはレスポンスのステータスラインで表現し、ボディには含めない。

use serde::{Deserialize, Serialize};

/// 500 系エラーで返す固定メッセージ
const INTERNAL_ERROR_DETAIL: &str = "Internal Server Error";

/// エラーレスポンス
///
/// `IntoResponse` への変換は各アプリの責務（shared に axum 依存を入れない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    /// 任意のメッセージでエラーレスポンスを作成する
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// 500 Internal Server Error
    ///
    /// detail は固定値（内部情報を漏らさないため）。
    pub fn internal_error() -> Self {
        Self::new(INTERNAL_ERROR_DETAIL)
    }
}
