//! # Todo API エラー定義
//!
//! API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | バリアント | ステータス | `detail` |
//! |-----------|-----------|----------|
//! | `NotFound` | 404 | 呼び出し側が指定したメッセージ |
//! | `Validation` | 422 | 抽出失敗の理由（ボディ・パス・クエリ） |
//! | `Database` | 500 | `"Internal Server Error"`（詳細はログのみ） |

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_infra::InfraError;
use todo_shared::ErrorResponse;

/// Todo API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// リクエストの形式が不正（ボディ・パス・クエリパラメータ）
    #[error("入力が不正です: {0}")]
    Validation(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl ApiError {
    /// Todo アイテムが存在しない場合の 404
    pub fn item_not_found() -> Self {
        Self::NotFound("Item not found".to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, ErrorResponse::new(detail)),
            ApiError::Validation(detail) => {
                tracing::debug!(%detail, "リクエストの検証に失敗しました");
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorResponse::new(detail))
            }
            ApiError::Database(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    async fn into_parts(error: ApiError) -> (StatusCode, ErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_foundは404とdetailを返す() {
        let (status, body) = into_parts(ApiError::item_not_found()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, ErrorResponse::new("Item not found"));
    }

    #[tokio::test]
    async fn test_validationは422を返す() {
        let (status, body) = into_parts(ApiError::Validation("missing field".to_string())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.detail, "missing field");
    }

    #[tokio::test]
    async fn test_databaseは500と固定メッセージを返す() {
        let error = ApiError::from(InfraError::from(sqlx::Error::PoolTimedOut));

        let (status, body) = into_parts(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, ErrorResponse::internal_error());
    }
}
