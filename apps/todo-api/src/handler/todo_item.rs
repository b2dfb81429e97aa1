//! # Todo アイテムハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /items` - 一覧（`?title=` で完全一致の絞り込み）
//! - `GET /items/{id}` - 単体取得
//! - `POST /items` - 作成
//! - `POST /items/list` - 一括作成（`items_list` の順序で返す）
//! - `PUT /items/{id}` - 全置換更新
//! - `DELETE /items/{id}` - 単体削除
//! - `DELETE /items/all` - 全件削除
//!
//! ボディ・パス・クエリパラメータの抽出失敗は [`ApiError::Validation`]（422）に変換する。

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        Query,
        State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todo_domain::todo_item::{NewTodoItem, TodoItem, TodoItemId};
use todo_shared::MessageResponse;

use crate::{error::ApiError, usecase::TodoItemUseCaseImpl};

/// Todo アイテム API の共有状態
pub struct TodoItemState {
    pub usecase: TodoItemUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 作成・更新リクエスト
///
/// 未知のフィールドは無視する。`description` は `null` も受け付ける。
#[derive(Debug, Deserialize)]
pub struct CreateTodoItemRequest {
    pub title:       String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed:   bool,
}

impl From<CreateTodoItemRequest> for NewTodoItem {
    fn from(req: CreateTodoItemRequest) -> Self {
        NewTodoItem {
            title:       req.title,
            description: req.description,
            completed:   req.completed,
        }
    }
}

/// 一括作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateTodoItemsRequest {
    pub items_list: Vec<CreateTodoItemRequest>,
}

/// Todo アイテム DTO
///
/// 4 フィールドは常に出力する（`description` は `null` になりうる）。
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItemDto {
    pub id:          i64,
    pub title:       String,
    pub description: Option<String>,
    pub completed:   bool,
}

impl From<TodoItem> for TodoItemDto {
    fn from(item: TodoItem) -> Self {
        Self {
            id:          item.id().as_i64(),
            title:       item.title().to_string(),
            description: item.description().map(|s| s.to_string()),
            completed:   item.completed(),
        }
    }
}

/// 一括作成レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoItemListDto {
    pub items: Vec<TodoItemDto>,
}

/// 一覧のクエリパラメータ
///
/// 同じキーが複数回指定された場合は最後の値を採用する。
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListItemsQuery {
    pub title: Option<String>,
}

impl ListItemsQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let title = pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "title")
            .map(|(_, value)| value);
        Self { title }
    }
}

fn to_dtos(items: Vec<TodoItem>) -> Vec<TodoItemDto> {
    items.into_iter().map(TodoItemDto::from).collect()
}

// --- ハンドラ ---

/// GET /items
pub async fn list_items(
    State(state): State<Arc<TodoItemState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(pairs) = query?;
    let query = ListItemsQuery::from_pairs(pairs);

    let items = state.usecase.list_items(query.title.as_deref()).await?;

    Ok((StatusCode::OK, Json(to_dtos(items))))
}

/// GET /items/{id}
pub async fn get_item(
    State(state): State<Arc<TodoItemState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;

    let item = state.usecase.get_item(TodoItemId::from_i64(id)).await?;

    Ok((StatusCode::OK, Json(TodoItemDto::from(item))))
}

/// POST /items
pub async fn create_item(
    State(state): State<Arc<TodoItemState>>,
    payload: Result<Json<CreateTodoItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;

    let item = state.usecase.create_item(req.into()).await?;

    Ok((StatusCode::OK, Json(TodoItemDto::from(item))))
}

/// POST /items/list
///
/// 全件を単一トランザクションで作成し、入力順で返す。
pub async fn create_items(
    State(state): State<Arc<TodoItemState>>,
    payload: Result<Json<CreateTodoItemsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let new_items = req.items_list.into_iter().map(NewTodoItem::from).collect();

    let items = state.usecase.create_items(new_items).await?;

    Ok((
        StatusCode::OK,
        Json(TodoItemListDto {
            items: to_dtos(items),
        }),
    ))
}

/// PUT /items/{id}
///
/// 作成と同じ形状のボディで全フィールドを置換する。
pub async fn update_item(
    State(state): State<Arc<TodoItemState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CreateTodoItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let Json(req) = payload?;

    let item = state
        .usecase
        .update_item(TodoItemId::from_i64(id), req.into())
        .await?;

    Ok((StatusCode::OK, Json(TodoItemDto::from(item))))
}

/// DELETE /items/{id}
pub async fn delete_item(
    State(state): State<Arc<TodoItemState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;

    state.usecase.delete_item(TodoItemId::from_i64(id)).await?;

    Ok((StatusCode::OK, Json(MessageResponse::new("Item deleted"))))
}

/// DELETE /items/all
pub async fn delete_all_items(
    State(state): State<Arc<TodoItemState>>,
) -> Result<impl IntoResponse, ApiError> {
    state.usecase.delete_all_items().await?;

    Ok((StatusCode::OK, Json(MessageResponse::new("All item deleted"))))
}
