//! # アプリケーション構築
//!
//! DI（リポジトリ・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};
use sqlx::SqlitePool;
use todo_infra::repository::{SqliteTodoItemRepository, TodoItemRepository};
use todo_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        ReadinessState,
        TodoItemState,
        create_item,
        create_items,
        delete_all_items,
        delete_item,
        get_item,
        health_check,
        list_items,
        readiness_check,
        update_item,
    },
    usecase::TodoItemUseCaseImpl,
};

/// Todo アイテム API のルーター
///
/// `/items/list` と `/items/all` は静的ルートのため `/items/{id}` より優先される。
/// 一括作成の件数に上限を設けないため、axum 既定のボディサイズ上限（2 MB）を外す。
pub fn todo_item_routes(state: Arc<TodoItemState>) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/list", post(create_items))
        .route("/items/all", delete(delete_all_items))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

/// DB プールから依存コンポーネントを組み立て、ルーターを構築する
pub fn build_app(pool: SqlitePool) -> Router {
    let repository: Arc<dyn TodoItemRepository> =
        Arc::new(SqliteTodoItemRepository::new(pool.clone()));
    let todo_item_state = Arc::new(TodoItemState {
        usecase: TodoItemUseCaseImpl::new(repository),
    });
    let readiness_state = Arc::new(ReadinessState { pool });

    // ミドルウェアは後に追加したものほど外側:
    // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
    // 2. TraceLayer: スパンに request_id を含める
    // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(todo_item_routes(todo_item_state))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
