//! テスト共通フィクスチャ
//!
//! インメモリ SQLite を使用する統合テストで共通利用するヘルパー。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use sqlx::SqlitePool;
use todo_infra::{db, repository::SqliteTodoItemRepository};

/// マイグレーション適用済みのインメモリ DB プールを作成する
///
/// `sqlite::memory:` は接続ごとに別 DB になるため、`max_connections(1)` で
/// 単一の物理接続を使い回す（アイドル切断もしない）。
pub async fn setup_pool() -> SqlitePool {
    let pool = db::pool_options()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("インメモリ DB への接続に失敗");

    db::run_migrations(&pool)
        .await
        .expect("マイグレーションの適用に失敗");

    pool
}

/// 空のテーブルを持つリポジトリを作成する
pub async fn setup_repository() -> (SqliteTodoItemRepository, SqlitePool) {
    let pool = setup_pool().await;
    (SqliteTodoItemRepository::new(pool.clone()), pool)
}
