//! # SQLite データベース接続管理
//!
//! 接続プールの作成、スキーマの適用（マイグレーション）、疎通確認を行う。
//!
//! ## 接続のライフサイクル
//!
//! リポジトリはクエリごと（バッチ作成ではトランザクションごと）にプールから
//! 接続を借り、ドロップ時にプールへ返却する。コミットされずにドロップされた
//! トランザクションは sqlx が自動的にロールバックする。
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todo_infra::db;
//!
//! async fn example() -> Result<(), todo_infra::InfraError> {
//!     let pool = db::create_pool("sqlite://todo.db").await?;
//!     db::run_migrations(&pool).await?;
//!     db::check_connection(&pool).await?;
//!     Ok(())
//! }
//! ```

use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::error::InfraError;

/// 疎通確認のタイムアウト
const CHECK_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// アプリケーション共通の `SqlitePoolOptions` を返す
///
/// テストでは `max_connections(1)` と組み合わせてインメモリ DB を共有する。
pub fn pool_options() -> SqlitePoolOptions {
    SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(5))
}

/// 接続 URL がインメモリ DB を指しているか
fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// SQLite 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、作成したプールを共有する。
/// ファイルが存在しない場合は新規作成する。
///
/// インメモリ DB は接続ごとに別の DB になるため、単一の接続を
/// 切断せずに使い続ける（マイグレーション済みのスキーマを全クエリで共有する）。
///
/// # 引数
///
/// * `database_url` - 接続 URL（例: `sqlite://todo.db`, `sqlite::memory:`）
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, InfraError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let builder = if is_in_memory(database_url) {
        pool_options()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options().max_connections(10)
    };

    let pool = builder.connect_with(options).await?;

    Ok(pool)
}

/// データベースマイグレーションを実行する
///
/// `sqlx::migrate!()` で埋め込まれたマイグレーションを順に適用する。
/// 適用済みのものはスキップされるため、起動のたびに呼び出してよい。
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), InfraError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// データベースへの疎通を確認する（タイムアウト: 5 秒）
///
/// Readiness Check から呼び出される。
#[tracing::instrument(skip_all, level = "debug")]
pub async fn check_connection(pool: &SqlitePool) -> Result<(), InfraError> {
    match tokio::time::timeout(
        CHECK_CONNECTION_TIMEOUT,
        sqlx::query("SELECT 1").execute(pool),
    )
    .await
    {
        Ok(result) => {
            result?;
            Ok(())
        }
        Err(_) => Err(InfraError::timeout(format!(
            "{} 秒以内に応答がありませんでした",
            CHECK_CONNECTION_TIMEOUT.as_secs()
        ))),
    }
}
