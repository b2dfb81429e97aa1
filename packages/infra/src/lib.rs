//! # Todo インフラ層
//!
//! データベースとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: SQLite 接続プールの作成とマイグレーション適用
//! - **リポジトリ実装**: Todo アイテムの永続化
//! - **テスト用モック**: `test-utils` feature でインメモリ実装を公開
//!
//! ## 依存関係
//!
//! ```text
//! todo-api → infra → domain
//! ```
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todo_infra::{db, repository::SqliteTodoItemRepository};
//!
//! let pool = db::create_pool("sqlite://todo.db").await?;
//! db::run_migrations(&pool).await?;
//! let repository = SqliteTodoItemRepository::new(pool);
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
