//! # リポジトリ実装
//!
//! ## 設計方針
//!
//! - **トレイト境界**: ユースケース層は `Arc<dyn TodoItemRepository>` に依存する
//! - **データベース抽象化**: sqlx を使用し、SQLite 固有の処理をカプセル化
//! - **テスタビリティ**: インメモリのモック実装（`mock` モジュール）と差し替え可能

pub mod todo_item_repository;

pub use todo_item_repository::{SqliteTodoItemRepository, TodoItemRepository};
