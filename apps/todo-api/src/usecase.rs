//! # ユースケース層
//!
//! Todo API のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは DTO 変換のみ、存在確認とログはユースケースに集約

pub mod todo_item;

pub use todo_item::TodoItemUseCaseImpl;
