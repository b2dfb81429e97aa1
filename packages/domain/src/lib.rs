//! # Todo ドメイン層
//!
//! Todo アイテムのドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB など）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`todo_item`] - Todo アイテムエンティティと作成パラメータ

pub mod todo_item;
