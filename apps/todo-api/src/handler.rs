//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックはユースケース層に委譲

pub mod health;
pub mod todo_item;

pub use health::{ReadinessState, health_check, readiness_check};
pub use todo_item::{
    TodoItemState,
    create_item,
    create_items,
    delete_all_items,
    delete_item,
    get_item,
    list_items,
    update_item,
};
