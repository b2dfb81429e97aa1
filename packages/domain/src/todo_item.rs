//! # Todo アイテム
//!
//! タイトル・説明・完了フラグを持つ単一のエンティティ。
//!
//! ## ライフサイクル
//!
//! - 作成時にストアが `id` を採番する（以後不変）
//! - 更新は `title` / `description` / `completed` の全置換
//! - 削除は単体削除または全件削除（論理削除・履歴は持たない）
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::todo_item::{NewTodoItem, TodoItem, TodoItemId};
//!
//! // 省略可能なフィールドは既定値（description: None, completed: false）
//! let new_item = NewTodoItem::new("buy milk");
//! assert_eq!(new_item.description, None);
//! assert!(!new_item.completed);
//!
//! // ストアが採番した id と組み合わせてエンティティにする
//! let item = TodoItem::from_new(TodoItemId::from_i64(1), new_item);
//! assert_eq!(item.title(), "buy milk");
//! ```

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Todo アイテムの一意識別子
///
/// ストア（`INTEGER PRIMARY KEY`）が採番する整数。
/// JSON 上は素の整数としてシリアライズされる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct TodoItemId(i64);

impl TodoItemId {
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Todo アイテムの作成・更新パラメータ
///
/// 省略可能なフィールドの既定値をここで明示する:
///
/// - `description`: `None`
/// - `completed`: `false`
///
/// 更新（全置換）も同じ形状を受け取る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    pub title:       String,
    pub description: Option<String>,
    pub completed:   bool,
}

impl NewTodoItem {
    /// タイトルのみ指定し、他は既定値で作成する
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title:       title.into(),
            description: None,
            completed:   false,
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    pub fn with_completed(self, completed: bool) -> Self {
        Self { completed, ..self }
    }
}

/// Todo アイテムエンティティ
///
/// # 不変条件
///
/// - `id` はストアが採番済み
/// - `title` は常に存在する（空文字列は許容）
/// - `completed` は常に真偽値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id:          TodoItemId,
    title:       String,
    description: Option<String>,
    completed:   bool,
}

impl TodoItem {
    /// データベースの行から復元する
    pub fn from_db(
        id: TodoItemId,
        title: String,
        description: Option<String>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title,
            description,
            completed,
        }
    }

    /// 採番済みの id と作成パラメータから組み立てる
    pub fn from_new(id: TodoItemId, new_item: NewTodoItem) -> Self {
        Self::from_db(id, new_item.title, new_item.description, new_item.completed)
    }

    pub fn id(&self) -> TodoItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// 可変フィールドを全置換した新しいエンティティを返す（id は維持）
    pub fn replaced_with(self, fields: NewTodoItem) -> Self {
        Self::from_new(self.id, fields)
    }
}
