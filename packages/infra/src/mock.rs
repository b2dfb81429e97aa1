//! # テスト用モックリポジトリ
//!
//! ハンドラ・ユースケースのテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! SQLite 実装と同じ振る舞い（id の昇順、採番の単調増加、全置換更新）を再現する。

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicBool, AtomicI64, Ordering},
};

use async_trait::async_trait;
use todo_domain::todo_item::{NewTodoItem, TodoItem, TodoItemId};

use crate::{error::InfraError, repository::TodoItemRepository};

// ===== MockTodoItemRepository =====

#[derive(Clone)]
pub struct MockTodoItemRepository {
    items:   Arc<Mutex<Vec<TodoItem>>>,
    next_id: Arc<AtomicI64>,
    failing: Arc<AtomicBool>,
}

impl Default for MockTodoItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTodoItemRepository {
    pub fn new() -> Self {
        Self {
            items:   Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 以降のすべての操作をストアエラーにする
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// 現在保持しているアイテムのスナップショット
    pub fn items(&self) -> Vec<TodoItem> {
        self.items.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), InfraError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(())
    }

    fn allocate(&self, item: NewTodoItem) -> TodoItem {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        TodoItem::from_new(TodoItemId::from_i64(id), item)
    }
}

#[async_trait]
impl TodoItemRepository for MockTodoItemRepository {
    async fn find_all(&self, title: Option<&str>) -> Result<Vec<TodoItem>, InfraError> {
        self.check_available()?;
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|item| title.is_none_or(|t| item.title() == t))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: TodoItemId) -> Result<Option<TodoItem>, InfraError> {
        self.check_available()?;
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.id() == id)
            .cloned())
    }

    async fn insert(&self, item: &NewTodoItem) -> Result<TodoItem, InfraError> {
        self.check_available()?;
        let created = self.allocate(item.clone());
        self.items.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn insert_all(&self, items: &[NewTodoItem]) -> Result<Vec<TodoItem>, InfraError> {
        self.check_available()?;
        let created: Vec<TodoItem> = items.iter().cloned().map(|i| self.allocate(i)).collect();
        self.items.lock().unwrap().extend(created.iter().cloned());
        Ok(created)
    }

    async fn update(
        &self,
        id: TodoItemId,
        fields: &NewTodoItem,
    ) -> Result<Option<TodoItem>, InfraError> {
        self.check_available()?;
        let mut items = self.items.lock().unwrap();
        let Some(pos) = items.iter().position(|item| item.id() == id) else {
            return Ok(None);
        };
        let updated = items[pos].clone().replaced_with(fields.clone());
        items[pos] = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: TodoItemId) -> Result<bool, InfraError> {
        self.check_available()?;
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id() != id);
        Ok(items.len() < before)
    }

    async fn delete_all(&self) -> Result<u64, InfraError> {
        self.check_available()?;
        let mut items = self.items.lock().unwrap();
        let count = items.len() as u64;
        items.clear();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_insertで連番のidが採番される() {
        let repo = MockTodoItemRepository::new();

        let a = repo.insert(&NewTodoItem::new("a")).await.unwrap();
        let b = repo.insert(&NewTodoItem::new("b")).await.unwrap();

        assert_eq!(a.id(), TodoItemId::from_i64(1));
        assert_eq!(b.id(), TodoItemId::from_i64(2));
    }

    #[tokio::test]
    async fn test_全件削除後もidは再利用されない() {
        let repo = MockTodoItemRepository::new();
        repo.insert(&NewTodoItem::new("a")).await.unwrap();

        assert_eq!(repo.delete_all().await.unwrap(), 1);
        let b = repo.insert(&NewTodoItem::new("b")).await.unwrap();

        assert_eq!(b.id(), TodoItemId::from_i64(2));
    }

    #[tokio::test]
    async fn test_存在しないidの更新はnoneを返す() {
        let repo = MockTodoItemRepository::new();

        let result = repo
            .update(TodoItemId::from_i64(99), &NewTodoItem::new("x"))
            .await
            .unwrap();

        assert_eq!(result, None);
        assert!(repo.items().is_empty());
    }

    #[tokio::test]
    async fn test_fail_all後はエラーを返す() {
        let repo = MockTodoItemRepository::new();
        repo.fail_all();

        assert!(repo.find_all(None).await.is_err());
        assert!(repo.insert(&NewTodoItem::new("a")).await.is_err());
    }
}
