//! Todo アイテム管理ユースケース

use std::sync::Arc;

use todo_domain::todo_item::{NewTodoItem, TodoItem, TodoItemId};
use todo_infra::repository::TodoItemRepository;

use crate::error::ApiError;

/// Todo アイテム管理ユースケース
pub struct TodoItemUseCaseImpl {
    repository: Arc<dyn TodoItemRepository>,
}

impl TodoItemUseCaseImpl {
    pub fn new(repository: Arc<dyn TodoItemRepository>) -> Self {
        Self { repository }
    }

    /// 一覧を取得する（`title` 指定時は完全一致で絞り込み）
    pub async fn list_items(&self, title: Option<&str>) -> Result<Vec<TodoItem>, ApiError> {
        Ok(self.repository.find_all(title).await?)
    }

    pub async fn get_item(&self, id: TodoItemId) -> Result<TodoItem, ApiError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(ApiError::item_not_found)
    }

    pub async fn create_item(&self, new_item: NewTodoItem) -> Result<TodoItem, ApiError> {
        let item = self.repository.insert(&new_item).await?;
        tracing::info!(item_id = %item.id(), "Todo アイテムを作成しました");
        Ok(item)
    }

    /// 複数件をまとめて作成する
    ///
    /// 1 件でも失敗した場合は何も作成されない。
    pub async fn create_items(&self, new_items: Vec<NewTodoItem>) -> Result<Vec<TodoItem>, ApiError> {
        let items = self.repository.insert_all(&new_items).await?;
        tracing::info!(count = items.len(), "Todo アイテムを一括作成しました");
        Ok(items)
    }

    /// 可変フィールドを全置換する
    pub async fn update_item(
        &self,
        id: TodoItemId,
        fields: NewTodoItem,
    ) -> Result<TodoItem, ApiError> {
        let item = self
            .repository
            .update(id, &fields)
            .await?
            .ok_or_else(ApiError::item_not_found)?;
        tracing::info!(item_id = %id, "Todo アイテムを更新しました");
        Ok(item)
    }

    pub async fn delete_item(&self, id: TodoItemId) -> Result<(), ApiError> {
        if !self.repository.delete(id).await? {
            return Err(ApiError::item_not_found());
        }
        tracing::info!(item_id = %id, "Todo アイテムを削除しました");
        Ok(())
    }

    /// 全件削除する（0 件でも成功）
    pub async fn delete_all_items(&self) -> Result<u64, ApiError> {
        let count = self.repository.delete_all().await?;
        tracing::info!(count, "Todo アイテムを全件削除しました");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use todo_infra::mock::MockTodoItemRepository;

    use super::*;

    fn create_sut() -> (TodoItemUseCaseImpl, MockTodoItemRepository) {
        let repo = MockTodoItemRepository::new();
        let sut = TodoItemUseCaseImpl::new(Arc::new(repo.clone()));
        (sut, repo)
    }

    #[tokio::test]
    async fn test_作成したアイテムを取得できる() {
        let (sut, _repo) = create_sut();

        let created = sut
            .create_item(NewTodoItem::new("buy milk"))
            .await
            .unwrap();
        let found = sut.get_item(created.id()).await.unwrap();

        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_存在しないidの取得はnot_found() {
        let (sut, _repo) = create_sut();

        let result = sut.get_item(TodoItemId::from_i64(99)).await;

        assert!(matches!(result, Err(ApiError::NotFound(msg)) if msg == "Item not found"));
    }

    #[tokio::test]
    async fn test_存在しないidの更新はnot_foundでデータを変更しない() {
        let (sut, repo) = create_sut();
        let existing = sut.create_item(NewTodoItem::new("keep")).await.unwrap();

        let result = sut
            .update_item(TodoItemId::from_i64(99), NewTodoItem::new("x"))
            .await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
        assert_eq!(repo.items(), vec![existing]);
    }

    #[tokio::test]
    async fn test_存在しないidの削除はnot_found() {
        let (sut, _repo) = create_sut();

        let result = sut.delete_item(TodoItemId::from_i64(99)).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_全件削除後の一覧は空() {
        let (sut, _repo) = create_sut();
        sut.create_items(vec![NewTodoItem::new("a"), NewTodoItem::new("b")])
            .await
            .unwrap();

        let count = sut.delete_all_items().await.unwrap();
        let items = sut.list_items(None).await.unwrap();

        assert_eq!(count, 2);
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_ストアエラーはdatabaseエラーになる() {
        let (sut, repo) = create_sut();
        repo.fail_all();

        let result = sut.list_items(None).await;

        assert!(matches!(result, Err(ApiError::Database(_))));
    }
}
