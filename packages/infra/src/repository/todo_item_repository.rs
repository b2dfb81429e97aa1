//! # TodoItemRepository
//!
//! Todo アイテムの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **採番はストア**: `INSERT ... RETURNING` で採番済みの行をそのまま返す
//! - **バッチ作成はトランザクション**: 全件コミットか全件ロールバックのどちらか
//! - **更新は 1 文**: `UPDATE ... RETURNING` により、存在しない id では何も変更しない

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use todo_domain::todo_item::{NewTodoItem, TodoItem, TodoItemId};

use crate::error::InfraError;

/// Todo アイテムリポジトリトレイト
#[async_trait]
pub trait TodoItemRepository: Send + Sync {
    /// 全件を取得する（`title` 指定時は完全一致するもののみ）
    ///
    /// id の昇順で返す。
    async fn find_all(&self, title: Option<&str>) -> Result<Vec<TodoItem>, InfraError>;

    /// ID で検索する
    async fn find_by_id(&self, id: TodoItemId) -> Result<Option<TodoItem>, InfraError>;

    /// 1 件挿入し、採番済みのエンティティを返す
    async fn insert(&self, item: &NewTodoItem) -> Result<TodoItem, InfraError>;

    /// 複数件を単一トランザクションで挿入する
    ///
    /// 戻り値は入力と同じ順序。1 件でも失敗した場合は何も挿入されない。
    async fn insert_all(&self, items: &[NewTodoItem]) -> Result<Vec<TodoItem>, InfraError>;

    /// 可変フィールドを全置換する
    ///
    /// 存在しない id の場合は `None` を返し、何も変更しない。
    async fn update(
        &self,
        id: TodoItemId,
        fields: &NewTodoItem,
    ) -> Result<Option<TodoItem>, InfraError>;

    /// 1 件削除する
    ///
    /// 削除した場合は `true`、存在しなかった場合は `false`。
    async fn delete(&self, id: TodoItemId) -> Result<bool, InfraError>;

    /// 全件削除し、削除件数を返す
    async fn delete_all(&self) -> Result<u64, InfraError>;
}

/// `todo_items` テーブルの行
#[derive(Debug, FromRow)]
struct TodoItemRow {
    id:          i64,
    title:       String,
    description: Option<String>,
    completed:   bool,
}

impl From<TodoItemRow> for TodoItem {
    fn from(row: TodoItemRow) -> Self {
        TodoItem::from_db(
            TodoItemId::from_i64(row.id),
            row.title,
            row.description,
            row.completed,
        )
    }
}

const INSERT_RETURNING: &str = r#"
    INSERT INTO todo_items (title, description, completed)
    VALUES (?, ?, ?)
    RETURNING id, title, description, completed
"#;

/// SQLite 実装の TodoItemRepository
#[derive(Debug, Clone)]
pub struct SqliteTodoItemRepository {
    pool: SqlitePool,
}

impl SqliteTodoItemRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoItemRepository for SqliteTodoItemRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(title = ?title))]
    async fn find_all(&self, title: Option<&str>) -> Result<Vec<TodoItem>, InfraError> {
        let rows = match title {
            Some(title) => {
                sqlx::query_as::<_, TodoItemRow>(
                    r#"
                    SELECT id, title, description, completed
                    FROM todo_items
                    WHERE title = ?
                    ORDER BY id ASC
                    "#,
                )
                .bind(title)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TodoItemRow>(
                    r#"
                    SELECT id, title, description, completed
                    FROM todo_items
                    ORDER BY id ASC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(TodoItem::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: TodoItemId) -> Result<Option<TodoItem>, InfraError> {
        let row = sqlx::query_as::<_, TodoItemRow>(
            r#"
            SELECT id, title, description, completed
            FROM todo_items
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoItem::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, item: &NewTodoItem) -> Result<TodoItem, InfraError> {
        let row = sqlx::query_as::<_, TodoItemRow>(INSERT_RETURNING)
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.completed)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(count = items.len()))]
    async fn insert_all(&self, items: &[NewTodoItem]) -> Result<Vec<TodoItem>, InfraError> {
        // commit 前に `?` で抜けた場合、tx のドロップでロールバックされる
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(items.len());

        for item in items {
            let row = sqlx::query_as::<_, TodoItemRow>(INSERT_RETURNING)
                .bind(&item.title)
                .bind(&item.description)
                .bind(item.completed)
                .fetch_one(&mut *tx)
                .await?;
            inserted.push(TodoItem::from(row));
        }

        tx.commit().await?;

        Ok(inserted)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(
        &self,
        id: TodoItemId,
        fields: &NewTodoItem,
    ) -> Result<Option<TodoItem>, InfraError> {
        let row = sqlx::query_as::<_, TodoItemRow>(
            r#"
            UPDATE todo_items
            SET title = ?, description = ?, completed = ?
            WHERE id = ?
            RETURNING id, title, description, completed
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.completed)
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoItem::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: TodoItemId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todo_items
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn delete_all(&self) -> Result<u64, InfraError> {
        let result = sqlx::query("DELETE FROM todo_items")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
