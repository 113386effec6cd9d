use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

pub async fn get_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as(
        r#"
SELECT id, name
FROM categories
ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as(
        r#"
        SELECT id, name FROM categories WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_category(pool: &SqlitePool, name: &str) -> anyhow::Result<i64> {
    let id = sqlx::query(
        r#"
INSERT INTO categories (name) VALUES (?1)
        "#,
    )
    .bind(name)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn import_categories(pool: &SqlitePool, categories: Vec<Category>) -> anyhow::Result<()> {
    for category in categories {
        sqlx::query(
            r#"
INSERT INTO categories (id, name) VALUES (?1, ?2)
ON CONFLICT (id) DO UPDATE SET name = excluded.name
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .execute(pool)
        .await?;
    }
    Ok(())
}
