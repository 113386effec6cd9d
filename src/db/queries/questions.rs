use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

pub async fn get_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_questions_page(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions ORDER BY id LIMIT ?1 OFFSET ?2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count_questions(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await
}

pub async fn get_question(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category: i64,
    limit: i64,
    offset: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions WHERE category = ?1 ORDER BY id LIMIT ?2 OFFSET ?3
        "#,
    )
    .bind(category)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count_questions_for_category(pool: &SqlitePool, category: i64) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE category = ?1")
        .bind(category)
        .fetch_one(pool)
        .await
}

pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions WHERE question LIKE '%' || ?1 || '%' ORDER BY id
        "#,
    )
    .bind(term)
    .fetch_all(pool)
    .await
}

pub async fn create_question(
    pool: &SqlitePool,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> anyhow::Result<i64> {
    let id = sqlx::query(
        r#"
INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Returns how many rows were deleted, which is zero for an unknown id.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Picks one question the client has not seen yet, uniformly at random.
///
/// The seen set comes straight from the client, so the query is assembled
/// with one positional placeholder per id rather than a prepared statement
/// with a fixed shape.
pub async fn random_unseen_question(
    pool: &SqlitePool,
    category: Option<i64>,
    seen: &[i64],
) -> sqlx::Result<Option<Question>> {
    let mut sql =
        String::from("SELECT id, question, answer, category, difficulty FROM questions");
    let mut clauses = Vec::new();
    if category.is_some() {
        clauses.push("category = ?".to_owned());
    }
    if !seen.is_empty() {
        let placeholders = vec!["?"; seen.len()].join(", ");
        clauses.push(format!("id NOT IN ({placeholders})"));
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY RANDOM() LIMIT 1");

    let mut query = sqlx::query_as(&sql);
    if let Some(category) = category {
        query = query.bind(category);
    }
    for id in seen {
        query = query.bind(id);
    }
    query.fetch_optional(pool).await
}

pub async fn import_questions(pool: &SqlitePool, questions: Vec<Question>) -> anyhow::Result<()> {
    for q in questions {
        sqlx::query(
            r#"
INSERT INTO questions (id, question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4, ?5)
ON CONFLICT (id) DO UPDATE SET
    question = excluded.question,
    answer = excluded.answer,
    category = excluded.category,
    difficulty = excluded.difficulty
            "#,
        )
        .bind(q.id)
        .bind(&q.question)
        .bind(&q.answer)
        .bind(q.category)
        .bind(q.difficulty)
        .execute(pool)
        .await?;
    }
    Ok(())
}
