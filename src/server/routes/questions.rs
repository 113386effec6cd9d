use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};
use crate::server::pagination::{page_bounds, PageQuery};

use super::category_map;

#[derive(Deserialize)]
struct NewQuestion {
    question: String,
    answer: String,
    category: i64,
    difficulty: i64,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

#[derive(Serialize)]
struct QuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    categories: BTreeMap<i64, String>,
    current_category: Option<i64>,
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i64,
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    created: i64,
}

#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: i64,
}

async fn get_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResult<QuestionsResponse> {
    let (limit, offset) = page_bounds(page);
    let page_questions = questions::get_questions_page(&pool, limit, offset).await?;
    if page_questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let total_questions = questions::count_questions(&pool).await?;
    let all_categories = categories::get_categories(&pool).await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: page_questions,
        total_questions,
        categories: category_map(all_categories),
        current_category: None,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResult<DeletedResponse> {
    let deleted = questions::delete_question(&pool, id).await?;
    if deleted == 0 {
        return Err(ApiError::Unprocessable);
    }
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Json(new_question): Json<NewQuestion>,
) -> ApiResult<CreatedResponse> {
    // The store would reject the row too; checking first keeps constraint
    // violations out of the 500 path.
    categories::get_category(&pool, new_question.category)
        .await?
        .ok_or(ApiError::Unprocessable)?;

    let id = questions::create_question(
        &pool,
        &new_question.question,
        &new_question.answer,
        new_question.category,
        new_question.difficulty,
    )
    .await
    .map_err(|_| ApiError::Unprocessable)?;

    Ok(Json(CreatedResponse {
        success: true,
        created: id,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    Json(SearchBody { search_term }): Json<SearchBody>,
) -> ApiResult<SearchResponse> {
    let matches = questions::search_questions(&pool, &search_term).await?;
    let current_category = matches.first().map(|q| q.category).unwrap_or(0);

    Ok(Json(SearchResponse {
        success: true,
        total_questions: matches.len() as i64,
        questions: matches,
        current_category,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(get_questions))
        .route("/questions/{id}", delete(delete_question))
        .route("/add", post(create_question))
        .route("/questions/search", post(search_questions))
        .with_state(state)
}
