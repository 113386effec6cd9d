use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};
use crate::server::pagination::{page_bounds, slice_page, PageQuery};

use super::category_map;

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: i64,
}

async fn get_categories(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResult<CategoriesResponse> {
    let all = categories::get_categories(&pool).await?;
    let page_slice = slice_page(&all, page);
    if page_slice.is_empty() && page > 1 {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(page_slice.to_vec()),
    }))
}

async fn get_category_questions(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResult<CategoryQuestionsResponse> {
    categories::get_category(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let (limit, offset) = page_bounds(page);
    let page_questions = questions::get_questions_for_category(&pool, id, limit, offset).await?;
    if page_questions.is_empty() && page > 1 {
        return Err(ApiError::NotFound);
    }
    let total_questions = questions::count_questions_for_category(&pool, id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page_questions,
        total_questions,
        current_category: id,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_category_questions))
        .with_state(state)
}
