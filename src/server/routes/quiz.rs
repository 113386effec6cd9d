use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::questions;
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::ApiResult;
use crate::telemetry::QUESTIONS_SERVED;

/// Category id 0 is the frontend's "all categories" sentinel.
const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize)]
struct PlayBody {
    #[serde(default)]
    previous_questions: Vec<i64>,
    quiz_category: Option<QuizCategory>,
}

#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

#[derive(Serialize)]
struct PlayResponse {
    success: bool,
    question: Option<Question>,
}

async fn play(
    State(pool): State<SqlitePool>,
    Json(body): Json<PlayBody>,
) -> ApiResult<PlayResponse> {
    let category = body
        .quiz_category
        .map(|c| c.id)
        .filter(|&id| id != ALL_CATEGORIES);

    let question =
        questions::random_unseen_question(&pool, category, &body.previous_questions).await?;

    if let Some(q) = &question {
        QUESTIONS_SERVED
            .with_label_values(&[q.category.to_string().as_str()])
            .inc();
    }

    Ok(Json(PlayResponse {
        success: true,
        question,
    }))
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new().route("/play", post(play)).with_state(state)
}
