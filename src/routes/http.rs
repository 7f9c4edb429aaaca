//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs request sizes and basic result info.

use std::sync::Arc;
use axum::{extract::State, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::protocol::*;
use crate::state::AppState;
use crate::logic::*;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(body), fields(progress = body.student_data.progress.len(), catalog = body.curriculum_topics.len()))]
pub async fn http_post_analysis(Json(body): Json<AnalysisIn>) -> impl IntoResponse {
  let analysis = do_analyze(&body.student_data, &body.curriculum_topics);
  Json(AnalysisOut { success: true, analysis })
}

#[instrument(level = "info", skip(body), fields(progress = body.student_data.progress.len(), available = body.available_topics.len()))]
pub async fn http_post_learning_path(Json(body): Json<LearningPathIn>) -> impl IntoResponse {
  let recommendations = do_learning_path(&body.student_data, &body.available_topics);
  Json(LearningPathOut { success: true, recommendations })
}

#[instrument(level = "info", skip(state, body), fields(topic_id = body.topic.id, count = ?body.count, index = ?body.index))]
pub async fn http_post_questions(
  State(state): State<Arc<AppState>>,
  Json(body): Json<QuestionsIn>,
) -> impl IntoResponse {
  let (requested, questions) = do_generate(&state, &body.topic, body.count, body.index, body.seed);
  info!(target: "questions", topic_id = body.topic.id, requested, served = questions.len(), "HTTP questions served");
  Json(QuestionsOut { success: true, requested, questions })
}

#[instrument(level = "info", skip(body), fields(has_progress = body.progress.is_some()))]
pub async fn http_post_difficulty(Json(body): Json<DifficultyIn>) -> impl IntoResponse {
  let level = do_difficulty(body.progress.as_ref());
  Json(DifficultyOut { level: level.value(), label: difficulty_label(level).to_string() })
}
