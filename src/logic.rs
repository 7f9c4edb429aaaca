//! Core behaviors behind the HTTP handlers.
//!
//! This includes:
//!   - Analyzing a learner's progress against the catalog
//!   - Building the learning-path view
//!   - Generating question batches (count defaults/caps, seed selection)
//!   - Rating the difficulty of one topic for one learner

use tracing::{debug, info, instrument};

use crate::analysis::{analyze_student_performance, calculate_difficulty, recommend_learning_path};
use crate::domain::{CurriculumTopic, DifficultyLevel, LearningPath, ProgressRecord, Question, RecommendationResult, StudentData};
use crate::questions::{clock_seed, QuestionGenerator};
use crate::state::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info", skip_all, fields(grade = %student.grade, progress = student.progress.len(), catalog = catalog.len()))]
pub fn do_analyze(student: &StudentData, catalog: &[CurriculumTopic]) -> RecommendationResult {
  let report = analyze_student_performance(student, catalog);
  info!(
    target: "mathify_backend",
    average = report.statistics.average_score,
    completion = report.statistics.completion_rate,
    recommended = report.recommended_topics.len(),
    remediation = !report.remedial_actions.is_empty(),
    "Performance analyzed"
  );
  report
}

#[instrument(level = "info", skip_all, fields(progress = student.progress.len(), available = available.len()))]
pub fn do_learning_path(student: &StudentData, available: &[CurriculumTopic]) -> LearningPath {
  let path = recommend_learning_path(student, available);
  info!(target: "mathify_backend", next = path.next_topics.len(), estimated = %path.estimated_time, "Learning path built");
  path
}

/// Seed precedence: request, then configured `fixed_seed`, then the wall clock.
pub fn pick_seed(state: &AppState, requested: Option<u64>) -> u64 {
  requested
    .or(state.config.generator.fixed_seed)
    .unwrap_or_else(clock_seed)
}

/// Returns the effective count alongside the batch, which may be shorter.
#[instrument(level = "info", skip(state, topic), fields(grade = %topic.grade, category = %topic.category))]
pub fn do_generate(
  state: &AppState,
  topic: &CurriculumTopic,
  count: Option<usize>,
  index: Option<u64>,
  seed: Option<u64>,
) -> (usize, Vec<Question>) {
  let cfg = &state.config.generator;
  let count = count.unwrap_or(cfg.default_count).min(cfg.max_count);
  let index = index.unwrap_or(0);
  let seed = pick_seed(state, seed);
  debug!(
    target: "mathify_backend",
    count,
    index,
    seed,
    outcome = %trunc_for_log(topic.outcome(), 80),
    generator = QuestionGenerator::generator_name(topic),
    "Generating questions"
  );

  let questions = state.generator.generate_batch(topic, count, index, seed, &mut rand::thread_rng());
  info!(target: "mathify_backend", requested = count, generated = questions.len(), "Questions generated");
  (count, questions)
}

pub fn difficulty_label(level: DifficultyLevel) -> &'static str {
  match level {
    DifficultyLevel::VeryEasy => "very easy",
    DifficultyLevel::Easy => "easy",
    DifficultyLevel::Medium => "medium",
    DifficultyLevel::Hard => "hard",
    DifficultyLevel::VeryHard => "very hard",
  }
}

#[instrument(level = "info", skip_all, fields(has_progress = progress.is_some()))]
pub fn do_difficulty(progress: Option<&ProgressRecord>) -> DifficultyLevel {
  let level = calculate_difficulty(progress);
  debug!(target: "mathify_backend", level = level.value(), "Difficulty rated");
  level
}
