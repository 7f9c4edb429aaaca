//! Rule-based performance analysis and topic recommendation.
//!
//! Everything here is derived per call from the caller's progress snapshot and
//! catalog; nothing is learned or stored between calls. Score bands:
//!   - excellent       : average >= 90
//!   - good            : 70..=89
//!   - needs practice  : 50..=69
//!   - weak            : below 50

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::domain::{
  Category, CurriculumTopic, DifficultyLevel, Grade, LearningPath, PerformanceStatistics,
  ProgressRecord, RecommendationResult, StudentData,
};
use crate::stats::calculate_statistics;
use crate::util::fill_template;

pub const EXCELLENT: f64 = 90.0;
pub const GOOD: f64 = 70.0;
pub const NEEDS_PRACTICE: f64 = 50.0;
pub const WEAK: f64 = 0.0;

const MAX_LISTED: usize = 3;
const MAX_REMEDIATION_PICKS: usize = 2;
const MAX_SKIP_AHEAD_PICKS: usize = 2;
/// Mastery skip-ahead also requires this completion rate.
const SKIP_AHEAD_COMPLETION: u32 = 80;
/// Remediation triggers below this completion rate.
const REMEDIATION_COMPLETION: u32 = 50;
/// Repeated failure: this many attempts while under `NEEDS_PRACTICE`.
const REPEATED_ATTEMPTS: u32 = 2;
/// Progress below this marks a started topic as weak.
const LOW_PROGRESS: f64 = 50.0;

pub const NO_STRENGTHS_YET: &str = "Keep practicing to build your strengths!";
pub const ALL_TOPICS_DONE: &str = "Great job! You've completed all available topics.";
pub const REVIEW_PREREQUISITE: &str = "Review basic concepts from previous topics";

const REMEDIAL_ACTIONS: [&str; 4] = [
  "Review the basic concepts of the weak topics",
  "Practice more problems in those areas",
  "Take your time and don't rush",
  "Ask for help if needed",
];

const WELCOME_TEMPLATE: &str =
  "Welcome to Grade {grade}! Start your learning journey by completing your first topic.";
const EXCELLENT_TEMPLATE: &str =
  "Excellent work! You're performing at {average}% average with {completed} topics completed. Keep up the great progress!";
const GOOD_TEMPLATE: &str =
  "Good progress! You're averaging {average}% with {completed} topics completed. Continue practicing to improve further.";
const NEEDS_PRACTICE_TEMPLATE: &str =
  "You've completed {completed} topics with a {average}% average. Focus on reviewing weak areas to improve your scores.";
const WEAK_TEMPLATE: &str =
  "You've started {total} topics. Your current average is {average}%. Let's focus on building a strong foundation - review the basics and practice more.";

/// Band of an average score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
  Excellent,
  Good,
  NeedsPractice,
  Weak,
}

impl ScoreBand {
  pub fn of(average: u32) -> Self {
    let avg = average as f64;
    if avg >= EXCELLENT {
      ScoreBand::Excellent
    } else if avg >= GOOD {
      ScoreBand::Good
    } else if avg >= NEEDS_PRACTICE {
      ScoreBand::NeedsPractice
    } else {
      ScoreBand::Weak
    }
  }
}

/// Completed topics scoring >= 90, best first, at most three. Falls back to
/// any topic scoring >= 70, then to a single encouragement line.
pub fn identify_strengths(progress: &[ProgressRecord]) -> Vec<String> {
  let excellent = top_scoring(progress, |p| p.score() >= EXCELLENT && p.completed);
  if !excellent.is_empty() {
    return excellent;
  }
  let good = top_scoring(progress, |p| p.score() >= GOOD);
  if !good.is_empty() {
    return good;
  }
  vec![NO_STRENGTHS_YET.to_string()]
}

fn top_scoring(progress: &[ProgressRecord], keep: impl Fn(&ProgressRecord) -> bool) -> Vec<String> {
  let mut picked: Vec<&ProgressRecord> = progress.iter().filter(|p| keep(p)).collect();
  picked.sort_by(|a, b| b.score().total_cmp(&a.score()));
  picked
    .into_iter()
    .take(MAX_LISTED)
    .map(|p| match p.title() {
      Some(t) => t.to_string(),
      None => format!("Topic with {}% score", p.score()),
    })
    .collect()
}

/// Attempted topics under 70, or started topics under 50% progress; lowest
/// score first, at most three.
pub fn identify_weaknesses(progress: &[ProgressRecord]) -> Vec<String> {
  let mut weak: Vec<&ProgressRecord> = progress
    .iter()
    .filter(|p| {
      (p.score() < GOOD && p.attempts > 0) || (p.progress() > 0.0 && p.progress() < LOW_PROGRESS)
    })
    .collect();
  weak.sort_by(|a, b| a.score().total_cmp(&b.score()));
  weak
    .into_iter()
    .take(MAX_LISTED)
    .map(|p| {
      format!(
        "{} (Score: {}%, Progress: {}%)",
        p.title().unwrap_or("Unknown Topic"),
        p.score(),
        p.progress()
      )
    })
    .collect()
}

pub fn needs_remediation(progress: &[ProgressRecord]) -> bool {
  let stats = calculate_statistics(progress);
  (stats.average_score as f64) < GOOD
    || stats.completion_rate < REMEDIATION_COMPLETION
    || progress
      .iter()
      .any(|p| p.score() < NEEDS_PRACTICE && p.attempts >= REPEATED_ATTEMPTS)
}

pub fn remedial_actions(weaknesses: &[String]) -> Vec<String> {
  if weaknesses.is_empty() {
    return Vec::new();
  }
  REMEDIAL_ACTIONS.iter().map(|s| s.to_string()).collect()
}

/// Up to three topic titles, by priority:
/// 1. mastery skip-ahead into categories the learner has not completed yet;
/// 2. started-but-weak topics for review;
/// 3. the next uncompleted topics in catalog order.
#[instrument(level = "debug", skip_all, fields(progress = progress.len(), catalog = catalog.len()))]
pub fn recommend_next_topics(progress: &[ProgressRecord], catalog: &[CurriculumTopic]) -> Vec<String> {
  if catalog.is_empty() {
    return Vec::new();
  }

  let find_topic = |id: i64| catalog.iter().find(|t| t.id == id);
  let completed_ids: HashSet<i64> = progress.iter().filter(|p| p.completed).map(|p| p.topic_id).collect();

  let mut available: Vec<&CurriculumTopic> =
    catalog.iter().filter(|t| !completed_ids.contains(&t.id)).collect();
  available.sort_by_key(|t| t.order_index);

  let stats = calculate_statistics(progress);
  if stats.average_score as f64 >= EXCELLENT && stats.completion_rate >= SKIP_AHEAD_COMPLETION {
    let done_categories: HashSet<&Category> = progress
      .iter()
      .filter(|p| p.completed)
      .filter_map(|p| find_topic(p.topic_id))
      .map(|t| &t.category)
      .collect();
    let skip_ahead: Vec<String> = available
      .iter()
      .filter(|t| !done_categories.contains(&t.category))
      .take(MAX_SKIP_AHEAD_PICKS)
      .map(|t| t.title())
      .collect();
    if !skip_ahead.is_empty() {
      debug!(target: "analysis", picks = skip_ahead.len(), "Mastery skip-ahead into new categories");
      return skip_ahead;
    }
  }

  let mut chosen: Vec<&CurriculumTopic> = progress
    .iter()
    .filter(|p| p.score() < GOOD && !p.completed && p.attempts > 0)
    .filter_map(|p| find_topic(p.topic_id))
    .take(MAX_REMEDIATION_PICKS)
    .collect();
  let remediation = chosen.len();

  for topic in available {
    if chosen.len() >= MAX_LISTED {
      break;
    }
    if !chosen.iter().any(|c| c.id == topic.id) {
      chosen.push(topic);
    }
  }
  debug!(target: "analysis", remediation, sequential = chosen.len() - remediation, "Recommendations assembled");

  if chosen.is_empty() {
    return vec![ALL_TOPICS_DONE.to_string()];
  }
  chosen.into_iter().map(CurriculumTopic::title).collect()
}

pub fn difficulty_adjustment(stats: &PerformanceStatistics) -> &'static str {
  match ScoreBand::of(stats.average_score) {
    ScoreBand::Excellent => "Increase difficulty - You're ready for more challenging problems!",
    ScoreBand::Good => "Maintain current difficulty - You're doing well at this level.",
    ScoreBand::NeedsPractice => "Slightly reduce difficulty - Focus on mastering the basics first.",
    ScoreBand::Weak => "Reduce difficulty - Let's go back to fundamentals and build confidence.",
  }
}

pub fn generate_summary(stats: &PerformanceStatistics, grade: Grade) -> String {
  if stats.total_topics == 0 {
    return fill_template(WELCOME_TEMPLATE, &[("grade", &grade.to_string())]);
  }
  let template = match ScoreBand::of(stats.average_score) {
    ScoreBand::Excellent => EXCELLENT_TEMPLATE,
    ScoreBand::Good => GOOD_TEMPLATE,
    ScoreBand::NeedsPractice => NEEDS_PRACTICE_TEMPLATE,
    ScoreBand::Weak => WEAK_TEMPLATE,
  };
  fill_template(
    template,
    &[
      ("average", &stats.average_score.to_string()),
      ("completed", &stats.completed_topics.to_string()),
      ("total", &stats.total_topics.to_string()),
    ],
  )
}

pub fn encouragement_message(stats: &PerformanceStatistics) -> &'static str {
  if stats.completed_topics == 0 {
    return "🎯 Ready to start your math journey? Let's begin with your first topic!";
  }
  match ScoreBand::of(stats.average_score) {
    ScoreBand::Excellent => "🌟 Amazing work! You're a math superstar! Keep challenging yourself!",
    ScoreBand::Good => "👏 Great job! You're making excellent progress. Keep it up!",
    ScoreBand::NeedsPractice => "💪 You're improving! Keep practicing and you'll get even better!",
    ScoreBand::Weak => "🌱 Every expert was once a beginner. Keep practicing and you'll improve!",
  }
}

/// Difficulty to aim for on a single topic. Topics with no record, or with
/// progress recorded as exactly zero, start at medium. A missing
/// `progress_percentage` is rated from the score alone.
pub fn calculate_difficulty(progress: Option<&ProgressRecord>) -> DifficultyLevel {
  let Some(p) = progress else {
    return DifficultyLevel::Medium;
  };
  if p.progress_percentage.is_some() && p.progress() == 0.0 {
    return DifficultyLevel::Medium;
  }
  let (score, done) = (p.score(), p.progress());

  if score >= EXCELLENT && done >= 90.0 {
    DifficultyLevel::VeryHard
  } else if score >= GOOD && done >= 70.0 {
    DifficultyLevel::Hard
  } else if score >= NEEDS_PRACTICE || done >= 50.0 {
    DifficultyLevel::Medium
  // `>` rather than `>=` WEAK: with `>=` every record rates at least Easy and
  // VeryEasy is unreachable.
  } else if score > WEAK || done >= 25.0 {
    DifficultyLevel::Easy
  } else {
    DifficultyLevel::VeryEasy
  }
}

/// Full learner report.
#[instrument(level = "debug", skip_all, fields(grade = %student.grade, progress = student.progress.len(), catalog = catalog.len()))]
pub fn analyze_student_performance(student: &StudentData, catalog: &[CurriculumTopic]) -> RecommendationResult {
  let progress = &student.progress;
  let statistics = calculate_statistics(progress);
  let strengths = identify_strengths(progress);
  let weaknesses = identify_weaknesses(progress);
  let recommended_topics = recommend_next_topics(progress, catalog);
  let remedial = if needs_remediation(progress) { remedial_actions(&weaknesses) } else { Vec::new() };

  RecommendationResult {
    summary: generate_summary(&statistics, student.grade),
    strengths,
    weaknesses,
    recommended_topics,
    remedial_actions: remedial,
    difficulty_adjustment: difficulty_adjustment(&statistics).to_string(),
    encouragement: encouragement_message(&statistics).to_string(),
    statistics,
  }
}

pub fn path_reasoning(stats: &PerformanceStatistics) -> &'static str {
  if stats.completed_topics == 0 {
    return "Start with the first topic in the curriculum to build a strong foundation.";
  }
  match ScoreBand::of(stats.average_score) {
    ScoreBand::Excellent => {
      "You're excelling! Continue with the next topics in sequence. You may be ready to explore more advanced concepts."
    }
    ScoreBand::Good => "You're doing well! Follow the curriculum sequence and maintain your current pace.",
    ScoreBand::NeedsPractice | ScoreBand::Weak => {
      "Focus on mastering the current topics before moving forward. Review weak areas and practice more."
    }
  }
}

#[instrument(level = "debug", skip_all, fields(progress = student.progress.len(), available = available.len()))]
pub fn recommend_learning_path(student: &StudentData, available: &[CurriculumTopic]) -> LearningPath {
  let stats = calculate_statistics(&student.progress);
  let estimated_time = match ScoreBand::of(stats.average_score) {
    ScoreBand::Excellent => "1-2 weeks",
    ScoreBand::Weak => "3-4 weeks",
    ScoreBand::Good | ScoreBand::NeedsPractice => "2-3 weeks",
  };
  let prerequisites = if (stats.average_score as f64) < GOOD {
    vec![REVIEW_PREREQUISITE.to_string()]
  } else {
    Vec::new()
  };

  LearningPath {
    next_topics: recommend_next_topics(&student.progress, available),
    reasoning: path_reasoning(&stats).to_string(),
    prerequisites,
    estimated_time: estimated_time.to_string(),
  }
}
