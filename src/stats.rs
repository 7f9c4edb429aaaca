//! Progress statistics aggregation.

use crate::domain::{PerformanceStatistics, ProgressRecord};

/// Reduce progress records to a statistics summary. Empty input yields zeros.
pub fn calculate_statistics(progress: &[ProgressRecord]) -> PerformanceStatistics {
  if progress.is_empty() {
    return PerformanceStatistics::default();
  }

  let total = progress.len() as u32;
  let completed = progress.iter().filter(|p| p.completed).count() as u32;
  let in_progress = progress
    .iter()
    .filter(|p| !p.completed && p.progress() > 0.0)
    .count() as u32;
  let score_sum: f64 = progress.iter().map(ProgressRecord::score).sum();

  PerformanceStatistics {
    average_score: (score_sum / total as f64).round() as u32,
    completion_rate: (100.0 * completed as f64 / total as f64).round() as u32,
    total_topics: total,
    completed_topics: completed,
    in_progress_topics: in_progress,
    not_started_topics: total - completed - in_progress,
  }
}
