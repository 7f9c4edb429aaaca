//! Curriculum-aware procedural question generation.
//!
//! A topic's category and learning-outcome text select one sub-generator
//! (see `dispatch`). Each batch slot gets up to `max_attempts` tries to produce
//! a question whose signature is new to the batch; a slot that keeps producing
//! duplicates is skipped, so a batch may be shorter than requested.
//!
//! Numeric parameters come from an explicit seed (`seed::Seed`), option display
//! order from a caller-supplied RNG. `generate_questions_for_topic` wires both to
//! the wall clock and the thread RNG.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use tracing::{debug, instrument, warn};

use crate::config::GeneratorCfg;
use crate::domain::{CurriculumTopic, Question};

pub mod choices;
pub mod dispatch;
pub mod seed;

mod data;
mod geometry;
mod measurement;
mod number_sense;
mod operations;
mod patterns;
mod problem_solving;

pub use choices::shuffle_options;
pub use seed::Seed;

/// Sub-generator signature: context of the slot being filled plus its seed.
pub type Generator = fn(&TopicContext<'_>, Seed) -> Question;

/// What a sub-generator knows about the slot it fills.
#[derive(Clone, Copy, Debug)]
pub struct TopicContext<'a> {
  /// Clamped into 1..=6.
  pub grade: u8,
  /// Lower-cased learning outcome.
  pub outcome: &'a str,
  /// Caller's start offset plus slot number; drives variant rotation.
  pub index: u64,
  /// Position inside the batch.
  pub slot: usize,
}

impl<'a> TopicContext<'a> {
  /// `index mod n`, for rotating through fixed variants.
  pub fn rotate(&self, n: usize) -> usize {
    if n == 0 { 0 } else { (self.index % n as u64) as usize }
  }

  pub fn mentions(&self, keyword: &str) -> bool {
    self.outcome.contains(keyword)
  }

  pub fn mentions_any(&self, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| self.outcome.contains(k))
  }

  pub fn mentions_all(&self, keywords: &[&str]) -> bool {
    keywords.iter().all(|k| self.outcome.contains(k))
  }

  pub fn with_outcome<'b>(&self, outcome: &'b str) -> TopicContext<'b> {
    TopicContext { grade: self.grade, outcome, index: self.index, slot: self.slot }
  }
}

/// Default magnitude ceiling by grade: 100, 1,000, 10,000, then 1,000,000.
pub fn grade_ceiling(grade: u8) -> u64 {
  match grade {
    0 | 1 => 100,
    2 => 1_000,
    3 => 10_000,
    _ => 1_000_000,
  }
}

/// Milliseconds since the epoch; the seed used when callers do not pass one.
pub fn clock_seed() -> u64 {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|d| d.as_millis() as u64)
    .unwrap_or(0)
}

#[derive(Clone, Debug)]
pub struct QuestionGenerator {
  max_attempts: u32,
  max_count: usize,
}

impl Default for QuestionGenerator {
  fn default() -> Self {
    QuestionGenerator::from_config(&GeneratorCfg::default())
  }
}

impl QuestionGenerator {
  pub fn from_config(cfg: &GeneratorCfg) -> Self {
    QuestionGenerator {
      max_attempts: cfg.max_attempts.max(1),
      max_count: cfg.max_count,
    }
  }

  /// Name of the sub-generator a topic dispatches to.
  pub fn generator_name(topic: &CurriculumTopic) -> &'static str {
    dispatch::select(&topic.category, &topic.outcome().to_lowercase()).name
  }

  /// Generate up to `count` questions with signatures unique within the batch.
  #[instrument(
    level = "debug",
    skip(self, topic, rng),
    fields(grade = %topic.grade, category = %topic.category, topic_code = topic.topic_code.as_deref().unwrap_or(""))
  )]
  pub fn generate_batch<R: Rng + ?Sized>(
    &self,
    topic: &CurriculumTopic,
    count: usize,
    index: u64,
    seed: u64,
    rng: &mut R,
  ) -> Vec<Question> {
    let count = count.min(self.max_count);
    let outcome = topic.outcome().to_lowercase();
    let grade = topic.grade.get();
    let rule = dispatch::select(&topic.category, &outcome);
    debug!(target: "questions", generator = rule.name, count, "Generator selected");

    let mut signatures: HashSet<String> = HashSet::with_capacity(count);
    let mut batch: Vec<Question> = Vec::with_capacity(count);
    let mut discarded = 0usize;

    for slot in 0..count {
      let ctx = TopicContext { grade, outcome: &outcome, index: index.wrapping_add(slot as u64), slot };
      for attempt in 0..self.max_attempts {
        let candidate = (rule.generate)(&ctx, Seed::for_slot(seed, ctx.index, attempt));
        if signatures.insert(candidate.signature()) {
          batch.push(candidate);
          break;
        }
        discarded += 1;
      }
    }

    if batch.len() < count {
      warn!(target: "questions", generator = rule.name, requested = count, generated = batch.len(), discarded, "Batch shorter than requested: limited variety");
    }

    for q in batch.iter_mut() {
      shuffle_options(q, rng);
    }
    batch
  }

  /// Batch seeded from the wall clock, option order from the thread RNG.
  pub fn generate_questions_for_topic(&self, topic: &CurriculumTopic, count: usize, index: u64) -> Vec<Question> {
    self.generate_batch(topic, count, index, clock_seed(), &mut rand::thread_rng())
  }
}
