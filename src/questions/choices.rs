//! Multiple-choice option building and display-order shuffling.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Answer, Question};

pub const OPTION_COUNT: usize = 4;

/// Fill budget for `fill_with`; generators pass closures that never run dry.
const FILL_TRIES: u64 = 64;

/// Collects up to four distinct options. The first one is always the correct
/// answer; display order is randomized later by `shuffle_options`.
#[derive(Debug)]
pub(crate) struct Choices {
  options: Vec<String>,
}

impl Choices {
  pub fn new(correct: impl Into<String>) -> Self {
    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(correct.into());
    Choices { options }
  }

  /// Add a distractor unless it duplicates an existing option or the set is full.
  pub fn offer(&mut self, candidate: impl Into<String>) -> &mut Self {
    let candidate = candidate.into();
    if !self.is_full() && !self.options.contains(&candidate) {
      self.options.push(candidate);
    }
    self
  }

  pub fn is_full(&self) -> bool {
    self.options.len() >= OPTION_COUNT
  }

  /// Top up with `make(1)`, `make(2)`, ... until four options exist.
  pub fn fill_with(&mut self, mut make: impl FnMut(u64) -> String) -> &mut Self {
    let mut k = 1;
    while !self.is_full() && k <= FILL_TRIES {
      self.offer(make(k));
      k += 1;
    }
    self
  }

  pub fn into_question(self, text: impl Into<String>, icon: &str) -> Question {
    Question::choice(text, self.options, 0, icon)
  }
}

/// Randomize option order and re-point `correctAnswer`. Number questions are untouched.
pub fn shuffle_options<R: Rng + ?Sized>(question: &mut Question, rng: &mut R) {
  let Answer::Choice(correct) = question.correct_answer else { return };
  if question.options.len() < 2 || correct >= question.options.len() {
    return;
  }
  let mut order: Vec<usize> = (0..question.options.len()).collect();
  order.shuffle(rng);
  let shuffled: Vec<String> = order.iter().map(|&i| question.options[i].clone()).collect();
  let new_correct = order.iter().position(|&i| i == correct).unwrap_or(0);
  question.options = shuffled;
  question.correct_answer = Answer::Choice(new_correct);
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn duplicates_are_ignored_and_capacity_is_four() {
    let mut c = Choices::new("7");
    c.offer("7").offer("8").offer("8").offer("9").offer("10").offer("11");
    let q = c.into_question("Pick 7", "🔢");
    assert_eq!(q.options, vec!["7", "8", "9", "10"]);
    assert_eq!(q.correct_option(), Some("7"));
  }

  #[test]
  fn fill_tops_up_to_four() {
    let mut c = Choices::new("1/2");
    c.offer("1/2").fill_with(|k| format!("{}/{}", k, k + 2));
    assert!(c.is_full());
  }

  #[test]
  fn shuffle_keeps_correct_option() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
      let mut q = Question::choice(
        "Which is even?",
        vec!["4".into(), "5".into(), "7".into(), "9".into()],
        0,
        "🔢",
      );
      shuffle_options(&mut q, &mut rng);
      assert_eq!(q.correct_option(), Some("4"));
      assert_eq!(q.options.len(), 4);
    }
  }

  #[test]
  fn shuffle_ignores_number_questions() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut q = Question::number("What is 1 + 1?", 2.0, "➕");
    let before = q.clone();
    shuffle_options(&mut q, &mut rng);
    assert_eq!(q, before);
  }
}
