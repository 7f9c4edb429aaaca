//! Repeating and growing patterns.

use crate::domain::Question;

use super::choices::Choices;
use super::{Seed, TopicContext};

const PALETTE: [&str; 8] = ["🔴", "🔵", "🟢", "🟡", "🔺", "⬜", "⭕", "⬛"];

enum Repeating {
  Picture(&'static [&'static str], &'static str),
  Number(&'static [u64], u64),
}

const REPEATING: [Repeating; 8] = [
  Repeating::Picture(&["🔴", "🔵", "🔴", "🔵"], "🔴"),
  Repeating::Picture(&["🟢", "🟡", "🟢", "🟡"], "🟢"),
  Repeating::Picture(&["🔺", "⬜", "🔺", "⬜"], "🔺"),
  Repeating::Picture(&["⭕", "⬛", "⭕", "⬛"], "⭕"),
  Repeating::Number(&[2, 4, 2, 4], 2),
  Repeating::Number(&[1, 3, 1, 3], 1),
  Repeating::Number(&[5, 10, 5, 10], 5),
  Repeating::Number(&[1, 2, 3, 1, 2, 3], 1),
];

const STEPS: [u64; 5] = [2, 3, 4, 5, 10];

fn join<T: ToString>(items: &[T]) -> String {
  items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

pub fn pattern(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let repeating_only = ctx.mentions("repeating") && !ctx.mentions_any(&["increasing", "decreasing"]);
  if ctx.grade == 1 || repeating_only {
    repeating(ctx)
  } else {
    growing(ctx, seed)
  }
}

fn repeating(ctx: &TopicContext<'_>) -> Question {
  match &REPEATING[ctx.rotate(REPEATING.len())] {
    Repeating::Picture(seq, next) => {
      let text = format!("What comes next in this repeating pattern: {}?", seq.join(", "));
      let start = PALETTE.iter().position(|p| p == next).unwrap_or(0);
      let mut choices = Choices::new(*next);
      for k in 1..PALETTE.len() {
        choices.offer(PALETTE[(start + k) % PALETTE.len()]);
      }
      choices.into_question(text, "🔁")
    }
    Repeating::Number(seq, next) => Question::number(
      format!("What comes next in this repeating pattern: {}?", join(*seq)),
      *next as f64,
      "🔁",
    ),
  }
}

/// Four terms of an arithmetic (or, from grade 4, doubling) sequence.
fn growing(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let step = seed.choose(&STEPS);
  let variants = if ctx.grade >= 4 { 3 } else { 2 };

  let terms: Vec<u64> = match ctx.rotate(variants) {
    0 => {
      let start = seed.pick_b(20) + 1;
      (0..5).map(|k| start + k * step).collect()
    }
    1 => {
      let start = step * 4 + seed.pick_b(30) + 1;
      (0..5).map(|k| start - k * step).collect()
    }
    _ => {
      let start = seed.pick_b(5) + 1;
      (0..5).map(|k| start << k).collect()
    }
  };
  Question::number(
    format!("What comes next in this pattern: {}?", join(&terms[..4])),
    terms[4] as f64,
    "🔁",
  )
}
