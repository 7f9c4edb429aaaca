//! Whole-number arithmetic: the four operations, GEMDAS expressions and the
//! grade-scaled addition used as the global fallback.

use crate::domain::Question;
use crate::util::mentioned_magnitude;

use super::{grade_ceiling, Seed, TopicContext};

const TABLES_LOW: [u64; 5] = [2, 3, 4, 5, 10];
const TABLES_HIGH: [u64; 4] = [6, 7, 8, 9];
const TABLES_FIRST: [u64; 4] = [2, 3, 4, 5];

/// Largest operand sum a grade-1 learner sees.
const GRADE1_LIMIT: u64 = 100;

fn ceiling(ctx: &TopicContext<'_>) -> u64 {
  mentioned_magnitude(ctx.outcome).unwrap_or_else(|| grade_ceiling(ctx.grade))
}

/// Multiplication tables in play: explicit mention first, then by grade.
fn tables(ctx: &TopicContext<'_>) -> &'static [u64] {
  if ctx.mentions_any(&["2, 3, 4, 5, 10", "2,3,4,5,10"]) {
    &TABLES_LOW
  } else if ctx.mentions_any(&["6, 7, 8, 9", "6,7,8,9"]) {
    &TABLES_HIGH
  } else {
    match ctx.grade {
      1 => &TABLES_FIRST,
      2 => &TABLES_LOW,
      _ => &TABLES_HIGH,
    }
  }
}

/// (table, multiplier) with the multiplier in 1..=12.
fn table_fact(ctx: &TopicContext<'_>, seed: Seed) -> (u64, u64) {
  let tables = tables(ctx);
  let len = tables.len() as u64;
  let table = tables[((seed.pick_a(len) + ctx.index % len) % len) as usize];
  (table, seed.pick_b(12) + 1)
}

pub fn addition(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let (a, b) = if ctx.grade == 1 {
    let a = seed.pick_a(GRADE1_LIMIT - 1) + 1;
    let max_b = (GRADE1_LIMIT - a).min(GRADE1_LIMIT - 1);
    (a, seed.pick_b(max_b) + 1)
  } else {
    let half = ceiling(ctx) / 2;
    (seed.pick_a(half) + 1, seed.pick_b(half) + 1)
  };
  Question::number(format!("What is {} + {}?", a, b), (a + b) as f64, "➕")
}

pub fn subtraction(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let (larger, smaller) = if ctx.grade == 1 {
    let larger = seed.pick_a(GRADE1_LIMIT - 1) + 1;
    (larger, seed.pick_b(larger) + 1)
  } else {
    let half = ceiling(ctx).min(10_000) / 2;
    let (a, b) = (seed.pick_a(half) + 1, seed.pick_b(half) + 1);
    (a.max(b), a.min(b))
  };
  Question::number(format!("What is {} - {}?", larger, smaller), (larger - smaller) as f64, "➖")
}

pub fn multiplication(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let (table, multiplier) = table_fact(ctx, seed);
  Question::number(format!("What is {} × {}?", table, multiplier), (table * multiplier) as f64, "✖️")
}

pub fn division(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let (table, multiplier) = table_fact(ctx, seed);
  Question::number(format!("What is {} ÷ {}?", table * multiplier, table), multiplier as f64, "➗")
}

pub fn order_of_operations(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let a = seed.pick_a(10) + 1;
  let b = seed.pick_b(10) + 1;
  let c = seed.pick_ab(10) + 1;
  let variants = if ctx.mentions("exponent") { 4 } else { 3 };

  let (expression, answer) = match ctx.rotate(variants) {
    0 => (format!("{} + {} × {}", a, b, c), a + b * c),
    1 => (format!("{} × {} + {}", a, b, c), a * b + c),
    2 => (format!("({} + {}) × {}", a, b, c), (a + b) * c),
    _ => (format!("{}² + {} × {}", a, b, c), a * a + b * c),
  };
  Question::number(format!("Solve: {} (Follow GEMDAS)", expression), answer as f64, "🧮")
}

/// "Four operations": cycles through the four generators by batch slot.
pub fn mixed(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  match ctx.slot % 4 {
    0 => addition(ctx, seed),
    1 => subtraction(ctx, seed),
    2 => multiplication(ctx, seed),
    _ => division(ctx, seed),
  }
}

/// Global fallback: addition scaled to 100 for grade 1, 1,000 otherwise.
pub fn default_addition(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let outcome = if ctx.grade == 1 { "perform addition up to 100" } else { "perform addition up to 1000" };
  addition(&ctx.with_outcome(outcome), seed)
}
