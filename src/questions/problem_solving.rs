//! Short word problems. Grade 1 keeps every number and every sum within 100.

use crate::domain::Question;

use super::{Seed, TopicContext};

pub fn word_problem(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  if ctx.grade == 1 || ctx.mentions_all(&["counting", "addition", "subtraction"]) {
    early(ctx, seed)
  } else {
    later(ctx, seed)
  }
}

fn early(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let n1 = seed.pick_a(50) + 1;
  let n2 = seed.pick_b((100 - n1).min(49)) + 1;
  let (big, small) = (n1.max(n2), n1.min(n2));

  let (text, answer) = match ctx.rotate(9) {
    0 => (format!("Maria has {} apples and {} oranges. How many fruits does she have in total?", n1, n2), n1 + n2),
    1 => (format!("There are {} boys and {} girls in a class. How many students are there?", n1, n2), n1 + n2),
    2 => (format!("Mom bought {} cookies and {} candies. How many treats did she buy?", n1, n2), n1 + n2),
    3 => (format!("Juan has {} marbles. Ana has {} marbles. How many more marbles does Juan have?", big, small), big - small),
    4 => (format!("There are {} birds in a tree. {} fly away. How many birds are left?", big, small), big - small),
    5 => (format!("A store has {} toys. They sell {} toys. How many toys are left?", big, small), big - small),
    6 => (
      format!("Count the flowers: 🌸🌸🌸🌸🌸. If you add {} more flowers, how many flowers are there?", n1),
      5 + n1,
    ),
    7 => (format!("There are {} stars in the sky. {} more stars appear. How many stars are there now?", n1, n2), n1 + n2),
    _ => {
      return Question::number(
        format!("In the pattern: 2, 4, 6, 8, what comes next? Then add {} to that number.", n1),
        (10 + n1) as f64,
        "🔁",
      )
    }
  };
  Question::number(text, answer as f64, "🍎")
}

fn later(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let n1 = seed.pick_a(20) + 5;
  let n2 = seed.pick_b(20) + 5;
  let (big, small) = (n1.max(n2), n1.min(n2));
  let variants = if ctx.grade >= 3 { 5 } else { 4 };

  let (text, answer) = match ctx.rotate(variants) {
    0 => (format!("Maria has {} apples and {} oranges. How many fruits does she have in total?", n1, n2), n1 + n2),
    1 => (format!("Juan has {} marbles. Ana has {} marbles. How many more marbles does Juan have?", big, small), big - small),
    2 => (format!("There are {} boys and {} girls in a class. How many students are there?", n1, n2), n1 + n2),
    3 => (format!("A box contains {} red balls and {} blue balls. How many balls are in the box?", n1, n2), n1 + n2),
    _ => {
      let boxes = seed.pick_ab(8) + 2;
      let sold = seed.pick_aba(boxes * n1) + 1;
      (
        format!(
          "A store has {} boxes with {} pencils in each box. It sells {} pencils. How many pencils are left?",
          boxes, n1, sold
        ),
        boxes * n1 - sold,
      )
    }
  };
  Question::number(text, answer as f64, "🍎")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ctx(grade: u8, outcome: &str, index: u64) -> TopicContext<'_> {
    TopicContext { grade, outcome, index, slot: 0 }
  }

  fn numbers(text: &str) -> Vec<u64> {
    text
      .split(|c: char| !c.is_ascii_digit())
      .filter(|s| !s.is_empty())
      .map(|s| s.parse().unwrap())
      .collect()
  }

  #[test]
  fn grade_one_numbers_stay_small() {
    for i in 0..270 {
      let q = word_problem(&ctx(1, "solve problems", i), Seed::for_slot(64, i, 0));
      let answer = q.numeric_answer().unwrap();
      assert!((0.0..=100.0).contains(&answer), "{}", q.question);
      assert!(numbers(&q.question).iter().all(|&n| n < 100), "{}", q.question);
    }
  }

  #[test]
  fn comparisons_name_the_larger_first() {
    let q = word_problem(&ctx(3, "word problems", 1), Seed::for_slot(7, 1, 0));
    let n = numbers(&q.question);
    assert!(n[0] >= n[1], "{}", q.question);
  }

  #[test]
  fn multi_step_never_sells_more_than_stocked() {
    for i in (4..500).step_by(5) {
      let q = word_problem(&ctx(5, "multi-step word problems", i), Seed::for_slot(19, i, 0));
      let n = numbers(&q.question);
      assert!(n[2] <= n[0] * n[1], "{}", q.question);
    }
  }
}
