//! Money, time, length, mass, capacity and volume.

use crate::domain::Question;
use crate::util::mentioned_magnitude;

use super::choices::Choices;
use super::{Seed, TopicContext};

const NON_STANDARD_UNITS: [&str; 5] = ["paper clips", "cubes", "blocks", "hand spans", "crayons"];

/// Grade-1 cap on any peso amount or sum.
const GRADE1_PESOS: u64 = 100;

fn two_digit(n: u64) -> String {
  format!("{:02}", n)
}

pub fn money(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let (a, b) = if ctx.grade == 1 {
    let a = seed.pick_a(GRADE1_PESOS - 1) + 1;
    let max_b = (GRADE1_PESOS - a).min(GRADE1_PESOS - 1);
    (a, seed.pick_b(max_b) + 1)
  } else {
    let max = mentioned_magnitude(ctx.outcome).unwrap_or(if ctx.grade == 2 { 1_000 } else { 10_000 });
    let half = max / 2;
    (seed.pick_a(half) + 1, seed.pick_b(half) + 1)
  };
  let (big, small) = (a.max(b), a.min(b));

  let (text, answer) = match ctx.rotate(3) {
    0 => (format!("If you have ₱{} and spend ₱{}, how much is left?", big, small), big - small),
    1 => (format!("Maria has ₱{} and Juan has ₱{}. How much do they have together?", a, b), a + b),
    _ => (format!("A toy costs ₱{}. If you have ₱{}, how much more do you need?", big, small), big - small),
  };
  Question::number(text, answer as f64, "🪙")
}

pub fn time(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let unit_free = ctx.mentions("non-standard") && !ctx.mentions_any(&["minute", "a.m.", "p.m."]);
  if ctx.grade == 1 || unit_free {
    calendar_and_clock(ctx, seed)
  } else {
    clock_with_minutes(ctx, seed)
  }
}

/// Whole, half and quarter hours plus days/weeks/months conversions.
fn calendar_and_clock(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let hour = seed.pick_a(12) + 1;
  let next = hour % 12 + 1;
  let prev = if hour == 1 { 12 } else { hour - 1 };
  let n = seed.pick_b(5) + 1;
  let plural = if n > 1 { "s" } else { "" };

  let (text, mut choices, icon) = match ctx.rotate(6) {
    0 => {
      let mut c = Choices::new(format!("{} o'clock", hour));
      c.offer(format!("{} o'clock", next)).offer(format!("{} o'clock", prev)).offer(format!("half past {}", hour));
      (format!("The clock shows {}:00. What time is it?", hour), c, "⏰")
    }
    1 => {
      let mut c = Choices::new(format!("half past {}", hour));
      c.offer(format!("{} o'clock", hour)).offer(format!("{} o'clock", next)).offer(format!("half past {}", prev));
      (format!("The clock shows {}:30. What time is it?", hour), c, "⏰")
    }
    2 => {
      // "quarter to" is 45 minutes past the previous hour
      let mut c = Choices::new(format!("quarter past {}", hour));
      c.offer(format!("{} o'clock", hour)).offer(format!("half past {}", hour)).offer(format!("quarter to {}", hour));
      (format!("The clock shows {}:15. What time is it?", hour), c, "⏰")
    }
    3 => {
      let mut c = Choices::new((n * 7).to_string());
      c.offer(n.to_string()).offer((n + 7).to_string()).offer((n * 7 + 7).to_string());
      (format!("How many days are in {} week{}?", n, plural), c, "📅")
    }
    4 => {
      let mut c = Choices::new((n * 4).to_string());
      c.offer(n.to_string()).offer((n * 7).to_string()).offer((n * 2).to_string());
      (format!("How many weeks are in {} month{}? (Approximate)", n, plural), c, "📅")
    }
    _ => {
      let mut c = Choices::new((n * 12).to_string());
      c.offer(n.to_string()).offer((n * 6).to_string()).offer((n * 12 + 6).to_string());
      (format!("How many months are in {} year{}?", n, plural), c, "📅")
    }
  };
  choices.fill_with(|k| (n * 12 + 6 + k).to_string());
  choices.into_question(text, icon)
}

fn clock_with_minutes(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let h1 = seed.pick_a(12) + 1;
  let m1 = seed.pick_b(60);

  if ctx.mentions_any(&["elapsed", "duration", "between"]) {
    let h2 = seed.pick_ab(12) + 1;
    let m2 = seed.pick_aba(60);
    let (t1, t2) = (h1 * 60 + m1, h2 * 60 + m2);
    let (start, end) = (t1.min(t2), t1.max(t2));
    return Question::number(
      format!(
        "How many minutes are between {}:{} and {}:{}?",
        start / 60,
        two_digit(start % 60),
        end / 60,
        two_digit(end % 60)
      ),
      (end - start) as f64,
      "⏰",
    );
  }

  let (period, other, when) = if ctx.rotate(2) == 0 { ("a.m.", "p.m.", "before noon") } else { ("p.m.", "a.m.", "after noon") };
  let mm = two_digit(m1);
  let mut choices = Choices::new(format!("{}:{} {}", h1, mm, period));
  choices
    .offer(format!("{}:{} {}", h1, mm, other))
    .offer(format!("{}:{} {}", h1 % 12 + 1, mm, period))
    .offer(format!("{}:{} {}", h1, two_digit((m1 + 1) % 60), period));
  choices.into_question(format!("The clock shows {}:{} {}. How is this time written?", h1, mm, when), "⏰")
}

pub fn length(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let unit_free = ctx.mentions("non-standard") && !ctx.mentions_any(&["cm", "meter"]);
  if ctx.grade == 1 || unit_free {
    let unit = NON_STANDARD_UNITS[ctx.rotate(NON_STANDARD_UNITS.len())];
    let l1 = seed.pick_a(10) + 3;
    let l2 = seed.pick_b(10) + 3;
    if (ctx.index / NON_STANDARD_UNITS.len() as u64) % 2 == 0 {
      return Question::number(
        format!("A ribbon is {} {} long. Another ribbon is {} {} long. What is their total length?", l1, unit, l2, unit),
        (l1 + l2) as f64,
        "📏",
      );
    }
    let (big, small) = (l1.max(l2), l1.min(l2));
    return Question::number(
      format!("A table is {} {} long. A chair is {} {} long. How much longer is the table?", big, unit, small, unit),
      (big - small) as f64,
      "📏",
    );
  }

  let l1 = seed.pick_a(100) + 1;
  let l2 = seed.pick_b(100) + 1;
  if ctx.mentions_any(&["convert", "meter"]) {
    // total cm -> meters to one decimal, half up
    let tenths = (l1 + l2 + 5) / 10;
    return Question::number(
      format!("If a rope is {} cm and another is {} cm, what is the total length in meters? (Round to 1 decimal)", l1, l2),
      tenths as f64 / 10.0,
      "📏",
    );
  }
  Question::number(
    format!("A stick is {} cm long and another is {} cm long. What is their total length?", l1, l2),
    (l1 + l2) as f64,
    "📏",
  )
}

pub fn mass(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let m1 = seed.pick_a(50) + 1;
  let m2 = seed.pick_b(50) + 1;
  if ctx.mentions("gram") {
    let kg = seed.pick_a(9) + 1;
    return Question::number(format!("How many grams are in {} kg?", kg), (kg * 1_000) as f64, "⚖️");
  }
  if ctx.rotate(2) == 1 {
    let (big, small) = (m1.max(m2), m1.min(m2));
    return Question::number(
      format!("A sack of rice weighs {} kg and a sack of sugar weighs {} kg. How much heavier is the rice?", big, small),
      (big - small) as f64,
      "⚖️",
    );
  }
  Question::number(
    format!("A bag weighs {} kg and another weighs {} kg. What is the total weight?", m1, m2),
    (m1 + m2) as f64,
    "⚖️",
  )
}

pub fn capacity_volume(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let a = seed.pick_a(10) + 1;
  let b = seed.pick_b(10) + 1;
  if ctx.mentions("volume") {
    let c = seed.pick_ab(10) + 1;
    return Question::number(
      format!("What is the volume of a rectangular box with length {}, width {}, and height {}?", a, b, c),
      (a * b * c) as f64,
      "📦",
    );
  }
  if ctx.rotate(2) == 1 {
    return Question::number(format!("How many milliliters are in {} liters?", a), (a * 1_000) as f64, "🥛");
  }
  Question::number(
    format!("A jug holds {} liters and a pail holds {} liters. How many liters do they hold together?", a, b),
    (a + b) as f64,
    "🥛",
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ctx(grade: u8, outcome: &str, index: u64) -> TopicContext<'_> {
    TopicContext { grade, outcome, index, slot: 0 }
  }

  fn pesos(text: &str) -> Vec<u64> {
    text
      .split('₱')
      .skip(1)
      .map(|s| s.chars().take_while(char::is_ascii_digit).collect::<String>().parse().unwrap())
      .collect()
  }

  #[test]
  fn grade_one_money_stays_under_hundred() {
    for i in 0..300 {
      let q = money(&ctx(1, "count philippine money up to ₱100", i), Seed::for_slot(91, i, 0));
      let amounts = pesos(&q.question);
      assert!(amounts.iter().all(|&a| a <= 100), "{}", q.question);
      let answer = q.numeric_answer().unwrap();
      assert!((0.0..=100.0).contains(&answer), "{}", q.question);
    }
  }

  #[test]
  fn spending_never_exceeds_what_you_have() {
    for i in (0..300).step_by(3) {
      let q = money(&ctx(3, "money", i), Seed::for_slot(12, i, 0));
      let amounts = pesos(&q.question);
      assert!(amounts[0] >= amounts[1], "{}", q.question);
    }
  }

  #[test]
  fn quarter_hour_has_one_right_answer() {
    let q = time(&ctx(1, "tell time", 2), Seed::for_slot(1, 2, 0));
    assert!(q.question.ends_with(":15. What time is it?"));
    let hour = q.question.trim_start_matches("The clock shows ").split(':').next().unwrap().to_string();
    assert_eq!(q.correct_option(), Some(format!("quarter past {}", hour).as_str()));
    assert!(!q.options.iter().any(|o| o.contains(":15")));
  }

  #[test]
  fn calendar_questions_have_four_choices() {
    for i in 0..60 {
      let q = time(&ctx(2, "tell time using non-standard measurement", i), Seed::for_slot(5, i, 0));
      assert_eq!(q.options.len(), 4, "{}", q.question);
    }
  }

  #[test]
  fn clock_reading_disambiguates_period() {
    let q = time(&ctx(3, "tell time in hours and minutes", 1), Seed::for_slot(1, 1, 0));
    assert!(q.question.contains("after noon"));
    assert!(q.correct_option().unwrap().ends_with("p.m."));
  }

  #[test]
  fn elapsed_time_is_positive_span() {
    for i in 0..50 {
      let q = time(&ctx(4, "compute elapsed time", i), Seed::for_slot(8, i, 0));
      let v = q.numeric_answer().unwrap();
      assert!(v >= 0.0 && v < 720.0, "{}", q.question);
    }
  }

  #[test]
  fn meters_round_half_up() {
    let q = length(&ctx(3, "convert length to meters", 0), Seed::for_slot(1, 0, 0));
    // 7919 % 100 + 1 = 20, 9973 % 100 + 1 = 74 -> 94 cm
    assert!(q.question.contains("20 cm and another is 74 cm"));
    assert_eq!(q.numeric_answer(), Some(0.9));
  }

  #[test]
  fn non_standard_length_for_early_grades() {
    let q = length(&ctx(1, "measure length", 0), Seed::for_slot(1, 0, 0));
    assert!(q.question.contains("paper clips"));
    assert!(!q.question.contains("cm"));
  }

  #[test]
  fn volume_is_product() {
    let q = capacity_volume(&ctx(6, "volume of rectangular prisms", 0), Seed::for_slot(1, 0, 0));
    assert_eq!(q.numeric_answer(), Some(320.0));
  }
}
