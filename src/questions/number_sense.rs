//! Number sense: place value and number names, ordinals, fractions,
//! decimals, parity, factors and multiples, ratio and percent.

use crate::domain::Question;
use crate::util::{format_thousands, gcd, mentioned_magnitude, number_to_words, numbers_after, ordinal as ordinal_name, round_to};

use super::choices::Choices;
use super::{grade_ceiling, Seed, TopicContext};

const DEFAULT_DENOMINATORS: [u64; 6] = [2, 3, 4, 5, 6, 8];
/// Denominators named in the outcome text outside this range are ignored.
const DENOMINATOR_RANGE: std::ops::RangeInclusive<u64> = 2..=100;
const PERCENTS: [u64; 5] = [10, 20, 25, 50, 75];

/// Hundredths as a two-place decimal string: 1205 -> "12.05".
fn hundredths(h: u64) -> String {
  format!("{}.{:02}", h / 100, h % 100)
}

pub fn recognition(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let max = mentioned_magnitude(ctx.outcome).unwrap_or_else(|| grade_ceiling(ctx.grade));
  let num = seed.pick_a(max) + 1;

  let mut values = vec![num, num + 1];
  if num > 1 {
    values.push(num - 1);
  }
  values.push(num + 10);
  values.extend((1..=8).map(|k| num + 10 + k));

  if ctx.grade == 1 {
    let mut choices = Choices::new(number_to_words(num));
    for v in &values[1..] {
      choices.offer(number_to_words(*v));
    }
    choices.into_question(format!("What number is this: {}?", format_thousands(num)), "🔢")
  } else {
    let mut choices = Choices::new(format_thousands(num));
    for v in &values[1..] {
      choices.offer(format_thousands(*v));
    }
    choices.into_question(format!("Which number is {}?", number_to_words(num)), "🔢")
  }
}

pub fn ordinal(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let max = if ctx.mentions("100th") {
    100
  } else if ctx.mentions("20th") {
    20
  } else {
    match ctx.grade {
      1 => 10,
      2 => 20,
      _ => 100,
    }
  };
  let position = seed.pick_a(max) + 1;

  let mut choices = Choices::new(ordinal_name(position));
  choices.offer(ordinal_name(position + 1));
  if position > 1 {
    choices.offer(ordinal_name(position - 1));
  }
  choices.fill_with(|k| ordinal_name(position + 1 + k));
  choices.into_question(format!("What is the ordinal number for position {}?", position), "📊")
}

pub fn fraction(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  if ctx.grade == 1 || ctx.mentions_any(&["1/2", "1/4"]) {
    let (frac, correct) = if ctx.rotate(2) == 0 { ("1/2", "Half shaded") } else { ("1/4", "Quarter shaded") };
    let mut choices = Choices::new(correct);
    for o in ["Half shaded", "Quarter shaded", "Full shaded", "Empty"] {
      choices.offer(o);
    }
    return choices.into_question(format!("Which shape shows {}?", frac), "🍕");
  }

  let mut denominators: Vec<u64> = numbers_after(ctx.outcome, "denominator")
    .into_iter()
    .filter(|d| DENOMINATOR_RANGE.contains(d))
    .collect();
  if denominators.is_empty() {
    denominators = DEFAULT_DENOMINATORS.to_vec();
  }
  let len = denominators.len() as u64;
  let num = seed.pick_a(5) + 1;
  let den = denominators[((seed.pick_b(len) + ctx.index % len) % len) as usize];

  if ctx.mentions_any(&["decimal", "convert"]) {
    return Question::number(
      format!("What is {}/{} as a decimal? (Round to 2 decimals)", num, den),
      round_to(num as f64 / den as f64, 2),
      "🍰",
    );
  }

  let g = gcd(num, den);
  let (sn, sd) = (num / g, den / g);
  let mut choices = Choices::new(format!("{}/{}", sn, sd));
  choices
    .offer(format!("{}/{}", num, den))
    .offer(format!("{}/{}", num + 1, den))
    .offer(format!("{}/{}", num, den + 1))
    .fill_with(|k| format!("{}/{}", sn + k, sd + k + 1));
  choices.into_question(format!("What is {}/{} in simplest form?", num, den), "🍰")
}

pub fn decimal(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  // values are carried as whole hundredths
  let h = seed.pick_a(9_900) + 100;
  match ctx.rotate(3) {
    0 => Question::number(
      format!("What digit is in the tenths place of {}?", hundredths(h)),
      ((h / 10) % 10) as f64,
      "🔢",
    ),
    1 => {
      let mut choices = Choices::new(hundredths(h));
      choices.offer(hundredths(h - 1)).offer(hundredths(h - 10)).offer(hundredths(h - 11));
      choices.fill_with(|k| hundredths(h - 11 - k));
      choices.into_question("Which decimal is the greatest?", "🔢")
    }
    _ => Question::number(
      format!("Round {} to the nearest tenth.", hundredths(h)),
      ((h + 5) / 10) as f64 / 10.0,
      "🔢",
    ),
  }
}

pub fn odd_even(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let half = grade_ceiling(ctx.grade).min(1_000) / 2;
  let k = seed.pick_a(half) + 1;
  let (wanted, correct) = if ctx.rotate(2) == 0 { ("even", 2 * k) } else { ("odd", 2 * k + 1) };

  // neighbours at distance 1 and 3 always have the other parity
  let mut choices = Choices::new(correct.to_string());
  choices.offer((correct + 1).to_string()).offer((correct - 1).to_string()).offer((correct + 3).to_string());
  choices.fill_with(|j| (correct + 3 + 2 * j).to_string());
  choices.into_question(format!("Which of these numbers is {}?", wanted), "🔢")
}

pub fn factors_multiples(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  match ctx.rotate(4) {
    0 => {
      let g = seed.pick_a(11) + 2;
      let (a, b) = (g * (seed.pick_b(9) + 1), g * (seed.pick_ab(9) + 1));
      Question::number(
        format!("What is the greatest common factor of {} and {}?", a, b),
        gcd(a, b) as f64,
        "🧮",
      )
    }
    1 => {
      let (a, b) = (seed.pick_a(11) + 2, seed.pick_b(11) + 2);
      Question::number(
        format!("What is the least common multiple of {} and {}?", a, b),
        (a * b / gcd(a, b)) as f64,
        "🧮",
      )
    }
    2 => {
      let factor = seed.pick_a(8) + 2;
      let n = factor * (seed.pick_b(11) + 2);
      let mut choices = Choices::new(factor.to_string());
      for d in (factor + 1..).filter(|d| n % d != 0).take(3) {
        choices.offer(d.to_string());
      }
      choices.into_question(format!("Which number is a factor of {}?", n), "🧮")
    }
    _ => {
      let t = seed.pick_a(7) + 3;
      let m = t * (seed.pick_b(10) + 2);
      // for t >= 3, m-1, m+1 and m+2 are never multiples of t
      let mut choices = Choices::new(m.to_string());
      choices.offer((m + 1).to_string()).offer((m - 1).to_string()).offer((m + 2).to_string());
      choices.into_question(format!("Which number is a multiple of {}?", t), "🧮")
    }
  }
}

pub fn ratio_proportion(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  match ctx.rotate(3) {
    0 => {
      let p = seed.choose(&PERCENTS);
      let n = 20 * (seed.pick_b(20) + 1);
      Question::number(format!("What is {}% of {}?", p, n), (p * n / 100) as f64, "💯")
    }
    1 => {
      let g = seed.pick_a(5) + 2;
      let (a, b) = (g * (seed.pick_b(9) + 1), g * (seed.pick_ab(9) + 1));
      let d = gcd(a, b);
      let (x, y) = (a / d, b / d);
      let mut choices = Choices::new(format!("{}:{}", x, y));
      choices
        .offer(format!("{}:{}", y, x))
        .offer(format!("{}:{}", a, b))
        .fill_with(|k| format!("{}:{}", x + k, y));
      choices.into_question(format!("What is the ratio {}:{} in simplest form?", a, b), "⚖️")
    }
    _ => {
      let unit = seed.pick_a(20) + 5;
      let have = seed.pick_b(5) + 2;
      let want = seed.pick_ab(9) + 2;
      Question::number(
        format!("If {} notebooks cost ₱{}, how much do {} notebooks cost?", have, have * unit, want),
        (want * unit) as f64,
        "📒",
      )
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ctx(grade: u8, outcome: &str, index: u64) -> TopicContext<'_> {
    TopicContext { grade, outcome, index, slot: 0 }
  }

  #[test]
  fn grade_one_recognition_uses_words() {
    let q = recognition(&ctx(1, "count up to 100", 0), Seed::for_slot(1, 0, 0));
    // 7919 % 100 + 1
    assert_eq!(q.question, "What number is this: 20?");
    assert_eq!(q.correct_option(), Some("twenty"));
    assert!(q.options.contains(&"twenty-one".to_string()));
    assert!(q.options.contains(&"nineteen".to_string()));
  }

  #[test]
  fn later_grades_read_words_pick_digits() {
    let q = recognition(&ctx(4, "whole numbers up to 10,000", 0), Seed::for_slot(1, 0, 0));
    // 7919 % 10000 + 1
    assert_eq!(q.question, "Which number is seven thousand nine hundred twenty?");
    assert_eq!(q.correct_option(), Some("7,920"));
    assert_eq!(q.options.len(), 4);
  }

  #[test]
  fn ordinal_range_follows_mention() {
    for i in 0..200 {
      let q = ordinal(&ctx(1, "ordinal numbers up to 20th", i), Seed::for_slot(9, i, 0));
      let position: u64 = q.question.trim_start_matches("What is the ordinal number for position ").trim_end_matches('?').parse().unwrap();
      assert!((1..=20).contains(&position));
      assert_eq!(q.correct_option(), Some(ordinal_name(position).as_str()));
      assert_eq!(q.options.len(), 4);
    }
  }

  #[test]
  fn early_fractions_point_at_the_right_picture() {
    let half = fraction(&ctx(1, "fractions", 0), Seed::for_slot(0, 0, 0));
    assert_eq!(half.question, "Which shape shows 1/2?");
    assert_eq!(half.correct_option(), Some("Half shaded"));
    let quarter = fraction(&ctx(1, "fractions", 1), Seed::for_slot(0, 1, 0));
    assert_eq!(quarter.correct_option(), Some("Quarter shaded"));
  }

  #[test]
  fn simplest_form_is_reduced() {
    for i in 0..100 {
      let q = fraction(&ctx(4, "simplify fractions with denominators 2, 4, 8", i), Seed::for_slot(13, i, 0));
      let correct = q.correct_option().unwrap().to_string();
      let (n, d) = correct.split_once('/').unwrap();
      let (n, d): (u64, u64) = (n.parse().unwrap(), d.parse().unwrap());
      assert_eq!(gcd(n, d), 1, "{} -> {}", q.question, correct);
      assert!(q.question.contains("/2 ") || q.question.contains("/4 ") || q.question.contains("/8 "), "{}", q.question);
    }
  }

  #[test]
  fn out_of_range_denominators_fall_back() {
    let q = fraction(&ctx(4, "fractions with denominators 18446744073709551615", u64::MAX - 1), Seed::for_slot(8, 0, 0));
    let den: u64 = q.question.trim_start_matches("What is ").split_once('/').and_then(|(_, d)| d.split(' ').next()).unwrap().parse().unwrap();
    assert!(DEFAULT_DENOMINATORS.contains(&den), "{}", q.question);
    assert!(q.options.iter().all(|o| !o.ends_with("/0")));

    let q = fraction(&ctx(4, "fractions with denominators 1, 3, 500", 0), Seed::for_slot(8, 0, 0));
    assert!(q.question.contains("/3 "), "{}", q.question);
  }

  #[test]
  fn fraction_conversion_is_numeric() {
    let q = fraction(&ctx(5, "convert fractions to decimals", 0), Seed::for_slot(4, 0, 0));
    assert!(q.question.ends_with("(Round to 2 decimals)"));
    assert!(q.options.is_empty());
  }

  #[test]
  fn decimal_rounding_uses_exact_hundredths() {
    for i in (2..300).step_by(3) {
      let q = decimal(&ctx(5, "decimals", i), Seed::for_slot(21, i, 0));
      let shown = q.question.trim_start_matches("Round ").trim_end_matches(" to the nearest tenth.");
      let (whole, frac) = shown.split_once('.').unwrap();
      let h: u64 = whole.parse::<u64>().unwrap() * 100 + frac.parse::<u64>().unwrap();
      let expected = ((h + 5) / 10) as f64 / 10.0;
      assert_eq!(q.numeric_answer(), Some(expected));
    }
    assert_eq!(hundredths(1205), "12.05");
  }

  #[test]
  fn parity_options_have_one_match() {
    for i in 0..100 {
      let q = odd_even(&ctx(3, "odd and even", i), Seed::for_slot(3, i, 0));
      let want_even = q.question.ends_with("even?");
      let matching = q
        .options
        .iter()
        .filter(|o| (o.parse::<u64>().unwrap() % 2 == 0) == want_even)
        .count();
      assert_eq!(matching, 1, "{} {:?}", q.question, q.options);
    }
  }

  #[test]
  fn factor_choices_have_single_divisor() {
    for i in (2..400).step_by(4) {
      let q = factors_multiples(&ctx(5, "factors", i), Seed::for_slot(17, i, 0));
      let n: u64 = q.question.trim_start_matches("Which number is a factor of ").trim_end_matches('?').parse().unwrap();
      let divisors = q.options.iter().filter(|o| n % o.parse::<u64>().unwrap() == 0).count();
      assert_eq!(divisors, 1, "{} {:?}", q.question, q.options);
    }
  }

  #[test]
  fn percents_are_whole() {
    for i in (0..300).step_by(3) {
      let q = ratio_proportion(&ctx(6, "percentage", i), Seed::for_slot(5, i, 0));
      let v = q.numeric_answer().unwrap();
      assert_eq!(v.fract(), 0.0, "{}", q.question);
    }
  }
}
