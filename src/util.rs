//! Small utility helpers used across modules: number formatting, outcome-text
//! scanning and lenient serde adapters for data coming out of the catalog store.

use serde::{Deserialize, Deserializer};

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Group digits by thousands: 1234567 -> "1,234,567".
pub fn format_thousands(n: u64) -> String {
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

const ONES: [&str; 20] = [
  "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
  "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
  "seventeen", "eighteen", "nineteen",
];
const TENS: [&str; 10] = [
  "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// English words for a number, e.g. 32 -> "thirty-two", 1205 -> "one thousand two hundred five".
/// Numbers of a billion or more fall back to grouped digits.
pub fn number_to_words(n: u64) -> String {
  if n < 20 {
    return ONES[n as usize].to_string();
  }
  if n < 100 {
    let (t, o) = ((n / 10) as usize, (n % 10) as usize);
    return if o == 0 { TENS[t].to_string() } else { format!("{}-{}", TENS[t], ONES[o]) };
  }
  if n < 1_000 {
    let (h, rest) = (n / 100, n % 100);
    return if rest == 0 {
      format!("{} hundred", ONES[h as usize])
    } else {
      format!("{} hundred {}", ONES[h as usize], number_to_words(rest))
    };
  }
  if n < 1_000_000 {
    let (th, rest) = (n / 1_000, n % 1_000);
    return if rest == 0 {
      format!("{} thousand", number_to_words(th))
    } else {
      format!("{} thousand {}", number_to_words(th), number_to_words(rest))
    };
  }
  if n < 1_000_000_000 {
    let (m, rest) = (n / 1_000_000, n % 1_000_000);
    return if rest == 0 {
      format!("{} million", number_to_words(m))
    } else {
      format!("{} million {}", number_to_words(m), number_to_words(rest))
    };
  }
  format_thousands(n)
}

/// 1 -> "1st", 12 -> "12th", 22 -> "22nd".
pub fn ordinal(n: u64) -> String {
  let suffix = match (n % 10, n % 100) {
    (_, 11..=13) => "th",
    (1, _) => "st",
    (2, _) => "nd",
    (3, _) => "rd",
    _ => "th",
  };
  format!("{}{}", n, suffix)
}

pub fn gcd(a: u64, b: u64) -> u64 {
  if b == 0 { a } else { gcd(b, a % b) }
}

/// Round to a number of decimal places (half away from zero).
pub fn round_to(value: f64, places: i32) -> f64 {
  let f = 10f64.powi(places);
  (value * f).round() / f
}

pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
  needles.iter().any(|n| haystack.contains(n))
}

/// Magnitude mentions recognised in learning-outcome text, largest first so
/// "1,000,000" is not read as "1,000" and "1000" is not read as "100".
const MAGNITUDE_MENTIONS: [(&[&str], u64); 4] = [
  (&["1,000,000", "1000000"], 1_000_000),
  (&["10,000", "10000"], 10_000),
  (&["1,000", "1000"], 1_000),
  (&["100"], 100),
];

/// Explicit magnitude ceiling mentioned in the outcome text, if any.
pub fn mentioned_magnitude(outcome: &str) -> Option<u64> {
  MAGNITUDE_MENTIONS
    .iter()
    .find(|(needles, _)| contains_any(outcome, needles))
    .map(|(_, value)| *value)
}

/// Parse a list of numbers following `keyword` in `text`,
/// e.g. "denominators 2, 4, 8" -> [2, 4, 8]. Zero is dropped.
pub fn numbers_after(text: &str, keyword: &str) -> Vec<u64> {
  let Some(pos) = text.find(keyword) else { return Vec::new() };
  let rest = &text[pos + keyword.len()..];
  let rest = rest.strip_prefix('s').unwrap_or(rest).trim_start();

  let mut out = Vec::new();
  let mut current = String::new();
  for ch in rest.chars() {
    if ch.is_ascii_digit() {
      current.push(ch);
    } else if ch == ',' || ch.is_whitespace() {
      if !current.is_empty() {
        if let Ok(n) = current.parse::<u64>() {
          if n > 0 { out.push(n); }
        }
        current.clear();
      }
      if ch == ',' { continue; }
    } else {
      break;
    }
  }
  if let Ok(n) = current.parse::<u64>() {
    if n > 0 { out.push(n); }
  }
  out
}

/// Accepts `true/false`, `0/1` and `null` (as false). Catalog rows from SQL
/// stores often carry booleans as tinyints.
pub fn de_flag<'de, D>(d: D) -> Result<bool, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Flag {
    Bool(bool),
    Int(i64),
    Float(f64),
  }
  Ok(match Option::<Flag>::deserialize(d)? {
    Some(Flag::Bool(b)) => b,
    Some(Flag::Int(i)) => i != 0,
    Some(Flag::Float(f)) => f != 0.0,
    None => false,
  })
}

/// Accepts numbers, numeric strings and `null` (as `None`).
pub fn de_lenient_f64<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Num {
    Float(f64),
    Text(String),
  }
  Ok(match Option::<Num>::deserialize(d)? {
    Some(Num::Float(f)) if f.is_finite() => Some(f),
    Some(Num::Text(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
    _ => None,
  })
}

/// Log-safe truncation for large strings.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    s.to_string()
  } else {
    format!("{}… ({} chars total)", s.chars().take(max).collect::<String>(), s.chars().count())
  }
}
