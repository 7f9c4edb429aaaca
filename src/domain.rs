//! Domain models shared by the analyzer and the question generator:
//! progress records, curriculum topics, statistics, reports and questions.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::util::{de_flag, de_lenient_f64};

pub const MIN_GRADE: u8 = 1;
pub const MAX_GRADE: u8 = 6;

/// Learner grade, always within `MIN_GRADE..=MAX_GRADE`.
///
/// Deserialization never fails: numbers, numeric strings ("3", "3rd") and
/// `null` are accepted, anything unusable becomes grade 1 and out-of-range
/// values are clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade(u8);

impl Grade {
  pub fn new(raw: i64) -> Self {
    if raw <= 0 {
      return Grade(MIN_GRADE);
    }
    Grade(raw.min(MAX_GRADE as i64) as u8)
  }

  /// Leading-integer parse: "4th" -> 4, "abc" -> grade 1.
  pub fn parse(text: &str) -> Self {
    let digits: String = text.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().map(Grade::new).unwrap_or_default()
  }

  pub fn get(self) -> u8 {
    self.0
  }
}

impl Default for Grade {
  fn default() -> Self { Grade(MIN_GRADE) }
}

impl fmt::Display for Grade {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Serialize for Grade {
  fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(self.0)
  }
}

impl<'de> Deserialize<'de> for Grade {
  fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawGrade {
      Int(i64),
      Float(f64),
      Text(String),
    }
    Ok(match Option::<RawGrade>::deserialize(d)? {
      Some(RawGrade::Int(i)) => Grade::new(i),
      Some(RawGrade::Float(f)) if f.is_finite() => Grade::new(f.trunc() as i64),
      Some(RawGrade::Text(s)) => Grade::parse(&s),
      _ => Grade::default(),
    })
  }
}

/// Curriculum category label. Unknown labels are preserved in `Other` and
/// routed to the default generator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
  NumberSense,
  Operations,
  Geometry,
  Measurement,
  Data,
  Patterns,
  ProblemSolving,
  Other(String),
}

impl Category {
  pub fn label(&self) -> &str {
    match self {
      Category::NumberSense => "Number Sense",
      Category::Operations => "Operations",
      Category::Geometry => "Geometry",
      Category::Measurement => "Measurement",
      Category::Data => "Data",
      Category::Patterns => "Patterns",
      Category::ProblemSolving => "Problem Solving",
      Category::Other(s) => s,
    }
  }
}

impl Default for Category {
  fn default() -> Self { Category::Operations }
}

impl From<&str> for Category {
  fn from(s: &str) -> Self {
    match s.trim() {
      "Number Sense" => Category::NumberSense,
      "Operations" => Category::Operations,
      "Geometry" => Category::Geometry,
      "Measurement" => Category::Measurement,
      "Data" => Category::Data,
      "Patterns" => Category::Patterns,
      "Problem Solving" => Category::ProblemSolving,
      other => Category::Other(other.to_string()),
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl Serialize for Category {
  fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(self.label())
  }
}

impl<'de> Deserialize<'de> for Category {
  fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    Ok(Option::<String>::deserialize(d)?
      .map(|s| Category::from(s.as_str()))
      .unwrap_or_default())
  }
}

/// One learner's state on one topic. Read-only from the engine's point of view.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProgressRecord {
  #[serde(default)]
  pub topic_id: i64,
  #[serde(default, deserialize_with = "de_lenient_f64")]
  pub progress_percentage: Option<f64>,
  #[serde(default, deserialize_with = "de_flag")]
  pub completed: bool,
  #[serde(default, deserialize_with = "de_lenient_f64")]
  pub best_score: Option<f64>,
  #[serde(default)]
  pub attempts: u32,
  #[serde(default)]
  pub topic_title: Option<String>,
}

impl ProgressRecord {
  /// Best score clamped into 0..=100; missing counts as 0.
  pub fn score(&self) -> f64 {
    self.best_score.unwrap_or(0.0).clamp(0.0, 100.0)
  }

  /// Progress clamped into 0..=100; missing counts as 0.
  pub fn progress(&self) -> f64 {
    self.progress_percentage.unwrap_or(0.0).clamp(0.0, 100.0)
  }

  pub fn title(&self) -> Option<&str> {
    self.topic_title.as_deref().filter(|t| !t.trim().is_empty())
  }
}

/// One curriculum catalog entry. Also the descriptor accepted by the
/// question generator, where only grade/category/outcome/code matter.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CurriculumTopic {
  #[serde(default)]
  pub id: i64,
  #[serde(default)]
  pub grade: Grade,
  #[serde(default)]
  pub category: Category,
  #[serde(default)]
  pub learning_outcome: Option<String>,
  #[serde(default)]
  pub order_index: i64,
  #[serde(default)]
  pub topic_code: Option<String>,
  #[serde(default)]
  pub topic_title: Option<String>,
}

impl CurriculumTopic {
  pub fn outcome(&self) -> &str {
    self.learning_outcome.as_deref().unwrap_or("")
  }

  pub fn title(&self) -> String {
    self.topic_title
      .clone()
      .filter(|t| !t.trim().is_empty())
      .unwrap_or_else(|| format!("Topic {}", self.id))
  }
}

/// Derived, ephemeral aggregate over a list of progress records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceStatistics {
  pub average_score: u32,
  pub completion_rate: u32,
  pub total_topics: u32,
  pub completed_topics: u32,
  pub in_progress_topics: u32,
  pub not_started_topics: u32,
}

/// Learner report produced by the analyzer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
  pub summary: String,
  pub strengths: Vec<String>,
  pub weaknesses: Vec<String>,
  pub recommended_topics: Vec<String>,
  pub remedial_actions: Vec<String>,
  pub difficulty_adjustment: String,
  pub encouragement: String,
  pub statistics: PerformanceStatistics,
}

/// Secondary view over the same recommendation primitives.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
  pub next_topics: Vec<String>,
  pub reasoning: String,
  pub prerequisites: Vec<String>,
  pub estimated_time: String,
}

/// Caller-supplied learner snapshot.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StudentData {
  #[serde(default)]
  pub grade: Grade,
  #[serde(default)]
  pub progress: Vec<ProgressRecord>,
}

/// Five-step difficulty scale for a single topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
  VeryEasy = 1,
  Easy = 2,
  Medium = 3,
  Hard = 4,
  VeryHard = 5,
}

impl DifficultyLevel {
  pub fn value(self) -> u8 {
    self as u8
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
  #[serde(rename = "multiple-choice")]
  MultipleChoice,
  #[serde(rename = "number")]
  Number,
}

/// `correctAnswer`: an index into `options` for multiple-choice, a value otherwise.
/// Both serialize as a bare JSON number.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
  Choice(usize),
  Value(f64),
}

impl fmt::Display for Answer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Answer::Choice(i) => write!(f, "#{}", i),
      Answer::Value(v) => write!(f, "{}", v),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
  pub question: String,
  #[serde(rename = "type")]
  pub kind: QuestionKind,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub options: Vec<String>,
  #[serde(rename = "correctAnswer")]
  pub correct_answer: Answer,
  pub icon: String,
}

impl Question {
  /// Free numeric input question.
  pub fn number(text: impl Into<String>, answer: f64, icon: &str) -> Self {
    Question {
      question: text.into(),
      kind: QuestionKind::Number,
      options: Vec::new(),
      correct_answer: Answer::Value(answer),
      icon: icon.to_string(),
    }
  }

  /// Multiple-choice question; `correct` indexes into `options`.
  pub fn choice(text: impl Into<String>, options: Vec<String>, correct: usize, icon: &str) -> Self {
    Question {
      question: text.into(),
      kind: QuestionKind::MultipleChoice,
      options,
      correct_answer: Answer::Choice(correct),
      icon: icon.to_string(),
    }
  }

  /// Deduplication key: text, serialized options and correct answer.
  pub fn signature(&self) -> String {
    format!("{}|{}|{}", self.question, self.options.join("\u{1f}"), self.correct_answer)
  }

  /// The correct option text for multiple-choice questions.
  pub fn correct_option(&self) -> Option<&str> {
    match self.correct_answer {
      Answer::Choice(i) => self.options.get(i).map(String::as_str),
      Answer::Value(_) => None,
    }
  }

  pub fn numeric_answer(&self) -> Option<f64> {
    match self.correct_answer {
      Answer::Value(v) => Some(v),
      Answer::Choice(_) => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn grade_is_coerced_from_anything() {
    let parse = |json: &str| serde_json::from_str::<Grade>(json).unwrap().get();
    assert_eq!(parse("3"), 3);
    assert_eq!(parse("0"), 1);
    assert_eq!(parse("-4"), 1);
    assert_eq!(parse("12"), 6);
    assert_eq!(parse("4.7"), 4);
    assert_eq!(parse("\"5th\""), 5);
    assert_eq!(parse("\"abc\""), 1);
    assert_eq!(parse("null"), 1);
  }

  #[test]
  fn topic_defaults_fill_missing_fields() {
    let t: CurriculumTopic = serde_json::from_str(r#"{"grade":"2"}"#).unwrap();
    assert_eq!(t.grade.get(), 2);
    assert_eq!(t.category, Category::Operations);
    assert_eq!(t.outcome(), "");

    let t: CurriculumTopic = serde_json::from_str(r#"{"category":"Astronomy"}"#).unwrap();
    assert_eq!(t.category, Category::Other("Astronomy".into()));
    assert_eq!(t.category.label(), "Astronomy");
  }

  #[test]
  fn progress_record_reads_sql_shaped_rows() {
    let p: ProgressRecord = serde_json::from_str(
      r#"{"topic_id":4,"progress_percentage":"35.5","completed":0,"best_score":130,"attempts":2,"topic_title":"Ordinals"}"#,
    )
    .unwrap();
    assert!(!p.completed);
    assert_eq!(p.progress(), 35.5);
    assert_eq!(p.score(), 100.0);
    assert_eq!(p.title(), Some("Ordinals"));
  }

  #[test]
  fn question_serializes_in_wire_shape() {
    let q = Question::choice("Pick", vec!["a".into(), "b".into()], 1, "🔢");
    let v = serde_json::to_value(&q).unwrap();
    assert_eq!(v["type"], "multiple-choice");
    assert_eq!(v["correctAnswer"], 1);
    assert_eq!(v["options"][1], "b");

    let q = Question::number("What is 2 + 2?", 4.0, "➕");
    let v = serde_json::to_value(&q).unwrap();
    assert_eq!(v["type"], "number");
    assert_eq!(v["correctAnswer"], 4.0);
    assert!(v.get("options").is_none());
  }

  #[test]
  fn signature_distinguishes_answer_and_options() {
    let a = Question::number("What is 2 + 2?", 4.0, "➕");
    let b = Question::number("What is 2 + 2?", 5.0, "➕");
    assert_ne!(a.signature(), b.signature());
    assert_eq!(a.signature(), a.clone().signature());
  }
}
