//! Category → outcome-keyword → sub-generator dispatch.
//!
//! Each category owns an ordered rule table. Rules are tried top to bottom
//! against the lower-cased learning outcome; the first match wins. No category
//! match, or no keyword match inside the category, selects `DEFAULT_RULE`.

use crate::domain::Category;

use super::{data, geometry, measurement, number_sense, operations, patterns, problem_solving, Generator};

#[derive(Debug)]
pub enum Matcher {
  /// Outcome contains at least one of these substrings.
  AnyOf(&'static [&'static str]),
  Always,
}

impl Matcher {
  pub fn matches(&self, outcome: &str) -> bool {
    match self {
      Matcher::AnyOf(keywords) => keywords.iter().any(|k| outcome.contains(k)),
      Matcher::Always => true,
    }
  }
}

pub struct Rule {
  pub name: &'static str,
  pub matcher: Matcher,
  pub generate: Generator,
}

impl std::fmt::Debug for Rule {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Rule").field("name", &self.name).field("matcher", &self.matcher).finish()
  }
}

macro_rules! rule {
  ($name:literal, [$($kw:literal),+ $(,)?], $gen:path) => {
    Rule { name: $name, matcher: Matcher::AnyOf(&[$($kw),+]), generate: $gen }
  };
  ($name:literal, always, $gen:path) => {
    Rule { name: $name, matcher: Matcher::Always, generate: $gen }
  };
}

pub static DEFAULT_RULE: Rule = rule!("default_addition", always, operations::default_addition);

static NUMBER_SENSE: [Rule; 7] = [
  rule!("number_recognition", ["count", "recognize", "represent", "whole numbers"], number_sense::recognition),
  rule!("ordinal", ["ordinal"], number_sense::ordinal),
  rule!("fraction", ["fraction"], number_sense::fraction),
  rule!("decimal", ["decimal"], number_sense::decimal),
  rule!("odd_even", ["odd", "even"], number_sense::odd_even),
  rule!("factors_multiples", ["factor", "multiple"], number_sense::factors_multiples),
  rule!("ratio_proportion", ["ratio", "proportion", "percent"], number_sense::ratio_proportion),
];

static OPERATIONS: [Rule; 6] = [
  rule!("addition", ["addition", "add", "sum"], operations::addition),
  rule!("subtraction", ["subtraction", "subtract", "difference"], operations::subtraction),
  rule!("multiplication", ["multiplication", "multiply", "product"], operations::multiplication),
  rule!("division", ["division", "divide", "quotient"], operations::division),
  rule!("order_of_operations", ["gemdas", "order of operations", "exponent"], operations::order_of_operations),
  rule!("four_operations", ["four operations", "operations"], operations::mixed),
];

static GEOMETRY: [Rule; 7] = [
  rule!("shape_sides", ["shape", "2-dimensional", "2d"], geometry::shape_sides),
  rule!("area", ["area"], geometry::area),
  rule!("perimeter", ["perimeter"], geometry::perimeter),
  rule!("angle", ["angle"], geometry::angle),
  rule!("circle", ["circle"], geometry::circle),
  rule!("polygon_sides", ["triangle", "quadrilateral"], geometry::polygon_sides),
  rule!("transformation", ["symmetry", "reflection", "rotation", "translation"], geometry::transformation),
];

static MEASUREMENT: [Rule; 5] = [
  rule!("money", ["money", "philippine", "peso", "₱"], measurement::money),
  rule!("time", ["time", "hour", "minute", "elapsed"], measurement::time),
  rule!("length", ["length", "distance", "measure"], measurement::length),
  rule!("mass", ["mass", "weight"], measurement::mass),
  rule!("capacity_volume", ["capacity", "volume"], measurement::capacity_volume),
];

static DATA: [Rule; 2] = [
  rule!("data_reading", ["pictograph", "graph", "data"], data::data_reading),
  rule!("probability", ["probability", "outcome"], data::probability),
];

static PATTERNS: [Rule; 1] = [rule!("pattern", ["pattern", "extend", "create"], patterns::pattern)];

static PROBLEM_SOLVING: [Rule; 1] = [rule!("word_problem", always, problem_solving::word_problem)];

pub fn rules_for(category: &Category) -> &'static [Rule] {
  match category {
    Category::NumberSense => &NUMBER_SENSE,
    Category::Operations => &OPERATIONS,
    Category::Geometry => &GEOMETRY,
    Category::Measurement => &MEASUREMENT,
    Category::Data => &DATA,
    Category::Patterns => &PATTERNS,
    Category::ProblemSolving => &PROBLEM_SOLVING,
    Category::Other(_) => &[],
  }
}

/// First matching rule for a lower-cased outcome, or the default.
pub fn select(category: &Category, outcome: &str) -> &'static Rule {
  rules_for(category)
    .iter()
    .find(|r| r.matcher.matches(outcome))
    .unwrap_or(&DEFAULT_RULE)
}
