//! Shapes, area and perimeter, angles, circles, transformations.

use crate::domain::Question;

use super::choices::Choices;
use super::{Seed, TopicContext};

const BASIC_SHAPES: [(&str, u64); 4] = [("circle", 0), ("square", 4), ("triangle", 3), ("rectangle", 4)];
const PENTAGON: (&str, u64) = ("pentagon", 5);
const HEXAGON: (&str, u64) = ("hexagon", 6);
const POLYGONS: [(&str, u64); 5] = [("triangle", 3), ("square", 4), ("rectangle", 4), ("pentagon", 5), ("hexagon", 6)];

const ANGLE_KINDS: [&str; 4] = ["Acute angle", "Right angle", "Obtuse angle", "Straight angle"];

const TRANSFORMATIONS: [(&str, &str); 3] = [
  ("Reflection", "mirror image"),
  ("Rotation", "figure turned around a point"),
  ("Translation", "figure slid to a new position"),
];
const DILATION: &str = "Dilation";

const SYMMETRY_LINES: [(&str, u64); 5] = [
  ("square", 4),
  ("rectangle", 2),
  ("equilateral triangle", 3),
  ("isosceles triangle", 1),
  ("regular hexagon", 6),
];

/// Rotates through `shapes` first, then through the sides/corners wording.
fn count_sides(ctx: &TopicContext<'_>, shapes: &[(&str, u64)]) -> Question {
  let (name, sides) = shapes[ctx.rotate(shapes.len())];
  let wording = if (ctx.index / shapes.len() as u64) % 2 == 0 { "sides" } else { "corners" };
  Question::number(format!("How many {} does a {} have?", wording, name), sides as f64, "🔷")
}

pub fn shape_sides(ctx: &TopicContext<'_>, _seed: Seed) -> Question {
  let mut shapes = BASIC_SHAPES.to_vec();
  if ctx.grade >= 2 || ctx.mentions("pentagon") {
    shapes.push(PENTAGON);
  }
  if ctx.grade >= 2 || ctx.mentions("hexagon") {
    shapes.push(HEXAGON);
  }
  count_sides(ctx, &shapes)
}

pub fn polygon_sides(ctx: &TopicContext<'_>, _seed: Seed) -> Question {
  count_sides(ctx, &POLYGONS)
}

pub fn area(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let length = seed.pick_a(10) + 1;
  let width = seed.pick_b(10) + 1;

  let (text, answer) = if ctx.mentions("square") {
    (format!("What is the area of a square with side length {}?", length), (length * length) as f64)
  } else if ctx.mentions("triangle") {
    (
      format!("What is the area of a triangle with base {} and height {}?", length, width),
      (length * width) as f64 / 2.0,
    )
  } else if ctx.mentions("parallelogram") {
    (
      format!("What is the area of a parallelogram with base {} and height {}?", length, width),
      (length * width) as f64,
    )
  } else if ctx.mentions("trapezoid") {
    let other = seed.pick_ab(10) + 1;
    (
      format!("What is the area of a trapezoid with bases {} and {}, and height {}?", length, other, width),
      ((length + other) * width) as f64 / 2.0,
    )
  } else {
    (
      format!("What is the area of a rectangle with length {} and width {}?", length, width),
      (length * width) as f64,
    )
  };
  Question::number(text, answer, "📐")
}

pub fn perimeter(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let length = seed.pick_a(10) + 1;
  let width = seed.pick_b(10) + 1;
  if ctx.mentions("square") {
    return Question::number(
      format!("What is the perimeter of a square with side length {}?", length),
      (4 * length) as f64,
      "📐",
    );
  }
  Question::number(
    format!("What is the perimeter of a rectangle with length {} and width {}?", length, width),
    (2 * (length + width)) as f64,
    "📐",
  )
}

pub fn angle(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let kind = ctx.rotate(ANGLE_KINDS.len());
  let degrees = match kind {
    0 => seed.pick_a(80) + 10,
    1 => 90,
    2 => seed.pick_a(89) + 91,
    _ => 180,
  };
  let mut choices = Choices::new(ANGLE_KINDS[kind]);
  for k in ANGLE_KINDS {
    choices.offer(k);
  }
  choices.into_question(format!("An angle measures {}°. What kind of angle is it?", degrees), "📐")
}

/// Circle measures with π = 3.14, rounded to the nearest whole number.
pub fn circle(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let radius = seed.pick_a(10) + 1;
  if ctx.mentions("diameter") {
    return Question::number(
      format!("A circle has a radius of {}. What is its diameter?", radius),
      (2 * radius) as f64,
      "⭕",
    );
  }
  // hundredths, rounded half up
  let (what, hundredths) = if ctx.mentions("circumference") {
    ("circumference", 628 * radius)
  } else {
    ("area", 314 * radius * radius)
  };
  Question::number(
    format!("What is the {} of a circle with radius {}? (Use π = 3.14, round to nearest whole)", what, radius),
    ((hundredths + 50) / 100) as f64,
    "⭕",
  )
}

pub fn transformation(ctx: &TopicContext<'_>, _seed: Seed) -> Question {
  if ctx.mentions("symmetry") {
    let (shape, lines) = SYMMETRY_LINES[ctx.rotate(SYMMETRY_LINES.len())];
    return Question::number(format!("How many lines of symmetry does a {} have?", shape), lines as f64, "🪞");
  }
  let (name, description) = TRANSFORMATIONS[ctx.rotate(TRANSFORMATIONS.len())];
  let mut choices = Choices::new(name);
  for (other, _) in TRANSFORMATIONS {
    choices.offer(other);
  }
  choices.offer(DILATION);
  choices.into_question(format!("What type of transformation creates a {}?", description), "🔄")
}
