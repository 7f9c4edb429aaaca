//! Reading pictographs and bar graphs; simple probability.

use crate::domain::Question;

use super::choices::Choices;
use super::{Seed, TopicContext};

const ITEMS: [&str; 5] = ["apples", "books", "pencils", "toys", "flowers"];

pub fn data_reading(ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let item = ITEMS[ctx.rotate(ITEMS.len())];

  if ctx.grade == 1 || ctx.mentions_all(&["pictograph", "without scale"]) {
    let c1 = seed.pick_a(8) + 2;
    let c2 = seed.pick_b(8) + 2;
    let (text, answer) = match (ctx.index / ITEMS.len() as u64) % 3 {
      0 => (
        format!("In a pictograph, there are {} pictures of {}. If each picture stands for 1, how many {} are there?", c1, item, item),
        c1,
      ),
      1 => (
        format!("In a pictograph, Group A has {} pictures and Group B has {} pictures. How many pictures are there in total?", c1, c2),
        c1 + c2,
      ),
      _ => (
        format!(
          "In a pictograph, Group A has {} pictures and Group B has {} pictures. Which group has more? (Answer with the number of pictures)",
          c1, c2
        ),
        c1.max(c2),
      ),
    };
    return Question::number(text, answer as f64, "📊");
  }

  if ctx.mentions("pictograph") {
    let scale = [2u64, 5, 10][ctx.rotate(3)];
    let pictures = seed.pick_a(9) + 2;
    return Question::number(
      format!("In a pictograph, each picture stands for {} {}. A row has {} pictures. How many {} does the row show?", scale, item, pictures, item),
      (scale * pictures) as f64,
      "📊",
    );
  }

  let v1 = seed.pick_a(15) + 5;
  let v2 = seed.pick_b(15) + 5;
  let (big, small) = (v1.max(v2), v1.min(v2));
  if ctx.mentions("difference") {
    return Question::number(
      format!("In a bar graph, one bar shows {} and another shows {}. What is the difference?", big, small),
      (big - small) as f64,
      "📊",
    );
  }
  Question::number(
    format!("In a bar graph, one bar shows {} and another shows {}. What is the total?", v1, v2),
    (v1 + v2) as f64,
    "📊",
  )
}

pub fn probability(_ctx: &TopicContext<'_>, seed: Seed) -> Question {
  let total = seed.pick_a(10) + 5;
  let red = seed.pick_b(total) + 1;

  let mut choices = Choices::new(format!("{}/{}", red, total));
  choices.offer(format!("{}/{}", total - red, total)).offer(format!("{}/{}", total, red));
  if red < total {
    choices.offer(format!("{}/{}", red, total - red));
  }
  choices.fill_with(|k| format!("{}/{}", red, total + k));
  choices.into_question(
    format!(
      "In a bag with {} marbles, {} are red. What is the probability of drawing a red marble? (Express as a fraction)",
      total, red
    ),
    "🎲",
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ctx(grade: u8, outcome: &str, index: u64) -> TopicContext<'_> {
    TopicContext { grade, outcome, index, slot: 0 }
  }

  #[test]
  fn difference_puts_taller_bar_first() {
    for i in 0..50 {
      let q = data_reading(&ctx(4, "interpret bar graph data and find the difference", i), Seed::for_slot(2, i, 0));
      assert!(q.question.contains("difference"));
      assert!(q.numeric_answer().unwrap() >= 0.0);
    }
  }

  #[test]
  fn scaled_pictograph_multiplies() {
    let q = data_reading(&ctx(3, "read pictographs with scale", 0), Seed::for_slot(1, 0, 0));
    // scale 2, 7919 % 9 + 2 = 10 pictures
    assert!(q.question.contains("stands for 2 apples"), "{}", q.question);
    assert_eq!(q.numeric_answer(), Some(20.0));
  }

  #[test]
  fn early_pictographs_count_pictures() {
    let q = data_reading(&ctx(1, "read pictographs", 0), Seed::for_slot(1, 0, 0));
    // 7919 % 8 + 2 = 9
    assert!(q.question.contains("9 pictures of apples"));
    assert_eq!(q.numeric_answer(), Some(9.0));
  }

  #[test]
  fn probability_options_are_distinct() {
    for i in 0..200 {
      let q = probability(&ctx(5, "probability", i), Seed::for_slot(4, i, 0));
      let correct = q.correct_option().unwrap();
      assert!(q.question.contains(&format!("{} marbles, {} are red", correct.split('/').nth(1).unwrap(), correct.split('/').next().unwrap())));
      assert_eq!(q.options.len(), 4);
    }
  }
}
