//! Synthesizing a mixed quiz by sampling questions across every known
//! quiz.

use std::fmt;

use rand::Rng;
use uuid::Uuid;

use crate::engine::shuffle::shuffled;
use crate::models::{Question, Quiz};

/// Default length of a generated mixed quiz, matching the exam length.
pub const DEFAULT_MIXED_LEN: usize = 25;

/// Id prefix for generated quizzes, keeping them apart from stored ids.
const MIXED_ID_PREFIX: &str = "mixed";

/// Error type for mixed-quiz generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixError {
    /// The source quizzes contain no questions at all.
    NoQuestionsAvailable,
}

impl fmt::Display for MixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixError::NoQuestionsAvailable => {
                write!(f, "No questions found in available quizzes.")
            }
        }
    }
}

impl std::error::Error for MixError {}

/// Draws `count` questions at random from the pooled questions of every
/// quiz and wraps them in a fresh [`Quiz`].
///
/// Questions are carried over verbatim, choices unshuffled; display
/// shuffling happens later in [`prepare_display`](crate::engine::display::prepare_display).
/// When the pool holds at least `count` questions the draw is without
/// replacement (shuffle the index pool, take the first `count`), so no
/// question appears twice. A smaller pool is taken in full and topped up
/// by independent draws with replacement: a deliberate fallback that
/// guarantees a full-length quiz from sparse sources at the cost of
/// possible duplicates.
///
/// The inputs are never mutated.
pub fn generate_mixed<R: Rng>(
    quizzes: &[Quiz],
    count: usize,
    rng: &mut R,
) -> Result<Quiz, MixError> {
    let pool: Vec<&Question> = quizzes
        .iter()
        .flat_map(|quiz| quiz.questions.iter())
        .collect();
    if pool.is_empty() {
        return Err(MixError::NoQuestionsAvailable);
    }

    let indices: Vec<usize> = (0..pool.len()).collect();
    let order = shuffled(&indices, rng);

    let mut selected: Vec<Question> = Vec::with_capacity(count);
    if order.len() >= count {
        selected.extend(order[..count].iter().map(|&i| pool[i].clone()));
    } else {
        selected.extend(order.iter().map(|&i| pool[i].clone()));
        while selected.len() < count {
            selected.push(pool[rng.gen_range(0..pool.len())].clone());
        }
    }

    Ok(Quiz {
        id: format!("{}-{}-{}", MIXED_ID_PREFIX, count, Uuid::new_v4()),
        title: format!("Random Mixed Quiz ({} questions)", count),
        description: Some(format!(
            "Auto-generated mixed quiz ({} questions) from {} source quizzes.",
            count,
            quizzes.len()
        )),
        questions: selected,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn quiz(id: &str, questions: &[&str]) -> Quiz {
        Quiz {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            questions: questions
                .iter()
                .map(|text| Question {
                    question: text.to_string(),
                    choices: vec!["yes".into(), "no".into()],
                    answer_index: 0,
                })
                .collect(),
        }
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_mixed(&[quiz("a", &[])], 5, &mut rng);
        assert_eq!(result.unwrap_err(), MixError::NoQuestionsAvailable);

        let result = generate_mixed(&[], 5, &mut rng);
        assert_eq!(result.unwrap_err(), MixError::NoQuestionsAvailable);
    }

    #[test]
    fn large_pool_samples_without_replacement() {
        let mut rng = StdRng::seed_from_u64(2);
        let quizzes = vec![
            quiz("a", &["q1", "q2", "q3", "q4"]),
            quiz("b", &["q5", "q6", "q7", "q8"]),
        ];

        let mixed = generate_mixed(&quizzes, 5, &mut rng).unwrap();
        assert_eq!(mixed.questions.len(), 5);

        let texts: HashSet<&str> = mixed
            .questions
            .iter()
            .map(|q| q.question.as_str())
            .collect();
        assert_eq!(texts.len(), 5, "no question may appear twice");
    }

    #[test]
    fn small_pool_is_taken_in_full_then_topped_up() {
        let mut rng = StdRng::seed_from_u64(3);
        let quizzes = vec![quiz("a", &["q1", "q2", "q3"])];

        let mixed = generate_mixed(&quizzes, 10, &mut rng).unwrap();
        assert_eq!(mixed.questions.len(), 10);

        let texts: HashSet<&str> = mixed
            .questions
            .iter()
            .map(|q| q.question.as_str())
            .collect();
        assert_eq!(texts, HashSet::from(["q1", "q2", "q3"]));
    }

    #[test]
    fn questions_are_carried_verbatim() {
        let mut rng = StdRng::seed_from_u64(4);
        let source = quiz("a", &["q1"]);
        let mixed = generate_mixed(std::slice::from_ref(&source), 1, &mut rng).unwrap();
        assert_eq!(mixed.questions[0], source.questions[0]);
    }

    #[test]
    fn generated_ids_carry_the_mixed_prefix_and_differ() {
        let mut rng = StdRng::seed_from_u64(5);
        let quizzes = vec![quiz("a", &["q1", "q2"])];

        let first = generate_mixed(&quizzes, 2, &mut rng).unwrap();
        let second = generate_mixed(&quizzes, 2, &mut rng).unwrap();
        assert!(first.id.starts_with("mixed-2-"));
        assert_ne!(first.id, second.id);
        assert_eq!(first.title, "Random Mixed Quiz (2 questions)");
    }

    #[test]
    fn inputs_are_not_mutated() {
        let mut rng = StdRng::seed_from_u64(6);
        let quizzes = vec![quiz("a", &["q1", "q2"])];
        let before = quizzes.clone();
        let _ = generate_mixed(&quizzes, 2, &mut rng).unwrap();
        assert_eq!(quizzes, before);
    }
}
