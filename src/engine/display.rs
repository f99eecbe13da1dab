//! Preparing a quiz for display: per-question choice shuffling with
//! correct-answer tracking.

use rand::Rng;

use crate::engine::shuffle::shuffled;
use crate::models::{DisplayQuestion, DisplayQuiz, Question, Quiz};

/// Builds a [`DisplayQuiz`] with every question's choices independently
/// reshuffled.
///
/// Safe to call repeatedly on the same quiz; each call produces a fresh,
/// independent permutation per question (retry relies on this). A quiz
/// with zero questions yields a display quiz with zero questions.
pub fn prepare_display<R: Rng>(quiz: &Quiz, rng: &mut R) -> DisplayQuiz {
    DisplayQuiz {
        id: quiz.id.clone(),
        title: quiz.title.clone(),
        description: quiz.description.clone(),
        questions: quiz
            .questions
            .iter()
            .map(|question| prepare_question(question, rng))
            .collect(),
    }
}

/// Tags each choice with its original index, shuffles the pairs, then
/// scans for the tag matching `answer_index` to recover the correct
/// choice's new position.
fn prepare_question<R: Rng>(question: &Question, rng: &mut R) -> DisplayQuestion {
    let tagged: Vec<(usize, &str)> = question
        .choices
        .iter()
        .map(String::as_str)
        .enumerate()
        .collect();
    let permuted = shuffled(&tagged, rng);

    let correct_index = permuted
        .iter()
        .position(|(original, _)| *original == question.answer_index)
        .expect("answer_index is validated against choices at load time");

    DisplayQuestion {
        question: question.question.clone(),
        choices: permuted.into_iter().map(|(_, text)| text.to_string()).collect(),
        correct_index,
    }
}
