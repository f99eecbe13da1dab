//! Attempt lifecycle: one quiz being taken by one user.
//!
//! An [`AttemptSession`] is created at quiz start, mutated through
//! [`select_answer`](AttemptSession::select_answer), finalized by
//! [`submit`](AttemptSession::submit), and destroyed on exit. Retrying
//! rebuilds the display quiz with a fresh shuffle and clears every
//! recorded answer.

use std::fmt;

use rand::Rng;

use crate::data::{QuizRepository, RepoError};
use crate::engine::display::prepare_display;
use crate::models::{AnswerMap, DisplayQuiz, Quiz};

/// Error type for answer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// No attempt is in progress.
    NoActiveQuiz,
    /// The question index is outside the active quiz.
    QuestionOutOfRange { index: usize, total: usize },
    /// The choice index is outside the question's choices.
    ChoiceOutOfRange {
        question: usize,
        choice: usize,
        choices: usize,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoActiveQuiz => write!(f, "no quiz is in progress"),
            SessionError::QuestionOutOfRange { index, total } => {
                write!(f, "question index {} out of range (quiz has {})", index, total)
            }
            SessionError::ChoiceOutOfRange {
                question,
                choice,
                choices,
            } => write!(
                f,
                "choice {} out of range for question {} ({} choices)",
                choice, question, choices
            ),
        }
    }
}

impl std::error::Error for SessionError {}

/// Counts the questions whose recorded answer lands on the correct
/// choice of the displayed (shuffled) quiz.
///
/// Unanswered questions never match. The answer map is only read, and
/// the result is deterministic for a given quiz and map.
pub fn score(display: &DisplayQuiz, answers: &AnswerMap) -> usize {
    display
        .questions
        .iter()
        .enumerate()
        .filter(|(i, q)| answers.get(i) == Some(&q.correct_index))
        .count()
}

/// Mutable state for one in-progress attempt.
#[derive(Default)]
pub struct AttemptSession {
    quiz: Option<Quiz>,
    display: Option<DisplayQuiz>,
    answers: AnswerMap,
    submitted: bool,
    final_score: Option<usize>,
}

impl AttemptSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `quiz` as the active attempt: prepares a freshly
    /// shuffled display quiz and clears answers, score, and the
    /// submitted flag.
    pub fn start_quiz<R: Rng>(&mut self, quiz: Quiz, rng: &mut R) {
        self.display = Some(prepare_display(&quiz, rng));
        self.quiz = Some(quiz);
        self.answers.clear();
        self.submitted = false;
        self.final_score = None;
    }

    /// Repository lookup plus [`start_quiz`](Self::start_quiz), usable
    /// from any navigation hook.
    ///
    /// A failed lookup leaves the current attempt, including its answer
    /// map, untouched.
    pub fn load_quiz_by_id<R: Rng>(
        &mut self,
        repo: &QuizRepository,
        id: &str,
        rng: &mut R,
    ) -> Result<(), RepoError> {
        let quiz = repo.get_quiz(id)?;
        self.start_quiz(quiz, rng);
        Ok(())
    }

    /// Records the chosen choice for a question, overwriting any prior
    /// selection.
    ///
    /// Both indices are validated against the display quiz; out-of-range
    /// selections are rejected rather than silently stored.
    pub fn select_answer(
        &mut self,
        question_index: usize,
        choice_index: usize,
    ) -> Result<(), SessionError> {
        let display = self.display.as_ref().ok_or(SessionError::NoActiveQuiz)?;
        let question = display.questions.get(question_index).ok_or(
            SessionError::QuestionOutOfRange {
                index: question_index,
                total: display.questions.len(),
            },
        )?;
        if choice_index >= question.choices.len() {
            return Err(SessionError::ChoiceOutOfRange {
                question: question_index,
                choice: choice_index,
                choices: question.choices.len(),
            });
        }
        self.answers.insert(question_index, choice_index);
        Ok(())
    }

    /// Score of the answers recorded so far.
    pub fn current_score(&self) -> usize {
        match &self.display {
            Some(display) => score(display, &self.answers),
            None => 0,
        }
    }

    /// Finalizes the attempt: computes and stores the score and marks
    /// the session submitted.
    pub fn submit(&mut self) -> usize {
        let final_score = self.current_score();
        self.final_score = Some(final_score);
        self.submitted = true;
        final_score
    }

    /// Restarts the attempt on the same quiz with a fresh reshuffle.
    /// The prior display quiz is never reused.
    pub fn retry<R: Rng>(&mut self, rng: &mut R) {
        if let Some(quiz) = &self.quiz {
            self.display = Some(prepare_display(quiz, rng));
        }
        self.answers.clear();
        self.submitted = false;
        self.final_score = None;
    }

    /// Drops all attempt state.
    pub fn exit(&mut self) {
        *self = Self::default();
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn display(&self) -> Option<&DisplayQuiz> {
        self.display.as_ref()
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// The recorded choice for a question, if any.
    pub fn answer(&self, question_index: usize) -> Option<usize> {
        self.answers.get(&question_index).copied()
    }

    pub fn is_active(&self) -> bool {
        self.display.is_some()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn final_score(&self) -> Option<usize> {
        self.final_score
    }

    pub fn total_questions(&self) -> usize {
        self.display.as_ref().map_or(0, |d| d.questions.len())
    }
}
