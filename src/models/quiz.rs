use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single multiple-choice question as stored on disk.
///
/// The JSON field names (`question`, `choices`, `answerIndex`) are the
/// storage contract for existing quiz files and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub choices: Vec<String>,
    #[serde(rename = "answerIndex")]
    pub answer_index: usize,
}

/// A named, ordered set of questions. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

/// A question prepared for one attempt: choices permuted, with the
/// correct choice's new position tracked.
///
/// Invariant: `choices[correct_index]` is the same text as the source
/// question's `choices[answer_index]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayQuestion {
    pub question: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
}

/// A quiz prepared for one attempt. Recomputed on every (re)shuffle,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayQuiz {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<DisplayQuestion>,
}

/// The user's in-progress selections: question index to chosen choice
/// index. Unanswered questions are simply absent.
pub type AnswerMap = HashMap<usize, usize>;
