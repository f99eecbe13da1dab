//! Directory-backed quiz store.
//!
//! Quizzes live as individual JSON files in one directory. A record
//! that fails to parse or validate is skipped with a diagnostic so one
//! bad file never takes down the whole listing.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::models::{Question, Quiz};

/// Error type for quiz lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No stored quiz carries the requested id.
    NotFound(String),
}

impl fmt::Display for RepoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoError::NotFound(id) => write!(f, "quiz not found: {}", id),
        }
    }
}

impl std::error::Error for RepoError {}

/// Why a stored record was rejected.
enum RecordError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Malformed(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Io(err) => write!(f, "read failed: {}", err),
            RecordError::Parse(err) => write!(f, "invalid JSON: {}", err),
            RecordError::Malformed(reason) => write!(f, "malformed record: {}", reason),
        }
    }
}

/// Quiz store reading JSON files from a single directory.
pub struct QuizRepository {
    dir: PathBuf,
}

impl QuizRepository {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Lists every valid stored quiz, newest first (by a four-digit year
    /// found in the id or title, ties broken by title).
    ///
    /// When the directory is missing or holds no valid quiz, a built-in
    /// sample quiz is returned instead so callers always have something
    /// to offer.
    pub fn list_quizzes(&self) -> Vec<Quiz> {
        let mut quizzes = self.read_all();
        quizzes.sort_by(|a, b| {
            year_of(b)
                .cmp(&year_of(a))
                .then_with(|| a.title.cmp(&b.title))
        });

        if quizzes.is_empty() {
            quizzes.push(sample_quiz());
        }
        quizzes
    }

    /// Looks up one quiz by id: `<dir>/<id>.json` directly first, then a
    /// scan of every stored record for a matching `id` field.
    pub fn get_quiz(&self, id: &str) -> Result<Quiz, RepoError> {
        let direct = self.dir.join(format!("{}.json", id));
        if direct.is_file() {
            match load_quiz_file(&direct) {
                Ok(quiz) => return Ok(quiz),
                Err(err) => warn!("skipping quiz file {}: {}", direct.display(), err),
            }
        }

        self.read_all()
            .into_iter()
            .find(|quiz| quiz.id == id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }

    fn read_all(&self) -> Vec<Quiz> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("cannot read quiz directory {}: {}", self.dir.display(), err);
                return Vec::new();
            }
        };

        let mut quizzes = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !is_json_file(&path) {
                continue;
            }
            match load_quiz_file(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(err) => warn!("skipping quiz file {}: {}", path.display(), err),
            }
        }
        quizzes
    }
}

fn is_json_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn load_quiz_file(path: &Path) -> Result<Quiz, RecordError> {
    let raw = fs::read_to_string(path).map_err(RecordError::Io)?;
    let quiz: Quiz = serde_json::from_str(&raw).map_err(RecordError::Parse)?;
    validate(&quiz).map_err(RecordError::Malformed)?;
    Ok(quiz)
}

/// Structural validation: the engine relies on every `answer_index`
/// pointing at a real choice, so reject bad records here rather than
/// inside the shuffle path.
fn validate(quiz: &Quiz) -> Result<(), String> {
    if quiz.id.is_empty() {
        return Err("missing id".to_string());
    }
    for (i, question) in quiz.questions.iter().enumerate() {
        if question.choices.len() < 2 {
            return Err(format!(
                "question {} has {} choices, need at least 2",
                i,
                question.choices.len()
            ));
        }
        if question.answer_index >= question.choices.len() {
            return Err(format!(
                "question {} answerIndex {} out of range ({} choices)",
                i,
                question.answer_index,
                question.choices.len()
            ));
        }
    }
    Ok(())
}

/// Four-digit year pulled from the id or title, 0 when absent. Used to
/// sort listings newest first.
fn year_of(quiz: &Quiz) -> u32 {
    let source = format!("{} {}", quiz.id, quiz.title);
    let chars: Vec<char> = source.chars().collect();

    for start in 0..chars.len().saturating_sub(3) {
        let window = &chars[start..start + 4];
        if !window.iter().all(char::is_ascii_digit) {
            continue;
        }
        // Digit runs longer than four are not years.
        let bounded = (start == 0 || !chars[start - 1].is_ascii_digit())
            && (start + 4 == chars.len() || !chars[start + 4].is_ascii_digit());
        if !bounded {
            continue;
        }
        let value: u32 = window.iter().collect::<String>().parse().unwrap_or(0);
        if (1900..=2099).contains(&value) {
            return value;
        }
    }
    0
}

/// Fallback shown when the store is empty, so the quiz list is never
/// blank.
fn sample_quiz() -> Quiz {
    Quiz {
        id: "sample-1".to_string(),
        title: "Sample Quiz: Biology Basics".to_string(),
        description: None,
        questions: vec![Question {
            question: "Which organelle is known as the powerhouse of the cell?".to_string(),
            choices: vec![
                "Mitochondria".to_string(),
                "Nucleus".to_string(),
                "Ribosome".to_string(),
                "Golgi apparatus".to_string(),
            ],
            answer_index: 0,
        }],
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use uuid::Uuid;

    use super::*;
    use crate::engine::session::AttemptSession;

    struct TempQuizDir {
        path: PathBuf,
    }

    impl TempQuizDir {
        fn new() -> Self {
            let path = std::env::temp_dir().join(format!("quizmix-test-{}", Uuid::new_v4()));
            fs::create_dir_all(&path).unwrap();
            Self { path }
        }

        fn write(&self, name: &str, contents: &str) {
            fs::write(self.path.join(name), contents).unwrap();
        }

        fn repo(&self) -> QuizRepository {
            QuizRepository::new(&self.path)
        }
    }

    impl Drop for TempQuizDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }

    const VALID_2021: &str = r#"{
        "id": "exam-2021",
        "title": "Exam 2021",
        "questions": [
            {"question": "1 + 1?", "choices": ["2", "3"], "answerIndex": 0}
        ]
    }"#;

    const VALID_2023: &str = r#"{
        "id": "exam-2023",
        "title": "Exam 2023",
        "description": "newest",
        "questions": [
            {"question": "2 + 2?", "choices": ["3", "4"], "answerIndex": 1}
        ]
    }"#;

    #[test]
    fn lists_quizzes_newest_first() {
        let dir = TempQuizDir::new();
        dir.write("old.json", VALID_2021);
        dir.write("new.json", VALID_2023);

        let listed = dir.repo().list_quizzes();
        let ids: Vec<&str> = listed.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["exam-2023", "exam-2021"]);
    }

    #[test]
    fn malformed_records_are_skipped_not_fatal() {
        let dir = TempQuizDir::new();
        dir.write("good.json", VALID_2021);
        dir.write("broken.json", "{ not json");
        dir.write("no_id.json", r#"{"id": "", "title": "x", "questions": []}"#);
        dir.write(
            "bad_answer.json",
            r#"{"id": "x", "title": "x", "questions": [
                {"question": "?", "choices": ["a", "b"], "answerIndex": 5}
            ]}"#,
        );
        dir.write("notes.txt", "not a quiz");

        let listed = dir.repo().list_quizzes();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "exam-2021");
    }

    #[test]
    fn empty_store_falls_back_to_the_sample() {
        let dir = TempQuizDir::new();
        let listed = dir.repo().list_quizzes();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "sample-1");

        let missing = QuizRepository::new("/nonexistent/quizmix");
        assert_eq!(missing.list_quizzes()[0].id, "sample-1");
    }

    #[test]
    fn get_quiz_prefers_the_direct_file_then_scans() {
        let dir = TempQuizDir::new();
        dir.write("exam-2021.json", VALID_2021);
        // Stored under a filename that does not match its id.
        dir.write("misc.json", VALID_2023);

        let repo = dir.repo();
        assert_eq!(repo.get_quiz("exam-2021").unwrap().title, "Exam 2021");
        assert_eq!(repo.get_quiz("exam-2023").unwrap().title, "Exam 2023");
        assert_eq!(
            repo.get_quiz("nope"),
            Err(RepoError::NotFound("nope".to_string()))
        );
    }

    #[test]
    fn optional_description_round_trips() {
        let quiz: Quiz = serde_json::from_str(VALID_2021).unwrap();
        assert_eq!(quiz.description, None);
        let json = serde_json::to_string(&quiz).unwrap();
        assert!(!json.contains("description"));
        assert!(json.contains("\"answerIndex\":0"));
    }

    #[test]
    fn failed_lookup_leaves_the_session_untouched() {
        let dir = TempQuizDir::new();
        dir.write("exam-2021.json", VALID_2021);
        let repo = dir.repo();
        let mut rng = StdRng::seed_from_u64(9);

        let mut session = AttemptSession::new();
        session
            .load_quiz_by_id(&repo, "exam-2021", &mut rng)
            .unwrap();
        session.select_answer(0, 1).unwrap();
        let display_before = session.display().unwrap().clone();

        let err = session
            .load_quiz_by_id(&repo, "missing", &mut rng)
            .unwrap_err();
        assert_eq!(err, RepoError::NotFound("missing".to_string()));
        assert_eq!(session.display().unwrap(), &display_before);
        assert_eq!(session.answer(0), Some(1));
    }

    #[test]
    fn year_detection_ignores_longer_digit_runs() {
        let quiz = |id: &str, title: &str| Quiz {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            questions: Vec::new(),
        };
        assert_eq!(year_of(&quiz("exam-2021", "Exam")), 2021);
        assert_eq!(year_of(&quiz("exam", "Kahoot 2019 review")), 2019);
        assert_eq!(year_of(&quiz("exam-123456", "no year")), 0);
        assert_eq!(year_of(&quiz("exam-1234", "plain")), 0);
    }
}
