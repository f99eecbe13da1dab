use log::warn;

use crate::data::{QuizRepository, RepoError};
use crate::engine::mixed::generate_mixed;
use crate::engine::session::AttemptSession;
use crate::models::{AppState, DisplayQuestion, Quiz};

pub struct App {
    pub state: AppState,
    repo: QuizRepository,
    quizzes: Vec<Quiz>,
    session: AttemptSession,
    browse_selected: usize,
    current_question_index: usize,
    selected_option: usize,
    result_scroll: usize,
    notice: Option<String>,
    mixed_len: usize,
}

impl App {
    /// Builds the app over a repository, listing its quizzes up front.
    /// `mixed_len` is the length of generated mixed quizzes.
    pub fn new(repo: QuizRepository, mixed_len: usize) -> Self {
        let quizzes = repo.list_quizzes();
        Self {
            state: AppState::Browse,
            repo,
            quizzes,
            session: AttemptSession::new(),
            browse_selected: 0,
            current_question_index: 0,
            selected_option: 0,
            result_scroll: 0,
            notice: None,
            mixed_len,
        }
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn browse_selected(&self) -> usize {
        self.browse_selected
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn session(&self) -> &AttemptSession {
        &self.session
    }

    pub fn select_next_quiz(&mut self) {
        if !self.quizzes.is_empty() {
            self.browse_selected = (self.browse_selected + 1) % self.quizzes.len();
        }
    }

    pub fn select_previous_quiz(&mut self) {
        if !self.quizzes.is_empty() {
            self.browse_selected =
                (self.browse_selected + self.quizzes.len() - 1) % self.quizzes.len();
        }
    }

    /// Starts the quiz under the browse cursor.
    pub fn start_selected_quiz(&mut self) {
        if let Some(quiz) = self.quizzes.get(self.browse_selected).cloned() {
            self.begin(quiz);
        }
    }

    /// Generates a mixed quiz across every listed quiz and starts it.
    /// An empty pool becomes a notice on the browse screen instead.
    pub fn start_mixed_quiz(&mut self) {
        match generate_mixed(&self.quizzes, self.mixed_len, &mut rand::thread_rng()) {
            Ok(quiz) => self.begin(quiz),
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    /// Starts a quiz by id, for navigation hooks that restore a quiz
    /// from a route. A failed lookup leaves the current state untouched.
    pub fn load_quiz_by_id(&mut self, id: &str) -> Result<(), RepoError> {
        self.session
            .load_quiz_by_id(&self.repo, id, &mut rand::thread_rng())?;
        self.reset_cursors();
        self.state = AppState::Quiz;
        Ok(())
    }

    fn begin(&mut self, quiz: Quiz) {
        self.session.start_quiz(quiz, &mut rand::thread_rng());
        self.reset_cursors();
        self.state = AppState::Quiz;
    }

    fn reset_cursors(&mut self) {
        self.current_question_index = 0;
        self.selected_option = 0;
        self.result_scroll = 0;
        self.notice = None;
    }

    pub fn current_question(&self) -> Option<&DisplayQuestion> {
        self.session
            .display()
            .and_then(|display| display.questions.get(self.current_question_index))
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.session.total_questions()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn select_next_option(&mut self) {
        if let Some(count) = self.current_choice_count() {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(count) = self.current_choice_count() {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    fn current_choice_count(&self) -> Option<usize> {
        self.current_question()
            .map(|question| question.choices.len())
            .filter(|&count| count > 0)
    }

    /// Records the highlighted choice for the current question and
    /// advances; after the last question the attempt is submitted.
    pub fn submit_answer(&mut self) {
        let total = self.total_questions();
        if self.current_question_index >= total {
            return;
        }
        if let Err(err) = self
            .session
            .select_answer(self.current_question_index, self.selected_option)
        {
            warn!("answer rejected: {}", err);
            return;
        }

        self.current_question_index += 1;
        self.selected_option = 0;
        if self.current_question_index >= total {
            self.session.submit();
            self.state = AppState::Result;
        }
    }

    /// Restarts the current quiz with a fresh shuffle and empty answers.
    pub fn retry(&mut self) {
        self.session.retry(&mut rand::thread_rng());
        self.reset_cursors();
        self.state = AppState::Quiz;
    }

    /// Abandons the attempt and returns to the browse screen.
    pub fn exit_quiz(&mut self) {
        self.session.exit();
        self.reset_cursors();
        self.state = AppState::Browse;
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        let max = self.total_questions().saturating_sub(1);
        if self.result_scroll < max {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}
