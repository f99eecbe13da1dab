//! # quizmix
//!
//! A terminal application for taking multiple-choice quizzes stored as
//! JSON files. Every attempt reshuffles each question's choices, scores
//! are mapped to letter grades through proportionally scaled boundaries,
//! and a "mixed quiz" can be generated by sampling random questions
//! across every stored quiz.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizmix::{App, QuizRepository};
//!
//! fn main() -> std::io::Result<()> {
//!     let repo = QuizRepository::new("quizzes");
//!     let mut app = App::new(repo, 25);
//!     quizmix::run(&mut app)
//! }
//! ```

mod app;
mod data;
mod engine;
mod models;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use data::{ExtractError, QuizRepository, RepoError, TextExtractor};
pub use engine::display::prepare_display;
pub use engine::grade::{GRADE_BANDS, Grade, GradeBand, boundary_percent, grade};
pub use engine::mixed::{DEFAULT_MIXED_LEN, MixError, generate_mixed};
pub use engine::session::{AttemptSession, SessionError, score};
pub use engine::shuffle::shuffled;
pub use models::{AnswerMap, AppState, DisplayQuestion, DisplayQuiz, Question, Quiz};

/// Runs the quiz UI in the terminal until the user quits.
///
/// Takes over the terminal, drives the event loop, and restores the
/// terminal before returning.
pub fn run(app: &mut App) -> io::Result<()> {
    let mut term = terminal::init()?;
    let result = run_event_loop(&mut term, app);
    terminal::restore()?;
    result
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Browse => handle_browse_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_browse_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_quiz();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_quiz();
            false
        }
        KeyCode::Enter => {
            app.start_selected_quiz();
            false
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.start_mixed_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
            false
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            app.exit_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.retry();
            false
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            app.exit_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
