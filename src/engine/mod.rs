//! The quiz engine: shuffling, display preparation, mixed-quiz
//! sampling, attempt tracking, and grading.

pub mod display;
pub mod grade;
pub mod mixed;
pub mod session;
pub mod shuffle;
