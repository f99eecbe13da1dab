mod extract;
mod repository;

pub use extract::{ExtractError, TextExtractor};
pub use repository::{QuizRepository, RepoError};
