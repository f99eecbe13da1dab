use std::path::PathBuf;

use clap::Parser;
use quizmix::{App, QuizRepository};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing quiz JSON files
    #[arg(short, long, default_value = "quizzes")]
    quizzes: PathBuf,

    /// Number of questions in a generated mixed quiz
    #[arg(short, long, default_value_t = quizmix::DEFAULT_MIXED_LEN)]
    mixed_len: usize,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let repo = QuizRepository::new(args.quizzes);
    let mut app = App::new(repo, args.mixed_len);
    if let Err(e) = quizmix::run(&mut app) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
