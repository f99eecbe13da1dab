use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::engine::grade::{GRADE_BANDS, boundary_percent, grade};

const QUESTION_PREVIEW_LENGTH: usize = 45;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.session().final_score().unwrap_or(0);
    let total = app.total_questions();
    let percentage = calculate_percentage(score, total);

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], score, total, percentage);
    render_grade_boundaries(frame, chunks[1], total);
    render_question_breakdown(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn calculate_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, score: usize, total: usize, percentage: f64) {
    let color = grade_color(percentage);
    let grade_line = match grade(score, total) {
        Some(letter) => format!("Estimated grade: {}", letter),
        None => "No grade (empty quiz)".to_string(),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({:.0}%)", score, total, percentage),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(grade_line, Style::default().fg(color).bold())),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_grade_boundaries(frame: &mut Frame, area: Rect, total: usize) {
    let mut lines = vec![Line::from(Span::styled(
        "Grade boundaries (percent):",
        Style::default().fg(Color::Gray),
    ))];
    for band in &GRADE_BANDS {
        let (min_pct, max_pct) = boundary_percent(band, total);
        lines.push(Line::from(Span::styled(
            format!("  {}: {:.1}% - {:.1}%", band.grade, min_pct, max_pct),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let questions = app
        .session()
        .display()
        .map(|display| display.questions.as_slice())
        .unwrap_or_default();

    let lines: Vec<Line> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let answered = app.session().answer(index);
            let is_correct = answered == Some(question.correct_index);
            let (symbol, color) = if is_correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            let mut spans = vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate_question(&question.question),
                    Style::default().fg(Color::Gray),
                ),
            ];
            if !is_correct {
                spans.push(Span::styled(
                    format!("  correct: {}", question.choices[question.correct_index]),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.result_scroll() as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r retry (reshuffle)  ·  b back  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
