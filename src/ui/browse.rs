use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);
    render_quiz_list(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "QUIZMIX",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("pick a quiz, or mix one from every question".fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_quiz_list(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::with_capacity(app.quizzes().len() * 2);

    for (index, quiz) in app.quizzes().iter().enumerate() {
        let is_selected = index == app.browse_selected();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(quiz.title.as_str(), style),
            Span::styled(
                format!("  ({} questions)", quiz.questions.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        if let Some(description) = quiz.description.as_deref().filter(|_| is_selected) {
            lines.push(Line::from(Span::styled(
                format!("     {}", description),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let notice = app.notice().unwrap_or("");
    let content = vec![
        Line::from(Span::styled(notice, Style::default().fg(Color::Yellow))),
        Line::from("j/k move  ·  enter start  ·  m mixed quiz  ·  q quit".fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
