use crate::models::NO_PROBLEM_CHOICE;
use crate::session::SurveyState;
use crate::ui::layout::calculate_survey_chunks;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

// Static reference copy shown under every question.
const BACKGROUND_KNOWLEDGE: [&str; 3] = [
    "1. Law of Attraction: The idea that positive or negative thoughts bring corresponding experiences into a person's life.",
    "2. Empathy Theory: The ability to understand and share the feelings of others, which helps create emotional connections.",
    "3. Social Exchange Theory: A theory that explains relationships as a series of interactions where people balance costs and benefits.",
];

pub fn draw_survey(f: &mut Frame, state: &SurveyState) {
    let layout = calculate_survey_chunks(f.area());

    let header_text = match (state.current_file_name(), state.question_position()) {
        (Some(name), Some((number, total))) => {
            format!("{} - Question {} / {}", name, number, total)
        }
        _ => "Survey".to_string(),
    };
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let dialogue_lines: Vec<Line> = state
        .current_set
        .iter()
        .flat_map(|set| set.dialogue.iter())
        .map(|line| Line::from(line.display()))
        .collect();
    let dialogue = Paragraph::new(Text::from(dialogue_lines))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Dialogue"));
    f.render_widget(dialogue, layout.dialogue_area);

    if let Some(current) = state.current_question() {
        let mut question_text = Text::default();
        question_text.push_line(Line::from(Span::styled(
            format!("Category: {}", current.category),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        question_text.push_line(Line::from(""));
        question_text.push_line(Line::from(current.question.as_str()));
        question_text.push_line(Line::from(""));
        question_text.push_line(Line::from(Span::styled(
            format!("Answer: {}", current.answer),
            Style::default().fg(Color::Green),
        )));
        let question = Paragraph::new(question_text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Question"));
        f.render_widget(question, layout.question_area);

        let rows = std::iter::once(NO_PROBLEM_CHOICE.to_string())
            .chain(current.choices.iter().map(|choice| choice.display()));
        let items: Vec<ListItem> = rows
            .enumerate()
            .map(|(i, row)| {
                let style = if i == state.selected_choice {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(row).style(style)
            })
            .collect();
        let choices = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select a Correction"),
        );
        f.render_widget(choices, layout.choices_area);
    }

    let knowledge_lines: Vec<Line> = BACKGROUND_KNOWLEDGE
        .iter()
        .map(|entry| Line::from(*entry))
        .collect();
    let knowledge = Paragraph::new(Text::from(knowledge_lines))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Background Knowledge"),
        );
    f.render_widget(knowledge, layout.knowledge_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Select  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Submit  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit Survey")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave the survey? Recorded answers are already saved.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Quit)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
