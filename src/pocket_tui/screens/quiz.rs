//! Flashcard quiz over the session's vocabulary

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::pocket_tui::{
    traits::{Screen, ScreenAction},
    ui::Styles,
};
use crate::quiz::QuizState;
use crate::session::Session;

/// The quiz screen holds no question of its own. The current question lives
/// in the session so it survives leaving the screen.
#[derive(Default)]
pub struct QuizScreen;

impl QuizScreen {
    pub fn new() -> Self {
        Self
    }

    fn draw_empty(&self, f: &mut Frame, area: Rect) {
        let warning = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "⚠ 單字本是空的! No words yet.",
                Styles::warning().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Add some words on the vocabulary screen first.",
                Styles::inactive(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("🧠 隨堂小考 Quiz")
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );
        f.render_widget(warning, area);
    }

    fn draw_question(&self, f: &mut Frame, area: Rect, state: &QuizState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Question
                Constraint::Min(0),    // Answer
                Constraint::Length(3), // Hint
            ])
            .split(area);

        let question = Paragraph::new(vec![
            Line::from(Span::styled("這個單字怎麼唸? What does this word mean?", Styles::info())),
            Line::from(""),
            Line::from(Span::styled(
                state.entry().word.clone(),
                Styles::title().add_modifier(Modifier::UNDERLINED),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("🧠 隨堂小考 Quiz")
                .borders(Borders::ALL)
                .border_style(Styles::active_border()),
        );
        f.render_widget(question, chunks[0]);

        let answer_lines = if state.is_revealed() {
            vec![
                Line::from(vec![
                    Span::styled("假名 Reading: ", Styles::inactive()),
                    Span::styled(state.entry().reading.clone(), Styles::success()),
                ]),
                Line::from(vec![
                    Span::styled("中文 Meaning: ", Styles::inactive()),
                    Span::styled(state.entry().meaning.clone(), Styles::success()),
                ]),
            ]
        } else {
            vec![Line::from(Span::styled("? ? ?", Styles::inactive()))]
        };
        let answer = Paragraph::new(answer_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Answer")
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            );
        f.render_widget(answer, chunks[1]);

        let hint = if state.is_revealed() {
            Line::from(vec![
                Span::styled("[n]", Styles::key()),
                Span::raw(" Next question"),
            ])
        } else {
            Line::from(vec![
                Span::styled("[Enter]", Styles::key()),
                Span::raw(" Reveal answer"),
            ])
        };
        let hint = Paragraph::new(hint)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Styles::inactive_border()));
        f.render_widget(hint, chunks[2]);
    }
}

impl Screen for QuizScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect, session: &Session) {
        match session.quiz() {
            Some(state) => self.draw_question(f, area, state),
            None => self.draw_empty(f, area),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, session: &mut Session) -> Result<ScreenAction> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => match session.reveal_answer() {
                Ok(_) => ScreenAction::ClearMessages,
                Err(e) => ScreenAction::SetError(e.to_string()),
            },
            KeyCode::Char('n') => match session.next_question() {
                Ok(_) => ScreenAction::ClearMessages,
                Err(e) => ScreenAction::SetError(e.to_string()),
            },
            KeyCode::Esc => ScreenAction::NavigateBack,
            _ => ScreenAction::None,
        };
        Ok(action)
    }

    fn help_text(&self) -> &'static str {
        "Quiz:\n\
        Enter / Space / r - Reveal answer\n\
        n - Next question (after reveal)\n\
        Esc - Back to menu"
    }

    fn on_enter(&mut self, session: &mut Session) {
        session.enter_quiz();
    }
}
