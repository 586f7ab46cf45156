//! Phrase of the day ("anywhere door")

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tracing::debug;

use crate::models::Phrase;
use crate::pocket_tui::{
    traits::{Screen, ScreenAction},
    ui::Styles,
};
use crate::session::Session;

/// Shows at most one phrase; each door opening replaces it.
#[derive(Default)]
pub struct PhraseScreen {
    pub current: Option<&'static Phrase>,
}

impl PhraseScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw_door(&self, f: &mut Frame, area: Rect) {
        let door = Paragraph::new(Line::from(vec![
            Span::styled("[Enter] ", Styles::key()),
            Span::styled("✨ 打開任意門 Open the anywhere door", Styles::title()),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("🚪 任意門：每日短句")
                .borders(Borders::ALL)
                .border_style(Styles::active_border()),
        );
        f.render_widget(door, area);
    }

    fn draw_phrase(&self, f: &mut Frame, area: Rect) {
        let lines = match self.current {
            Some(phrase) => vec![
                Line::from(""),
                Line::from(Span::styled(
                    phrase.source,
                    Styles::title().add_modifier(Modifier::UNDERLINED),
                )),
                Line::from(""),
                Line::from(Span::styled(phrase.reading, Styles::info())),
                Line::from(""),
                Line::from(vec![
                    Span::styled("中文意思: ", Styles::inactive()),
                    Span::styled(phrase.meaning, Styles::success()),
                ]),
            ],
            None => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "The door is closed. Press Enter to see where it leads.",
                    Styles::inactive(),
                )),
            ],
        };

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            );
        f.render_widget(paragraph, area);
    }
}

impl Screen for PhraseScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect, _session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_door(f, chunks[0]);
        self.draw_phrase(f, chunks[1]);
    }

    fn handle_key_event(&mut self, key: KeyEvent, session: &mut Session) -> Result<ScreenAction> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let phrase = session.random_phrase();
                debug!("Anywhere door opened on {}", phrase.source);
                self.current = Some(phrase);
                ScreenAction::ClearMessages
            }
            KeyCode::Esc => ScreenAction::NavigateBack,
            _ => ScreenAction::None,
        };
        Ok(action)
    }

    fn help_text(&self) -> &'static str {
        "Phrase of the Day:\n\
        Enter / Space - Open the door (random phrase)\n\
        Esc - Back to menu"
    }

    fn on_exit(&mut self) {
        self.current = None;
    }
}
