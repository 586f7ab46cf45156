//! Main menu screen for the pocket TUI
//!
//! Doubles as the home page: besides the four gadgets it shows how many words
//! are in the notebook.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::pocket_tui::{
    app::Screen as ScreenType,
    handlers::{CommonKeyHandler, MenuHandler},
    traits::{wrap_next, wrap_previous, Navigable, Screen, ScreenAction},
    ui::Styles,
};
use crate::session::Session;

/// Main menu options
#[derive(Debug, Clone)]
pub struct MenuOption {
    pub title: String,
    pub description: String,
    pub shortcut: char,
    pub screen: ScreenType,
}

impl MenuOption {
    pub fn new(title: &str, description: &str, shortcut: char, screen: ScreenType) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            shortcut,
            screen,
        }
    }
}

/// Main menu screen state
pub struct MainMenuScreen {
    pub menu_state: ListState,
    pub menu_options: Vec<MenuOption>,
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenuScreen {
    pub fn new() -> Self {
        let menu_options = vec![
            MenuOption::new(
                "📓 五十音記憶吐司 Kana Chart",
                "Hiragana and katakana reference tables",
                '1',
                ScreenType::KanaChart,
            ),
            MenuOption::new(
                "🚪 每日一句任意門 Phrase of the Day",
                "Open the anywhere door for a random phrase",
                '2',
                ScreenType::PhraseOfTheDay,
            ),
            MenuOption::new(
                "🍞 單字記憶吐司 Vocabulary",
                "Add words and edit your notebook",
                '3',
                ScreenType::Vocabulary,
            ),
            MenuOption::new(
                "🧠 隨堂小考 Quiz",
                "Flashcards drawn from your notebook",
                '4',
                ScreenType::Quiz,
            ),
        ];

        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Self {
            menu_state,
            menu_options,
        }
    }

    fn draw_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new("🔔 日語百寶袋 Nihongo Pocket")
            .style(Styles::title())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn draw_home(&self, f: &mut Frame, area: Rect, session: &Session) {
        let count = session.vocabulary().len();
        let home = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("📚 目前累積單字: ", Styles::info()),
                Span::styled(format!("{} words", count), Styles::key()),
            ]),
            Line::from(Span::styled(
                "Pick a gadget from the pocket below. 一起努力學習吧！",
                Styles::inactive(),
            )),
        ])
        .block(
            Block::default()
                .title("Welcome")
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );
        f.render_widget(home, area);
    }

    fn draw_menu(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .menu_options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let selected = Some(i) == self.menu_state.selected();
                let style = if selected {
                    Styles::selected()
                } else {
                    Style::default()
                };

                let content = vec![
                    Line::from(vec![
                        Span::styled(format!("[{}] ", option.shortcut), Styles::info()),
                        Span::styled(option.title.clone(), style.add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(Span::styled(
                        format!("     {}", option.description),
                        if selected { style } else { Styles::inactive() },
                    )),
                ];

                ListItem::new(content)
            })
            .collect();

        let menu = List::new(items)
            .block(
                Block::default()
                    .title("百寶袋選單 Gadget Menu")
                    .borders(Borders::ALL)
                    .border_style(Styles::active_border()),
            )
            .highlight_style(Styles::selected());

        f.render_stateful_widget(menu, area, &mut self.menu_state);
    }

    fn draw_instructions(&self, f: &mut Frame, area: Rect) {
        let instructions = vec![
            Line::from(vec![
                Span::styled("Navigation: ", Styles::info()),
                Span::raw("↑/↓ to move, "),
                Span::styled("Enter", Styles::key()),
                Span::raw(" to open"),
            ]),
            Line::from(vec![
                Span::styled("Shortcuts: ", Styles::info()),
                Span::styled("1-4", Styles::key()),
                Span::raw(" for direct access, "),
                Span::styled("F1/?", Styles::key()),
                Span::raw(" for help, "),
                Span::styled("q", Styles::key()),
                Span::raw(" to quit"),
            ]),
        ];

        let instructions_paragraph = Paragraph::new(instructions).block(
            Block::default()
                .title("Instructions")
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );

        f.render_widget(instructions_paragraph, area);
    }
}

impl Navigable for MainMenuScreen {
    fn navigate_up(&mut self) {
        let selected = wrap_previous(self.menu_state.selected(), self.menu_options.len());
        self.menu_state.select(selected);
    }

    fn navigate_down(&mut self) {
        let selected = wrap_next(self.menu_state.selected(), self.menu_options.len());
        self.menu_state.select(selected);
    }

    fn get_selected_index(&self) -> Option<usize> {
        self.menu_state.selected()
    }

    fn set_selected_index(&mut self, index: Option<usize>) {
        self.menu_state.select(index);
    }

    fn get_item_count(&self) -> usize {
        self.menu_options.len()
    }
}

impl Screen for MainMenuScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Home info
                Constraint::Min(0),    // Menu
                Constraint::Length(4), // Instructions
            ])
            .split(area);

        self.draw_title(f, chunks[0]);
        self.draw_home(f, chunks[1], session);
        self.draw_menu(f, chunks[2]);
        self.draw_instructions(f, chunks[3]);
    }

    fn handle_key_event(&mut self, key: KeyEvent, _session: &mut Session) -> Result<ScreenAction> {
        if let Some(action) = CommonKeyHandler::handle_navigation_keys(self, key) {
            return Ok(action);
        }

        let actions: Vec<ScreenAction> = self
            .menu_options
            .iter()
            .map(|option| ScreenAction::NavigateTo(option.screen.clone()))
            .collect();
        if let Some(action) = MenuHandler::handle_menu_selection(&*self, key, &actions) {
            return Ok(action);
        }

        let shortcuts: Vec<(char, ScreenAction)> = self
            .menu_options
            .iter()
            .map(|option| (option.shortcut, ScreenAction::NavigateTo(option.screen.clone())))
            .collect();
        Ok(MenuHandler::handle_menu_shortcuts(key, &shortcuts).unwrap_or(ScreenAction::None))
    }

    fn help_text(&self) -> &'static str {
        "Main Menu:\n\
        ↑/↓ - Navigate menu\n\
        Enter - Open gadget\n\
        1 - Kana Chart\n\
        2 - Phrase of the Day\n\
        3 - Vocabulary\n\
        4 - Quiz"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::VocabularyStore;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_menu_has_four_destinations() {
        let menu = MainMenuScreen::new();
        let screens: Vec<ScreenType> = menu.menu_options.iter().map(|o| o.screen.clone()).collect();
        assert_eq!(
            screens,
            vec![
                ScreenType::KanaChart,
                ScreenType::PhraseOfTheDay,
                ScreenType::Vocabulary,
                ScreenType::Quiz,
            ]
        );
    }

    #[test]
    fn test_menu_enter_and_shortcuts() {
        let mut menu = MainMenuScreen::new();
        let mut session = Session::with_rng(VocabularyStore::new(), StdRng::seed_from_u64(0));

        menu.handle_key_event(press(KeyCode::Up), &mut session).unwrap();
        assert_eq!(
            menu.handle_key_event(press(KeyCode::Enter), &mut session).unwrap(),
            ScreenAction::NavigateTo(ScreenType::Quiz)
        );
        assert_eq!(
            menu.handle_key_event(press(KeyCode::Char('2')), &mut session).unwrap(),
            ScreenAction::NavigateTo(ScreenType::PhraseOfTheDay)
        );
        assert_eq!(
            menu.handle_key_event(press(KeyCode::Char('z')), &mut session).unwrap(),
            ScreenAction::None
        );
    }
}
