//! Main TUI application state and logic

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::{debug, info};

use super::screens::*;
use super::traits::{Screen as ScreenTrait, ScreenAction};
use super::ui::{centered_rect, Styles};
use crate::session::Session;

/// Application screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    KanaChart,
    PhraseOfTheDay,
    Vocabulary,
    Quiz,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::MainMenu => "Main Menu",
            Screen::KanaChart => "Kana Chart",
            Screen::PhraseOfTheDay => "Phrase of the Day",
            Screen::Vocabulary => "Vocabulary",
            Screen::Quiz => "Quiz",
        }
    }
}

/// Main TUI application state
pub struct App {
    /// Current active screen
    pub current_screen: Screen,
    /// Vocabulary, quiz and random source for this run
    pub session: Session,

    // Screen states
    pub main_menu: MainMenuScreen,
    pub kana_chart: KanaChartScreen,
    pub phrase: PhraseScreen,
    pub vocabulary: VocabularyScreen,
    pub quiz: QuizScreen,

    // Global application state
    pub should_quit: bool,
    pub show_help_popup: bool,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
}

impl App {
    /// Create a new TUI application around a session
    pub fn new(session: Session) -> Self {
        Self {
            current_screen: Screen::MainMenu,
            session,

            main_menu: MainMenuScreen::new(),
            kana_chart: KanaChartScreen::new(),
            phrase: PhraseScreen::new(),
            vocabulary: VocabularyScreen::new(),
            quiz: QuizScreen::new(),

            should_quit: false,
            show_help_popup: false,
            status_message: None,
            error_message: None,
        }
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = crossterm::event::read()? {
                // Ignore release/repeat events reported on some platforms
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key)?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn active_screen(&self) -> &dyn ScreenTrait {
        match self.current_screen {
            Screen::MainMenu => &self.main_menu,
            Screen::KanaChart => &self.kana_chart,
            Screen::PhraseOfTheDay => &self.phrase,
            Screen::Vocabulary => &self.vocabulary,
            Screen::Quiz => &self.quiz,
        }
    }

    /// Handle keyboard input events
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        // Global shortcuts. Plain characters belong to the focused text field.
        let typing = self.active_screen().captures_text_input();
        match key.code {
            KeyCode::F(1) => {
                self.show_help_popup = !self.show_help_popup;
                return Ok(());
            }
            KeyCode::Char('?') if !typing => {
                self.show_help_popup = !self.show_help_popup;
                return Ok(());
            }
            KeyCode::Esc if self.show_help_popup => {
                self.show_help_popup = false;
                return Ok(());
            }
            KeyCode::Char('q') if !typing => {
                self.should_quit = true;
                return Ok(());
            }
            _ => {}
        }

        if self.show_help_popup {
            return Ok(());
        }

        let action = match self.current_screen {
            Screen::MainMenu => self.main_menu.handle_key_event(key, &mut self.session)?,
            Screen::KanaChart => self.kana_chart.handle_key_event(key, &mut self.session)?,
            Screen::PhraseOfTheDay => self.phrase.handle_key_event(key, &mut self.session)?,
            Screen::Vocabulary => self.vocabulary.handle_key_event(key, &mut self.session)?,
            Screen::Quiz => self.quiz.handle_key_event(key, &mut self.session)?,
        };
        self.apply_action(action);

        Ok(())
    }

    fn apply_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::NavigateTo(screen) => self.navigate_to_screen(screen),
            ScreenAction::NavigateBack => self.navigate_to_screen(Screen::MainMenu),
            ScreenAction::SetStatus(message) => self.set_status(message),
            ScreenAction::SetError(message) => self.set_error(message),
            ScreenAction::ClearMessages => self.clear_messages(),
            ScreenAction::None => {}
        }
    }

    /// Navigate to a specific screen. The screen being left drops its
    /// view-local state.
    pub fn navigate_to_screen(&mut self, screen: Screen) {
        if screen == self.current_screen {
            return;
        }
        info!("Navigating from {} to {}", self.current_screen.title(), screen.title());

        match self.current_screen {
            Screen::MainMenu => self.main_menu.on_exit(),
            Screen::KanaChart => self.kana_chart.on_exit(),
            Screen::PhraseOfTheDay => self.phrase.on_exit(),
            Screen::Vocabulary => self.vocabulary.on_exit(),
            Screen::Quiz => self.quiz.on_exit(),
        }

        self.current_screen = screen;
        self.clear_messages();

        match self.current_screen {
            Screen::MainMenu => self.main_menu.on_enter(&mut self.session),
            Screen::KanaChart => self.kana_chart.on_enter(&mut self.session),
            Screen::PhraseOfTheDay => self.phrase.on_enter(&mut self.session),
            Screen::Vocabulary => self.vocabulary.on_enter(&mut self.session),
            Screen::Quiz => self.quiz.on_enter(&mut self.session),
        }
    }

    /// Draw the UI
    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.size();

        // Main layout: status bar at bottom, content area above
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        match self.current_screen {
            Screen::MainMenu => self.main_menu.draw(f, chunks[0], &self.session),
            Screen::KanaChart => self.kana_chart.draw(f, chunks[0], &self.session),
            Screen::PhraseOfTheDay => self.phrase.draw(f, chunks[0], &self.session),
            Screen::Vocabulary => self.vocabulary.draw(f, chunks[0], &self.session),
            Screen::Quiz => self.quiz.draw(f, chunks[0], &self.session),
        }

        self.draw_status_bar(f, chunks[1]);

        if self.show_help_popup {
            self.draw_help_popup(f, size);
        }
    }

    /// Draw status bar with current screen info and shortcuts
    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        let (status_text, style) = if let Some(ref err) = self.error_message {
            (format!("Error: {}", err), Styles::error())
        } else if let Some(ref msg) = self.status_message {
            (format!("Status: {}", msg), Styles::success())
        } else {
            (
                format!(
                    "Nihongo Pocket - {} | {} words | ESC: Back | Q: Quit | F1/?: Help",
                    self.current_screen.title(),
                    self.session.vocabulary().len()
                ),
                Styles::inactive(),
            )
        };

        let status_bar = Paragraph::new(status_text)
            .style(style)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(status_bar, area);
    }

    /// Draw help popup with context-sensitive shortcuts
    fn draw_help_popup(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(80, 70, area);

        f.render_widget(Clear, popup_area);

        let help_popup = Paragraph::new(self.get_context_help())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title("Help - Context Shortcuts")
                    .borders(Borders::ALL)
                    .border_style(Styles::active_border()),
            );

        f.render_widget(help_popup, popup_area);
    }

    /// Get context-sensitive help content
    fn get_context_help(&self) -> String {
        let global_help = "Global Shortcuts:\n\
            ESC - Go back\n\
            q - Quit (outside text fields)\n\
            Ctrl+C - Quit from anywhere\n\
            F1 / ? - Toggle this help\n\n";

        format!("{}{}", global_help, self.active_screen().help_text())
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        debug!("Status: {}", message);
        self.status_message = Some(message);
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, message: String) {
        debug!("Error shown: {}", message);
        self.error_message = Some(message);
        self.status_message = None;
    }

    /// Clear status and error messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuizPhase;
    use crate::vocabulary::VocabularyStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(store: VocabularyStore) -> App {
        App::new(Session::with_rng(store, StdRng::seed_from_u64(42)))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(press(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_menu_routing() {
        let mut app = app_with(VocabularyStore::new());
        assert_eq!(app.current_screen, Screen::MainMenu);

        for (key, screen) in [
            ('1', Screen::KanaChart),
            ('2', Screen::PhraseOfTheDay),
            ('3', Screen::Vocabulary),
            ('4', Screen::Quiz),
        ] {
            app.handle_key_event(press(KeyCode::Char(key))).unwrap();
            assert_eq!(app.current_screen, screen);
            app.handle_key_event(press(KeyCode::Esc)).unwrap();
            assert_eq!(app.current_screen, Screen::MainMenu);
        }
    }

    #[test]
    fn test_add_word_then_quiz() {
        let mut app = app_with(VocabularyStore::new());

        app.handle_key_event(press(KeyCode::Char('4'))).unwrap();
        assert!(app.session.quiz().is_none());
        app.handle_key_event(press(KeyCode::Esc)).unwrap();

        app.handle_key_event(press(KeyCode::Char('3'))).unwrap();
        type_text(&mut app, "猫");
        app.handle_key_event(press(KeyCode::Tab)).unwrap();
        type_text(&mut app, "ねこ");
        app.handle_key_event(press(KeyCode::Tab)).unwrap();
        type_text(&mut app, "貓");
        app.handle_key_event(press(KeyCode::Enter)).unwrap();

        assert_eq!(app.session.vocabulary().len(), 1);
        assert_eq!(
            app.status_message.as_deref(),
            Some("成功儲存單字 Saved word: 猫")
        );

        app.handle_key_event(press(KeyCode::Esc)).unwrap();
        app.handle_key_event(press(KeyCode::Char('4'))).unwrap();
        let state = app.session.quiz().unwrap();
        assert_eq!(state.entry().word, "猫");
        assert_eq!(state.phase(), QuizPhase::Hidden);

        app.handle_key_event(press(KeyCode::Enter)).unwrap();
        let state = app.session.quiz().unwrap();
        assert_eq!(state.phase(), QuizPhase::Revealed);
        assert_eq!(state.entry().reading, "ねこ");
    }

    #[test]
    fn test_rejected_word_shows_error() {
        let mut app = app_with(VocabularyStore::new());
        app.handle_key_event(press(KeyCode::Char('3'))).unwrap();
        app.handle_key_event(press(KeyCode::Enter)).unwrap();

        assert!(app.session.vocabulary().is_empty());
        assert_eq!(
            app.error_message.as_deref(),
            Some("Word and meaning are required")
        );
    }

    #[test]
    fn test_quiz_survives_navigation() {
        let mut app = app_with(VocabularyStore::with_starter_words());

        app.handle_key_event(press(KeyCode::Char('4'))).unwrap();
        app.handle_key_event(press(KeyCode::Char(' '))).unwrap();
        let before = app.session.quiz().cloned().unwrap();
        assert!(before.is_revealed());

        app.handle_key_event(press(KeyCode::Esc)).unwrap();
        app.handle_key_event(press(KeyCode::Char('1'))).unwrap();
        app.handle_key_event(press(KeyCode::Esc)).unwrap();
        app.handle_key_event(press(KeyCode::Char('4'))).unwrap();

        assert_eq!(app.session.quiz().cloned(), Some(before));
    }

    #[test]
    fn test_phrase_is_forgotten_on_navigation() {
        let mut app = app_with(VocabularyStore::new());

        app.handle_key_event(press(KeyCode::Char('2'))).unwrap();
        app.handle_key_event(press(KeyCode::Enter)).unwrap();
        assert!(app.phrase.current.is_some());

        app.handle_key_event(press(KeyCode::Esc)).unwrap();
        app.handle_key_event(press(KeyCode::Char('2'))).unwrap();
        assert!(app.phrase.current.is_none());
    }

    #[test]
    fn test_q_types_into_form_but_quits_elsewhere() {
        let mut app = app_with(VocabularyStore::new());

        app.handle_key_event(press(KeyCode::Char('3'))).unwrap();
        type_text(&mut app, "q?");
        assert!(!app.should_quit);
        assert!(!app.show_help_popup);
        assert_eq!(app.vocabulary.form.value(0), "q?");

        app.handle_key_event(press(KeyCode::Esc)).unwrap();
        assert_eq!(app.vocabulary.form.value(0), "");
        app.handle_key_event(press(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_while_typing() {
        let mut app = app_with(VocabularyStore::new());
        app.handle_key_event(press(KeyCode::Char('3'))).unwrap();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
        assert_eq!(app.vocabulary.form.value(0), "");
    }

    #[test]
    fn test_help_popup_blocks_screen_keys() {
        let mut app = app_with(VocabularyStore::new());

        app.handle_key_event(press(KeyCode::Char('?'))).unwrap();
        assert!(app.show_help_popup);
        app.handle_key_event(press(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.current_screen, Screen::MainMenu);

        app.handle_key_event(press(KeyCode::Esc)).unwrap();
        assert!(!app.show_help_popup);
        assert_eq!(app.current_screen, Screen::MainMenu);
    }

    #[test]
    fn test_every_screen_draws() {
        let mut app = app_with(VocabularyStore::with_starter_words());
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();

        for screen in [
            Screen::MainMenu,
            Screen::KanaChart,
            Screen::PhraseOfTheDay,
            Screen::Vocabulary,
            Screen::Quiz,
        ] {
            app.navigate_to_screen(screen.clone());
            terminal.draw(|f| app.draw(f)).unwrap();

            let text: String = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|cell| cell.symbol())
                .collect();
            assert!(text.contains(screen.title()), "status bar names {:?}", screen);
        }

        app.show_help_popup = true;
        terminal.draw(|f| app.draw(f)).unwrap();
    }
}
