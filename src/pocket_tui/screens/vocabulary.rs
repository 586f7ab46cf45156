//! Vocabulary screen: add form on top, editable notebook table below

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::debug;

use crate::errors::VocabularyError;
use crate::pocket_tui::{
    components::{Form, FormField, VocabularyTable},
    handlers::CommonKeyHandler,
    traits::{FormHandler, Screen, ScreenAction},
    ui::Styles,
};
use crate::session::Session;

const WORD_FIELD: usize = 0;
const READING_FIELD: usize = 1;
const MEANING_FIELD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyFocus {
    Form,
    Table,
}

pub struct VocabularyScreen {
    pub form: Form,
    pub table: VocabularyTable,
    pub focus: VocabularyFocus,
}

impl Default for VocabularyScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabularyScreen {
    pub fn new() -> Self {
        Self {
            form: Self::new_form(),
            table: VocabularyTable::new(),
            focus: VocabularyFocus::Form,
        }
    }

    fn new_form() -> Form {
        Form::new(vec![
            FormField::new("日文 Word").with_placeholder("例如: 猫"),
            FormField::new("假名 Reading").with_placeholder("例如: ねこ"),
            FormField::new("中文 Meaning").with_placeholder("例如: 貓"),
        ])
    }

    fn focus_form(&mut self, field: usize) {
        self.focus = VocabularyFocus::Form;
        self.form.set_current_field(field);
        self.form.set_active(true);
    }

    fn focus_table(&mut self) {
        self.focus = VocabularyFocus::Table;
        self.form.set_active(false);
    }

    fn submit(&mut self, session: &mut Session) -> ScreenAction {
        let word = self.form.value(WORD_FIELD).to_string();
        let reading = self.form.value(READING_FIELD).to_string();
        let meaning = self.form.value(MEANING_FIELD).to_string();

        match session.add_word(&word, &reading, &meaning) {
            Ok(entry) => {
                let message = format!("成功儲存單字 Saved word: {}", entry.word);
                self.form.reset();
                self.table.set_row_count(session.vocabulary().len());
                ScreenAction::SetStatus(message)
            }
            Err(e) => {
                let missing: &[usize] = match e {
                    VocabularyError::MissingWord => &[WORD_FIELD],
                    VocabularyError::MissingMeaning => &[MEANING_FIELD],
                    VocabularyError::MissingWordAndMeaning => &[WORD_FIELD, MEANING_FIELD],
                };
                for index in missing {
                    if let Some(field) = self.form.get_field_mut(*index) {
                        field.validation_error = Some("required".to_string());
                    }
                }
                ScreenAction::SetError(e.to_string())
            }
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, session: &mut Session) -> ScreenAction {
        match key.code {
            KeyCode::Esc => ScreenAction::NavigateBack,
            KeyCode::Enter => self.submit(session),
            KeyCode::Tab if self.form.is_last_field() => {
                self.focus_table();
                ScreenAction::None
            }
            KeyCode::BackTab if self.form.is_first_field() => {
                self.focus_table();
                ScreenAction::None
            }
            KeyCode::Up => {
                self.form.previous_field();
                ScreenAction::None
            }
            KeyCode::Down => {
                self.form.next_field();
                ScreenAction::None
            }
            _ => CommonKeyHandler::handle_form_keys(&mut self.form, key).unwrap_or(ScreenAction::None),
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent, session: &mut Session) -> ScreenAction {
        if let Some(action) = CommonKeyHandler::handle_navigation_keys(&mut self.table, key) {
            return action;
        }

        match key.code {
            KeyCode::Esc => ScreenAction::NavigateBack,
            KeyCode::Tab => {
                self.focus_form(WORD_FIELD);
                ScreenAction::None
            }
            KeyCode::BackTab => {
                self.focus_form(MEANING_FIELD);
                ScreenAction::None
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if self.table.begin_edit(session.vocabulary().all()) {
                    ScreenAction::SetStatus("Editing row - Tab: next cell, Enter: save, Esc: cancel".to_string())
                } else {
                    ScreenAction::SetError("No row selected".to_string())
                }
            }
            KeyCode::Char('n') => {
                self.table.begin_new_row();
                ScreenAction::SetStatus("New row - Tab: next cell, Enter: save, Esc: cancel".to_string())
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                let rows = session.vocabulary().all();
                let selected = self.table.state.selected();
                let removed = selected.and_then(|i| rows.get(i)).map(|entry| entry.word.clone());

                match self.table.delete_selected(rows) {
                    Some(edited) => {
                        session.replace_vocabulary(edited);
                        self.table.set_row_count(session.vocabulary().len());
                        ScreenAction::SetStatus(format!(
                            "Deleted row: {}",
                            removed.unwrap_or_default()
                        ))
                    }
                    None => ScreenAction::SetError("No row selected".to_string()),
                }
            }
            _ => ScreenAction::None,
        }
    }

    fn handle_row_edit_key(&mut self, key: KeyEvent, session: &mut Session) -> ScreenAction {
        match key.code {
            KeyCode::Esc => {
                self.table.cancel_edit();
                ScreenAction::SetStatus("Edit cancelled".to_string())
            }
            KeyCode::Enter => match self.table.commit_edit(session.vocabulary().all()) {
                Some(edited) => {
                    let changed = session.replace_vocabulary(edited);
                    self.table.set_row_count(session.vocabulary().len());
                    debug!("Row edit committed (changed: {})", changed);
                    if changed {
                        ScreenAction::SetStatus("Row saved".to_string())
                    } else {
                        ScreenAction::SetStatus("No changes".to_string())
                    }
                }
                None => ScreenAction::SetError("Row no longer exists".to_string()),
            },
            _ => match self.table.editor.as_mut() {
                Some(editor) => {
                    CommonKeyHandler::handle_form_keys(&mut editor.form, key).unwrap_or(ScreenAction::None)
                }
                None => ScreenAction::None,
            },
        }
    }

    fn draw_instructions(&self, f: &mut Frame, area: Rect) {
        let line = if self.table.is_editing() {
            Line::from(vec![
                Span::styled("Editing: ", Styles::warning()),
                Span::styled("Tab", Styles::key()),
                Span::raw(" next cell, "),
                Span::styled("Enter", Styles::key()),
                Span::raw(" save, "),
                Span::styled("Esc", Styles::key()),
                Span::raw(" cancel"),
            ])
        } else if self.focus == VocabularyFocus::Form {
            Line::from(vec![
                Span::styled("在這裡吃下新的單字! ", Styles::info()),
                Span::styled("Enter", Styles::key()),
                Span::raw(" save, "),
                Span::styled("Tab", Styles::key()),
                Span::raw(" next field / table, "),
                Span::styled("Esc", Styles::key()),
                Span::raw(" menu"),
            ])
        } else {
            Line::from(vec![
                Span::styled("Table: ", Styles::info()),
                Span::styled("e", Styles::key()),
                Span::raw(" edit, "),
                Span::styled("n", Styles::key()),
                Span::raw(" new row, "),
                Span::styled("d", Styles::key()),
                Span::raw(" delete, "),
                Span::styled("Tab", Styles::key()),
                Span::raw(" back to form"),
            ])
        };

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .title("🍞 記憶吐司：單字庫")
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );
        f.render_widget(paragraph, area);
    }

    fn draw_form(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for (field, column) in self.form.fields.iter().zip(columns.iter()) {
            field.render(f, *column);
        }
    }
}

impl Screen for VocabularyScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Instructions
                Constraint::Length(3), // Add form
                Constraint::Min(0),    // Notebook
            ])
            .split(area);

        self.draw_instructions(f, chunks[0]);
        self.draw_form(f, chunks[1]);

        self.table.set_row_count(session.vocabulary().len());
        let focused = self.focus == VocabularyFocus::Table;
        self.table.render(f, chunks[2], session.vocabulary().all(), focused);
    }

    fn handle_key_event(&mut self, key: KeyEvent, session: &mut Session) -> Result<ScreenAction> {
        self.table.set_row_count(session.vocabulary().len());

        let action = if self.table.is_editing() {
            self.handle_row_edit_key(key, session)
        } else {
            match self.focus {
                VocabularyFocus::Form => self.handle_form_key(key, session),
                VocabularyFocus::Table => self.handle_table_key(key, session),
            }
        };
        Ok(action)
    }

    fn help_text(&self) -> &'static str {
        "Vocabulary:\n\
        Type in the form fields, Enter - Save word\n\
        Tab / Shift+Tab - Next / previous field (past the last field: table)\n\
        Table ↑/↓ - Select row\n\
        Table e / Enter - Edit row in place\n\
        Table n - Add a new row\n\
        Table d / Delete - Delete row\n\
        Esc - Cancel edit or back to menu"
    }

    fn captures_text_input(&self) -> bool {
        self.table.is_editing() || self.focus == VocabularyFocus::Form
    }

    fn on_exit(&mut self) {
        self.form.reset();
        self.table.cancel_edit();
        self.focus_form(WORD_FIELD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VocabularyEntry;
    use crate::vocabulary::VocabularyStore;
    use crossterm::event::KeyModifiers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut VocabularyScreen, session: &mut Session, text: &str) {
        for c in text.chars() {
            screen.handle_key_event(press(KeyCode::Char(c)), session).unwrap();
        }
    }

    fn empty_session() -> Session {
        Session::with_rng(VocabularyStore::new(), StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_submit_adds_word_and_clears_form() {
        let mut screen = VocabularyScreen::new();
        let mut session = empty_session();

        type_text(&mut screen, &mut session, "猫");
        screen.handle_key_event(press(KeyCode::Tab), &mut session).unwrap();
        type_text(&mut screen, &mut session, "ねこ");
        screen.handle_key_event(press(KeyCode::Tab), &mut session).unwrap();
        type_text(&mut screen, &mut session, "貓");

        let action = screen.handle_key_event(press(KeyCode::Enter), &mut session).unwrap();
        assert_eq!(action, ScreenAction::SetStatus("成功儲存單字 Saved word: 猫".to_string()));
        assert_eq!(session.vocabulary().all(), &[VocabularyEntry::new("猫", "ねこ", "貓")]);
        assert!(screen.form.fields.iter().all(|f| f.is_empty()));
    }

    #[test]
    fn test_submit_missing_meaning_keeps_input() {
        let mut screen = VocabularyScreen::new();
        let mut session = empty_session();

        type_text(&mut screen, &mut session, "猫");
        let action = screen.handle_key_event(press(KeyCode::Enter), &mut session).unwrap();

        assert_eq!(action, ScreenAction::SetError("Meaning is required".to_string()));
        assert!(session.vocabulary().is_empty());
        assert_eq!(screen.form.value(WORD_FIELD), "猫");
        assert!(screen.form.fields[MEANING_FIELD].validation_error.is_some());
    }

    #[test]
    fn test_q_is_typed_into_form() {
        let mut screen = VocabularyScreen::new();
        let mut session = empty_session();
        assert!(screen.captures_text_input());

        type_text(&mut screen, &mut session, "q");
        assert_eq!(screen.form.value(WORD_FIELD), "q");
    }

    #[test]
    fn test_table_edit_delete_and_new_row() {
        let mut screen = VocabularyScreen::new();
        let mut session = Session::with_rng(VocabularyStore::with_starter_words(), StdRng::seed_from_u64(3));

        // move focus from the form to the table
        for _ in 0..3 {
            screen.handle_key_event(press(KeyCode::Tab), &mut session).unwrap();
        }
        assert_eq!(screen.focus, VocabularyFocus::Table);
        assert!(!screen.captures_text_input());

        // edit the first row's meaning
        screen.handle_key_event(press(KeyCode::Char('e')), &mut session).unwrap();
        assert!(screen.captures_text_input());
        screen.handle_key_event(press(KeyCode::BackTab), &mut session).unwrap();
        screen.handle_key_event(press(KeyCode::Backspace), &mut session).unwrap();
        type_text(&mut screen, &mut session, "猫咪");
        let action = screen.handle_key_event(press(KeyCode::Enter), &mut session).unwrap();
        assert_eq!(action, ScreenAction::SetStatus("Row saved".to_string()));
        assert_eq!(session.vocabulary().all()[0].meaning, "猫咪");

        // delete the second row
        screen.handle_key_event(press(KeyCode::Down), &mut session).unwrap();
        screen.handle_key_event(press(KeyCode::Char('d')), &mut session).unwrap();
        assert_eq!(session.vocabulary().len(), 3);
        assert_eq!(session.vocabulary().all()[1].word, "竹蜻蜓");

        // add a partial row
        screen.handle_key_event(press(KeyCode::Char('n')), &mut session).unwrap();
        type_text(&mut screen, &mut session, "山");
        screen.handle_key_event(press(KeyCode::Enter), &mut session).unwrap();
        assert_eq!(session.vocabulary().len(), 4);
        assert_eq!(session.vocabulary().all()[3], VocabularyEntry::new("山", "", ""));
    }

    #[test]
    fn test_unchanged_edit_is_not_pushed() {
        let mut screen = VocabularyScreen::new();
        let mut session = Session::with_rng(VocabularyStore::with_starter_words(), StdRng::seed_from_u64(3));
        screen.focus_table();

        screen.handle_key_event(press(KeyCode::Enter), &mut session).unwrap();
        let action = screen.handle_key_event(press(KeyCode::Enter), &mut session).unwrap();
        assert_eq!(action, ScreenAction::SetStatus("No changes".to_string()));
    }

    #[test]
    fn test_escape_cancels_edit_before_leaving() {
        let mut screen = VocabularyScreen::new();
        let mut session = Session::with_rng(VocabularyStore::with_starter_words(), StdRng::seed_from_u64(3));
        screen.focus_table();

        screen.handle_key_event(press(KeyCode::Char('e')), &mut session).unwrap();
        let action = screen.handle_key_event(press(KeyCode::Esc), &mut session).unwrap();
        assert_eq!(action, ScreenAction::SetStatus("Edit cancelled".to_string()));
        assert!(!screen.table.is_editing());

        let action = screen.handle_key_event(press(KeyCode::Esc), &mut session).unwrap();
        assert_eq!(action, ScreenAction::NavigateBack);
    }

    #[test]
    fn test_on_exit_discards_view_state() {
        let mut screen = VocabularyScreen::new();
        let mut session = empty_session();
        type_text(&mut screen, &mut session, "途中");
        screen.focus_table();
        screen.table.begin_new_row();

        screen.on_exit();
        assert_eq!(screen.form.value(WORD_FIELD), "");
        assert!(!screen.table.is_editing());
        assert_eq!(screen.focus, VocabularyFocus::Form);
    }
}
