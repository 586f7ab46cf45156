//! Common event handlers for the pocket TUI
//!
//! Reusable key handling that screens compose instead of each matching the
//! same keys again.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::traits::{CursorMove, FormHandler, Navigable, ScreenAction};

/// Common keyboard event handling utilities
pub struct CommonKeyHandler;

impl CommonKeyHandler {
    /// Handle navigation keys for list-based screens
    pub fn handle_navigation_keys<T: Navigable>(
        navigable: &mut T,
        key: KeyEvent,
    ) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Up => {
                navigable.navigate_up();
                Some(ScreenAction::None)
            }
            KeyCode::Down => {
                navigable.navigate_down();
                Some(ScreenAction::None)
            }
            KeyCode::Home => {
                navigable.navigate_to_first();
                Some(ScreenAction::None)
            }
            KeyCode::End => {
                navigable.navigate_to_last();
                Some(ScreenAction::None)
            }
            _ => None,
        }
    }

    /// Handle text editing and field switching keys for forms
    pub fn handle_form_keys<T: FormHandler>(form: &mut T, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Tab => {
                form.next_field();
                Some(ScreenAction::None)
            }
            KeyCode::BackTab => {
                form.previous_field();
                Some(ScreenAction::None)
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Char(c) => {
                form.handle_char_input(c);
                Some(ScreenAction::None)
            }
            KeyCode::Backspace => {
                form.handle_backspace();
                Some(ScreenAction::None)
            }
            KeyCode::Delete => {
                form.handle_delete();
                Some(ScreenAction::None)
            }
            KeyCode::Left => {
                form.handle_cursor(CursorMove::Left);
                Some(ScreenAction::None)
            }
            KeyCode::Right => {
                form.handle_cursor(CursorMove::Right);
                Some(ScreenAction::None)
            }
            KeyCode::Home => {
                form.handle_cursor(CursorMove::Start);
                Some(ScreenAction::None)
            }
            KeyCode::End => {
                form.handle_cursor(CursorMove::End);
                Some(ScreenAction::None)
            }
            _ => None,
        }
    }
}

/// Specialized handler for menu-style screens
pub struct MenuHandler;

impl MenuHandler {
    /// Handle menu selection with Enter key
    pub fn handle_menu_selection<T: Navigable>(
        navigable: &T,
        key: KeyEvent,
        menu_actions: &[ScreenAction],
    ) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Enter => navigable
                .get_selected_index()
                .and_then(|selected| menu_actions.get(selected).cloned()),
            _ => None,
        }
    }

    /// Handle menu shortcuts (character keys)
    pub fn handle_menu_shortcuts(
        key: KeyEvent,
        shortcuts: &[(char, ScreenAction)],
    ) -> Option<ScreenAction> {
        if let KeyCode::Char(c) = key.code {
            for (shortcut_char, action) in shortcuts {
                if shortcut_char.eq_ignore_ascii_case(&c) {
                    return Some(action.clone());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pocket_tui::app::Screen;

    struct Counter {
        selected: Option<usize>,
        count: usize,
    }

    impl Navigable for Counter {
        fn navigate_up(&mut self) {
            self.selected = crate::pocket_tui::traits::wrap_previous(self.selected, self.count);
        }

        fn navigate_down(&mut self) {
            self.selected = crate::pocket_tui::traits::wrap_next(self.selected, self.count);
        }

        fn get_selected_index(&self) -> Option<usize> {
            self.selected
        }

        fn set_selected_index(&mut self, index: Option<usize>) {
            self.selected = index;
        }

        fn get_item_count(&self) -> usize {
            self.count
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        let mut counter = Counter { selected: Some(0), count: 4 };

        CommonKeyHandler::handle_navigation_keys(&mut counter, press(KeyCode::Up));
        assert_eq!(counter.selected, Some(3));
        CommonKeyHandler::handle_navigation_keys(&mut counter, press(KeyCode::Home));
        assert_eq!(counter.selected, Some(0));
        assert!(CommonKeyHandler::handle_navigation_keys(&mut counter, press(KeyCode::Enter)).is_none());
    }

    #[test]
    fn test_menu_selection_and_shortcuts() {
        let counter = Counter { selected: Some(1), count: 2 };
        let actions = [
            ScreenAction::NavigateTo(Screen::KanaChart),
            ScreenAction::NavigateTo(Screen::Quiz),
        ];

        assert_eq!(
            MenuHandler::handle_menu_selection(&counter, press(KeyCode::Enter), &actions),
            Some(ScreenAction::NavigateTo(Screen::Quiz))
        );

        let shortcuts = [('k', ScreenAction::NavigateTo(Screen::KanaChart))];
        assert_eq!(
            MenuHandler::handle_menu_shortcuts(press(KeyCode::Char('K')), &shortcuts),
            Some(ScreenAction::NavigateTo(Screen::KanaChart))
        );
        assert!(MenuHandler::handle_menu_shortcuts(press(KeyCode::Char('x')), &shortcuts).is_none());
    }
}
