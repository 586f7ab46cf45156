//! Core traits for the pocket TUI
//!
//! Screens receive the [`Session`] by reference and report what the shell
//! should do next through a [`ScreenAction`]. Screens never navigate on their
//! own.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::pocket_tui::app::Screen as ScreenType;
use crate::session::Session;

/// Actions that can be returned from screen event handling
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// Navigate to a different screen
    NavigateTo(ScreenType),
    /// Go back to the menu
    NavigateBack,
    /// Set status message
    SetStatus(String),
    /// Set error message
    SetError(String),
    /// Clear messages
    ClearMessages,
    /// No action taken
    None,
}

/// Core trait for all TUI screens
pub trait Screen {
    /// Draw the screen content
    fn draw(&mut self, f: &mut Frame, area: Rect, session: &Session);

    /// Handle keyboard input and return the action for the shell
    fn handle_key_event(&mut self, key: KeyEvent, session: &mut Session) -> Result<ScreenAction>;

    /// Context shortcuts shown in the help popup
    fn help_text(&self) -> &'static str;

    /// Whether plain character keys are typed into a field right now.
    /// While true, `q` and `?` are passed to the screen instead of the shell.
    fn captures_text_input(&self) -> bool {
        false
    }

    /// Called when screen becomes active
    fn on_enter(&mut self, _session: &mut Session) {}

    /// Called when screen becomes inactive. View-local state is dropped here.
    fn on_exit(&mut self) {}
}

/// Trait for screens with navigable lists
pub trait Navigable {
    /// Move selection up
    fn navigate_up(&mut self);

    /// Move selection down
    fn navigate_down(&mut self);

    /// Get currently selected index
    fn get_selected_index(&self) -> Option<usize>;

    /// Set selected index
    fn set_selected_index(&mut self, index: Option<usize>);

    /// Get total number of items
    fn get_item_count(&self) -> usize;

    /// Navigate to first item
    fn navigate_to_first(&mut self) {
        if self.get_item_count() > 0 {
            self.set_selected_index(Some(0));
        }
    }

    /// Navigate to last item
    fn navigate_to_last(&mut self) {
        let count = self.get_item_count();
        if count > 0 {
            self.set_selected_index(Some(count - 1));
        }
    }
}

/// Wrapping up/down selection shared by list-like components
pub fn wrap_previous(selected: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match selected {
        Some(0) | None => count - 1,
        Some(i) => (i - 1).min(count - 1),
    })
}

pub fn wrap_next(selected: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match selected {
        Some(i) => (i + 1) % count,
        None => 0,
    })
}

/// Trait for form handling
pub trait FormHandler {
    /// Get current field index
    fn get_current_field(&self) -> usize;

    /// Set current field
    fn set_current_field(&mut self, field: usize);

    /// Get total number of fields
    fn get_field_count(&self) -> usize;

    /// Move to next field
    fn next_field(&mut self) {
        let current = self.get_current_field();
        let total = self.get_field_count();
        self.set_current_field((current + 1) % total);
    }

    /// Move to previous field
    fn previous_field(&mut self) {
        let current = self.get_current_field();
        let total = self.get_field_count();
        self.set_current_field(if current == 0 { total - 1 } else { current - 1 });
    }

    /// Handle character input for current field
    fn handle_char_input(&mut self, c: char);

    /// Handle backspace for current field
    fn handle_backspace(&mut self);

    /// Handle delete for current field
    fn handle_delete(&mut self);

    /// Move the cursor of the current field
    fn handle_cursor(&mut self, movement: CursorMove);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Start,
    End,
}
