//! Editable vocabulary table
//!
//! The table never owns the vocabulary. Edits are applied to a copy of the
//! session's list and handed back as a whole new list, which the screen pushes
//! to the session with `replace_vocabulary`.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use super::form_field::{Form, FormField};
use crate::models::VocabularyEntry;
use crate::pocket_tui::{
    traits::{wrap_next, wrap_previous, Navigable},
    ui::Styles,
};

pub const WORD_COLUMN: &str = "日文 Word";
pub const READING_COLUMN: &str = "假名 Reading";
pub const MEANING_COLUMN: &str = "中文 Meaning";

/// Which row an edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Existing(usize),
    NewRow,
}

/// In-place editor for one row
#[derive(Debug, Clone)]
pub struct RowEditor {
    pub target: EditTarget,
    pub form: Form,
}

impl RowEditor {
    fn new(target: EditTarget, entry: &VocabularyEntry) -> Self {
        Self {
            target,
            form: Form::new(vec![
                FormField::new(WORD_COLUMN).with_value(&entry.word),
                FormField::new(READING_COLUMN).with_value(&entry.reading),
                FormField::new(MEANING_COLUMN).with_value(&entry.meaning),
            ]),
        }
    }

    fn entry(&self) -> VocabularyEntry {
        VocabularyEntry::new(self.form.value(0), self.form.value(1), self.form.value(2))
    }
}

pub struct VocabularyTable {
    pub state: TableState,
    pub editor: Option<RowEditor>,
    row_count: usize,
}

impl Default for VocabularyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabularyTable {
    pub fn new() -> Self {
        Self {
            state: TableState::default(),
            editor: None,
            row_count: 0,
        }
    }

    /// Keep the selection inside the current list after it changed size
    pub fn set_row_count(&mut self, count: usize) {
        self.row_count = count;
        let selected = match (self.state.selected(), count) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), n) => Some(i.min(n - 1)),
        };
        self.state.select(selected);
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn begin_edit(&mut self, rows: &[VocabularyEntry]) -> bool {
        let Some(index) = self.state.selected() else {
            return false;
        };
        let Some(entry) = rows.get(index) else {
            return false;
        };
        self.editor = Some(RowEditor::new(EditTarget::Existing(index), entry));
        true
    }

    pub fn begin_new_row(&mut self) {
        self.editor = Some(RowEditor::new(EditTarget::NewRow, &VocabularyEntry::default()));
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Finish the current edit and return the edited list. Rows are taken
    /// as typed, partial rows included.
    pub fn commit_edit(&mut self, rows: &[VocabularyEntry]) -> Option<Vec<VocabularyEntry>> {
        let editor = self.editor.take()?;
        let mut edited = rows.to_vec();
        match editor.target {
            EditTarget::Existing(index) => {
                let slot = edited.get_mut(index)?;
                *slot = editor.entry();
            }
            EditTarget::NewRow => {
                edited.push(editor.entry());
                self.state.select(Some(edited.len() - 1));
            }
        }
        Some(edited)
    }

    /// The list without the selected row
    pub fn delete_selected(&self, rows: &[VocabularyEntry]) -> Option<Vec<VocabularyEntry>> {
        let index = self.state.selected()?;
        if index >= rows.len() {
            return None;
        }
        let mut edited = rows.to_vec();
        edited.remove(index);
        Some(edited)
    }

    /// Render the table, with the row under edit shown from the editor
    pub fn render(&mut self, f: &mut Frame, area: Rect, rows: &[VocabularyEntry], focused: bool) {
        let header = Row::new(vec![
            Cell::from("#"),
            Cell::from(WORD_COLUMN),
            Cell::from(READING_COLUMN),
            Cell::from(MEANING_COLUMN),
        ])
        .style(Styles::title());

        let editing_index = match self.editor.as_ref().map(|e| e.target) {
            Some(EditTarget::Existing(i)) => Some(i),
            Some(EditTarget::NewRow) => Some(rows.len()),
            None => None,
        };

        let mut table_rows: Vec<Row> = rows
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                if Some(i) == editing_index {
                    self.editor_row(i)
                } else {
                    Row::new(vec![
                        Cell::from((i + 1).to_string()),
                        Cell::from(entry.word.clone()),
                        Cell::from(entry.reading.clone()),
                        Cell::from(entry.meaning.clone()),
                    ])
                }
            })
            .collect();

        if editing_index == Some(rows.len()) {
            table_rows.push(self.editor_row(rows.len()));
        }

        let title = if rows.is_empty() && self.editor.is_none() {
            "你的單字筆記本 Your Notebook (Empty - press n to add a row)".to_string()
        } else {
            format!("你的單字筆記本 Your Notebook ({} words)", rows.len())
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(if focused {
                Styles::active_border()
            } else {
                Styles::inactive_border()
            });

        let widths = [
            Constraint::Length(4),
            Constraint::Percentage(32),
            Constraint::Percentage(32),
            Constraint::Percentage(32),
        ];

        let table = Table::new(table_rows, widths)
            .header(header)
            .block(block)
            .highlight_style(if focused && self.editor.is_none() {
                Styles::selected()
            } else {
                Style::default()
            });

        f.render_stateful_widget(table, area, &mut self.state);
    }

    fn editor_row(&self, index: usize) -> Row<'static> {
        let mut cells = vec![Cell::from(Span::styled(format!("{}*", index + 1), Styles::warning()))];
        if let Some(editor) = &self.editor {
            for (col, field) in editor.form.fields.iter().enumerate() {
                let style = if col == editor.form.current_field {
                    Styles::selected()
                } else {
                    Styles::warning()
                };
                let mut text = field.value.clone();
                if col == editor.form.current_field {
                    text.push('▏');
                }
                cells.push(Cell::from(Line::from(Span::styled(text, style))));
            }
        }
        Row::new(cells)
    }
}

impl Navigable for VocabularyTable {
    fn navigate_up(&mut self) {
        self.state.select(wrap_previous(self.state.selected(), self.row_count));
    }

    fn navigate_down(&mut self) {
        self.state.select(wrap_next(self.state.selected(), self.row_count));
    }

    fn get_selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    fn set_selected_index(&mut self, index: Option<usize>) {
        self.state.select(index);
    }

    fn get_item_count(&self) -> usize {
        self.row_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pocket_tui::traits::FormHandler;

    fn rows() -> Vec<VocabularyEntry> {
        vec![
            VocabularyEntry::new("猫", "ねこ", "貓"),
            VocabularyEntry::new("犬", "いぬ", "狗"),
        ]
    }

    #[test]
    fn test_edit_existing_row() {
        let rows = rows();
        let mut table = VocabularyTable::new();
        table.set_row_count(rows.len());
        table.navigate_down();

        assert!(table.begin_edit(&rows));
        let editor = table.editor.as_mut().unwrap();
        editor.form.set_current_field(2);
        editor.form.handle_backspace();
        editor.form.handle_char_input('犬');

        let edited = table.commit_edit(&rows).unwrap();
        assert_eq!(edited[1], VocabularyEntry::new("犬", "いぬ", "犬"));
        assert_eq!(edited[0], rows[0]);
        assert!(!table.is_editing());
    }

    #[test]
    fn test_new_row_may_be_partial() {
        let rows = rows();
        let mut table = VocabularyTable::new();
        table.set_row_count(rows.len());

        table.begin_new_row();
        table.editor.as_mut().unwrap().form.handle_char_input('山');

        let edited = table.commit_edit(&rows).unwrap();
        assert_eq!(edited.len(), 3);
        assert_eq!(edited[2], VocabularyEntry::new("山", "", ""));
        assert_eq!(table.get_selected_index(), Some(2));
    }

    #[test]
    fn test_cancel_discards_edit() {
        let rows = rows();
        let mut table = VocabularyTable::new();
        table.set_row_count(rows.len());
        table.begin_edit(&rows);
        table.cancel_edit();
        assert!(table.commit_edit(&rows).is_none());
    }

    #[test]
    fn test_delete_selected_row() {
        let rows = rows();
        let mut table = VocabularyTable::new();
        table.set_row_count(rows.len());

        let edited = table.delete_selected(&rows).unwrap();
        assert_eq!(edited, vec![VocabularyEntry::new("犬", "いぬ", "狗")]);

        table.set_row_count(0);
        assert!(table.delete_selected(&[]).is_none());
        assert!(!table.begin_edit(&[]));
    }

    #[test]
    fn test_selection_clamped_to_rows() {
        let mut table = VocabularyTable::new();
        table.set_row_count(5);
        table.navigate_to_last();
        table.set_row_count(2);
        assert_eq!(table.get_selected_index(), Some(1));
    }
}
