//! Kana chart viewer

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Cell, Row, Table, Tabs},
    Frame,
};

use crate::kana::{KanaTable, COLUMN_LABELS, ROW_LABELS};
use crate::models::WritingSystem;
use crate::pocket_tui::{
    traits::{Screen, ScreenAction},
    ui::Styles,
};
use crate::session::Session;

pub struct KanaChartScreen {
    pub system: WritingSystem,
}

impl Default for KanaChartScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl KanaChartScreen {
    pub fn new() -> Self {
        Self {
            system: WritingSystem::Hiragana,
        }
    }

    fn toggle(&mut self) {
        self.system = match self.system {
            WritingSystem::Hiragana => WritingSystem::Katakana,
            WritingSystem::Katakana => WritingSystem::Hiragana,
        };
    }

    fn draw_tabs(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<&str> = WritingSystem::all().iter().map(|s| s.title()).collect();
        let selected = WritingSystem::all()
            .iter()
            .position(|s| *s == self.system)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .block(
                Block::default()
                    .title("📓 五十音圖表 Kana Chart")
                    .borders(Borders::ALL)
                    .border_style(Styles::active_border()),
            )
            .style(Styles::inactive())
            .highlight_style(Styles::selected());

        f.render_widget(tabs, area);
    }

    fn draw_table(&self, f: &mut Frame, area: Rect, table: &KanaTable) {
        let mut header_cells = vec![Cell::from("")];
        header_cells.extend(COLUMN_LABELS.iter().map(|label| Cell::from(*label)));
        let header = Row::new(header_cells).style(Styles::title());

        let rows: Vec<Row> = table
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut cells = vec![Cell::from(ROW_LABELS.get(i).copied().unwrap_or("")).style(Styles::info())];
                // blank positions stay blank cells
                cells.extend(row.iter().map(|label| Cell::from(*label)));
                Row::new(cells)
            })
            .collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
        ];

        let chart = Table::new(rows, widths).header(header).block(
            Block::default()
                .title(format!("{} - {} characters", table.system(), table.character_count()))
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );

        f.render_widget(chart, area);
    }
}

impl Screen for KanaChartScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_tabs(f, chunks[0]);
        let table = session.chart(self.system);
        self.draw_table(f, chunks[1], &table);
    }

    fn handle_key_event(&mut self, key: KeyEvent, _session: &mut Session) -> Result<ScreenAction> {
        let action = match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.toggle();
                ScreenAction::None
            }
            KeyCode::Char('h') => {
                self.system = WritingSystem::Hiragana;
                ScreenAction::None
            }
            KeyCode::Char('k') => {
                self.system = WritingSystem::Katakana;
                ScreenAction::None
            }
            KeyCode::Esc => ScreenAction::NavigateBack,
            _ => ScreenAction::None,
        };
        Ok(action)
    }

    fn help_text(&self) -> &'static str {
        "Kana Chart:\n\
        ←/→ or Tab - Switch hiragana/katakana\n\
        h - Hiragana\n\
        k - Katakana\n\
        Esc - Back to menu"
    }

    fn on_exit(&mut self) {
        self.system = WritingSystem::Hiragana;
    }
}
