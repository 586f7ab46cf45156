//! Gojūon reference charts
//!
//! Each chart is a grid of 5 columns (a, i, u, e, o). Positions with no kana
//! (for example yi and ye) hold an empty label and render as blank cells.

use serde::Serialize;

use crate::models::WritingSystem;

pub const COLUMNS: usize = 5;

type KanaRow = [&'static str; COLUMNS];

const HIRAGANA_ROWS: [KanaRow; 11] = [
    ["あ (a)", "い (i)", "う (u)", "え (e)", "お (o)"],
    ["か (ka)", "き (ki)", "く (ku)", "け (ke)", "こ (ko)"],
    ["さ (sa)", "し (shi)", "す (su)", "せ (se)", "そ (so)"],
    ["た (ta)", "ち (chi)", "つ (tsu)", "て (te)", "と (to)"],
    ["な (na)", "に (ni)", "ぬ (nu)", "ね (ne)", "の (no)"],
    ["は (ha)", "ひ (hi)", "ふ (fu)", "へ (he)", "ほ (ho)"],
    ["ま (ma)", "み (mi)", "む (mu)", "め (me)", "も (mo)"],
    ["や (ya)", "", "ゆ (yu)", "", "よ (yo)"],
    ["ら (ra)", "り (ri)", "る (ru)", "れ (re)", "ろ (ro)"],
    ["わ (wa)", "", "", "", "を (wo)"],
    ["ん (n)", "", "", "", ""],
];

const KATAKANA_ROWS: [KanaRow; 11] = [
    ["ア (a)", "イ (i)", "ウ (u)", "エ (e)", "オ (o)"],
    ["カ (ka)", "キ (ki)", "ク (ku)", "ケ (ke)", "コ (ko)"],
    ["サ (sa)", "シ (shi)", "ス (su)", "セ (se)", "ソ (so)"],
    ["タ (ta)", "チ (chi)", "ツ (tsu)", "テ (te)", "ト (to)"],
    ["ナ (na)", "ニ (ni)", "ヌ (nu)", "ネ (ne)", "ノ (no)"],
    ["ハ (ha)", "ヒ (hi)", "フ (fu)", "ヘ (he)", "ホ (ho)"],
    ["マ (ma)", "ミ (mi)", "ム (mu)", "メ (me)", "モ (mo)"],
    ["ヤ (ya)", "", "ユ (yu)", "", "ヨ (yo)"],
    ["ラ (ra)", "リ (ri)", "ル (ru)", "レ (re)", "ロ (ro)"],
    ["ワ (wa)", "", "", "", "ヲ (wo)"],
    ["ン (n)", "", "", "", ""],
];

/// Consonant label for each chart row, used as the row header
pub const ROW_LABELS: [&str; 11] = ["", "k", "s", "t", "n", "h", "m", "y", "r", "w", "n"];

pub const COLUMN_LABELS: [&str; COLUMNS] = ["a", "i", "u", "e", "o"];

/// Immutable kana grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KanaTable {
    system: WritingSystem,
    rows: &'static [KanaRow],
}

impl KanaTable {
    pub fn system(&self) -> WritingSystem {
        self.system
    }

    pub fn rows(&self) -> &'static [KanaRow] {
        self.rows
    }

    /// Label at a grid position. Blank positions return `Some("")`; positions
    /// outside the grid return `None`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&'static str> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn character_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|label| !label.is_empty())
            .count()
    }
}

pub struct KanaChart;

impl KanaChart {
    pub fn chart(system: WritingSystem) -> KanaTable {
        let rows: &'static [KanaRow] = match system {
            WritingSystem::Hiragana => &HIRAGANA_ROWS,
            WritingSystem::Katakana => &KATAKANA_ROWS,
        };
        KanaTable { system, rows }
    }
}
