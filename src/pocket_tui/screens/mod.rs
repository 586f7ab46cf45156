//! Screen modules for the pocket TUI

pub mod kana_chart;
pub mod main_menu;
pub mod phrase;
pub mod quiz;
pub mod vocabulary;

// Re-export all screens
pub use kana_chart::KanaChartScreen;
pub use main_menu::MainMenuScreen;
pub use phrase::PhraseScreen;
pub use quiz::QuizScreen;
pub use vocabulary::VocabularyScreen;
