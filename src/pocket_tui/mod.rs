//! Nihongo Pocket terminal user interface
//!
//! One gadget per screen: kana chart, phrase of the day, vocabulary notebook
//! and quiz, reached from the main menu.

pub mod app;
pub mod components;
pub mod handlers;
pub mod screens;
pub mod traits;
pub mod ui;

pub use app::App;
pub use traits::{Screen, ScreenAction};
