//! Nihongo Pocket: a terminal gadget pocket for learning Japanese.
//!
//! The domain lives in plain modules ([`vocabulary`], [`phrases`], [`kana`],
//! [`quiz`]) tied together per run by a [`session::Session`]. The terminal
//! interface in [`pocket_tui`] only routes key presses to session operations.

pub mod config;
pub mod errors;
pub mod kana;
pub mod models;
pub mod phrases;
pub mod pocket_tui;
pub mod quiz;
pub mod session;
pub mod vocabulary;
