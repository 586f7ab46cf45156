//! Fixed phrase catalog behind the "anywhere door"

use rand::Rng;

use crate::models::Phrase;

pub const PHRASES: [Phrase; 8] = [
    Phrase { source: "こんにちは", reading: "Konnichiwa", meaning: "你好" },
    Phrase { source: "ありがとう", reading: "Arigatou", meaning: "謝謝" },
    Phrase { source: "頑張って！", reading: "Ganbatte", meaning: "加油！" },
    Phrase { source: "お腹すいた", reading: "Onaka suita", meaning: "肚子餓了" },
    Phrase { source: "何をしているの？", reading: "Nani o shite iru no?", meaning: "你在做什麼？" },
    Phrase { source: "いただきます", reading: "Itadakimasu", meaning: "我開動了" },
    Phrase { source: "おやすみなさい", reading: "Oyasuminasai", meaning: "晚安" },
    Phrase { source: "また明日", reading: "Mata ashita", meaning: "明天見" },
];

/// Read-only phrase lookup
pub struct PhraseBank;

impl PhraseBank {
    pub fn all() -> &'static [Phrase] {
        &PHRASES
    }

    /// Uniform draw over the catalog. Every call is independent, so the same
    /// phrase can come up twice in a row.
    pub fn random_phrase<R: Rng + ?Sized>(rng: &mut R) -> &'static Phrase {
        &PHRASES[rng.random_range(0..PHRASES.len())]
    }
}
