//! Script folding for ingredient search.
//!
//! Text is lowercased, katakana is shifted onto hiragana, and a fixed set of
//! kanji compounds common in ingredient lists is replaced by their readings.
//! Both the query and the stored ingredients go through [`normalize`] so a
//! search for `ぶたにく` finds `豚肉` and `ブタニク` alike.

use std::ops::RangeInclusive;

/// ァ (U+30A1) through ヶ (U+30F6).
const KATAKANA: RangeInclusive<char> = '\u{30A1}'..='\u{30F6}';

/// Distance between a katakana code point and its hiragana counterpart.
const KATAKANA_OFFSET: u32 = 0x60;

/// Kanji compounds and their hiragana readings.
///
/// Applied in order; a later entry sees the output of earlier ones.
pub const KANJI_READINGS: [(&str, &str); 10] = [
    ("豚肉", "ぶたにく"),
    ("牛肉", "ぎゅうにく"),
    ("鶏肉", "とりにく"),
    ("大根", "だいこん"),
    ("人参", "にんじん"),
    ("玉ねぎ", "たまねぎ"),
    ("椎茸", "しいたけ"),
    ("白菜", "はくさい"),
    ("醤油", "しょうゆ"),
    ("キャベツ", "きゃべつ"),
];

/// Fold `text` for case- and script-insensitive matching.
#[must_use]
pub fn normalize(text: &str) -> String {
    let folded: String = text.to_lowercase().chars().map(to_hiragana).collect();

    KANJI_READINGS
        .iter()
        .fold(folded, |acc, &(kanji, reading)| {
            if acc.contains(kanji) {
                acc.replace(kanji, reading)
            } else {
                acc
            }
        })
}

fn to_hiragana(ch: char) -> char {
    if KATAKANA.contains(&ch) {
        char::from_u32(u32::from(ch) - KATAKANA_OFFSET).unwrap_or(ch)
    } else {
        ch
    }
}
