// src/core/tables.rs
//! Compiled-in mapping tables and the built-in exception lists.
//!
//! All lookups are case-sensitive. Every function here is a pure `match`
//! over static data, so the tables are shared freely across threads.

use crate::core::types::Mapping;

/// Single-letter Latin to Cyrillic.
#[rustfmt::skip]
pub fn latin_to_cyrillic(c: char) -> Option<Mapping> {
    let m = match c {
        'a' => "а", 'b' => "б", 'c' => "ц", 'd' => "д", 'e' => "е",
        'f' => "ф", 'g' => "г", 'h' => "х", 'i' => "и", 'j' => "ј",
        'k' => "к", 'l' => "л", 'm' => "м", 'n' => "н", 'o' => "о",
        'p' => "п", 'r' => "р", 's' => "с", 't' => "т", 'u' => "у",
        'v' => "в", 'z' => "з",
        'A' => "А", 'B' => "Б", 'C' => "Ц", 'D' => "Д", 'E' => "Е",
        'F' => "Ф", 'G' => "Г", 'H' => "Х", 'I' => "И", 'J' => "Ј",
        'K' => "К", 'L' => "Л", 'M' => "М", 'N' => "Н", 'O' => "О",
        'P' => "П", 'R' => "Р", 'S' => "С", 'T' => "Т", 'U' => "У",
        'V' => "В", 'Z' => "З",
        'č' => "ч", 'ć' => "ћ", 'đ' => "ђ", 'ž' => "ж", 'š' => "ш",
        'Č' => "Ч", 'Ć' => "Ћ", 'Đ' => "Ђ", 'Ž' => "Ж", 'Š' => "Ш",
        // No Cyrillic counterpart.
        'q' | 'w' | 'x' | 'y' | 'Q' | 'W' | 'X' | 'Y' => return Some(Mapping::Drop),
        _ => return None,
    };
    Some(Mapping::To(m))
}

/// Single-letter Cyrillic to Latin. Љ, Њ and Џ expand to two Latin letters.
#[rustfmt::skip]
pub fn cyrillic_to_latin(c: char) -> Option<Mapping> {
    let m = match c {
        'а' => "a", 'б' => "b", 'ц' => "c", 'д' => "d", 'е' => "e",
        'ф' => "f", 'г' => "g", 'х' => "h", 'и' => "i", 'ј' => "j",
        'к' => "k", 'л' => "l", 'м' => "m", 'н' => "n", 'о' => "o",
        'п' => "p", 'р' => "r", 'с' => "s", 'т' => "t", 'у' => "u",
        'в' => "v", 'з' => "z",
        'А' => "A", 'Б' => "B", 'Ц' => "C", 'Д' => "D", 'Е' => "E",
        'Ф' => "F", 'Г' => "G", 'Х' => "H", 'И' => "I", 'Ј' => "J",
        'К' => "K", 'Л' => "L", 'М' => "M", 'Н' => "N", 'О' => "O",
        'П' => "P", 'Р' => "R", 'С' => "S", 'Т' => "T", 'У' => "U",
        'В' => "V", 'З' => "Z",
        'ч' => "č", 'ћ' => "ć", 'ж' => "ž", 'ш' => "š",
        'љ' => "lj", 'њ' => "nj", 'ђ' => "đ", 'џ' => "dž",
        'Ч' => "Č", 'Ћ' => "Ć", 'Ж' => "Ž", 'Ш' => "Š",
        'Љ' => "Lj", 'Њ' => "Nj", 'Ђ' => "Đ", 'Џ' => "Dž",
        _ => return None,
    };
    Some(Mapping::To(m))
}

/// True if `c` can open a Latin digraph.
pub fn begins_digraph(c: char) -> bool {
    matches!(c, 'l' | 'n' | 'd' | 'L' | 'N' | 'D')
}

/// Two-level Latin digraph lookup: `first` then `second`.
pub fn latin_digraph(first: char, second: char) -> Option<&'static str> {
    match (first, second) {
        ('l', 'j') => Some("љ"),
        ('n', 'j') => Some("њ"),
        ('d', 'j') => Some("ђ"),
        ('d', 'z') | ('d', 'ž') => Some("џ"),
        ('L', 'j') | ('L', 'J') => Some("Љ"),
        ('N', 'j') | ('N', 'J') => Some("Њ"),
        ('D', 'j') | ('D', 'J') => Some("Ђ"),
        ('D', 'z') | ('D', 'Z') | ('D', 'ž') | ('D', 'Ž') => Some("Џ"),
        _ => None,
    }
}

/// Whole-word overrides applied when converting to Cyrillic.
/// An empty value leaves the word exactly as written.
pub const LATIN_OVERRIDES: &[(&str, &str)] = &[
    ("plugin", ""),
    ("lat", ""),
    ("close", ""),
    ("jquery", "jQuery"),
    ("microsoft", "Microsoft"),
    ("firefox", "Firefox"),
    ("opera", "Opera"),
    ("safari", "Safari"),
    ("chrome", "Chrome"),
    ("ie", "IE"),
];

/// Whole-word overrides applied when converting to Latin.
pub const CYRILLIC_OVERRIDES: &[(&str, &str)] = &[("ћир", "")];

/// Stems whose letter pairs must not collapse into one Cyrillic letter,
/// usually because a prefix boundary falls between them.
pub const CHAIN_SUPPRESSED_SUBSTRINGS: &[&str] = &[
    "anjon", "adjektiv", "adjunkt", "budzašto", "vanjezič",
    "injekt", "injekc", "konjug", "konjunk", "lindzi", "nadždrel",
    "nadzemn", "nadžet", "nadžive", "nadžup", "podzakon", "predživot",
    "odžal", "podžanr", "podzemn", "odzvon",
];

/// Whole words that never chain.
pub const CHAIN_SUPPRESSED_WORDS: &[&str] = &["njemačku"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_latin_letters_are_dropped() {
        for c in ['q', 'w', 'x', 'y', 'Q', 'W', 'X', 'Y'] {
            assert_eq!(latin_to_cyrillic(c), Some(Mapping::Drop));
        }
    }

    #[test]
    fn unmapped_characters_have_no_entry() {
        assert_eq!(latin_to_cyrillic('7'), None);
        assert_eq!(latin_to_cyrillic('-'), None);
        assert_eq!(cyrillic_to_latin('a'), None);
    }

    #[test]
    fn every_digraph_starts_with_a_digraph_letter() {
        for first in ['l', 'n', 'd', 'L', 'N', 'D', 'a', 'z'] {
            for second in ['j', 'J', 'z', 'Z', 'ž', 'Ž'] {
                if latin_digraph(first, second).is_some() {
                    assert!(begins_digraph(first), "{first}{second}");
                }
            }
        }
    }

    #[test]
    fn lowercase_first_letter_ignores_uppercase_second() {
        assert_eq!(latin_digraph('n', 'J'), None);
        assert_eq!(latin_digraph('N', 'J'), Some("Њ"));
    }

    #[test]
    fn digraph_letters_expand_back_to_latin_pairs() {
        assert_eq!(cyrillic_to_latin('њ'), Some(Mapping::To("nj")));
        assert_eq!(cyrillic_to_latin('Џ'), Some(Mapping::To("Dž")));
    }
}
