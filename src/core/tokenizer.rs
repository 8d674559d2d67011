// src/core/tokenizer.rs
use crate::core::types::Token;

/// Accented Latin letters of the alphabet. Everything else above ASCII is a
/// delimiter unless the Cyrillic block is enabled.
fn is_accented_latin(c: char) -> bool {
    matches!(c, 'č' | 'Č' | 'ć' | 'Ć' | 'đ' | 'Đ' | 'ž' | 'Ž' | 'š' | 'Š')
}

fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

/// Word characters: ASCII alphanumerics, underscore, the accented Latin
/// letters and, when `include_cyrillic` is set, the Cyrillic block.
pub fn is_word_char(c: char, include_cyrillic: bool) -> bool {
    c.is_ascii_alphanumeric()
        || c == '_'
        || is_accented_latin(c)
        || (include_cyrillic && is_cyrillic(c))
}

/// Splits `text` into alternating word and delimiter runs.
///
/// Concatenating the token texts in order reproduces `text` exactly. Empty
/// input yields no tokens.
pub fn tokenize(text: &str, include_cyrillic: bool) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices();
    let Some((_, first)) = chars.next() else {
        return tokens;
    };

    let mut start = 0;
    let mut in_word = is_word_char(first, include_cyrillic);
    for (idx, c) in chars {
        let word = is_word_char(c, include_cyrillic);
        if word != in_word {
            tokens.push(make_token(&text[start..idx], in_word));
            start = idx;
            in_word = word;
        }
    }
    tokens.push(make_token(&text[start..], in_word));
    tokens
}

fn make_token(text: &str, word: bool) -> Token<'_> {
    if word {
        Token::word(text)
    } else {
        Token::delimiter(text)
    }
}
