// src/core/converter.rs
use crate::core::tables::{begins_digraph, cyrillic_to_latin, latin_digraph, latin_to_cyrillic};
use crate::core::types::Mapping;

fn push_mapped(out: &mut String, c: char, mapping: Option<Mapping>) {
    match mapping {
        Some(Mapping::To(s)) => out.push_str(s),
        Some(Mapping::Drop) => {}
        None => out.push(c),
    }
}

/// Character-level Latin to Cyrillic for one token.
///
/// With `chaining` set, a digraph-opening letter followed by a letter that
/// completes the pair is emitted as one Cyrillic letter and both are
/// consumed. Otherwise letters map one by one.
pub fn latin_to_cyrillic_into(token: &str, chaining: bool, out: &mut String) {
    let mut chars = token.chars().peekable();

    while let Some(c) = chars.next() {
        if chaining && begins_digraph(c) {
            if let Some(joined) = chars.peek().and_then(|&next| latin_digraph(c, next)) {
                out.push_str(joined);
                chars.next();
                continue;
            }
        }
        push_mapped(out, c, latin_to_cyrillic(c));
    }
}

/// Character-level Cyrillic to Latin for one token. The table already
/// holds the two-letter Latin values, so no lookahead is needed.
pub fn cyrillic_to_latin_into(token: &str, out: &mut String) {
    for c in token.chars() {
        push_mapped(out, c, cyrillic_to_latin(c));
    }
}

/// True if any letter of `token` could open a digraph.
pub fn may_chain(token: &str) -> bool {
    token.chars().any(begins_digraph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_cyr(s: &str, chaining: bool) -> String {
        let mut out = String::new();
        latin_to_cyrillic_into(s, chaining, &mut out);
        out
    }

    fn to_lat(s: &str) -> String {
        let mut out = String::new();
        cyrillic_to_latin_into(s, &mut out);
        out
    }

    #[test]
    fn digraphs_collapse_when_chaining() {
        assert_eq!(to_cyr("nj", true), "њ");
        assert_eq!(to_cyr("ljubav", true), "љубав");
        assert_eq!(to_cyr("džep", true), "џеп");
        assert_eq!(to_cyr("Đak", true), "Ђак");
        assert_eq!(to_cyr("DŽ", true), "Џ");
    }

    #[test]
    fn digraphs_split_without_chaining() {
        assert_eq!(to_cyr("nj", false), "нј");
        assert_eq!(to_cyr("injekcija", false), "инјекција");
    }

    #[test]
    fn chaining_consumes_pairs_left_to_right() {
        // "n" + "j" pairs first, the trailing "j" maps alone.
        assert_eq!(to_cyr("njj", true), "њј");
        // "d" cannot pair with "d"; the second "d" pairs with "j".
        assert_eq!(to_cyr("ddj", true), "дђ");
    }

    #[test]
    fn foreign_letters_are_dropped() {
        assert_eq!(to_cyr("wax", true), "а");
        assert_eq!(to_cyr("Yes", true), "ес");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(to_cyr("a1-b", true), "а1-б");
        assert_eq!(to_lat("б2!"), "b2!");
        assert_eq!(to_lat("abc"), "abc");
    }

    #[test]
    fn cyrillic_expands_to_two_letters() {
        assert_eq!(to_lat("Љубљана"), "Ljubljana");
        assert_eq!(to_lat("Џак"), "Džak");
        assert_eq!(to_lat("коњ"), "konj");
    }

    #[test]
    fn may_chain_looks_for_opening_letters() {
        assert!(may_chain("konj"));
        assert!(!may_chain("kuća"));
    }
}
