//! Unicode digit tables used by the polynumber notation and the [`Rendering`] selector.
use strum_macros::{Display, EnumIter};

use crate::boxes::box_engine::Mbox;

/// Greek alpha, the polynumber variable.
pub const ALPHA: char = '\u{03B1}';

/// Circled minus used between the two sides of a virtual box.
pub const CIRCLED_MINUS: char = '\u{2296}';

const SUPERSCRIPT_MINUS: char = '\u{207B}';

const SUBSCRIPTS: [char; 10] = [
    '\u{2080}', '\u{2081}', '\u{2082}', '\u{2083}', '\u{2084}', '\u{2085}', '\u{2086}', '\u{2087}',
    '\u{2088}', '\u{2089}',
];

const SUPERSCRIPTS: [char; 10] = [
    '\u{2070}', '\u{00B9}', '\u{00B2}', '\u{00B3}', '\u{2074}', '\u{2075}', '\u{2076}', '\u{2077}',
    '\u{2078}', '\u{2079}',
];

fn map_digits(n: usize, table: &[char; 10]) -> String {
    n.to_string()
        .bytes()
        .map(|d| table[usize::from(d - b'0')])
        .collect()
}

/// Subscript glyphs for `n`, most significant digit first: `11` -> `₁₁`.
pub fn subscript(n: usize) -> String {
    map_digits(n, &SUBSCRIPTS)
}

/// Superscript glyphs for `n`; negative numbers get a leading superscript minus.
pub fn superscript(n: i64) -> String {
    let digits = map_digits(n.unsigned_abs() as usize, &SUPERSCRIPTS);
    if n < 0 {
        format!("{}{}", SUPERSCRIPT_MINUS, digits)
    } else {
        digits
    }
}

/// The three textual forms every box can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Rendering {
    /// nested `[...]`, the form accepted back by the parser
    Bracket,
    /// run-length collapsed decimal/bracket hybrid
    Integer,
    /// `α` notation with sub- and superscripts
    PolyNumber,
}

impl Rendering {
    pub fn render(&self, b: &Mbox) -> String {
        match self {
            Rendering::Bracket => b.to_string(),
            Rendering::Integer => b.to_integer_string(),
            Rendering::PolyNumber => b.as_poly_number(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_subscript_digits() {
        assert_eq!(subscript(0), "₀");
        assert_eq!(subscript(11), "₁₁");
        assert_eq!(subscript(1234567890), "₁₂₃₄₅₆₇₈₉₀");
    }

    #[test]
    fn test_superscript_digits() {
        assert_eq!(superscript(2), "²");
        assert_eq!(superscript(10), "¹⁰");
        assert_eq!(superscript(456789), "⁴⁵⁶⁷⁸⁹");
        assert_eq!(superscript(-3), "⁻³");
    }

    #[test]
    fn test_all_renderings_of_empty() {
        let empty = Mbox::of(0);
        let forms: Vec<String> = Rendering::iter().map(|r| r.render(&empty)).collect();
        assert_eq!(forms, vec!["[ ]", "0", "0"]);
    }
}
