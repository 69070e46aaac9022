//! Bracket notation reader.
//!
//! ```text
//!   box      := '[' element* ']'
//!   element  := box | integer | ignored
//!   integer  := '-'? digit*          (at least one character)
//!   ignored  := anything but '[', ']', '-' and digits
//! ```
//! An integer `n` stands for the single child `Mbox::of(n)`, with `|n|` at most
//! [`MAX_COUNT`]; whitespace and every other
//! character (e.g. decorative annotations such as `2ᵃ`) only separates elements. Text in
//! front of the first `[` and after its matching `]` is ignored.
//!
//! # Example
//! ```
//! use box_arithmetic::boxes::parse_box::parse_box;
//! let p = parse_box("p = [0 1 1 2]").unwrap();
//! assert_eq!(p.as_poly_number(), "1+2α₀+α₀²");
//! ```
use std::str::FromStr;

use log::debug;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit0},
    combinator::{cut, map, map_opt, opt, recognize, value, verify},
    multi::many0,
    sequence::{pair, preceded, terminated},
};

use crate::boxes::box_engine::{MAX_COUNT, Mbox};
use crate::boxes::box_errors::BoxError;

#[derive(Debug, Clone)]
enum Element {
    Nested(Mbox),
    Integer(i64),
    Ignored,
}

fn is_ignored(c: char) -> bool {
    !matches!(c, '[' | ']' | '-') && !c.is_ascii_digit()
}

/// A lone `-` reads as zero. Literals beyond [`MAX_COUNT`] in magnitude are rejected.
fn literal_value(literal: &str) -> Option<i64> {
    let n = match literal {
        "-" => 0,
        _ => literal.parse::<i64>().ok()?,
    };
    (n.unsigned_abs() <= MAX_COUNT as u64).then_some(n)
}

fn integer_literal(input: &str) -> IResult<&str, i64> {
    map_opt(
        verify(recognize(pair(opt(char('-')), digit0)), |s: &str| {
            !s.is_empty()
        }),
        literal_value,
    )
    .parse(input)
}

fn element(input: &str) -> IResult<&str, Element> {
    alt((
        map(box_literal, Element::Nested),
        map(integer_literal, Element::Integer),
        value(Element::Ignored, take_while1(is_ignored)),
    ))
    .parse(input)
}

/// Once a `[` has been read the literal must be closed; `cut` keeps the failure
/// position of the innermost problem instead of backtracking.
fn box_literal(input: &str) -> IResult<&str, Mbox> {
    let (input, elements) =
        preceded(char('['), cut(terminated(many0(element), char(']')))).parse(input)?;
    let children = elements
        .into_iter()
        .filter_map(|element| match element {
            Element::Nested(b) => Some(b),
            Element::Integer(n) => Some(Mbox::of(n)),
            Element::Ignored => None,
        })
        .collect();
    Ok((input, Mbox::from_boxes(children)))
}

fn locate_error(input: &str, remaining: &str) -> BoxError {
    let position = input.len() - remaining.len();
    if remaining.is_empty() {
        return BoxError::UnclosedBracket { position };
    }
    let literal: String = remaining
        .chars()
        .take_while(|c| *c == '-' || c.is_ascii_digit())
        .collect();
    if literal.is_empty() {
        BoxError::UnclosedBracket { position }
    } else {
        BoxError::InvalidLiteral { position, literal }
    }
}

/// Parse the first bracket literal found in `input`.
pub fn parse_box(input: &str) -> Result<Mbox, BoxError> {
    let Some(start) = input.find('[') else {
        debug!("no opening bracket in {:?}", input);
        return Err(BoxError::NoOpeningBracket {
            input: input.to_string(),
        });
    };
    match box_literal(&input[start..]) {
        Ok((_, parsed)) => {
            debug!("parsed {:?} into {}", input, parsed);
            Ok(parsed)
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let err = locate_error(input, e.input);
            debug!("failed to parse {:?}: {}", input, err);
            Err(err)
        }
        Err(nom::Err::Incomplete(_)) => Err(BoxError::UnclosedBracket {
            position: input.len(),
        }),
    }
}

impl Mbox {
    /// Reads a box from bracket notation, see [`parse_box`].
    pub fn parse(input: &str) -> Result<Mbox, BoxError> {
        parse_box(input)
    }
}

impl FromStr for Mbox {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_box(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_box("[]").unwrap(), Mbox::of(0));
        assert_eq!(parse_box("[  ]").unwrap(), Mbox::of(0));
        assert_eq!(parse_box("  [ ] ").unwrap(), Mbox::of(0));
    }

    #[test]
    fn test_parse_single() {
        assert_eq!(parse_box("[2]").unwrap(), Mbox::from_boxes(vec![Mbox::of(2)]));
    }

    #[test]
    fn test_parse_int_list() {
        let p = Mbox::from_boxes(vec![Mbox::of(2), Mbox::of(3), Mbox::of(-5)]);
        assert_eq!(parse_box("[2 3 -5]").unwrap(), p);
    }

    #[test]
    fn test_parse_nested() {
        let p = Mbox::from_boxes(vec![
            Mbox::of(2),
            Mbox::from_boxes(vec![Mbox::of(3), Mbox::from_boxes(vec![Mbox::of(3)])]),
        ]);
        assert_eq!(parse_box("[2 [3 [3]]]").unwrap(), p);
    }

    #[test]
    fn test_adjacent_brackets() {
        let p = parse_box("[[1 1][1 1]]").unwrap();
        assert_eq!(p.int_size(), 2);
        assert_eq!(p.to_integer_string(), "[[1 1] [1 1]]");
    }

    #[test]
    fn test_leading_and_trailing_text() {
        let p = parse_box("p(x) = [0 0 1] and the rest ]]").unwrap();
        assert_eq!(p, parse_box("[0 0 1]").unwrap());
    }

    #[test]
    fn test_annotations_are_skipped() {
        let q = parse_box("[0 1\u{1D43} 2\u{1D43} 3]").unwrap();
        assert_eq!(q, parse_box("[0 1 2 3]").unwrap());
        let r = parse_box("[-1\u{1D43} 0 2 3]").unwrap();
        assert_eq!(r, parse_box("[-1 0 2 3]").unwrap());
    }

    #[test]
    fn test_lone_minus_is_zero() {
        assert_eq!(parse_box("[- 2]").unwrap(), parse_box("[0 2]").unwrap());
    }

    #[test]
    fn test_multi_digit() {
        let p = parse_box("[13]").unwrap();
        assert_eq!(p.children()[0].int_size(), 13);
    }

    #[test]
    fn test_no_opening_bracket() {
        assert_eq!(
            parse_box("1 2 3"),
            Err(BoxError::NoOpeningBracket {
                input: "1 2 3".to_string()
            })
        );
        assert!(parse_box("").is_err());
    }

    #[test]
    fn test_unclosed_bracket() {
        assert_eq!(parse_box("[1 2"), Err(BoxError::UnclosedBracket { position: 4 }));
        assert_eq!(parse_box("[1 [2]"), Err(BoxError::UnclosedBracket { position: 6 }));
        assert_eq!(parse_box("[1 [2"), Err(BoxError::UnclosedBracket { position: 5 }));
    }

    #[test]
    fn test_overflowing_literal() {
        assert_eq!(
            parse_box("[1 99999999999999999999]"),
            Err(BoxError::InvalidLiteral {
                position: 3,
                literal: "99999999999999999999".to_string()
            })
        );
    }

    #[test]
    fn test_literal_beyond_max_count() {
        assert_eq!(
            parse_box("[9223372036854775807]"),
            Err(BoxError::InvalidLiteral {
                position: 1,
                literal: "9223372036854775807".to_string()
            })
        );
        assert_eq!(
            parse_box("[1 -9223372036854775808]"),
            Err(BoxError::InvalidLiteral {
                position: 3,
                literal: "-9223372036854775808".to_string()
            })
        );
        let max = MAX_COUNT.to_string();
        let too_big = (MAX_COUNT + 1).to_string();
        assert_eq!(
            parse_box(&format!("[0 {}]", too_big)),
            Err(BoxError::InvalidLiteral {
                position: 3,
                literal: too_big
            })
        );
        let p = parse_box(&format!("[{}]", max)).unwrap();
        assert_eq!(p.children()[0].int_size(), MAX_COUNT);
    }

    #[test]
    fn test_from_str() {
        let p: Mbox = "[1 1 2]".parse().unwrap();
        assert_eq!(p.to_integer_string(), "[1 1 2]");
    }
}
