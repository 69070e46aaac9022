// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use log::{info, warn};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::boxes::box_engine::Mbox;
use crate::boxes::box_errors::BoxError;
use crate::boxes::box_render::Rendering;

/// one row of the printed table: a named box in its three forms
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct BoxForms {
    name: String,
    bracket: String,
    integer: String,
    polynumber: String,
}

impl BoxForms {
    pub fn new(name: &str, b: &Mbox) -> Self {
        BoxForms {
            name: name.to_string(),
            bracket: Rendering::Bracket.render(b),
            integer: Rendering::Integer.render(b),
            polynumber: Rendering::PolyNumber.render(b),
        }
    }
}

pub fn forms_table(rows: &[(&str, Mbox)]) -> String {
    let forms: Vec<BoxForms> = rows.iter().map(|(name, b)| BoxForms::new(name, b)).collect();
    let mut table = Table::new(&forms);
    table.with(Style::modern_rounded());
    table.to_string()
}

fn parse_all(inputs: &[(&'static str, &str)]) -> Result<Vec<(&'static str, Mbox)>, BoxError> {
    inputs
        .iter()
        .map(|(name, text)| Ok((*name, Mbox::parse(text)?)))
        .collect()
}

/// number of worked examples available to [`box_examples`]
pub const EXAMPLES_COUNT: usize = 10;

/// Builds the boxes of the worked example with the given number.
pub fn example_boxes(example: usize) -> Result<(&'static str, Vec<(&'static str, Mbox)>), BoxError> {
    let res = match example {
        0 => (
            "Examples of polynumbers",
            parse_all(&[("p1", "[1 1 2]"), ("p2", "[13]"), ("p3", "[0 0]"), ("p4", "[ ]")])?,
        ),
        1 => (
            "Examples of multinumbers",
            parse_all(&[
                ("m1", "[[1 1][1 1]]"),
                ("m2", "[[3 5 11]]"),
                ("m3", "[0]"),
                ("m4", "[ ]"),
            ])?,
        ),
        2 => {
            let mut rows = parse_all(&[
                ("a", "[3 3 4]"),
                ("b", "[ ]"),
                ("c", "[0]"),
                ("d", "[3 7]"),
            ])?;
            let boxes: Vec<Mbox> = rows.iter().map(|(_, b)| b.clone()).collect();
            rows.push(("a+b+c+d", Mbox::sum_all(&boxes)));
            ("Example of sum of polynumbers", rows)
        }
        3 => {
            let mut rows = parse_all(&[("p1", "[2 3]"), ("p2", "[1 1 0]")])?;
            let product = &rows[0].1 * &rows[1].1;
            rows.push(("p1 × p2", product));
            ("Example of polynumber multiplication", rows)
        }
        4 => {
            let mut rows = parse_all(&[
                ("m1", "[[3][4]]"),
                ("m2", "[[1 1 2][4] 0]"),
                ("m3", "[4 [1 2 1]]"),
            ])?;
            let boxes: Vec<Mbox> = rows.iter().map(|(_, b)| b.clone()).collect();
            rows.push(("m1 + m2 + m3", Mbox::sum_all(&boxes)));
            ("Example of multinumber addition", rows)
        }
        5 => {
            let mut rows = parse_all(&[("m1", "[[0 0 2][3 8]]"), ("m2", "[[1 1] 2 [9]]")])?;
            let product = &rows[0].1 * &rows[1].1;
            rows.push(("m1 × m2", product));
            ("Example of multinumber multiplication", rows)
        }
        6 => (
            "multinumber vs polynumber",
            parse_all(&[
                ("polynumber", "[0 0 0 1 2 2 2 2 5]"),
                ("multinumber", "[0 0 0 [1] [1 1][1 1][1 1][1 1][1 1 1 1 1]]"),
            ])?,
        ),
        7 => (
            "bipolynumber example",
            parse_all(&[(
                "b",
                "[0 0 [0 0] [0 0 0][0 0 0][0 0 0][0 0 0][1][1][1][0 1][0 1][0 1][0 1][0 1][0 0 1 1]]",
            )])?,
        ),
        8 => {
            // integer polynumbers: negative coefficients are virtual boxes
            let m = Mbox::parse("[0 1]")?;
            let m_sq = &m * &m;
            let minus_m = m.mul(&Mbox::of(-1));
            let minus_m_sq = m_sq.mul(&Mbox::of(-1));
            let p = Mbox::parse("[-3 -1 2\u{1D43}]")?;
            let q = Mbox::parse("[-1\u{1D43} 0 2 3]")?;
            let r = Mbox::parse("[-2 1]")?;
            let s = Mbox::parse("[-1 -1 3\u{1D43}]")?;
            (
                "integer polynumbers",
                vec![
                    ("m", m.clone()),
                    ("m²", m_sq.clone()),
                    ("-m", minus_m.clone()),
                    ("-m²", minus_m_sq),
                    ("m + (-m)", m.add(&minus_m)),
                    ("m² + (-m)", m_sq.add(&minus_m)),
                    ("p", p.clone()),
                    ("q", q.clone()),
                    ("p + q", p.add(&q)),
                    ("r", r.clone()),
                    ("s", s.clone()),
                    ("r × s", r.mul(&s)),
                ],
            )
        }
        9 => {
            let p = Mbox::parse("[0 1 1 2]")?;
            let a = Mbox::parse("[7 7 [3 5] [[4] 2]]")?;
            let t = a.truncate(&Mbox::of(7))?;
            (
                "evaluation, powers and truncation",
                vec![
                    ("p", p.clone()),
                    ("p(5)", p.eval(&Mbox::of(5))),
                    ("3²", Mbox::of(3).pow(&Mbox::of(2))),
                    ("A", a),
                    ("t₇A", t),
                ],
            )
        }
        _ => {
            info!("no example with number {}, showing example 0", example);
            return example_boxes(0);
        }
    };
    Ok(res)
}

/// Examples selected by the first command line argument: a number, `all`, or nothing
/// for example 0. Anything else falls back to example 0 with a warning.
pub fn examples_to_run(arg: Option<&str>) -> Vec<usize> {
    match arg {
        None => vec![0],
        Some("all") => (0..EXAMPLES_COUNT).collect(),
        Some(n) => match n.parse::<usize>() {
            Ok(example) => vec![example],
            Err(_) => {
                warn!("example number {:?} is not a number, running example 0", n);
                vec![0]
            }
        },
    }
}

/// Prints the worked example with the given number as a table.
pub fn box_examples(example: usize) -> Result<(), BoxError> {
    let (title, rows) = example_boxes(example)?;
    info!("running example {}: {}", example, title);
    println!("{}", title);
    println!("{}", forms_table(&rows));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_examples_build() {
        for example in 0..EXAMPLES_COUNT {
            let (title, rows) = example_boxes(example).unwrap();
            assert!(!title.is_empty());
            assert!(!rows.is_empty());
        }
    }

    #[test]
    fn test_box_forms_row() {
        let row = BoxForms::new("p", &Mbox::parse("[0 1 1 2]").unwrap());
        assert_eq!(row.bracket, "[[ ] [[ ]] [[ ]] [[ ] [ ]]]");
        assert_eq!(row.integer, "[0 1 1 2]");
        assert_eq!(row.polynumber, "1+2α₀+α₀²");
    }

    #[test]
    fn test_table_contains_all_forms() {
        let table = forms_table(&[("two", Mbox::of(2))]);
        assert!(table.contains("two"));
        assert!(table.contains("[[ ] [ ]]"));
        assert!(table.contains("polynumber"));
    }

    #[test]
    fn test_polynumber_product_example() {
        let (_, rows) = example_boxes(3).unwrap();
        let (name, product) = &rows[2];
        assert_eq!(*name, "p1 × p2");
        assert_eq!(product.to_integer_string(), "[2 3 3 3 4 4]");
    }

    #[test]
    fn test_eval_example() {
        let (_, rows) = example_boxes(9).unwrap();
        assert_eq!(rows[1].1, Mbox::of(36));
        assert_eq!(rows[2].1, Mbox::of(9));
        assert_eq!(rows[4].1.to_integer_string(), "[7 7]");
    }

    #[test]
    fn test_examples_to_run() {
        assert_eq!(examples_to_run(None), vec![0]);
        assert_eq!(examples_to_run(Some("7")), vec![7]);
        assert_eq!(examples_to_run(Some("all")).len(), EXAMPLES_COUNT);
        assert_eq!(examples_to_run(Some("seven")), vec![0]);
        assert_eq!(examples_to_run(Some("-1")), vec![0]);
    }

    #[test]
    fn test_unknown_example_falls_back() {
        let (title, _) = example_boxes(99).unwrap();
        assert_eq!(title, "Examples of polynumbers");
    }
}
