//! Non-empty boxes: finite multisets of boxes.
//!
//! Children are kept in a shared, immutable slice, stably sorted by the canonical
//! comparator (size of the child). Duplicates are kept side by side, so the slice is a
//! faithful multiset.
use std::fmt;
use std::sync::Arc;

use itertools::{Itertools, iproduct};
use log::trace;
use rayon::prelude::*;

use crate::boxes::box_engine::{MAX_COUNT, Mbox};
use crate::boxes::box_errors::BoxError;
use crate::boxes::box_render::{ALPHA, subscript, superscript};

/// Products with at least this many pairwise sums are computed on the rayon pool.
pub const PARALLEL_PRODUCT_THRESHOLD: usize = 256;

#[derive(Clone, Debug)]
pub struct NonEmptyBox {
    content: Arc<[Mbox]>,
    height: usize,
}

impl NonEmptyBox {
    /// Build from at least one child. Callers go through [`Mbox::from_boxes`], which
    /// turns an empty list into the empty box.
    pub(crate) fn new(mut boxes: Vec<Mbox>) -> Self {
        debug_assert!(!boxes.is_empty(), "non-empty box built without children");
        boxes.sort_by(Mbox::canonical_cmp);
        let height = 1 + boxes.iter().map(Mbox::height).max().unwrap_or(0);
        NonEmptyBox {
            content: boxes.into(),
            height,
        }
    }

    /// `n` empty boxes, `n > 0`.
    pub(crate) fn of_empties(n: usize) -> Self {
        debug_assert!(n > 0);
        NonEmptyBox {
            content: vec![Mbox::Empty; n].into(),
            height: 1,
        }
    }

    /// The natural number `count` as a box of empty boxes.
    /// Zero and negative counts are rejected; use [`Mbox::of`] for those.
    pub fn from_count(count: i64) -> Result<Self, BoxError> {
        if count <= 0 {
            return Err(BoxError::InvalidConstruction { count });
        }
        match usize::try_from(count) {
            Ok(n) if n <= MAX_COUNT => Ok(Self::of_empties(n)),
            _ => Err(BoxError::CountOutOfRange {
                count,
                max: MAX_COUNT,
            }),
        }
    }

    pub fn int_size(&self) -> usize {
        self.content.len()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn children(&self) -> &[Mbox] {
        &self.content
    }

    /// Multiset union. Equal elements are never cancelled against each other.
    pub fn union(&self, other: &NonEmptyBox) -> Mbox {
        let list: Vec<Mbox> = self
            .content
            .iter()
            .chain(other.content.iter())
            .cloned()
            .collect();
        Mbox::from_boxes(list)
    }

    /// Multiset of `x + y` over every child `x` of `self` and `y` of `other`.
    pub fn cross(&self, other: &NonEmptyBox) -> Mbox {
        let pairs = self.int_size() * other.int_size();
        let sums: Vec<Mbox> = if pairs >= PARALLEL_PRODUCT_THRESHOLD {
            trace!("computing {} pairwise sums in parallel", pairs);
            let right = &other.content;
            self.content
                .par_iter()
                .flat_map_iter(|x| right.iter().map(move |y| x.add(y)))
                .collect()
        } else {
            iproduct!(self.content.iter(), other.content.iter())
                .map(|(x, y)| x.add(y))
                .collect()
        };
        Mbox::from_boxes(sums)
    }

    /// Children equal to `b`, in their original order.
    pub fn truncate(&self, b: &Mbox) -> Mbox {
        Mbox::from_boxes(self.content.iter().filter(|x| *x == b).cloned().collect())
    }

    /// Sum of `base.pow(child)` over the children.
    pub fn eval(&self, base: &Mbox) -> Mbox {
        self.content.iter().map(|child| base.pow(child)).sum()
    }

    /// Partition of the children into classes of equal boxes. Classes appear in the
    /// order of their first member.
    pub fn group_equals(&self) -> Vec<Vec<&Mbox>> {
        let mut groups = Vec::new();
        let mut pool: Vec<&Mbox> = self.content.iter().collect();
        while !pool.is_empty() {
            let first = pool.remove(0);
            let (same, rest): (Vec<&Mbox>, Vec<&Mbox>) =
                pool.into_iter().partition(|x| *x == first);
            let mut group = Vec::with_capacity(same.len() + 1);
            group.push(first);
            group.extend(same);
            groups.push(group);
            pool = rest;
        }
        groups
    }

    /// Leading empty children collapse into a count; once a non-empty child shows up the
    /// count is spelled out as zeros inside a bracketed list with everything else.
    pub fn to_integer_string(&self) -> String {
        let empties = self.content.iter().take_while(|c| c.is_empty()).count();
        let rest = &self.content[empties..];
        if rest.is_empty() {
            return empties.to_string();
        }
        let items = std::iter::repeat_n("0".to_string(), empties)
            .chain(rest.iter().map(Mbox::to_integer_string));
        format!("[{}]", items.format(" "))
    }

    /// `k` empty children print as `k`; a virtual child prints as its `(l, r)` pair
    /// instead of a count, even though it has height 0.
    pub fn as_poly_number(&self) -> String {
        self.group_equals()
            .iter()
            .map(|group| {
                let count = group.len();
                match group[0] {
                    Mbox::Empty => count.to_string(),
                    Mbox::NonEmpty(term) => format!("{}{}", coefficient(count), term.alpha_terms()),
                    Mbox::Virtual(v) => format!("{}{}", coefficient(count), v.as_poly_number()),
                }
            })
            .join("+")
    }

    /// One `α` per class of equal children: `[3 5 5]` gives `α₃α₅²`.
    fn alpha_terms(&self) -> String {
        self.group_equals()
            .iter()
            .map(|group| {
                format!(
                    "{}{}{}",
                    ALPHA,
                    subscript(group[0].int_size()),
                    exponent(group.len() as i64)
                )
            })
            .collect()
    }
}

fn coefficient(count: usize) -> String {
    if count > 1 {
        count.to_string()
    } else {
        String::new()
    }
}

fn exponent(count: i64) -> String {
    if count > 1 || count < 0 {
        superscript(count)
    } else {
        String::new()
    }
}

/// Multiset equality: every child of `self` is matched to a distinct equal child of
/// `other`.
impl PartialEq for NonEmptyBox {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.content, &other.content) {
            return true;
        }
        if self.content.len() != other.content.len() {
            return false;
        }
        let mut pool: Vec<&Mbox> = other.content.iter().collect();
        self.content
            .iter()
            .all(|x| match pool.iter().position(|y| *y == x) {
                Some(i) => {
                    pool.swap_remove(i);
                    true
                }
                None => false,
            })
    }
}

impl Eq for NonEmptyBox {}

impl fmt::Display for NonEmptyBox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.content.iter().format(" "))
    }
}
