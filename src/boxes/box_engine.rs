//! # Box engine
//!
//! The value type of the multiset algebra. A box is one of
//! - **Empty**: the empty multiset, the number 0;
//! - **NonEmpty**: a multiset of boxes (duplicates count), see [`NonEmptyBox`];
//! - **Virtual**: a formal difference `left ⊖ right`, see [`VirtualBox`].
//!
//! Naturals are boxes of empty boxes (`3 = [[ ] [ ] [ ]]`), polynumbers are boxes of
//! naturals (`[0 1 1 2] = 1 + 2α₀ + α₀²`) and multinumbers nest one level deeper.
//! Addition is multiset union, multiplication is the multiset of pairwise sums.
//!
//! Every operation returns a new box; children are shared between boxes, never mutated.
//!
//! ```
//! use box_arithmetic::boxes::box_engine::Mbox;
//! let p = Mbox::parse("[2 3]").unwrap();
//! let q = Mbox::parse("[1 1 0]").unwrap();
//! assert_eq!((&p * &q).to_integer_string(), "[2 3 3 3 4 4]");
//! ```
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};

use log::warn;
use strum_macros::{Display, EnumIter};

use crate::boxes::box_errors::BoxError;
use crate::boxes::non_empty_box::NonEmptyBox;
use crate::boxes::virtual_box::VirtualBox;

/// Largest number of empty children a count may ask for, in either sign.
pub const MAX_COUNT: usize = 1 << 20;

/// Variant tag of a box, used in error messages and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum BoxKind {
    Empty,
    NonEmpty,
    Virtual,
}

/// A multiset box.
///
/// Equality is multiset equality for `NonEmpty` and cross-sum equivalence for `Virtual`;
/// different variants are never equal. There is no `Ord`: the canonical
/// ordering ([`Mbox::canonical_cmp`]) only fixes iteration order of children.
#[derive(Clone, Debug, Default)]
pub enum Mbox {
    #[default]
    Empty,
    NonEmpty(NonEmptyBox),
    Virtual(VirtualBox),
}

impl Mbox {
    /// BASIC FEATURES

    /// The box representing the integer `n`: `0` is the empty box, a positive `n` is a box
    /// of `n` empty boxes and a negative `n` is the virtual box `0 ⊖ |n|`.
    ///
    /// # Panics
    /// When `|n|` exceeds [`MAX_COUNT`]. Use [`Mbox::try_of`] for untrusted counts.
    pub fn of(n: i64) -> Mbox {
        match Mbox::try_of(n) {
            Ok(b) => b,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible [`Mbox::of`]: counts beyond [`MAX_COUNT`] in magnitude are rejected.
    pub fn try_of(n: i64) -> Result<Mbox, BoxError> {
        let count = usize::try_from(n.unsigned_abs())
            .ok()
            .filter(|count| *count <= MAX_COUNT)
            .ok_or(BoxError::CountOutOfRange {
                count: n,
                max: MAX_COUNT,
            })?;
        let b = match n.cmp(&0) {
            Ordering::Equal => Mbox::Empty,
            Ordering::Greater => Mbox::NonEmpty(NonEmptyBox::of_empties(count)),
            Ordering::Less => Mbox::Virtual(VirtualBox::new(
                Mbox::Empty,
                Mbox::NonEmpty(NonEmptyBox::of_empties(count)),
            )),
        };
        Ok(b)
    }

    /// Box holding exactly the given children; no children gives the empty box.
    pub fn from_boxes(boxes: Vec<Mbox>) -> Mbox {
        if boxes.is_empty() {
            Mbox::Empty
        } else {
            Mbox::NonEmpty(NonEmptyBox::new(boxes))
        }
    }

    /// The formal difference `left ⊖ right`.
    pub fn virtual_pair(left: Mbox, right: Mbox) -> Mbox {
        Mbox::Virtual(VirtualBox::new(left, right))
    }

    pub fn kind(&self) -> BoxKind {
        match self {
            Mbox::Empty => BoxKind::Empty,
            Mbox::NonEmpty(_) => BoxKind::NonEmpty,
            Mbox::Virtual(_) => BoxKind::Virtual,
        }
    }

    /// Number of direct children; a virtual box always counts as 2.
    pub fn int_size(&self) -> usize {
        match self {
            Mbox::Empty => 0,
            Mbox::NonEmpty(b) => b.int_size(),
            Mbox::Virtual(_) => 2,
        }
    }

    /// Nesting depth: 0 for the empty box, 1 + the deepest child otherwise.
    /// A virtual box reports the height of its left side.
    pub fn height(&self) -> usize {
        match self {
            Mbox::Empty => 0,
            Mbox::NonEmpty(b) => b.height(),
            Mbox::Virtual(v) => v.left().height(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Mbox::Empty)
    }

    /// The shape of this box: every element replaced by the empty box.
    pub fn size(&self) -> Mbox {
        match self {
            Mbox::Empty => Mbox::Empty,
            Mbox::NonEmpty(b) => Mbox::of(b.int_size() as i64),
            Mbox::Virtual(_) => Mbox::of(2),
        }
    }

    /// Direct multiset elements in canonical order. A virtual pair is not a multiset
    /// and has none; use [`Mbox::content`] to get at its two sides.
    pub fn children(&self) -> &[Mbox] {
        match self {
            Mbox::NonEmpty(b) => b.children(),
            Mbox::Empty | Mbox::Virtual(_) => &[],
        }
    }

    /// Owned copy of the contents: the children, or `[left, right]` for a virtual box.
    pub fn content(&self) -> Vec<Mbox> {
        match self {
            Mbox::Empty => Vec::new(),
            Mbox::NonEmpty(b) => b.children().to_vec(),
            Mbox::Virtual(v) => v.content(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mbox> {
        self.children().iter()
    }

    /// Canonical comparator: orders by [`Mbox::int_size`] only. Boxes of equal size keep
    /// the order they were constructed in (children are stably sorted), so equal values
    /// are never merged. This is not an ordering of values.
    pub fn canonical_cmp(&self, other: &Mbox) -> Ordering {
        self.int_size().cmp(&other.int_size())
    }

    /// ARITHMETIC

    pub fn add(&self, other: &Mbox) -> Mbox {
        match (self, other) {
            (Mbox::Empty, x) | (x, Mbox::Empty) => x.clone(),
            (Mbox::NonEmpty(a), Mbox::NonEmpty(b)) => a.union(b),
            (Mbox::Virtual(_), _) | (_, Mbox::Virtual(_)) => {
                Mbox::Virtual(VirtualBox::coerce(self).add(&VirtualBox::coerce(other)))
            }
        }
    }

    pub fn mul(&self, other: &Mbox) -> Mbox {
        match (self, other) {
            (Mbox::Empty, _) | (_, Mbox::Empty) => Mbox::Empty,
            (Mbox::NonEmpty(a), Mbox::NonEmpty(b)) => a.cross(b),
            (Mbox::Virtual(_), _) | (_, Mbox::Virtual(_)) => {
                Mbox::Virtual(VirtualBox::coerce(self).mul(&VirtualBox::coerce(other)))
            }
        }
    }

    /// `0 ⊖ self`, always a virtual box.
    pub fn neg(&self) -> Mbox {
        Mbox::Virtual(VirtualBox::coerce(self).neg())
    }

    /// `self ⊖ other` computed in the difference group, always a virtual box.
    pub fn sub(&self, other: &Mbox) -> Mbox {
        Mbox::Virtual(VirtualBox::coerce(self).sub(&VirtualBox::coerce(other)))
    }

    /// Sum of all boxes, left to right; no boxes gives the empty box.
    pub fn sum_all(boxes: &[Mbox]) -> Mbox {
        boxes.iter().sum()
    }

    /// Product of all boxes, left to right; no boxes gives `of(1)`.
    pub fn product_all(boxes: &[Mbox]) -> Mbox {
        boxes.iter().product()
    }

    /// The `b`-truncation: the children of this box equal to `b`.
    pub fn truncate(&self, b: &Mbox) -> Result<Mbox, BoxError> {
        match self {
            Mbox::Empty => Ok(Mbox::Empty),
            Mbox::NonEmpty(a) => Ok(a.truncate(b)),
            Mbox::Virtual(v) => {
                warn!("refusing to truncate virtual box {} by {}", v, b);
                Err(BoxError::UnsupportedOperation {
                    operation: "truncate",
                    kind: BoxKind::Virtual,
                })
            }
        }
    }

    /// `self` multiplied `k` times onto `of(1)`, where `k` counts the empty children of
    /// `n`. Only a natural number `n = [[ ] ... [ ]]` gives the usual power; any
    /// non-empty child of `n` is skipped.
    pub fn pow(&self, n: &Mbox) -> Mbox {
        n.iter()
            .filter(|child| child.is_empty())
            .fold(Mbox::of(1), |prod, _| prod.mul(self))
    }

    /// Evaluate this box as a polynumber at `base`: the sum of `base.pow(child)` over
    /// the children.
    pub fn eval(&self, base: &Mbox) -> Mbox {
        match self {
            Mbox::Empty => Mbox::Empty,
            Mbox::NonEmpty(b) => b.eval(base),
            Mbox::Virtual(v) => Mbox::Virtual(v.eval(base)),
        }
    }

    /// RENDERING

    /// Integer form: `[0 0 1 2]`, `5`, `(3⊖1)`.
    pub fn to_integer_string(&self) -> String {
        match self {
            Mbox::Empty => "0".to_string(),
            Mbox::NonEmpty(b) => b.to_integer_string(),
            Mbox::Virtual(v) => v.to_integer_string(),
        }
    }

    /// Polynumber form: `3+α₀+α₀³+2α₀⁴`.
    pub fn as_poly_number(&self) -> String {
        match self {
            Mbox::Empty => "0".to_string(),
            Mbox::NonEmpty(b) => b.as_poly_number(),
            Mbox::Virtual(v) => v.as_poly_number(),
        }
    }
}

/// Bracket form: nested `[...]` with space separated children, the empty box is `[ ]`.
impl fmt::Display for Mbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mbox::Empty => write!(f, "[ ]"),
            Mbox::NonEmpty(b) => write!(f, "{}", b),
            Mbox::Virtual(v) => write!(f, "{}", v),
        }
    }
}

impl PartialEq for Mbox {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Mbox::Empty, Mbox::Empty) => true,
            (Mbox::NonEmpty(a), Mbox::NonEmpty(b)) => a == b,
            (Mbox::Virtual(a), Mbox::Virtual(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Mbox {}

impl From<i64> for Mbox {
    fn from(n: i64) -> Self {
        Mbox::of(n)
    }
}

impl From<NonEmptyBox> for Mbox {
    fn from(b: NonEmptyBox) -> Self {
        Mbox::NonEmpty(b)
    }
}

impl From<VirtualBox> for Mbox {
    fn from(v: VirtualBox) -> Self {
        Mbox::Virtual(v)
    }
}

impl<'a> IntoIterator for &'a Mbox {
    type Item = &'a Mbox;
    type IntoIter = std::slice::Iter<'a, Mbox>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::ops::Add for Mbox {
    type Output = Mbox;

    fn add(self, rhs: Mbox) -> Mbox {
        Mbox::add(&self, &rhs)
    }
}

impl std::ops::Add<&Mbox> for &Mbox {
    type Output = Mbox;

    fn add(self, rhs: &Mbox) -> Mbox {
        Mbox::add(self, rhs)
    }
}

impl std::ops::Mul for Mbox {
    type Output = Mbox;

    fn mul(self, rhs: Mbox) -> Mbox {
        Mbox::mul(&self, &rhs)
    }
}

impl std::ops::Mul<&Mbox> for &Mbox {
    type Output = Mbox;

    fn mul(self, rhs: &Mbox) -> Mbox {
        Mbox::mul(self, rhs)
    }
}

impl std::ops::Sub for Mbox {
    type Output = Mbox;

    fn sub(self, rhs: Mbox) -> Mbox {
        Mbox::sub(&self, &rhs)
    }
}

impl std::ops::Sub<&Mbox> for &Mbox {
    type Output = Mbox;

    fn sub(self, rhs: &Mbox) -> Mbox {
        Mbox::sub(self, rhs)
    }
}

impl std::ops::Neg for Mbox {
    type Output = Mbox;

    fn neg(self) -> Mbox {
        Mbox::neg(&self)
    }
}

impl std::ops::Neg for &Mbox {
    type Output = Mbox;

    fn neg(self) -> Mbox {
        Mbox::neg(self)
    }
}

impl std::ops::AddAssign<&Mbox> for Mbox {
    fn add_assign(&mut self, rhs: &Mbox) {
        *self = Mbox::add(self, rhs);
    }
}

impl std::ops::MulAssign<&Mbox> for Mbox {
    fn mul_assign(&mut self, rhs: &Mbox) {
        *self = Mbox::mul(self, rhs);
    }
}

impl Sum for Mbox {
    fn sum<I: Iterator<Item = Mbox>>(iter: I) -> Mbox {
        iter.fold(Mbox::Empty, |acc, b| acc.add(&b))
    }
}

impl<'a> Sum<&'a Mbox> for Mbox {
    fn sum<I: Iterator<Item = &'a Mbox>>(iter: I) -> Mbox {
        iter.fold(Mbox::Empty, |acc, b| acc.add(b))
    }
}

impl Product for Mbox {
    fn product<I: Iterator<Item = Mbox>>(iter: I) -> Mbox {
        iter.fold(Mbox::of(1), |acc, b| acc.mul(&b))
    }
}

impl<'a> Product<&'a Mbox> for Mbox {
    fn product<I: Iterator<Item = &'a Mbox>>(iter: I) -> Mbox {
        iter.fold(Mbox::of(1), |acc, b| acc.mul(b))
    }
}
