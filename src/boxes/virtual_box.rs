//! Virtual boxes: formal differences `left ⊖ right`.
//!
//! Pairs of boxes modulo `(a, b) ~ (c, d)  <=>  a + d = b + c`, the same construction that
//! builds the integers out of the naturals. Any other box `x` enters the group as `x ⊖ 0`.
use std::fmt;
use std::sync::Arc;

use crate::boxes::box_engine::Mbox;
use crate::boxes::box_render::CIRCLED_MINUS;

#[derive(Clone, Debug)]
pub struct VirtualBox {
    left: Arc<Mbox>,
    right: Arc<Mbox>,
}

impl VirtualBox {
    pub fn new(left: Mbox, right: Mbox) -> Self {
        VirtualBox {
            left: Arc::new(left),
            right: Arc::new(right),
        }
    }

    /// A virtual box stays as it is, anything else becomes `x ⊖ 0`.
    pub fn coerce(x: &Mbox) -> VirtualBox {
        match x {
            Mbox::Virtual(v) => v.clone(),
            other => VirtualBox::new(other.clone(), Mbox::Empty),
        }
    }

    pub fn left(&self) -> &Mbox {
        &self.left
    }

    pub fn right(&self) -> &Mbox {
        &self.right
    }

    /// `[left, right]`
    pub fn content(&self) -> Vec<Mbox> {
        vec![self.left().clone(), self.right().clone()]
    }

    /// `(a ⊖ b) + (c ⊖ d) = (a + c) ⊖ (b + d)`
    pub fn add(&self, other: &VirtualBox) -> VirtualBox {
        VirtualBox::new(self.left.add(&other.left), self.right.add(&other.right))
    }

    /// `-(a ⊖ b) = b ⊖ a`
    pub fn neg(&self) -> VirtualBox {
        VirtualBox {
            left: Arc::clone(&self.right),
            right: Arc::clone(&self.left),
        }
    }

    pub fn sub(&self, other: &VirtualBox) -> VirtualBox {
        self.add(&other.neg())
    }

    /// `(a ⊖ b)(c ⊖ d) = (ac + bd) ⊖ (ad + bc)`
    pub fn mul(&self, other: &VirtualBox) -> VirtualBox {
        let left = self.left.mul(&other.left).add(&self.right.mul(&other.right));
        let right = self.left.mul(&other.right).add(&self.right.mul(&other.left));
        VirtualBox::new(left, right)
    }

    /// Evaluates both sides at `base`.
    pub fn eval(&self, base: &Mbox) -> VirtualBox {
        VirtualBox::new(self.left.eval(base), self.right.eval(base))
    }

    pub fn to_integer_string(&self) -> String {
        self.to_string()
    }

    pub fn as_poly_number(&self) -> String {
        format!(
            "({}, {})",
            self.left.as_poly_number(),
            self.right.as_poly_number()
        )
    }
}

impl PartialEq for VirtualBox {
    fn eq(&self, other: &Self) -> bool {
        self.left.add(&other.right) == self.right.add(&other.left)
    }
}

impl Eq for VirtualBox {}

impl fmt::Display for VirtualBox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}{}{})",
            self.left.to_integer_string(),
            CIRCLED_MINUS,
            self.right.to_integer_string()
        )
    }
}

impl std::ops::Add for VirtualBox {
    type Output = VirtualBox;

    fn add(self, rhs: VirtualBox) -> VirtualBox {
        VirtualBox::add(&self, &rhs)
    }
}

impl std::ops::Sub for VirtualBox {
    type Output = VirtualBox;

    fn sub(self, rhs: VirtualBox) -> VirtualBox {
        VirtualBox::sub(&self, &rhs)
    }
}

impl std::ops::Mul for VirtualBox {
    type Output = VirtualBox;

    fn mul(self, rhs: VirtualBox) -> VirtualBox {
        VirtualBox::mul(&self, &rhs)
    }
}

impl std::ops::Neg for VirtualBox {
    type Output = VirtualBox;

    fn neg(self) -> VirtualBox {
        VirtualBox::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vb(left: i64, right: i64) -> VirtualBox {
        VirtualBox::new(Mbox::of(left), Mbox::of(right))
    }

    #[test]
    fn test_coerce() {
        let v = VirtualBox::coerce(&Mbox::of(3));
        assert_eq!(v.left(), &Mbox::of(3));
        assert!(v.right().is_empty());
        let w = VirtualBox::coerce(&Mbox::of(-3));
        assert_eq!(w.left(), &Mbox::of(0));
        assert_eq!(w.right(), &Mbox::of(3));
    }

    #[test]
    fn test_equality_is_cross_sum() {
        let x = vb(4, 6);
        let y = vb(5, 7);
        assert_eq!(x, x);
        assert_eq!(x, y);
        assert_eq!(y, x);
        assert_ne!(x, vb(6, 4));
    }

    #[test]
    fn test_add_cancels_to_zero() {
        let sum = vb(4, 6) + vb(2, 0);
        assert_eq!(sum, vb(0, 0));
        assert_eq!(sum.to_string(), "(6⊖6)");
    }

    #[test]
    fn test_neg_swaps_sides() {
        let v = vb(1, 5);
        assert_eq!(v.neg().to_string(), "(5⊖1)");
        assert_eq!(-(-v.clone()), v);
    }

    #[test]
    fn test_mul_of_negatives() {
        let a = vb(0, 3);
        let b = vb(0, 2);
        assert_eq!(a * b, vb(6, 0));
    }

    #[test]
    fn test_sub() {
        assert_eq!(vb(2, 0) - vb(5, 0), vb(0, 3));
    }

    #[test]
    fn test_eval_both_sides() {
        // (α₀ ⊖ 1) at 3 is 3 ⊖ 1
        let v = VirtualBox::new(Mbox::from_boxes(vec![Mbox::of(1)]), Mbox::of(1));
        assert_eq!(v.eval(&Mbox::of(3)), vb(2, 0));
    }

    #[test]
    fn test_renderings() {
        let v = vb(2, 0);
        assert_eq!(v.to_integer_string(), "(2⊖0)");
        assert_eq!(v.as_poly_number(), "(2, 0)");
        assert_eq!(v.content(), vec![Mbox::of(2), Mbox::of(0)]);
    }
}
