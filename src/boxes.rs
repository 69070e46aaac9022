/// Box arithmetic: numbers built from nested multisets.
///
/// A box is the empty box, a multiset of boxes, or a formal difference of two boxes.
/// Adding boxes joins their contents, multiplying boxes collects all pairwise sums of their
/// contents. With this, the naturals, integers, polynumbers (polynomials) and multinumbers
/// (multivariate polynomials) all live in one recursive type.
///
/// # Example
/// ```
/// use box_arithmetic::boxes::box_engine::Mbox;
/// let p = Mbox::parse("[0 1 1 2]").unwrap();   // 1 + 2α₀ + α₀²
/// println!("{} | {} | {}", p, p.to_integer_string(), p.as_poly_number());
/// let value = p.eval(&Mbox::of(5));            // 1 + 10 + 25
/// assert_eq!(value, Mbox::of(36));
/// ```
/// ________________________________________________________________________________________________
pub mod box_engine;
/// multisets of boxes: union, pairwise-sum product, multiset equality, renderings
pub mod non_empty_box;
/// formal differences `a ⊖ b`
pub mod virtual_box;
/// bracket notation -> box
/// ```
/// use box_arithmetic::boxes::box_engine::Mbox;
/// let m = Mbox::parse("[[1 1][1 1]]").unwrap();
/// assert_eq!(m.as_poly_number(), "2α₁²");
/// ```
pub mod parse_box;
/// sub/superscript tables and the three textual forms
pub mod box_render;
pub mod box_errors;
