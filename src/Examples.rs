//! examples of usage of box_arithmetic
/// polynumbers, multinumbers and signed polynumbers printed in all three forms
pub mod box_examples;
