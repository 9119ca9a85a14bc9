//! Division with remainder. Division by zero is fatal; see the
//! crate-level error-handling notes.

use std::ops::{Div, Rem};

use log::debug;

use crate::vector::div_word_vec;

use super::bridge::{div_knuth, from_binary, to_binary};
use super::core::BigDecimal;

impl BigDecimal {
    /// `self = x / y`, `rem = x % y`, computed together since the packed
    /// and binary-bridge division algorithms both produce a quotient and
    /// remainder in one pass. `self` and `rem` may each alias `x` or `y`;
    /// `self` and `rem` may not alias each other.
    ///
    /// # Panics
    ///
    /// Panics if `y` is zero.
    pub fn div_rem(&mut self, rem: &mut BigDecimal, x: &BigDecimal, y: &BigDecimal) {
        assert!(!y.words.is_empty(), "BigDecimal::div_rem: division by zero");

        if y.words.len() == 1 {
            let divisor = y.words[0];
            let x_owned;
            let x_words = if std::ptr::eq(self, x) || std::ptr::eq(rem, x) {
                x_owned = x.words.clone();
                &x_owned
            } else {
                &x.words
            };
            let len = x_words.len();
            let q = self.make(len);
            let r = div_word_vec(q, 0, x_words, divisor);
            self.norm();
            rem.set_word(r);
        } else {
            let binary_x = to_binary(&x.words);
            let binary_y = to_binary(&y.words);
            debug!(
                "BigDecimal::div_rem: divisor spans {} words, falling back to the binary bridge",
                y.words.len()
            );
            let (q, r) = div_knuth(&binary_x, &binary_y);
            self.words = from_binary(q);
            self.norm();
            rem.words = from_binary(r);
            rem.norm();
        }
    }
}

impl Div for &BigDecimal {
    type Output = BigDecimal;

    fn div(self, rhs: &BigDecimal) -> BigDecimal {
        let mut q = BigDecimal::new();
        let mut r = BigDecimal::new();
        q.div_rem(&mut r, self, rhs);
        q
    }
}

impl Rem for &BigDecimal {
    type Output = BigDecimal;

    fn rem(self, rhs: &BigDecimal) -> BigDecimal {
        let mut q = BigDecimal::new();
        let mut r = BigDecimal::new();
        q.div_rem(&mut r, self, rhs);
        r
    }
}
