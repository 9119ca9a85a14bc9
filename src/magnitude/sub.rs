//! Subtraction. Underflow (`x < y`) is a fatal condition, not a value — see
//! the crate-level error-handling notes.

use std::ops::Sub;

use crate::vector::{sub_vv_bcd, sub_vw_bcd};

use super::core::BigDecimal;

impl BigDecimal {
    /// `self = x - y`, in place. `self` may alias `x` or `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x < y`. Subtraction that would go negative is a contract
    /// violation the caller is expected to prevent with a prior comparison,
    /// not a recoverable error.
    pub fn sub(&mut self, x: &BigDecimal, y: &BigDecimal) {
        assert!(
            Self::cmp_magnitude(&x.words, &y.words) != std::cmp::Ordering::Less,
            "BigDecimal::sub: underflow ({}-word minuend smaller than {}-word subtrahend)",
            x.words.len(),
            y.words.len(),
        );

        let m = x.words.len();
        let n = y.words.len();

        let x_owned;
        let x_words: &[_] = if std::ptr::eq(self, x) {
            x_owned = x.words.clone();
            &x_owned
        } else {
            &x.words
        };
        let y_owned;
        let y_words: &[_] = if std::ptr::eq(self, y) {
            y_owned = y.words.clone();
            &y_owned
        } else {
            &y.words
        };

        let z = self.make(m);
        let borrow = sub_vv_bcd(&mut z[..n], &x_words[..n], &y_words[..n]);
        let borrow = sub_vw_bcd(&mut z[n..m], &x_words[n..m], borrow);
        debug_assert_eq!(borrow, 0, "BigDecimal::sub: borrow escaped the top word after the length check passed");
        self.norm();
    }
}

impl Sub for &BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: &BigDecimal) -> BigDecimal {
        let mut z = BigDecimal::new();
        z.sub(self, rhs);
        z
    }
}

impl Sub for BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: BigDecimal) -> BigDecimal {
        &self - &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn sub_undoes_add() {
        let a = dec("423784981374892374987312482374987123");
        let b = dec("4231432142314321421349823484884840124");
        let sum = &a + &b;
        assert_eq!((&sum - &a).to_decimal_string(), b.to_decimal_string());
        assert_eq!((&sum - &b).to_decimal_string(), a.to_decimal_string());
    }

    #[test]
    fn sub_borrows_across_a_word_boundary() {
        let z = &dec("10000000000000000") - &dec("1");
        assert_eq!(z.to_decimal_string(), "9999999999999999");
    }

    #[test]
    fn sub_of_equal_values_is_zero() {
        let a = dec("12345");
        let z = &a - &a;
        assert!(z.is_zero());
    }

    #[test]
    #[should_panic(expected = "underflow")]
    fn sub_panics_on_underflow() {
        let _ = &dec("1") - &dec("2");
    }

    #[test]
    fn sub_can_alias_its_destination_with_the_minuend() {
        let mut z = dec("10");
        let y = dec("3");
        let x = z.clone();
        z.sub(&x, &y);
        assert_eq!(z.to_decimal_string(), "7");
    }
}
