//! Addition.

use std::ops::Add;

use crate::vector::{add_vv_bcd, add_vw_bcd};

use super::core::BigDecimal;

impl BigDecimal {
    /// `self = x + y`, in place. `self` may alias `x` or `y`.
    pub fn add(&mut self, x: &BigDecimal, y: &BigDecimal) {
        let (x, y) = if x.words.len() >= y.words.len() { (x, y) } else { (y, x) };
        let m = x.words.len();
        let n = y.words.len();
        if m == 0 {
            self.make(0);
            return;
        }

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

        let z = self.make(m + 1);
        let carry = add_vv_bcd(&mut z[..n], &x_words[..n], &y_words[..n]);
        let carry = add_vw_bcd(&mut z[n..m], &x_words[n..m], carry);
        z[m] = carry;
        self.norm();
    }
}

impl Add for &BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: &BigDecimal) -> BigDecimal {
        let mut z = BigDecimal::new();
        z.add(self, rhs);
        z
    }
}

impl Add for BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: BigDecimal) -> BigDecimal {
        &self + &rhs
    }
}
