//! Fixed-length vector kernel operating on spans of packed-BCD words (L1),
//! plus the binary bit-shift helpers the L1b division bridge needs (not
//! part of the packed-BCD kernel itself).

mod bcd;
mod binary;

pub(crate) use bcd::{
    add_mul_vvw_bcd, add_vv_bcd, add_vw_bcd, div_word_vec, mul_add_vww_bcd, sub_vv_bcd, sub_vw_bcd,
};
pub(crate) use binary::{shl_vu, shr_vu};
