//! Word-level constants for the packed-BCD kernel.
//!
//! A [`Word`] is the 64-bit unit every layer above this one operates on. It
//! is either sixteen packed 4-bit decimal digits (the common case, used by
//! every public operation) or an ordinary binary integer (used only as
//! scratch inside the multiplication/division bridge).

/// A single machine word, interpreted as either packed BCD or binary
/// depending on context. Not exposed outside this crate: callers only ever
/// see [`crate::BigDecimal`].
pub(crate) type Word = u64;

/// Bit width of a [`Word`].
pub(crate) const WORD_BITS: u32 = Word::BITS;

/// Decimal digits packed per word (4 bits per digit, 64 bits per word).
pub(crate) const WORD_DIGITS: usize = (WORD_BITS / 4) as usize;

/// 10^16 - 1: the largest value `bcd()` may be asked to encode in one word.
pub(crate) const MAX_WORD: Word = 9_999_999_999_999_999;

/// 10^16, the base a packed-BCD word represents.
pub(crate) const WORD_BASE: Word = 10_000_000_000_000_000;

/// Forces a decimal carry out of every nibble of a packed-BCD addend before
/// the binary add, per Knuth TAOCP 4A §7.1.3.
pub(crate) const SIXMASK: Word = 0x6666_6666_6666_6666;

/// Selects bit 3 of each nibble; used to detect which nibbles did *not*
/// carry so the spurious `+6` can be subtracted back out.
pub(crate) const EIGHTMASK: Word = 0x8888_8888_8888_8888;
