//! Packed binary-coded-decimal arbitrary-precision arithmetic.
//!
//! This crate provides a multi-precision unsigned integer, [`BigDecimal`],
//! whose internal representation is packed BCD rather than the more usual
//! base-2⁶⁴ limbs: each machine word holds sixteen 4-bit decimal digits, so
//! the boundary between a value's internal and external (decimal string)
//! representation never needs an expensive base conversion.
//!
//! The focus is on **clarity, predictability, and auditability** in the
//! arithmetic kernel rather than on breadth of functionality: four
//! elementary operations (add, subtract, multiply, divide-with-remainder),
//! comparison, and round-tripping through ASCII decimal strings.
//!
//! # Module overview
//!
//! - `digit` (private)
//!   Word-level packed-BCD primitives: BCD↔binary conversion, carry-
//!   propagating add/subtract on one or two words, and the binary
//!   multiply/divide used only as multiplication/division scratch.
//!
//! - `vector` (private)
//!   The fixed-length kernel applying `digit`'s primitives across
//!   equal-length word spans: vector add/sub, word-vector add/sub,
//!   multiply-accumulate, and divide-by-word.
//!
//! - `magnitude` (public)
//!   [`BigDecimal`], the variable-length value type built on top of
//!   `vector`, its arithmetic operations, and ASCII decimal parsing and
//!   formatting. This is the crate's entire public surface.
//!
//! # Design goals
//!
//! - No unsafe code anywhere in the arithmetic kernel
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics: negative values, non-decimal radices,
//!   and concurrent mutation of a single value are all out of scope
//! - Fatal conditions (underflow, division by zero) panic rather than
//!   returning a `Result`, since callers are expected to prevent them by
//!   construction; malformed input text is the one genuinely recoverable
//!   error, returned from `from_decimal_str`/`FromStr`

mod digit;
mod vector;

pub mod magnitude;

pub use magnitude::{BigDecimal, DecimalParseError};
