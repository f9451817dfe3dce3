//! Complex floating point arithmetic for IEEE-754 doubles, following the
//! ISO C99 Annex G rules for signed zeros, infinities and NaN.
//!
//! The crate provides a single immutable value type, [Complex], together
//! with the complete set of elementary and transcendental functions:
//! arithmetic, exponential/logarithmic, trigonometric, hyperbolic and their
//! inverses. The naive textbook formulas produce wrong infinities and NaNs
//! near the domain boundaries, so every operation here carries the
//! exception-handling logic from the C99 standard and from
//! Hull, Fairgrieve and Tang, "Implementing complex elementary functions
//! using exception handling" (ACM TOMS 20, 1994) and "Implementing the
//! complex arcsine and arccosine functions using exception handling"
//! (ACM TOMS 23, 1997).
//!
//! Mathematical domain failures are first-class return values, never
//! panics: check [Complex::is_nan] and [Complex::is_infinite] on results.
//! Malformed text input to `str::parse` is the one operation with a typed
//! error, [ParseComplexError].
//!
//! Equality is bitwise per component, so `-0.0` and `0.0` parts differ
//! while two NaN parts compare equal. This makes [Complex] usable as a hash
//! map key and makes signed zero behavior testable with `assert_eq!`.
//!
//! # Features
//! - `std` (default): use the `std` intrinsics for the scalar math
//!   primitives. Without it the crate is `no_std` and falls back to `libm`.
//! - `serde`: serialize as a `(re, im)` tuple.
//! - `bytemuck`: `Zeroable`/`Pod` for the `repr(C)` pair.
//! - `rand`: uniform, unit-circle and normal distributions.

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod complex;
mod float;
mod fmt;
mod math;
#[cfg(feature = "rand")]
pub mod rand;

pub use complex::{Complex, NthRoots};
pub use fmt::ParseComplexError;
