//! Scalar helpers for IEEE-754 doubles: sign classification, raw-bits
//! exponent extraction and the dispatch between the `std` intrinsics and
//! `libm` used by the complex kernels.

/// Bit pattern of `-0.0`.
const NEGATIVE_ZERO_BITS: u64 = 0x8000_0000_0000_0000;

/// Largest unbiased exponent of a finite double.
pub(crate) const MAX_EXPONENT: i32 = 1023;

/// Checks that a value is negative signed and not NaN.
/// True for `-0.0`, unlike a plain `d < 0.0`.
#[inline]
pub(crate) fn negative(d: f64) -> bool {
    d < 0.0 || d.to_bits() == NEGATIVE_ZERO_BITS
}

/// Checks that a value is `+inf`. Replaces `is_infinite` when the input is
/// known to be positive (i.e. it has been passed through `abs`).
#[inline]
pub(crate) fn is_pos_infinite(d: f64) -> bool {
    d == f64::INFINITY
}

/// Negates `magnitude` if the signed value is negative; otherwise returns
/// it unchanged.
///
/// Not the same as `copysign`: `-0.0` counts as negative and NaN counts as
/// positive, and the magnitude's own sign is kept when no negation happens.
#[inline]
pub(crate) fn change_sign(magnitude: f64, signed: f64) -> f64 {
    if negative(signed) {
        -magnitude
    } else {
        magnitude
    }
}

/// Boxes the component of an infinite complex number: any infinite value
/// becomes `±1`, any finite value becomes `±0`, the sign is kept.
#[inline]
pub(crate) fn box_infinity(component: f64) -> f64 {
    copysign(if component.is_infinite() { 1.0 } else { 0.0 }, component)
}

/// Replaces NaN with a zero of the same sign; otherwise returns the value.
#[inline]
pub(crate) fn change_nan_to_zero(value: f64) -> f64 {
    if value.is_nan() {
        copysign(0.0, value)
    } else {
        value
    }
}

/// Checks that the complex number `(re, im)` is not zero.
/// NaN components count as nonzero, which rules out `re != 0.0 || im != 0.0`.
#[inline]
pub(crate) fn is_not_zero(re: f64, im: f64) -> bool {
    !(re == 0.0 && im == 0.0)
}

/// Unbiased exponent from the raw bits: `-1023` for zero and subnormals,
/// `1024` for infinities and NaN.
#[inline]
pub(crate) fn exponent(d: f64) -> i32 {
    ((d.to_bits() >> 52) & 0x7ff) as i32 - MAX_EXPONENT
}

/// The larger unbiased exponent of the two values.
#[inline]
pub(crate) fn max_exponent(a: f64, b: f64) -> i32 {
    exponent(a).max(exponent(b))
}

/// Checks that both `x` and `y` are strictly inside `(min, max)`.
#[inline]
pub(crate) fn in_region(x: f64, y: f64, min: f64, max: f64) -> bool {
    x < max && x > min && y < max && y > min
}

// The unary f64 primitives, dispatched to the std intrinsics when available
// and to libm otherwise. The two backends disagree on a few names.
macro_rules! forward_math_impl {
    ($($f:ident => $libm:ident),+ $(,)?) => {
        $(
            #[inline(always)]
            pub(crate) fn $f(x: f64) -> f64 {
                #[cfg(feature = "std")]
                {
                    f64::$f(x)
                }
                #[cfg(not(feature = "std"))]
                {
                    libm::$libm(x)
                }
            }
        )+
    };
}
forward_math_impl!(
    sin => sin,
    cos => cos,
    tan => tan,
    asin => asin,
    acos => acos,
    atan => atan,
    exp => exp,
    ln => log,
    log10 => log10,
    ln_1p => log1p,
    sinh => sinh,
    cosh => cosh,
    tanh => tanh,
    sqrt => sqrt,
    abs => fabs,
);

macro_rules! forward_math2_impl {
    ($($f:ident => $libm:ident),+ $(,)?) => {
        $(
            #[inline(always)]
            pub(crate) fn $f(x: f64, y: f64) -> f64 {
                #[cfg(feature = "std")]
                {
                    f64::$f(x, y)
                }
                #[cfg(not(feature = "std"))]
                {
                    libm::$libm(x, y)
                }
            }
        )+
    };
}
forward_math2_impl!(
    atan2 => atan2,
    hypot => hypot,
    copysign => copysign,
    powf => pow,
);

/// `x * 2^n` computed exactly. There is no `std` equivalent of C `scalbn`,
/// so this always goes through libm.
#[inline(always)]
pub(crate) fn ldexp(x: f64, n: i32) -> f64 {
    libm::ldexp(x, n)
}
