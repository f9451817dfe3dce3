//! Elementary and transcendental functions on [Complex].
//!
//! Each trigonometric function is defined through its hyperbolic
//! counterpart by rotating the argument by `i` (`cos z = cosh(iz)`,
//! `sin z = -i sinh(iz)`, `tan z = -i tanh(iz)`), so there is one
//! branch-heavy kernel per pair. The kernels take a constructor value that
//! assembles the final number from the computed parts, which is where the
//! rotation back happens.
//!
//! The inverse functions use the crossover formulation of Hull, Fairgrieve
//! and Tang (1997), adapted from the Boost `boost/math/complex` headers via
//! the exception-handling branch structure of the C99 Annex G reference.

use crate::complex::Complex;
use crate::float;
use crate::float::{
    change_sign, copysign, in_region, is_pos_infinite, ldexp, max_exponent, negative,
};

/// Assembles a result from computed real and imaginary magnitudes. Shares
/// one kernel between a trig function and its hyperbolic twin, which differ
/// only in how the raw pair is rotated before being wrapped.
type ComplexConstructor = fn(f64, f64) -> Complex;

/// Constructor that multiplies by `-i`, i.e. `(re, im) -> (im, -re)`.
fn multiply_negative_i(re: f64, im: f64) -> Complex {
    Complex::new(im, -re)
}

const PI_OVER_2: f64 = core::f64::consts::FRAC_PI_2;
const PI_OVER_4: f64 = core::f64::consts::FRAC_PI_4;
const LN_2: f64 = core::f64::consts::LN_2;
/// `log10(e) / 2`, the scale for the high-accuracy `log1p` magnitude path
/// of the base-10 logarithm.
const LOG_10E_O_2: f64 = core::f64::consts::LOG10_E / 2.0;
const LOG10_2: f64 = core::f64::consts::LOG10_2;
const HALF: f64 = 0.5;
const ROOT2: f64 = core::f64::consts::SQRT_2;
/// Machine epsilon in the Hull et al. sense: the largest `E` with
/// `1 + E == 1` after rounding, i.e. `2^-53`.
const EPS: f64 = f64::EPSILON / 2.0;
/// Exponent separation beyond which `y` cannot influence `x^2 + y^2`.
const PRECISION_1: i32 = 54;
/// Crossover of the `log`/`log1p` formulas for the imaginary part of
/// asin/acos (Hull et al).
const A_CROSSOVER: f64 = 10.0;
/// Crossover of the inverse-sine/arctangent formulas for the real part of
/// asin/acos (Hull et al).
const B_CROSSOVER: f64 = 0.6471;
/// Upper bound of the asin/acos/sqrt safe region: `sqrt(MAX) / 8`.
const SAFE_MAX: f64 = 1.3407807929942596e154 / 8.0;
/// Lower bound of the asin/acos/sqrt safe region: `sqrt(MIN_NORMAL) * 4`.
const SAFE_MIN: f64 = 1.4916681462400413e-154 * 4.0;
/// Upper bound of the atanh safe region: `sqrt(MAX) / 2`.
const SAFE_UPPER: f64 = 1.3407807929942596e154 / 2.0;
/// Lower bound of the atanh safe region: `sqrt(MIN_NORMAL) * 2`.
const SAFE_LOWER: f64 = 1.4916681462400413e-154 * 2.0;

impl Complex {
    /// Computes the exponential function `e^z`.
    ///
    /// An entire function; the C99 special cases are handled explicitly,
    /// e.g. `exp(-inf + iy) = +0 cis(y)` and `exp(+inf + iy) = +inf cis(y)`
    /// for finite nonzero `y`, and a zero imaginary part is passed through
    /// so `exp(x - i0)` keeps its negative zero.
    pub fn exp(self) -> Self {
        if self.re.is_infinite() {
            // The scale applied to cis(im) is either zero or +inf.
            let zero_or_inf;
            if self.re < 0.0 {
                if !self.im.is_finite() {
                    // (-inf + i inf) and (-inf + iNaN) give (±0 ± i0); the
                    // signs are unspecified, so preserve conjugate equality.
                    return Self::new(0.0, copysign(0.0, self.im));
                }
                zero_or_inf = 0.0;
            } else {
                if self.im == 0.0 {
                    return self;
                }
                // (+inf + i inf) and (+inf + iNaN) give (±inf + iNaN).
                if !self.im.is_finite() {
                    return Self::new(self.re, f64::NAN);
                }
                zero_or_inf = self.re;
            }
            return Self::new(
                zero_or_inf * float::cos(self.im),
                zero_or_inf * float::sin(self.im),
            );
        } else if self.re.is_nan() {
            // (NaN + i0) gives (NaN + i0), every other NaN real gives the
            // sentinel.
            return if self.im == 0.0 { self } else { Self::NAN };
        } else if !self.im.is_finite() {
            return Self::NAN;
        }
        // Both parts finite. (±0 + i0) gives (1 + i0).
        let exp_x = float::exp(self.re);
        if self.im == 0.0 {
            return Self::new(exp_x, self.im);
        }
        Self::new(exp_x * float::cos(self.im), exp_x * float::sin(self.im))
    }

    /// Computes the principal value of the natural logarithm,
    /// `ln(z) = ln|z| + i arg(z)`.
    ///
    /// This function has one branch cut:
    ///
    /// * `(-∞, 0]`, continuous from above.
    ///
    /// The branch satisfies `-π ≤ arg(ln(z)) ≤ π`. The magnitude is
    /// computed scale-safely per Hull, Fairgrieve and Tang (1994).
    #[inline]
    pub fn ln(self) -> Self {
        self.log(float::ln, HALF, LN_2)
    }

    /// Computes the principal value of the base-10 logarithm,
    /// `log10(z) = log10|z| + i arg(z)`.
    ///
    /// The special cases and the branch cut are those of [ln](Self::ln).
    #[inline]
    pub fn log10(self) -> Self {
        self.log(float::log10, LOG_10E_O_2, LOG10_2)
    }

    /// Shared logarithm kernel, parameterized by the scalar log primitive.
    ///
    /// `log_of_2` must be the primitive applied to 2 or the power-of-two
    /// rescaling of the overflow path comes out wrong; `log_of_e_over_2` is
    /// the primitive applied to e, halved, and scales the `log1p` path.
    fn log(self, log: fn(f64) -> f64, log_of_e_over_2: f64, log_of_2: f64) -> Complex {
        if self.re.is_nan() || self.im.is_nan() {
            if self.is_infinite() {
                return Complex::new(f64::INFINITY, f64::NAN);
            }
            return Complex::NAN;
        }

        // The real part is log(sqrt(x^2 + y^2)) = log(x^2 + y^2) / 2,
        // computed on the swapped absolute values so that x >= y >= 0.
        let mut x = float::abs(self.re);
        let mut y = float::abs(self.im);
        if x < y {
            core::mem::swap(&mut x, &mut y);
        }

        if x == 0.0 {
            return Complex::new(
                f64::NEG_INFINITY,
                if negative(self.re) {
                    copysign(core::f64::consts::PI, self.im)
                } else {
                    self.im
                },
            );
        }

        let re;
        if x > HALF && x < ROOT2 {
            // x^2 + y^2 is close to 1: log1p(x^2 + y^2 - 1) avoids the
            // cancellation of log(~1).
            re = float::ln_1p(x2y2m1(x, y)) * log_of_e_over_2;
        } else if y == 0.0 {
            re = log(x);
        } else if x > SAFE_MAX || x < SAFE_MIN || y < SAFE_MIN {
            // sqrt(x^2 + y^2) would overflow or underflow.
            if is_pos_infinite(x) {
                re = x;
            } else {
                let expx = float::exponent(x);
                let expy = float::exponent(y);
                if 2 * (expx - expy) > PRECISION_1 {
                    // y is too small to matter.
                    re = log(x);
                } else {
                    // Hull et al: the scaling must leave sx^2 + sy^2 well
                    // away from 1. Their paper uses expx + 2 for underflow
                    // but expx for overflow; expx - 2 is used here.
                    let scale = if x > SAFE_MAX { expx - 2 } else { expx + 2 };
                    let sx = ldexp(x, -scale);
                    let sy = ldexp(y, -scale);
                    re = scale as f64 * log_of_2 + 0.5 * log(sx * sx + sy * sy);
                }
            }
        } else {
            re = 0.5 * log(x * x + y * y);
        }

        // The atan2 in arg() already satisfies the C99 edge cases for the
        // imaginary part.
        Complex::new(re, self.arg())
    }

    /// Computes the principal square root.
    ///
    /// This function has one branch cut:
    ///
    /// * `(-∞, 0)`, continuous from above.
    ///
    /// The result is in the right half plane and `z.conj().sqrt()` equals
    /// `z.sqrt().conj()`. Uses `t = sqrt(2 (|x| + |z|))` with even
    /// power-of-two rescaling outside the safe magnitude band
    /// (Hull, Fairgrieve and Tang 1994).
    pub fn sqrt(self) -> Self {
        if self.re.is_nan() || self.im.is_nan() {
            // Any infinity dominates the NaN.
            if self.im.is_infinite() {
                return Self::new(f64::INFINITY, self.im);
            }
            if self.re.is_infinite() {
                if self.re == f64::NEG_INFINITY {
                    return Self::new(f64::NAN, copysign(f64::INFINITY, self.im));
                }
                return Self::new(f64::INFINITY, f64::NAN);
            }
            return Self::NAN;
        }

        // Compute with positive values and determine the signs at the end.
        let x = float::abs(self.re);
        let y = float::abs(self.im);

        let t;
        if in_region(x, y, SAFE_MIN, SAFE_MAX) {
            // x^2 + y^2 cannot over- or underflow.
            t = float::sqrt(2.0 * (float::sqrt(x * x + y * y) + x));
        } else if is_pos_infinite(y) {
            return Self::new(f64::INFINITY, self.im);
        } else if is_pos_infinite(x) {
            if self.re == f64::NEG_INFINITY {
                return Self::new(0.0, copysign(f64::INFINITY, self.im));
            }
            return Self::new(f64::INFINITY, copysign(0.0, self.im));
        } else if y == 0.0 {
            // Real only.
            let sqrt_abs = float::sqrt(x);
            if self.re < 0.0 {
                return Self::new(0.0, copysign(sqrt_abs, self.im));
            }
            return Self::new(sqrt_abs, self.im);
        } else if x == 0.0 {
            // Imaginary only.
            let sqrt_abs = float::sqrt(y) / ROOT2;
            return Self::new(sqrt_abs, copysign(sqrt_abs, self.im));
        } else {
            // Scale so that abs(x) is near 1, with an even exponent so the
            // square root of the scale is itself a power of two:
            // st * sqrt(2^scale) = st * 2^(scale/2).
            let scale = max_exponent(x, y) & !0x1;
            let sx = ldexp(x, -scale);
            let sy = ldexp(y, -scale);
            let st = float::sqrt(2.0 * (float::sqrt(sx * sx + sy * sy) + sx));
            t = ldexp(st, scale / 2);
        }

        if self.re >= 0.0 {
            Self::new(t / 2.0, self.im / t)
        } else {
            Self::new(y / t, copysign(t / 2.0, self.im))
        }
    }

    /// Raises this number to a complex power, `z^x = exp(x ln(z))`.
    ///
    /// A zero base raised to an exponent with positive real part and zero
    /// imaginary part is zero; a zero base raised to anything else is the
    /// [NaN sentinel](Self::NAN).
    pub fn pow(self, x: Complex) -> Self {
        if self.re == 0.0 && self.im == 0.0 {
            if x.re > 0.0 && x.im == 0.0 {
                return Self::ZERO;
            }
            return Self::NAN;
        }
        (self.ln() * x).exp()
    }

    /// Raises this number to a real power, `z^x = exp(x ln(z))`.
    ///
    /// A zero base raised to a positive exponent is zero; a zero base
    /// raised to anything else is the [NaN sentinel](Self::NAN).
    pub fn powf(self, x: f64) -> Self {
        if self.re == 0.0 && self.im == 0.0 {
            if x > 0.0 {
                return Self::ZERO;
            }
            return Self::NAN;
        }
        (self.ln() * x).exp()
    }

    /// Computes the cosine, `cos(z) = cos(x) cosh(y) - i sin(x) sinh(y)`.
    ///
    /// An even function, computed as `cosh(iz)` per the C99 standard.
    #[inline]
    pub fn cos(self) -> Self {
        cosh(-self.im, self.re, Complex::new)
    }

    /// Computes the sine, `sin(z) = sin(x) cosh(y) + i cos(x) sinh(y)`.
    ///
    /// An odd function, computed as `-i sinh(iz)` per the C99 standard.
    #[inline]
    pub fn sin(self) -> Self {
        sinh(-self.im, self.re, multiply_negative_i)
    }

    /// Computes the tangent.
    ///
    /// An odd function, computed as `-i tanh(iz)` per the C99 standard.
    #[inline]
    pub fn tan(self) -> Self {
        tanh(-self.im, self.re, multiply_negative_i)
    }

    /// Computes the hyperbolic cosine,
    /// `cosh(z) = cosh(x) cos(y) + i sinh(x) sin(y)`.
    ///
    /// An even function, periodic in the imaginary part with period `2πi`.
    /// The C99 special cases are implemented explicitly, e.g.
    /// `cosh(x + i inf)` is the NaN sentinel for finite nonzero `x` while
    /// `cosh(+inf + iy)` is `+inf cis(y)` scaled infinity for finite `y`.
    #[inline]
    pub fn cosh(self) -> Self {
        cosh(self.re, self.im, Complex::new)
    }

    /// Computes the hyperbolic sine,
    /// `sinh(z) = sinh(x) cos(y) + i cosh(x) sin(y)`.
    ///
    /// An odd function, periodic in the imaginary part with period `2πi`.
    #[inline]
    pub fn sinh(self) -> Self {
        sinh(self.re, self.im, Complex::new)
    }

    /// Computes the hyperbolic tangent via the double-angle identity
    /// `tanh(z) = (sinh(2x) + i sin(2y)) / (cosh(2x) + cos(2y))`.
    ///
    /// An odd function. The doubled angles are computed overflow-safely and
    /// the degenerate `inf/inf` ratio collapses to `±1 ± i0` as if the real
    /// part were infinite.
    #[inline]
    pub fn tanh(self) -> Self {
        tanh(self.re, self.im, Complex::new)
    }

    /// Computes the principal value of the inverse sine.
    ///
    /// This function has two branch cuts:
    ///
    /// * `(-∞, -1)`, continuous from above.
    /// * `(1, ∞)`, continuous from below.
    ///
    /// The branch satisfies `-π/2 ≤ Re(asin(z)) ≤ π/2` and
    /// `z.conj().asin() == z.asin().conj()`.
    ///
    /// Implemented with the Hull, Fairgrieve and Tang (1997) crossover
    /// algorithm on `A = (|z+1| + |z-1|)/2` and `B = x/A`, with their
    /// figure 4 exception branches outside the safe magnitude region.
    #[inline]
    pub fn asin(self) -> Self {
        asin(self.re, self.im, Complex::new)
    }

    /// Computes the principal value of the inverse cosine.
    ///
    /// This function has two branch cuts:
    ///
    /// * `(-∞, -1)`, continuous from above.
    /// * `(1, ∞)`, continuous from below.
    ///
    /// The branch satisfies `0 ≤ Re(acos(z)) ≤ π` and
    /// `z.conj().acos() == z.acos().conj()`.
    ///
    /// Same formulation as [asin](Self::asin), with the figure 6 exception
    /// branches.
    #[inline]
    pub fn acos(self) -> Self {
        acos(self.re, self.im, Complex::new)
    }

    /// Computes the principal value of the inverse tangent.
    ///
    /// This function has two branch cuts:
    ///
    /// * `(-∞i, -i]`, continuous from the left.
    /// * `[i, ∞i)`, continuous from the right.
    ///
    /// Computed as `atan(z) = -i atanh(iz)` per the C99 standard.
    #[inline]
    pub fn atan(self) -> Self {
        atanh(-self.im, self.re, multiply_negative_i)
    }

    /// Computes the principal value of the inverse hyperbolic sine.
    ///
    /// This function has two branch cuts:
    ///
    /// * `(-∞i, -i)`, continuous from the left.
    /// * `(i, ∞i)`, continuous from the right.
    ///
    /// An odd function, computed as `asinh(z) = -i asin(iz)`.
    #[inline]
    pub fn asinh(self) -> Self {
        asin(-self.im, self.re, multiply_negative_i)
    }

    /// Computes the principal value of the inverse hyperbolic cosine.
    ///
    /// This function has one branch cut:
    ///
    /// * `(-∞, 1)`, continuous from above.
    ///
    /// Computed as `acosh(z) = ±i acos(z)` with the sign chosen to give a
    /// non-negative real part, compatible with the C99 standard.
    pub fn acosh(self) -> Self {
        // acos(±0 + iNaN) would give (π/2 + iNaN), but
        // acosh(x + iNaN) is the sentinel for every finite x.
        if self.im.is_nan() && self.re.is_finite() {
            return Self::NAN;
        }
        acos(self.re, self.im, acosh_constructor)
    }

    /// Computes the principal value of the inverse hyperbolic tangent.
    ///
    /// This function has two branch cuts:
    ///
    /// * `(-∞, -1]`, continuous from above.
    /// * `[1, ∞)`, continuous from below.
    ///
    /// An odd function with `-π/2 ≤ Im(atanh(z)) ≤ π/2` and
    /// `z.conj().atanh() == z.atanh().conj()`.
    ///
    /// The safe-region formulation is
    /// `re = log1p(4x / ((1-x)^2 + y^2)) / 4` and
    /// `im = atan2(2y, (1-x)(1+x) - y^2) / 2`, with the Boost `atanh`
    /// exception branches for magnitudes outside
    /// `(sqrt(MIN_NORMAL)*2, sqrt(MAX)/2)` and the pure-imaginary fast path
    /// `atanh(iy) = i atan(y)`.
    #[inline]
    pub fn atanh(self) -> Self {
        atanh(self.re, self.im, Complex::new)
    }
}

/// Constructor for `acosh(z) = ±i acos(z)`: multiply by `i` when the acos
/// imaginary part is negative, by `-i` otherwise, so the real part of the
/// result is non-negative.
fn acosh_constructor(re: f64, im: f64) -> Complex {
    if negative(im) {
        Complex::new(-im, re)
    } else {
        Complex::new(im, -re)
    }
}

/// Hyperbolic cosine kernel; also serves `cos(z) = cosh(iz)`.
fn cosh(re: f64, im: f64, constructor: ComplexConstructor) -> Complex {
    // An even function: map the special cases so f(z) = f(-z) holds.
    if re.is_infinite() && !im.is_finite() {
        return constructor(float::abs(re), f64::NAN);
    }
    if re == 0.0 && !im.is_finite() {
        return constructor(f64::NAN, change_sign(re, im));
    }
    if re == 0.0 && im == 0.0 {
        return constructor(1.0, change_sign(re, im));
    }
    if im == 0.0 && !re.is_finite() {
        return constructor(float::abs(re), change_sign(im, re));
    }
    constructor(
        float::cosh(re) * float::cos(im),
        float::sinh(re) * float::sin(im),
    )
}

/// Hyperbolic sine kernel; also serves `sin(z) = -i sinh(iz)`.
fn sinh(re: f64, im: f64, constructor: ComplexConstructor) -> Complex {
    if (re.is_infinite() && !im.is_finite()) || (re == 0.0 && !im.is_finite()) {
        return constructor(re, f64::NAN);
    }
    if im == 0.0 && !re.is_finite() {
        return constructor(re, im);
    }
    constructor(
        float::sinh(re) * float::cos(im),
        float::cosh(re) * float::sin(im),
    )
}

/// Hyperbolic tangent kernel; also serves `tan(z) = -i tanh(iz)`.
fn tanh(re: f64, im: f64, constructor: ComplexConstructor) -> Complex {
    if re.is_infinite() {
        if im.is_finite() {
            return constructor(copysign(1.0, re), copysign(0.0, sin2(im)));
        }
        return constructor(copysign(1.0, re), copysign(0.0, im));
    }

    if re == 0.0 {
        if im.is_finite() {
            // Identity: sin x / (1 + cos x) = tan(x/2).
            return constructor(re, float::tan(im));
        }
        return constructor(f64::NAN, f64::NAN);
    }
    if im == 0.0 {
        if re.is_nan() {
            return constructor(f64::NAN, im);
        }
        // Identity: sinh x / (1 + cosh x) = tanh(x/2).
        return constructor(float::tanh(re), im);
    }

    let re2 = 2.0 * re;

    // cosh of an infinite doubled angle is +inf, sinh keeps the sign.
    let divisor = float::cosh(re2) + cos2(im);
    let sinh_re2 = float::sinh(re2);

    // Avoid inf / inf: handle as if the real part were infinite.
    if sinh_re2.is_infinite() && divisor.is_infinite() {
        return constructor(copysign(1.0, re), copysign(0.0, im));
    }
    constructor(sinh_re2 / divisor, sin2(im) / divisor)
}

/// `cos(2a)` for finite `a`, falling back to `2 cos^2(a) - 1` when the
/// doubled angle itself overflows (the scalar cos of an infinity is NaN).
fn cos2(a: f64) -> f64 {
    let two_a = 2.0 * a;
    if two_a.is_finite() {
        return float::cos(two_a);
    }
    let cos_a = float::cos(a);
    2.0 * cos_a * cos_a - 1.0
}

/// `sin(2a)` for finite `a`, falling back to `2 sin(a) cos(a)` when the
/// doubled angle overflows.
fn sin2(a: f64) -> f64 {
    let two_a = 2.0 * a;
    if two_a.is_finite() {
        return float::sin(two_a);
    }
    2.0 * float::sin(a) * float::cos(a)
}

/// `x^2 + y^2 - 1` without the cancellation of forming `x^2 + y^2` first.
/// Assumes `x >= y >= 0` and that the squares cannot overflow.
///
/// Hull et al (page 236): for x >= 1 the error stays within a few EPS since
/// x - 1 is exact; for x < 1 with 4y^2 > |x^2 - 1| the relative error of
/// the real part can still be large.
fn x2y2m1(x: f64, y: f64) -> f64 {
    (x - 1.0) * (x + 1.0) + y * y
}

/// Inverse sine kernel on `(|x|, |y|)` with the sign correction applied at
/// construction; also serves `asinh(z) = -i asin(iz)`.
fn asin(real: f64, imaginary: f64, constructor: ComplexConstructor) -> Complex {
    let x = float::abs(real);
    let y = float::abs(imaginary);
    // The result without sign correction.
    let re;
    let im;

    // C99 special cases.
    if x.is_nan() {
        if is_pos_infinite(y) {
            re = x;
            im = y;
        } else {
            return Complex::NAN;
        }
    } else if y.is_nan() {
        if x == 0.0 {
            re = 0.0;
            im = y;
        } else if is_pos_infinite(x) {
            re = y;
            im = x;
        } else {
            return Complex::NAN;
        }
    } else if is_pos_infinite(x) {
        re = if is_pos_infinite(y) { PI_OVER_4 } else { PI_OVER_2 };
        im = x;
    } else if is_pos_infinite(y) {
        re = 0.0;
        im = y;
    } else {
        // Real numbers within the domain need none of the machinery.
        if y == 0.0 && x <= 1.0 {
            return constructor(float::asin(real), imaginary);
        }

        let xp1 = x + 1.0;
        let xm1 = x - 1.0;

        if in_region(x, y, SAFE_MIN, SAFE_MAX) {
            let yy = y * y;
            let r = float::sqrt(xp1 * xp1 + yy);
            let s = float::sqrt(xm1 * xm1 + yy);
            let a = 0.5 * (r + s);
            let b = x / a;

            if b <= B_CROSSOVER {
                re = float::asin(b);
            } else {
                // asin(B) is ill-conditioned near B = 1; switch to an
                // arctangent form.
                let apx = a + x;
                if x <= 1.0 {
                    re = float::atan(x / float::sqrt(0.5 * apx * (yy / (r + xp1) + (s - xm1))));
                } else {
                    re = float::atan(
                        x / (y * float::sqrt(0.5 * (apx / (r + xp1) + apx / (s + xm1)))),
                    );
                }
            }

            if a <= A_CROSSOVER {
                // log(A + sqrt(A^2-1)) loses accuracy for A near 1; use the
                // log1p form on A - 1.
                let am1 = if x < 1.0 {
                    0.5 * (yy / (r + xp1) + yy / (s - xm1))
                } else {
                    0.5 * (yy / (r + xp1) + (s + xm1))
                };
                im = float::ln_1p(am1 + float::sqrt(am1 * (a + 1.0)));
            } else {
                im = float::ln(a + float::sqrt(a * a - 1.0));
            }
        } else {
            // Hull et al: exception handling from figure 4.
            if y <= EPS * float::abs(xm1) {
                if x < 1.0 {
                    re = float::asin(x);
                    im = y / float::sqrt(xp1 * (1.0 - x));
                } else {
                    re = PI_OVER_2;
                    if f64::MAX / xp1 > xm1 {
                        // xp1 * xm1 cannot overflow.
                        im = float::ln_1p(xm1 + float::sqrt(xp1 * xm1));
                    } else {
                        im = LN_2 + float::ln(x);
                    }
                }
            } else if y <= SAFE_MIN {
                // Hull et al: assume x == 1, true while E^2 > 8 sqrt(u)
                // for machine epsilon E and smallest normal u.
                re = PI_OVER_2 - float::sqrt(y);
                im = float::sqrt(y);
            } else if EPS * y - 1.0 >= x {
                // Possible underflow.
                re = x / y;
                im = LN_2 + float::ln(y);
            } else if x > 1.0 {
                re = float::atan(x / y);
                let xoy = x / y;
                im = LN_2 + float::ln(y) + 0.5 * float::ln_1p(xoy * xoy);
            } else {
                let a = float::sqrt(1.0 + y * y);
                // Possible underflow.
                re = x / a;
                im = 0.5 * float::ln_1p(2.0 * y * (y + a));
            }
        }
    }

    constructor(change_sign(re, real), change_sign(im, imaginary))
}

/// Inverse cosine kernel on `(|x|, |y|)`; also serves `acosh(z) = ±i acos(z)`.
fn acos(real: f64, imaginary: f64, constructor: ComplexConstructor) -> Complex {
    let x = float::abs(real);
    let y = float::abs(imaginary);
    // The result without sign correction.
    let re;
    let im;

    // C99 special cases.
    if is_pos_infinite(x) {
        if is_pos_infinite(y) {
            re = PI_OVER_4;
            im = y;
        } else if y.is_nan() {
            // The sign of the imaginary part of the result is unspecified.
            return constructor(imaginary, real);
        } else {
            re = 0.0;
            im = f64::INFINITY;
        }
    } else if x.is_nan() {
        if is_pos_infinite(y) {
            return constructor(x, -imaginary);
        }
        return Complex::NAN;
    } else if is_pos_infinite(y) {
        re = PI_OVER_2;
        im = y;
    } else if y.is_nan() {
        return constructor(if x == 0.0 { PI_OVER_2 } else { y }, y);
    } else {
        // Real numbers within the domain need none of the machinery.
        if y == 0.0 && x <= 1.0 {
            return constructor(
                if x == 0.0 { PI_OVER_2 } else { float::acos(real) },
                -imaginary,
            );
        }

        let xp1 = x + 1.0;
        let xm1 = x - 1.0;

        if in_region(x, y, SAFE_MIN, SAFE_MAX) {
            let yy = y * y;
            let r = float::sqrt(xp1 * xp1 + yy);
            let s = float::sqrt(xm1 * xm1 + yy);
            let a = 0.5 * (r + s);
            let b = x / a;

            if b <= B_CROSSOVER {
                re = float::acos(b);
            } else {
                let apx = a + x;
                if x <= 1.0 {
                    re = float::atan(float::sqrt(0.5 * apx * (yy / (r + xp1) + (s - xm1))) / x);
                } else {
                    re = float::atan(
                        (y * float::sqrt(0.5 * (apx / (r + xp1) + apx / (s + xm1)))) / x,
                    );
                }
            }

            if a <= A_CROSSOVER {
                let am1 = if x < 1.0 {
                    0.5 * (yy / (r + xp1) + yy / (s - xm1))
                } else {
                    0.5 * (yy / (r + xp1) + (s + xm1))
                };
                im = float::ln_1p(am1 + float::sqrt(am1 * (a + 1.0)));
            } else {
                im = float::ln(a + float::sqrt(a * a - 1.0));
            }
        } else {
            // Hull et al: exception handling from figure 6.
            if y <= EPS * float::abs(xm1) {
                if x < 1.0 {
                    re = float::acos(x);
                    im = y / float::sqrt(xp1 * (1.0 - x));
                } else {
                    // Deviates from Hull et al as per Boost ticket 7290.
                    if f64::MAX / xp1 > xm1 {
                        // xp1 * xm1 cannot overflow.
                        re = y / float::sqrt(xm1 * xp1);
                        im = float::ln_1p(xm1 + float::sqrt(xp1 * xm1));
                    } else {
                        re = y / x;
                        im = LN_2 + float::ln(x);
                    }
                }
            } else if y <= SAFE_MIN {
                // Hull et al: assume x == 1.
                re = float::sqrt(y);
                im = float::sqrt(y);
            } else if EPS * y - 1.0 >= x {
                re = PI_OVER_2;
                im = LN_2 + float::ln(y);
            } else if x > 1.0 {
                re = float::atan(y / x);
                let xoy = x / y;
                im = LN_2 + float::ln(y) + 0.5 * float::ln_1p(xoy * xoy);
            } else {
                re = PI_OVER_2;
                let a = float::sqrt(1.0 + y * y);
                im = 0.5 * float::ln_1p(2.0 * y * (y + a));
            }
        }
    }

    constructor(
        if negative(real) {
            core::f64::consts::PI - re
        } else {
            re
        },
        if negative(imaginary) { im } else { -im },
    )
}

/// Inverse hyperbolic tangent kernel; also serves `atan(z) = -i atanh(iz)`.
fn atanh(real: f64, imaginary: f64, constructor: ComplexConstructor) -> Complex {
    let x = float::abs(real);
    let y = float::abs(imaginary);
    // The result without sign correction.
    let mut re;
    let mut im;

    // C99 special cases.
    if x.is_nan() {
        if is_pos_infinite(y) {
            // The sign of the real part of the result is unspecified.
            return constructor(0.0, copysign(PI_OVER_2, imaginary));
        }
        return Complex::NAN;
    } else if y.is_nan() {
        if is_pos_infinite(x) {
            return constructor(copysign(0.0, real), f64::NAN);
        }
        if x == 0.0 {
            return constructor(real, f64::NAN);
        }
        return Complex::NAN;
    } else {
        // x and y are finite or infinite. The safe region bounds come from
        // boost::math::atanh and differ from the asin/acos ones:
        // x >= SAFE_UPPER means (1-x) == -x, x <= SAFE_LOWER means
        // 1 - x^2 == 1.
        if in_region(x, y, SAFE_LOWER, SAFE_UPPER) {
            let mxp1 = 1.0 - x;
            let yy = y * y;
            // The real part log( ((x+1)^2+y^2) / ((1-x)^2+y^2) ) / 4
            // simplifies to log1p(4x / ((1-x)^2 + y^2)) / 4; the divisions
            // happen at the end of the function.
            re = float::ln_1p(4.0 * x / (mxp1 * mxp1 + yy));
            im = float::atan2(2.0 * y, mxp1 * (1.0 + x) - yy);
        } else {
            // Branches that would overflow or underflow the main formulas.

            // C99 G.7: imaginary-only input, atanh(iy) = i atan(y).
            if x == 0.0 {
                if imaginary == 0.0 {
                    return constructor(real, imaginary);
                }
                return constructor(real, float::atan(imaginary));
            }

            // Real part: log1p(4x / (1 + x(x-2) + y^2)) without overflow or
            // underflow in the squared terms.
            if x >= SAFE_UPPER {
                // (1-x) is -x to machine precision.
                if is_pos_infinite(x) || is_pos_infinite(y) {
                    re = 0.0;
                } else if y >= SAFE_UPPER {
                    // Big x and y: divide through by x*y.
                    re = float::ln_1p((4.0 / y) / (x / y + y / x));
                } else if y > 1.0 {
                    // Big x: divide through by x.
                    re = float::ln_1p(4.0 / (x + y * y / x));
                } else {
                    // Big x, small y: neglect y^2/x.
                    re = float::ln_1p(4.0 / x);
                }
            } else if y >= SAFE_UPPER {
                if x > 1.0 {
                    // Big y, medium x: divide through by y.
                    let mxp1 = 1.0 - x;
                    re = float::ln_1p((4.0 * x / y) / (mxp1 * mxp1 / y + y));
                } else {
                    // Big y, small x: only the first term of the log1p
                    // Taylor series matters.
                    re = 4.0 * x / y / y;
                }
            } else if x == 1.0 {
                // x = 1, small y: log(sqrt(4+y^2))/2 - log(y)/2 with
                // 4 + y^2 -> 4, multiplied by 2 since everything is divided
                // by 4 at the end.
                re = 2.0 * (LN_2 - float::ln(y));
            } else {
                // Modified from Boost which checks y > SAFE_LOWER; if
                // y^2 -> 0 it is simply ignored by the addition.
                let mxp1 = 1.0 - x;
                re = float::ln_1p((4.0 * x) / (mxp1 * mxp1 + y * y));
            }

            // Imaginary part: for large x or y the atan2 collapses to
            // +(pi - theta) with theta negligible against pi.
            if x >= SAFE_UPPER || y >= SAFE_UPPER {
                im = core::f64::consts::PI;
            } else if x <= SAFE_LOWER {
                // (1-x)^2 -> 1
                if y <= SAFE_LOWER {
                    im = float::atan2(2.0 * y, 1.0);
                } else {
                    im = float::atan2(2.0 * y, 1.0 - y * y);
                }
            } else {
                // Medium x, small y: 1 - y^2 is 1, so y^2 is dropped.
                im = float::atan2(2.0 * y, (1.0 - x) * (1.0 + x));
            }
        }
    }

    re /= 4.0;
    im /= 2.0;
    constructor(change_sign(re, real), change_sign(im, imaginary))
}
