//! Derived rand distributions for [Complex]: uniform components, points on
//! the unit circle and the complex standard normal.

use crate::float;
use crate::Complex;
use ::rand::{
    distr::{Distribution, StandardUniform},
    Rng,
};

/// Standard normal distribution over the complex plane.
pub struct StandardNormal;
/// Unitary distribution, meaning a uniform distribution on the values whose
/// norm is 1.
pub struct StandardUnitary;

impl Distribution<Complex> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex {
        Complex::new(rng.sample(self), rng.sample(self))
    }
}

impl Distribution<Complex> for StandardUnitary {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex {
        // Hit or retry on the unit disc, then normalize. This needs a
        // variable amount of random numbers but no trigonometry.
        loop {
            let a = Complex::new(
                rng.sample::<f64, _>(StandardUniform) * 2.0 - 1.0,
                rng.sample::<f64, _>(StandardUniform) * 2.0 - 1.0,
            );
            let n = a.abs_sqr();
            // true with a chance of 79% (99% after 3 tries)
            if n != 0.0 && n < 1.0 {
                return a / float::sqrt(n);
            }
        }
    }
}

impl Distribution<Complex> for StandardNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex {
        // Box-Muller transform, see
        // https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform
        // with the phase drawn from StandardUnitary.
        // Random number in range (0, 1].
        let x = 1.0 - rng.sample::<f64, _>(StandardUniform);
        rng.sample::<Complex, _>(StandardUnitary) * float::sqrt(-2.0 * float::ln(x))
    }
}
