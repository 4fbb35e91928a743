//! Math utilities for std/no-std compatibility

#[cfg(feature = "no-std")]
use libm;

/// Natural logarithm.
#[inline]
pub fn ln(val: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        val.ln()
    }
    #[cfg(feature = "no-std")]
    {
        libm::log(val)
    }
}

/// `e^val`.
#[inline]
pub fn exp(val: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        val.exp()
    }
    #[cfg(feature = "no-std")]
    {
        libm::exp(val)
    }
}
