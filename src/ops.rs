use crate::{Coeff, Polynomial};

use num_traits::One;

/// Trait for powers
pub trait Pow<T> {
    type Output;

    fn pow(self, exponent: T) -> Self::Output;
}

impl<C: Coeff> Pow<u32> for Polynomial<C> {
    type Output = Self;

    /// Raise a polynomial to a nonnegative integer power
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::{Polynomial, Pow};
    /// let p = Polynomial::new(vec![(1., 1), (1., 0)]);
    /// let res = Polynomial::new(vec![(1., 3), (3., 2), (3., 1), (1., 0)]);
    /// assert_eq!(p.pow(3), res);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the degree of the result exceeds `u32::MAX`.
    fn pow(self, exponent: u32) -> Self::Output {
        let mut res = Polynomial::<C>::one();
        let mut base = self;
        let mut exp = exponent;
        while exp > 0 {
            if exp & 1 == 1 {
                res = res.mul_poly(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul_poly(&base);
            }
        }
        res
    }
}

impl<'a, C: Coeff> Pow<u32> for &'a Polynomial<C> {
    type Output = Polynomial<C>;

    fn pow(self, exponent: u32) -> Self::Output {
        self.clone().pow(exponent)
    }
}
