use crate::{Coeff, POW, VAR};

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

/// A single monomial `c*x^p`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Term<C: Coeff = f64> {
    pub(crate) multiplier: C,
    pub(crate) power: u32,
}

impl<C: Coeff> Term<C> {
    /// Create the monomial `multiplier*x^power`
    ///
    /// # Example
    ///
    /// ```rust
    /// let t = sparse_poly::Term::new(3., 2);
    /// assert_eq!(t.multiplier(), 3.);
    /// assert_eq!(t.power(), 2);
    /// ```
    pub fn new(multiplier: C, power: u32) -> Self {
        Self { multiplier, power }
    }

    /// The coefficient `c` of `c*x^p`
    pub fn multiplier(&self) -> C {
        self.multiplier
    }

    /// The power `p` of `c*x^p`
    pub fn power(&self) -> u32 {
        self.power
    }

    /// Check if the coefficient vanishes
    pub fn is_zero(&self) -> bool {
        self.multiplier.is_zero()
    }

    /// Compare the powers of two terms
    ///
    /// Higher powers come first, so sorting with this comparison
    /// yields the canonical polynomial order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use sparse_poly::Term;
    /// let t = Term::new(1., 3);
    /// let u = Term::new(5., 1);
    /// assert_eq!(t.cmp_power(&u), Ordering::Less);
    /// assert_eq!(u.cmp_power(&t), Ordering::Greater);
    /// assert_eq!(t.cmp_power(&Term::new(-2., 3)), Ordering::Equal);
    /// ```
    pub fn cmp_power(&self, other: &Self) -> Ordering {
        other.power.cmp(&self.power)
    }

    /// Evaluate the monomial at `x`
    ///
    /// # Example
    ///
    /// ```rust
    /// let t = sparse_poly::Term::new(3., 2);
    /// assert_eq!(t.eval(2.), 12.);
    /// ```
    pub fn eval(&self, x: C) -> C {
        self.multiplier * num_traits::pow(x, self.power as usize)
    }

    // Product of two monomials, panicking when the power leaves `u32`
    pub(crate) fn times(&self, other: &Self) -> Self {
        let power = match self.power.checked_add(other.power) {
            Some(power) => power,
            None => panic!(
                "power overflow in product of x^{} and x^{}",
                self.power, other.power
            ),
        };
        Self::new(self.multiplier * other.multiplier, power)
    }

    /// Render the term without its sign
    ///
    /// This is how all terms but the leading one are written out
    /// in a polynomial, preceded by an explicit `+` or `-`.
    ///
    /// # Example
    ///
    /// ```rust
    /// let t = sparse_poly::Term::new(-2.5, 3);
    /// assert_eq!(format!("{}", t), "-2.5x^3");
    /// assert_eq!(format!("{}", t.unsigned()), "2.5x^3");
    /// ```
    pub fn unsigned(&self) -> Unsigned<'_, C> {
        Unsigned(self)
    }
}

impl<C: Coeff> From<(C, u32)> for Term<C> {
    fn from((multiplier, power): (C, u32)) -> Self {
        Self::new(multiplier, power)
    }
}

impl<C: Coeff> From<Term<C>> for (C, u32) {
    fn from(t: Term<C>) -> Self {
        (t.multiplier, t.power)
    }
}

impl<C: Coeff> Neg for Term<C> {
    type Output = Term<C>;

    fn neg(self) -> Self::Output {
        Self::new(-self.multiplier, self.power)
    }
}

impl<C: Coeff + fmt::Display> fmt::Display for Term<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.multiplier.is_sign_negative() {
            write!(f, "-")?;
        }
        fmt::Display::fmt(&self.unsigned(), f)
    }
}

/// Display adapter for the magnitude of a term
///
/// Created by [Term::unsigned]. Formatting options such as precision
/// apply to the coefficient.
#[derive(Debug, Clone, Copy)]
pub struct Unsigned<'a, C: Coeff>(&'a Term<C>);

impl<'a, C: Coeff + fmt::Display> fmt::Display for Unsigned<'a, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let abs = self.0.multiplier.abs();
        let power = self.0.power;
        if power == 0 {
            return fmt::Display::fmt(&abs, f);
        }
        if !abs.is_one() {
            fmt::Display::fmt(&abs, f)?;
        }
        write!(f, "{}", VAR)?;
        if power != 1 {
            write!(f, "{}{}", POW, power)?;
        }
        Ok(())
    }
}
