use crate::util::{canonicalize, is_canonical};
use crate::{Coeff, IntoIter, Iter, Term};

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::{One, Zero};

/// Sparse polynomial in a single variable
///
/// Terms are kept in canonical order: strictly descending powers,
/// with no vanishing coefficients. The zero polynomial has no terms.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<Term<C>>",
        into = "Vec<Term<C>>",
        bound(
            serialize = "C: serde::Serialize",
            deserialize = "C: serde::Deserialize<'de>"
        )
    )
)]
#[derive(PartialEq, Debug, Clone)]
pub struct Polynomial<C: Coeff = f64> {
    pub(crate) terms: Vec<Term<C>>,
}

impl<C: Coeff> Polynomial<C> {
    /// Create a new polynomial from `(coefficient, power)` pairs
    ///
    /// The pairs can come in any order. Coefficients of equal powers
    /// are added up and vanishing terms are dropped.
    ///
    /// # Example
    ///
    /// This creates the polynomial 3*x^2 - 5*x + 7
    /// ```rust
    /// let p = sparse_poly::Polynomial::new(vec![(7., 0), (-5., 1), (3., 2)]);
    /// assert_eq!(p.to_string(), "3x^2 - 5x + 7");
    ///
    /// let p = sparse_poly::Polynomial::new(vec![(1., 1), (2., 1), (-3., 1)]);
    /// assert!(p.is_zero());
    /// ```
    pub fn new<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (C, u32)>,
    {
        Self::from_terms(terms.into_iter().map(Term::from))
    }

    /// Create a new polynomial from a collection of terms
    ///
    /// Same as [Polynomial::new], but for [Term] input.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term<C>>,
    {
        let mut terms: Vec<_> = terms.into_iter().collect();
        canonicalize(&mut terms);
        Self { terms }
    }

    fn from_canonical(terms: Vec<Term<C>>) -> Self {
        debug_assert!(is_canonical(&terms));
        Self { terms }
    }

    /// The constant polynomial `c`
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let p = Polynomial::constant(2.5);
    /// assert_eq!(p, Polynomial::new(vec![(2.5, 0)]));
    /// assert!(Polynomial::constant(0.).is_zero());
    /// ```
    pub fn constant(c: C) -> Self {
        Self::new(std::iter::once((c, 0)))
    }

    /// Get the highest power with a non-vanishing coefficient
    ///
    /// For the zero polynomial this is 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let p = Polynomial::new(vec![(1., 4), (2., 0)]);
    /// assert_eq!(p.degree(), 4);
    /// assert_eq!(Polynomial::<f64>::new(vec![]).degree(), 0);
    /// ```
    pub fn degree(&self) -> u32 {
        self.terms.first().map(|t| t.power).unwrap_or(0)
    }

    /// Number of non-vanishing terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the polynomial is zero
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The term with the highest power, if any
    pub fn leading_term(&self) -> Option<&Term<C>> {
        self.terms.first()
    }

    /// The terms in canonical order
    pub fn terms(&self) -> &[Term<C>] {
        &self.terms
    }

    /// Iterator over the terms, highest power first
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::{Polynomial, Term};
    /// let p = Polynomial::new(vec![(1., 0), (3., 5)]);
    /// let mut iter = p.iter();
    /// assert_eq!(iter.next(), Some(&Term::new(3., 5)));
    /// assert_eq!(iter.next(), Some(&Term::new(1., 0)));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, C> {
        self.terms.iter()
    }

    fn find(&self, power: u32) -> Result<usize, usize> {
        self.terms.binary_search_by(|t| power.cmp(&t.power))
    }

    /// Get the coefficient of the variable to the given power
    ///
    /// # Example
    ///
    /// ```rust
    /// let p = sparse_poly::Polynomial::new(vec![(3., 2), (7., 0)]);
    /// assert_eq!(p.coeff(2), 3.);
    /// assert_eq!(p.coeff(1), 0.);
    /// assert_eq!(p.coeff(0), 7.);
    /// assert_eq!(p.coeff(10), 0.);
    /// ```
    pub fn coeff(&self, power: u32) -> C {
        match self.find(power) {
            Ok(idx) => self.terms[idx].multiplier,
            Err(_) => C::zero(),
        }
    }

    /// Set the coefficient of the variable to the given power
    ///
    /// Setting a coefficient to zero removes the corresponding term.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let mut p = Polynomial::new(vec![(1., 2)]);
    /// p.set_coeff(0, 4.);
    /// assert_eq!(p, Polynomial::new(vec![(1., 2), (4., 0)]));
    /// p.set_coeff(2, 0.);
    /// assert_eq!(p, Polynomial::new(vec![(4., 0)]));
    /// ```
    pub fn set_coeff(&mut self, power: u32, value: C) {
        match self.find(power) {
            Ok(idx) => {
                if value.is_zero() {
                    self.terms.remove(idx);
                } else {
                    self.terms[idx].multiplier = value;
                }
            }
            Err(idx) => {
                if !value.is_zero() {
                    self.terms.insert(idx, Term::new(value, power));
                }
            }
        }
        debug_assert!(is_canonical(&self.terms));
    }

    /// Return the polynomial with one coefficient replaced
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let p = Polynomial::new(vec![(1., 2)]).with_coeff(1, 5.);
    /// assert_eq!(p, Polynomial::new(vec![(1., 2), (5., 1)]));
    /// ```
    pub fn with_coeff(mut self, power: u32, value: C) -> Self {
        self.set_coeff(power, value);
        self
    }

    /// Compute `self + other`
    pub fn add_poly(&self, other: &Polynomial<C>) -> Self {
        let mut res = self.clone();
        res += other;
        res
    }

    /// Compute `self - other`
    pub fn sub_poly(&self, other: &Polynomial<C>) -> Self {
        self.add_poly(&other.scale(-C::one()))
    }

    /// Multiply each term by a factor
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let p = Polynomial::new(vec![(1., 2), (-3., 0)]);
    /// assert_eq!(p.scale(2.), Polynomial::new(vec![(2., 2), (-6., 0)]));
    /// assert!(p.scale(0.).is_zero());
    /// ```
    pub fn scale(&self, factor: C) -> Self {
        if factor.is_zero() {
            return Self::zero();
        }
        Self::from_terms(
            self.terms
                .iter()
                .map(|t| Term::new(t.multiplier * factor, t.power)),
        )
    }

    /// Divide each term by a factor
    ///
    /// Division by zero is not an error; the coefficients become
    /// infinite or NaN following the usual floating-point rules.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let p = Polynomial::new(vec![(1., 2), (-3., 0)]);
    /// assert_eq!(p.div_scalar(2.), Polynomial::new(vec![(0.5, 2), (-1.5, 0)]));
    /// ```
    pub fn div_scalar(&self, divisor: C) -> Self {
        self.scale(C::one() / divisor)
    }

    /// Multiply by a single monomial
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::{Polynomial, Term};
    /// let p = Polynomial::new(vec![(1., 2), (-3., 0)]);
    /// let res = Polynomial::new(vec![(2., 3), (-6., 1)]);
    /// assert_eq!(p.mul_term(Term::new(2., 1)), res);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if a power of the product exceeds `u32::MAX`.
    pub fn mul_term(&self, term: Term<C>) -> Self {
        if term.is_zero() {
            return Self::zero();
        }
        Self::from_terms(self.terms.iter().map(|t| t.times(&term)))
    }

    /// Compute the product `self * other`
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let p = Polynomial::new(vec![(2., 1), (1., 0)]);
    /// let q = Polynomial::new(vec![(1., 1), (-1., 0)]);
    /// let res = Polynomial::new(vec![(2., 2), (-1., 1), (-1., 0)]);
    /// assert_eq!(p.mul_poly(&q), res);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if a power of the product exceeds `u32::MAX`.
    pub fn mul_poly(&self, other: &Polynomial<C>) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        if let [t] = self.terms.as_slice() {
            trace!("product with monomial of {} terms", other.len());
            return other.mul_term(*t);
        }
        if let [t] = other.terms.as_slice() {
            trace!("product with monomial of {} terms", self.len());
            return self.mul_term(*t);
        }
        trace!(
            "product of polynomials with {} and {} terms",
            self.len(),
            other.len()
        );
        let mut terms = Vec::with_capacity(self.len() * other.len());
        for a in &self.terms {
            terms.extend(other.terms.iter().map(|b| a.times(b)));
        }
        canonicalize(&mut terms);
        Self::from_canonical(terms)
    }

    /// Evaluate the polynomial at `x`
    ///
    /// # Example
    ///
    /// ```rust
    /// let p = sparse_poly::Polynomial::new(vec![(3., 2), (-5., 1), (7., 0)]);
    /// assert_eq!(p.eval(2.), 9.);
    /// ```
    pub fn eval(&self, x: C) -> C {
        let mut res = C::zero();
        let mut pow = self.degree();
        for t in &self.terms {
            res = res * num_traits::pow(x, (pow - t.power) as usize)
                + t.multiplier;
            pow = t.power;
        }
        res * num_traits::pow(x, pow as usize)
    }
}

impl<C: Coeff + fmt::Display> fmt::Display for Polynomial<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut terms = self.terms.iter();
        let first = match terms.next() {
            Some(first) => first,
            None => return fmt::Display::fmt(&C::zero(), f),
        };
        fmt::Display::fmt(first, f)?;
        for t in terms {
            let sign = if t.multiplier.is_sign_negative() {
                '-'
            } else {
                '+'
            };
            write!(f, " {} ", sign)?;
            fmt::Display::fmt(&t.unsigned(), f)?;
        }
        Ok(())
    }
}

impl<C: Coeff> From<Vec<Term<C>>> for Polynomial<C> {
    fn from(terms: Vec<Term<C>>) -> Self {
        Self::from_terms(terms)
    }
}

impl<C: Coeff> From<Polynomial<C>> for Vec<Term<C>> {
    fn from(p: Polynomial<C>) -> Self {
        p.terms
    }
}

impl<C: Coeff> FromIterator<Term<C>> for Polynomial<C> {
    fn from_iter<I: IntoIterator<Item = Term<C>>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl<C: Coeff> FromIterator<(C, u32)> for Polynomial<C> {
    fn from_iter<I: IntoIterator<Item = (C, u32)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<C: Coeff> std::iter::IntoIterator for Polynomial<C> {
    type Item = Term<C>;
    type IntoIter = IntoIter<C>;

    /// Consuming iterator over the terms, highest power first
    fn into_iter(self) -> IntoIter<C> {
        self.terms.into_iter()
    }
}

impl<'a, C: Coeff> std::iter::IntoIterator for &'a Polynomial<C> {
    type Item = &'a Term<C>;
    type IntoIter = Iter<'a, C>;

    fn into_iter(self) -> Iter<'a, C> {
        self.iter()
    }
}

impl<C: Coeff> Neg for Polynomial<C> {
    type Output = Polynomial<C>;

    /// Compute -p for a polynomial p
    ///
    /// # Example
    ///
    /// ```rust
    /// let p = sparse_poly::Polynomial::new(vec![(1., 2), (-3., 0)]);
    /// let minus_p = sparse_poly::Polynomial::new(vec![(-1., 2), (3., 0)]);
    /// assert_eq!(-p, minus_p);
    /// ```
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a, C: Coeff> Neg for &'a Polynomial<C> {
    type Output = Polynomial<C>;

    fn neg(self) -> Self::Output {
        self.scale(-C::one())
    }
}

impl<'a, C: Coeff> AddAssign<&'a Polynomial<C>> for Polynomial<C> {
    /// Set p = p + q for two polynomials p and q
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let mut p = Polynomial::new(vec![(1., 2), (-3., 0)]);
    /// let q = Polynomial::new(vec![(3., 0), (4., 1)]);
    /// p += &q;
    /// assert_eq!(p, Polynomial::new(vec![(1., 2), (4., 1)]));
    /// ```
    fn add_assign(&mut self, other: &'a Polynomial<C>) {
        self.terms.extend_from_slice(&other.terms);
        canonicalize(&mut self.terms);
    }
}

impl<C: Coeff> AddAssign<Polynomial<C>> for Polynomial<C> {
    fn add_assign(&mut self, other: Polynomial<C>) {
        self.terms.extend(other.terms);
        canonicalize(&mut self.terms);
    }
}

impl<C: Coeff> AddAssign<C> for Polynomial<C> {
    /// Add a constant
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let mut p = Polynomial::new(vec![(1., 2), (-3., 0)]);
    /// p += 3.;
    /// assert_eq!(p, Polynomial::new(vec![(1., 2)]));
    /// ```
    fn add_assign(&mut self, other: C) {
        let c = self.coeff(0) + other;
        self.set_coeff(0, c);
    }
}

impl<C: Coeff, Rhs> Add<Rhs> for Polynomial<C>
where
    Polynomial<C>: AddAssign<Rhs>,
{
    type Output = Polynomial<C>;

    fn add(mut self, other: Rhs) -> Self::Output {
        self += other;
        self
    }
}

impl<'a, C: Coeff, Rhs> Add<Rhs> for &'a Polynomial<C>
where
    Polynomial<C>: AddAssign<Rhs>,
{
    type Output = Polynomial<C>;

    fn add(self, other: Rhs) -> Self::Output {
        self.clone() + other
    }
}

impl<'a, C: Coeff> SubAssign<&'a Polynomial<C>> for Polynomial<C> {
    /// Set p = p - q for two polynomials p and q
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let mut p = Polynomial::new(vec![(1., 2), (-3., 0)]);
    /// p -= &p.clone();
    /// assert!(p.is_zero());
    /// ```
    fn sub_assign(&mut self, other: &'a Polynomial<C>) {
        *self += -other;
    }
}

impl<C: Coeff> SubAssign<Polynomial<C>> for Polynomial<C> {
    fn sub_assign(&mut self, other: Polynomial<C>) {
        *self += -other;
    }
}

impl<C: Coeff> SubAssign<C> for Polynomial<C> {
    fn sub_assign(&mut self, other: C) {
        *self += -other;
    }
}

impl<C: Coeff, Rhs> Sub<Rhs> for Polynomial<C>
where
    Polynomial<C>: SubAssign<Rhs>,
{
    type Output = Polynomial<C>;

    fn sub(mut self, other: Rhs) -> Self::Output {
        self -= other;
        self
    }
}

impl<'a, C: Coeff, Rhs> Sub<Rhs> for &'a Polynomial<C>
where
    Polynomial<C>: SubAssign<Rhs>,
{
    type Output = Polynomial<C>;

    fn sub(self, other: Rhs) -> Self::Output {
        self.clone() - other
    }
}

impl<'a, C: Coeff> MulAssign<&'a Polynomial<C>> for Polynomial<C> {
    /// Set p = p * q for two polynomials p and q
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let mut p = Polynomial::new(vec![(1., 1), (1., 0)]);
    /// p *= &p.clone();
    /// assert_eq!(p, Polynomial::new(vec![(1., 2), (2., 1), (1., 0)]));
    /// ```
    fn mul_assign(&mut self, other: &'a Polynomial<C>) {
        *self = self.mul_poly(other);
    }
}

impl<C: Coeff> MulAssign<Polynomial<C>> for Polynomial<C> {
    fn mul_assign(&mut self, other: Polynomial<C>) {
        *self *= &other
    }
}

impl<C: Coeff> MulAssign<Term<C>> for Polynomial<C> {
    fn mul_assign(&mut self, other: Term<C>) {
        *self = self.mul_term(other);
    }
}

impl<C: Coeff> MulAssign<C> for Polynomial<C> {
    /// Multiply each term by a factor
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let mut p = Polynomial::new(vec![(1., 2), (-3., 0)]);
    /// p *= 2.;
    /// assert_eq!(p, Polynomial::new(vec![(2., 2), (-6., 0)]));
    /// ```
    fn mul_assign(&mut self, other: C) {
        *self = self.scale(other);
    }
}

impl<C: Coeff, Rhs> Mul<Rhs> for Polynomial<C>
where
    Polynomial<C>: MulAssign<Rhs>,
{
    type Output = Polynomial<C>;

    fn mul(mut self, other: Rhs) -> Self::Output {
        self *= other;
        self
    }
}

impl<'a, 'b, C: Coeff> Mul<&'b Polynomial<C>> for &'a Polynomial<C> {
    type Output = Polynomial<C>;

    fn mul(self, other: &'b Polynomial<C>) -> Self::Output {
        self.mul_poly(other)
    }
}

impl<'a, C: Coeff> Mul<Polynomial<C>> for &'a Polynomial<C> {
    type Output = Polynomial<C>;

    fn mul(self, other: Polynomial<C>) -> Self::Output {
        self.mul_poly(&other)
    }
}

impl<'a, C: Coeff> Mul<Term<C>> for &'a Polynomial<C> {
    type Output = Polynomial<C>;

    fn mul(self, other: Term<C>) -> Self::Output {
        self.mul_term(other)
    }
}

impl<'a, C: Coeff> Mul<C> for &'a Polynomial<C> {
    type Output = Polynomial<C>;

    fn mul(self, other: C) -> Self::Output {
        self.scale(other)
    }
}

impl<C: Coeff> DivAssign<C> for Polynomial<C> {
    /// Divide each term by a factor
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let mut p = Polynomial::new(vec![(1., 2), (-3., 0)]);
    /// p /= 2.;
    /// assert_eq!(p, Polynomial::new(vec![(0.5, 2), (-1.5, 0)]));
    /// ```
    fn div_assign(&mut self, other: C) {
        *self = self.div_scalar(other);
    }
}

impl<C: Coeff> Div<C> for Polynomial<C> {
    type Output = Polynomial<C>;

    fn div(mut self, other: C) -> Self::Output {
        self /= other;
        self
    }
}

impl<'a, C: Coeff> Div<C> for &'a Polynomial<C> {
    type Output = Polynomial<C>;

    fn div(self, other: C) -> Self::Output {
        self.div_scalar(other)
    }
}

macro_rules! impl_scalar_lhs {
    ( $( $t:ty ),* ) => {
        $(
            impl Mul<Polynomial<$t>> for $t {
                type Output = Polynomial<$t>;

                fn mul(self, other: Polynomial<$t>) -> Self::Output {
                    other.scale(self)
                }
            }

            impl<'a> Mul<&'a Polynomial<$t>> for $t {
                type Output = Polynomial<$t>;

                fn mul(self, other: &'a Polynomial<$t>) -> Self::Output {
                    other.scale(self)
                }
            }

            impl Add<Polynomial<$t>> for $t {
                type Output = Polynomial<$t>;

                fn add(self, other: Polynomial<$t>) -> Self::Output {
                    other + self
                }
            }

            impl Sub<Polynomial<$t>> for $t {
                type Output = Polynomial<$t>;

                fn sub(self, other: Polynomial<$t>) -> Self::Output {
                    -other + self
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);

impl<C: Coeff> Sum for Polynomial<C> {
    fn sum<I: Iterator<Item = Polynomial<C>>>(iter: I) -> Self {
        Self::from_terms(iter.flat_map(|p| p.terms))
    }
}

impl<'a, C: Coeff> Sum<&'a Polynomial<C>> for Polynomial<C> {
    fn sum<I: Iterator<Item = &'a Polynomial<C>>>(iter: I) -> Self {
        Self::from_terms(iter.flat_map(|p| p.terms.iter().copied()))
    }
}

impl<C: Coeff> Product for Polynomial<C> {
    fn product<I: Iterator<Item = Polynomial<C>>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, p| acc * p)
    }
}

impl<C: Coeff> Zero for Polynomial<C> {
    fn zero() -> Self {
        Self { terms: vec![] }
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<C: Coeff> One for Polynomial<C> {
    fn one() -> Self {
        Self::constant(C::one())
    }

    fn is_one(&self) -> bool {
        matches!(self.terms.as_slice(), [t] if t.power == 0 && t.multiplier.is_one())
    }
}
