//! Sparse polynomials in a single variable
//!
//! A [Polynomial] is stored as a list of [Term]s `c*x^p` with strictly
//! descending powers and non-vanishing coefficients. Polynomials can
//! be built from `(coefficient, power)` pairs or parsed from text, and
//! support the usual arithmetic.
//!
//! # Example
//!
//! ```rust
//! use sparse_poly::Polynomial;
//!
//! let p: Polynomial = "2x + 1".parse().unwrap();
//! let q: Polynomial = "x - 1".parse().unwrap();
//! assert_eq!((&p * &q).to_string(), "2x^2 - x - 1");
//! assert_eq!(p.coeff(1), 2.);
//! ```
#![allow(clippy::suspicious_op_assign_impl)]
#![allow(clippy::len_without_is_empty)]
extern crate num_traits;
#[macro_use]
extern crate log;

pub mod error;
pub mod ops;
pub mod parse;
pub mod poly;
pub mod term;
pub use self::error::{ParseError, Result};
pub use self::ops::Pow;
pub use self::poly::Polynomial;
pub use self::term::{Term, Unsigned};
mod util;

use num_traits::Float;

/// Minimum requirements on polynomial coefficients
pub trait Coeff: Float {}
impl<T: Float> Coeff for T {}

/// The polynomial variable in text form
pub const VAR: char = 'x';
/// Marks the exponent of the variable in text form
pub const POW: char = '^';

/// Immutable `Polynomial` iterator.
///
/// This `struct` is created by the `iter` method on `Polynomial`
pub type Iter<'a, C> = std::slice::Iter<'a, Term<C>>;
/// An iterator that moves out of a polynomial.
///
/// This `struct` is created by the `into_iter` method on `Polynomial`
pub type IntoIter<C> = std::vec::IntoIter<Term<C>>;
