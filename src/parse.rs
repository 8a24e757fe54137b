//! Reading polynomials from text
//!
//! A pattern is a sequence of terms like `3x^2`, `-x`, or `+7`. Each
//! term may start with a sign, followed by an optional decimal
//! coefficient and an optional `x`, which in turn can carry an integer
//! exponent `^n`. Whitespace is ignored everywhere. Repeated powers
//! are added up, so `x + x` reads as `2x`.
use crate::error::{ParseError, Result};
use crate::{Coeff, Polynomial, Term, POW, VAR};

use std::iter;
use std::str::FromStr;

impl<C: Coeff + FromStr> Polynomial<C> {
    /// Parse a polynomial
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_poly::Polynomial;
    /// let p: Polynomial = Polynomial::parse("3x^2 - 5x + 7").unwrap();
    /// assert_eq!(p, Polynomial::new(vec![(3., 2), (-5., 1), (7., 0)]));
    ///
    /// assert!(Polynomial::<f64>::parse("x^").is_err());
    /// ```
    pub fn parse(pattern: &str) -> Result<Self> {
        parse_terms(pattern).map(Self::from_terms)
    }
}

impl<C: Coeff + FromStr> FromStr for Polynomial<C> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Split a pattern into its terms
///
/// The terms are returned in the order they appear, without merging
/// equal powers or removing vanishing coefficients.
///
/// # Example
///
/// ```rust
/// use sparse_poly::{parse::parse_terms, Term};
/// let terms = parse_terms::<f64>("x - 2 + x").unwrap();
/// assert_eq!(terms, vec![Term::new(1., 1), Term::new(-2., 0), Term::new(1., 1)]);
/// ```
pub fn parse_terms<C: Coeff + FromStr>(pattern: &str) -> Result<Vec<Term<C>>> {
    let pattern: String =
        pattern.chars().filter(|c| !c.is_whitespace()).collect();
    if pattern.is_empty() {
        debug!("refusing to parse empty polynomial pattern");
        return Err(ParseError::Empty);
    }
    let mut starts: Vec<usize> = pattern
        .char_indices()
        .filter(|&(_, c)| is_sign(c))
        .map(|(pos, _)| pos)
        .collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }
    let ends = starts.iter().skip(1).copied().chain(iter::once(pattern.len()));
    let terms = starts
        .iter()
        .zip(ends)
        .map(|(&start, end)| parse_term(&pattern, start, end))
        .collect::<Result<Vec<_>>>()
        .map_err(|err| {
            debug!("failed to parse '{}': {}", pattern, err);
            err
        })?;
    trace!("parsed {} terms from '{}'", terms.len(), pattern);
    Ok(terms)
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

// Parse the single term in `pattern[start..end]`
fn parse_term<C: Coeff + FromStr>(
    pattern: &str,
    start: usize,
    end: usize,
) -> Result<Term<C>> {
    let mut cursor = Cursor {
        pattern,
        pos: start,
        end,
    };
    let mut multiplier = C::one();
    if cursor.eat('-') {
        multiplier = -multiplier;
    } else {
        cursor.eat('+');
    }

    let (num_start, num_end) =
        cursor.take_while(|c| c.is_ascii_digit() || c == '.');
    if num_end > num_start {
        let token = &pattern[num_start..num_end];
        let value: C =
            token.parse().map_err(|_| ParseError::MalformedNumber {
                start: num_start,
                end: num_end,
                token: token.to_owned(),
            })?;
        multiplier = multiplier * value;
    }

    let mut power = 0;
    if cursor.eat(VAR) {
        power = 1;
        if cursor.eat(POW) {
            let (exp_start, exp_end) = cursor.take_while(|c| c.is_ascii_digit());
            if exp_end == exp_start {
                return Err(ParseError::MissingExponent { pos: exp_start });
            }
            let token = &pattern[exp_start..exp_end];
            power = token.parse().map_err(|_| ParseError::ExponentOverflow {
                start: exp_start,
                end: exp_end,
                token: token.to_owned(),
            })?;
        }
    }

    if let Some(ch) = cursor.peek() {
        return Err(ParseError::UnexpectedChar {
            pos: cursor.pos,
            ch,
        });
    }
    Ok(Term::new(multiplier, power))
}

struct Cursor<'a> {
    pattern: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.pattern[self.pos..self.end].chars().next()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn take_while<F: Fn(char) -> bool>(&mut self, accept: F) -> (usize, usize) {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !accept(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        (start, self.pos)
    }
}
