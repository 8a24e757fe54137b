use crate::{Coeff, Term};

// Bring an arbitrary list of terms into canonical form: strictly
// descending powers, no vanishing coefficients
pub(crate) fn canonicalize<C: Coeff>(terms: &mut Vec<Term<C>>) {
    terms.sort_by(Term::cmp_power);
    group_up(terms);
    purify(terms);
    debug_assert!(is_canonical(terms));
}

// Merge adjacent terms with equal powers. Requires sorted input.
pub(crate) fn group_up<C: Coeff>(terms: &mut Vec<Term<C>>) {
    terms.dedup_by(|next, prev| {
        if next.power == prev.power {
            prev.multiplier = prev.multiplier + next.multiplier;
            true
        } else {
            false
        }
    });
}

pub(crate) fn purify<C: Coeff>(terms: &mut Vec<Term<C>>) {
    terms.retain(|t| !t.is_zero())
}

pub(crate) fn is_canonical<C: Coeff>(terms: &[Term<C>]) -> bool {
    terms.iter().all(|t| !t.is_zero())
        && terms.windows(2).all(|w| w[0].power > w[1].power)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tst_canonicalize() {
        let mut terms = vec![
            Term::new(1., 0),
            Term::new(2., 3),
            Term::new(-1., 0),
            Term::new(0., 7),
            Term::new(4., 3),
            Term::new(5., 1),
        ];
        canonicalize(&mut terms);
        assert_eq!(terms, vec![Term::new(6., 3), Term::new(5., 1)]);

        let mut terms: Vec<Term> = vec![];
        canonicalize(&mut terms);
        assert!(terms.is_empty());
    }

    #[test]
    fn tst_group_up() {
        let mut terms = vec![
            Term::new(1., 2),
            Term::new(2., 2),
            Term::new(3., 2),
            Term::new(1., 1),
        ];
        group_up(&mut terms);
        assert_eq!(terms, vec![Term::new(6., 2), Term::new(1., 1)]);
    }

    #[test]
    fn tst_is_canonical() {
        assert!(is_canonical::<f64>(&[]));
        assert!(is_canonical(&[Term::new(1., 2), Term::new(1., 0)]));
        assert!(!is_canonical(&[Term::new(1., 0), Term::new(1., 2)]));
        assert!(!is_canonical(&[Term::new(1., 2), Term::new(1., 2)]));
        assert!(!is_canonical(&[Term::new(0., 2)]));
    }
}
