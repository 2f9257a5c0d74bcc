use std::fmt::{Display, Debug};
use std::ops::Index;
use delegate::delegate;
use itertools::Itertools;
use log::debug;

use crate::error::{PolyError, InvalidTerm, Result, ensure, err};
use crate::util::format::{fmt_mono, lc};
use super::Term;

// A sparse polynomial Σ c_i x^{d_i} with real degrees. Terms are kept in
// insertion order, at most one per degree (compared with exact `==`).

#[derive(Clone, Default)]
pub struct Polynomial {
    terms: Vec<Term>
}

impl Polynomial {
    pub fn new() -> Self {
        Self { terms: vec![] }
    }

    // Stores the given terms as they are: duplicate degrees and zero
    // coefficients are not rejected. See `try_from_terms`.
    pub fn from_terms<I, T>(iter: I) -> Self
    where I: IntoIterator<Item = T>, T: Into<Term> {
        let terms = iter.into_iter().map(|t| t.into()).collect();
        Self { terms }
    }

    pub fn try_from_terms<I, T>(iter: I) -> Result<Self>
    where I: IntoIterator<Item = T>, T: Into<Term> {
        let mut res = Self::new();
        for t in iter {
            res.add_member(t)?;
        }
        Ok(res)
    }

    delegate! {
        to self.terms {
            #[call(len)] pub fn count(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> impl Iterator<Item = &Term>;
            pub fn to_vec(&self) -> Vec<Term>;
            #[call(as_slice)] pub fn terms(&self) -> &[Term];
        }
    }

    // The largest degree, floored at 0.
    pub fn degree(&self) -> f64 {
        self.terms.iter().fold(0.0, |d, t|
            if t.degree >= d { t.degree } else { d }
        )
    }

    pub fn lead_term(&self) -> Option<&Term> {
        self.terms.iter().max_by(|t1, t2| t1.degree.total_cmp(&t2.degree))
    }

    pub fn sorted_terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter().sorted_by(|t1, t2| t2.degree.total_cmp(&t1.degree))
    }

    pub(crate) fn position(&self, degree: f64) -> Option<usize> {
        self.terms.iter().position(|t| t.degree == degree)
    }

    pub fn contains_member(&self, degree: f64) -> bool {
        self.position(degree).is_some()
    }

    pub fn find(&self, degree: f64) -> Option<&Term> {
        self.terms.iter().find(|t| t.degree == degree)
    }

    pub fn find_mut(&mut self, degree: f64) -> Option<&mut Term> {
        self.terms.iter_mut().find(|t| t.degree == degree)
    }

    pub fn add_member<T>(&mut self, term: T) -> Result<()>
    where T: Into<Term> {
        let term = term.into();
        if let Err(e) = self.check_member(&term) {
            debug!("reject {:?}: {e}", term.as_pair());
            return Err(e)
        }
        self.terms.push(term);
        Ok(())
    }

    pub fn add_member_opt(&mut self, term: Option<Term>) -> Result<()> {
        let Some(term) = term else {
            return err!(PolyError::NullArgument)
        };
        self.add_member(term)
    }

    fn check_member(&self, term: &Term) -> Result<()> {
        let degree = term.degree;
        ensure!(!term.is_zero(), InvalidTerm::ZeroCoefficient { degree });
        ensure!(!self.contains_member(degree), InvalidTerm::DuplicateDegree { degree });
        Ok(())
    }

    pub fn remove_member(&mut self, degree: f64) -> bool {
        if let Some(i) = self.position(degree) {
            self.terms.remove(i);
            true
        } else {
            false
        }
    }

    pub fn coeff(&self, degree: f64) -> f64 {
        self.find(degree).map(|t| t.coeff).unwrap_or(0.0)
    }

    // Setting zero removes the term(s) of that degree.
    pub fn set_coeff(&mut self, degree: f64, coeff: f64) {
        if coeff == 0.0 {
            self.terms.retain(|t| t.degree != degree);
        } else if let Some(t) = self.find_mut(degree) {
            t.coeff = coeff;
        } else {
            self.terms.push(Term::new(degree, coeff));
        }
    }

    pub(crate) fn terms_mut(&mut self) -> &mut Vec<Term> {
        &mut self.terms
    }

    pub fn to_string_with(&self, x: &str, descending: bool) -> String {
        let mut terms = self.sorted_terms().collect_vec();
        if !descending {
            terms.reverse();
        }
        lc(terms.into_iter().map(|t| (fmt_mono(x, t.degree), t.coeff)))
    }
}

impl From<Term> for Polynomial {
    fn from(t: Term) -> Self {
        Self { terms: vec![t] }
    }
}

impl From<(f64, f64)> for Polynomial {
    fn from(pair: (f64, f64)) -> Self {
        Self::from(Term::from(pair))
    }
}

impl From<Vec<Term>> for Polynomial {
    fn from(terms: Vec<Term>) -> Self {
        Self { terms }
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<T: IntoIterator<Item = Term>>(iter: T) -> Self {
        Self::from_terms(iter)
    }
}

impl FromIterator<(f64, f64)> for Polynomial {
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
        Self::from_terms(iter)
    }
}

impl IntoIterator for Polynomial {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl Index<f64> for Polynomial {
    type Output = f64;

    fn index(&self, degree: f64) -> &f64 {
        self.find(degree).map(|t| &t.coeff).unwrap_or(&0.0)
    }
}

// Equal as degree -> coefficient maps; order is ignored, and repeated
// degrees are summed first.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.merged(), other.merged());
        a.count() == b.count() && a.iter().all(|t| b.coeff(t.degree) == t.coeff)
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_with("x", true))
    }
}

impl Debug for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
