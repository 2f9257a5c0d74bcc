use std::fmt::Display;
use std::ops::Neg;

use crate::util::format::{fmt_mono, lc};

// A single monomial c·x^d. Nothing is enforced here; the owning
// `Polynomial` keeps degrees unique and coefficients non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Term {
    pub degree: f64,
    pub coeff: f64,
}

impl Term {
    pub fn new(degree: f64, coeff: f64) -> Self {
        Self { degree, coeff }
    }

    pub fn is_zero(&self) -> bool {
        self.coeff == 0.0
    }

    pub fn as_pair(&self) -> (f64, f64) {
        (self.degree, self.coeff)
    }
}

impl From<(f64, f64)> for Term {
    fn from(pair: (f64, f64)) -> Self {
        let (degree, coeff) = pair;
        Self::new(degree, coeff)
    }
}

impl From<Term> for (f64, f64) {
    fn from(t: Term) -> Self {
        t.as_pair()
    }
}

impl Neg for Term {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(self.degree, -self.coeff)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let x = fmt_mono("x", self.degree);
        f.write_str(&lc([(x, self.coeff)].into_iter()))
    }
}
