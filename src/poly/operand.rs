use crate::error::{PolyError, Result, err};
use super::{Polynomial, Term};

// The right-hand side of `try_add`, `try_sub` and `try_mul`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand<'a> {
    Poly(Option<&'a Polynomial>),
    Term(Term),
}

impl<'a> Operand<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Operand::Poly(None))
    }

    fn apply<F, G>(self, on_poly: F, on_term: G) -> Result<Polynomial>
    where
        F: FnOnce(&Polynomial) -> Polynomial,
        G: FnOnce(Term) -> Polynomial
    {
        match self {
            Operand::Poly(Some(p)) => Ok(on_poly(p)),
            Operand::Poly(None) => err!(PolyError::NullArgument),
            Operand::Term(t) => Ok(on_term(t)),
        }
    }
}

impl<'a> From<&'a Polynomial> for Operand<'a> {
    fn from(p: &'a Polynomial) -> Self {
        Operand::Poly(Some(p))
    }
}

impl<'a> From<Option<&'a Polynomial>> for Operand<'a> {
    fn from(p: Option<&'a Polynomial>) -> Self {
        Operand::Poly(p)
    }
}

impl From<Term> for Operand<'_> {
    fn from(t: Term) -> Self {
        Operand::Term(t)
    }
}

impl From<(f64, f64)> for Operand<'_> {
    fn from(pair: (f64, f64)) -> Self {
        Operand::Term(Term::from(pair))
    }
}

impl Polynomial {
    pub fn try_add<'a, O>(&self, rhs: O) -> Result<Polynomial>
    where O: Into<Operand<'a>> {
        let rhs: Operand = rhs.into();
        rhs.apply(|p| self + p, |t| self + t)
    }

    pub fn try_sub<'a, O>(&self, rhs: O) -> Result<Polynomial>
    where O: Into<Operand<'a>> {
        let rhs: Operand = rhs.into();
        rhs.apply(|p| self - p, |t| self - t)
    }

    pub fn try_mul<'a, O>(&self, rhs: O) -> Result<Polynomial>
    where O: Into<Operand<'a>> {
        let rhs: Operand = rhs.into();
        rhs.apply(|p| self * p, |t| self * t)
    }
}
