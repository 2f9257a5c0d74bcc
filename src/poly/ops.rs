use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;
use log::trace;

use super::{Polynomial, Term};

impl Polynomial {
    // Folds c·x^d into the term of degree d. A term that cancels to zero
    // is removed.
    fn add_pair(&mut self, degree: f64, coeff: f64) {
        if coeff == 0.0 { return }

        match self.position(degree) {
            Some(i) => {
                let terms = self.terms_mut();
                terms[i].coeff += coeff;
                if terms[i].is_zero() {
                    terms.remove(i);
                }
            },
            None => self.terms_mut().push(Term::new(degree, coeff))
        }
    }

    fn sub_pair(&mut self, degree: f64, coeff: f64) {
        if coeff == 0.0 { return }

        match self.position(degree) {
            Some(i) => {
                let terms = self.terms_mut();
                terms[i].coeff -= coeff;
                if terms[i].is_zero() {
                    terms.remove(i);
                }
            },
            None => self.terms_mut().push(Term::new(degree, -coeff))
        }
    }

    // Multiplying by a zero term clears the whole polynomial.
    fn mul_pair(&mut self, degree: f64, coeff: f64) {
        let terms = self.terms_mut();

        if coeff == 0.0 {
            trace!("mul by zero term, clear {} terms.", terms.len());
            terms.clear();
            return
        }

        // shifted degrees may round onto each other, and products may
        // underflow to zero: fold everything back in.
        let shifted = std::mem::take(terms);
        for t in shifted {
            self.add_pair(t.degree + degree, t.coeff * coeff);
        }
    }

    // The same polynomial with repeated degrees combined and zero terms dropped.
    pub(crate) fn merged(&self) -> Polynomial {
        let mut res = Polynomial::new();
        for t in self.iter() {
            res.add_pair(t.degree, t.coeff);
        }
        res
    }
}

macro_rules! impl_term_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $pair_method:ident) => {
        impl $assign_trait<(f64, f64)> for Polynomial {
            fn $assign_method(&mut self, rhs: (f64, f64)) {
                let (degree, coeff) = rhs;
                self.$pair_method(degree, coeff)
            }
        }

        impl $assign_trait<Term> for Polynomial {
            fn $assign_method(&mut self, rhs: Term) {
                self.$pair_method(rhs.degree, rhs.coeff)
            }
        }

        // by value: the operand itself is updated and returned.
        impl $trait<(f64, f64)> for Polynomial {
            type Output = Polynomial;
            fn $method(mut self, rhs: (f64, f64)) -> Self::Output {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $trait<Term> for Polynomial {
            type Output = Polynomial;
            fn $method(mut self, rhs: Term) -> Self::Output {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $trait<(f64, f64)> for &Polynomial {
            type Output = Polynomial;
            fn $method(self, rhs: (f64, f64)) -> Self::Output {
                let mut res = self.clone();
                $assign_trait::$assign_method(&mut res, rhs);
                res
            }
        }

        impl $trait<Term> for &Polynomial {
            type Output = Polynomial;
            fn $method(self, rhs: Term) -> Self::Output {
                let mut res = self.clone();
                $assign_trait::$assign_method(&mut res, rhs);
                res
            }
        }
    };
}

impl_term_op!(Add, add, AddAssign, add_assign, add_pair);
impl_term_op!(Sub, sub, SubAssign, sub_assign, sub_pair);
impl_term_op!(Mul, mul, MulAssign, mul_assign, mul_pair);

// f + g: the terms of g are folded first, then those of f.
#[auto_ops]
impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        let mut res = Polynomial::new();
        for t in rhs.iter() {
            res.add_pair(t.degree, t.coeff);
        }
        for t in self.iter() {
            res.add_pair(t.degree, t.coeff);
        }
        res
    }
}

#[auto_ops]
impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut res = Polynomial::new();
        for t in rhs.iter() {
            res.sub_pair(t.degree, t.coeff);
        }
        for t in self.iter() {
            res.add_pair(t.degree, t.coeff);
        }
        res
    }
}

// f * g = Σ_{t ∈ f} g * t. Neither operand is modified.
#[auto_ops]
impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        trace!("mul: {} terms * {} terms.", self.count(), rhs.count());

        let mut res = Polynomial::new();
        for t in self.iter() {
            let p = rhs * (t.degree, t.coeff);
            res = &res + &p;
        }
        res
    }
}

impl Neg for Polynomial {
    type Output = Self;
    fn neg(mut self) -> Self::Output {
        for t in self.terms_mut().iter_mut() {
            t.coeff = -t.coeff;
        }
        self
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.iter().all(|t| t.is_zero())
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self::from((0.0, 1.0))
    }
}
