use derive_more::Display;

#[derive(Clone, Copy, Debug, PartialEq, Display)]
pub enum InvalidTerm {
    #[display("coefficient is zero (degree: {degree})")]
    ZeroCoefficient { degree: f64 },

    #[display("degree {degree} already exists")]
    DuplicateDegree { degree: f64 },
}

impl std::error::Error for InvalidTerm {}

#[derive(Clone, Copy, Debug, PartialEq, Display)]
pub enum PolyError {
    #[display("required argument is missing")]
    NullArgument,

    #[display("invalid argument: {_0}")]
    InvalidArgument(InvalidTerm),
}

impl std::error::Error for PolyError {}

impl From<InvalidTerm> for PolyError {
    fn from(e: InvalidTerm) -> Self {
        PolyError::InvalidArgument(e)
    }
}

pub type Result<T> = std::result::Result<T, PolyError>;

macro_rules! err {
    ($e:expr) => {{
        use crate::error::*;
        let e: PolyError = $e.into();
        Err(e)
    }}
}

macro_rules! ensure {
    ($cond:expr, $e:expr) => {{
        if !$cond {
            return err!($e);
        }
    }}
}

pub(crate) use {err, ensure};

#[cfg(test)]
mod tests {
    use super::*;

    fn check(d: f64) -> Result<f64> {
        ensure!(d >= 0.0, InvalidTerm::ZeroCoefficient { degree: d });
        Ok(d)
    }

    #[test]
    fn display() {
        let e = PolyError::NullArgument;
        assert_eq!(e.to_string(), "required argument is missing");

        let e = PolyError::from(InvalidTerm::DuplicateDegree { degree: 2.0 });
        assert_eq!(e.to_string(), "invalid argument: degree 2 already exists");

        let e = PolyError::from(InvalidTerm::ZeroCoefficient { degree: 0.5 });
        assert_eq!(e.to_string(), "invalid argument: coefficient is zero (degree: 0.5)");
    }

    #[test]
    fn ensure_macro() {
        assert_eq!(check(1.0), Ok(1.0));
        assert_eq!(
            check(-1.0),
            Err(PolyError::InvalidArgument(InvalidTerm::ZeroCoefficient { degree: -1.0 }))
        );
    }
}
