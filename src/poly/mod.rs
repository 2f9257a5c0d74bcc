mod term;
mod poly;
mod ops;
mod operand;

pub use term::Term;
pub use poly::Polynomial;
pub use operand::Operand;
