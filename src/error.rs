//// #### Errors
////
//// Every fallible operation in this crate reports one of three things going wrong:
////
////   - a value that can't be a bit-vector at all (a negative number)
////   - a bit index past the end of a vector
////   - an operand that was promised to be in `GF(2^8)` but wasn't
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("bit index {index} out of range for bit length {bit_length}")]
  IndexOutOfRange { index: usize, bit_length: usize },

  #[error("invariant violation: {0}")]
  InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
