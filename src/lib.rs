//// ### Galois field arithmetic, one layer at a time
////
//// Three layers, each built on the one below:
////
////   - `bit_vector`: a non-negative integer viewed as a list of bits
////   - `gf_2_x`: polynomials over `GF(2)` of any degree (add = XOR, multiply = shift-and-XOR)
////   - `gf_256`: the field `GF(2^8)`, reducing every result by `x^8 + x^4 + x^3 + x + 1`
pub mod bit_vector;
pub mod error;
pub mod field;
pub mod gf_256;
pub mod gf_2_x;

pub use bit_vector::{BitVector, Bits};
pub use error::{Error, Result};
pub use field::{BinaryPolynomial, Notation, Polynomial};
pub use gf_256::{Field8Element, FIELD_BITS, HEX_DIGITS, REDUCTION_POLY};
pub use gf_2_x::FieldElement;
