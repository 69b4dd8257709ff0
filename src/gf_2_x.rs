//// #### Polynomials over GF(2) of any degree
////
//// A `FieldElement` is a polynomial with bit coefficients and *no* degree limit. It is the
//// "any order" layer: addition and multiplication work, but nothing ever reduces the result.
//// `GF(2^8)` (in `src/gf_256.rs`) builds on top of this by adding the reduction step.
////
//// Coefficient `i` is bit `i` of the underlying `BitVector`:
////
//// ```text
//// x^7 + x^5 + x^3 + x^2 + x + 1   =>   1010_1111   =>   175
//// ```
use crate::bit_vector::BitVector;
use crate::error::{Error, Result};
use crate::field::{write_polynomial, BinaryPolynomial, Notation};
use num_bigint::{BigInt, BigUint};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(from = "BitVector", into = "BitVector")
)]
pub struct FieldElement {
  number: BitVector,
  degree_bound: usize,
}

impl FieldElement {
  /// Builds an element from anything that names a polynomial: an unsigned integer,
  /// a `BitVector`, or another element.
  pub fn new(source: impl Into<FieldElement>) -> FieldElement {
    source.into()
  }

  pub fn zero() -> FieldElement {
    FieldElement::default()
  }

  pub fn number(&self) -> &BitVector {
    &self.number
  }

  pub fn degree_bound(&self) -> usize {
    self.degree_bound
  }

  pub fn to_hex_string(&self, prefix: &str) -> String {
    format!("{}{}", prefix, self.number.to_hex_string())
  }
}

//// #### Addition
////
//// Point-wise addition of `GF(2)` coefficients is XOR. Subtraction is the same operation,
//// so there is no separate `sub`.
////
//// ```text
////          1x^2 + 1x + 1   =>    0111
//// + 1x^3 + 0x^2 + 1x + 1   => ^  1011
//// ----------------------      ---------
////   1x^3 + 1x^2 + 0x + 0  =>     1100
//// ```
impl FieldElement {
  pub fn add(&self, other: impl Into<FieldElement>) -> FieldElement {
    let other = other.into();
    FieldElement::from(self.number.xor(&other.number))
  }
}

//// #### Multiplication by shift and select
////
//// Expand `b` and distribute:
////
//// ```text
//// a * b = b_n * (a << n) + ... + b_1 * (a << 1) + b_0 * (a << 0)
//// ```
////
//// Each `b_i` is 0 or 1, so there's no coefficient multiplication: we either XOR in `a << i`
//// or skip it. Nothing is reduced here, so the product of an `m`-bit and an `n`-bit
//// polynomial may need up to `m + n - 1` bits.
impl FieldElement {
  pub fn multiply(&self, other: impl Into<FieldElement>) -> FieldElement {
    let other = other.into();

    let mut result = BitVector::zero();
    for (index, bit) in other.number.iter().enumerate() {
      if bit == 1 {
        result = result.xor(&self.number.shift_left(index));
      }
    }

    FieldElement::from(result)
  }
}

impl BinaryPolynomial for FieldElement {
  fn bits(&self) -> &BitVector {
    &self.number
  }
}

//// #### Conversions
impl From<BitVector> for FieldElement {
  fn from(number: BitVector) -> FieldElement {
    let degree_bound = number.bit_length();
    FieldElement { number, degree_bound }
  }
}

impl From<&BitVector> for FieldElement {
  fn from(number: &BitVector) -> FieldElement {
    FieldElement::from(number.clone())
  }
}

impl From<&FieldElement> for FieldElement {
  fn from(other: &FieldElement) -> FieldElement {
    other.clone()
  }
}

impl From<BigUint> for FieldElement {
  fn from(value: BigUint) -> FieldElement {
    FieldElement::from(BitVector::new(value))
  }
}

impl From<FieldElement> for BitVector {
  fn from(element: FieldElement) -> BitVector {
    element.number
  }
}

impl From<FieldElement> for BigUint {
  fn from(element: FieldElement) -> BigUint {
    BigUint::from(element.number)
  }
}

macro_rules! from_unsigned {
  ($($t:ty),*) => {
    $(
      impl From<$t> for FieldElement {
        fn from(value: $t) -> FieldElement {
          FieldElement::from(BitVector::from(value))
        }
      }
    )*
  };
}

macro_rules! try_from_signed {
  ($($t:ty),*) => {
    $(
      impl TryFrom<$t> for FieldElement {
        type Error = Error;
        fn try_from(value: $t) -> Result<FieldElement> {
          Ok(FieldElement::from(BitVector::try_from(value)?))
        }
      }
    )*
  };
}

from_unsigned!(u8, u16, u32, u64, u128, usize);
try_from_signed!(i8, i16, i32, i64, i128, isize, BigInt);

//// #### Printing
////
//// `{}` gives the compact polynomial (`x7 + x5 + 1`), `{:#}` the caret form (`x^7 + x^5 + 1`).
impl fmt::Display for FieldElement {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let notation = if f.alternate() { Notation::Caret } else { Notation::Compact };
    write_polynomial(f, &self.number, notation)
  }
}

impl fmt::Debug for FieldElement {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "FieldElement({:#b})", self.number)
  }
}

impl fmt::Binary for FieldElement {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Binary::fmt(&self.number, f)
  }
}

impl fmt::LowerHex for FieldElement {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::LowerHex::fmt(&self.number, f)
  }
}
