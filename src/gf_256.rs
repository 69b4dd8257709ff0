//// #### GF(256) on top of the unbounded polynomials
//// To understand this implementation, you may wish to refer to `src/gf_2_x.rs` first.
//// A `Field8Element` is a `FieldElement` plus one extra promise: it always fits in 8 bits.
////
//// We keep that promise with a reduction step, run whenever an element is built and after
//// every multiplication.
////
//// The field parameters are plain constants:
////
////   - `FIELD_BITS`: the field is `GF(2^8)`, so elements have at most 8 bits
////   - `REDUCTION_POLY`: the irreducible polynomial `x^8 + x^4 + x^3 + x + 1` (0x11b), the one AES uses
use crate::bit_vector::BitVector;
use crate::error::{Error, Result};
use crate::field::{write_polynomial, BinaryPolynomial, Notation};
use crate::gf_2_x::FieldElement;
use num_bigint::BigUint;
use std::fmt;
use tracing::{debug, trace};

pub const FIELD_BITS: usize = 8;
pub const REDUCTION_POLY: u16 = 0b1_0001_1011;
pub const HEX_DIGITS: usize = FIELD_BITS / 4;

#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(try_from = "BigUint", into = "BigUint")
)]
pub struct Field8Element(FieldElement);

impl Field8Element {
  /// Builds an element, reducing it into the field if needed. Never fails.
  pub fn new(source: impl Into<FieldElement>) -> Field8Element {
    let (element, _) = Field8Element::reduced(source.into());
    element
  }

  /// Builds an element, but fails with `InvariantViolation` if the source wasn't already
  /// a field element (i.e. reduction had to change it).
  pub fn strict(source: impl Into<FieldElement>) -> Result<Field8Element> {
    Field8Element::try_new(source, true)
  }

  pub fn try_new(source: impl Into<FieldElement>, strict: bool) -> Result<Field8Element> {
    let source = source.into();
    let (element, was_reduced) = Field8Element::reduced(source.clone());
    if strict && was_reduced {
      debug!(
        value = %source.number().to_hex_string(),
        bit_length = source.bit_length(),
        "operand is not reduced into GF(2^8)"
      );
      return Err(Error::InvariantViolation(format!(
        "{:#x} needs {} bits, more than the {} of GF(2^8)",
        source.number(),
        source.bit_length(),
        FIELD_BITS
      )));
    }
    Ok(element)
  }

  pub fn modulus() -> BitVector {
    BitVector::from(REDUCTION_POLY)
  }

  pub fn as_field_element(&self) -> &FieldElement {
    &self.0
  }

  pub fn to_u8(&self) -> u8 {
    // The reduction invariant keeps every element below 256
    self.0.number().iter().rev().fold(0u8, |acc, bit| (acc << 1) | bit)
  }

  fn reduced(element: FieldElement) -> (Field8Element, bool) {
    let mut number = BitVector::from(element);
    let was_reduced = reduce(&mut number);
    (Field8Element(FieldElement::from(number)), was_reduced)
  }
}

//// #### Reduction
////
//// This is polynomial long division by `REDUCTION_POLY`, keeping only the remainder.
////
//// Walk the bits from the top down to bit 8. Whenever bit `i` is set, subtract (XOR) the
//// modulus shifted so its leading term lines up with `x^i`:
////
//// ```text
//// 1_1111_0001     x^8 + x^7 + x^6 + x^5 + x^4 + 1
//// 1_0001_1011     REDUCTION_POLY << 0
//// -----------
//// 0_1110_1010     x^7 + x^6 + x^5 + x^3 + x
//// ```
////
//// Each XOR clears bit `i` and only touches bits at or below `i`, so bits we've already
//// passed stay clear and one descending pass is enough.
////
//// The scan reads bits with the unchecked `bit()`: the vector shrinks as we go, so bit `i`
//// may already be past its new length.
fn reduce(number: &mut BitVector) -> bool {
  let bit_length = number.bit_length();
  if bit_length <= FIELD_BITS {
    return false;
  }

  let modulus = Field8Element::modulus();
  for i in (FIELD_BITS..bit_length).rev() {
    if number.bit(i) == 1 {
      *number = number.xor(&modulus.shift_left(i - FIELD_BITS));
    }
  }
  debug_assert!(number.bit_length() <= FIELD_BITS);

  trace!(from_bits = bit_length, to_bits = number.bit_length(), "reduced into GF(2^8)");
  true
}

//// #### Arithmetic
////
//// The other operand must already be a field element. Passing `300` to `multiply` is a bug at
//// the call site, not something to quietly reduce away.
impl Field8Element {
  /// Field addition; `other` must fit in 8 bits. For unreduced sums use `as_field_element().add(..)`.
  pub fn add(&self, other: impl Into<FieldElement>) -> Result<Field8Element> {
    let other = Field8Element::strict(other)?;
    // XOR of two 8-bit values is still 8 bits
    Ok(Field8Element(self.0.add(&other.0)))
  }

  pub fn multiply(&self, other: impl Into<FieldElement>) -> Result<Field8Element> {
    let other = Field8Element::strict(other)?;
    Ok(Field8Element::new(self.0.multiply(&other.0)))
  }
}

impl BinaryPolynomial for Field8Element {
  fn bits(&self) -> &BitVector {
    self.0.number()
  }
}

impl Field8Element {
  /// Always `HEX_DIGITS` lowercase digits, zero-padded: `0x0a`, not `0xa`.
  pub fn to_hex_string(&self, prefix: &str) -> String {
    format!("{}{:0width$x}", prefix, self.0.number(), width = HEX_DIGITS)
  }
}

//// #### Conversions
impl From<Field8Element> for FieldElement {
  fn from(element: Field8Element) -> FieldElement {
    element.0
  }
}

impl From<&Field8Element> for FieldElement {
  fn from(element: &Field8Element) -> FieldElement {
    element.0.clone()
  }
}

impl From<u8> for Field8Element {
  fn from(value: u8) -> Field8Element {
    Field8Element(FieldElement::from(value))
  }
}

impl From<Field8Element> for BigUint {
  fn from(element: Field8Element) -> BigUint {
    BigUint::from(element.0)
  }
}

impl TryFrom<BigUint> for Field8Element {
  type Error = Error;
  fn try_from(value: BigUint) -> Result<Field8Element> {
    Field8Element::strict(value)
  }
}

//// #### Printing
impl fmt::Display for Field8Element {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let notation = if f.alternate() { Notation::Caret } else { Notation::Compact };
    write_polynomial(f, self.0.number(), notation)
  }
}

impl fmt::Debug for Field8Element {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Field8Element({:#b})", self.0.number())
  }
}

impl fmt::Binary for Field8Element {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Binary::fmt(self.0.number(), f)
  }
}

impl fmt::LowerHex for Field8Element {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if f.alternate() {
      f.write_str(&self.to_hex_string("0x"))
    } else {
      f.write_str(&self.to_hex_string(""))
    }
  }
}
