//// #### Bit-vectors
////
//// Every polynomial over `GF(2)` is just a list of bits: bit `i` is the coefficient of `x^i`.
//// And a list of bits is just a non-negative integer. So the bottom layer of this crate is a
//// tiny wrapper around an unbounded integer that remembers how many bits it needs.
////
//// For example `175` is `0b10101111`, which needs `8` bits. Leading zeros don't count, so `0`
//// needs no bits at all.
////
//// A `BitVector` never changes after it is built. XOR and shifts hand back a new vector.
use crate::error::{Error, Result};
use num_bigint::{BigInt, BigUint};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(from = "BigUint", into = "BigUint")
)]
pub struct BitVector {
  value: BigUint,
  bit_length: usize,
}

impl BitVector {
  pub fn new(value: impl Into<BigUint>) -> BitVector {
    let value = value.into();
    // A value with more than usize::MAX bits can't be allocated in the first place
    let bit_length = usize::try_from(value.bits()).unwrap_or(usize::MAX);
    BitVector { value, bit_length }
  }

  pub fn zero() -> BitVector {
    BitVector::default()
  }

  /// Copy constructor. Same as `clone`, kept for callers that think in terms of construction.
  pub fn from_bit_vector(other: &BitVector) -> BitVector {
    other.clone()
  }

  pub fn bit_length(&self) -> usize {
    self.bit_length
  }

  pub fn is_zero(&self) -> bool {
    self.bit_length == 0
  }

  pub fn value(&self) -> &BigUint {
    &self.value
  }

  pub fn to_u64(&self) -> Option<u64> {
    u64::try_from(&self.value).ok()
  }

  /// Returns bit `index` (0 or 1), counting from the least-significant bit.
  ///
  /// Only indices below `bit_length()` are valid, so a zero vector has no readable bits.
  pub fn get_bit(&self, index: usize) -> Result<u8> {
    if index >= self.bit_length {
      return Err(Error::IndexOutOfRange {
        index,
        bit_length: self.bit_length,
      });
    }
    Ok(self.bit(index))
  }

  // Unchecked: anything past the top bit reads as 0.
  pub(crate) fn bit(&self, index: usize) -> u8 {
    self.value.bit(index as u64) as u8
  }

  //// XOR may clear the top bits (`0b101 ^ 0b100 = 0b1`), so the length is recomputed
  //// from the new value rather than taking the larger of the two.
  pub fn xor(&self, other: &BitVector) -> BitVector {
    BitVector::new(&self.value ^ &other.value)
  }

  pub fn shift_left(&self, n: usize) -> BitVector {
    BitVector::new(&self.value << n)
  }

  pub fn shift_right(&self, n: usize) -> BitVector {
    BitVector::new(&self.value >> n)
  }

  pub fn to_binary_string(&self) -> String {
    self.value.to_str_radix(2)
  }

  pub fn to_prefixed_binary_string(&self) -> String {
    format!("{:#b}", self.value)
  }

  pub fn to_hex_string(&self) -> String {
    self.value.to_str_radix(16)
  }

  /// Iterates the bits from least- to most-significant. Yields exactly `bit_length()` items.
  pub fn iter(&self) -> Bits<'_> {
    Bits {
      vector: self,
      front: 0,
      back: self.bit_length,
    }
  }
}

//// #### Walking the bits
////
//// The iterator borrows the vector, so every call to `iter()` starts over from bit 0 and the
//// vector itself is untouched. It also runs backwards, which is handy when printing polynomials
//// highest degree first.
#[derive(Debug, Clone)]
pub struct Bits<'a> {
  vector: &'a BitVector,
  front: usize,
  back: usize,
}

impl<'a> Iterator for Bits<'a> {
  type Item = u8;

  fn next(&mut self) -> Option<u8> {
    if self.front == self.back {
      return None;
    }
    let bit = self.vector.bit(self.front);
    self.front += 1;
    Some(bit)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.back - self.front;
    (remaining, Some(remaining))
  }
}

impl<'a> DoubleEndedIterator for Bits<'a> {
  fn next_back(&mut self) -> Option<u8> {
    if self.front == self.back {
      return None;
    }
    self.back -= 1;
    Some(self.vector.bit(self.back))
  }
}

impl<'a> ExactSizeIterator for Bits<'a> {}

impl<'a> IntoIterator for &'a BitVector {
  type Item = u8;
  type IntoIter = Bits<'a>;

  fn into_iter(self) -> Bits<'a> {
    self.iter()
  }
}

//// #### Getting numbers in and out
////
//// Unsigned integers always make a valid bit-vector. Signed ones only do when they aren't negative.
macro_rules! from_unsigned {
  ($($t:ty),*) => {
    $(
      impl From<$t> for BitVector {
        fn from(value: $t) -> BitVector {
          BitVector::new(value)
        }
      }
    )*
  };
}

macro_rules! try_from_signed {
  ($($t:ty),*) => {
    $(
      impl TryFrom<$t> for BitVector {
        type Error = Error;
        fn try_from(value: $t) -> Result<BitVector> {
          if value < 0 {
            return Err(Error::InvalidArgument(format!(
              "expected a non-negative integer, got {}",
              value
            )));
          }
          Ok(BitVector::new(value.unsigned_abs()))
        }
      }
    )*
  };
}

from_unsigned!(u8, u16, u32, u64, u128, usize);
try_from_signed!(i8, i16, i32, i64, i128, isize);

impl From<BigUint> for BitVector {
  fn from(value: BigUint) -> BitVector {
    BitVector::new(value)
  }
}

impl From<&BitVector> for BitVector {
  fn from(other: &BitVector) -> BitVector {
    other.clone()
  }
}

impl TryFrom<BigInt> for BitVector {
  type Error = Error;
  fn try_from(value: BigInt) -> Result<BitVector> {
    match value.to_biguint() {
      Some(value) => Ok(BitVector::new(value)),
      None => Err(Error::InvalidArgument(format!(
        "expected a non-negative integer, got {}",
        value
      ))),
    }
  }
}

impl From<BitVector> for BigUint {
  fn from(vector: BitVector) -> BigUint {
    vector.value
  }
}

//// #### Printing
////
//// `Display` gives the plain binary digits. The `Debug` form names the type so lists of vectors
//// stay readable: `[BitVector(0b10101111), BitVector(0b1010)]`.
impl fmt::Display for BitVector {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.to_binary_string())
  }
}

impl fmt::Debug for BitVector {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "BitVector({:#b})", self.value)
  }
}

impl fmt::Binary for BitVector {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Binary::fmt(&self.value, f)
  }
}

impl fmt::LowerHex for BitVector {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::LowerHex::fmt(&self.value, f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // TEST: Length ignores leading zeros
  #[test]
  fn test_bit_length() {
    assert_eq!(BitVector::from(0u8).bit_length(), 0);
    assert_eq!(BitVector::from(1u8).bit_length(), 1);
    assert_eq!(BitVector::from(2u8).bit_length(), 2);
    assert_eq!(BitVector::from(175u8).bit_length(), 8);
    assert_eq!(BitVector::from(255u8).bit_length(), 8);
    assert_eq!(BitVector::from(256u16).bit_length(), 9);
    assert_eq!(BitVector::from(u128::MAX).bit_length(), 128);
  }

  #[test]
  fn test_negative_rejected() {
    assert!(matches!(BitVector::try_from(-1i32), Err(Error::InvalidArgument(_))));
    assert!(matches!(BitVector::try_from(i64::MIN), Err(Error::InvalidArgument(_))));
    assert!(matches!(
      BitVector::try_from(BigInt::from(-175)),
      Err(Error::InvalidArgument(_))
    ));
    assert_eq!(BitVector::try_from(175i32), Ok(BitVector::from(175u8)));
    assert_eq!(BitVector::try_from(BigInt::from(175)), Ok(BitVector::from(175u8)));
  }

  #[test]
  fn test_get_bit() {
    let bv = BitVector::from(175u8);
    let expected = [1, 1, 1, 1, 0, 1, 0, 1];
    for (i, bit) in expected.iter().enumerate() {
      assert_eq!(bv.get_bit(i), Ok(*bit));
    }
    assert_eq!(
      bv.get_bit(8),
      Err(Error::IndexOutOfRange { index: 8, bit_length: 8 })
    );
  }

  // TEST: A zero vector has no bits at all
  #[test]
  fn test_zero() {
    let zero = BitVector::from(0u8);
    assert_eq!(zero.bit_length(), 0);
    assert!(zero.is_zero());
    assert_eq!(zero.iter().count(), 0);
    assert!(matches!(zero.get_bit(0), Err(Error::IndexOutOfRange { .. })));
    assert_eq!(zero.to_binary_string(), "0");
    assert_eq!(zero.to_hex_string(), "0");
    assert_eq!(zero, BitVector::zero());
  }

  #[test]
  fn test_xor() {
    let bv = BitVector::from(175u8);
    assert_eq!(bv.xor(&BitVector::from(3u8)).to_binary_string(), "10101100");
    // XOR can shrink the length
    let shrunk = bv.xor(&BitVector::from(0b10100000u8));
    assert_eq!(shrunk.to_binary_string(), "1111");
    assert_eq!(shrunk.bit_length(), 4);
    assert!(bv.xor(&bv).is_zero());
  }

  #[test]
  fn test_shifts() {
    let bv = BitVector::from(175u8);
    assert_eq!(bv.shift_left(3).to_binary_string(), "10101111000");
    assert_eq!(bv.shift_left(3).bit_length(), 11);
    assert_eq!(bv.shift_right(3).to_binary_string(), "10101");
    assert_eq!(bv.shift_right(8), BitVector::zero());
    assert_eq!(BitVector::zero().shift_left(5).bit_length(), 0);
    // No fixed width: shifting past 128 bits keeps every bit
    assert_eq!(BitVector::from(1u8).shift_left(200).bit_length(), 201);
    assert_eq!(BitVector::from(1u8).shift_left(100_000).bit_length(), 100_001);
  }

  #[test]
  fn test_iter() {
    let bv = BitVector::from(175u8);
    let bits: Vec<u8> = bv.iter().collect();
    assert_eq!(bits, vec![1, 1, 1, 1, 0, 1, 0, 1]);
    // Fresh iteration every time
    assert_eq!(bv.iter().collect::<Vec<_>>(), bits);
    assert_eq!(bv.iter().len(), 8);
    let reversed: Vec<u8> = bv.iter().rev().collect();
    assert_eq!(reversed, vec![1, 0, 1, 0, 1, 1, 1, 1]);
    assert_eq!((&bv).into_iter().filter(|b| *b == 1).count(), 6);
  }

  #[test]
  fn test_formatting() {
    let bv = BitVector::from(175u8);
    assert_eq!(bv.to_binary_string(), "10101111");
    assert_eq!(bv.to_prefixed_binary_string(), "0b10101111");
    assert_eq!(bv.to_hex_string(), "af");
    assert_eq!(bv.to_string(), "10101111");
    assert_eq!(format!("{:#x}", bv), "0xaf");
    let list = vec![BitVector::from(175u8), BitVector::from(10u8), BitVector::from(15u8)];
    assert_eq!(
      format!("{:?}", list),
      "[BitVector(0b10101111), BitVector(0b1010), BitVector(0b1111)]"
    );
  }

  #[test]
  fn test_integer_round_trip() {
    let bv = BitVector::from(175u8);
    assert_eq!(bv.to_u64(), Some(175));
    assert_eq!(BigUint::from(bv), BigUint::from(175u8));
    let copy = BitVector::from_bit_vector(&BitVector::from(u128::MAX));
    assert_eq!(copy.value(), &BigUint::from(u128::MAX));
    assert_eq!(copy.to_u64(), None);
  }
}
