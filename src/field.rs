//// #### A type definition for polynomials over GF(2)
////
//// Both of our number types (`FieldElement` for any order, `Field8Element` for `GF(2^8)`) are
//// polynomials whose coefficients are bits. Everything that only needs to *read* those bits
//// lives here, once, so the two layers print and inspect themselves identically.
use crate::bit_vector::{BitVector, Bits};
use crate::error::Result;
use num_bigint::BigUint;
use std::fmt;

/// How to spell the exponent of each term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
  /// `x7 + x5 + x2 + x + 1`
  Compact,
  /// `x^7 + x^5 + x^2 + x + 1`
  Caret,
}

pub trait BinaryPolynomial: Clone + PartialEq + fmt::Display {
  fn bits(&self) -> &BitVector;

  fn bit_length(&self) -> usize {
    self.bits().bit_length()
  }

  fn get_bit(&self, index: usize) -> Result<u8> {
    self.bits().get_bit(index)
  }

  fn iter(&self) -> Bits<'_> {
    self.bits().iter()
  }

  fn to_int(&self) -> BigUint {
    self.bits().value().clone()
  }

  fn to_binary_string(&self) -> String {
    self.bits().to_binary_string()
  }

  fn polynomial(&self, notation: Notation) -> Polynomial<'_> {
    Polynomial { bits: self.bits(), notation }
  }

  fn to_polynomial_string(&self, notation: Notation) -> String {
    self.polynomial(notation).to_string()
  }
}

/// Borrowed view that prints a polynomial in a fixed notation, whatever the format flags.
#[derive(Debug, Clone, Copy)]
pub struct Polynomial<'a> {
  bits: &'a BitVector,
  notation: Notation,
}

impl<'a> fmt::Display for Polynomial<'a> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write_polynomial(f, self.bits, self.notation)
  }
}

//// Printing a polynomial:
////
////   - Highest degree first
////   - Skip the terms that aren't present
////   - `' + '` only *between* present terms
////   - Degree 1 is just `x`, degree 0 is just `1`
////
//// The zero polynomial has no terms, so it prints as nothing at all.
pub(crate) fn write_polynomial<W: fmt::Write>(
  out: &mut W,
  bits: &BitVector,
  notation: Notation,
) -> fmt::Result {
  let mut first_term = true;
  for (power, bit) in bits.iter().enumerate().rev() {
    if bit == 0 {
      continue;
    }
    if !first_term {
      out.write_str(" + ")?;
    }
    first_term = false;

    match (power, notation) {
      (0, _) => out.write_str("1")?,
      (1, _) => out.write_str("x")?,
      (_, Notation::Compact) => write!(out, "x{}", power)?,
      (_, Notation::Caret) => write!(out, "x^{}", power)?,
    }
  }
  Ok(())
}
