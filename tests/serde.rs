//! Serialization of every layer, behind the `serde` feature.
#![cfg(feature = "serde")]

use galois_bits::{BitVector, Field8Element, FieldElement};

#[test]
fn bit_vector_serializes_as_its_value() {
  let vector = BitVector::from(175u8);
  let json = serde_json::to_string(&vector).unwrap();
  assert_eq!(json, "[175]");
  assert_eq!(serde_json::from_str::<BitVector>(&json).unwrap(), vector);
  // The cached length is rebuilt, not trusted from the input
  assert_eq!(serde_json::from_str::<BitVector>("[0]").unwrap().bit_length(), 0);
}

#[test]
fn field_element_round_trips_past_64_bits() {
  let wide = FieldElement::new(u128::MAX).multiply(1u128 << 100);
  assert!(wide.degree_bound() > 128);
  let json = serde_json::to_string(&wide).unwrap();
  let back: FieldElement = serde_json::from_str(&json).unwrap();
  assert_eq!(back, wide);
  assert_eq!(back.degree_bound(), wide.degree_bound());
}

#[test]
fn field8_element_serializes_as_a_byte() {
  let element = Field8Element::new(175u8);
  let json = serde_json::to_string(&element).unwrap();
  assert_eq!(json, "[175]");
  assert_eq!(serde_json::from_str::<Field8Element>(&json).unwrap(), element);
  assert_eq!(
    serde_json::from_str::<Field8Element>("[]").unwrap(),
    Field8Element::from(0u8)
  );
}

// TEST: Deserializing never reduces, it refuses
#[test]
fn field8_element_rejects_unreduced_values() {
  let err = serde_json::from_str::<Field8Element>("[300]").unwrap_err();
  let message = err.to_string();
  assert!(message.contains("invariant violation"), "{}", message);
  assert!(message.contains("0x12c"), "{}", message);
}
