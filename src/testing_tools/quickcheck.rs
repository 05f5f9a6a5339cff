use quickcheck::{Arbitrary, Gen};

const DECIMAL_CHARS_BYTES: &[u8] = "0123456789".as_bytes();

/// Digit-count tiers a generated magnitude is drawn from. `Vec<T>::arbitrary`
/// bounds its length by the ambient `Gen::size()` (100 by default), which
/// never reaches the 10^500-scale values the algebraic-law properties are
/// required to cover — so length is chosen directly from a fixed set of
/// tiers instead, spanning single digits up through widths well past the
/// limb-boundary the wide-magnitude cases are meant to exercise.
const DIGIT_COUNT_TIERS: &[usize] = &[1, 1, 2, 3, 5, 10, 50, 100, 500, 600];

/// Generates an arbitrary signed decimal string, e.g. `"-1234"`, suitable for
/// round-tripping through [`BigInt::from_decimal_str`][1].
///
/// [1]: crate::bigint::BigInt::from_decimal_str
#[derive(Debug)]
pub(crate) struct BigIntDecimalString(pub(crate) String);

impl Clone for BigIntDecimalString {
    fn clone(&self) -> Self {
        BigIntDecimalString(self.0.clone())
    }
}

impl Arbitrary for BigIntDecimalString {
    fn arbitrary(g: &mut Gen) -> Self {
        use std::str::from_utf8;

        let len = *g.choose(DIGIT_COUNT_TIERS).unwrap();
        let mut v_char: Vec<u8> = (0..len)
            .map(|_| *g.choose(DECIMAL_CHARS_BYTES).unwrap())
            .collect();

        if *g.choose(&[true, false]).unwrap() {
            v_char.insert(0, b'-');
        }
        Self(String::from(from_utf8(&v_char).unwrap()))
    }
}
