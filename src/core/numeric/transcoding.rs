/*!
Integer/octet transcoding.

These functions fix the wire-level numeric contract shared by every
algorithm family: the octet encoding of an integer is fully determined by
the pair `(n_bits, endian)`. Key material, signature components and
ciphertext components are all serialized through here.
*/

use num_bigint::BigUint;

use crate::core::error::{Error, Result};
use crate::invalid_params;

/// Byte order of an octet encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endian {
    /// Most significant byte first
    #[default]
    Big,
    /// Least significant byte first
    Little,
}

/// Number of significant bits in `value` (0 for zero)
pub fn bit_length(value: &BigUint) -> usize {
    value.bits() as usize
}

/// Number of octets needed to hold `n_bits` bits
pub fn byte_length(n_bits: usize) -> usize {
    n_bits.div_ceil(8)
}

/// Resolve `[start, end)` against `octets`, `end` defaulting to the length.
pub fn select_range(octets: &[u8], start: usize, end: Option<usize>) -> Result<&[u8]> {
    let len = octets.len();
    let end = end.unwrap_or(len);
    if start > end || end > len {
        return Err(Error::RangeError { start, end, len });
    }
    Ok(&octets[start..end])
}

/// Decode `octets[start..end]` as a base-256 integer.
///
/// With [`Endian::Big`] the first byte of the range is the most significant;
/// with [`Endian::Little`] the range is walked from its end with descending
/// weight, so the first byte carries `256^0`.
///
/// When `n_bits` is given the decoded value must fit in `n_bits` bits,
/// otherwise the call fails with [`Error::InvalidParameters`]. The value is
/// never masked on decode.
pub fn octets_to_integer(
    octets: &[u8],
    start: usize,
    end: Option<usize>,
    endian: Endian,
    n_bits: Option<usize>,
) -> Result<BigUint> {
    let range = select_range(octets, start, end)?;
    let value = decode(range, endian);

    if let Some(n_bits) = n_bits {
        let actual = bit_length(&value);
        if actual > n_bits {
            return invalid_params!(
                "decoded integer has {} bits, more than the requested {}",
                actual,
                n_bits
            );
        }
    }

    Ok(value)
}

/// Encode the low `n_bits` bits of `value` into `ceil(n_bits / 8)` octets.
///
/// `n_bits` defaults to the bit length of `value`, so zero encodes to an
/// empty sequence. Bits above `n_bits` are dropped silently; callers that
/// need overflow detection must compare against [`bit_length`] themselves.
pub fn integer_to_octets(value: &BigUint, n_bits: Option<usize>, endian: Endian) -> Vec<u8> {
    let n_bits = n_bits.unwrap_or_else(|| bit_length(value));
    let n_bytes = byte_length(n_bits);

    // Little-endian first: index i holds bits [8i, 8i + 8)
    let mut octets = value.to_bytes_le();
    octets.resize(n_bytes, 0);

    let extra_bits = n_bits % 8;
    if extra_bits != 0 {
        if let Some(top) = octets.last_mut() {
            *top &= (1u8 << extra_bits) - 1;
        }
    }

    if endian == Endian::Big {
        octets.reverse();
    }
    octets
}

fn decode(range: &[u8], endian: Endian) -> BigUint {
    match endian {
        Endian::Big => BigUint::from_bytes_be(range),
        Endian::Little => BigUint::from_bytes_le(range),
    }
}

/// A value accepted interchangeably as an integer or as its big-endian octets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Numeric {
    /// Already an integer
    Integer(BigUint),
    /// Big-endian encoded integer
    Octets(Vec<u8>),
}

impl From<BigUint> for Numeric {
    fn from(value: BigUint) -> Self {
        Numeric::Integer(value)
    }
}

impl From<&BigUint> for Numeric {
    fn from(value: &BigUint) -> Self {
        Numeric::Integer(value.clone())
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::Integer(BigUint::from(value))
    }
}

impl From<u64> for Numeric {
    fn from(value: u64) -> Self {
        Numeric::Integer(BigUint::from(value))
    }
}

impl From<Vec<u8>> for Numeric {
    fn from(octets: Vec<u8>) -> Self {
        Numeric::Octets(octets)
    }
}

impl From<&[u8]> for Numeric {
    fn from(octets: &[u8]) -> Self {
        Numeric::Octets(octets.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Numeric {
    fn from(octets: [u8; N]) -> Self {
        Numeric::Octets(octets.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Numeric {
    fn from(octets: &[u8; N]) -> Self {
        Numeric::Octets(octets.to_vec())
    }
}

/// Integer as-is, or big-endian decoding of the whole octet sequence.
pub fn maybe_integerize(thing: impl Into<Numeric>) -> BigUint {
    match thing.into() {
        Numeric::Integer(value) => value,
        Numeric::Octets(octets) => decode(&octets, Endian::Big),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_encodings() {
        assert_eq!(integer_to_octets(&BigUint::from(255u32), Some(8), Endian::Big), vec![0xFF]);
        assert_eq!(
            integer_to_octets(&BigUint::from(256u32), Some(16), Endian::Big),
            vec![0x01, 0x00]
        );
        assert_eq!(
            integer_to_octets(&BigUint::from(256u32), Some(16), Endian::Little),
            vec![0x00, 0x01]
        );
    }

    #[test]
    fn test_concrete_decodings() {
        let value = octets_to_integer(&[0x01, 0x00], 0, None, Endian::Big, None).unwrap();
        assert_eq!(value, BigUint::from(256u32));

        let value = octets_to_integer(&[0x00, 0x01], 0, None, Endian::Little, None).unwrap();
        assert_eq!(value, BigUint::from(256u32));
    }

    #[test]
    fn test_default_width_is_bit_length() {
        let value = BigUint::from(0x01_02_03u32);
        assert_eq!(integer_to_octets(&value, None, Endian::Big), vec![0x01, 0x02, 0x03]);
        assert!(integer_to_octets(&BigUint::from(0u32), None, Endian::Big).is_empty());
    }

    #[test]
    fn test_zero_padding() {
        let value = BigUint::from(0x2Au32);
        assert_eq!(integer_to_octets(&value, Some(32), Endian::Big), vec![0, 0, 0, 0x2A]);
        assert_eq!(integer_to_octets(&value, Some(32), Endian::Little), vec![0x2A, 0, 0, 0]);
    }

    #[test]
    fn test_truncation_keeps_low_bits() {
        // 0x3FF truncated to 9 bits is 0x1FF
        let value = BigUint::from(0x3FFu32);
        assert_eq!(integer_to_octets(&value, Some(9), Endian::Big), vec![0x01, 0xFF]);

        // Whole bytes above the width are dropped
        let value = BigUint::from(0xAABBCCu32);
        assert_eq!(integer_to_octets(&value, Some(16), Endian::Big), vec![0xBB, 0xCC]);
        assert_eq!(integer_to_octets(&value, Some(4), Endian::Little), vec![0x0C]);
    }

    #[test]
    fn test_sub_range_decoding() {
        let octets = [0xFF, 0x12, 0x34, 0xFF];
        let value = octets_to_integer(&octets, 1, Some(3), Endian::Big, None).unwrap();
        assert_eq!(value, BigUint::from(0x1234u32));

        let value = octets_to_integer(&octets, 1, Some(3), Endian::Little, None).unwrap();
        assert_eq!(value, BigUint::from(0x3412u32));

        let value = octets_to_integer(&octets, 2, Some(2), Endian::Big, None).unwrap();
        assert_eq!(value, BigUint::from(0u32));
    }

    #[test]
    fn test_range_errors() {
        let octets = [1, 2, 3];
        assert_eq!(
            octets_to_integer(&octets, 2, Some(1), Endian::Big, None),
            Err(Error::RangeError { start: 2, end: 1, len: 3 })
        );
        assert_eq!(
            select_range(&octets, 0, Some(4)),
            Err(Error::RangeError { start: 0, end: 4, len: 3 })
        );
        assert_eq!(
            select_range(&octets, 4, None),
            Err(Error::RangeError { start: 4, end: 3, len: 3 })
        );
    }

    #[test]
    fn test_decode_width_bound() {
        let octets = [0x01, 0xFF];
        assert!(octets_to_integer(&octets, 0, None, Endian::Big, Some(9)).is_ok());
        assert!(matches!(
            octets_to_integer(&octets, 0, None, Endian::Big, Some(8)),
            Err(Error::InvalidParameters(_))
        ));
        // Leading zero octets do not count against the width
        assert!(octets_to_integer(&[0, 0, 0x7F], 0, None, Endian::Big, Some(7)).is_ok());
    }

    #[test]
    fn test_maybe_integerize() {
        assert_eq!(maybe_integerize([0x2Au8]), BigUint::from(42u32));
        assert_eq!(maybe_integerize(BigUint::from(42u32)), BigUint::from(42u32));
        assert_eq!(maybe_integerize(vec![0x01, 0x00]), BigUint::from(256u32));
        assert_eq!(maybe_integerize(Vec::<u8>::new()), BigUint::from(0u32));
    }

    #[test]
    fn test_byte_length() {
        assert_eq!(byte_length(0), 0);
        assert_eq!(byte_length(1), 1);
        assert_eq!(byte_length(8), 1);
        assert_eq!(byte_length(9), 2);
    }
}
