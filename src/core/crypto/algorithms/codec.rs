/*!
Shared byte layouts for signatures and messages.

Single-integer layouts (RSA) hold one big-endian integer. Pair layouts
(DSA, ElGamal) concatenate two big-endian integers of equal width, so the
split point is always the middle of the byte string.
*/

use num_bigint::BigUint;

use crate::core::crypto::types::components::Components;
use crate::core::error::Result;
use crate::core::numeric::{Endian, bit_length, integer_to_octets, octets_to_integer};
use crate::invalid_params;

fn checked_octets(name: &str, value: &BigUint, width: usize) -> Result<Vec<u8>> {
    if bit_length(value) > width {
        return invalid_params!(
            "component {} has {} bits, wider than the {}-bit encoding",
            name,
            bit_length(value),
            width
        );
    }
    Ok(integer_to_octets(value, Some(width), Endian::Big))
}

/// Encode the single component `name`
pub fn encode_single(components: &Components, name: &str) -> Result<Vec<u8>> {
    let value = components.require(name)?;
    checked_octets(name, value, components.effective_width())
}

/// Decode a single-integer layout; `None` when the input is empty
pub fn decode_single(octets: &[u8], name: &str) -> Option<Components> {
    if octets.is_empty() {
        return None;
    }
    let value = BigUint::from_bytes_be(octets);
    Some(Components::new().with(name, value).with_width(octets.len() * 8))
}

/// Encode `first || second`, both at the components' effective width
pub fn encode_pair(components: &Components, first: &str, second: &str) -> Result<Vec<u8>> {
    let a = components.require(first)?;
    let b = components.require(second)?;
    let width = components.effective_width();

    let mut octets = checked_octets(first, a, width)?;
    octets.extend(checked_octets(second, b, width)?);
    Ok(octets)
}

/// Encode `a || b` at a fixed width known to fit both values
pub fn encode_pair_at(a: &BigUint, b: &BigUint, width: usize) -> Vec<u8> {
    let mut octets = integer_to_octets(a, Some(width), Endian::Big);
    octets.extend(integer_to_octets(b, Some(width), Endian::Big));
    octets
}

/// Split a pair layout into its two integers; `None` when empty or odd-length
pub fn split_pair(octets: &[u8]) -> Option<(BigUint, BigUint)> {
    if octets.is_empty() || octets.len() % 2 != 0 {
        return None;
    }
    let half = octets.len() / 2;
    let a = octets_to_integer(octets, 0, Some(half), Endian::Big, None).ok()?;
    let b = octets_to_integer(octets, half, None, Endian::Big, None).ok()?;
    Some((a, b))
}

/// Decode a pair layout into named components
pub fn decode_pair(octets: &[u8], first: &str, second: &str) -> Option<Components> {
    let (a, b) = split_pair(octets)?;
    Some(
        Components::new()
            .with(first, a)
            .with(second, b)
            .with_width(octets.len() / 2 * 8),
    )
}

/// The leftmost `n_bits` bits of `message` as an integer.
///
/// Messages shorter than `n_bits` are used whole.
pub fn leftmost_bits(message: &[u8], n_bits: usize) -> BigUint {
    let value = BigUint::from_bytes_be(message);
    let message_bits = message.len() * 8;
    if message_bits > n_bits {
        value >> (message_bits - n_bits)
    } else {
        value
    }
}
