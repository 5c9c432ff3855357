/*!
Numeric building blocks.

`transcoding` defines the integer/octet wire contract used by every
algorithm family. `arith` holds the random sampling and primality helpers
needed by key generation.
*/

pub mod arith;
pub mod transcoding;

pub use transcoding::{
    Endian, Numeric, bit_length, byte_length, integer_to_octets, maybe_integerize,
    octets_to_integer, select_range,
};
