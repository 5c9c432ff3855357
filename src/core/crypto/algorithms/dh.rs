/*!
Finite-field Diffie-Hellman.

The shared secret `y_peer^x mod p` is returned big-endian at the bit length
of the group modulus, so both sides always produce byte-identical output.
*/

use std::sync::Arc;

use crate::core::crypto::algorithms::group_keys::{
    GroupKeyFactory, GroupKeyPairGenerator, GroupPrivateKey, GroupPublicKey,
};
use crate::core::crypto::registry::AlgorithmBundle;
use crate::core::crypto::traits::{KeyExchangeParticipant, PrivateKey, PublicKey};
use crate::core::crypto::types::algorithms::Kind;
use crate::core::error::{Error, Result};
use crate::core::numeric::{Endian, integer_to_octets};

/// Key agreement for any group-based kind
pub struct GroupKeyExchange;

impl KeyExchangeParticipant for GroupKeyExchange {
    fn diffie_hellman(&self, private_key: &PrivateKey, public_key: &PublicKey) -> Result<Vec<u8>> {
        if private_key.kind() != public_key.kind() {
            return Err(Error::IncompatibleParameters(format!(
                "cannot combine a {} private key with a {} public key",
                private_key.kind(),
                public_key.kind()
            )));
        }

        let private = private_key.material::<GroupPrivateKey>()?;
        let public = public_key.material::<GroupPublicKey>()?;
        let group = private.group();
        if !Arc::ptr_eq(group, public.group()) && group != public.group() {
            return Err(Error::IncompatibleParameters(
                "keys belong to different groups".to_string(),
            ));
        }

        let secret = public
            .public_value()
            .modpow(private.secret_exponent(), group.p());
        Ok(integer_to_octets(&secret, Some(group.modulus_bits()), Endian::Big))
    }
}

/// Diffie-Hellman key handling and exchange
pub fn bundle() -> AlgorithmBundle {
    AlgorithmBundle::new()
        .with_key_factory(GroupKeyFactory::new(Kind::DiffieHellman))
        .with_key_pair_generator(GroupKeyPairGenerator::new(Kind::DiffieHellman, false))
        .with_key_exchange(GroupKeyExchange)
}
