/*!
Keys over a discrete-logarithm group.

DSA, ElGamal and Diffie-Hellman share the same key shape: a group, a
secret exponent `x` and the public value `y = g^x mod p`. The kind stored in
the key keeps the families apart at dispatch time.
*/

use std::any::Any;
use std::sync::Arc;

use num_bigint::BigUint;
use rand::RngCore;

use crate::core::crypto::traits::{KeyFactory, KeyMaterial, KeyPairGenerator, PrivateKey, PublicKey};
use crate::core::crypto::types::algorithms::Kind;
use crate::core::crypto::types::components::Components;
use crate::core::crypto::types::config::{GenerationOptions, GroupKeyConfig, KeyConfig};
use crate::core::error::{Error, Result};
use crate::core::group::DiscreteLogarithmGroup;
use crate::invalid_params;

fn group_components(group: &DiscreteLogarithmGroup) -> Components {
    Components::new()
        .with("p", group.p())
        .with("q", group.q())
        .with("g", group.g())
}

/// Public key `y` in a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPublicKey {
    kind: Kind,
    group: Arc<DiscreteLogarithmGroup>,
    y: BigUint,
}

impl GroupPublicKey {
    /// Create a public key, checking `y` lies in the order-`q` subgroup
    pub fn new(kind: Kind, group: Arc<DiscreteLogarithmGroup>, y: BigUint) -> Result<Self> {
        if !group.contains(&y) {
            return invalid_params!("{} public value is not an element of the group", kind);
        }
        Ok(Self { kind, group, y })
    }

    pub fn group(&self) -> &Arc<DiscreteLogarithmGroup> {
        &self.group
    }

    pub fn public_value(&self) -> &BigUint {
        &self.y
    }
}

impl KeyMaterial for GroupPublicKey {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn components(&self) -> Components {
        group_components(&self.group).with("y", &self.y)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Private key `x` in a group, carrying its public value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPrivateKey {
    kind: Kind,
    group: Arc<DiscreteLogarithmGroup>,
    x: BigUint,
    y: BigUint,
}

impl GroupPrivateKey {
    /// Create a private key from `x`, deriving `y` or checking a supplied one.
    pub fn new(
        kind: Kind,
        group: Arc<DiscreteLogarithmGroup>,
        x: BigUint,
        y: Option<BigUint>,
    ) -> Result<Self> {
        if !group.is_valid_exponent(&x) {
            return invalid_params!("{} secret exponent must satisfy 0 < x < q", kind);
        }
        let derived = group.exponentiate(&x);
        if y.is_some_and(|y| y != derived) {
            return invalid_params!("{} public value does not match the secret exponent", kind);
        }
        Ok(Self {
            kind,
            group,
            x,
            y: derived,
        })
    }

    pub fn group(&self) -> &Arc<DiscreteLogarithmGroup> {
        &self.group
    }

    pub fn secret_exponent(&self) -> &BigUint {
        &self.x
    }

    pub fn public_value(&self) -> &BigUint {
        &self.y
    }

    /// The matching public key, sharing this key's group
    pub fn public_key(&self) -> GroupPublicKey {
        GroupPublicKey {
            kind: self.kind,
            group: Arc::clone(&self.group),
            y: self.y.clone(),
        }
    }
}

impl KeyMaterial for GroupPrivateKey {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn components(&self) -> Components {
        group_components(&self.group)
            .with("y", &self.y)
            .with("x", &self.x)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn group_options(kind: Kind, config: &KeyConfig) -> Result<&GroupKeyConfig> {
    match config.as_group() {
        Some(options) if config.kind() == Some(kind) => Ok(options),
        _ => invalid_params!("{} keys need {} key options", kind, kind),
    }
}

/// Builds group keys of one kind from [`GroupKeyConfig`]
pub struct GroupKeyFactory {
    kind: Kind,
}

impl GroupKeyFactory {
    pub fn new(kind: Kind) -> Self {
        Self { kind }
    }
}

impl KeyFactory for GroupKeyFactory {
    fn make_public_key(&self, config: &KeyConfig) -> Result<PublicKey> {
        let options = group_options(self.kind, config)?;
        let group = options.require_group()?;
        let y = options
            .public_value
            .as_ref()
            .ok_or_else(|| Error::missing("public_value"))?;
        let key = GroupPublicKey::new(self.kind, Arc::clone(group), y.clone())?;
        Ok(PublicKey::new(key))
    }

    fn make_private_key(&self, config: &KeyConfig) -> Result<PrivateKey> {
        let options = group_options(self.kind, config)?;
        let group = options.require_group()?;
        let x = options
            .secret_exponent
            .as_ref()
            .ok_or_else(|| Error::missing("secret_exponent"))?;
        let key = GroupPrivateKey::new(
            self.kind,
            Arc::clone(group),
            x.clone(),
            options.public_value.clone(),
        )?;
        Ok(PrivateKey::new(key))
    }
}

/// Generates group key pairs, creating a fresh group unless one is supplied
pub struct GroupKeyPairGenerator {
    kind: Kind,
    requires_num_bits: bool,
}

impl GroupKeyPairGenerator {
    /// `requires_num_bits` makes the modulus size mandatory even when a
    /// group is supplied
    pub fn new(kind: Kind, requires_num_bits: bool) -> Self {
        Self {
            kind,
            requires_num_bits,
        }
    }
}

impl KeyPairGenerator for GroupKeyPairGenerator {
    fn generate_key_pair(
        &self,
        num_bits: Option<usize>,
        options: &GenerationOptions,
        rng: &mut dyn RngCore,
    ) -> Result<(PrivateKey, PublicKey)> {
        if self.requires_num_bits && num_bits.is_none() {
            return Err(Error::missing("num_bits"));
        }

        let group = match (&options.group, num_bits) {
            (Some(group), Some(bits)) if group.modulus_bits() != bits => {
                return invalid_params!(
                    "requested {}-bit keys in a group with a {}-bit modulus",
                    bits,
                    group.modulus_bits()
                );
            }
            (Some(group), _) => Arc::clone(group),
            (None, Some(bits)) => Arc::new(DiscreteLogarithmGroup::generate(bits, rng)?),
            (None, None) => return Err(Error::missing("group")),
        };

        let x = group.random_exponent(rng);
        let private = GroupPrivateKey::new(self.kind, group, x, None)?;
        let public = private.public_key();
        Ok((PrivateKey::new(private), PublicKey::new(public)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_group() -> Arc<DiscreteLogarithmGroup> {
        Arc::new(DiscreteLogarithmGroup::new(23u32, 11u32, 4u32).unwrap())
    }

    #[test]
    fn test_private_key_derives_public_value() {
        let key = GroupPrivateKey::new(Kind::Dsa, tiny_group(), BigUint::from(3u32), None).unwrap();
        // 4^3 mod 23 = 18
        assert_eq!(key.public_value(), &BigUint::from(18u32));
        assert_eq!(key.public_key().public_value(), &BigUint::from(18u32));
    }

    #[test]
    fn test_private_key_rejects_mismatched_public_value() {
        let result = GroupPrivateKey::new(
            Kind::Dsa,
            tiny_group(),
            BigUint::from(3u32),
            Some(BigUint::from(4u32)),
        );
        assert!(matches!(result, Err(Error::InvalidParameters(_))));
        assert!(GroupPrivateKey::new(Kind::Dsa, tiny_group(), BigUint::from(11u32), None).is_err());
    }

    #[test]
    fn test_factory_checks_config_kind() {
        let factory = GroupKeyFactory::new(Kind::Dsa);
        let options = GroupKeyConfig::new().group(tiny_group()).public_value(18u32);

        assert!(factory.make_public_key(&KeyConfig::Dsa(options.clone())).is_ok());
        assert!(matches!(
            factory.make_public_key(&KeyConfig::Elgamal(options)),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_factory_missing_parameters() {
        let factory = GroupKeyFactory::new(Kind::Elgamal);
        let result = factory.make_private_key(&KeyConfig::Elgamal(GroupKeyConfig::new()));
        assert_eq!(result.err(), Some(Error::MissingParameter("group".into())));

        let config = KeyConfig::Elgamal(GroupKeyConfig::new().group(tiny_group()));
        let result = factory.make_private_key(&config);
        assert_eq!(
            result.err(),
            Some(Error::MissingParameter("secret_exponent".into()))
        );
    }

    #[test]
    fn test_generator_in_existing_group() {
        let mut rng = rand::rng();
        let group = tiny_group();
        let options = GenerationOptions::new().with_group(Arc::clone(&group));

        let generator = GroupKeyPairGenerator::new(Kind::DiffieHellman, false);
        let (private, public) = generator.generate_key_pair(None, &options, &mut rng).unwrap();
        let private = private.material::<GroupPrivateKey>().unwrap();
        let public = public.material::<GroupPublicKey>().unwrap();
        assert_eq!(private.public_value(), public.public_value());
        assert!(Arc::ptr_eq(private.group(), &group));

        let strict = GroupKeyPairGenerator::new(Kind::Dsa, true);
        assert_eq!(
            strict.generate_key_pair(None, &options, &mut rng).err(),
            Some(Error::MissingParameter("num_bits".into()))
        );
        assert!(matches!(
            strict.generate_key_pair(Some(64), &options, &mut rng),
            Err(Error::InvalidParameters(_))
        ));
    }
}
