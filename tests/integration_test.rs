use std::any::Any;
use std::sync::Arc;

use num_bigint::BigUint;
use pkc_protocol::{
    AlgorithmBundle, Capability, Components, DiscreteLogarithmGroup, Error, GenerationOptions,
    GroupKeyConfig, Kind, KeyConfig, KeyFactory, KeyMaterial, OperationOptions, PrivateKey,
    PublicKey, Result, RsaKeyConfig, Signer, Verifier, destructure_private_key,
    destructure_public_key, generate_key_pair, get_bundle, is_registered, list_kinds,
    make_private_key, make_public_key, register_kind, sign_message, verify_signature,
};
use rand::RngCore;

// ----- A toy family registered from outside the crate -----

/// Keyed checksum: the "signature" is the byte sum of the message plus a shared tag
#[derive(Debug)]
struct ChecksumKey {
    kind: Kind,
    tag: u8,
}

impl KeyMaterial for ChecksumKey {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn components(&self) -> Components {
        Components::new().with("tag", self.tag as u32)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn checksum(tag: u8, message: &[u8]) -> u8 {
    message.iter().fold(tag, |acc, b| acc.wrapping_add(*b))
}

struct ChecksumFactory(Kind);

impl ChecksumFactory {
    fn key(&self, config: &KeyConfig) -> Result<ChecksumKey> {
        let KeyConfig::Custom(components) = config else {
            return Err(Error::InvalidParameters("checksum keys need custom options".into()));
        };
        let tag = components.require("tag")?;
        let tag = u8::try_from(tag).map_err(|_| Error::InvalidParameters("tag must fit a byte".into()))?;
        Ok(ChecksumKey { kind: self.0, tag })
    }
}

impl KeyFactory for ChecksumFactory {
    fn make_public_key(&self, config: &KeyConfig) -> Result<PublicKey> {
        Ok(PublicKey::new(self.key(config)?))
    }

    fn make_private_key(&self, config: &KeyConfig) -> Result<PrivateKey> {
        Ok(PrivateKey::new(self.key(config)?))
    }
}

struct ChecksumSigner;

impl Signer for ChecksumSigner {
    fn sign(
        &self,
        key: &PrivateKey,
        message: &[u8],
        _options: &OperationOptions,
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<u8>> {
        let key = key.material::<ChecksumKey>()?;
        Ok(vec![checksum(key.tag, message)])
    }
}

struct ChecksumVerifier;

impl Verifier for ChecksumVerifier {
    fn verify(
        &self,
        key: &PublicKey,
        message: &[u8],
        signature: &[u8],
        _options: &OperationOptions,
    ) -> Result<bool> {
        let key = key.material::<ChecksumKey>()?;
        match signature {
            [sum] => Ok(*sum == checksum(key.tag, message)),
            _ => Err(Error::MalformedSignature("checksum signatures are one byte".into())),
        }
    }
}

fn checksum_bundle(kind: Kind) -> AlgorithmBundle {
    AlgorithmBundle::new()
        .with_key_factory(ChecksumFactory(kind))
        .with_signer(ChecksumSigner)
        .with_verifier(ChecksumVerifier)
}

fn tag_config(tag: u32) -> KeyConfig {
    KeyConfig::Custom(Components::new().with("tag", tag))
}

// ----- Registry Tests -----

#[test]
fn test_builtin_kinds_registered() {
    let kinds = list_kinds();
    for kind in Kind::builtin() {
        assert!(kinds.contains(&kind), "{} missing from registry", kind);
        assert!(is_registered(kind));
    }
}

#[test]
fn test_custom_kind_round_trip() -> Result<()> {
    let kind = Kind::Custom("checksum");
    assert!(register_kind(kind, checksum_bundle(kind)).is_none());
    assert!(is_registered(kind));

    let private = make_private_key(kind, &tag_config(7))?;
    let public = make_public_key(kind, &tag_config(7))?;
    let options = OperationOptions::default();

    let signature = sign_message(&private, b"hello", 0, None, &options)?;
    assert!(verify_signature(&public, b"hello", &signature, 0, None, &options)?);
    assert!(!verify_signature(&public, b"hellp", &signature, 0, None, &options)?);

    assert!(matches!(
        pkc_protocol::encrypt_message(&public, b"hello", 0, None, &options),
        Err(Error::UnsupportedOperation {
            capability: Capability::Encrypt,
            ..
        })
    ));
    Ok(())
}

#[test]
fn test_replacing_a_registration() {
    let kind = Kind::Custom("replaceable");
    assert!(register_kind(kind, AlgorithmBundle::new()).is_none());
    assert!(get_bundle(kind).is_some_and(|bundle| bundle.capabilities().is_empty()));

    let previous = register_kind(kind, checksum_bundle(kind));
    assert!(previous.is_some());
    assert_eq!(
        get_bundle(kind).map(|bundle| bundle.capabilities()),
        Some(vec![
            Capability::KeyConstruction,
            Capability::Sign,
            Capability::Verify
        ])
    );
}

#[test]
fn test_unregistered_kind() {
    let kind = Kind::Custom("never-registered");
    assert!(!is_registered(kind));
    assert_eq!(
        make_public_key(kind, &tag_config(1)).err(),
        Some(Error::UnsupportedKind(kind))
    );
    assert_eq!(
        generate_key_pair(kind, Some(64), &GenerationOptions::default()).err(),
        Some(Error::UnsupportedKind(kind))
    );
}

#[test]
fn test_key_material_mismatch() -> Result<()> {
    // a foreign material type declaring a built-in kind
    let impostor = PrivateKey::new(ChecksumKey {
        kind: Kind::Rsa,
        tag: 1,
    });
    let result = sign_message(&impostor, b"x", 0, None, &OperationOptions::default());
    assert!(matches!(result, Err(Error::InvalidParameters(_))));
    Ok(())
}

// ----- Key Construction Tests -----

#[test]
fn test_rsa_keys_from_config() -> Result<()> {
    let public = make_public_key(
        Kind::Rsa,
        &KeyConfig::Rsa(RsaKeyConfig::new().modulus(3233u32).public_exponent(17u32)),
    )?;
    let private = make_private_key(
        Kind::Rsa,
        &KeyConfig::Rsa(
            RsaKeyConfig::new()
                .modulus([0x0Cu8, 0xA1])
                .private_exponent(413u32)
                .public_exponent(17u32),
        ),
    )?;

    let components = destructure_public_key(&public);
    assert_eq!(components.require("n")?, &BigUint::from(3233u32));
    assert_eq!(components.require("e")?, &BigUint::from(17u32));
    assert_eq!(destructure_private_key(&private).require("d")?, &BigUint::from(413u32));

    let options = OperationOptions::default();
    let signature = sign_message(&private, &[0x07, 0xD0], 0, None, &options)?;
    assert!(verify_signature(&public, &[0x07, 0xD0], &signature, 0, None, &options)?);
    Ok(())
}

#[test]
fn test_incomplete_config() {
    let result = make_public_key(Kind::Rsa, &KeyConfig::Rsa(RsaKeyConfig::new().modulus(3233u32)));
    assert_eq!(result.err(), Some(Error::MissingParameter("public_exponent".into())));

    let result = make_public_key(Kind::Dsa, &KeyConfig::Rsa(RsaKeyConfig::new()));
    assert!(matches!(result, Err(Error::InvalidParameters(_))));
}

#[test]
fn test_group_key_components_round_trip() -> Result<()> {
    let group = Arc::new(DiscreteLogarithmGroup::new(23u32, 11u32, 4u32)?);
    let private = make_private_key(
        Kind::Elgamal,
        &KeyConfig::Elgamal(GroupKeyConfig::new().group(Arc::clone(&group)).secret_exponent(6u32)),
    )?;

    let components = destructure_private_key(&private);
    let names: Vec<&str> = components.names().collect();
    assert_eq!(names, vec!["p", "q", "g", "y", "x"]);

    // rebuild the public key from its destructured components
    let rebuilt_group = Arc::new(DiscreteLogarithmGroup::new(
        components.require("p")?,
        components.require("q")?,
        components.require("g")?,
    )?);
    let public = make_public_key(
        Kind::Elgamal,
        &KeyConfig::Elgamal(
            GroupKeyConfig::new()
                .group(rebuilt_group)
                .public_value(components.require("y")?),
        ),
    )?;
    assert_eq!(destructure_public_key(&public).require("y")?, components.require("y")?);
    Ok(())
}
