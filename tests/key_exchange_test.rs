use std::sync::Arc;

use once_cell::sync::Lazy;
use pkc_protocol::{
    Capability, DiscreteLogarithmGroup, Error, GenerationOptions, GroupKeyConfig, Kind, KeyConfig,
    PrivateKey, PublicKey, Result, derive_shared_key, destructure_private_key, diffie_hellman,
    generate_key_pair, make_private_key, make_public_key,
};

static GROUP: Lazy<Arc<DiscreteLogarithmGroup>> = Lazy::new(|| {
    Arc::new(DiscreteLogarithmGroup::generate(256, &mut rand::rng()).expect("group generation"))
});

fn keys_in(group: &Arc<DiscreteLogarithmGroup>, kind: Kind) -> Result<(PrivateKey, PublicKey)> {
    let options = GenerationOptions::new().with_group(Arc::clone(group));
    generate_key_pair(kind, Some(group.modulus_bits()), &options)
}

#[test]
fn test_diffie_hellman_symmetry() -> Result<()> {
    let (alice_private, alice_public) = keys_in(&GROUP, Kind::DiffieHellman)?;
    let (bob_private, bob_public) = keys_in(&GROUP, Kind::DiffieHellman)?;

    let alice_secret = diffie_hellman(&alice_private, &bob_public)?;
    let bob_secret = diffie_hellman(&bob_private, &alice_public)?;
    assert_eq!(alice_secret, bob_secret);
    // encoded at the modulus width
    assert_eq!(alice_secret.len(), 32);
    Ok(())
}

#[test]
fn test_elgamal_keys_exchange() -> Result<()> {
    let (alice_private, alice_public) = keys_in(&GROUP, Kind::Elgamal)?;
    let (bob_private, bob_public) = keys_in(&GROUP, Kind::Elgamal)?;

    assert_eq!(
        diffie_hellman(&alice_private, &bob_public)?,
        diffie_hellman(&bob_private, &alice_public)?
    );
    Ok(())
}

#[test]
fn test_dsa_keys_cannot_exchange() -> Result<()> {
    let (private, _) = generate_key_pair(
        Kind::Dsa,
        Some(256),
        &GenerationOptions::new().with_group(Arc::clone(&GROUP)),
    )?;
    let (_, public) = keys_in(&GROUP, Kind::DiffieHellman)?;

    assert_eq!(
        diffie_hellman(&private, &public).err(),
        Some(Error::UnsupportedOperation {
            kind: Kind::Dsa,
            capability: Capability::KeyExchange
        })
    );
    Ok(())
}

#[test]
fn test_incompatible_keys() -> Result<()> {
    let (dh_private, _) = keys_in(&GROUP, Kind::DiffieHellman)?;
    let (_, elgamal_public) = keys_in(&GROUP, Kind::Elgamal)?;
    assert!(matches!(
        diffie_hellman(&dh_private, &elgamal_public),
        Err(Error::IncompatibleParameters(_))
    ));

    let other_group = Arc::new(DiscreteLogarithmGroup::new(23u32, 11u32, 4u32)?);
    let (_, foreign_public) = keys_in(&other_group, Kind::DiffieHellman)?;
    assert!(matches!(
        diffie_hellman(&dh_private, &foreign_public),
        Err(Error::IncompatibleParameters(_))
    ));
    Ok(())
}

#[test]
fn test_generation_needs_group_or_size() -> Result<()> {
    let result = generate_key_pair(Kind::DiffieHellman, None, &GenerationOptions::default());
    assert_eq!(result.err(), Some(Error::MissingParameter("group".into())));

    // a group alone is enough for Diffie-Hellman, not for ElGamal
    let options = GenerationOptions::new().with_group(Arc::clone(&GROUP));
    assert!(generate_key_pair(Kind::DiffieHellman, None, &options).is_ok());
    assert_eq!(
        generate_key_pair(Kind::Elgamal, None, &options).err(),
        Some(Error::MissingParameter("num_bits".into()))
    );
    Ok(())
}

#[test]
fn test_fresh_group_generation() -> Result<()> {
    let (private, public) = generate_key_pair(Kind::DiffieHellman, Some(128), &GenerationOptions::default())?;
    let components = destructure_private_key(&private);
    let p = components.require("p")?;
    assert_eq!(p.bits(), 128);
    assert_eq!(public.components().require("p")?, p);
    Ok(())
}

#[test]
fn test_tiny_group_from_config() -> Result<()> {
    let group = Arc::new(DiscreteLogarithmGroup::new(23u32, 11u32, 4u32)?);

    let alice = make_private_key(
        Kind::DiffieHellman,
        &KeyConfig::DiffieHellman(GroupKeyConfig::new().group(Arc::clone(&group)).secret_exponent(3u32)),
    )?;
    // 4^7 mod 23 = 8
    let bob_public = make_public_key(
        Kind::DiffieHellman,
        &KeyConfig::DiffieHellman(GroupKeyConfig::new().group(group).public_value(8u32)),
    )?;

    // 8^3 mod 23 = 6
    assert_eq!(diffie_hellman(&alice, &bob_public)?, vec![6]);
    Ok(())
}

#[test]
fn test_derive_shared_key() -> Result<()> {
    let (alice_private, alice_public) = keys_in(&GROUP, Kind::DiffieHellman)?;
    let (bob_private, bob_public) = keys_in(&GROUP, Kind::DiffieHellman)?;

    let alice_key = derive_shared_key(&alice_private, &bob_public, b"session")?;
    let bob_key = derive_shared_key(&bob_private, &alice_public, b"session")?;
    assert_eq!(alice_key, bob_key);

    let other_context = derive_shared_key(&alice_private, &bob_public, b"transport")?;
    assert_ne!(alice_key, other_context);
    Ok(())
}
