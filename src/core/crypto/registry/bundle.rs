/*!
Implementation bundles.

An [`AlgorithmBundle`] groups the capability implementations one algorithm
family provides. Missing capabilities surface as
[`Error::UnsupportedOperation`] at dispatch time.
*/

use std::fmt;
use std::sync::Arc;

use crate::core::crypto::traits::{
    Decryptor, Encryptor, KeyExchangeParticipant, KeyFactory, KeyPairGenerator, MessageCodec,
    SignatureCodec, Signer, Verifier,
};
use crate::core::crypto::types::algorithms::{Capability, Kind};
use crate::core::error::{Error, Result};

/// Capability implementations registered for one kind
#[derive(Clone, Default)]
pub struct AlgorithmBundle {
    key_factory: Option<Arc<dyn KeyFactory>>,
    key_pair_generator: Option<Arc<dyn KeyPairGenerator>>,
    signer: Option<Arc<dyn Signer>>,
    verifier: Option<Arc<dyn Verifier>>,
    encryptor: Option<Arc<dyn Encryptor>>,
    decryptor: Option<Arc<dyn Decryptor>>,
    key_exchange: Option<Arc<dyn KeyExchangeParticipant>>,
    signature_codec: Option<Arc<dyn SignatureCodec>>,
    message_codec: Option<Arc<dyn MessageCodec>>,
}

fn require<'a, T: ?Sized>(
    slot: &'a Option<Arc<T>>,
    kind: Kind,
    capability: Capability,
) -> Result<&'a T> {
    slot.as_deref().ok_or_else(|| Error::unsupported(kind, capability))
}

impl AlgorithmBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_factory(mut self, factory: impl KeyFactory + 'static) -> Self {
        self.key_factory = Some(Arc::new(factory));
        self
    }

    pub fn with_key_pair_generator(mut self, generator: impl KeyPairGenerator + 'static) -> Self {
        self.key_pair_generator = Some(Arc::new(generator));
        self
    }

    pub fn with_signer(mut self, signer: impl Signer + 'static) -> Self {
        self.signer = Some(Arc::new(signer));
        self
    }

    pub fn with_verifier(mut self, verifier: impl Verifier + 'static) -> Self {
        self.verifier = Some(Arc::new(verifier));
        self
    }

    pub fn with_encryptor(mut self, encryptor: impl Encryptor + 'static) -> Self {
        self.encryptor = Some(Arc::new(encryptor));
        self
    }

    pub fn with_decryptor(mut self, decryptor: impl Decryptor + 'static) -> Self {
        self.decryptor = Some(Arc::new(decryptor));
        self
    }

    pub fn with_key_exchange(mut self, participant: impl KeyExchangeParticipant + 'static) -> Self {
        self.key_exchange = Some(Arc::new(participant));
        self
    }

    pub fn with_signature_codec(mut self, codec: impl SignatureCodec + 'static) -> Self {
        self.signature_codec = Some(Arc::new(codec));
        self
    }

    pub fn with_message_codec(mut self, codec: impl MessageCodec + 'static) -> Self {
        self.message_codec = Some(Arc::new(codec));
        self
    }

    pub fn key_factory(&self, kind: Kind) -> Result<&dyn KeyFactory> {
        require(&self.key_factory, kind, Capability::KeyConstruction)
    }

    pub fn key_pair_generator(&self, kind: Kind) -> Result<&dyn KeyPairGenerator> {
        require(&self.key_pair_generator, kind, Capability::KeyGeneration)
    }

    pub fn signer(&self, kind: Kind) -> Result<&dyn Signer> {
        require(&self.signer, kind, Capability::Sign)
    }

    pub fn verifier(&self, kind: Kind) -> Result<&dyn Verifier> {
        require(&self.verifier, kind, Capability::Verify)
    }

    pub fn encryptor(&self, kind: Kind) -> Result<&dyn Encryptor> {
        require(&self.encryptor, kind, Capability::Encrypt)
    }

    pub fn decryptor(&self, kind: Kind) -> Result<&dyn Decryptor> {
        require(&self.decryptor, kind, Capability::Decrypt)
    }

    pub fn key_exchange(&self, kind: Kind) -> Result<&dyn KeyExchangeParticipant> {
        require(&self.key_exchange, kind, Capability::KeyExchange)
    }

    pub fn signature_codec(&self, kind: Kind) -> Result<&dyn SignatureCodec> {
        require(&self.signature_codec, kind, Capability::SignatureCodec)
    }

    pub fn message_codec(&self, kind: Kind) -> Result<&dyn MessageCodec> {
        require(&self.message_codec, kind, Capability::MessageCodec)
    }

    /// Capabilities this bundle provides
    pub fn capabilities(&self) -> Vec<Capability> {
        let slots = [
            (self.key_factory.is_some(), Capability::KeyConstruction),
            (self.key_pair_generator.is_some(), Capability::KeyGeneration),
            (self.signer.is_some(), Capability::Sign),
            (self.verifier.is_some(), Capability::Verify),
            (self.encryptor.is_some(), Capability::Encrypt),
            (self.decryptor.is_some(), Capability::Decrypt),
            (self.key_exchange.is_some(), Capability::KeyExchange),
            (self.signature_codec.is_some(), Capability::SignatureCodec),
            (self.message_codec.is_some(), Capability::MessageCodec),
        ];
        slots
            .into_iter()
            .filter_map(|(present, capability)| present.then_some(capability))
            .collect()
    }
}

impl fmt::Debug for AlgorithmBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmBundle")
            .field("capabilities", &self.capabilities())
            .finish()
    }
}
