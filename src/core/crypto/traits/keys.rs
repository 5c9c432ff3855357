/*!
Key material and the public/private key handles.

A key is an immutable [`KeyMaterial`] value behind an `Arc`. The material
declares its [`Kind`], which is what key-based operations dispatch on;
implementations recover their concrete type through [`PublicKey::material`]
or [`PrivateKey::material`].
*/

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::core::crypto::types::algorithms::Kind;
use crate::core::crypto::types::components::Components;
use crate::core::error::{Error, Result};

/// Algorithm-specific key fields
pub trait KeyMaterial: fmt::Debug + Send + Sync + 'static {
    /// The family this key belongs to
    fn kind(&self) -> Kind;

    /// The key's named integer components
    fn components(&self) -> Components;

    /// Upcast for downcasting to the concrete material type
    fn as_any(&self) -> &dyn Any;
}

macro_rules! key_handle {
    ($name:ident, $role:literal) => {
        #[doc = concat!("Shared handle to ", $role, " key material")]
        #[derive(Clone, Debug)]
        pub struct $name(Arc<dyn KeyMaterial>);

        impl $name {
            /// Wrap key material
            pub fn new(material: impl KeyMaterial) -> Self {
                Self(Arc::new(material))
            }

            /// The kind used to dispatch operations on this key
            pub fn kind(&self) -> Kind {
                self.0.kind()
            }

            /// The key's named integer components
            pub fn components(&self) -> Components {
                self.0.components()
            }

            /// Borrow the material as `T`, if that is its concrete type
            pub fn downcast_ref<T: KeyMaterial>(&self) -> Option<&T> {
                self.0.as_any().downcast_ref::<T>()
            }

            /// Borrow the material as `T`, failing if the key's declared kind
            /// is backed by a different material type.
            pub fn material<T: KeyMaterial>(&self) -> Result<&T> {
                self.downcast_ref::<T>().ok_or_else(|| {
                    Error::InvalidParameters(format!(
                        concat!("{} ", $role, " key has unexpected material type"),
                        self.kind()
                    ))
                })
            }
        }
    };
}

key_handle!(PublicKey, "public");
key_handle!(PrivateKey, "private");
