/// A key that hashes to its own value.
///
/// The hash is the key's bits as a 32-bit word: unsigned keys are zero extended and signed keys
/// are sign extended, so `-1` hashes to `u32::MAX`. Keys wider than 32 bits aren't supported,
/// because truncating them would make the hash lossy.
pub trait IdentityHash: Eq {
    /// Returns the key as a 32-bit word.
    fn identity_hash(&self) -> u32;
}

macro_rules! impl_identity_hash {
    ($($int:ty),*) => {
        $(
            impl IdentityHash for $int {
                fn identity_hash(&self) -> u32 {
                    *self as u32
                }
            }
        )*
    };
}

impl_identity_hash!(u8, u16, u32, i8, i16, i32);
