//! Merkle root over an ordered list of leaves using BIP340-style tagged hashing.
//!
//! ```ignore
//! let root = compute_root_hex::<Sha256, _, _>(
//!     "Bitcoin_Transaction",
//!     ["aaa", "bbb", "ccc", "ddd", "eee"],
//!     OddNodePolicy::SelfPair,
//! )?;
//! ```
#![cfg_attr(feature = "bench", feature(test))]
#[cfg(feature = "bench")]
extern crate test;

use std::fmt::Debug;

pub mod error;
pub mod tagged;
pub mod tree;

pub use error::{Error, Result};
pub use tagged::{tagged_hash, tagged_hash_hex, TaggedHasher};
pub use tree::{
    compute_root, compute_root_hex, get_merkle_tree_height, MerkleTree, OddNodePolicy, MAX_LEAVES,
};

/// Trait for the hash primitive underneath the tagged hash
/// Using 'sha*' crates like interface, because it's more flexible
pub trait Hasher: Sized {
    /// Output type
    type Hash: AsRef<[u8]> + Clone + PartialEq + Debug + Send + Sync;

    fn new() -> Self;
    fn update(self, data: impl AsRef<[u8]>) -> Self;
    fn finalize(self) -> Self::Hash;
}

#[cfg(feature = "sha3")]
pub mod sha3 {
    pub use sha3::*;

    use super::Hasher;

    pub struct Wrapper<H: Digest>(H);

    impl<D: Digest> Hasher for Wrapper<D> {
        type Hash = generic_array::GenericArray<u8, <D as digest::OutputSizeUser>::OutputSize>;

        fn new() -> Self {
            Self(D::new())
        }
        fn update(self, data: impl AsRef<[u8]>) -> Self {
            Self(self.0.chain_update(data))
        }
        fn finalize(self) -> Self::Hash {
            D::finalize(self.0)
        }
    }
}

#[cfg(feature = "sha2")]
pub mod sha2 {
    pub use sha2::*;

    use super::Hasher;

    pub struct Wrapper<H: Digest>(H);

    impl<D: Digest> Hasher for Wrapper<D> {
        type Hash = generic_array::GenericArray<u8, <D as digest::OutputSizeUser>::OutputSize>;

        fn new() -> Self {
            Self(D::new())
        }
        fn update(self, data: impl AsRef<[u8]>) -> Self {
            Self(self.0.chain_update(data))
        }
        fn finalize(self) -> Self::Hash {
            D::finalize(self.0)
        }
    }
}

#[cfg(feature = "sha2")]
pub type Sha256 = sha2::Wrapper<::sha2::Sha256>;
#[cfg(feature = "sha3")]
pub type Sha3_256 = sha3::Wrapper<::sha3::Sha3_256>;
#[cfg(feature = "sha3")]
pub type Keccak256 = sha3::Wrapper<::sha3::Keccak256>;
