//! BIP340-style tagged hashing.
//!
//! `tagged_hash(tag, m) = H(H(tag) || H(tag) || m)`. Prefixing the message with
//! the tag digest twice makes every tag select an independent hash function, so
//! digests computed under one tag never collide with digests of another.

use std::{fmt, marker::PhantomData};

use log::warn;

use crate::Hasher;

/// Hasher bound to a single tag.
///
/// `H(tag)` is computed once on construction and reused by every call.
pub struct TaggedHasher<H: Hasher> {
    tag: String,
    tag_hash: H::Hash,
    _hasher: PhantomData<fn() -> H>,
}

impl<H: Hasher> TaggedHasher<H> {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if tag.is_empty() {
            warn!(target: "tagged_merkle::tagged", "TaggedHasher::new() empty tag, domain separation is weakened");
        }

        let tag_hash = H::new().update(tag.as_bytes()).finalize();
        Self { tag, tag_hash, _hasher: PhantomData }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    fn prefixed(&self) -> H {
        H::new().update(&self.tag_hash).update(&self.tag_hash)
    }

    pub fn compute(&self, message: impl AsRef<[u8]>) -> H::Hash {
        self.prefixed().update(message).finalize()
    }

    /// Hash of `left || right`, fed to the primitive without building the concatenation.
    pub fn compute_pair(&self, left: impl AsRef<[u8]>, right: impl AsRef<[u8]>) -> H::Hash {
        self.prefixed().update(left).update(right).finalize()
    }

    /// Lowercase hex of [`TaggedHasher::compute`]. Display only, never feed it back into a tree.
    pub fn compute_hex(&self, message: impl AsRef<[u8]>) -> String {
        hex::encode(self.compute(message))
    }
}

impl<H: Hasher> Clone for TaggedHasher<H> {
    fn clone(&self) -> Self {
        Self { tag: self.tag.clone(), tag_hash: self.tag_hash.clone(), _hasher: PhantomData }
    }
}

impl<H: Hasher> fmt::Debug for TaggedHasher<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedHasher")
            .field("tag", &self.tag)
            .field("tag_hash", &hex::encode(&self.tag_hash))
            .finish()
    }
}

pub fn tagged_hash<H: Hasher>(tag: &str, message: impl AsRef<[u8]>) -> H::Hash {
    TaggedHasher::<H>::new(tag).compute(message)
}

pub fn tagged_hash_hex<H: Hasher>(tag: &str, message: impl AsRef<[u8]>) -> String {
    hex::encode(tagged_hash::<H>(tag, message))
}
