use std::borrow::Cow;

use log::{debug, trace};

use crate::{
    error::{Error, Result},
    Hasher, TaggedHasher,
};

/// Upper bound on leaves, keeps the fold within 32 hashing rounds.
pub const MAX_LEAVES: u64 = 1 << 32;

/// What happens to the last node of a level with an odd node count.
///
/// The two policies produce different roots whenever any level has an odd
/// count, so the choice must match whatever consumes the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OddNodePolicy {
    /// The unpaired node is hashed together with a copy of itself.
    /// Every non-leaf node is then the hash of exactly two children.
    #[default]
    SelfPair,
    /// The unpaired node is copied unchanged into the next level.
    PassThrough,
}

/// Merkle tree over tagged leaf hashes
///
/// The same tag is used for leaves and for intermediate nodes.
/// This solution is deliberately left without incremental calculation.
pub struct MerkleTree<H: Hasher> {
    hasher: TaggedHasher<H>,
    policy: OddNodePolicy,
    /// Hashed leaves, never empty
    leaves: Vec<H::Hash>,
}

impl<H: Hasher> MerkleTree<H> {
    /// Hashes every leaf under `tag`.
    ///
    /// Fails with [`Error::EmptyLeaves`] before any hashing when `leaves` is empty.
    pub fn new<I, B>(tag: impl Into<String>, leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let leaves = leaves.into_iter().collect::<Vec<_>>();
        if leaves.is_empty() {
            return Err(Error::EmptyLeaves)
        }
        let count = leaves.len() as u64;
        if count > MAX_LEAVES {
            return Err(Error::TooManyLeaves { count })
        }

        let hasher = TaggedHasher::new(tag);
        let leaves = leaves.iter().map(|leaf| hasher.compute(leaf)).collect();

        Ok(Self { hasher, policy: OddNodePolicy::default(), leaves })
    }

    pub fn with_policy(mut self, policy: OddNodePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn tag(&self) -> &str {
        self.hasher.tag()
    }

    pub fn policy(&self) -> OddNodePolicy {
        self.policy
    }

    pub fn leaves_count(&self) -> usize {
        self.leaves.len()
    }

    /// Number of hashing rounds between the leaves and the root.
    pub fn height(&self) -> usize {
        get_merkle_tree_height(self.leaves_count())
    }

    pub fn get_leaf(&self, index: usize) -> Option<&H::Hash> {
        self.leaves.get(index)
    }

    pub fn calculate_root(&self) -> H::Hash {
        debug!(
            target: "tagged_merkle::tree",
            "MerkleTree::calculate_root() [leaves={}, tag={:?}, policy={:?}]",
            self.leaves_count(),
            self.tag(),
            self.policy,
        );

        let mut level: Cow<'_, [H::Hash]> = Cow::Borrowed(&self.leaves);
        let mut round = 0;
        while level.len() > 1 {
            level = Cow::Owned(next_level(&self.hasher, self.policy, &level));
            round += 1;
            trace!(target: "tagged_merkle::tree", "Level {} built with {} nodes", round, level.len());
        }

        // `new` rejects empty leaf lists, so one node always remains
        level[0].clone()
    }

    pub fn calculate_root_hex(&self) -> String {
        hex::encode(self.calculate_root())
    }
}

/// Pairs adjacent nodes `(0, 1), (2, 3), ...` into their parents.
fn next_level<H: Hasher>(
    hasher: &TaggedHasher<H>,
    policy: OddNodePolicy,
    level: &[H::Hash],
) -> Vec<H::Hash> {
    let parent = |chunk: &[H::Hash]| match chunk {
        [left, right] => hasher.compute_pair(left, right),
        [single] => match policy {
            OddNodePolicy::SelfPair => hasher.compute_pair(single, single),
            OddNodePolicy::PassThrough => single.clone(),
        },
        unreachable_chunk => unreachable!(
            "{} chunk size cannot be reached, due to the argument in `chunks` fn",
            unreachable_chunk.len()
        ),
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        level.par_chunks(2).map(parent).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        level.chunks(2).map(parent).collect()
    }
}

pub fn get_merkle_tree_height(leaves_count: usize) -> usize {
    (leaves_count as u64).next_power_of_two().trailing_zeros() as usize
}

/// Root of `leaves` under `tag`, folding odd levels with `policy`.
pub fn compute_root<H, I, B>(tag: &str, leaves: I, policy: OddNodePolicy) -> Result<H::Hash>
where
    H: Hasher,
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    Ok(MerkleTree::<H>::new(tag, leaves)?.with_policy(policy).calculate_root())
}

pub fn compute_root_hex<H, I, B>(tag: &str, leaves: I, policy: OddNodePolicy) -> Result<String>
where
    H: Hasher,
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    compute_root::<H, I, B>(tag, leaves, policy).map(hex::encode)
}
