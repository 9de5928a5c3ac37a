use alloy_primitives::B256;
use tracing::debug;

use crate::{
    constants::{DEPOSIT_CONTRACT_TREE_DEPTH, MAX_DEPOSIT_COUNT},
    error::DepositError,
    hasher::HashFunction,
};

/// Incremental deposit tree. Keeps one node per level, the root of the right-most complete
/// subtree at that level, which is enough to derive the root of the whole append-only tree.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MerkleAccumulator {
    branch: [B256; DEPOSIT_CONTRACT_TREE_DEPTH],
    deposit_count: u64,
    zero_hashes: [B256; DEPOSIT_CONTRACT_TREE_DEPTH],
    hash_function: HashFunction,
}

impl MerkleAccumulator {
    pub fn new(hash_function: HashFunction) -> Self {
        Self::from_parts(
            [B256::ZERO; DEPOSIT_CONTRACT_TREE_DEPTH],
            0,
            hash_function,
        )
    }

    /// Rebuilds an accumulator from a stored branch and count, no leaves needed.
    pub fn from_parts(
        branch: [B256; DEPOSIT_CONTRACT_TREE_DEPTH],
        deposit_count: u64,
        hash_function: HashFunction,
    ) -> Self {
        Self {
            branch,
            deposit_count,
            zero_hashes: hash_function.zero_hashes(),
            hash_function,
        }
    }

    pub fn branch(&self) -> &[B256; DEPOSIT_CONTRACT_TREE_DEPTH] {
        &self.branch
    }

    pub fn deposit_count(&self) -> u64 {
        self.deposit_count
    }

    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    pub fn is_full(&self) -> bool {
        self.deposit_count >= MAX_DEPOSIT_COUNT
    }

    /// Folds `leaf` in like a binary counter increment: every level that carries is combined
    /// with the stored node, the first level that does not carry stores the result.
    pub fn insert(&mut self, leaf: B256) -> Result<(), DepositError> {
        if self.is_full() {
            return Err(DepositError::TreeFull);
        }

        let mut size = self.deposit_count + 1;
        let mut node = leaf;
        for height in 0..DEPOSIT_CONTRACT_TREE_DEPTH {
            if size & 1 == 1 {
                debug!(height, %node, "Stored deposit tree branch node");
                self.branch[height] = node;
                break;
            }
            node = self
                .hash_function
                .hash_concat(self.branch[height].as_slice(), node.as_slice());
            size >>= 1;
        }
        self.deposit_count += 1;
        Ok(())
    }

    pub fn root(&self) -> B256 {
        let mut node = B256::ZERO;
        let mut size = self.deposit_count;
        for height in 0..DEPOSIT_CONTRACT_TREE_DEPTH {
            node = if size & 1 == 1 {
                self.hash_function
                    .hash_concat(self.branch[height].as_slice(), node.as_slice())
            } else {
                self.hash_function
                    .hash_concat(node.as_slice(), self.zero_hashes[height].as_slice())
            };
            size >>= 1;
        }
        self.hash_function
            .hash_concat(node.as_slice(), length_mix_in(self.deposit_count).as_slice())
    }
}

/// Little-endian count padded to a chunk, the last node hashed into a deposit root.
pub fn length_mix_in(deposit_count: u64) -> B256 {
    let mut chunk = B256::ZERO;
    chunk.0[..8].copy_from_slice(&deposit_count.to_le_bytes());
    chunk
}

/// Merkle proof of `leaves[index]` against the root of all `leaves`: one sibling per level
/// followed by the length mix-in. Returns `None` when `index` is out of range.
pub fn compute_merkle_proof(
    leaves: &[B256],
    index: usize,
    hash_function: HashFunction,
) -> Option<Vec<B256>> {
    if index >= leaves.len() {
        return None;
    }

    let zero_hashes = hash_function.zero_hashes();
    let mut proof = Vec::with_capacity(DEPOSIT_CONTRACT_TREE_DEPTH + 1);
    let mut layer = leaves.to_vec();
    let mut position = index;
    for zero_hash in zero_hashes {
        proof.push(layer.get(position ^ 1).copied().unwrap_or(zero_hash));
        layer = layer
            .chunks(2)
            .map(|pair| {
                let right = pair.get(1).unwrap_or(&zero_hash);
                hash_function.hash_concat(pair[0].as_slice(), right.as_slice())
            })
            .collect();
        position >>= 1;
    }
    proof.push(length_mix_in(leaves.len() as u64));
    Some(proof)
}

/// Check if ``leaf`` at ``index`` verifies against the Merkle ``root`` and ``branch``.
pub fn is_valid_merkle_branch(
    leaf: B256,
    branch: &[B256],
    depth: u64,
    index: u64,
    root: B256,
    hash_function: HashFunction,
) -> bool {
    if branch.len() < depth as usize {
        return false;
    }
    let mut value = leaf;
    for i in 0..depth {
        value = if (index >> i) & 1 == 1 {
            hash_function.hash_concat(branch[i as usize].as_slice(), value.as_slice())
        } else {
            hash_function.hash_concat(value.as_slice(), branch[i as usize].as_slice())
        };
    }
    value == root
}
