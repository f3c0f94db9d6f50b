#![cfg(feature = "sha2")]

use tagged_merkle::{
    compute_root, compute_root_hex, tagged_hash, Error, MerkleTree, OddNodePolicy, Sha256,
};

const TAG: &str = "Bitcoin_Transaction";
const LEAVES: [&str; 5] = ["aaa", "bbb", "ccc", "ddd", "eee"];

fn hex_to_digest(hex: &str) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    let decoded = hex::decode(hex).expect("valid hex digest");
    assert_eq!(decoded.len(), 32);
    bytes.copy_from_slice(&decoded);
    bytes
}

#[test]
fn five_leaf_roots_match_reference() {
    let self_pair = compute_root::<Sha256, _, _>(TAG, LEAVES, OddNodePolicy::SelfPair).unwrap();
    assert_eq!(
        self_pair.as_slice(),
        &hex_to_digest("4aa906745f72053498ecc74f79813370a4fe04f85e09421df2d5ef760dfa94b5")[..]
    );

    let pass_through =
        compute_root::<Sha256, _, _>(TAG, LEAVES, OddNodePolicy::PassThrough).unwrap();
    assert_eq!(
        pass_through.as_slice(),
        &hex_to_digest("933e9966f817f6a916bb6cba82afaa696681fc3d5985f69ef6245232e7bd5e2d")[..]
    );
}

#[test]
fn three_leaf_roots_match_reference() {
    let leaves = &LEAVES[..3];
    assert_eq!(
        compute_root_hex::<Sha256, _, _>(TAG, leaves, OddNodePolicy::SelfPair).unwrap(),
        "879c4d184c749f60e91d46d1e1c7dae9816f63475230378827bdcfd198ec2d3c"
    );
    assert_eq!(
        compute_root_hex::<Sha256, _, _>(TAG, leaves, OddNodePolicy::PassThrough).unwrap(),
        "27fb3c13dc2cb77eb371d710d201558c377e1c7bd2aa81e1f3aa97a46bc59b53"
    );
}

#[test]
fn owned_and_borrowed_leaves_agree() {
    let owned: Vec<Vec<u8>> = LEAVES.iter().map(|leaf| leaf.as_bytes().to_vec()).collect();
    let strings: Vec<String> = LEAVES.iter().map(|leaf| leaf.to_string()).collect();

    let from_bytes = MerkleTree::<Sha256>::new(TAG, &owned).unwrap().calculate_root();
    let from_strings = MerkleTree::<Sha256>::new(TAG, strings).unwrap().calculate_root();
    let from_strs = MerkleTree::<Sha256>::new(TAG, LEAVES).unwrap().calculate_root();

    assert_eq!(from_bytes, from_strings);
    assert_eq!(from_bytes, from_strs);
}

#[test]
fn root_of_one_leaf_is_its_tagged_hash() {
    let tree = MerkleTree::<Sha256>::new(TAG, [b"only".as_slice()]).unwrap();
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.calculate_root(), tagged_hash::<Sha256>(TAG, b"only"));
}

#[test]
fn empty_input_is_invalid() {
    let err = compute_root_hex::<Sha256, _, String>(TAG, vec![], OddNodePolicy::SelfPair)
        .unwrap_err();
    assert!(matches!(err, Error::EmptyLeaves));
    assert_eq!(err.to_string(), "Invalid input: leaf list must not be empty");
}
