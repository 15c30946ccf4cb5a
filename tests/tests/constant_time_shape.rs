//! The ladder's field-operation sequence must not depend on secret data
//!
//! Counts every field operation through the `op-trace` counters and
//! compares the totals across private keys and peer keys.

use montdh::algorithms::field::trace::{self, OpCounts};
use montdh::prelude::*;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn shared_secret_shape<const LIMBS: usize, const N: usize>(
    engine: &DiffieHellmanEngine<LIMBS, N>,
    private_key: &[u8],
    peer: &[u8],
) -> OpCounts {
    trace::reset();
    let _ = engine.compute_shared_secret(private_key, peer).unwrap();
    trace::snapshot()
}

fn derive_shape<const LIMBS: usize, const N: usize>(
    engine: &DiffieHellmanEngine<LIMBS, N>,
    private_key: &[u8],
) -> OpCounts {
    trace::reset();
    let _ = engine.derive_public_key(private_key).unwrap();
    trace::snapshot()
}

fn check_engine<const LIMBS: usize, const N: usize>(engine: DiffieHellmanEngine<LIMBS, N>, seed: u64) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut keys = vec![vec![0u8; N], vec![0xFFu8; N]];
    let mut peers = vec![vec![0u8; N], vec![0xFFu8; N], engine.base_point().as_bytes().to_vec()];
    for _ in 0..4 {
        let mut k = vec![0u8; N];
        let mut u = vec![0u8; N];
        rng.fill_bytes(&mut k);
        rng.fill_bytes(&mut u);
        keys.push(k);
        peers.push(u);
    }

    let reference = shared_secret_shape(&engine, &keys[0], &peers[0]);
    for k in &keys {
        for u in &peers {
            assert_eq!(shared_secret_shape(&engine, k, u), reference, "{}", engine.name());
        }
    }

    let reference = derive_shape(&engine, &keys[0]);
    for k in &keys {
        assert_eq!(derive_shape(&engine, k), reference, "{}", engine.name());
    }
}

#[test]
fn test_x25519_shape_is_independent_of_inputs() {
    check_engine(X25519Engine::x25519(), 1);
}

#[test]
fn test_x448_shape_is_independent_of_inputs() {
    check_engine(X448Engine::x448(), 2);
}

#[test]
fn test_ladder_iteration_count() {
    let engine = X25519Engine::x25519();
    let counts = derive_shape(&engine, &[0x42u8; 32]);
    // one swap per ladder bit for each coordinate, plus the final swap
    assert_eq!(counts.swaps, 2 * 255 + 2);

    let engine = X448Engine::x448();
    let counts = derive_shape(&engine, &[0x42u8; 56]);
    assert_eq!(counts.swaps, 2 * 448 + 2);
}
