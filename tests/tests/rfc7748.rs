//! RFC 7748 known-answer tests through the public API

use montdh::prelude::*;
use montdh::{x25519, x448, X25519_BASEPOINT_BYTES, X448_BASEPOINT_BYTES};
use montdh_tests::unhex;
use montdh_tests::vectors::{
    ExchangeVector, X25519_EXCHANGE, X25519_FUNCTION, X25519_ITERATION, X448_EXCHANGE,
    X448_FUNCTION, X448_ITERATION,
};

#[test]
fn test_x25519_function_vectors() {
    for v in X25519_FUNCTION.iter() {
        let out = x25519(unhex(v.scalar), unhex(v.u));
        assert_eq!(hex::encode(out), v.output);
    }
}

#[test]
fn test_x448_function_vectors() {
    for v in X448_FUNCTION.iter() {
        let out = x448(unhex(v.scalar), unhex(v.u));
        assert_eq!(hex::encode(out), v.output);
    }
}

#[test]
fn test_function_vectors_through_engine() {
    let engine = X25519Engine::x25519();
    for v in X25519_FUNCTION.iter() {
        let out = engine
            .compute_shared_secret(&hex::decode(v.scalar).unwrap(), &hex::decode(v.u).unwrap())
            .unwrap();
        assert_eq!(hex::encode(out.as_bytes()), v.output);
    }
    let engine = X448Engine::x448();
    for v in X448_FUNCTION.iter() {
        let out = engine
            .compute_shared_secret(&hex::decode(v.scalar).unwrap(), &hex::decode(v.u).unwrap())
            .unwrap();
        assert_eq!(hex::encode(out.as_bytes()), v.output);
    }
}

fn check_exchange<const LIMBS: usize, const N: usize>(
    engine: DiffieHellmanEngine<LIMBS, N>,
    v: &ExchangeVector,
) {
    let alice = StaticSecret::<N>::from_bytes(&hex::decode(v.alice_private).unwrap()).unwrap();
    let bob = StaticSecret::<N>::from_bytes(&hex::decode(v.bob_private).unwrap()).unwrap();

    let alice_public = alice.public_key(&engine);
    let bob_public = bob.public_key(&engine);
    assert_eq!(hex::encode(alice_public.as_bytes()), v.alice_public);
    assert_eq!(hex::encode(bob_public.as_bytes()), v.bob_public);

    let ab = alice.diffie_hellman(&engine, &bob_public).unwrap();
    let ba = bob.diffie_hellman(&engine, &alice_public).unwrap();
    assert_eq!(hex::encode(ab.as_bytes()), v.shared);
    assert_eq!(hex::encode(ba.as_bytes()), v.shared);
}

#[test]
fn test_x25519_exchange() {
    check_exchange(X25519Engine::x25519(), &X25519_EXCHANGE);
}

#[test]
fn test_x448_exchange() {
    check_exchange(X448Engine::x448(), &X448_EXCHANGE);
}

#[test]
fn test_exchange_through_curve_id() {
    for (id, v) in [(CurveId::X25519, X25519_EXCHANGE), (CurveId::X448, X448_EXCHANGE)] {
        let alice = hex::decode(v.alice_private).unwrap();
        let bob_public = hex::decode(v.bob_public).unwrap();
        assert_eq!(hex::encode(id.derive_public_key(&alice).unwrap()), v.alice_public);
        let shared = id.compute_shared_secret(&alice, &bob_public).unwrap();
        assert_eq!(hex::encode(&*shared), v.shared);
    }
}

fn iterate<const N: usize>(f: fn([u8; N], [u8; N]) -> [u8; N], base: [u8; N], rounds: usize) -> [u8; N] {
    let mut k = base;
    let mut u = base;
    for _ in 0..rounds {
        let next = f(k, u);
        u = k;
        k = next;
    }
    k
}

#[test]
fn test_x25519_iterated() {
    let once = iterate(x25519, X25519_BASEPOINT_BYTES, 1);
    assert_eq!(hex::encode(once), X25519_ITERATION.after_one);
    let thousand = iterate(x25519, X25519_BASEPOINT_BYTES, 1_000);
    assert_eq!(hex::encode(thousand), X25519_ITERATION.after_one_thousand);
}

#[test]
fn test_x448_iterated() {
    let once = iterate(x448, X448_BASEPOINT_BYTES, 1);
    assert_eq!(hex::encode(once), X448_ITERATION.after_one);
    let thousand = iterate(x448, X448_BASEPOINT_BYTES, 1_000);
    assert_eq!(hex::encode(thousand), X448_ITERATION.after_one_thousand);
}

#[test]
#[ignore = "one million ladder runs; run with --ignored in release mode"]
fn test_x25519_iterated_one_million() {
    let out = iterate(x25519, X25519_BASEPOINT_BYTES, 1_000_000);
    assert_eq!(hex::encode(out), X25519_ITERATION.after_one_million);
}

#[test]
#[ignore = "one million ladder runs; run with --ignored in release mode"]
fn test_x448_iterated_one_million() {
    let out = iterate(x448, X448_BASEPOINT_BYTES, 1_000_000);
    assert_eq!(hex::encode(out), X448_ITERATION.after_one_million);
}
