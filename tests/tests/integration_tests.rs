//! Integration tests across the edcurve crates

use edcurve::prelude::*;
use edcurve_params::edwards::curve25519;
use edcurve_tests::fixtures::{seeded_rng, FULL, PRIME_ORDER};
use rand::{CryptoRng, RngCore};

/// ElGamal over any group: encrypt an embedded message under `public`
fn elgamal_encrypt<'g, G, R>(
    group: &'g G,
    public: &G::Element<'g>,
    message: &[u8],
    rng: &mut R,
) -> (G::Element<'g>, G::Element<'g>)
where
    G: Group + 'g,
    R: RngCore + CryptoRng,
{
    let mut m = group.identity();
    let rest = m.embed(message, rng);
    assert!(rest.is_empty(), "message must fit in one element");

    let k = group.random_scalar(rng);
    let c1 = group.base().mul(&k);
    let c2 = public.mul(&k).add(&m);
    (c1, c2)
}

fn elgamal_decrypt<'g, G: Group + 'g>(
    secret: &G::Scalar,
    c1: &G::Element<'g>,
    c2: &G::Element<'g>,
) -> Result<Vec<u8>> {
    c2.sub(&c1.mul(secret)).extract()
}

#[test]
fn test_elgamal_round_trip() {
    let group = &*PRIME_ORDER;
    let mut rng = seeded_rng(11);

    let secret = group.random_scalar(&mut rng);
    let public = GroupElement::mul(&Group::base(group), &secret);

    let (c1, c2) = elgamal_encrypt(group, &public, b"attack at dawn", &mut rng);
    let plain = elgamal_decrypt::<BasicCurve>(&secret, &c1, &c2).unwrap();
    assert_eq!(plain, b"attack at dawn");
}

#[test]
fn test_diffie_hellman_through_encodings() {
    let group = &*PRIME_ORDER;
    let mut rng = seeded_rng(12);

    let a = group.random_scalar(&mut rng);
    let b = group.random_scalar(&mut rng);
    let wire_a = group.mul_base(&a).encode();
    let wire_b = group.mul_base(&b).encode();
    assert_eq!(wire_a.len(), group.element_len());

    let mut peer_a = group.point();
    peer_a.decode(&wire_a).unwrap();
    let mut peer_b = group.point();
    peer_b.decode(&wire_b).unwrap();

    assert_eq!(peer_b.mul(&a).encode(), peer_a.mul(&b).encode());
}

#[test]
fn test_params_constants_agree_with_derivation() {
    let group = &*PRIME_ORDER;
    assert_eq!(group.point_len(), curve25519::POINT_COMPRESSED_SIZE);
    assert_eq!(group.point().embed_capacity(), curve25519::EMBED_CAPACITY);
    assert_eq!(Group::name(group), curve25519::NAME);

    let params = group.params();
    assert_eq!(params.d.to_string(), curve25519::D);
    assert_eq!(params.r.to_string(), curve25519::R);
    let (x, y) = params.base.clone().unwrap();
    assert_eq!(x.to_string(), curve25519::BASE_X);
    assert_eq!(y.to_string(), curve25519::BASE_Y);
    assert_eq!(params, Params::curve25519().unwrap());
}

#[test]
fn test_independent_generators() {
    let group = &*PRIME_ORDER;
    let mut g = group.point();
    let mut h = group.point();
    g.pick_base(&mut seeded_rng(13));
    h.pick_base(&mut seeded_rng(14));

    assert_ne!(g, h);
    assert_ne!(g, group.base());
    assert!(g.has_prime_order() && h.has_prime_order());

    // same seed, same generator
    let mut g2 = group.point();
    g2.pick_base(&mut seeded_rng(13));
    assert_eq!(g, g2);
}

#[test]
fn test_full_group_embedding_may_leave_subgroup() {
    let group = &*FULL;
    let mut rng = seeded_rng(15);
    let mut outside = 0;
    for i in 0..8u8 {
        let mut p = group.point();
        p.embed(&[i; 4], &mut rng);
        assert_eq!(p.extract().unwrap(), vec![i; 4]);
        if !p.has_prime_order() {
            outside += 1;
        }
    }
    // 7 in 8 points of the full group lie outside the prime subgroup
    assert!(outside > 0);
}

#[test]
fn test_curve_shared_between_threads() {
    let group = &*PRIME_ORDER;
    let scalars: Vec<BigUint> = (1..=4u32).map(|k| BigUint::from(k * 1_000_003)).collect();

    let encodings: Vec<Vec<u8>> = std::thread::scope(|s| {
        let handles: Vec<_> = scalars
            .iter()
            .map(|k| s.spawn(move || group.mul_base(k).encode()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (k, bytes) in scalars.iter().zip(&encodings) {
        assert_eq!(&group.mul_base(k).encode(), bytes);
    }
}

#[test]
fn test_construction_errors_surface_as_api_errors() {
    let mut params = Params::curve25519().unwrap();
    params.base = Some((BigUint::from(1u32), BigUint::from(1u32)));

    let err: Error = BasicCurve::new(&params, GroupKind::PrimeOrder).unwrap_err().into();
    assert!(err.is_construction());
    assert!(err.to_string().contains("base point not on curve"));
}
