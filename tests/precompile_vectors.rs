//! Known-answer vectors for the byte-level precompile operations.

use bn128_precompile::{
    ec_add, ec_pairing_check, ec_scalar_mul, g1_add, g1_scalar_mul, g2_add, g2_scalar_mul,
    pairing_check, Bn128Error, CurveOps, CURVE_ORDER,
};

const G1: &str = "00000000000000000000000000000000000000000000000000000000000000010000000000000000000000000000000000000000000000000000000000000002";
const G1_X2: &str = "030644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd315ed738c0e0a7c92e7845f96b2ae9c0a68a6a449e3538fc7ff3ebf7a5a18a2c4";
const G1_X3: &str = "0769bf9ac56bea3ff40232bcb1b6bd159315d84715b8e679f2d355961915abf02ab799bee0489429554fdb7c8d086475319e63b40b9c5b57cdf1ff3dd9fe2261";
const G1_X6: &str = "09f4ca411a3f52f4e0792fd9e792779856719215d3b32a762afe3d5b8c684af90d8ef3d795acd4b35d4366ab22e4ad335273aa59429e26929d0f64583474d9c8";
const G1_NEG: &str = "000000000000000000000000000000000000000000000000000000000000000130644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd45";

const G2: &str = "198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c21800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa";
const G2_X2: &str = "203e205db4f19b37b60121b83a7333706db86431c6d835849957ed8c3928ad7927dc7234fd11d3e8c36c59277c3e6f149d5cd3cfa9a62aee49f8130962b4b3b9195e8aa5b7827463722b8c153931579d3505566b4edf48d498e185f0509de15204bb53b8977e5f92a0bc372742c4830944a59b4fe6b1c0466e2a6dad122b5d2e";
const G2_X3: &str = "1014772f57bb9742735191cd5dcfe4ebbc04156b6878a0a7c9824f32ffb66e8506064e784db10e9051e52826e192715e8d7e478cb09a5e0012defa0694fbc7f5021e2335f3354bb7922ffcc2f38d3323dd9453ac49b55441452aeaca147711b2058e1d5681b5b9e0074b0f9c8d2c68a069b920d74521e79765036d57666c5597";
const G2_X6: &str = "1b4b60273ae700a7e2ffc04e19e316074a5977c8da56b75675927e2eee23772e1687f985433b446b85eb6d0a574fc152f681c032d27e6207569faca9c8329b961e7cf2fd8b4bc0d81e4719f009a5ecb7d925c970bc57889f3627d86629dc31d824fb6baf4cf6d7ca7eaa668cda36d088502b3587667b6eb8f2b874622575e586";
const G2_NEG: &str = "198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c21800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed275dc4a288d1afb3cbb1ac09187524c7db36395df7be3b99e673b13a075a65ec1d9befcd05a5323e6da4d435f3b617cdb3af83285c2df711ef39c01571827f9d";

/// On the twist (x = 1) but outside the order-R subgroup.
const G2_OUTSIDE_SUBGROUP: &str = "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000010d1271953ed9ea0836846e70a1934187998c7f790cb4d7511b7f8da82de048a42869111d5381f072f8e2728fdb825a51aadd70e52c9830e9ab4b871c0531f1bb";

/// BLS12-381 generators, which are not valid BN128 encodings.
const BLS_G1: &str = "17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e0";
const BLS_G2: &str = "024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb813e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b828010606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be";

fn bytes(parts: &[&str]) -> Vec<u8> {
    parts.iter().flat_map(|p| hex::decode(p).unwrap()).collect()
}

#[test]
fn test_g1_add_vectors() {
    let out = ec_add("bn128-g1", &bytes(&[G1, G1_X2, G1_X3]), false).unwrap();
    assert_eq!(hex::encode(out), G1_X6);

    let out = g1_add(&bytes(&[G1, G1_X2]), false).unwrap();
    assert_eq!(hex::encode(out), G1_X3);
}

#[test]
fn test_g1_scalar_mul_vectors() {
    let out = ec_scalar_mul("bn128-g1", &[2], &bytes(&[G1]), false).unwrap();
    assert_eq!(hex::encode(out), G1_X2);

    let out = ec_scalar_mul("bn128-g1", &[3], &bytes(&[G1_X2]), false).unwrap();
    assert_eq!(hex::encode(out), G1_X6);

    let out = g1_scalar_mul(&[3], &bytes(&[G1]), false).unwrap();
    assert_eq!(hex::encode(out), G1_X3);
}

#[test]
fn test_g2_add_vectors() {
    let out = ec_add("bn128-g2", &bytes(&[G2, G2_X2, G2_X3]), false).unwrap();
    assert_eq!(hex::encode(out), G2_X6);

    let out = g2_add(&bytes(&[G2, G2_X2]), false).unwrap();
    assert_eq!(hex::encode(out), G2_X3);
}

#[test]
fn test_g2_scalar_mul_vectors() {
    let out = ec_scalar_mul("bn128-g2", &[2], &bytes(&[G2]), false).unwrap();
    assert_eq!(hex::encode(out), G2_X2);

    let out = ec_scalar_mul("bn128-g2", &[3], &bytes(&[G2_X2]), false).unwrap();
    assert_eq!(hex::encode(out), G2_X6);

    let out = g2_scalar_mul(&[3], &bytes(&[G2]), false).unwrap();
    assert_eq!(hex::encode(out), G2_X3);
}

#[test]
fn test_negation_vectors() {
    let zero64 = vec![0u8; 64];
    assert_eq!(g1_add(&bytes(&[G1, G1_NEG]), false).unwrap().to_vec(), zero64);

    let zero128 = vec![0u8; 128];
    assert_eq!(g2_add(&bytes(&[G2, G2_NEG]), false).unwrap().to_vec(), zero128);
}

#[test]
fn test_pairing_check_cancelling_batch() {
    let data = bytes(&[G1, G2, G1_NEG, G2, G1, G2, G1, G2_NEG]);
    assert!(ec_pairing_check("bn128", &data, false).unwrap());
}

#[test]
fn test_pairing_check_single_pair_is_false() {
    assert!(!pairing_check(&bytes(&[G1, G2]), false).unwrap());
}

#[test]
fn test_pairing_check_scaled_batch() {
    // e(2 G1, 3 G2) * e(-G1, 6 G2) == 1
    let neg_g1 = bytes(&[G1_NEG]);
    let data = [bytes(&[G1_X2, G2_X3]), neg_g1, bytes(&[G2_X6])].concat();
    assert!(pairing_check(&data, false).unwrap());
}

#[test]
fn test_invalid_encodings_rejected() {
    let bls_g1_twice = bytes(&[BLS_G1, BLS_G1]);

    assert!(ec_add("bn128-g1", &bls_g1_twice, false).is_err());
    assert!(ec_add("bn128-g1", &bls_g1_twice, true).is_err());
    assert!(matches!(
        ec_add("bn128-g2", &bls_g1_twice, false),
        Err(Bn128Error::InvalidBatchLayout { record: 128, len: 192, .. })
    ));
    assert!(ec_add("bn128-g2", &bls_g1_twice, true).is_err());

    for curve in ["bn128-g1", "bn128-g2"] {
        for compressed in [false, true] {
            let err = ec_scalar_mul(curve, &[2], &bls_g1_twice, compressed).unwrap_err();
            assert!(err.is_input_error());
        }
    }

    let pair = bytes(&[BLS_G1, BLS_G2]);
    assert!(matches!(
        ec_pairing_check("bn128", &pair, false),
        Err(Bn128Error::InvalidBatchLayout { record: 192, len: 288, .. })
    ));
    assert_eq!(
        ec_pairing_check("bn128", &pair, true),
        Err(Bn128Error::CompressedUnsupported { op: "pairing_check" })
    );
}

#[test]
fn test_invalid_points_abort_batches() {
    let mut off_curve = bytes(&[G1]);
    off_curve[63] = 3;
    assert_eq!(
        g1_add(&[bytes(&[G1]), off_curve.clone()].concat(), false),
        Err(Bn128Error::NotOnCurve { curve: "bn128-g1" })
    );

    let outside = bytes(&[G2_OUTSIDE_SUBGROUP]);
    assert_eq!(
        g2_add(&[bytes(&[G2]), outside.clone()].concat(), false),
        Err(Bn128Error::NotInSubgroup { curve: "bn128-g2" })
    );
    assert_eq!(
        g2_scalar_mul(&[1], &outside, false),
        Err(Bn128Error::NotInSubgroup { curve: "bn128-g2" })
    );

    // a bad second pair fails the whole check instead of being skipped
    let data = [bytes(&[G1, G2, G1_NEG]), outside].concat();
    assert_eq!(
        pairing_check(&data, false),
        Err(Bn128Error::NotInSubgroup { curve: "bn128-g2" })
    );
}

#[test]
fn test_empty_and_ragged_batches() {
    assert!(matches!(g1_add(&[], false), Err(Bn128Error::InvalidBatchLayout { len: 0, .. })));
    assert!(matches!(g2_add(&[], false), Err(Bn128Error::InvalidBatchLayout { len: 0, .. })));
    assert!(matches!(
        pairing_check(&[], false),
        Err(Bn128Error::InvalidBatchLayout { len: 0, .. })
    ));
    assert!(matches!(
        g1_add(&bytes(&[G1])[..63], false),
        Err(Bn128Error::InvalidBatchLayout { len: 63, .. })
    ));
}

#[test]
fn test_scalar_bound() {
    let order = CURVE_ORDER.to_be_bytes::<32>();
    assert_eq!(g1_scalar_mul(&order, &bytes(&[G1]), false), Err(Bn128Error::ScalarOutOfRange));
    assert_eq!(g2_scalar_mul(&order, &bytes(&[G2]), false), Err(Bn128Error::ScalarOutOfRange));

    assert_eq!(g1_scalar_mul(&[0], &bytes(&[G1]), false).unwrap(), [0u8; 64]);
    assert_eq!(hex::encode(g1_scalar_mul(&[1], &bytes(&[G1]), false).unwrap()), G1);

    // R - 1 is -1
    let mut r_minus_one = order;
    r_minus_one[31] -= 1;
    assert_eq!(hex::encode(g1_scalar_mul(&r_minus_one, &bytes(&[G1]), false).unwrap()), G1_NEG);
    assert_eq!(hex::encode(g2_scalar_mul(&r_minus_one, &bytes(&[G2]), false).unwrap()), G2_NEG);
}

#[test]
fn test_concurrent_calls() {
    let ops = CurveOps::default();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                let out = ops.g1_add(&bytes(&[G1, G1_X2, G1_X3]), false).unwrap();
                hex::encode(out)
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), G1_X6);
    }
}
