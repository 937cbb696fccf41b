use crate::shacrypt::base64::{encode, encode_permuted};

#[test]
fn three_byte_groups_round_to_four_chars() {
    assert_eq!(encode(&[0, 0, 0]), "....");
    assert_eq!(encode(&[0xff, 0xff, 0xff]), "zzzz");
    assert_eq!(encode(&[0, 0, 0, 0, 0, 0]), "........");
}

#[test]
fn tail_lengths() {
    assert_eq!(encode(&[]), "");
    assert_eq!(encode(&[0]).len(), 2);
    assert_eq!(encode(&[0, 0]).len(), 3);
    assert_eq!(encode(&[0, 0, 0, 0]).len(), 6);
    assert_eq!(encode(&[0, 0, 0, 0, 0]).len(), 7);
}

#[test]
fn alphabet_only() {
    let input: Vec<u8> = (0u8..=255).collect();
    let out = encode(&input);
    assert!(out
        .bytes()
        .all(|b| b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz".contains(&b)));
}

#[test]
fn permuted_requires_64_bytes() {
    assert!(encode_permuted(&[0; 63]).is_err());
    assert!(encode_permuted(&[0; 65]).is_err());
    assert!(encode_permuted(&[0; 64]).is_ok());
}

#[test]
fn permuted_length_is_86() {
    let out = encode_permuted(&[0; 64]).unwrap();
    assert_eq!(out.len(), 86);
}

#[test]
fn permuted_reorders_before_encoding() {
    let mut input = [0u8; 64];
    input[21] = 0xff;
    let permuted = encode_permuted(&input).unwrap();
    let direct = encode(&input);
    assert_ne!(permuted, direct);
}
