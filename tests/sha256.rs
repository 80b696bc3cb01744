use fa25519::hash::{Sha256, sha256};
use hex_literal::hex;
use sha2::Digest;

fn reference(input: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&sha2::Sha256::digest(input));
    out
}

fn expect_sha256_eq(input: &[u8], expected: &[u8; 32]) {
    let got = sha256(input);

    assert_eq!(
        &got, expected,
        "Digest mismatch for input of {} bytes\nExpected {:02x?}\nGot      {:02x?}",
        input.len(),
        expected,
        got,
    );
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS
// -------------------------------------------------------

#[test]
fn sha256_empty_vector() {
    expect_sha256_eq(
        &[],
        &hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
    );
}

#[test]
fn sha256_abc_vector() {
    expect_sha256_eq(
        b"abc",
        &hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
    );
}

#[test]
fn sha256_two_block_vector() {
    expect_sha256_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        &hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"),
    );
}

#[test]
fn sha256_million_a() {
    let mut h = Sha256::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        h.update(&chunk);
    }
    assert_eq!(
        h.finalize(),
        hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0")
    );
}

// -------------------------------------------------------
// 2. LENGTHS AND PADDING
// -------------------------------------------------------

#[test]
fn sha256_incremental_lengths() {
    let mut buf = Vec::with_capacity(200);
    for i in 0..200 {
        expect_sha256_eq(&buf, &reference(&buf));
        buf.push(i as u8 ^ 0x5a);
    }
}

#[test]
fn sha256_padding_boundaries() {
    for len in [55, 56, 57, 63, 64, 65, 119, 120, 127, 128] {
        let buf = vec![0x22u8; len];
        expect_sha256_eq(&buf, &reference(&buf));
    }
}

// -------------------------------------------------------
// 3. STREAMING
// -------------------------------------------------------

#[test]
fn sha256_streaming_matches_one_shot() {
    let buf: Vec<u8> = (0..777u32).map(|i| (i * 13 % 256) as u8).collect();
    let expected = sha256(&buf);

    for chunk in [1, 7, 55, 56, 63, 64, 65, 200] {
        let mut h = Sha256::new();
        for piece in buf.chunks(chunk) {
            h.update(piece);
        }
        assert_eq!(h.finalize(), expected, "chunk size {chunk}");
    }
}
