use fa25519::hash::{Sha512, sha512};
use hex_literal::hex;
use sha2::Digest;

fn reference(input: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&sha2::Sha512::digest(input));
    out
}

fn expect_sha512_eq(input: &[u8], expected: &[u8; 64]) {
    let got = sha512(input);

    assert_eq!(
        &got, expected,
        "Digest mismatch for input of {} bytes\nExpected {:02x?}\nGot      {:02x?}",
        input.len(),
        expected,
        got,
    );
}

fn streamed(input: &[u8], chunk: usize) -> [u8; 64] {
    let mut h = Sha512::new();
    for piece in input.chunks(chunk) {
        h.update(piece);
    }
    h.finalize()
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS
// -------------------------------------------------------

#[test]
fn sha512_empty_vector() {
    expect_sha512_eq(
        &[],
        &hex!(
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce"
            "47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        ),
    );
}

#[test]
fn sha512_abc_vector() {
    expect_sha512_eq(
        b"abc",
        &hex!(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
            "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        ),
    );
}

#[test]
fn sha512_two_block_vector() {
    expect_sha512_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        &hex!(
            "204a8fc6dda82f0a0ced7beb8e08a41657c16ef468b228a8279be331a703c335"
            "96fd15c13b1b07f9aa1d3bea57789ca031ad85c7a71dd70354ec631238ca3445"
        ),
    );
}

#[test]
fn sha512_known_phrase() {
    expect_sha512_eq(
        b"The quick brown fox jumps over the lazy dog",
        &hex!(
            "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb64"
            "2e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6"
        ),
    );
}

// -------------------------------------------------------
// 2. LENGTHS FROM 0 TO 300
// -------------------------------------------------------

#[test]
fn sha512_incremental_lengths() {
    let mut buf = Vec::with_capacity(300);
    for i in 0..300 {
        expect_sha512_eq(&buf, &reference(&buf));
        buf.push(i as u8);
    }
}

// -------------------------------------------------------
// 3. STREAMING
// -------------------------------------------------------

#[test]
fn sha512_streaming_matches_one_shot() {
    let buf: Vec<u8> = (0..1000u32).map(|i| (i * 7 % 256) as u8).collect();
    let expected = sha512(&buf);

    for chunk in [1, 3, 63, 64, 111, 112, 127, 128, 129, 500] {
        assert_eq!(streamed(&buf, chunk), expected, "chunk size {chunk}");
    }
}

#[test]
fn sha512_empty_updates_are_neutral() {
    let mut h = Sha512::new();
    h.update(&[]);
    h.update(b"ab");
    h.update(&[]);
    h.update(b"c");
    assert_eq!(h.finalize(), sha512(b"abc"));
}

#[test]
fn sha512_context_clone_forks_state() {
    let mut h = Sha512::new();
    h.update(b"shared prefix ");

    let mut left = h.clone();
    left.update(b"left");
    h.update(b"right");

    assert_eq!(left.finalize(), sha512(b"shared prefix left"));
    assert_eq!(h.finalize(), sha512(b"shared prefix right"));
}

// -------------------------------------------------------
// 4. MULTI-BLOCK INPUTS
// -------------------------------------------------------

#[test]
fn sha512_large_multiblock() {
    let buf: Vec<u8> = (0..5000).map(|i| (i % 256) as u8).collect();
    expect_sha512_eq(&buf, &reference(&buf));
}

#[test]
fn sha512_1mb_data() {
    let buf = vec![0xAAu8; 1_000_000];
    expect_sha512_eq(&buf, &reference(&buf));
}

// -------------------------------------------------------
// 5. EDGE CASES
// -------------------------------------------------------

#[test]
fn sha512_single_bytes() {
    for b in 0u8..=255 {
        expect_sha512_eq(&[b], &reference(&[b]));
    }
}

#[test]
fn sha512_padding_boundaries() {
    for len in [111, 112, 113, 127, 128, 129, 239, 240, 255, 256] {
        let buf = vec![0x11u8; len];
        expect_sha512_eq(&buf, &reference(&buf));
    }
}
