//! tests/pipeline_tests.rs
//! Full-file round trips through the split -> transform -> merge pipeline,
//! plus the per-chunk fixed-IV wire-format property and fail-fast chunk
//! error reporting.

mod common;
use common::{patterned, zero_ctx};

use chunkcrypt_rs::{encrypted_chunk_size, run_pipeline, ChunkcryptError, Mode};
use std::fs;
use std::fs::OpenOptions;
use tempfile::tempdir;

const CHUNK: usize = 64;

#[test]
fn file_roundtrip_across_sizes() {
    let dir = tempdir().unwrap();
    let ctx = zero_ctx();

    // 0, 1, block-1, block, block+1, chunk, chunk+1, chunk multiples
    for len in [0usize, 1, 15, 16, 17, CHUNK, CHUNK + 1, 2 * CHUNK, 3 * CHUNK + 5] {
        let input = dir.path().join(format!("in_{len}.bin"));
        let encrypted = dir.path().join(format!("enc_{len}.bin"));
        let decrypted = dir.path().join(format!("dec_{len}.bin"));

        let data = patterned(len);
        fs::write(&input, &data).unwrap();

        run_pipeline(Mode::Encrypt, &ctx, &input, &encrypted, CHUNK).unwrap();
        run_pipeline(Mode::Decrypt, &ctx, &encrypted, &decrypted, CHUNK).unwrap();

        assert_eq!(fs::read(&decrypted).unwrap(), data, "len {len}");
    }
}

#[test]
fn empty_file_roundtrip() {
    let dir = tempdir().unwrap();
    let ctx = zero_ctx();

    let input = dir.path().join("empty.bin");
    let encrypted = dir.path().join("empty.enc");
    let decrypted = dir.path().join("empty.dec");
    fs::write(&input, b"").unwrap();

    // Zero chunks in, zero bytes out — in both directions.
    let n = run_pipeline(Mode::Encrypt, &ctx, &input, &encrypted, CHUNK).unwrap();
    assert_eq!(n, 0);
    assert_eq!(fs::read(&encrypted).unwrap().len(), 0);

    let n = run_pipeline(Mode::Decrypt, &ctx, &encrypted, &decrypted, CHUNK).unwrap();
    assert_eq!(n, 0);
    assert_eq!(fs::read(&decrypted).unwrap().len(), 0);
}

#[test]
fn default_chunk_size_roundtrip() {
    let dir = tempdir().unwrap();
    let ctx = zero_ctx();

    let input = dir.path().join("in.bin");
    let encrypted = dir.path().join("enc.bin");
    let decrypted = dir.path().join("dec.bin");

    let data = patterned(100_000);
    fs::write(&input, &data).unwrap();

    // chunk_size 0 falls back to 5 MiB — single chunk here
    let n = run_pipeline(Mode::Encrypt, &ctx, &input, &encrypted, 0).unwrap();
    assert_eq!(n, 1);
    run_pipeline(Mode::Decrypt, &ctx, &encrypted, &decrypted, 0).unwrap();
    assert_eq!(fs::read(&decrypted).unwrap(), data);
}

#[test]
fn identical_chunks_encrypt_identically() {
    // Every chunk is chained against the fixed IV, not the previous
    // chunk's last ciphertext block, so two identical plaintext chunks
    // produce two identical ciphertext chunks. This is the wire format;
    // a continuous CBC stream across chunks would break it.
    let dir = tempdir().unwrap();
    let ctx = zero_ctx();

    let input = dir.path().join("in.bin");
    let encrypted = dir.path().join("enc.bin");

    let one_chunk = patterned(CHUNK);
    let mut data = one_chunk.clone();
    data.extend_from_slice(&one_chunk);
    fs::write(&input, &data).unwrap();

    run_pipeline(Mode::Encrypt, &ctx, &input, &encrypted, CHUNK).unwrap();

    let ciphertext = fs::read(&encrypted).unwrap();
    let enc_chunk = encrypted_chunk_size(CHUNK);
    assert_eq!(ciphertext.len(), 2 * enc_chunk);
    assert_eq!(&ciphertext[..enc_chunk], &ciphertext[enc_chunk..]);
}

#[test]
fn chunk_count_matches_input_size() {
    let dir = tempdir().unwrap();
    let ctx = zero_ctx();

    let input = dir.path().join("in.bin");
    let encrypted = dir.path().join("enc.bin");
    fs::write(&input, patterned(3 * CHUNK + 1)).unwrap();

    let n = run_pipeline(Mode::Encrypt, &ctx, &input, &encrypted, CHUNK).unwrap();
    assert_eq!(n, 4);
}

#[test]
fn truncated_ciphertext_reports_failing_chunk_index() {
    let dir = tempdir().unwrap();
    let ctx = zero_ctx();

    let input = dir.path().join("in.bin");
    let encrypted = dir.path().join("enc.bin");
    let decrypted = dir.path().join("dec.bin");
    fs::write(&input, patterned(3 * CHUNK)).unwrap();

    run_pipeline(Mode::Encrypt, &ctx, &input, &encrypted, CHUNK).unwrap();

    // Drop the last byte: the final chunk is no longer block-aligned.
    let len = fs::metadata(&encrypted).unwrap().len();
    OpenOptions::new()
        .write(true)
        .open(&encrypted)
        .unwrap()
        .set_len(len - 1)
        .unwrap();

    let err = run_pipeline(Mode::Decrypt, &ctx, &encrypted, &decrypted, CHUNK).unwrap_err();
    match err {
        ChunkcryptError::Chunk { index, source } => {
            assert_eq!(index, 2);
            assert!(matches!(*source, ChunkcryptError::InvalidLength { .. }));
        }
        other => panic!("expected chunk error, got {other}"),
    }
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let ctx = zero_ctx();

    let err = run_pipeline(
        Mode::Encrypt,
        &ctx,
        dir.path().join("missing.bin"),
        dir.path().join("out.bin"),
        CHUNK,
    )
    .unwrap_err();
    assert!(matches!(err, ChunkcryptError::Io(_)), "{err}");
}
