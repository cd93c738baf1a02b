//! Pepper derivation: digest, bit-shift trimming, and positional XOR.
//!
//! A pepper is derived from `(account name, master password, bit offset)`:
//! both strings are hashed with SHA-256, each digest is right-shifted by the
//! same offset and re-encoded minimally, and the two results are XORed
//! byte-by-byte up to the length of the shorter one.
//!
//! The minimal re-encoding makes output lengths data-dependent: two digests
//! shifted by the same offset can shrink to different lengths whenever their
//! leading bit patterns differ, and the XOR then silently truncates to the
//! shorter operand. Stored peppers depend on this behavior, so it must not
//! be "fixed" to a width-stable shift.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Largest bit offset ever drawn for an account.
pub const MAX_OFFSET: u32 = 245;

/// Number of hex characters shown to the user.
const TAIL_HEX_CHARS: usize = 6;

/// SHA-256 digest of a string's UTF-8 bytes.
pub fn digest(s: &str) -> [u8; 32] {
    Sha256::digest(s.as_bytes()).into()
}

/// Right-shift `data`, interpreted as a big-endian unsigned integer, by
/// `offset` bits and re-encode the result in the fewest bytes that hold it.
///
/// Leading zero bytes are always stripped, even at `offset = 0`. A value
/// shifted all the way to zero yields a single zero byte, never an empty
/// vector.
pub fn shift_bits(data: &[u8], offset: u32) -> Vec<u8> {
    let dropped = (offset / 8) as usize;
    let rem = offset % 8;

    if dropped >= data.len() {
        return vec![0];
    }

    let kept = &data[..data.len() - dropped];
    let mut out = Vec::with_capacity(kept.len());
    if rem == 0 {
        out.extend_from_slice(kept);
    } else {
        let mut carry = 0u8;
        for &byte in kept {
            out.push((byte >> rem) | carry);
            carry = byte << (8 - rem);
        }
    }

    // Minimal encoding: the shifted value keeps only its significant bytes.
    match out.iter().position(|&b| b != 0) {
        Some(start) => out.split_off(start),
        None => vec![0],
    }
}

/// XOR two byte strings after shifting both by the same offset.
///
/// Pairing is positional and stops at the shorter operand; excess bytes of
/// the longer one are dropped.
pub fn xor_shifted(h1: &[u8], h2: &[u8], offset: u32) -> Vec<u8> {
    let a = shift_bits(h1, offset);
    let b = shift_bits(h2, offset);
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

/// Derive an account's pepper bytes.
pub fn derive_pepper(account_name: &str, master_password: &str, offset: u32) -> Vec<u8> {
    xor_shifted(&digest(account_name), &digest(master_password), offset)
}

/// Draw a bit offset uniformly from `[0, MAX_OFFSET]`.
pub fn random_offset(rng: &mut impl Rng) -> u32 {
    (MAX_OFFSET as f64 * rng.gen::<f64>()).round() as u32
}

/// The displayed portion of a pepper: the last six hex characters of its
/// encoding, or the whole encoding when fewer are available.
pub fn hex_tail(pepper: &[u8]) -> String {
    let encoded = hex::encode(pepper);
    let start = encoded.len().saturating_sub(TAIL_HEX_CHARS);
    encoded[start..].to_string()
}
