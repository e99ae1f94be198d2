//! BIP-32 helper functions over the primitive crates:
//! - point(p):    scalar -> EC point (public key) on secp256k1
//! - serP(P):     compressed SEC1 (33 bytes)
//! - ser32(i):    big-endian u32 (4 bytes)
//! - HMAC-SHA512 with the output split into I_L / I_R
//! - HASH160 fingerprints

use hmac::{Hmac, Mac};
use ripemd::Ripemd160;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

use crate::bip32::error::{Bip32Error, Result};
use crate::bip32::ChainCode;

type HmacSha512 = Hmac<Sha512>;

/// point(p): compute P = p * G as a secp256k1 public key.
pub fn point(sk: &SecretKey) -> PublicKey {
  // Only a signing context is needed to derive a public key.
  let secp = Secp256k1::signing_only();
  PublicKey::from_secret_key(&secp, sk)
}

/// serP(P): compressed SEC1 encoding of a public key (33 bytes, 0x02/0x03 + X)
pub fn ser_p(pk: &PublicKey) -> [u8; 33] {
  pk.serialize() // `serialize()` returns compressed by default
}

/// ser32(i): 4-byte big-endian serialization of a 32-bit integer
pub fn ser32(i: u32) -> [u8; 4] {
  i.to_be_bytes()
}

/// I = HMAC-SHA512(key, data), kept in a buffer that is wiped on drop.
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> Zeroizing<[u8; 64]> {
  let mut mac = HmacSha512::new_from_slice(key).expect("HMAC can take key of any size");
  mac.update(data);
  let mut out = Zeroizing::new([0u8; 64]);
  out.copy_from_slice(&mac.finalize().into_bytes());
  out
}

/// Split I into (I_L, I_R). I_L stays secret; I_R becomes the child chain code.
pub fn split_i(i: &[u8; 64]) -> (Zeroizing<[u8; 32]>, ChainCode) {
  let mut il = Zeroizing::new([0u8; 32]);
  il.copy_from_slice(&i[..32]);
  let mut ir = [0u8; 32];
  ir.copy_from_slice(&i[32..]);
  (il, ir)
}

/// Copy `bytes` into a fixed-size array, rejecting any other length.
pub fn fixed<const N: usize>(what: &'static str, expected: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
  bytes
    .try_into()
    .map_err(|_| Bip32Error::InvalidSeedOrKeyLength {
      what,
      expected,
      got: bytes.len(),
    })
}

pub fn hash160(data: &[u8]) -> [u8; 20] {
  let mid = Sha256::digest(data);
  let out = Ripemd160::digest(mid);
  let mut r = [0u8; 20];
  r.copy_from_slice(&out);
  r
}

/// Key identifier fingerprint: first 32 bits of HASH160(serP(K)), big-endian.
pub fn fingerprint_from_pub(pk: &PublicKey) -> u32 {
  let h160 = hash160(&ser_p(pk));
  u32::from_be_bytes([h160[0], h160[1], h160[2], h160[3]])
}
