//! Child key derivation functions.
//!
//! Both functions are pure: they take a (key, chain code) pair and an index and
//! return a new pair. An invalid child (I_L >= n, zero key, point at infinity)
//! is reported as [`Bip32Error::InvalidDerivationResult`]; moving on to the next
//! index is up to the caller.

use secp256k1::{PublicKey, Scalar, Secp256k1, SecretKey};
use tracing::trace;
use zeroize::Zeroizing;

use crate::bip32::error::{Bip32Error, Result};
use crate::bip32::{util, ChainCode, ChildIndex};

/// CKDpriv((k_par, c_par), i) -> (k_i, c_i)
pub fn ckd_priv(k: &SecretKey, c: &ChainCode, i: ChildIndex) -> Result<(SecretKey, ChainCode)> {
  // Data = (0x00 || ser256(k_par) || ser32(i)) for hardened
  //      = (serP(K_par)     || ser32(i))       for normal
  let mut data = Zeroizing::new([0u8; 33 + 4]);
  if i.is_hardened() {
    data[1..33].copy_from_slice(&k.secret_bytes());
  } else {
    data[..33].copy_from_slice(&util::ser_p(&util::point(k)));
  }
  data[33..].copy_from_slice(&util::ser32(i.to_u32()));

  let big_i = util::hmac_sha512(c, &*data);
  let (il, ir) = util::split_i(&big_i);

  // Scalar::from_be_bytes rejects I_L >= n; add_tweak rejects a zero sum.
  let tweak = Scalar::from_be_bytes(*il).map_err(|_| Bip32Error::InvalidDerivationResult)?;
  let child = k
    .add_tweak(&tweak)
    .map_err(|_| Bip32Error::InvalidDerivationResult)?;

  trace!(index = %i, "derived private child");
  Ok((child, ir))
}

/// CKDpub((K_par, c_par), i) -> (K_i, c_i), defined for non-hardened indices only.
pub fn ckd_pub(pk: &PublicKey, c: &ChainCode, i: ChildIndex) -> Result<(PublicKey, ChainCode)> {
  if i.is_hardened() {
    return Err(Bip32Error::HardenedFromPublicOnly);
  }

  // Data = serP(K_par) || ser32(i)
  let mut data = [0u8; 33 + 4];
  data[..33].copy_from_slice(&util::ser_p(pk));
  data[33..].copy_from_slice(&util::ser32(i.to_u32()));

  let big_i = util::hmac_sha512(c, &data);
  let (il, ir) = util::split_i(&big_i);

  // K_child = K_par + I_L*G
  let secp = Secp256k1::verification_only();
  let tweak = Scalar::from_be_bytes(*il).map_err(|_| Bip32Error::InvalidDerivationResult)?;
  let child = pk
    .add_exp_tweak(&secp, &tweak)
    .map_err(|_| Bip32Error::InvalidDerivationResult)?;

  trace!(index = %i, "derived public child");
  Ok((child, ir))
}
