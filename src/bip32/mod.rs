//! BIP-32 (HD keys) for secp256k1.
//!
//! - Master key from seed
//! - CKDpriv (hardened & normal) and CKDpub (normal only), see [`ckd`]
//! - xprv/xpub Base58Check serialization and parsing (mainnet & testnet)
//! - Small path parser: e.g. "m/0h/1/2'/2"

pub mod ckd;
pub mod error;
pub mod util;

use std::fmt;
use std::str::FromStr;

use secp256k1::{PublicKey, SecretKey};
use tracing::debug;
use zeroize::Zeroizing;

pub use crate::bip32::error::{Bip32Error, Result};

pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// HMAC key used to turn a seed into the master node.
pub const SEED_KEY: &[u8] = b"Bitcoin seed";

/// Serialized extended key length before the Base58Check checksum.
pub const XKEY_LEN: usize = 78;

/// 32-byte chain code paired with every key in the tree.
pub type ChainCode = [u8; 32];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Network {
  #[default]
  Mainnet,
  Testnet,
}

impl Network {
  /// (public, private) extended key version prefixes
  fn versions(self) -> (u32, u32) {
    match self {
      // xpub/xprv
      Network::Mainnet => (0x0488_B21E, 0x0488_ADE4),
      // tpub/tprv
      Network::Testnet => (0x0435_87CF, 0x0435_8394),
    }
  }

  /// Version byte for WIF private keys.
  pub fn wif_version(self) -> u8 {
    match self {
      Network::Mainnet => 0x80,
      Network::Testnet => 0xEF,
    }
  }
}

impl FromStr for Network {
  type Err = Bip32Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "mainnet" | "main" | "bitcoin" => Ok(Network::Mainnet),
      "testnet" | "test" => Ok(Network::Testnet),
      _ => Err(Bip32Error::UnknownNetwork(s.to_owned())),
    }
  }
}

fn decode_versions(v: u32) -> Result<(Network, bool /*is_pub*/)> {
  match v {
    0x0488_B21E => Ok((Network::Mainnet, true)),  // xpub
    0x0488_ADE4 => Ok((Network::Mainnet, false)), // xprv
    0x0435_87CF => Ok((Network::Testnet, true)),  // tpub
    0x0435_8394 => Ok((Network::Testnet, false)), // tprv
    _ => Err(Bip32Error::BadVersion),
  }
}

/// A child index. The inner value never carries the hardened bit; use the
/// checked constructors, which reject values >= 2^31.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChildIndex {
  Normal(u32),
  Hardened(u32),
}

impl ChildIndex {
  pub fn normal(index: u32) -> Result<Self> {
    if index >= HARDENED_OFFSET {
      return Err(Bip32Error::IndexOutOfRange(index));
    }
    Ok(ChildIndex::Normal(index))
  }

  pub fn hardened(index: u32) -> Result<Self> {
    if index >= HARDENED_OFFSET {
      return Err(Bip32Error::IndexOutOfRange(index));
    }
    Ok(ChildIndex::Hardened(index))
  }

  pub fn is_hardened(self) -> bool {
    matches!(self, ChildIndex::Hardened(_))
  }

  /// Index without the hardened bit.
  pub fn index(self) -> u32 {
    match self {
      ChildIndex::Normal(i) | ChildIndex::Hardened(i) => i & !HARDENED_OFFSET,
    }
  }

  /// ser32 value: hardened indices carry the top bit.
  pub fn to_u32(self) -> u32 {
    match self {
      ChildIndex::Normal(_) => self.index(),
      ChildIndex::Hardened(_) => self.index() | HARDENED_OFFSET,
    }
  }
}

impl From<u32> for ChildIndex {
  /// Interpret a raw wire value: top bit set means hardened.
  fn from(raw: u32) -> Self {
    if raw & HARDENED_OFFSET != 0 {
      ChildIndex::Hardened(raw & !HARDENED_OFFSET)
    } else {
      ChildIndex::Normal(raw)
    }
  }
}

impl fmt::Display for ChildIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ChildIndex::Normal(_) => write!(f, "{}", self.index()),
      ChildIndex::Hardened(_) => write!(f, "{}'", self.index()),
    }
  }
}

impl FromStr for ChildIndex {
  type Err = Bip32Error;

  fn from_str(elem: &str) -> Result<Self> {
    if elem.is_empty() {
      return Err(Bip32Error::BadPath);
    }
    let hardened = elem.ends_with('\'') || elem.ends_with('h') || elem.ends_with('H');
    let num_str = if hardened {
      &elem[..elem.len() - 1]
    } else {
      elem
    };
    let n: u32 = num_str.parse().map_err(|_| Bip32Error::BadPath)?;
    let idx = if hardened {
      ChildIndex::hardened(n)
    } else {
      ChildIndex::normal(n)
    };
    idx.map_err(|_| Bip32Error::BadPath)
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedPrivKey {
  pub depth: u8,
  pub parent_fingerprint: u32,
  pub child_number: ChildIndex,
  pub chain_code: ChainCode,
  pub secret_key: SecretKey,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedPubKey {
  pub depth: u8,
  pub parent_fingerprint: u32,
  pub child_number: ChildIndex,
  pub chain_code: ChainCode,
  pub public_key: PublicKey, // compressed
}

/// Either half of a parsed extended key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtendedKey {
  Priv(ExtendedPrivKey),
  Pub(ExtendedPubKey),
}

fn next_depth(depth: u8) -> Result<u8> {
  depth.checked_add(1).ok_or(Bip32Error::MaxDepthExceeded)
}

/// Assemble the 78-byte payload and Base58Check it.
/// `key` is 33 bytes either way: 0x00 || k for private keys, serP(K) for public ones.
fn serialize(
  version: u32,
  depth: u8,
  parent_fingerprint: u32,
  child_number: ChildIndex,
  chain_code: &ChainCode,
  key: &[u8; 33],
) -> String {
  let mut payload = Zeroizing::new([0u8; XKEY_LEN]);
  payload[..4].copy_from_slice(&version.to_be_bytes());
  payload[4] = depth;
  payload[5..9].copy_from_slice(&parent_fingerprint.to_be_bytes());
  payload[9..13].copy_from_slice(&util::ser32(child_number.to_u32()));
  payload[13..45].copy_from_slice(chain_code);
  payload[45..78].copy_from_slice(key);

  bs58::encode(&*payload).with_check().into_string()
}

/* --------------------- Master key from seed ---------------------- */

impl ExtendedPrivKey {
  /// Create master extended private key from seed (BIP-32).
  /// I = HMAC-SHA512(key="Bitcoin seed", data=seed)
  /// master secret = I_L, master chain code = I_R
  /// Any seed length is accepted; HMAC hashes oversized keys down itself.
  pub fn master(seed: &[u8]) -> Result<Self> {
    let i = util::hmac_sha512(SEED_KEY, seed);
    let (il, ir) = util::split_i(&i);

    let sk = SecretKey::from_byte_array(*il).map_err(|_| Bip32Error::InvalidDerivationResult)?;
    let master = ExtendedPrivKey {
      depth: 0,
      parent_fingerprint: 0,
      child_number: ChildIndex::Normal(0),
      chain_code: ir,
      secret_key: sk,
    };
    debug!(fingerprint = %format_args!("{:08x}", master.fingerprint()), "derived master key from seed");
    Ok(master)
  }

  /// Derive a child private key (CKDpriv) at index `i`.
  pub fn derive_child(&self, i: ChildIndex) -> Result<Self> {
    let depth = next_depth(self.depth)?;
    let (secret_key, chain_code) = ckd::ckd_priv(&self.secret_key, &self.chain_code, i)?;
    Ok(ExtendedPrivKey {
      depth,
      parent_fingerprint: self.fingerprint(),
      child_number: i,
      chain_code,
      secret_key,
    })
  }

  pub fn public_key(&self) -> PublicKey {
    util::point(&self.secret_key)
  }

  pub fn fingerprint(&self) -> u32 {
    util::fingerprint_from_pub(&self.public_key())
  }

  /// Get the corresponding extended public key.
  pub fn to_xpub(&self) -> ExtendedPubKey {
    ExtendedPubKey {
      depth: self.depth,
      parent_fingerprint: self.parent_fingerprint,
      child_number: self.child_number,
      chain_code: self.chain_code,
      public_key: self.public_key(),
    }
  }

  /// Serialize to Base58 (xprv/tprv) for `network`.
  pub fn to_base58(&self, network: Network) -> String {
    let (_xpub, xprv) = network.versions();
    // key data: 0x00 + ser256(k)
    let mut key = Zeroizing::new([0u8; 33]);
    key[1..].copy_from_slice(&self.secret_key.secret_bytes());
    serialize(
      xprv,
      self.depth,
      self.parent_fingerprint,
      self.child_number,
      &self.chain_code,
      &key,
    )
  }
}

impl Drop for ExtendedPrivKey {
  fn drop(&mut self) {
    self.secret_key.non_secure_erase();
  }
}

impl ExtendedPubKey {
  /// CKDpub for non-hardened indices.
  pub fn derive_child(&self, i: ChildIndex) -> Result<Self> {
    let depth = next_depth(self.depth)?;
    let (public_key, chain_code) = ckd::ckd_pub(&self.public_key, &self.chain_code, i)?;
    Ok(ExtendedPubKey {
      depth,
      parent_fingerprint: self.fingerprint(),
      child_number: i,
      chain_code,
      public_key,
    })
  }

  pub fn fingerprint(&self) -> u32 {
    util::fingerprint_from_pub(&self.public_key)
  }

  /// Serialize to Base58 (xpub/tpub) for `network`.
  pub fn to_base58(&self, network: Network) -> String {
    let (xpub, _xprv) = network.versions();
    serialize(
      xpub,
      self.depth,
      self.parent_fingerprint,
      self.child_number,
      &self.chain_code,
      &util::ser_p(&self.public_key),
    )
  }
}

/* --------------------- Convenience: path derivation --------------------- */

/// Parse "m/0h/1/2'/2" -> Vec<ChildIndex>
pub fn parse_path(s: &str) -> Result<Vec<ChildIndex>> {
  let s = s.trim();
  if s.is_empty() {
    return Err(Bip32Error::BadPath);
  }
  let mut path_comps = s.split('/');
  let first = path_comps.next().ok_or(Bip32Error::BadPath)?;
  let mut out = Vec::new();
  if first != "m" && first != "M" {
    out.push(first.parse()?);
  }
  for elem in path_comps {
    out.push(elem.parse()?);
  }
  Ok(out)
}

/// Derive an extended private key along a path from a master key.
pub fn derive_priv_from_path(xprv: &ExtendedPrivKey, path: &[ChildIndex]) -> Result<ExtendedPrivKey> {
  let mut xprv = xprv.clone();
  for &cn in path {
    xprv = xprv.derive_child(cn)?;
  }
  Ok(xprv)
}

/// Derive an extended public key along a (non-hardened) path from an xpub.
pub fn derive_pub_from_path(xpub: &ExtendedPubKey, path: &[ChildIndex]) -> Result<ExtendedPubKey> {
  let mut xpub = xpub.clone();
  for &cn in path {
    xpub = xpub.derive_child(cn)?;
  }
  Ok(xpub)
}

/* --------------------- Parsing --------------------- */

/// Parse any extended key; dispatch to xpub/xprv.
pub fn parse_xkey(s: &str) -> Result<(ExtendedKey, Network)> {
  let data = Zeroizing::new(
    bs58::decode(s)
      .with_check(None)
      .into_vec()
      .map_err(|_| Bip32Error::InvalidBase58)?,
  );
  if data.len() != XKEY_LEN {
    return Err(Bip32Error::InvalidBase58);
  }

  let ver = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
  let (network, is_pub) = decode_versions(ver)?;

  let depth = data[4];
  let parent_fingerprint = u32::from_be_bytes([data[5], data[6], data[7], data[8]]);
  let child_number = ChildIndex::from(u32::from_be_bytes([data[9], data[10], data[11], data[12]]));
  let chain_code: ChainCode = util::fixed("chain code", "32", &data[13..45])?;

  // Reject invalid "root" headers per BIP-32
  if depth == 0 && (parent_fingerprint != 0 || child_number.to_u32() != 0) {
    return Err(Bip32Error::InvalidRootFields);
  }

  let key = if is_pub {
    // key data: 33 bytes compressed SEC1
    let public_key = PublicKey::from_slice(&data[45..78]).map_err(|_| Bip32Error::BadKeyData)?;
    ExtendedKey::Pub(ExtendedPubKey {
      depth,
      parent_fingerprint,
      child_number,
      chain_code,
      public_key,
    })
  } else {
    // key data: 0x00 + 32-byte secret
    if data[45] != 0x00 {
      return Err(Bip32Error::BadKeyData);
    }
    let sk_bytes: Zeroizing<[u8; 32]> = Zeroizing::new(util::fixed("secret key", "32", &data[46..78])?);
    let secret_key = SecretKey::from_byte_array(*sk_bytes).map_err(|_| Bip32Error::BadKeyData)?;
    ExtendedKey::Priv(ExtendedPrivKey {
      depth,
      parent_fingerprint,
      child_number,
      chain_code,
      secret_key,
    })
  };
  Ok((key, network))
}

pub fn parse_xprv(s: &str) -> Result<(ExtendedPrivKey, Network)> {
  match parse_xkey(s)? {
    (ExtendedKey::Priv(xprv), net) => Ok((xprv, net)),
    _ => Err(Bip32Error::BadVersion),
  }
}

pub fn parse_xpub(s: &str) -> Result<(ExtendedPubKey, Network)> {
  match parse_xkey(s)? {
    (ExtendedKey::Pub(xpub), net) => Ok((xpub, net)),
    _ => Err(Bip32Error::BadVersion),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use hex::FromHex;

  fn derive_to_strings(seed_hex: &str, path: &str) -> (String, String) {
    let seed = Vec::from_hex(seed_hex).expect("seed hex");
    let master = ExtendedPrivKey::master(&seed).expect("master");
    let path_nodes = parse_path(path).expect("path");
    let xprv = derive_priv_from_path(&master, &path_nodes).expect("derive");
    let xpub = xprv.to_xpub();
    (
      xprv.to_base58(Network::Mainnet),
      xpub.to_base58(Network::Mainnet),
    )
  }

  fn assert_pair(seed_hex: &str, path: &str, want_xprv: &str, want_xpub: &str) {
    let (got_xprv, got_xpub) = derive_to_strings(seed_hex, path);
    assert_eq!(got_xprv, want_xprv, "xprv mismatch at {path}");
    assert_eq!(got_xpub, want_xpub, "xpub mismatch at {path}");
    // decode -> encode reproduces the published strings
    let (px, net1) = parse_xprv(&got_xprv).expect("parse xprv");
    let (pu, net2) = parse_xpub(&got_xpub).expect("parse xpub");
    assert_eq!(net1, Network::Mainnet);
    assert_eq!(net2, Network::Mainnet);
    assert_eq!(px.to_base58(Network::Mainnet), got_xprv, "xprv re-encode");
    assert_eq!(pu.to_base58(Network::Mainnet), got_xpub, "xpub re-encode");
  }

  #[test]
  fn child_index_constructors_and_wire_values() {
    assert_eq!(ChildIndex::normal(7).unwrap().to_u32(), 7);
    assert_eq!(ChildIndex::hardened(7).unwrap().to_u32(), 0x8000_0007);
    assert_eq!(ChildIndex::from(0x8000_0007), ChildIndex::Hardened(7));
    assert_eq!(ChildIndex::from(7), ChildIndex::Normal(7));
    assert_eq!(
      ChildIndex::normal(HARDENED_OFFSET),
      Err(Bip32Error::IndexOutOfRange(HARDENED_OFFSET))
    );
    assert_eq!(
      ChildIndex::hardened(u32::MAX),
      Err(Bip32Error::IndexOutOfRange(u32::MAX))
    );
    assert_eq!(ChildIndex::Hardened(2).to_string(), "2'");
    assert_eq!(ChildIndex::Normal(2).to_string(), "2");
  }

  #[test]
  fn parse_path_accepts_all_hardened_markers() {
    let path = parse_path("m/0h/1/2'/3H").unwrap();
    assert_eq!(
      path,
      vec![
        ChildIndex::Hardened(0),
        ChildIndex::Normal(1),
        ChildIndex::Hardened(2),
        ChildIndex::Hardened(3)
      ]
    );
    assert!(parse_path("m").unwrap().is_empty());
    assert_eq!(parse_path("0/1").unwrap().len(), 2);
  }

  #[test]
  fn parse_path_rejects_garbage() {
    assert_eq!(parse_path(""), Err(Bip32Error::BadPath));
    assert_eq!(parse_path("m//1"), Err(Bip32Error::BadPath));
    assert_eq!(parse_path("m/x"), Err(Bip32Error::BadPath));
    assert_eq!(parse_path("m/2147483648"), Err(Bip32Error::BadPath));
    assert_eq!(parse_path("m/2147483648'"), Err(Bip32Error::BadPath));
  }

  #[test]
  fn master_accepts_seeds_of_any_length() {
    let mut seen = Vec::new();
    for len in [0usize, 8, 65, 128] {
      let m = ExtendedPrivKey::master(&vec![0x42u8; len]).unwrap();
      assert_eq!(m.depth, 0);
      assert_eq!(m.parent_fingerprint, 0);
      let xprv = m.to_base58(Network::Mainnet);
      assert!(xprv.starts_with("xprv"));
      assert!(!seen.contains(&xprv));
      seen.push(xprv);
    }
  }

  #[test]
  fn unknown_network_name_is_reported_as_such() {
    assert_eq!("test".parse::<Network>(), Ok(Network::Testnet));
    assert_eq!(
      "regtest".parse::<Network>(),
      Err(Bip32Error::UnknownNetwork("regtest".into()))
    );
  }

  #[test]
  fn depth_and_fingerprint_bookkeeping() {
    let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let m = ExtendedPrivKey::master(&seed).unwrap();
    assert_eq!(m.depth, 0);
    assert_eq!(m.parent_fingerprint, 0);

    let c = m.derive_child(ChildIndex::hardened(0).unwrap()).unwrap();
    assert_eq!(c.depth, 1);
    assert_eq!(c.parent_fingerprint, m.fingerprint());
    assert_eq!(c.child_number, ChildIndex::Hardened(0));

    let gc = c.to_xpub().derive_child(ChildIndex::normal(1).unwrap()).unwrap();
    assert_eq!(gc.depth, 2);
    assert_eq!(gc.parent_fingerprint, c.fingerprint());
    assert_eq!(gc.parent_fingerprint, 0x5c1b_d648);
  }

  #[test]
  fn derive_child_refuses_to_exceed_max_depth() {
    let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let mut m = ExtendedPrivKey::master(&seed).unwrap();
    m.depth = u8::MAX;
    let i = ChildIndex::normal(0).unwrap();
    assert_eq!(m.derive_child(i), Err(Bip32Error::MaxDepthExceeded));
    assert_eq!(m.to_xpub().derive_child(i), Err(Bip32Error::MaxDepthExceeded));
  }

  #[test]
  fn ckdpub_matches_priv_for_non_hardened() {
    // m -> m/1/2
    let seed = hex::decode("fffcf9f6f3f0edeae7e4e1dedbd8d5d2").unwrap();
    let m = ExtendedPrivKey::master(&seed).unwrap();
    let m_pub = m.to_xpub();

    let path = parse_path("m/1/2").unwrap();
    let child_priv = derive_priv_from_path(&m, &path).unwrap().to_xpub();
    let child_pub = derive_pub_from_path(&m_pub, &path).unwrap();

    assert_eq!(child_priv, child_pub);
  }

  #[test]
  fn derive_pub_from_path_rejects_hardened_steps() {
    let seed = hex::decode("fffcf9f6f3f0edeae7e4e1dedbd8d5d2").unwrap();
    let m_pub = ExtendedPrivKey::master(&seed).unwrap().to_xpub();
    let path = parse_path("m/1/2'").unwrap();
    assert_eq!(
      derive_pub_from_path(&m_pub, &path),
      Err(Bip32Error::HardenedFromPublicOnly)
    );
  }

  #[test]
  fn roundtrip_xprv_xpub_fields() {
    let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let m = ExtendedPrivKey::master(&seed).unwrap();
    let child = derive_priv_from_path(&m, &parse_path("m/0'/1/2'").unwrap()).unwrap();

    for net in [Network::Mainnet, Network::Testnet] {
      let (xprv2, net1) = parse_xprv(&child.to_base58(net)).unwrap();
      let (xpub2, net2) = parse_xpub(&child.to_xpub().to_base58(net)).unwrap();
      assert_eq!(net1, net);
      assert_eq!(net2, net);
      assert_eq!(xprv2, child);
      assert_eq!(xpub2, child.to_xpub());
      assert_eq!(xprv2.depth, 3);
      assert_eq!(xprv2.child_number, ChildIndex::Hardened(2));
    }
  }

  #[test]
  fn testnet_prefixes() {
    let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let m = ExtendedPrivKey::master(&seed).unwrap();
    assert!(m.to_base58(Network::Testnet).starts_with("tprv"));
    assert!(m.to_xpub().to_base58(Network::Testnet).starts_with("tpub"));
  }

  #[test]
  fn parse_xprv_rejects_xpub_and_vice_versa() {
    let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let m = ExtendedPrivKey::master(&seed).unwrap();
    assert_eq!(
      parse_xprv(&m.to_xpub().to_base58(Network::Mainnet)).unwrap_err(),
      Bip32Error::BadVersion
    );
    assert_eq!(
      parse_xpub(&m.to_base58(Network::Mainnet)).unwrap_err(),
      Bip32Error::BadVersion
    );
  }

  #[test]
  fn rejects_wrong_version() {
    let seed = hex::decode("fffcf9f6f3f0edeae7e4e1dedbd8d5d2").unwrap();
    let m = ExtendedPrivKey::master(&seed).unwrap().to_xpub();
    let mut bytes = bs58::decode(m.to_base58(Network::Mainnet))
      .with_check(None)
      .into_vec()
      .unwrap();
    bytes[0] = 0x05;
    let bad = bs58::encode(bytes).with_check().into_string();
    assert_eq!(parse_xpub(&bad).unwrap_err(), Bip32Error::BadVersion);
  }

  #[test]
  fn rejects_bad_checksum_and_length() {
    let seed = hex::decode("fffcf9f6f3f0edeae7e4e1dedbd8d5d2").unwrap();
    let s = ExtendedPrivKey::master(&seed).unwrap().to_xpub().to_base58(Network::Mainnet);
    let mut chars: Vec<char> = s.chars().collect();
    let last = chars.len() - 1;
    chars[last] = if chars[last] == 'a' { 'b' } else { 'a' };
    let corrupted: String = chars.into_iter().collect();
    assert_eq!(parse_xkey(&corrupted).unwrap_err(), Bip32Error::InvalidBase58);

    let short = bs58::encode([0u8; 77]).with_check().into_string();
    assert_eq!(parse_xkey(&short).unwrap_err(), Bip32Error::InvalidBase58);
  }

  #[test]
  fn reject_invalid_root_fields_by_dropping_depth() {
    // Non-root xpub: Vector 1, path m/0'
    let non_root = "xpub68Gmy5EdvgibQVfPdqkBBCHxA5htiqg55crXYuXoQRKfDBFA1WEjWgP6LHhwBZeNK1VTsfTFUHCdrfp1bgwQ9xv5ski8PX9rL2dZXvgGDnw";

    let mut bytes = bs58::decode(non_root).with_check(None).into_vec().unwrap();
    assert_eq!(bytes.len(), XKEY_LEN);
    bytes[4] = 0; // depth

    let bad = bs58::encode(bytes).with_check().into_string();
    assert_eq!(parse_xpub(&bad).unwrap_err(), Bip32Error::InvalidRootFields);
  }

  /* --------------------- Test Vector 1 --------------------- */
  #[test]
  fn bip32_vector1() {
    let seed = "000102030405060708090a0b0c0d0e0f";

    assert_pair(
      seed, "m",
      "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi",
      "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8",
    );
    assert_pair(
      seed, "m/0'",
      "xprv9uHRZZhk6KAJC1avXpDAp4MDc3sQKNxDiPvvkX8Br5ngLNv1TxvUxt4cV1rGL5hj6KCesnDYUhd7oWgT11eZG7XnxHrnYeSvkzY7d2bhkJ7",
      "xpub68Gmy5EdvgibQVfPdqkBBCHxA5htiqg55crXYuXoQRKfDBFA1WEjWgP6LHhwBZeNK1VTsfTFUHCdrfp1bgwQ9xv5ski8PX9rL2dZXvgGDnw",
    );
    assert_pair(
      seed, "m/0'/1",
      "xprv9wTYmMFdV23N2TdNG573QoEsfRrWKQgWeibmLntzniatZvR9BmLnvSxqu53Kw1UmYPxLgboyZQaXwTCg8MSY3H2EU4pWcQDnRnrVA1xe8fs",
      "xpub6ASuArnXKPbfEwhqN6e3mwBcDTgzisQN1wXN9BJcM47sSikHjJf3UFHKkNAWbWMiGj7Wf5uMash7SyYq527Hqck2AxYysAA7xmALppuCkwQ",
    );
    assert_pair(
      seed, "m/0'/1/2'/2/1000000000",
      "xprvA41z7zogVVwxVSgdKUHDy1SKmdb533PjDz7J6N6mV6uS3ze1ai8FHa8kmHScGpWmj4WggLyQjgPie1rFSruoUihUZREPSL39UNdE3BBDu76",
      "xpub6H1LXWLaKsWFhvm6RVpEL9P4KfRZSW7abD2ttkWP3SSQvnyA8FSVqNTEcYFgJS2UaFcxupHiYkro49S8yGasTvXEYBVPamhGW6cFJodrTHy",
    );
  }

  /* --------------------- Test Vector 2 --------------------- */
  #[test]
  fn bip32_vector2() {
    let seed = "fffcf9f6f3f0edeae7e4e1dedbd8d5d2cfccc9c6c3c0bdbab7b4b1aeaba8a5a29f9c999693908d8a8784817e7b7875726f6c696663605d5a5754514e4b484542";

    assert_pair(
      seed, "m",
      "xprv9s21ZrQH143K31xYSDQpPDxsXRTUcvj2iNHm5NUtrGiGG5e2DtALGdso3pGz6ssrdK4PFmM8NSpSBHNqPqm55Qn3LqFtT2emdEXVYsCzC2U",
      "xpub661MyMwAqRbcFW31YEwpkMuc5THy2PSt5bDMsktWQcFF8syAmRUapSCGu8ED9W6oDMSgv6Zz8idoc4a6mr8BDzTJY47LJhkJ8UB7WEGuduB",
    );
    assert_pair(
      seed, "m/0",
      "xprv9vHkqa6EV4sPZHYqZznhT2NPtPCjKuDKGY38FBWLvgaDx45zo9WQRUT3dKYnjwih2yJD9mkrocEZXo1ex8G81dwSM1fwqWpWkeS3v86pgKt",
      "xpub69H7F5d8KSRgmmdJg2KhpAK8SR3DjMwAdkxj3ZuxV27CprR9LgpeyGmXUbC6wb7ERfvrnKZjXoUmmDznezpbZb7ap6r1D3tgFxHmwMkQTPH",
    );
    assert_pair(
      seed, "m/0/2147483647'",
      "xprv9wSp6B7kry3Vj9m1zSnLvN3xH8RdsPP1Mh7fAaR7aRLcQMKTR2vidYEeEg2mUCTAwCd6vnxVrcjfy2kRgVsFawNzmjuHc2YmYRmagcEPdU9",
      "xpub6ASAVgeehLbnwdqV6UKMHVzgqAG8Gr6riv3Fxxpj8ksbH9ebxaEyBLZ85ySDhKiLDBrQSARLq1uNRts8RuJiHjaDMBU4Zn9h8LZNnBC5y4a",
    );
    assert_pair(
      seed, "m/0/2147483647'/1",
      "xprv9zFnWC6h2cLgpmSA46vutJzBcfJ8yaJGg8cX1e5StJh45BBciYTRXSd25UEPVuesF9yog62tGAQtHjXajPPdbRCHuWS6T8XA2ECKADdw4Ef",
      "xpub6DF8uhdarytz3FWdA8TvFSvvAh8dP3283MY7p2V4SeE2wyWmG5mg5EwVvmdMVCQcoNJxGoWaU9DCWh89LojfZ537wTfunKau47EL2dhHKon",
    );
    assert_pair(
      seed, "m/0/2147483647'/1/2147483646'",
      "xprvA1RpRA33e1JQ7ifknakTFpgNXPmW2YvmhqLQYMmrj4xJXXWYpDPS3xz7iAxn8L39njGVyuoseXzU6rcxFLJ8HFsTjSyQbLYnMpCqE2VbFWc",
      "xpub6ERApfZwUNrhLCkDtcHTcxd75RbzS1ed54G1LkBUHQVHQKqhMkhgbmJbZRkrgZw4koxb5JaHWkY4ALHY2grBGRjaDMzQLcgJvLJuZZvRcEL",
    );
    assert_pair(
      seed, "m/0/2147483647'/1/2147483646'/2",
      "xprvA2nrNbFZABcdryreWet9Ea4LvTJcGsqrMzxHx98MMrotbir7yrKCEXw7nadnHM8Dq38EGfSh6dqA9QWTyefMLEcBYJUuekgW4BYPJcr9E7j",
      "xpub6FnCn6nSzZAw5Tw7cgR9bi15UV96gLZhjDstkXXxvCLsUXBGXPdSnLFbdpq8p9HmGsApME5hQTZ3emM2rnY5agb9rXpVGyy3bdW6EEgAtqt",
    );
  }

  /* --------------------- Test Vector 3 (leading zeros) --------------------- */
  #[test]
  fn bip32_vector3_leading_zeros() {
    let seed = "4b381541583be4423346c643850da4b320e46a87ae3d2a4e6da11eba819cd4acba45d239319ac14f863b8d5ab5a0d0c64d2e8a1e7d1457df2e5a3c51c73235be";

    assert_pair(
      seed, "m",
      "xprv9s21ZrQH143K25QhxbucbDDuQ4naNntJRi4KUfWT7xo4EKsHt2QJDu7KXp1A3u7Bi1j8ph3EGsZ9Xvz9dGuVrtHHs7pXeTzjuxBrCmmhgC6",
      "xpub661MyMwAqRbcEZVB4dScxMAdx6d4nFc9nvyvH3v4gJL378CSRZiYmhRoP7mBy6gSPSCYk6SzXPTf3ND1cZAceL7SfJ1Z3GC8vBgp2epUt13",
    );
    assert_pair(
      seed, "m/0'",
      "xprv9uPDJpEQgRQfDcW7BkF7eTya6RPxXeJCqCJGHuCJ4GiRVLzkTXBAJMu2qaMWPrS7AANYqdq6vcBcBUdJCVVFceUvJFjaPdGZ2y9WACViL4L",
      "xpub68NZiKmJWnxxS6aaHmn81bvJeTESw724CRDs6HbuccFQN9Ku14VQrADWgqbhhTHBaohPX4CjNLf9fq9MYo6oDaPPLPxSb7gwQN3ih19Zm4Y",
    );
  }

  /* --------------------- Test Vector 4 (leading zeros) --------------------- */
  #[test]
  fn bip32_vector4_leading_zeros() {
    let seed = "3ddd5602285899a946114506157c7997e5444528f3003f6134712147db19b678";

    assert_pair(
      seed, "m",
      "xprv9s21ZrQH143K48vGoLGRPxgo2JNkJ3J3fqkirQC2zVdk5Dgd5w14S7fRDyHH4dWNHUgkvsvNDCkvAwcSHNAQwhwgNMgZhLtQC63zxwhQmRv",
      "xpub661MyMwAqRbcGczjuMoRm6dXaLDEhW1u34gKenbeYqAix21mdUKJyuyu5F1rzYGVxyL6tmgBUAEPrEz92mBXjByMRiJdba9wpnN37RLLAXa",
    );
    assert_pair(
      seed, "m/0'",
      "xprv9vB7xEWwNp9kh1wQRfCCQMnZUEG21LpbR9NPCNN1dwhiZkjjeGRnaALmPXCX7SgjFTiCTT6bXes17boXtjq3xLpcDjzEuGLQBM5ohqkao9G",
      "xpub69AUMk3qDBi3uW1sXgjCmVjJ2G6WQoYSnNHyzkmdCHEhSZ4tBok37xfFEqHd2AddP56Tqp4o56AePAgCjYdvpW2PU2jbUPFKsav5ut6Ch1m",
    );
    assert_pair(
      seed, "m/0'/1'",
      "xprv9xJocDuwtYCMNAo3Zw76WENQeAS6WGXQ55RCy7tDJ8oALr4FWkuVoHJeHVAcAqiZLE7Je3vZJHxspZdFHfnBEjHqU5hG1Jaj32dVoS6XLT1",
      "xpub6BJA1jSqiukeaesWfxe6sNK9CCGaujFFSJLomWHprUL9DePQ4JDkM5d88n49sMGJxrhpjazuXYWdMf17C9T5XnxkopaeS7jGk1GyyVziaMt",
    );
  }

  /* --------------------- Negative cases from Test Vector 5 --------------------- */
  #[test]
  fn bip32_vector5_invalid_prefixes() {
    // pubkey version / prvkey mismatch
    let mismatch = "xpub661MyMwAqRbcEYS8w7XLSVeEsBXy79zSzH1J8vCdxAZningWLdN3zgtU6LBpB85b3D2yc8sfvZU521AAwdZafEz7mnzBBsz4wKY5fTtTQBm";
    assert!(parse_xkey(mismatch).is_err());

    // invalid pubkey prefix 04
    let bad_pub = "xpub661MyMwAqRbcEYS8w7XLSVeEsBXy79zSzH1J8vCdxAZningWLdN3zgtU6Txnt3siSujt9RCVYsx4qHZGc62TG4McvMGcAUjeuwZdduYEvFn";
    assert_eq!(parse_xpub(bad_pub).unwrap_err(), Bip32Error::BadKeyData);

    // invalid prvkey prefix 04 (first payload byte not 0x00)
    let bad_prv = "xprv9s21ZrQH143K24Mfq5zL5MhWK9hUhhGbd45hLXo2Pq2oqzMMo63oStZzFGpWnsj83BHtEy5Zt8CcDr1UiRXuWCmTQLxEK9vbz5gPstX92JQ";
    assert_eq!(parse_xprv(bad_prv).unwrap_err(), Bip32Error::BadKeyData);
  }
}
