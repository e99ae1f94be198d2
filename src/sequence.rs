//! Wallet account sequence on top of BIP-32.
//!
//! Keys live on the fixed path `m/0'/chain/n`, where `chain` is 0 for external
//! (receive) addresses and 1 for internal (change) addresses. The account node
//! `m/0'` is exported once as a [`MasterPublicKey`], after which every address
//! key can be derived with CKDpub alone (watch-only).

use secp256k1::PublicKey;
use tracing::{debug, instrument};
use zeroize::Zeroizing;

use crate::bip32::{
  ckd, util, Bip32Error, ChainCode, ChildIndex, ExtendedPrivKey, ExtendedPubKey, Network, Result,
};
use crate::wif;

/// Hardened account index under the master node.
pub const ACCOUNT: ChildIndex = ChildIndex::Hardened(0);
pub const EXTERNAL_CHAIN: ChildIndex = ChildIndex::Normal(0);
pub const INTERNAL_CHAIN: ChildIndex = ChildIndex::Normal(1);

/// fingerprint(4) || chain code(32) || serP(K)(33)
pub const MASTER_PUBLIC_KEY_LEN: usize = 4 + 32 + 33;

fn chain_index(internal: bool) -> ChildIndex {
  if internal {
    INTERNAL_CHAIN
  } else {
    EXTERNAL_CHAIN
  }
}

/// Public half of the account node `m/0'`, plus the fingerprint of `m`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MasterPublicKey {
  /// Fingerprint of the master node, i.e. the account's parent fingerprint.
  pub fingerprint: u32,
  pub chain_code: ChainCode,
  pub public_key: PublicKey,
}

impl MasterPublicKey {
  pub fn to_bytes(&self) -> [u8; MASTER_PUBLIC_KEY_LEN] {
    let mut out = [0u8; MASTER_PUBLIC_KEY_LEN];
    out[..4].copy_from_slice(&self.fingerprint.to_be_bytes());
    out[4..36].copy_from_slice(&self.chain_code);
    out[36..].copy_from_slice(&util::ser_p(&self.public_key));
    out
  }

  pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
    let blob: [u8; MASTER_PUBLIC_KEY_LEN] = util::fixed("master public key", "69", bytes)?;
    let fingerprint = u32::from_be_bytes([blob[0], blob[1], blob[2], blob[3]]);
    let chain_code = util::fixed("chain code", "32", &blob[4..36])?;
    let public_key = PublicKey::from_slice(&blob[36..]).map_err(|_| Bip32Error::BadKeyData)?;
    Ok(MasterPublicKey {
      fingerprint,
      chain_code,
      public_key,
    })
  }

  /// The account node as a regular extended public key (depth 1, child 0').
  pub fn to_xpub(&self) -> ExtendedPubKey {
    ExtendedPubKey {
      depth: 1,
      parent_fingerprint: self.fingerprint,
      child_number: ACCOUNT,
      chain_code: self.chain_code,
      public_key: self.public_key,
    }
  }
}

/// Derives account keys for one network. Holds no key material.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bip32Sequence {
  network: Network,
}

impl Bip32Sequence {
  pub fn new(network: Network) -> Self {
    Bip32Sequence { network }
  }

  pub fn network(&self) -> Network {
    self.network
  }

  fn account(seed: &[u8]) -> Result<(ExtendedPrivKey, ExtendedPrivKey)> {
    let master = ExtendedPrivKey::master(seed)?;
    let account = master.derive_child(ACCOUNT)?;
    Ok((master, account))
  }

  fn chain(seed: &[u8], internal: bool) -> Result<ExtendedPrivKey> {
    let (_, account) = Self::account(seed)?;
    account.derive_child(chain_index(internal))
  }

  /// Derive `m/0'` from `seed` and keep only its public half.
  #[instrument(level = "debug", skip_all)]
  pub fn master_public_key_from_seed(&self, seed: &[u8]) -> Result<MasterPublicKey> {
    let (master, account) = Self::account(seed)?;
    let mpk = MasterPublicKey {
      fingerprint: master.fingerprint(),
      chain_code: account.chain_code,
      public_key: account.public_key(),
    };
    debug!(parent_fingerprint = %format_args!("{:08x}", mpk.fingerprint), "exported account public key");
    Ok(mpk)
  }

  /// serP of `m/0'/chain/n`, using public derivation only.
  pub fn public_key(&self, n: u32, internal: bool, mpk: &MasterPublicKey) -> Result<[u8; 33]> {
    let leaf = ChildIndex::normal(n)?;
    let (chain_pk, chain_cc) = ckd::ckd_pub(&mpk.public_key, &mpk.chain_code, chain_index(internal))?;
    let (pk, _) = ckd::ckd_pub(&chain_pk, &chain_cc, leaf)?;
    Ok(util::ser_p(&pk))
  }

  /// Batch form of [`Self::public_key`]: the chain step runs once.
  #[instrument(level = "debug", skip(self, mpk), fields(count = ns.len()))]
  pub fn public_keys(&self, ns: &[u32], internal: bool, mpk: &MasterPublicKey) -> Result<Vec<[u8; 33]>> {
    let leaves = ns
      .iter()
      .map(|&n| ChildIndex::normal(n))
      .collect::<Result<Vec<_>>>()?;
    let (chain_pk, chain_cc) = ckd::ckd_pub(&mpk.public_key, &mpk.chain_code, chain_index(internal))?;
    leaves
      .into_iter()
      .map(|leaf| ckd::ckd_pub(&chain_pk, &chain_cc, leaf).map(|(pk, _)| util::ser_p(&pk)))
      .collect()
  }

  /// Extended public key of the external or internal chain, for watch-only export.
  pub fn chain_xpub(&self, internal: bool, mpk: &MasterPublicKey) -> Result<ExtendedPubKey> {
    mpk.to_xpub().derive_child(chain_index(internal))
  }

  /// WIF private key for `m/0'/chain/n`.
  #[instrument(level = "debug", skip(self, seed))]
  pub fn private_key(&self, n: u32, internal: bool, seed: &[u8]) -> Result<Zeroizing<String>> {
    let leaf = ChildIndex::normal(n)?;
    let chain = Self::chain(seed, internal)?;
    let key = chain.derive_child(leaf)?;
    Ok(wif::encode(&key.secret_key, self.network))
  }

  /// WIF private keys for several leaves of one chain. The chain node is
  /// derived once; either every key is returned or none.
  #[instrument(level = "debug", skip(self, seed), fields(count = ns.len()))]
  pub fn private_keys(&self, ns: &[u32], internal: bool, seed: &[u8]) -> Result<Vec<Zeroizing<String>>> {
    let leaves = ns
      .iter()
      .map(|&n| ChildIndex::normal(n))
      .collect::<Result<Vec<_>>>()?;
    let chain = Self::chain(seed, internal)?;
    leaves
      .into_iter()
      .map(|leaf| -> Result<Zeroizing<String>> {
        let key = chain.derive_child(leaf)?;
        Ok(wif::encode(&key.secret_key, self.network))
      })
      .collect()
  }

  /// xprv of the master node `m`.
  pub fn serialized_private_master_from_seed(&self, seed: &[u8]) -> Result<String> {
    Ok(ExtendedPrivKey::master(seed)?.to_base58(self.network))
  }

  /// xpub of the account node `m/0'`.
  pub fn serialized_master_public_key(&self, mpk: &MasterPublicKey) -> String {
    mpk.to_xpub().to_base58(self.network)
  }
}
