//! Wallet Import Format for the leaf private keys handed out by the sequence.
//!
//! WIF = Base58Check(version || ser256(k) || 0x01). The trailing 0x01 marks the
//! key as belonging to a compressed public key, which is all this crate produces.

use secp256k1::SecretKey;
use zeroize::Zeroizing;

use crate::bip32::{util, Bip32Error, Network, Result};

const COMPRESSED_FLAG: u8 = 0x01;

pub fn encode(sk: &SecretKey, network: Network) -> Zeroizing<String> {
  let mut payload = Zeroizing::new([0u8; 1 + 32 + 1]);
  payload[0] = network.wif_version();
  payload[1..33].copy_from_slice(&sk.secret_bytes());
  payload[33] = COMPRESSED_FLAG;
  Zeroizing::new(bs58::encode(&*payload).with_check().into_string())
}

/// Decode a compressed-key WIF string.
pub fn decode(s: &str) -> Result<(SecretKey, Network)> {
  let data = Zeroizing::new(
    bs58::decode(s)
      .with_check(None)
      .into_vec()
      .map_err(|_| Bip32Error::InvalidWif)?,
  );
  if data.len() != 34 || data[33] != COMPRESSED_FLAG {
    return Err(Bip32Error::InvalidWif);
  }
  let network = match data[0] {
    v if v == Network::Mainnet.wif_version() => Network::Mainnet,
    v if v == Network::Testnet.wif_version() => Network::Testnet,
    _ => return Err(Bip32Error::InvalidWif),
  };
  let bytes = Zeroizing::new(util::fixed::<32>("secret key", "32", &data[1..33])?);
  let sk = SecretKey::from_byte_array(*bytes).map_err(|_| Bip32Error::InvalidWif)?;
  Ok((sk, network))
}
