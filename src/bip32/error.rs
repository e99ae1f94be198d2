use thiserror::Error;

pub type Result<T> = std::result::Result<T, Bip32Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Bip32Error {
  /// I_L out of range, key addition produced zero, or point at infinity.
  /// BIP-32 says to move on to the next index; that choice is left to the caller.
  #[error("invalid derivation result (I_L out of range, zero key or point at infinity)")]
  InvalidDerivationResult,

  /// tried hardened CKD from public
  #[error("cannot derive a hardened child from a public-only parent")]
  HardenedFromPublicOnly,

  #[error("invalid {what} length: expected {expected} bytes, got {got}")]
  InvalidSeedOrKeyLength {
    what: &'static str,
    expected: &'static str,
    got: usize,
  },

  /// Index already has the hardened bit set (or is otherwise >= 2^31)
  #[error("child index {0} out of range (must be < 2^31)")]
  IndexOutOfRange(u32),

  #[error("maximum derivation depth (255) exceeded")]
  MaxDepthExceeded,

  /// parse failure
  #[error("invalid derivation path")]
  BadPath,

  /// Base58Check decode failed or payload malformed
  #[error("base58check decode failed or payload malformed")]
  InvalidBase58,

  /// Version prefix not recognized as xpub/xprv/tpub/tprv
  #[error("bad version prefix - must be xpub/xprv/tpub/tprv")]
  BadVersion,

  #[error("unknown network name: {0} (expected mainnet or testnet)")]
  UnknownNetwork(String),

  /// Key data field malformed (wrong length or invalid pub/priv key bytes)
  #[error("key data field malformed - wrong length or invalid pub/priv key bytes")]
  BadKeyData,

  /// BIP-32 requires that depth = 0 (master) implies parent fingerprint = 0 and child number = 0
  #[error("bip-32 requires that depth = 0 (master) implies parent fingerprint = 0 and child number = 0")]
  InvalidRootFields,

  #[error("malformed WIF private key")]
  InvalidWif,
}
