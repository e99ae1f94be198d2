pub mod bip32;
pub mod logging;
pub mod sequence;
pub mod wif;

use anyhow::{anyhow, bail, Context};
use clap::{arg, parser::ValueSource, ArgAction, ArgMatches, Command};
use tracing::debug;

use crate::bip32::{ExtendedKey, Network};
use crate::sequence::{Bip32Sequence, MasterPublicKey};

fn network_of(matches: &ArgMatches) -> anyhow::Result<Network> {
  let network: &String = matches
    .get_one("network")
    .ok_or_else(|| anyhow!("default network should be enforced"))?;
  Ok(network.parse()?)
}

/// An explicit `--network` wins; otherwise keep the network the input was encoded for.
fn output_network(matches: &ArgMatches, input: Network) -> anyhow::Result<Network> {
  match matches.value_source("network") {
    Some(ValueSource::CommandLine) => network_of(matches),
    _ => Ok(input),
  }
}

fn seed_of(matches: &ArgMatches) -> anyhow::Result<Vec<u8>> {
  let seed: &String = matches
    .get_one("seed")
    .ok_or_else(|| anyhow!("seed is required"))?;
  hex::decode(seed).context("seed should be a hex string")
}

fn indices_of(matches: &ArgMatches) -> Vec<u32> {
  matches
    .get_many::<u32>("index")
    .map(|v| v.copied().collect())
    .unwrap_or_default()
}

fn run_cmd_key_derivation(matches: &ArgMatches) -> anyhow::Result<()> {
  let path: &String = matches
    .get_one("path")
    .ok_or_else(|| anyhow!("path should be required"))?;
  let cks = bip32::parse_path(path)?;

  let (start, input_network) = match (
    matches.get_one::<String>("seed"),
    matches.get_one::<String>("xkey"),
  ) {
    (Some(_), None) => (
      ExtendedKey::Priv(bip32::ExtendedPrivKey::master(&seed_of(matches)?)?),
      Network::default(),
    ),
    (None, Some(xkey)) => bip32::parse_xkey(xkey)?,
    _ => bail!("exactly one of --seed or --xkey is required"),
  };
  let network = output_network(matches, input_network)?;

  match start {
    ExtendedKey::Priv(xprv) => {
      let xprv = bip32::derive_priv_from_path(&xprv, &cks)?;
      println!("{}", xprv.to_base58(network));
      println!("{}", xprv.to_xpub().to_base58(network));
    }
    ExtendedKey::Pub(xpub) => {
      let xpub = bip32::derive_pub_from_path(&xpub, &cks)?;
      println!("{}", xpub.to_base58(network));
    }
  }
  Ok(())
}

fn run_cmd_master(matches: &ArgMatches) -> anyhow::Result<()> {
  let seq = Bip32Sequence::new(network_of(matches)?);
  let seed = zeroize::Zeroizing::new(seed_of(matches)?);
  let mpk = seq.master_public_key_from_seed(&seed)?;
  println!("{}", seq.serialized_private_master_from_seed(&seed)?);
  println!("{}", seq.serialized_master_public_key(&mpk));
  println!("{}", hex::encode(mpk.to_bytes()));
  Ok(())
}

fn run_cmd_public_keys(matches: &ArgMatches) -> anyhow::Result<()> {
  let seq = Bip32Sequence::new(network_of(matches)?);
  let mpk_hex: &String = matches
    .get_one("mpk")
    .ok_or_else(|| anyhow!("master public key is required"))?;
  let mpk = MasterPublicKey::from_bytes(&hex::decode(mpk_hex).context("master public key should be hex")?)?;
  let internal = matches.get_flag("internal");
  let ns = indices_of(matches);
  debug!(count = ns.len(), internal, "deriving public keys");
  for (n, pk) in ns.iter().zip(seq.public_keys(&ns, internal, &mpk)?) {
    println!("{n}\t{}", hex::encode(pk));
  }
  Ok(())
}

fn run_cmd_private_keys(matches: &ArgMatches) -> anyhow::Result<()> {
  let seq = Bip32Sequence::new(network_of(matches)?);
  let seed = zeroize::Zeroizing::new(seed_of(matches)?);
  let internal = matches.get_flag("internal");
  let ns = indices_of(matches);
  debug!(count = ns.len(), internal, "deriving private keys");
  for (n, key) in ns.iter().zip(seq.private_keys(&ns, internal, &seed)?) {
    println!("{n}\t{}", *key);
  }
  Ok(())
}

fn seed_arg() -> clap::Arg {
  arg!(-s --seed <SEED> "BIP-32 seed of any length, given as a hexadecimal string").id("seed")
}

fn network_arg() -> clap::Arg {
  arg!(-n --network <NETWORK> "network (either mainnet or testnet)")
    .id("network")
    .default_value("mainnet")
    .value_parser(["mainnet", "testnet"])
}

fn internal_arg() -> clap::Arg {
  arg!(-i --internal "Use the internal (change) chain instead of the external one")
    .id("internal")
    .action(ArgAction::SetTrue)
}

fn index_arg() -> clap::Arg {
  arg!(<INDEX> ... "Leaf indices (non-hardened, below 2^31)")
    .id("index")
    .value_parser(clap::value_parser!(u32).range(..0x8000_0000_i64))
}

pub fn command() -> Command {
  Command::new(env!("CARGO_CRATE_NAME"))
    .version(env!("CARGO_PKG_VERSION"))
    .about("BIP-32 key derivation - extended keys, paths and the m/0'/chain/n wallet sequence")
    .arg_required_else_help(true)
    .subcommand_required(true)
    .arg(arg!(-v --verbose "Log derivation steps to stderr").global(true))
    .subcommand(
      Command::new("derive")
        .about("Derive child keys along an arbitrary BIP-32 path")
        .visible_alias("32")
        .arg(arg!(<PATH> "BIP-32 derivation path e.g. m/5'/0").id("path"))
        .arg(
          seed_arg()
            .required_unless_present("xkey")
            .conflicts_with("xkey"),
        )
        .arg(
          arg!(-x --xkey <XKEY> "Extended private or public key to start from (any depth)")
            .id("xkey")
            .required_unless_present("seed")
            .conflicts_with("seed"),
        )
        .arg(network_arg()),
    )
    .subcommand(
      Command::new("master")
        .about("Print the master xprv, the account xpub (m/0') and the master public key blob")
        .arg(seed_arg().required(true))
        .arg(network_arg()),
    )
    .subcommand(
      Command::new("pub")
        .about("Derive leaf public keys from a master public key blob (watch-only)")
        .arg(
          arg!(-m --mpk <MPK> "Master public key blob (69 bytes, hex) as printed by `master`")
            .id("mpk")
            .required(true),
        )
        .arg(internal_arg())
        .arg(network_arg())
        .arg(index_arg()),
    )
    .subcommand(
      Command::new("priv")
        .about("Derive leaf private keys (WIF) from a seed")
        .arg(seed_arg().required(true))
        .arg(internal_arg())
        .arg(network_arg())
        .arg(index_arg()),
    )
}

pub fn run() -> anyhow::Result<()> {
  let matches = command().get_matches();
  logging::init(matches.get_flag("verbose"));

  match matches.subcommand() {
    Some(("derive", matches)) => run_cmd_key_derivation(matches),
    Some(("master", matches)) => run_cmd_master(matches),
    Some(("pub", matches)) => run_cmd_public_keys(matches),
    Some(("priv", matches)) => run_cmd_private_keys(matches),
    _ => bail!("a subcommand is required"),
  }
}
