fn main() -> anyhow::Result<()> {
  bip32_sequence::run()
}
