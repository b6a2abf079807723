use std::fs;

const DEFAULT_CONFIG: &str = "src/default_config.toml";
const REQUIRED_KEYS: &[&str] = &["languages", "rules_dir", "output_dir", "file_prefix"];

fn main() {
    println!("cargo:rerun-if-changed={DEFAULT_CONFIG}");

    let content = fs::read_to_string(DEFAULT_CONFIG)
        .unwrap_or_else(|e| panic!("cannot read {DEFAULT_CONFIG}: {e}"));

    // The binary embeds this file, so a broken default must fail the build
    let table = content
        .parse::<toml::Table>()
        .unwrap_or_else(|e| panic!("invalid {DEFAULT_CONFIG}: {e}"));

    for key in REQUIRED_KEYS {
        if !table.contains_key(*key) {
            panic!("{DEFAULT_CONFIG} is missing `{key}`");
        }
    }
}
