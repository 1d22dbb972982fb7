// Longtime
// copyright zipxing@hotmail.com 2022～2025

include!("build_support.rs");

fn main() {
    setup_longtime_cfg_aliases();
}
