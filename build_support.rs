// Longtime
// copyright zipxing@hotmail.com 2022～2025

// Shared cfg_aliases configuration function
// Called from build.rs: setup_longtime_cfg_aliases();

fn setup_longtime_cfg_aliases() {
    use cfg_aliases::cfg_aliases;

    cfg_aliases! {
        // Platform aliases
        wasm: { target_arch = "wasm32" },
        mobile: { any(target_os = "android", target_os = "ios") },

        // Window/context backend: SDL2 on desktop only
        sdl_backend: { all(feature = "sdl", not(wasm), not(mobile)) },
    }
}
