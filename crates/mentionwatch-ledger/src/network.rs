//! Chain selector lookup.
//!
//! Maps human-readable testnet names from the config to their CCIP chain
//! selectors. An unknown name is not an error — the reporting step skips
//! with a `network-not-found` outcome instead.

/// Resolve a chain selector name to its numeric selector.
#[must_use]
pub fn resolve_selector(name: &str) -> Option<u64> {
    match name {
        "ethereum-testnet-sepolia" => Some(16_015_286_601_757_825_753),
        "ethereum-testnet-sepolia-arbitrum-1" => Some(3_478_487_238_524_512_106),
        "ethereum-testnet-sepolia-base-1" => Some(10_344_971_235_874_465_080),
        "ethereum-testnet-sepolia-optimism-1" => Some(5_224_473_277_236_331_295),
        "avalanche-testnet-fuji" => Some(14_767_482_510_784_806_043),
        "polygon-testnet-amoy" => Some(16_281_711_391_670_634_445),
        _ => None,
    }
}
