pub const VERSION_ENV: &str = "BUILDBUMP_CLI_VERSION";

/// Returns the CLI version:
/// 1. BUILDBUMP_CLI_VERSION env var
/// 2. compile-time CARGO_PKG_VERSION
pub fn get_version() -> String {
    if let Ok(v) = std::env::var(VERSION_ENV) {
        if !v.trim().is_empty() {
            return v.trim().to_string();
        }
    }

    env!("CARGO_PKG_VERSION").to_string()
}
