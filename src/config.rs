use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Hyetaek";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the policy catalog inside the data directory.
pub const CATALOG_FILE: &str = "filtered_policies.json";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info,hyetaek=debug"
}

/// Get the application data directory.
/// `HYETAEK_DATA_DIR` overrides; otherwise ~/Hyetaek/ on all platforms.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("HYETAEK_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(APP_NAME)
}

/// Get the default catalog path.
pub fn catalog_path() -> PathBuf {
    data_dir().join(CATALOG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_path_under_data_dir() {
        let path = catalog_path();
        assert!(path.starts_with(data_dir()));
        assert!(path.ends_with(CATALOG_FILE));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
