use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static DASHBOARD_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/dashboard.css`.
pub fn dashboard_css() -> &'static str {
    DASHBOARD_CSS
        .get_or_init(|| load_text("/assets/dashboard.css").unwrap_or_default())
        .as_str()
}

/// Raw bytes of an embedded asset, `None` if it was not bundled.
pub fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(&canonical_asset_path(path)).map(|file| file.data)
}

/// UTF-8 contents of an embedded asset.
pub fn load_text(path: &str) -> Option<String> {
    let asset = load_asset(path)?;
    match String::from_utf8(asset.into_owned()) {
        Ok(text) => Some(text),
        Err(_) => {
            tracing::warn!(path, "embedded asset is not valid UTF-8");
            None
        }
    }
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_paths_drop_folder_prefix() {
        assert_eq!(canonical_asset_path("/assets/seed.json"), "seed.json");
        assert_eq!(canonical_asset_path("seed.json"), "seed.json");
    }

    #[test]
    fn stylesheet_is_bundled() {
        assert!(dashboard_css().contains(".alert-card"));
        assert!(load_asset("/assets/missing.bin").is_none());
    }
}
