pub(crate) const DEFAULT_USER_AGENT: &str = concat!("tct/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_URL: &str = "http://example.com";
pub(crate) const DEFAULT_MAX_LEVEL: &str = "100";
pub(crate) const DEFAULT_DELAY: &str = "0";

/// Config filenames checked in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["tct.toml", "tct.json"];
