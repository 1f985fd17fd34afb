//! Platform detection helpers.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    /// Where preferences end up on this platform (for startup logs).
    pub fn storage_description(self) -> &'static str {
        match self {
            Self::Web => "browser localStorage",
            Self::Desktop => "preferences.json in the user config directory",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        })
    }
}
