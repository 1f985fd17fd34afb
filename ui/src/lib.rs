//! Shared UI crate for the MedCare site. Pages, routing, localization and
//! preference storage live here; `web` and `desktop` only launch it.

pub mod config;
pub mod content;
pub mod core;
pub mod i18n;
pub mod router;
pub mod views;

pub mod components;

use dioxus::prelude::*;

/// Site-wide theme, linked by the web shell and inlined by the desktop shell.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
