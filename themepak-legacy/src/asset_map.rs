//! Legacy-to-current asset mapping
//!
//! Old-format theme zips name their images differently and at arbitrary
//! sizes; the current firmware expects fixed names and dimensions. This
//! table drives the rename-and-resize step of translation.

/// One row of the legacy asset table
#[derive(Debug, Clone, Copy)]
pub struct LegacyAsset {
    /// Member name inside the old theme zip
    pub old_name: &'static str,
    /// Staged file name in the new layout
    pub new_name: &'static str,
    /// Exact target size, no aspect-ratio preservation
    pub size: (u32, u32),
}

const fn asset(old_name: &'static str, new_name: &'static str, size: (u32, u32)) -> LegacyAsset {
    LegacyAsset {
        old_name,
        new_name,
        size,
    }
}

/// Every old asset the translator knows how to carry over. Old zip members
/// not listed here are ignored; listed members absent from a zip are skipped.
pub const LEGACY_ASSETS: &[LegacyAsset] = &[
    asset("apps_list.png", "apps_list.png", (648, 96)),
    asset("apps_list_hover.png", "apps_list_hover.png", (648, 96)),
    asset("apps_next.png", "apps_next.png", (96, 96)),
    asset("apps_next_hover.png", "apps_next_hover.png", (96, 96)),
    asset("apps_previous.png", "apps_previous.png", (96, 96)),
    asset("apps_previous_hover.png", "apps_previous_hover.png", (96, 96)),
    asset("background_wide.png", "background.png", (1280, 720)),
    asset("button_tiny.png", "button_tiny.png", (175, 72)),
    asset("button_tiny_focus.png", "button_tiny_focus.png", (175, 72)),
    asset("cursor_pic.png", "cursor.png", (96, 96)),
    asset("dialog_background.png", "dialog_background.png", (780, 540)),
    asset("logo.png", "logo.png", (381, 34)),
    asset("icon_network_active.png", "network_active.png", (48, 48)),
    asset("icon_network.png", "network_inactive.png", (48, 48)),
    asset("progress.png", "remote_progress.png", (600, 168)),
];
