//! Packed RGB color math for theme styles

/// Packs 8-bit channels into a 24-bit RGB integer, `(R<<16)|(G<<8)|B`
pub fn pack_rgb(red: u32, green: u32, blue: u32) -> u32 {
    ((red & 0xFF) << 16) | ((green & 0xFF) << 8) | (blue & 0xFF)
}

/// Integer mean of packed RGB values, truncated toward zero.
///
/// Returns `None` for an empty slice. The legacy converter averaged the
/// packed 24-bit integers directly rather than each channel; that behavior
/// is kept for compatibility with existing themes.
pub fn average_packed(colors: &[u32]) -> Option<u32> {
    if colors.is_empty() {
        return None;
    }

    let sum: u64 = colors.iter().map(|&c| c as u64).sum();
    Some((sum / colors.len() as u64) as u32)
}
