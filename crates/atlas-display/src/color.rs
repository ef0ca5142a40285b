//! Hex color math: WCAG luminance, darkness test, lightening

/// Luminance below this reads as dark against the map background
pub const DARK_LUMINANCE_THRESHOLD: f64 = 0.18;

/// Fixed lighten amount applied to dark brand colors, in percent
const DISPLAY_LIGHTEN_PERCENT: f64 = 50.0;

/// Parse `"#rrggbb"` or `"rrggbb"` into channels
fn parse_hex(color: &str) -> Option<[u8; 3]> {
    let hex = color.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

/// Whether a string is a 6-digit hex color, with or without `#`
pub fn is_valid_hex_color(color: &str) -> bool {
    parse_hex(color).is_some()
}

/// Gamma-expand one sRGB channel to linear light
fn linearize(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of a hex color, 0 for black through 1 for
/// white. Unparseable input counts as black.
pub fn relative_luminance(color: &str) -> f64 {
    let [r, g, b] = match parse_hex(color) {
        Some(rgb) => rgb,
        None => return 0.0,
    };
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Whether a color is too dark for the map background
pub fn is_dark(color: &str) -> bool {
    relative_luminance(color) < DARK_LUMINANCE_THRESHOLD
}

/// Raise every channel by `round(2.55 * percent)`, clamped to 255.
/// Returns lowercase `#rrggbb`; unparseable input is returned unchanged.
pub fn lighten(color: &str, percent: f64) -> String {
    let [r, g, b] = match parse_hex(color) {
        Some(rgb) => rgb,
        None => return color.to_string(),
    };
    let amount = (2.55 * percent).round() as i32;
    let lift = |channel: u8| (channel as i32 + amount).clamp(0, 255) as u8;
    format!("#{:02x}{:02x}{:02x}", lift(r), lift(g), lift(b))
}

/// Color to actually render: dark brand colors are lightened by a fixed
/// 50%, bright ones pass through unchanged.
pub fn display_color(color: &str) -> String {
    if is_dark(color) {
        lighten(color, DISPLAY_LIGHTEN_PERCENT)
    } else {
        color.to_string()
    }
}
