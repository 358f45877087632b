//! Color parsing for the render handoff.
//!
//! Accepts `#RRGGBB`, `#RRGGBBAA` and `rgb()` / `rgba()` with numeric or
//! percent components. The instanced renderer wants normalized RGBA.

use crate::core::log;

pub type Rgba = [f32; 4];

/// What an unparseable color renders as (opaque white).
pub const FALLBACK_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];

/// Parse a CSS-ish color into normalized RGBA. A bad color logs a warning
/// and falls back instead of aborting the frame.
pub fn parse_color_rgba(color: &str) -> Rgba {
    match try_parse(color) {
        Some(rgba) => rgba,
        None => {
            log::warn(&format!("invalid color format: {:?}", color));
            FALLBACK_COLOR
        }
    }
}

fn try_parse(color: &str) -> Option<Rgba> {
    let color = color.trim();

    if let Some(hex) = color.strip_prefix('#') {
        return parse_hex(hex);
    }

    // rgb(...) / rgba(...)
    let body = color
        .strip_prefix("rgba")
        .or_else(|| color.strip_prefix("rgb"))?
        .trim();
    let body = body.strip_prefix('(')?.strip_suffix(')')?;

    let mut channels = [0.0f32, 0.0, 0.0, 255.0];
    let mut count = 0usize;
    for part in body.split(',') {
        if count >= 4 {
            return None;
        }
        channels[count] = parse_channel(part.trim())?;
        count += 1;
    }

    if count < 3 {
        return None;
    }

    Some([
        channels[0] / 255.0,
        channels[1] / 255.0,
        channels[2] / 255.0,
        channels[3] / 255.0,
    ])
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }

    let byte = |at: usize| u8::from_str_radix(hex.get(at..at + 2)?, 16).ok();

    let r = byte(0)?;
    let g = byte(2)?;
    let b = byte(4)?;
    let a = if hex.len() == 8 { byte(6)? } else { 255 };

    Some([
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ])
}

// A channel is 0..=255 numeric or a percentage.
fn parse_channel(raw: &str) -> Option<f32> {
    if let Some(percent) = raw.strip_suffix('%') {
        let value: f32 = percent.trim().parse().ok()?;
        return Some((value / 100.0 * 255.0).round());
    }

    let value: f32 = raw.parse().ok()?;
    Some(value.round())
}
