use palette::{Hsl, IntoColor, Srgb};

/// 8-bit sRGB triple, independent of any UI toolkit.
pub type Rgb = [u8; 3];

pub const TRACK_BACKGROUND: Rgb = [0xf0, 0xf8, 0xff];
pub const TRACK_LINE: Rgb = [0x66, 0x7e, 0xea];
pub const START_MARKER: Rgb = [0x4c, 0xaf, 0x50];
pub const END_MARKER: Rgb = [0xf4, 0x43, 0x36];
pub const POINT_MARKER: Rgb = [0x66, 0x7e, 0xea];

// ---------------------------------------------------------------------------
// Marker roles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    Start,
    End,
    Point,
}

/// Role of the `index`-th of `len` markers. A single point counts as the start.
pub fn marker_role(index: usize, len: usize) -> MarkerRole {
    if index == 0 {
        MarkerRole::Start
    } else if index + 1 == len {
        MarkerRole::End
    } else {
        MarkerRole::Point
    }
}

pub fn marker_color(role: MarkerRole) -> Rgb {
    match role {
        MarkerRole::Start => START_MARKER,
        MarkerRole::End => END_MARKER,
        MarkerRole::Point => POINT_MARKER,
    }
}

// ---------------------------------------------------------------------------
// Colour-by-time gradient
// ---------------------------------------------------------------------------

/// `n` colours with hues running evenly from blue (oldest) to red (newest).
pub fn time_gradient(n: usize) -> Vec<Rgb> {
    match n {
        0 => Vec::new(),
        1 => vec![hsl_to_rgb(240.0)],
        _ => (0..n)
            .map(|i| {
                let t = i as f32 / (n - 1) as f32;
                hsl_to_rgb(240.0 * (1.0 - t))
            })
            .collect(),
    }
}

fn hsl_to_rgb(hue: f32) -> Rgb {
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    let rgb: Srgb<u8> = rgb.into_format();
    [rgb.red, rgb.green, rgb.blue]
}

/// CSS hex notation, e.g. `#4caf50`.
pub fn hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}
