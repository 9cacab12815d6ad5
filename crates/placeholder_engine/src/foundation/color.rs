//! Colors and the fixed palette used by the generators

use image::Rgb;

/// 8-bit RGB color
pub type Color = Rgb<u8>;

/// Build a color from its channels
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Rgb([r, g, b])
}

/// Neutral gray with all channels equal
pub const fn gray(level: u8) -> Color {
    Rgb([level, level, level])
}

/// Blend `src` over `dst` with an 8-bit coverage value
pub fn blend(dst: Color, src: Color, coverage: u8) -> Color {
    match coverage {
        0 => dst,
        255 => src,
        a => {
            let a = u16::from(a);
            let mix = |d: u8, s: u8| ((u16::from(s) * a + u16::from(d) * (255 - a) + 127) / 255) as u8;
            Rgb([
                mix(dst[0], src[0]),
                mix(dst[1], src[1]),
                mix(dst[2], src[2]),
            ])
        }
    }
}

/// Named colors shared by the mockup and thumbnail layouts
pub mod palette {
    use super::{gray, rgb, Color};

    /// Pure white
    pub const WHITE: Color = rgb(0xff, 0xff, 0xff);
    /// Mockup screen background
    pub const SCREEN_BACKGROUND: Color = rgb(0x1e, 0x3a, 0x4a);
    /// Status bar and header background
    pub const BAR: Color = rgb(0x0a, 0x1b, 0x25);
    /// Accent blue for buttons and spinners
    pub const ACCENT: Color = rgb(0x40, 0x80, 0xff);
    /// Success green
    pub const SUCCESS: Color = rgb(0x30, 0xc0, 0x60);
    /// Secondary label text
    pub const LABEL: Color = rgb(0xaa, 0xcc, 0xee);
    /// Input field fill
    pub const FIELD: Color = rgb(0x2c, 0x4c, 0x60);
    /// Placeholder and inactive text
    pub const MUTED: Color = rgb(0x88, 0x99, 0xaa);
    /// Thumbnail border
    pub const BORDER: Color = gray(0xdd);
    /// Thumbnail text shadow
    pub const SHADOW: Color = gray(0xcc);
    /// Thumbnail text
    pub const INK: Color = gray(0x33);
}
