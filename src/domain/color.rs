//! Age to color mapping.
//!
//! Young cells are bright blue, old cells fade through green and yellow
//! to a dim red. Pure functions with no rendering backend attached.

/// 8-bit RGB triple
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color of dead cells
pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);

const YOUNG_HUE: f32 = 200.0;
const OLD_HUE: f32 = 0.0;
const YOUNG_VALUE: f32 = 1.0;
const OLD_VALUE: f32 = 0.35;

fn channel(f: f32) -> u8 {
    (f.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Standard HSV to RGB conversion. Hue is in degrees and may be outside
/// [0, 360); saturation and value are in [0, 1].
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let h = hue.rem_euclid(360.0);
    let c = value * saturation;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(channel(r + m), channel(g + m), channel(b + m))
}

/// Color for a cell of the given age.
///
/// Age 0 is [`BACKGROUND`]. Living cells sweep hue 200° -> 0° and value
/// 1.0 -> 0.35 as they approach `max_age`.
pub fn color_for_age(age: u8, max_age: u8) -> Rgb {
    if age == 0 {
        return BACKGROUND;
    }

    let max_age = max_age.max(1);
    let t = if max_age == 1 {
        0.0
    } else {
        f32::from(age.min(max_age) - 1) / f32::from(max_age - 1)
    };

    let hue = YOUNG_HUE + (OLD_HUE - YOUNG_HUE) * t;
    let value = YOUNG_VALUE + (OLD_VALUE - YOUNG_VALUE) * t;
    hsv_to_rgb(hue, 1.0, value)
}
