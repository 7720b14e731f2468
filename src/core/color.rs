//! Packed RGBA colors, HSL conversion and the color-phase indicator.

use std::fmt;

/// A color stored as `0xRRGGBBAA` with straight (non-premultiplied) alpha.
///
/// Compositing uses source-over: `src.over(dst)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Fully transparent (alpha = 0).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create an opaque RGB color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Create a color from 8-bit channels and a unit-interval alpha.
    pub fn with_alpha(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self::rgba(r, g, b, unit_to_u8(alpha))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Porter-Duff source-over of `self` onto `dst`.
    pub fn over(self, dst: Self) -> Self {
        let s_a = f64::from(self.a()) / 255.0;
        if self.a() == 255 {
            return self;
        }
        if self.a() == 0 {
            return dst;
        }

        let d_a = f64::from(dst.a()) / 255.0;
        let out_a = s_a + d_a * (1.0 - s_a);
        let channel = |src: u8, dst: u8| -> u8 {
            let mixed = (f64::from(src) * s_a + f64::from(dst) * d_a * (1.0 - s_a)) / out_a;
            mixed.round().clamp(0.0, 255.0) as u8
        };

        Self::rgba(
            channel(self.r(), dst.r()),
            channel(self.g(), dst.g()),
            channel(self.b(), dst.b()),
            unit_to_u8(out_a),
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.3})", self.r(), self.g(), self.b(), f64::from(self.a()) / 255.0)
    }
}

fn unit_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A color in HSL space. Saturation, lightness and alpha are unit-interval values;
/// hue is in degrees and wraps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    /// Saturation and lightness are given in percent, as CSS writes them.
    pub fn new(hue: f64, saturation_pct: f64, lightness_pct: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation: saturation_pct / 100.0,
            lightness: lightness_pct / 100.0,
            alpha,
        }
    }

    /// Converts to packed RGBA.
    pub fn to_rgba(self) -> Rgba {
        let h = self.hue.rem_euclid(360.0);
        let s = self.saturation.clamp(0.0, 1.0);
        let l = self.lightness.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgba::rgba(unit_to_u8(r + m), unit_to_u8(g + m), unit_to_u8(b + m), unit_to_u8(self.alpha))
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue,
            self.saturation * 100.0,
            self.lightness * 100.0,
            self.alpha
        )
    }
}

/// The three-stop gradient and glow shown next to the color-phase control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorIndicator {
    pub stops: [Hsla; 3],
    pub glow: Hsla,
}

impl ColorIndicator {
    /// Gradient at `phase`, `phase + 60` and `phase + 120` degrees.
    pub fn for_phase(phase_degrees: u16) -> Self {
        let hue = f64::from(phase_degrees);
        Self {
            stops: [
                Hsla::new(hue, 80.0, 60.0, 1.0),
                Hsla::new((hue + 60.0) % 360.0, 80.0, 60.0, 1.0),
                Hsla::new((hue + 120.0) % 360.0, 80.0, 60.0, 1.0),
            ],
            glow: Hsla::new(hue, 80.0, 60.0, 0.5),
        }
    }

    /// Renders the gradient as a CSS `linear-gradient` for web hosts.
    pub fn css_gradient(&self) -> String {
        format!(
            "linear-gradient(90deg, hsl({}, 80%, 60%), hsl({}, 80%, 60%), hsl({}, 80%, 60%))",
            self.stops[0].hue, self.stops[1].hue, self.stops[2].hue
        )
    }
}
