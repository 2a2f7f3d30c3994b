//! Colors and the sequential Cp color scale.

use aero_core::{CoreError, CoreResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> CoreResult<Self> {
        let bad = || CoreError::InvalidArg {
            what: format!("invalid hex color '{hex}'"),
        };
        let digits = hex.strip_prefix('#').ok_or_else(bad)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);

        let parsed = match digits.len() {
            3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
            4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
            6 => (byte(0), byte(2), byte(4), Ok(255)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            _ => return Err(bad()),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self { r, g, b, a }),
            _ => Err(bad()),
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    fn lerp(a: Self, b: Self, t: f64) -> Self {
        let mix = |x: u8, y: u8| {
            (f64::from(x) + (f64::from(y) - f64::from(x)) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(a.r, b.r),
            g: mix(a.g, b.g),
            b: mix(a.b, b.b),
            a: mix(a.a, b.a),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

const VIRIDIS: [Rgba; 9] = [
    Rgba::rgb(68, 1, 84),
    Rgba::rgb(71, 44, 122),
    Rgba::rgb(59, 81, 139),
    Rgba::rgb(44, 113, 142),
    Rgba::rgb(33, 144, 141),
    Rgba::rgb(39, 173, 129),
    Rgba::rgb(92, 200, 99),
    Rgba::rgb(170, 220, 50),
    Rgba::rgb(253, 231, 37),
];

/// Viridis ramp, `t` in [0, 1] (clamped; NaN maps to the start).
pub fn viridis(t: f64) -> Rgba {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    Rgba::lerp(VIRIDIS[i], VIRIDIS[i + 1], scaled - i as f64)
}

/// Maps a value domain onto an interpolator over [0, 1].
///
/// The domain may be reversed (`start > end`). A degenerate domain maps
/// every value to the middle of the ramp.
#[derive(Clone, Copy)]
pub struct SequentialScale {
    start: f64,
    end: f64,
    interpolator: fn(f64) -> Rgba,
}

impl fmt::Debug for SequentialScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequentialScale")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl SequentialScale {
    pub fn new(start: f64, end: f64, interpolator: fn(f64) -> Rgba) -> Self {
        Self {
            start,
            end,
            interpolator,
        }
    }

    pub fn viridis(start: f64, end: f64) -> Self {
        Self::new(start, end, viridis)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    /// Position of `value` along the ramp, before clamping.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.end - self.start;
        if span == 0.0 {
            0.5
        } else {
            (value - self.start) / span
        }
    }

    pub fn color(&self, value: f64) -> Rgba {
        (self.interpolator)(self.normalize(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Rgba::from_hex("#ccd").unwrap(), Rgba::rgb(0xcc, 0xcc, 0xdd));
        assert_eq!(
            Rgba::from_hex("#9aa4").unwrap(),
            Rgba::rgba(0x99, 0xaa, 0xaa, 0x44)
        );
        assert_eq!(Rgba::from_hex("#1a2b3c").unwrap(), Rgba::rgb(0x1a, 0x2b, 0x3c));
        assert!(Rgba::from_hex("ccd").is_err());
        assert!(Rgba::from_hex("#ggg").is_err());
        assert!(Rgba::from_hex("#12345").is_err());
    }

    #[test]
    fn hex_output() {
        assert_eq!(Rgba::rgb(68, 1, 84).to_hex(), "#440154");
        assert_eq!(Rgba::rgba(0x99, 0xaa, 0xaa, 0x44).to_hex(), "#99aaaa44");
    }

    #[test]
    fn viridis_endpoints() {
        assert_eq!(viridis(0.0), VIRIDIS[0]);
        assert_eq!(viridis(1.0), VIRIDIS[8]);
        assert_eq!(viridis(-3.0), VIRIDIS[0]);
        assert_eq!(viridis(7.0), VIRIDIS[8]);
        assert_eq!(viridis(0.5), VIRIDIS[4]);
    }

    #[test]
    fn reversed_domain_puts_max_at_start() {
        // Domain [max, min]: highest Cp gets the dark end, lowest the bright end.
        let scale = SequentialScale::viridis(3.0, -1.0);
        assert_eq!(scale.color(3.0), viridis(0.0));
        assert_eq!(scale.color(-1.0), viridis(1.0));
    }

    #[test]
    fn degenerate_domain_is_midpoint() {
        let scale = SequentialScale::viridis(0.4, 0.4);
        assert_eq!(scale.color(0.4), viridis(0.5));
        assert_eq!(scale.color(-10.0), viridis(0.5));
    }

    proptest! {
        #[test]
        fn viridis_is_monotone_in_green(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            // Green rises along the whole ramp.
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(viridis(lo).g <= viridis(hi).g);
        }
    }
}
