// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns an iteration count into a color.  The twelve low bits of the
//! count are read as three hex digits, each digit is stretched to a
//! full byte, and the color scheme decides which of the three lands
//! on red, green and blue.

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;
use crate::escape::ITERATION_MAX;

/// One pixel of the output image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Constructor.
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// The channels in the order they are written to disk.
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A selector in 0..=5 choosing how the three derived channel values
/// are assigned to red, green and blue.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorScheme(u8);

impl ColorScheme {
    /// The number of available schemes.
    pub const COUNT: u32 = 6;

    /// Constructor.  Fails for anything outside 0..=5.
    pub fn new(scheme: u32) -> Result<ColorScheme, RenderError> {
        if scheme < Self::COUNT {
            Ok(ColorScheme(scheme as u8))
        } else {
            Err(RenderError::InvalidScheme(scheme))
        }
    }

    /// The numeric selector.
    pub fn index(self) -> u32 {
        u32::from(self.0)
    }

    /// Place the high, middle and low channel values onto (R, G, B).
    /// Schemes 0 and 3 share an assignment.
    pub fn permute(self, (a, b, c): (u8, u8, u8)) -> Rgb {
        match self.0 {
            0 => Rgb::new(a, b, c),
            1 => Rgb::new(b, a, c),
            2 => Rgb::new(a, c, b),
            3 => Rgb::new(a, b, c),
            4 => Rgb::new(c, a, b),
            _ => Rgb::new(b, c, a),
        }
    }
}

impl FromStr for ColorScheme {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match u32::from_str(s) {
            Ok(n) => ColorScheme::new(n),
            Err(_) => Err(RenderError::InvalidScheme(u32::max_value())),
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Split the low twelve bits of an iteration count into three nibbles,
/// high to low, each scaled by 17 so that 0xF becomes 255.
#[inline]
pub fn base_channels(n: u32) -> (u8, u8, u8) {
    let nibble = |shift: u32| (((n >> shift) & 0xF) * 17) as u8;
    (nibble(8), nibble(4), nibble(0))
}

/// The color of a pixel whose point survived `n` rounds.  Points that
/// never escaped are black in every scheme.
#[inline]
pub fn colorize(n: u32, scheme: ColorScheme) -> Rgb {
    let channels = if n >= ITERATION_MAX {
        (0, 0, 0)
    } else {
        base_channels(n)
    };
    scheme.permute(channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_schemes() -> Vec<ColorScheme> {
        (0..ColorScheme::COUNT)
            .map(|s| ColorScheme::new(s).unwrap())
            .collect()
    }

    #[test]
    fn scheme_rejects_out_of_range() {
        assert!(ColorScheme::new(5).is_ok());
        assert!(ColorScheme::new(6).is_err());
        assert!("7".parse::<ColorScheme>().is_err());
        assert!("red".parse::<ColorScheme>().is_err());
        assert_eq!("4".parse::<ColorScheme>().unwrap().index(), 4);
        assert_eq!(ColorScheme::default().index(), 0);
    }

    #[test]
    fn full_nibbles_scale_to_255() {
        assert_eq!(base_channels(0xFFF), (255, 255, 255));
        assert_eq!(base_channels(0x000), (0, 0, 0));
        assert_eq!(base_channels(0x1A3), (17, 170, 51));
    }

    #[test]
    fn only_the_low_twelve_bits_count() {
        assert_eq!(base_channels(0x1123), base_channels(0x123));
    }

    #[test]
    fn captive_points_are_black_in_every_scheme() {
        for scheme in all_schemes() {
            assert_eq!(colorize(ITERATION_MAX, scheme), Rgb::default());
            assert_eq!(colorize(ITERATION_MAX + 1, scheme), Rgb::default());
        }
    }

    #[test]
    fn schemes_assign_channels_per_table() {
        // a = 0x1 * 17, b = 0x2 * 17, c = 0x3 * 17
        let (a, b, c) = (17, 34, 51);
        let expected = [
            Rgb::new(a, b, c),
            Rgb::new(b, a, c),
            Rgb::new(a, c, b),
            Rgb::new(a, b, c),
            Rgb::new(c, a, b),
            Rgb::new(b, c, a),
        ];
        for (scheme, want) in all_schemes().into_iter().zip(expected.iter()) {
            assert_eq!(colorize(0x123, scheme), *want, "scheme {}", scheme);
        }
    }

    #[test]
    fn a_single_round_is_dark_blue_in_scheme_zero() {
        assert_eq!(colorize(1, ColorScheme::default()), Rgb::new(0, 0, 17));
        assert_eq!(colorize(0, ColorScheme::default()), Rgb::new(0, 0, 0));
    }
}
