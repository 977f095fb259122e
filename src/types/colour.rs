//! Colour types and the 18-colour palette.
//!
//! A raw [`Colour`] is whatever the image decoder produced. Classifying it
//! against the palette yields a [`PaletteColour`], whose hue and lightness
//! coordinates drive operation selection.

use std::fmt;

use serde::Serialize;

use crate::error::{PietError, Result};

use super::Position;

/// An RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Convert to RGB array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_black(self) -> bool {
        self == Self::BLACK
    }

    pub fn is_white(self) -> bool {
        self == Self::WHITE
    }

    /// Classify this colour against the palette.
    ///
    /// `position` only tags the error.
    pub fn classify(self, position: Position) -> Result<PaletteColour> {
        if self.is_black() {
            return Ok(PaletteColour::Black);
        }
        if self.is_white() {
            return Ok(PaletteColour::White);
        }
        PALETTE
            .iter()
            .enumerate()
            .find_map(|(hue, row)| {
                row.iter()
                    .position(|&c| c == self)
                    .map(|light| PaletteColour::Chromatic {
                        hue: Hue::ALL[hue],
                        lightness: Lightness::ALL[light],
                    })
            })
            .ok_or(PietError::UnknownColour {
                colour: self,
                position,
            })
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

/// The six hues, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl Hue {
    pub const ALL: [Hue; 6] = [
        Hue::Red,
        Hue::Yellow,
        Hue::Green,
        Hue::Cyan,
        Hue::Blue,
        Hue::Magenta,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// The three lightness levels, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lightness {
    Light,
    Normal,
    Dark,
}

impl Lightness {
    pub const ALL: [Lightness; 3] = [Lightness::Light, Lightness::Normal, Lightness::Dark];

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Palette table indexed by `[hue][lightness]`.
pub const PALETTE: [[Colour; 3]; 6] = [
    [
        Colour::rgb(0xFF, 0xC0, 0xC0),
        Colour::rgb(0xFF, 0x00, 0x00),
        Colour::rgb(0xC0, 0x00, 0x00),
    ],
    [
        Colour::rgb(0xFF, 0xFF, 0xC0),
        Colour::rgb(0xFF, 0xFF, 0x00),
        Colour::rgb(0xC0, 0xC0, 0x00),
    ],
    [
        Colour::rgb(0xC0, 0xFF, 0xC0),
        Colour::rgb(0x00, 0xFF, 0x00),
        Colour::rgb(0x00, 0xC0, 0x00),
    ],
    [
        Colour::rgb(0xC0, 0xFF, 0xFF),
        Colour::rgb(0x00, 0xFF, 0xFF),
        Colour::rgb(0x00, 0xC0, 0xC0),
    ],
    [
        Colour::rgb(0xC0, 0xC0, 0xFF),
        Colour::rgb(0x00, 0x00, 0xFF),
        Colour::rgb(0x00, 0x00, 0xC0),
    ],
    [
        Colour::rgb(0xFF, 0xC0, 0xFF),
        Colour::rgb(0xFF, 0x00, 0xFF),
        Colour::rgb(0xC0, 0x00, 0xC0),
    ],
];

/// A raw colour classified against the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColour {
    Black,
    White,
    Chromatic { hue: Hue, lightness: Lightness },
}

impl PaletteColour {
    /// The raw colour this palette entry stands for.
    pub fn colour(self) -> Colour {
        match self {
            PaletteColour::Black => Colour::BLACK,
            PaletteColour::White => Colour::WHITE,
            PaletteColour::Chromatic { hue, lightness } => {
                PALETTE[hue.index() as usize][lightness.index() as usize]
            }
        }
    }
}

/// Hue and lightness steps taken when moving from one colour to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColourDelta {
    pub hue: u8,
    pub lightness: u8,
}

/// Compute the hue/lightness change between two pixels.
///
/// A white endpoint is a pass-through and yields a zero delta. Black or
/// off-palette endpoints fail with `UnknownColour` at the offending position.
pub fn colour_delta(
    start: (Colour, Position),
    end: (Colour, Position),
) -> Result<ColourDelta> {
    if start.0.is_white() || end.0.is_white() {
        return Ok(ColourDelta::default());
    }

    let (from_hue, from_light) = chromatic(start)?;
    let (to_hue, to_light) = chromatic(end)?;

    Ok(ColourDelta {
        hue: (to_hue + 6 - from_hue) % 6,
        lightness: (to_light + 3 - from_light) % 3,
    })
}

fn chromatic((colour, position): (Colour, Position)) -> Result<(u8, u8)> {
    match colour.classify(position)? {
        PaletteColour::Chromatic { hue, lightness } => Ok((hue.index(), lightness.index())),
        _ => Err(PietError::UnknownColour { colour, position }),
    }
}
