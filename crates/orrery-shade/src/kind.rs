//! Shader selection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Rgb565;

/// One shader per planet archetype.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderKind {
    /// Cratered gray rock.
    #[default]
    Mercury,
    /// Warm, drifting cloud deck.
    Venus,
    /// Continents, oceans, and a moving cloud layer.
    Earth,
    /// Latitude bands with turbulence and storms.
    Jupiter,
    /// Pale, static bands.
    Saturn,
    /// Cool, energetic storms with a pulsing glow.
    Neptune,
}

impl ShaderKind {
    /// Number of shaders in the bank.
    pub const COUNT: usize = 6;

    /// All shaders in cycling order.
    pub const ALL: [ShaderKind; Self::COUNT] = [
        ShaderKind::Mercury,
        ShaderKind::Venus,
        ShaderKind::Earth,
        ShaderKind::Jupiter,
        ShaderKind::Saturn,
        ShaderKind::Neptune,
    ];

    /// Position of this shader in [`ShaderKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The shader after this one, wrapping back to the first.
    pub const fn next(self) -> ShaderKind {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Upper-case display label.
    pub const fn name(self) -> &'static str {
        match self {
            ShaderKind::Mercury => "MERCURY",
            ShaderKind::Venus => "VENUS",
            ShaderKind::Earth => "EARTH",
            ShaderKind::Jupiter => "JUPITER",
            ShaderKind::Saturn => "SATURN",
            ShaderKind::Neptune => "NEPTUNE",
        }
    }

    /// Indicator color shown next to the active shader.
    pub const fn swatch(self) -> Rgb565 {
        match self {
            ShaderKind::Mercury => Rgb565(0x8410),
            ShaderKind::Venus => Rgb565(0xFFE0),
            ShaderKind::Earth => Rgb565(0x047F),
            ShaderKind::Jupiter => Rgb565(0xFD40),
            ShaderKind::Saturn => Rgb565(0xFE80),
            ShaderKind::Neptune => Rgb565(0x001F),
        }
    }
}

impl FromStr for ShaderKind {
    type Err = String;

    /// Parses a shader name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown shader {s:?}"))
    }
}
