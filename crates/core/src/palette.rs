//! Named color triples and the ordered, cyclic table the engine blends through.
//!
//! A [`PaletteTable`] is fixed at engine construction and never mutated.
//! Consecutive entries are blended by the cycle; a single-entry table is a
//! supported, non-cycling configuration.

use crate::color::Rgb8;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// One keyframe of the cycle: three role colors under a mood name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub primary: Rgb8,
    pub secondary: Rgb8,
    pub accent: Rgb8,
}

impl Palette {
    /// Creates a palette from already-parsed colors.
    pub fn new(name: &str, primary: Rgb8, secondary: Rgb8, accent: Rgb8) -> Self {
        Self {
            name: name.to_string(),
            primary,
            secondary,
            accent,
        }
    }

    /// Creates a palette by parsing `[primary, secondary, accent]` hex strings.
    pub fn from_hex(name: &str, hexes: [&str; 3]) -> Result<Self, EngineError> {
        Ok(Self::new(
            name,
            Rgb8::from_hex(hexes[0])?,
            Rgb8::from_hex(hexes[1])?,
            Rgb8::from_hex(hexes[2])?,
        ))
    }

    /// Colors in `[primary, secondary, accent]` order.
    pub fn colors(&self) -> [Rgb8; 3] {
        [self.primary, self.secondary, self.accent]
    }
}

/// Built-in moods as `(name, [primary, secondary, accent])`, in cycle order.
const BUILTIN: &[(&str, [&str; 3])] = &[
    ("stormy grays", ["#8b7d8b", "#a9a9a9", "#696969"]),
    ("bright morning", ["#ffb6c1", "#ffa07a", "#ffd700"]),
    ("deep purples", ["#9370db", "#8a2be2", "#4b0082"]),
    ("stormy reds", ["#cd5c5c", "#b22222", "#8b0000"]),
    ("soft blues", ["#87ceeb", "#4682b4", "#1e90ff"]),
];

/// Ordered, immutable sequence of palettes. Always holds at least one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteTable {
    palettes: Vec<Palette>,
}

impl PaletteTable {
    /// Creates a table from the given palettes.
    ///
    /// Returns `EngineError::InvalidPalette` if `palettes` is empty.
    pub fn new(palettes: Vec<Palette>) -> Result<Self, EngineError> {
        if palettes.is_empty() {
            return Err(EngineError::InvalidPalette(
                "palette table requires at least 1 palette".to_string(),
            ));
        }
        Ok(Self { palettes })
    }

    /// The five built-in moods: stormy grays, bright morning, deep purples,
    /// stormy reds, soft blues.
    pub fn builtin() -> Self {
        let palettes = BUILTIN
            .iter()
            .map(|(name, hexes)| {
                Palette::from_hex(name, *hexes).expect("builtin palette hex values are valid")
            })
            .collect();
        Self { palettes }
    }

    /// Looks up a single built-in palette by name (case insensitive).
    ///
    /// `"all"` returns the full built-in table. Any other name yields a
    /// one-entry table, which holds still instead of cycling.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        if name.eq_ignore_ascii_case("all") {
            return Ok(Self::builtin());
        }
        Self::builtin()
            .palettes
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| Self { palettes: vec![p] })
            .ok_or_else(|| EngineError::UnknownPalette(name.to_string()))
    }

    /// Names accepted by [`PaletteTable::from_name`], `"all"` first.
    pub fn list_names() -> Vec<&'static str> {
        std::iter::once("all")
            .chain(BUILTIN.iter().map(|(name, _)| *name))
            .collect()
    }

    /// Number of palettes (N). Never zero.
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Palette at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Palette> {
        self.palettes.get(index)
    }

    /// All palettes in cycle order.
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }
}

impl<'de> Deserialize<'de> for PaletteTable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            palettes: Vec<Palette>,
        }
        let raw = Raw::deserialize(deserializer)?;
        PaletteTable::new(raw.palettes).map_err(serde::de::Error::custom)
    }
}

impl Default for PaletteTable {
    fn default() -> Self {
        Self::builtin()
    }
}
