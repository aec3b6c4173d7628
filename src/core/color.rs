//! Player colors and per-color data storage.
//!
//! ## PlayerColor
//!
//! The two sides of a Senet match. Light owns the first piece on the
//! board and always takes the first turn.
//!
//! ## ColorMap
//!
//! Fixed two-slot per-color storage with O(1) access. Supports iteration
//! and indexing by `PlayerColor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Light,
    Dark,
}

impl PlayerColor {
    /// Get the opposing color.
    ///
    /// ```
    /// use senet_engine::core::PlayerColor;
    ///
    /// assert_eq!(PlayerColor::Light.opponent(), PlayerColor::Dark);
    /// assert_eq!(PlayerColor::Dark.opponent(), PlayerColor::Light);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Get the storage index for this color (Light = 0, Dark = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
        }
    }

    /// Iterate over both colors in turn order.
    pub fn both() -> impl Iterator<Item = PlayerColor> {
        [Self::Light, Self::Dark].into_iter()
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// Backed by a fixed `[T; 2]` with one entry per color.
/// Use `ColorMap::new()` to create with a factory function,
/// or `ColorMap::with_value()` to initialize both entries to the same value.
///
/// ## Example
///
/// ```
/// use senet_engine::core::{ColorMap, PlayerColor};
///
/// let mut score: ColorMap<u32> = ColorMap::with_value(0);
///
/// score[PlayerColor::Dark] = 3;
/// assert_eq!(score[PlayerColor::Light], 0);
/// assert_eq!(score[PlayerColor::Dark], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    ///
    /// The factory receives the `PlayerColor` for each slot.
    pub fn new(factory: impl Fn(PlayerColor) -> T) -> Self {
        Self {
            data: [factory(PlayerColor::Light), factory(PlayerColor::Dark)],
        }
    }

    /// Create a new ColorMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new ColorMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: PlayerColor) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: PlayerColor) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (PlayerColor, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerColor, &T)> {
        PlayerColor::both().zip(self.data.iter())
    }

    /// Iterate over (PlayerColor, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerColor, &mut T)> {
        PlayerColor::both().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerColor> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: PlayerColor) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<PlayerColor> for ColorMap<T> {
    fn index_mut(&mut self, color: PlayerColor) -> &mut Self::Output {
        self.get_mut(color)
    }
}
