//! Hidden object types and their footprints.
//!
//! An [`ObjectType`] describes one class of rectangular object hidden on the board
//! together with how many instances are still unaccounted for. Instances are modelled
//! independently: the engine never constrains them against each other.
use glam::UVec2;

pub mod catalog;

/// A catalog row: footprint and how many instances a scenario hides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectSpec {
    pub width: u32,
    pub height: u32,
    pub total_count: u32,
}

impl ObjectSpec {
    pub const fn new(width: u32, height: u32, total_count: u32) -> Self {
        Self {
            width,
            height,
            total_count,
        }
    }
}

/// One class of hidden rectangular object with its remaining instance count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectType {
    width: u32,
    height: u32,
    total_count: u32,
    /// Instances not yet found. Always `<= total_count`.
    remaining: u32,
}

impl ObjectType {
    /// Creates an object type with every instance still hidden.
    pub fn new(width: u32, height: u32, total_count: u32) -> Self {
        Self {
            width,
            height,
            total_count,
            remaining: total_count,
        }
    }

    /// Sets the remaining count, clamped to `total_count`.
    pub fn with_remaining(mut self, remaining: u32) -> Self {
        self.remaining = remaining.min(self.total_count);
        self
    }

    /// Derives the remaining count from a found count, clamped to `[0, total_count]`.
    pub fn with_found(self, found: i64) -> Self {
        let found = found.clamp(0, self.total_count as i64) as u32;
        let remaining = self.total_count - found;
        self.with_remaining(remaining)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining.min(self.total_count)
    }

    /// Number of instances already found.
    pub fn found(&self) -> u32 {
        self.total_count.saturating_sub(self.remaining)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Distinct orientations: the footprint as given, then its transpose unless square.
    pub fn orientations(&self) -> impl Iterator<Item = Orientation> {
        let original = Orientation::new(self.width, self.height);
        let transposed = (!self.is_square()).then(|| original.transposed());
        std::iter::once(original).chain(transposed)
    }
}

impl From<ObjectSpec> for ObjectType {
    fn from(spec: ObjectSpec) -> Self {
        ObjectType::new(spec.width, spec.height, spec.total_count)
    }
}

/// A footprint rotation of an object type, as `(width, height)` in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orientation {
    pub size: UVec2,
}

impl Orientation {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: UVec2::new(width, height),
        }
    }

    pub fn transposed(&self) -> Self {
        Self::new(self.size.y, self.size.x)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.y
    }
}
