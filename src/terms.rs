pub use fixed_map::Key as Term;
pub use fixed_map::Key;
use fixed_map::Map;

use crate::membership::Shape;

/// Linguistic terms of the ambient-temperature input.
#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd)]
pub enum Temperature {
    Cold,
    Medium,
    Hot,
}

/// Linguistic terms of the occupant-count input.
#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd)]
pub enum Occupancy {
    Empty,
    Medium,
    Crowded,
}

/// Linguistic terms of the recommended set-temperature output.
#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd)]
pub enum AcOutput {
    Low,
    Medium,
    High,
}

impl Temperature {
    pub const ALL: [Self; 3] = [Self::Cold, Self::Medium, Self::Hot];

    pub fn name(self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Medium => "medium",
            Self::Hot => "hot",
        }
    }
}

impl Occupancy {
    pub const ALL: [Self; 3] = [Self::Empty, Self::Medium, Self::Crowded];

    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Medium => "medium",
            Self::Crowded => "crowded",
        }
    }
}

impl AcOutput {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Term-to-shape table used to build a [`crate::LinguisticVariable`].
#[derive(Default)]
pub struct Terms<K: Term>(pub(crate) Map<K, Shape>);

impl<K: Term> Terms<K> {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn insert(&mut self, key: K, shape: Shape) {
        self.0.insert(key, shape);
    }
}
