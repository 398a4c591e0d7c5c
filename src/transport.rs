use serde::{Deserialize, Serialize};

/// Travel modes offered as search filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Plane,
    Train,
    /// Inter-city coach.
    Coach,
    /// Bus within an agglomeration.
    Bus,
    Metro,
    Tram,
    Automobile,
    Bike,
    Walking,
}

impl TransportMode {
    pub const ALL: [TransportMode; 9] = [
        TransportMode::Plane,
        TransportMode::Train,
        TransportMode::Coach,
        TransportMode::Bus,
        TransportMode::Metro,
        TransportMode::Tram,
        TransportMode::Automobile,
        TransportMode::Bike,
        TransportMode::Walking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransportMode::Plane => "Plane",
            TransportMode::Train => "Train",
            TransportMode::Coach => "Coach",
            TransportMode::Bus => "Bus",
            TransportMode::Metro => "Metro",
            TransportMode::Tram => "Tram",
            TransportMode::Automobile => "Automobile",
            TransportMode::Bike => "Bike",
            TransportMode::Walking => "Walking",
        }
    }

    /// Form value, matching the serialized name.
    pub fn key(self) -> &'static str {
        match self {
            TransportMode::Plane => "plane",
            TransportMode::Train => "train",
            TransportMode::Coach => "coach",
            TransportMode::Bus => "bus",
            TransportMode::Metro => "metro",
            TransportMode::Tram => "tram",
            TransportMode::Automobile => "automobile",
            TransportMode::Bike => "bike",
            TransportMode::Walking => "walking",
        }
    }
}
