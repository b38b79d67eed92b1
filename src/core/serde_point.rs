//! Serde-Adapter: `glam::DVec2` als `{ "x": .., "y": .. }`-Objekt.
//!
//! glam serialisiert `DVec2` standardmäßig als Array; das Dokumentformat
//! verlangt aber ein Objekt mit benannten Feldern.

use glam::DVec2;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct PointRepr {
    x: f64,
    y: f64,
}

pub fn serialize<S: Serializer>(value: &DVec2, serializer: S) -> Result<S::Ok, S::Error> {
    PointRepr {
        x: value.x,
        y: value.y,
    }
    .serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DVec2, D::Error> {
    let repr = PointRepr::deserialize(deserializer)?;
    Ok(DVec2::new(repr.x, repr.y))
}
