use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PackError;

/// A named rectangle with positive `width` and `height` in a caller-chosen
/// linear unit (inches, millimeters, points — the core never converts units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl PhotoSize {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// Which of the four cardinal rotations applies to a photo.
///
/// Only these four values are meaningful to the core; arbitrary-angle
/// rendering is an external concern (§4.1). Serialized as the plain degree
/// number (`0`/`90`/`180`/`270`) so JSON callers write `"rotation": 90`
/// rather than a variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Rotation {
    Deg0 = 0,
    Deg90 = 90,
    Deg180 = 180,
    Deg270 = 270,
}

impl Rotation {
    pub fn from_degrees(v: u16) -> Option<Self> {
        match v {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    pub fn degrees(self) -> u16 {
        self as u16
    }

    /// True for the two rotations that swap width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> Self {
        r.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(v: u16) -> Result<Self, Self::Error> {
        Rotation::from_degrees(v).ok_or_else(|| format!("unsupported rotation: {v} degrees"))
    }
}

impl Serialize for Rotation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.degrees())
    }
}

impl<'de> Deserialize<'de> for Rotation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = u16::deserialize(deserializer)?;
        Rotation::try_from(v).map_err(serde::de::Error::custom)
    }
}

/// One copy of a photo to be placed, already expanded from any
/// caller-side quantity concept (§4.2: expansion happens upstream of the core).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "Payload: Serialize + serde::de::DeserializeOwned")]
pub struct PhotoInput<Payload = serde_json::Value> {
    /// Opaque identifier, propagated unchanged to the corresponding placement.
    pub id: u64,
    pub size: PhotoSize,
    pub rotation: Rotation,
    /// Higher priorities are placed first (stable w.r.t. other keys). Default 0.
    pub priority: i32,
    /// Caller-supplied opaque value; the core never inspects it.
    pub payload: Payload,
}

impl<Payload> PhotoInput<Payload> {
    pub fn new(id: u64, size: PhotoSize, rotation: Rotation, payload: Payload) -> Self {
        Self {
            id,
            size,
            rotation,
            priority: 0,
            payload,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// The output record for one placed photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "Payload: Serialize + serde::de::DeserializeOwned")]
pub struct Placement<Payload = serde_json::Value> {
    pub id: u64,
    pub payload: Payload,
    pub size: PhotoSize,
    pub rotation: Rotation,
    /// Top-left corner of the photo itself (not including the spacing pad),
    /// in page coordinates.
    pub x: f64,
    pub y: f64,
    /// Rotation-aware bounding dimensions, without the spacing pad.
    pub effective_width: f64,
    pub effective_height: f64,
    pub page_index: usize,
}

/// Selects which free-region strategy `pack` uses.
///
/// Modeled as a tagged variant rather than a string switch so dispatch
/// happens once at the top of `pack` (§9, "Discriminated variants").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Guillotine,
    Shelf,
    MaxRects,
}

impl FromStr for Algorithm {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "guillotine" => Ok(Self::Guillotine),
            "shelf" => Ok(Self::Shelf),
            "maxrects" | "max_rects" | "max-rects" => Ok(Self::MaxRects),
            other => Err(PackError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl Algorithm {
    pub fn parse(s: &str) -> crate::error::Result<Self> {
        s.parse()
    }
}
