//! Types, aliases and helper operations for doing math with `ultraviolet`.
pub use ultraviolet as uv;

/// 2D vector with 64-bit components, used for positions everywhere in flatshape.
pub type Vec2 = uv::DVec2;

/// Module to (de)serialize positions as plain `[x, y]` arrays,
/// using the serde attribute `#[serde(with = "serde_position")]`.
#[cfg(feature = "serde-types")]
pub mod serde_position {
    use super::*;

    pub fn serialize<S>(pos: &Vec2, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::Serialize;
        [pos.x, pos.y].serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec2, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        <[f64; 2]>::deserialize(deserializer).map(|[x, y]| Vec2::new(x, y))
    }
}
