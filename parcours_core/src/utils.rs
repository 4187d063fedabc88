// parcours_core/src/utils.rs

/// Serde adapter so a checkpoint center reads as a plain `[x, z]` array in
/// scenario TOML instead of a nalgebra struct.
pub mod serde_vec2 {
    use nalgebra::Vector2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Vector2<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [value.x, value.y].serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vector2<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, z] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Vector2::new(x, z))
    }
}
