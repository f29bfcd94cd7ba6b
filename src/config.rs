// Tunables for the particle field and its pointer glow.
//
// Every field has a default, so a JSON override only needs the keys it
// changes: `{"particle_count": 60, "connections": false}`.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub min_speed: f64,
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,

    pub connections: bool,
    pub connect_distance: f64,
    pub connect_peak_alpha: f64,

    pub attraction: bool,
    pub attract_radius: f64,
    pub attract_strength: f64,
    pub relax_rate: f64,

    pub glow: bool,
    pub glow_radius: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 100,
            min_speed: -0.25,
            max_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            connections: true,
            connect_distance: 100.0,
            connect_peak_alpha: 0.2,
            attraction: true,
            attract_radius: 100.0,
            attract_strength: 0.01,
            relax_rate: 0.01,
            glow: true,
            glow_radius: 50.0,
        }
    }
}

impl FieldConfig {
    pub fn from_json(json: &str) -> Result<FieldConfig, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = FieldConfig::from_json(r#"{"particle_count": 40, "glow": false}"#).unwrap();
        assert_eq!(cfg.particle_count, 40);
        assert!(!cfg.glow);
        assert_eq!(cfg.connect_distance, 100.0);
        assert!(cfg.attraction);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(FieldConfig::from_json("{}").unwrap(), FieldConfig::default());
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(FieldConfig::from_json(r#"{"particle_count": "many"}"#).is_err());
    }
}
