use std::f32::consts::TAU;
use glam::Vec2;
use serde::Deserialize;
use crate::api::types::EntityId;
use crate::components::circle::Circle;
use crate::components::color::Color;
use crate::systems::rng::Rng;

/// Ranges used when the user spawns a random circle.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Smallest radius (inclusive).
    pub min_radius: f32,
    /// Largest radius (exclusive).
    pub max_radius: f32,
    /// HSL saturation for the random hue (0.0 - 1.0).
    pub saturation: f32,
    /// HSL lightness for the random hue (0.0 - 1.0).
    pub lightness: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min_radius: 10.0,
            max_radius: 30.0,
            saturation: 1.0,
            lightness: 0.5,
        }
    }
}

/// Build a circle with random position inside `world`, random radius,
/// random hue and random starting moon phase.
pub fn random_circle(rng: &mut Rng, id: EntityId, world: Vec2, config: &SpawnConfig) -> Circle {
    let pos = Vec2::new(rng.range(0.0, world.x), rng.range(0.0, world.y));
    let radius = rng.range(config.min_radius, config.max_radius);
    let hue = rng.range(0.0, 360.0);
    let color = Color::from_hsl(hue, config.saturation, config.lightness);
    let angle = rng.range(0.0, TAU);
    Circle::new(id, pos, radius, color).with_angle(angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_circles_respect_ranges() {
        let mut rng = Rng::new(1234);
        let world = Vec2::new(800.0, 600.0);
        let config = SpawnConfig::default();
        for i in 0..500 {
            let c = random_circle(&mut rng, EntityId(i), world, &config);
            assert!(c.pos.x >= 0.0 && c.pos.x < 800.0);
            assert!(c.pos.y >= 0.0 && c.pos.y < 600.0);
            assert!(c.radius >= 10.0 && c.radius < 30.0);
            assert!(c.angle >= 0.0 && c.angle < TAU);
            assert_eq!(c.orbit_radius(), c.radius + 10.0);
            assert_eq!(c.color.a, 1.0);
        }
    }

    #[test]
    fn narrow_radius_range_stays_below_max() {
        let mut rng = Rng::new(8);
        let config = SpawnConfig {
            min_radius: 100.0,
            max_radius: 101.0,
            ..SpawnConfig::default()
        };
        for i in 0..100_000 {
            let c = random_circle(&mut rng, EntityId(i), Vec2::new(800.0, 600.0), &config);
            assert!(c.radius >= 100.0 && c.radius < 101.0, "radius {}", c.radius);
        }
    }

    #[test]
    fn same_seed_same_circle() {
        let world = Vec2::new(640.0, 480.0);
        let a = random_circle(&mut Rng::new(9), EntityId(1), world, &SpawnConfig::default());
        let b = random_circle(&mut Rng::new(9), EntityId(1), world, &SpawnConfig::default());
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.radius, b.radius);
        assert_eq!(a.color, b.color);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: SpawnConfig = serde_json::from_str(r#"{ "max_radius": 50.0 }"#).unwrap();
        assert_eq!(config.max_radius, 50.0);
        assert_eq!(config.min_radius, 10.0);
        assert_eq!(config.lightness, 0.5);
    }
}
