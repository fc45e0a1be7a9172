use bevy::prelude::*;
use pulsar_core::ViewConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::plugin::ViewSettings;

/// Marker for background star entities
#[derive(Component)]
pub struct BackgroundStar;

/// A background star: position on the shell, size, palette index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSample {
    pub position: Vec3,
    pub size: f32,
    pub color_idx: usize,
}

const STAR_COLORS: [(f32, f32, f32); 5] = [
    (1.0, 1.0, 1.0),  // white
    (0.8, 0.9, 1.0),  // blue-white
    (1.0, 0.95, 0.8), // yellow-white
    (1.0, 0.7, 0.5),  // orange
    (0.6, 0.7, 1.0),  // blue
];

/// Deterministic star placement, uniform over the full sphere
pub fn sample_stars(config: &ViewConfig) -> Vec<StarSample> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.star_seed);
    let r = config.star_shell_radius;

    (0..config.star_count)
        .map(|_| {
            // Uniform z and azimuth give a uniform distribution on the sphere
            let z: f32 = rng.gen_range(-1.0..1.0);
            let theta = rng.gen_range(0.0..std::f32::consts::TAU);
            let ring = (1.0 - z * z).sqrt();
            StarSample {
                position: Vec3::new(ring * theta.cos(), z, ring * theta.sin()) * r,
                size: rng.gen_range(0.3..1.5),
                color_idx: rng.gen_range(0..STAR_COLORS.len()),
            }
        })
        .collect()
}

/// Spawn the starfield backdrop
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<ViewSettings>,
) {
    let star_mesh = meshes.add(Sphere::new(1.0).mesh().uv(8, 6));

    // Shared materials, one per palette entry
    let star_mats: Vec<Handle<StandardMaterial>> = STAR_COLORS
        .iter()
        .map(|&(r, g, b)| {
            let c = Color::srgb(r, g, b);
            materials.add(StandardMaterial {
                base_color: c,
                emissive: LinearRgba::from(c) * 50.0,
                unlit: true,
                ..default()
            })
        })
        .collect();

    let stars = sample_stars(&settings.0);
    for star in &stars {
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_mats[star.color_idx].clone()),
            Transform::from_translation(star.position).with_scale(Vec3::splat(star.size)),
            BackgroundStar,
        ));
    }

    info!("Spawned {} background stars", stars.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_deterministic() {
        let config = ViewConfig::default();
        assert_eq!(sample_stars(&config), sample_stars(&config));

        let other = ViewConfig {
            star_seed: 7,
            ..ViewConfig::default()
        };
        assert_ne!(sample_stars(&config), sample_stars(&other));
    }

    #[test]
    fn test_stars_on_shell() {
        let config = ViewConfig::default();
        let stars = sample_stars(&config);
        assert_eq!(stars.len(), config.star_count as usize);
        for s in &stars {
            let d = s.position.length();
            assert!((d - config.star_shell_radius).abs() < 0.01, "d = {d}");
            assert!(s.color_idx < STAR_COLORS.len());
        }
    }
}
