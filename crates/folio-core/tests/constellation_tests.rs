// Skill constellation: cluster flattening, the reversing sway, and the
// per-star pulse.

use folio_core::config::ContentManifest;
use folio_core::constellation::{Constellation, ConstellationParams};

fn default_constellation() -> Constellation {
    let manifest = ContentManifest::default();
    Constellation::new(&manifest.constellation, ConstellationParams::default(), 9)
}

#[test]
fn clusters_flatten_with_global_edge_indices() {
    let constellation = default_constellation();
    // 1 center + 7 hat + 4 book + 3 cluster
    assert_eq!(constellation.stars().len(), 15);
    assert_eq!(constellation.edges().len(), 10);
    for &(a, b) in constellation.edges() {
        assert!(a < constellation.stars().len());
        assert!(b < constellation.stars().len());
        assert_ne!(a, b, "no self edges");
    }
    // cluster offsets are baked into star positions
    let hat_star = &constellation.stars()[1];
    assert!((hat_star.position.x - (-1.8 + -0.3)).abs() < 1e-4);
}

#[test]
fn sway_oscillates_within_its_amplitude() {
    let mut constellation = default_constellation();
    let params = ConstellationParams::default();
    let bound = params.max_sway + params.sway_step;
    let mut reversed = false;
    let mut last = 0.0f32;
    for _ in 0..30_000 {
        let sway = constellation.tick();
        assert!(sway.abs() <= bound, "sway {sway} escaped its bound");
        if sway < last {
            reversed = true;
        }
        last = sway;
    }
    assert!(reversed, "sway never turned around");
}

#[test]
fn star_pulse_stays_near_its_base_scale() {
    let constellation = default_constellation();
    let params = ConstellationParams::default();
    for (i, star) in constellation.stars().iter().enumerate() {
        for step in 0..40 {
            let s = constellation.star_scale(i, step as f32 * 0.17);
            assert!((s - star.base_scale).abs() <= params.pulse_amplitude + 1e-4);
        }
    }
}

#[test]
fn pulse_phases_come_from_the_seed() {
    let manifest = ContentManifest::default();
    let a = Constellation::new(&manifest.constellation, ConstellationParams::default(), 9);
    let b = Constellation::new(&manifest.constellation, ConstellationParams::default(), 9);
    for i in 0..a.stars().len() {
        assert_eq!(a.star_scale(i, 1.0), b.star_scale(i, 1.0));
    }
}
