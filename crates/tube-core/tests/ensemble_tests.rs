// Host-side tests for the tube ensemble controller.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tube_core::constants::{THICKNESS_MAX, THICKNESS_MIN};
use tube_core::{
    build_tube_geometry, parse_hex_color, EnsembleConfig, EnsembleError, TubeEnsemble,
};

fn make_ensemble(count: usize) -> TubeEnsemble {
    let geometry = build_tube_geometry(8, 4, false).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    TubeEnsemble::new(count, geometry, EnsembleConfig::default(), &mut rng).unwrap()
}

#[test]
fn construction_rejects_empty_ensemble() {
    let geometry = build_tube_geometry(8, 4, false).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let err = TubeEnsemble::new(0, geometry, EnsembleConfig::default(), &mut rng).unwrap_err();
    assert_eq!(err, EnsembleError::Empty);
}

#[test]
fn single_tube_index_is_zero() {
    let ensemble = make_ensemble(1);
    assert_eq!(ensemble.instances()[0].index, 0.0);
}

#[test]
fn indices_cover_unit_interval() {
    let ensemble = make_ensemble(5);
    let indices: Vec<f32> = ensemble.instances().iter().map(|u| u.index).collect();
    assert_eq!(indices, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn thickness_sampled_in_configured_range() {
    let ensemble = make_ensemble(40);
    for u in ensemble.instances() {
        assert!(
            u.thickness >= THICKNESS_MIN && u.thickness < THICKNESS_MAX,
            "thickness {} outside range",
            u.thickness
        );
    }
}

#[test]
fn update_converts_milliseconds_to_seconds() {
    let mut ensemble = make_ensemble(3);
    ensemble.update(500.0);
    for u in ensemble.instances() {
        assert!((u.time - 0.5).abs() < 1e-6);
    }
}

#[test]
fn update_is_additive_across_uneven_frames() {
    let mut split = make_ensemble(3);
    let mut whole = make_ensemble(3);
    split.update(16.7);
    split.update(33.3);
    whole.update(50.0);
    for (a, b) in split.instances().iter().zip(whole.instances()) {
        assert!((a.time - b.time).abs() < 1e-5, "{} vs {}", a.time, b.time);
    }
}

#[test]
fn update_with_zero_dt_is_harmless() {
    let mut ensemble = make_ensemble(2);
    ensemble.update(0.0);
    assert_eq!(ensemble.instances()[0].time, 0.0);
}

#[test]
fn tube_count_is_fixed_for_the_ensemble_lifetime() {
    // GPU-side instance buffers are sized from len() once at startup, so the
    // count must never change after construction
    let mut ensemble = make_ensemble(7);
    assert_eq!(ensemble.len(), 7);
    ensemble.set_palette(parse_hex_color("#e6ac27").unwrap());
    ensemble.update(250.0);
    ensemble.set_palette(parse_hex_color("#556270").unwrap());
    ensemble.update(5_000.0);
    assert_eq!(ensemble.len(), 7);
    assert_eq!(ensemble.instances().len(), 7);
}

#[test]
fn set_palette_writes_color_immediately() {
    let mut ensemble = make_ensemble(4);
    let red = parse_hex_color("#ff0000").unwrap();
    ensemble.set_palette(red);
    for u in ensemble.instances() {
        assert_eq!(u.color, red);
        assert_eq!(u.animate_radius, 0.0);
        assert_eq!(u.animate_strength, 1.0);
    }
    // one radius + one strength job per instance, nothing else
    assert_eq!(ensemble.transitions_in_flight(), 2 * 4);
    for i in 0..4 {
        assert_eq!(ensemble.pending_for_instance(i), 2);
    }
}

#[test]
fn second_set_palette_cancels_the_first() {
    let mut ensemble = make_ensemble(5);
    let c1 = parse_hex_color("#f7803c").unwrap();
    let c2 = parse_hex_color("#b3204d").unwrap();
    ensemble.set_palette(c1);
    ensemble.update(100.0);
    ensemble.set_palette(c2);
    for u in ensemble.instances() {
        assert_eq!(u.color, c2, "last palette write wins");
    }
    assert_eq!(ensemble.transitions_in_flight(), 2 * 5);
    for i in 0..5 {
        assert_eq!(ensemble.pending_for_instance(i), 2);
    }
}

#[test]
fn transitions_complete_exactly() {
    let mut ensemble = make_ensemble(5);
    let red = parse_hex_color("#ff0000").unwrap();
    ensemble.set_palette(red);
    // advance well past every delay + duration
    ensemble.update(10_000.0);
    for u in ensemble.instances() {
        assert_eq!(u.animate_radius, 1.0);
        assert_eq!(u.animate_strength, 0.0);
        assert_eq!(u.color, red);
    }
    assert_eq!(ensemble.transitions_in_flight(), 0);
}

#[test]
fn stagger_sweeps_across_the_ensemble() {
    let mut ensemble = make_ensemble(5);
    ensemble.set_palette(parse_hex_color("#cbe86b").unwrap());
    // partway in, earlier instances must be further along the sweep
    ensemble.update(50.0);
    let radii: Vec<f32> = ensemble.instances().iter().map(|u| u.animate_radius).collect();
    for pair in radii.windows(2) {
        assert!(
            pair[0] >= pair[1],
            "expected nonincreasing radii, got {radii:?}"
        );
    }
    assert!(radii[0] > radii[4], "sweep should be visibly staggered");
}

#[test]
fn completed_sweep_leaves_instances_idle() {
    let mut ensemble = make_ensemble(3);
    ensemble.set_palette(parse_hex_color("#2b4e72").unwrap());
    ensemble.update(5_000.0);
    assert_eq!(ensemble.transitions_in_flight(), 0);
    // further updates only advance time
    let radius_before = ensemble.instances()[0].animate_radius;
    ensemble.update(16.0);
    assert_eq!(ensemble.instances()[0].animate_radius, radius_before);
}
