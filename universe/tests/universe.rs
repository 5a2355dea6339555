use approx::{assert_abs_diff_eq, assert_relative_eq};
use universe::{Body, RecordingSurface, Universe, UniverseConfig, UniverseError, Vector3};

fn body(mass: f64, position: Vector3, velocity: Vector3) -> Body {
    Body::new(mass, "whitesmoke", position, velocity).unwrap()
}

/// Ten bodies spread over a 600x600 area with assorted masses and velocities
fn ten_body_universe() -> Universe {
    let mut universe = Universe::new();
    for i in 0..10 {
        let k = i as f64;
        let position = Vector3::new(60.0 * k, 300.0 + 25.0 * (k * 1.3).sin(), 0.0);
        let velocity = Vector3::new(0.5 * (k * 0.7).cos(), 1.0 - 0.2 * k, 0.0);
        let mass = 1.0e4 + 9.0e3 * k;
        universe
            .add_body(format!("body-{i}"), body(mass, position, velocity))
            .unwrap();
    }
    universe
}

// ==================================================================================
// Registry
// ==================================================================================

#[test]
fn get_position_after_add_returns_initial_position() {
    let mut universe = Universe::new();
    let b = body(5.0e4, Vector3::new(12.0, -3.0, 7.5), Vector3::ZERO);
    let expected = b.position();

    universe.add_body("x", b).unwrap();
    assert_eq!(universe.get_position("x").unwrap(), expected);
}

#[test]
fn add_body_replaces_existing_id() {
    let mut universe = Universe::new();
    universe
        .add_body("x", body(1.0, Vector3::new(1.0, 1.0, 1.0), Vector3::ZERO))
        .unwrap();
    universe
        .add_body("x", body(2.0, Vector3::new(2.0, 2.0, 2.0), Vector3::ZERO))
        .unwrap();

    assert_eq!(universe.get_position("x").unwrap(), Vector3::new(2.0, 2.0, 2.0));
    assert_eq!(universe.len(), 1);
}

#[test]
fn unknown_id_is_not_found() {
    let universe = Universe::new();
    assert_eq!(
        universe.get_position("missing"),
        Err(UniverseError::NotFound("missing".to_string()))
    );
    assert!(universe.get_velocity("missing").is_err());
}

#[test]
fn empty_id_is_refused_without_mutation() {
    let mut universe = Universe::new();
    universe
        .add_body("a", body(1.0, Vector3::ZERO, Vector3::ZERO))
        .unwrap();

    let result = universe.add_body("", body(1.0, Vector3::X, Vector3::ZERO));
    assert!(matches!(result, Err(UniverseError::InvalidArgument(_))));
    assert_eq!(universe.len(), 1);
    assert!(universe.contains("a"));
}

// ==================================================================================
// Integration
// ==================================================================================

#[test]
fn empty_universe_tick_and_render_do_nothing() {
    let mut universe = Universe::new();
    let mut surface = RecordingSurface::new(600.0);

    universe.tick();
    universe.render(&mut surface);

    assert!(universe.is_empty());
    assert!(surface.commands().is_empty());
}

#[test]
fn isolated_body_moves_in_a_straight_line() {
    let mut universe = Universe::new();
    universe
        .add_body(
            "solo",
            body(1.0e5, Vector3::new(100.0, 200.0, 0.0), Vector3::new(1.0, 0.0, 0.0)),
        )
        .unwrap();

    universe.tick();

    assert_eq!(universe.get_position("solo").unwrap(), Vector3::new(101.0, 200.0, 0.0));
    assert_eq!(universe.get_velocity("solo").unwrap(), Vector3::new(1.0, 0.0, 0.0));
}

#[test]
fn isolated_body_respects_configured_timestep() {
    let config = UniverseConfig::new().with_timestep(0.25);
    let mut universe = Universe::with_config(config).unwrap();
    let p = Vector3::new(-4.0, 8.0, 2.0);
    let v = Vector3::new(2.0, -4.0, 1.0);
    universe.add_body("solo", body(3.0, p, v)).unwrap();

    universe.tick();

    assert_eq!(universe.get_position("solo").unwrap(), p + v * 0.25);
    assert_eq!(universe.get_velocity("solo").unwrap(), v);
}

#[test]
fn equal_masses_fall_toward_common_midpoint() {
    let mut universe = Universe::new();
    universe
        .add_body("left", body(1.0e5, Vector3::new(-10.0, 0.0, 0.0), Vector3::ZERO))
        .unwrap();
    universe
        .add_body("right", body(1.0e5, Vector3::new(10.0, 0.0, 0.0), Vector3::ZERO))
        .unwrap();

    universe.tick();

    let left = universe.get_position("left").unwrap();
    let right = universe.get_position("right").unwrap();
    assert!(left.x > -10.0);
    assert!(right.x < 10.0);
    assert_relative_eq!(left.x + 10.0, 10.0 - right.x, epsilon = 1e-12);

    let midpoint = (left + right) * 0.5;
    assert_abs_diff_eq!(midpoint.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(midpoint.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(midpoint.z, 0.0, epsilon = 1e-12);
}

#[test]
fn mirrored_pair_stays_mirrored() {
    let mut universe = Universe::new();
    let p = Vector3::new(30.0, 40.0, 5.0);
    let v = Vector3::new(1.0, -2.0, 0.5);
    universe.add_body("a", body(4.0e4, p, v)).unwrap();
    universe.add_body("b", body(4.0e4, -p, -v)).unwrap();

    for _ in 0..200 {
        universe.tick();
        let a = universe.get_position("a").unwrap();
        let b = universe.get_position("b").unwrap();
        assert_abs_diff_eq!(a.x, -b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, -b.y, epsilon = 1e-9);
        assert_abs_diff_eq!(a.z, -b.z, epsilon = 1e-9);
    }
}

#[test]
fn single_tick_conserves_momentum() {
    let mut universe = ten_body_universe();
    let before = universe.total_momentum();

    universe.tick();

    let after = universe.total_momentum();
    assert_abs_diff_eq!(after.x, before.x, epsilon = 1e-6);
    assert_abs_diff_eq!(after.y, before.y, epsilon = 1e-6);
    assert_abs_diff_eq!(after.z, before.z, epsilon = 1e-6);
}

#[test]
fn coincident_bodies_stay_finite() {
    let mut universe = Universe::new();
    let p = Vector3::new(50.0, 50.0, 0.0);
    universe.add_body("a", body(1.0e5, p, Vector3::ZERO)).unwrap();
    universe.add_body("b", body(1.0e5, p, Vector3::ZERO)).unwrap();

    for _ in 0..1000 {
        universe.tick();
    }

    for (_, b) in universe.bodies() {
        assert!(b.is_finite());
    }
}

#[test]
fn close_encounter_is_softened() {
    let mut universe = Universe::new();
    universe
        .add_body("a", body(1.0e5, Vector3::new(0.0, 0.0, 0.0), Vector3::ZERO))
        .unwrap();
    universe
        .add_body("b", body(1.0e5, Vector3::new(1.0e-9, 0.0, 0.0), Vector3::ZERO))
        .unwrap();

    for _ in 0..100 {
        universe.tick();
    }

    assert!(universe.bodies().all(|(_, b)| b.is_finite()));
}

#[test]
fn ten_body_run_is_finite_and_reproducible() {
    let mut first = ten_body_universe();
    let mut second = ten_body_universe();

    for _ in 0..60 {
        first.tick();
        second.tick();
    }

    for ((id_a, a), (id_b, b)) in first.bodies().zip(second.bodies()) {
        assert_eq!(id_a, id_b);
        assert!(a.is_finite());
        assert_eq!(a.position().to_array(), b.position().to_array());
        assert_eq!(a.velocity().to_array(), b.velocity().to_array());
    }
    assert_eq!(first.ticks(), 60);
}

// ==================================================================================
// Rendering
// ==================================================================================

#[test]
fn render_projects_with_flipped_y() {
    let mut universe = Universe::new();
    universe
        .add_body("b", body(2.0e4, Vector3::new(120.0, 45.0, -9.0), Vector3::ZERO))
        .unwrap();
    let mut surface = RecordingSurface::new(480.0);

    universe.render(&mut surface);

    let circles = surface.circles();
    assert_eq!(circles.len(), 1);
    assert_eq!(circles[0].cx, 120.0);
    assert_eq!(circles[0].cy, 480.0 - 45.0);
}

#[test]
fn render_draws_scaled_circle_with_body_color() {
    let mut universe = Universe::new();
    let b = Body::new(
        1.0e5,
        "#ff8800",
        Vector3::new(50.0, 100.0, 0.0),
        Vector3::ZERO,
    )
    .unwrap();
    universe.add_body("star", b).unwrap();
    let mut surface = RecordingSurface::new(600.0);

    universe.render(&mut surface);

    assert_eq!(surface.arc_count(), 1);
    let circles = surface.circles();
    assert_eq!(circles.len(), 1);
    assert_eq!(circles[0].cx, 50.0);
    assert_eq!(circles[0].cy, 500.0);
    assert_eq!(circles[0].radius, 10.0);
    assert_eq!(circles[0].color, "#ff8800");
}

#[test]
fn render_does_not_clear_previous_frames() {
    let mut universe = Universe::new();
    universe
        .add_body("a", body(1.0, Vector3::new(1.0, 1.0, 0.0), Vector3::X))
        .unwrap();
    let mut surface = RecordingSurface::new(10.0);

    universe.render(&mut surface);
    universe.tick();
    universe.render(&mut surface);

    let circles = surface.circles();
    assert_eq!(circles.len(), 2);
    assert_eq!(circles[0].cx, 1.0);
    assert_eq!(circles[1].cx, 2.0);
    assert_eq!(circles[1].radius, 1.0);
}
