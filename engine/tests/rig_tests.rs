//! Rig Tests - Full Tick Behavior
//!
//! Drives a CameraRig through a VirtualPointer and checks the observable
//! camera state after each tick.

use first_person_rig_engine::physics::Collider;
use first_person_rig_engine::{
    CameraRig, Key, KeyCode, RigConfig, SpherePusher, VerticalEvent, VirtualPointer,
};
use glam::Vec3;

const EPSILON: f32 = 1e-4;

fn rig_at(position: Vec3) -> CameraRig {
    let config = RigConfig {
        start_position: position,
        ..RigConfig::default()
    };
    CameraRig::new(&config)
}

fn pointer() -> VirtualPointer {
    VirtualPointer::new(1280, 720)
}

// ============================================================================
// Vertical Motion
// ============================================================================

#[test]
fn test_fall_from_five_lands_on_tick_twenty() {
    let mut rig = rig_at(Vec3::new(0.0, 0.0, 5.0));
    let mut pointer = pointer();

    for n in 1..=19u32 {
        let report = rig.tick(&mut pointer);
        assert_eq!(report.vertical, VerticalEvent::Airborne, "tick {n}");

        // Speed accumulates, so z = 5 - 0.01 * n * (n + 1)
        let expected = 5.0 - 0.01 * (n * (n + 1)) as f32;
        assert!(
            (rig.transform().z() - expected).abs() < EPSILON,
            "tick {n}: z = {}, expected {expected}",
            rig.transform().z()
        );
        assert!(!rig.vertical_state().grounded);
    }

    let report = rig.tick(&mut pointer);
    assert_eq!(report.vertical, VerticalEvent::Landed);
    assert_eq!(rig.transform().z(), 1.0);
    assert_eq!(rig.vertical_state().vertical_speed, 0.0);
    assert!(rig.vertical_state().grounded);
}

#[test]
fn test_stays_grounded_at_rest() {
    let mut rig = rig_at(Vec3::new(0.0, 0.0, 1.0));
    let mut pointer = pointer();

    for _ in 0..50 {
        rig.tick(&mut pointer);
        assert_eq!(rig.transform().z(), 1.0);
        assert!(rig.vertical_state().grounded);
    }
}

#[test]
fn test_held_jump_relaunches_on_landing_tick() {
    let mut rig = rig_at(Vec3::new(0.0, 0.0, 1.0));
    let mut pointer = pointer();
    rig.set_key(Key::Jump, true);

    let report = rig.tick(&mut pointer);
    assert_eq!(report.vertical, VerticalEvent::Jumped);
    assert_eq!(rig.transform().z(), 1.0);
    assert_eq!(rig.vertical_state().vertical_speed, 0.5);
    assert!(!rig.vertical_state().grounded);

    rig.tick(&mut pointer);
    assert!((rig.vertical_state().vertical_speed - 0.48).abs() < EPSILON);
    assert!((rig.transform().z() - 1.48).abs() < EPSILON);
}

#[test]
fn test_held_jump_never_ends_tick_grounded() {
    let mut rig = rig_at(Vec3::new(0.0, 0.0, 1.0));
    let mut pointer = pointer();
    rig.set_key(Key::Jump, true);

    let mut jumps = 0;
    for _ in 0..200 {
        if rig.tick(&mut pointer).vertical == VerticalEvent::Jumped {
            jumps += 1;
        }
        assert!(!rig.vertical_state().grounded);
        assert!(rig.transform().z() >= 1.0);
    }
    assert!(jumps >= 3, "only {jumps} jumps in 200 ticks");
}

#[test]
fn test_jump_while_airborne_changes_nothing() {
    let mut rig = rig_at(Vec3::new(0.0, 0.0, 5.0));
    let mut pointer = pointer();
    rig.tick(&mut pointer);

    let before = rig.vertical_state();
    assert!(!rig.jump());
    assert_eq!(rig.vertical_state(), before);
}

// ============================================================================
// Planar Motion
// ============================================================================

#[test]
fn test_forward_moves_along_heading_zero() {
    let mut rig = rig_at(Vec3::new(0.0, 0.0, 1.0));
    let mut pointer = pointer();
    rig.set_key(Key::Forward, true);

    rig.tick(&mut pointer);
    let position = rig.transform().position();
    assert!((position - Vec3::new(0.0, 0.3, 1.0)).length() < EPSILON);
}

#[test]
fn test_diagonal_and_sprint_magnitudes() {
    for (sprint, expected) in [(false, 0.3 * 2f32.sqrt()), (true, 0.6 * 2f32.sqrt())] {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 1.0));
        let mut pointer = pointer();
        rig.set_key(Key::Forward, true);
        rig.set_key(Key::Right, true);
        rig.set_key(Key::Sprint, sprint);

        let report = rig.tick(&mut pointer);
        assert!((report.planar_displacement.length() - expected).abs() < EPSILON);

        let moved = rig.transform().position() - Vec3::new(0.0, 0.0, 1.0);
        assert!((moved.length() - expected).abs() < EPSILON);
    }
}

#[test]
fn test_opposite_keys_cancel() {
    let mut rig = rig_at(Vec3::new(0.0, 0.0, 1.0));
    let mut pointer = pointer();
    rig.set_key(Key::Forward, true);
    rig.set_key(Key::Backward, true);
    rig.set_key(Key::Left, true);
    rig.set_key(Key::Right, true);

    let report = rig.tick(&mut pointer);
    assert_eq!(report.planar_displacement, Vec3::ZERO);
    assert_eq!(rig.transform().position(), Vec3::new(0.0, 0.0, 1.0));
}

// ============================================================================
// Mouse Look and Tick Order
// ============================================================================

#[test]
fn test_turn_is_applied_before_move_in_same_tick() {
    let mut rig = rig_at(Vec3::new(0.0, 0.0, 1.0));
    let mut pointer = pointer();
    rig.set_key(Key::Forward, true);

    // 450 px right * 0.2 deg/px = 90 degrees to the right
    pointer.move_by(450.0, 0.0);
    rig.tick(&mut pointer);

    assert!((rig.orientation().heading - (-90.0)).abs() < EPSILON);
    let position = rig.transform().position();
    assert!((position - Vec3::new(0.3, 0.0, 1.0)).length() < EPSILON);
    assert_eq!(pointer.position(), (640.0, 360.0));
}

#[test]
fn test_pitch_clamped_through_rig() {
    let mut rig = rig_at(Vec3::new(0.0, 0.0, 1.0));
    let mut pointer = pointer();

    pointer.move_by(0.0, -10_000.0);
    rig.tick(&mut pointer);
    assert_eq!(rig.orientation().pitch, 60.0);
    assert_eq!(rig.transform().orientation().1, 60.0);
    assert_eq!(rig.transform().orientation().2, 0.0);
}

#[test]
fn test_unfocused_pointer_leaves_orientation_alone() {
    let mut rig = rig_at(Vec3::new(0.0, 0.0, 1.0));
    let mut pointer = pointer();
    pointer.set_focused(false);

    pointer.move_by(200.0, 200.0);
    rig.tick(&mut pointer);

    assert_eq!(rig.orientation().heading, 0.0);
    assert_eq!(rig.orientation().pitch, 0.0);
    assert_eq!(pointer.warp_count(), 0);
}

// ============================================================================
// Collision
// ============================================================================

#[test]
fn test_walking_into_box_is_stopped() {
    let mut rig = rig_at(Vec3::new(0.0, 0.0, 1.0));
    let mut pusher = SpherePusher::with_ground_plane(1.0, 0.0);
    pusher.add_collider(Collider::Aabb {
        min: Vec3::new(-5.0, 2.0, 0.0),
        max: Vec3::new(5.0, 4.0, 3.0),
    });
    rig.set_pusher(Some(Box::new(pusher)));

    let mut pointer = pointer();
    rig.set_key(Key::Forward, true);

    let mut pushed = false;
    for _ in 0..30 {
        pushed |= rig.tick(&mut pointer).pushed;
        assert!(rig.transform().position().y <= 1.0 + EPSILON);
    }
    assert!(pushed);
    assert!((rig.transform().position().y - 1.0).abs() < EPSILON);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_remaps_and_retunes() {
    let config = RigConfig::from_json_str(
        r#"{
            "base_speed": 0.5,
            "start_position": [0.0, 0.0, 1.0],
            "bindings": { "forward": "ArrowUp" }
        }"#,
    )
    .expect("valid config");
    let mut rig = CameraRig::new(&config);
    let mut pointer = pointer();

    assert!(rig.handle_key_code(KeyCode::ArrowUp, true));
    rig.tick(&mut pointer);

    let position = rig.transform().position();
    assert!((position - Vec3::new(0.0, 0.5, 1.0)).length() < EPSILON);
}
