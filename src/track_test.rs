#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn new_track_is_empty() {
    let track = TrackState::new();
    assert_eq!(track.trail_len(), 0);
    assert!(!track.origin_set());
    assert_eq!(track.position(), Point::new(0.0, 0.0));
}

// =============================================================
// update_position
// =============================================================

#[test]
fn first_update_sets_origin_and_trail() {
    let mut track = TrackState::new();
    track.update_position(0.0, 0.0);
    assert!(track.origin_set());
    assert_eq!(track.trail(), &[Point::new(0.0, 0.0)]);
}

#[test]
fn first_update_at_nonzero_point_starts_trail_there() {
    let mut track = TrackState::new();
    track.update_position(1.5, -2.5);
    assert_eq!(track.trail(), &[Point::new(1.5, -2.5)]);
    assert_eq!(track.position(), Point::new(1.5, -2.5));
}

#[test]
fn each_later_update_appends_one_point() {
    let mut track = TrackState::new();
    track.update_position(0.0, 0.0);
    for i in 1..=50 {
        let before = track.trail_len();
        track.update_position(f64::from(i), f64::from(-i));
        assert_eq!(track.trail_len(), before + 1);
    }
    assert_eq!(track.trail_len(), 51);
}

#[test]
fn updates_preserve_insertion_order() {
    let mut track = TrackState::new();
    track.update_position(0.0, 0.0);
    track.update_position(3.0, 4.0);
    track.update_position(-1.0, 2.0);
    assert_eq!(
        track.trail(),
        &[Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(-1.0, 2.0)]
    );
    assert_eq!(track.position(), Point::new(-1.0, 2.0));
}

#[test]
fn duplicate_positions_are_still_recorded() {
    let mut track = TrackState::new();
    track.update_position(1.0, 1.0);
    track.update_position(1.0, 1.0);
    assert_eq!(track.trail_len(), 2);
}

#[test]
fn nan_input_is_accepted() {
    let mut track = TrackState::new();
    track.update_position(0.0, 0.0);
    track.update_position(f64::NAN, 1.0);
    assert_eq!(track.trail_len(), 2);
    assert!(track.position().x.is_nan());
}

// =============================================================
// reset_origin
// =============================================================

#[test]
fn scenario_update_update_reset() {
    let mut track = TrackState::new();
    track.update_position(0.0, 0.0);
    assert_eq!(track.trail(), &[Point::new(0.0, 0.0)]);
    assert!(track.origin_set());

    track.update_position(3.0, 4.0);
    assert_eq!(track.trail(), &[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
    assert_eq!(track.position(), Point::new(3.0, 4.0));

    track.reset_origin();
    assert_eq!(track.trail(), &[Point::new(3.0, 4.0)]);
}

#[test]
fn reset_keeps_origin_flag() {
    let mut track = TrackState::new();
    track.update_position(2.0, 2.0);
    track.reset_origin();
    assert!(track.origin_set());
}

#[test]
fn reset_always_leaves_one_point() {
    let mut track = TrackState::new();
    track.update_position(0.0, 0.0);
    for i in 0..10 {
        track.update_position(f64::from(i), 0.0);
    }
    track.reset_origin();
    assert_eq!(track.trail_len(), 1);
    track.reset_origin();
    assert_eq!(track.trail_len(), 1);
}

#[test]
fn update_after_reset_appends_to_fresh_trail() {
    let mut track = TrackState::new();
    track.update_position(0.0, 0.0);
    track.update_position(3.0, 4.0);
    track.reset_origin();
    track.update_position(5.0, 5.0);
    assert_eq!(track.trail(), &[Point::new(3.0, 4.0), Point::new(5.0, 5.0)]);
}

#[test]
fn reset_before_any_update_sets_origin_at_default_position() {
    let mut track = TrackState::new();
    track.reset_origin();
    assert_eq!(track.trail(), &[Point::new(0.0, 0.0)]);
    assert!(track.origin_set());
}

#[test]
fn update_after_early_reset_appends() {
    let mut track = TrackState::new();
    track.reset_origin();
    track.update_position(3.0, 4.0);
    assert_eq!(track.trail(), &[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
    assert_eq!(track.trail_len(), 2);
}

// =============================================================
// Derived values
// =============================================================

#[test]
fn distance_from_origin_is_euclidean() {
    let mut track = TrackState::new();
    track.update_position(3.0, 4.0);
    assert_eq!(track.distance_from_origin(), 5.0);
}

#[test]
fn marker_stride_is_at_least_one() {
    assert_eq!(marker_stride(0), 1);
    assert_eq!(marker_stride(1), 1);
    assert_eq!(marker_stride(19), 1);
}

#[test]
fn marker_stride_targets_twenty_dots() {
    assert_eq!(marker_stride(40), 2);
    assert_eq!(marker_stride(100), 5);
    assert_eq!(marker_stride(1000), 50);
}
