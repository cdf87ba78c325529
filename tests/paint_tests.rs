// Host-side tests for per-frame dot styling and the pointer tracker.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod grid {
        include!("../src/core/grid.rs");
    }
    pub mod paint {
        include!("../src/core/paint.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
}

use crate::core::config::BackgroundConfig;
use crate::core::constants::*;
use crate::core::grid::{Dot, DotGrid};
use crate::core::paint::*;
use crate::core::pointer::PointerTracker;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, PartialEq)]
enum Call {
    Clear(f32, f32),
    Circle { center: Vec2, radius: f32, alpha: f32 },
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Painter for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.calls.push(Call::Clear(width, height));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, _rgb: [u8; 3], alpha: f32) {
        self.calls.push(Call::Circle {
            center,
            radius,
            alpha,
        });
    }
}

fn dot_at(position: Vec2, rest_opacity: f32) -> Dot {
    Dot {
        position,
        rest_opacity,
        opacity_speed: 0.004,
        base_radius: BASE_RADIUS,
        current_opacity: rest_opacity,
        current_radius: BASE_RADIUS,
    }
}

#[test]
fn factor_is_one_at_pointer_and_zero_at_radius() {
    assert_eq!(interaction_factor(0.0, INTERACTION_RADIUS), 1.0);
    assert_eq!(interaction_factor(INTERACTION_RADIUS, INTERACTION_RADIUS), 0.0);
    assert_eq!(interaction_factor(INTERACTION_RADIUS * 3.0, INTERACTION_RADIUS), 0.0);
    assert!((interaction_factor(50.0, 100.0) - 0.25).abs() < 1e-6);
}

#[test]
fn factor_decreases_with_distance() {
    let mut prev = interaction_factor(0.0, INTERACTION_RADIUS);
    for d in 1..=100 {
        let f = interaction_factor(d as f32, INTERACTION_RADIUS);
        assert!(f <= prev, "factor rose at distance {d}");
        prev = f;
    }
}

#[test]
fn pointer_on_dot_gives_full_boost() {
    let mut dot = dot_at(Vec2::new(15.0, 15.0), 0.2);
    apply_pointer(&mut dot, Some(Vec2::new(15.0, 15.0)), INTERACTION_RADIUS);
    assert!((dot.current_opacity - 0.9).abs() < 1e-6);
    assert_eq!(dot.current_radius, BASE_RADIUS + 2.0);
}

#[test]
fn full_boost_opacity_is_capped_at_one() {
    let mut dot = dot_at(Vec2::ZERO, 0.5);
    apply_pointer(&mut dot, Some(Vec2::ZERO), INTERACTION_RADIUS);
    assert_eq!(dot.current_opacity, 1.0);
}

#[test]
fn far_or_absent_pointer_leaves_dot_at_rest() {
    let mut dot = dot_at(Vec2::new(15.0, 15.0), 0.25);
    apply_pointer(&mut dot, Some(Vec2::new(115.0, 15.0)), INTERACTION_RADIUS);
    assert_eq!(dot.current_opacity, 0.25);
    assert_eq!(dot.current_radius, BASE_RADIUS);

    apply_pointer(&mut dot, Some(Vec2::new(15.0, 15.0)), INTERACTION_RADIUS);
    apply_pointer(&mut dot, None, INTERACTION_RADIUS);
    assert_eq!(dot.current_opacity, 0.25);
    assert_eq!(dot.current_radius, BASE_RADIUS);
}

#[test]
fn frame_clears_then_draws_every_dot() {
    let config = BackgroundConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut grid = DotGrid::generate(300.0, 300.0, &config, &mut rng);
    let mut painter = Recorder::default();

    paint_frame(&mut grid, None, &config, Vec2::new(300.0, 300.0), &mut painter);

    assert_eq!(painter.calls.len(), 1 + 100);
    assert_eq!(painter.calls[0], Call::Clear(300.0, 300.0));
    for (call, dot) in painter.calls[1..].iter().zip(&grid.dots) {
        match call {
            Call::Circle {
                center,
                radius,
                alpha,
            } => {
                assert_eq!(*center, dot.position);
                assert_eq!(*radius, BASE_RADIUS);
                assert_eq!(*alpha, dot.rest_opacity);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }
}

#[test]
fn frame_boosts_only_dots_near_pointer() {
    let config = BackgroundConfig::default();
    let mut rng = StdRng::seed_from_u64(6);
    let mut grid = DotGrid::generate(600.0, 600.0, &config, &mut rng);
    let pointer = Vec2::new(15.0, 15.0);
    let mut painter = Recorder::default();

    paint_frame(&mut grid, Some(pointer), &config, Vec2::new(600.0, 600.0), &mut painter);

    for dot in &grid.dots {
        let d = dot.position.distance(pointer);
        if d >= INTERACTION_RADIUS {
            assert_eq!(dot.current_radius, BASE_RADIUS);
            assert_eq!(dot.current_opacity, dot.rest_opacity);
        } else {
            assert!(dot.current_radius > BASE_RADIUS);
            assert!(dot.current_opacity > dot.rest_opacity);
        }
    }
    assert_eq!(grid.dots[0].current_radius, BASE_RADIUS + 2.0);
}

#[test]
fn repainting_after_pointer_leaves_restores_rest_state() {
    let config = BackgroundConfig::default();
    let mut rng = StdRng::seed_from_u64(8);
    let mut grid = DotGrid::generate(120.0, 120.0, &config, &mut rng);
    let surface = Vec2::new(120.0, 120.0);

    let mut tracker = PointerTracker::default();
    tracker.on_move(Vec2::new(60.0, 60.0), Vec2::ZERO);
    paint_frame(&mut grid, tracker.snapshot(), &config, surface, &mut Recorder::default());
    assert!(grid.dots.iter().any(|d| d.current_radius > BASE_RADIUS));

    tracker.on_leave();
    paint_frame(&mut grid, tracker.snapshot(), &config, surface, &mut Recorder::default());
    for dot in &grid.dots {
        assert_eq!(dot.current_radius, BASE_RADIUS);
        assert_eq!(dot.current_opacity, dot.rest_opacity);
    }
}

#[test]
fn tracker_translates_into_surface_coordinates() {
    let mut tracker = PointerTracker::default();
    assert_eq!(tracker.snapshot(), None);

    tracker.on_move(Vec2::new(120.0, 80.0), Vec2::new(20.0, 30.0));
    assert_eq!(tracker.snapshot(), Some(Vec2::new(100.0, 50.0)));

    tracker.on_move(Vec2::new(10.0, 10.0), Vec2::new(20.0, 30.0));
    assert_eq!(tracker.snapshot(), Some(Vec2::new(-10.0, -20.0)));

    tracker.on_leave();
    assert_eq!(tracker.snapshot(), None);
}
