//! Unit tests for swarm-core primitives.

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        let mut c = a;
        c += b;
        assert_eq!(c, Vec2::new(4.0, 1.0));
    }

    #[test]
    fn length_and_distance() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vec2::new(1.0, 1.0).distance(Vec2::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        let v = Vec2::new(12.3, -45.6).normalized();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalized_zero_is_zero() {
        // Must be a defined value, not a fault: reachable for any robot
        // with no heading.
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn angle_deg_axes() {
        assert!((Vec2::new(1.0, 0.0).angle_deg() - 0.0).abs() < 1e-5);
        assert!((Vec2::new(0.0, 1.0).angle_deg() - 90.0).abs() < 1e-5);
        assert!((Vec2::new(-1.0, 0.0).angle_deg() - 180.0).abs() < 1e-5);
        assert!((Vec2::new(0.0, -1.0).angle_deg() + 90.0).abs() < 1e-5);
        assert_eq!(Vec2::ZERO.angle_deg(), 0.0);
    }

    #[test]
    fn rotation_quarter_turn() {
        let v = Vec2::new(1.0, 0.0).rotated_deg(90.0);
        assert!((v.x - 0.0).abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_round_trip() {
        let v = Vec2::new(3.7, -2.1);
        let back = v.rotated_deg(123.4).rotated_deg(-123.4);
        assert!((back.x - v.x).abs() < 1e-4);
        assert!((back.y - v.y).abs() < 1e-4);
    }

    #[test]
    fn mean_is_elementwise_average() {
        let m = Vec2::mean(Vec2::new(2.0, 4.0), Vec2::new(4.0, 0.0));
        assert_eq!(m, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn fold_mean_biases_toward_later_elements() {
        // reduce(mean, [a, b, c]) = ((a+b)/2 + c)/2 — c carries half the
        // weight.  The steering rule depends on exactly this shape.
        let a = Vec2::new(4.0, 0.0);
        let b = Vec2::new(0.0, 4.0);
        let c = Vec2::new(0.0, 0.0);
        let folded = [b, c].iter().fold(a, |acc, &v| Vec2::mean(acc, v));
        assert_eq!(folded, Vec2::new(1.0, 1.0));
        let true_avg = Vec2::new(4.0 / 3.0, 4.0 / 3.0);
        assert_ne!(folded, true_avg);
    }
}

#[cfg(test)]
mod ids {
    use crate::RobotId;

    #[test]
    fn index_roundtrip() {
        let id = RobotId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RobotId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(RobotId::INVALID.0, u32::MAX);
        assert_eq!(RobotId::default(), RobotId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(RobotId(7).to_string(), "RobotId(7)");
    }
}

#[cfg(test)]
mod color {
    use crate::{Rgb, RobotId};

    #[test]
    fn deterministic_per_id() {
        assert_eq!(Rgb::from_id(RobotId(3)), Rgb::from_id(RobotId(3)));
    }

    #[test]
    fn adjacent_ids_differ() {
        assert_ne!(Rgb::from_id(RobotId(0)), Rgb::from_id(RobotId(1)));
    }

    #[test]
    fn channels_within_visible_band() {
        for i in 0..64 {
            let c = Rgb::from_id(RobotId(i));
            for ch in [c.r, c.g, c.b] {
                assert!((32..=224).contains(&ch), "channel {ch} out of band");
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(Rgb::new(255, 0, 16).to_string(), "#ff0010");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..800.0);
            assert!((0.0..800.0).contains(&v));
        }
    }

    #[test]
    fn child_streams_diverge() {
        let mut root = SimRng::new(7);
        let mut c1 = root.child(1);
        let mut c2 = root.child(2);
        let a: u64 = c1.random();
        let b: u64 = c2.random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
