//! Reine 2D-Geometrie-Hilfen auf Basis von `glam::Vec2`.
//!
//! `Vec2` ist der Punkt-/Vektor-Typ des gesamten Crates (Addition,
//! Subtraktion und Skalierung kommen direkt aus glam).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Punkt im logischen Modellraum.
pub type Point2D = Vec2;

/// Distanzmaß für Pick-Radien.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Euklidischer Abstand
    Euclidean,
    /// Manhattan-Abstand (|dx| + |dy|)
    #[default]
    Manhattan,
}

impl DistanceMetric {
    /// Abstand zwischen `a` und `b` im gewählten Maß.
    #[inline]
    pub fn distance(self, a: Vec2, b: Vec2) -> f32 {
        match self {
            Self::Euclidean => a.distance(b),
            Self::Manhattan => manhattan_length(a - b),
        }
    }
}

/// |x| + |y|
#[inline]
pub fn manhattan_length(v: Vec2) -> f32 {
    v.x.abs() + v.y.abs()
}

/// Punktspiegelung von `point` an `center`: `2·center − point`.
#[inline]
pub fn reflect_through(center: Vec2, point: Vec2) -> Vec2 {
    2.0 * center - point
}

/// Ein fester Glättungsschritt: `current + (target − current)·k`.
#[inline]
pub fn smooth_toward(current: Vec2, target: Vec2, k: f32) -> Vec2 {
    current.lerp(target, k)
}

/// Skalare Variante von [`smooth_toward`].
#[inline]
pub fn smooth_scalar_toward(current: f32, target: f32, k: f32) -> f32 {
    current + (target - current) * k
}

/// True wenn beide Komponenten endlich sind.
#[inline]
pub fn is_finite_point(p: Vec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Punkt auf einem Kreis um den Ursprung.
pub fn point_on_circle(radius: f32, angle: f32) -> Vec2 {
    Vec2::from_angle(angle) * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reflect_through_center() {
        let r = reflect_through(Vec2::new(10.0, 5.0), Vec2::new(12.0, 1.0));
        assert_eq!(r, Vec2::new(8.0, 9.0));
    }

    #[test]
    fn test_manhattan_vs_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_relative_eq!(DistanceMetric::Euclidean.distance(a, b), 5.0);
        assert_relative_eq!(DistanceMetric::Manhattan.distance(a, b), 7.0);
    }

    #[test]
    fn test_smooth_toward_single_step() {
        let p = smooth_toward(Vec2::ZERO, Vec2::new(100.0, -40.0), 0.05);
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, -2.0);
        assert_relative_eq!(smooth_scalar_toward(1.0, 3.0, 0.5), 2.0);
    }

    #[test]
    fn test_point_on_circle_quarter_turn() {
        let p = point_on_circle(160.0, std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(p.y, 160.0, epsilon = 1e-4);
    }

    #[test]
    fn test_is_finite_point() {
        assert!(is_finite_point(Vec2::new(1.0, -2.0)));
        assert!(!is_finite_point(Vec2::new(f32::NAN, 0.0)));
        assert!(!is_finite_point(Vec2::new(0.0, f32::INFINITY)));
    }
}
