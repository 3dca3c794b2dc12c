//! View-Transformation zwischen logischem Modellraum und Bildschirm.
//!
//! Screen = Translation(Viewport-Mitte + Offset) · Skalierung(sx, −sy) · Rotation.
//! Die logische y-Achse zeigt nach oben, die Bildschirm-y-Achse nach unten.

use super::geometry::is_finite_point;
use super::ModelError;
use glam::{Affine2, Vec2};

/// Determinanten-Schwelle, unterhalb der die Transformation als singulär gilt.
const SINGULAR_EPSILON: f32 = 1e-9;

/// Pan/Zoom/Rotation-Abbildung für Hit-Test und Renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Verschiebung in Bildschirm-Pixeln relativ zur Viewport-Mitte
    pub offset: Vec2,
    /// Skalierung pro Achse (Pixel pro logischer Einheit)
    pub scale: Vec2,
    /// Rotation in Grad (gegen den Uhrzeigersinn im logischen Raum)
    pub rotation_deg: f32,
    viewport_size: Vec2,
}

impl ViewTransform {
    /// Erstellt eine Identitäts-Ansicht für den gegebenen Viewport.
    pub fn new(viewport_size: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation_deg: 0.0,
            viewport_size,
        }
    }

    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    /// Viewport-Mitte in Bildschirm-Koordinaten.
    pub fn viewport_center(&self) -> Vec2 {
        self.viewport_size * 0.5
    }

    /// Setzt die Viewport-Größe (z.B. nach Fenster-Resize).
    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport_size = size.max(Vec2::ONE);
    }

    /// Logisch → Bildschirm als affine Matrix.
    pub fn matrix(&self) -> Affine2 {
        Affine2::from_translation(self.viewport_center() + self.offset)
            * Affine2::from_scale(Vec2::new(self.scale.x, -self.scale.y))
            * Affine2::from_angle(self.rotation_deg.to_radians())
    }

    /// True wenn die Transformation nicht invertierbar ist.
    pub fn is_singular(&self) -> bool {
        let det = self.matrix().matrix2.determinant();
        !det.is_finite() || det.abs() < SINGULAR_EPSILON
    }

    /// Logischen Punkt auf den Bildschirm abbilden.
    pub fn to_screen(&self, logical: Vec2) -> Vec2 {
        self.matrix().transform_point2(logical)
    }

    /// Bildschirmpunkt in den logischen Raum abbilden; `None` bei singulärer Matrix.
    pub fn to_logical(&self, screen: Vec2) -> Option<Vec2> {
        if self.is_singular() {
            return None;
        }
        Some(self.matrix().inverse().transform_point2(screen))
    }

    /// Verschiebt die Ansicht um ein Bildschirm-Delta.
    pub fn pan(&mut self, delta_screen: Vec2) {
        self.offset += delta_screen;
    }

    /// Zoomt um `factor`, wobei der logische Punkt unter `focus_screen` an
    /// derselben Bildschirmposition bleibt. Die Skalierung wird pro Achse
    /// auf `[min, max]` begrenzt.
    pub fn zoom_about(&mut self, factor: f32, focus_screen: Vec2, min: f32, max: f32) {
        let anchor = self.to_logical(focus_screen);
        self.scale = (self.scale * factor).clamp(Vec2::splat(min), Vec2::splat(max));
        if let Some(anchor) = anchor {
            self.offset += focus_screen - self.to_screen(anchor);
        }
    }

    /// Setzt Offset, Rotation und Skalierung direkt (Parameter-Panel).
    pub fn set_params(
        &mut self,
        offset: Vec2,
        rotation_deg: f32,
        scale: Vec2,
    ) -> Result<(), ModelError> {
        if !is_finite_point(offset) || !rotation_deg.is_finite() || !is_finite_point(scale) {
            return Err(ModelError::NonFiniteValue);
        }
        self.offset = offset;
        self.rotation_deg = rotation_deg;
        self.scale = scale;
        Ok(())
    }

    /// Offset, Skalierung und Rotation zurücksetzen; der Viewport bleibt.
    pub fn reset(&mut self) {
        *self = Self::new(self.viewport_size);
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(Vec2::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin_maps_to_viewport_center() {
        let view = ViewTransform::new(Vec2::new(800.0, 600.0));
        let s = view.to_screen(Vec2::ZERO);
        assert_relative_eq!(s.x, 400.0);
        assert_relative_eq!(s.y, 300.0);
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let view = ViewTransform::new(Vec2::new(800.0, 600.0));
        let s = view.to_screen(Vec2::new(10.0, 20.0));
        assert_relative_eq!(s.x, 410.0);
        assert_relative_eq!(s.y, 280.0);
    }

    #[test]
    fn test_to_logical_inverts_to_screen() {
        let mut view = ViewTransform::new(Vec2::new(640.0, 480.0));
        view.set_params(Vec2::new(-30.0, 12.0), 35.0, Vec2::new(2.0, 0.5))
            .unwrap();
        let p = Vec2::new(-77.0, 140.0);
        let back = view.to_logical(view.to_screen(p)).unwrap();
        assert_relative_eq!(back.x, p.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-3);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let mut view = ViewTransform::new(Vec2::ZERO);
        view.rotation_deg = 90.0;
        // (1,0) → logisch (0,1) → Bildschirm (0,-1)
        let s = view.to_screen(Vec2::new(1.0, 0.0));
        assert_relative_eq!(s.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(s.y, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_singular_scale_has_no_inverse() {
        let mut view = ViewTransform::default();
        view.scale = Vec2::new(0.0, 1.0);
        assert!(view.is_singular());
        assert_eq!(view.to_logical(Vec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_zoom_about_keeps_focus_stable() {
        let mut view = ViewTransform::new(Vec2::new(800.0, 600.0));
        view.rotation_deg = 20.0;
        let focus = Vec2::new(523.0, 147.0);
        let before = view.to_logical(focus).unwrap();
        view.zoom_about(1.1, focus, 0.05, 50.0);
        assert_relative_eq!(view.scale.x, 1.1, epsilon = 1e-6);
        let after = view.to_logical(focus).unwrap();
        assert_relative_eq!(before.x, after.x, epsilon = 1e-3);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-3);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut view = ViewTransform::default();
        for _ in 0..100 {
            view.zoom_about(1.1, Vec2::ZERO, 0.05, 50.0);
        }
        assert_relative_eq!(view.scale.x, 50.0);
        assert_relative_eq!(view.scale.y, 50.0);
    }

    #[test]
    fn test_pan_and_reset() {
        let mut view = ViewTransform::new(Vec2::new(200.0, 100.0));
        view.pan(Vec2::new(15.0, -5.0));
        assert_eq!(view.offset, Vec2::new(15.0, -5.0));
        view.rotation_deg = 45.0;
        view.reset();
        assert_eq!(view, ViewTransform::new(Vec2::new(200.0, 100.0)));
    }

    #[test]
    fn test_set_params_rejects_non_finite() {
        let mut view = ViewTransform::default();
        assert_eq!(
            view.set_params(Vec2::ZERO, f32::NAN, Vec2::ONE),
            Err(ModelError::NonFiniteValue)
        );
        assert_eq!(view.rotation_deg, 0.0);
    }
}
