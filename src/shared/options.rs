//! Zentrale Konfiguration für den Kontur-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{
    CurveScheme, CurveSettings, DistanceMetric, HitTestParams, RadiusSpace, WeightScheme,
};
use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Start-Tension des Cardinal-Splines.
pub const TENSION_DEFAULT: f32 = 0.0;
/// Untere Tension-Grenze.
pub const TENSION_MIN: f32 = -2.0;
/// Obere Tension-Grenze.
pub const TENSION_MAX: f32 = 2.0;
/// Abtastschritte pro Cardinal-Segment.
pub const CARDINAL_STEPS_PER_SEGMENT: usize = 30;
/// Abtastschritte pro rationalem Segment.
pub const RATIONAL_STEPS_PER_SEGMENT: usize = 40;
/// Tangenten-Skalierung für abgeleitete Handles.
pub const TANGENT_SCALE: f32 = 0.2;

// ── Gewichte ────────────────────────────────────────────────────────

/// Kleinstes erlaubtes Gewicht.
pub const WEIGHT_MIN: f32 = 0.1;
/// Größtes erlaubtes Gewicht.
pub const WEIGHT_MAX: f32 = 50.0;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius für Handles.
pub const HANDLE_PICK_RADIUS: f32 = 10.0;
/// Node-Radius = Handle-Radius × Faktor.
pub const NODE_PICK_RADIUS_FACTOR: f32 = 1.5;
/// Pick-Radius des Kontextmenüs in Screen-Pixeln.
pub const CONTEXT_PICK_RADIUS_PX: f32 = 20.0;

// ── Morph ───────────────────────────────────────────────────────────

/// Glättungsfaktor pro Morph-Tick.
pub const MORPH_SMOOTHING: f32 = 0.05;
/// Radius des Kreis-Ziels.
pub const TARGET_CIRCLE_RADIUS: f32 = 160.0;

// ── Ansicht ─────────────────────────────────────────────────────────

/// Zoom-Schritt bei Mausrad-Scroll.
pub const SCROLL_ZOOM_STEP: f32 = 1.1;
/// Minimaler Zoom-Faktor.
pub const ZOOM_MIN: f32 = 0.05;
/// Maximaler Zoom-Faktor.
pub const ZOOM_MAX: f32 = 50.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `outline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Auswertungs-Verfahren beim Start
    pub curve_scheme: CurveScheme,
    /// Start-Tension
    pub tension_default: f32,
    pub tension_min: f32,
    pub tension_max: f32,
    /// Abtastschritte pro Segment (Cardinal)
    pub cardinal_steps_per_segment: usize,
    /// Abtastschritte pro Segment (rational)
    pub rational_steps_per_segment: usize,
    /// Tangenten-Skalierung k für abgeleitete Handles
    pub tangent_scale: f32,

    // ── Gewichte ────────────────────────────────────────────────
    pub weight_min: f32,
    pub weight_max: f32,
    /// Drei Gewichte pro Node oder ein gemeinsames Handle-Gewicht
    pub weight_scheme: WeightScheme,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Handles
    pub handle_pick_radius: f32,
    /// Faktor für den größeren Node-Radius
    pub node_pick_radius_factor: f32,
    /// Radien im logischen Raum oder in Screen-Pixeln
    pub pick_radius_space: RadiusSpace,
    pub pick_metric: DistanceMetric,
    /// Pick-Radius des Kontextmenüs (Screen-Pixel)
    pub context_pick_radius_px: f32,

    // ── Morph ───────────────────────────────────────────────────
    /// Anteil, um den ein Tick auf das Ziel zugeht
    pub morph_smoothing: f32,
    /// Automatischer Stopp unterhalb dieser Abweichung (`None` = nie)
    pub morph_auto_stop_distance: Option<f32>,
    pub target_circle_radius: f32,

    // ── Ansicht ─────────────────────────────────────────────────
    /// Zoom-Schritt pro Mausrad-Raste
    pub scroll_zoom_step: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Skelett (Kontrollpolygon / Handles) anzeigen
    pub show_skeleton: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            curve_scheme: CurveScheme::default(),
            tension_default: TENSION_DEFAULT,
            tension_min: TENSION_MIN,
            tension_max: TENSION_MAX,
            cardinal_steps_per_segment: CARDINAL_STEPS_PER_SEGMENT,
            rational_steps_per_segment: RATIONAL_STEPS_PER_SEGMENT,
            tangent_scale: TANGENT_SCALE,

            weight_min: WEIGHT_MIN,
            weight_max: WEIGHT_MAX,
            weight_scheme: WeightScheme::PerHandle,

            handle_pick_radius: HANDLE_PICK_RADIUS,
            node_pick_radius_factor: NODE_PICK_RADIUS_FACTOR,
            pick_radius_space: RadiusSpace::Logical,
            pick_metric: DistanceMetric::Manhattan,
            context_pick_radius_px: CONTEXT_PICK_RADIUS_PX,

            morph_smoothing: MORPH_SMOOTHING,
            morph_auto_stop_distance: None,
            target_circle_radius: TARGET_CIRCLE_RADIUS,

            scroll_zoom_step: SCROLL_ZOOM_STEP,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            show_skeleton: true,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("outline-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("outline_editor.toml")
    }

    /// Ersetzt unbrauchbare Bereiche durch Standardwerte (mit Warnung).
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.tension_min <= self.tension_default && self.tension_default <= self.tension_max)
            || self.tension_min < TENSION_MIN
            || self.tension_max > TENSION_MAX
        {
            log::warn!(
                "Tension-Bereich [{}, {}] mit Start {} ungültig, verwende Standardwerte",
                self.tension_min,
                self.tension_max,
                self.tension_default
            );
            self.tension_default = defaults.tension_default;
            self.tension_min = defaults.tension_min;
            self.tension_max = defaults.tension_max;
        }
        if !(self.weight_min > 0.0 && self.weight_min <= 1.0 && 1.0 <= self.weight_max) {
            log::warn!(
                "Gewichtsbereich [{}, {}] ungültig, verwende Standardwerte",
                self.weight_min,
                self.weight_max
            );
            self.weight_min = defaults.weight_min;
            self.weight_max = defaults.weight_max;
        }
        if !(self.zoom_min > 0.0 && self.zoom_min <= self.zoom_max) {
            log::warn!(
                "Zoom-Bereich [{}, {}] ungültig, verwende Standardwerte",
                self.zoom_min,
                self.zoom_max
            );
            self.zoom_min = defaults.zoom_min;
            self.zoom_max = defaults.zoom_max;
        }
        if !(self.morph_smoothing > 0.0 && self.morph_smoothing <= 1.0) {
            log::warn!(
                "Morph-Glättung {} ungültig, verwende {}",
                self.morph_smoothing,
                defaults.morph_smoothing
            );
            self.morph_smoothing = defaults.morph_smoothing;
        }
        self.cardinal_steps_per_segment = self.cardinal_steps_per_segment.max(1);
        self.rational_steps_per_segment = self.rational_steps_per_segment.max(1);
        self
    }

    /// Node-Pick-Radius = Handle-Radius × Faktor.
    pub fn node_pick_radius(&self) -> f32 {
        self.handle_pick_radius * self.node_pick_radius_factor
    }

    /// Hit-Test-Parameter für den aktuellen Skelett-Zustand.
    pub fn hit_test_params(&self, show_handles: bool) -> HitTestParams {
        HitTestParams {
            handle_radius: self.handle_pick_radius,
            node_radius: self.node_pick_radius(),
            show_handles,
            radius_space: self.pick_radius_space,
            metric: self.pick_metric,
        }
    }

    /// Start-Konfiguration des Kurven-Evaluators.
    pub fn curve_settings(&self) -> CurveSettings {
        CurveSettings {
            scheme: self.curve_scheme,
            tension: self.tension_default,
            cardinal_steps: self.cardinal_steps_per_segment,
            rational_steps: self.rational_steps_per_segment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let opts = EditorOptions::default();
        assert_eq!(opts.cardinal_steps_per_segment, 30);
        assert_eq!(opts.rational_steps_per_segment, 40);
        assert_eq!(opts.node_pick_radius(), 15.0);
        assert_eq!(opts.morph_auto_stop_distance, None);
        assert!(opts.show_skeleton);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let opts: EditorOptions = toml::from_str(
            r#"
            handle_pick_radius = 6.0
            weight_scheme = "Uniform"
            morph_auto_stop_distance = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(opts.handle_pick_radius, 6.0);
        assert_eq!(opts.weight_scheme, WeightScheme::Uniform);
        assert_eq!(opts.morph_auto_stop_distance, Some(0.5));
        assert_eq!(opts.target_circle_radius, TARGET_CIRCLE_RADIUS);
    }

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let mut opts = EditorOptions::default();
        opts.curve_scheme = CurveScheme::Cardinal;
        opts.pick_radius_space = RadiusSpace::Screen;
        let text = toml::to_string_pretty(&opts).unwrap();
        let back: EditorOptions = toml::from_str(&text).unwrap();
        assert_eq!(back, opts);
    }

    #[test]
    fn test_sanitized_repairs_broken_ranges() {
        let opts = EditorOptions {
            weight_min: 5.0,
            weight_max: 2.0,
            zoom_min: 0.0,
            morph_smoothing: 1.5,
            rational_steps_per_segment: 0,
            ..EditorOptions::default()
        }
        .sanitized();
        assert_eq!(opts.weight_min, WEIGHT_MIN);
        assert_eq!(opts.weight_max, WEIGHT_MAX);
        assert_eq!(opts.zoom_min, ZOOM_MIN);
        assert_eq!(opts.morph_smoothing, MORPH_SMOOTHING);
        assert_eq!(opts.rational_steps_per_segment, 1);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/outline_editor.toml",
        ));
        assert_eq!(opts, EditorOptions::default());
    }
}
