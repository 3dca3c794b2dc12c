//! Handler für Ansicht und Viewport.

use crate::app::AppState;
use anyhow::Context;
use glam::Vec2;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: Vec2) {
    state.view.transform.set_viewport_size(size);
}

/// Zoomt um `factor`; der Punkt unter `focus_screen` bleibt stabil.
pub fn zoom_about(state: &mut AppState, factor: f32, focus_screen: Vec2) {
    state.view.transform.zoom_about(
        factor,
        focus_screen,
        state.options.zoom_min,
        state.options.zoom_max,
    );
}

/// Setzt Offset, Rotation und Skalierung aus dem Parameter-Panel.
pub fn set_params(
    state: &mut AppState,
    offset: Vec2,
    rotation_deg: f32,
    scale: Vec2,
) -> anyhow::Result<()> {
    state
        .view
        .transform
        .set_params(offset, rotation_deg, scale)
        .context("Ansichts-Parameter abgelehnt")?;
    if state.view.transform.is_singular() {
        log::warn!("Ansicht ist singulär (Skalierung {scale}), Hit-Tests liefern keine Treffer");
    }
    Ok(())
}

/// Setzt die Ansicht auf den Standardzustand zurück.
pub fn reset(state: &mut AppState) {
    state.view.transform.reset();
}
