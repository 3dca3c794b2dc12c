//! Handler für Kontur-Bearbeitung und Kurven-Parameter.

use crate::app::state::DragMode;
use crate::app::AppState;
use crate::core::{Continuity, CurveScheme, SelectionPart, WeightScheme};
use anyhow::{bail, Context};

/// Setzt die Tension des Cardinal-Splines (Bereich aus den Optionen).
pub fn set_tension(state: &mut AppState, value: f32) -> anyhow::Result<()> {
    let (min, max) = (state.options.tension_min, state.options.tension_max);
    if value.is_finite() && (value < min || value > max) {
        log::warn!("Tension {} außerhalb von [{}, {}] abgelehnt", value, min, max);
        bail!("Tension {value} außerhalb von [{min}, {max}]");
    }
    state
        .curve
        .set_tension(value)
        .context("Tension abgelehnt")?;
    log::debug!("Tension auf {} gesetzt", value);
    Ok(())
}

/// Setzt das Gewicht des selektierten Teils.
///
/// Position → `weight_position`, HandleIn → `weight_in`, HandleOut → `weight_out`.
/// Im Uniform-Schema schreibt jede Handle-Selektion beide Handle-Gewichte.
pub fn set_selected_weight(state: &mut AppState, value: f32) -> anyhow::Result<()> {
    let selection = state.selection.current;
    let (Some(index), Some(component)) = (selection.node_index, selection.part.weight_component())
    else {
        return Ok(());
    };

    let changed = state
        .model
        .set_weight(index, component, value)
        .inspect_err(|e| log::warn!("Gewicht abgelehnt: {}", e))
        .with_context(|| format!("Gewicht für Node {index} nicht gesetzt"))?;

    if !changed && state.model.weight_scheme() == WeightScheme::Uniform {
        log::debug!("Positions-Gewicht ist im Uniform-Schema fest auf 1.0");
    }
    Ok(())
}

/// Setzt die Stetigkeit eines Nodes und stellt die Invariante her.
pub fn set_node_continuity(
    state: &mut AppState,
    node_index: usize,
    continuity: Continuity,
) -> anyhow::Result<()> {
    state
        .model
        .set_continuity(node_index, continuity)
        .context("Stetigkeit nicht geändert")?;

    if continuity != Continuity::Corner {
        return Ok(());
    }

    // Corner-Handles sind nicht greifbar: Handle-Selektion wandert auf die Position,
    // ein laufender Handle-Drag endet
    let selection = &mut state.selection.current;
    if selection.node_index == Some(node_index) && selection.part.handle_side().is_some() {
        selection.part = SelectionPart::Position;
    }
    if matches!(state.selection.drag, DragMode::Handle { index, .. } if index == node_index) {
        state.selection.drag = DragMode::Idle;
        log::debug!("Handle-Drag auf Node {} beendet (Corner)", node_index);
    }
    Ok(())
}

/// Blendet das Skelett ein oder aus.
pub fn set_skeleton_visible(state: &mut AppState, visible: bool) {
    state.view.show_skeleton = visible;
}

/// Wechselt das Auswertungs-Verfahren.
pub fn set_curve_scheme(state: &mut AppState, scheme: CurveScheme) {
    if state.curve.scheme != scheme {
        state.curve.scheme = scheme;
        log::info!("Auswertung auf {:?} umgestellt", scheme);
    }
}

/// Stellt die Kontur vom Sitzungsstart wieder her.
pub fn reset_outline(state: &mut AppState) {
    state.morph.stop();
    state.model = state.initial_model.clone();
    state.selection.clear();
    log::info!("Kontur zurückgesetzt");
}
