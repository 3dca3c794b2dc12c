//! Handler für Selektion, Drag und Kontextmenü.

use crate::app::state::DragMode;
use crate::app::AppState;
use crate::core::{hit_test, nearest_node_on_screen};
use anyhow::Context;
use glam::Vec2;

/// Hit-Test am Klickpunkt: Treffer → Node-/Handle-Drag, sonst Pan.
pub fn hit_test_at(state: &mut AppState, screen_pos: Vec2) {
    let params = state.options.hit_test_params(state.view.show_skeleton);
    let selection = hit_test(&state.model, &state.view.transform, screen_pos, &params);
    state.selection.current = selection;

    let Some(index) = selection.node_index else {
        state.selection.drag = DragMode::Pan {
            last_screen: screen_pos,
        };
        return;
    };

    state.selection.drag = match selection.part.handle_side() {
        Some(side) => DragMode::Handle { index, side },
        None => {
            let grab_offset = state
                .view
                .transform
                .to_logical(screen_pos)
                .zip(state.model.node(index))
                .map_or(Vec2::ZERO, |(logical, node)| logical - node.position);
            DragMode::Node { index, grab_offset }
        }
    };
    log::debug!("Selektion: Node {} ({:?})", index, selection.part);
}

/// Startet einen Pan-Drag ohne Hit-Test.
pub fn begin_pan(state: &mut AppState, screen_pos: Vec2) {
    state.selection.drag = DragMode::Pan {
        last_screen: screen_pos,
    };
}

/// Zieht den selektierten Node bzw. das Handle an die Pointer-Position.
pub fn drag_to(state: &mut AppState, screen_pos: Vec2) -> anyhow::Result<()> {
    let Some(logical) = state.view.transform.to_logical(screen_pos) else {
        log::debug!("Drag ignoriert: View-Transformation singulär");
        return Ok(());
    };

    match state.selection.drag {
        DragMode::Node { index, grab_offset } => {
            state
                .model
                .move_node(index, logical - grab_offset)
                .with_context(|| format!("Node {index} konnte nicht verschoben werden"))?;
        }
        DragMode::Handle { index, side } => {
            state
                .model
                .move_handle(index, side, logical)
                .with_context(|| format!("Handle von Node {index} konnte nicht gesetzt werden"))?;
        }
        DragMode::Idle | DragMode::Pan { .. } => {}
    }
    Ok(())
}

/// Setzt einen Pan-Drag fort (Delta in Bildschirm-Koordinaten).
pub fn pan_to(state: &mut AppState, screen_pos: Vec2) {
    if let DragMode::Pan { last_screen } = state.selection.drag {
        state.view.transform.pan(screen_pos - last_screen);
        state.selection.drag = DragMode::Pan {
            last_screen: screen_pos,
        };
    }
}

/// Beendet den Drag; die Selektion bleibt für das Info-Panel erhalten.
pub fn end_drag(state: &mut AppState) {
    state.selection.drag = DragMode::Idle;
}

/// Bestimmt den nächsten Node für das Kontextmenü (Bildschirmraum).
pub fn pick_context_node(state: &mut AppState, screen_pos: Vec2) {
    let picked = nearest_node_on_screen(
        &state.model,
        &state.view.transform,
        screen_pos,
        state.options.context_pick_radius_px,
        state.options.pick_metric,
    );
    state.selection.context_node = picked;
    match picked {
        Some(index) => log::debug!("Kontextmenü für Node {}", index),
        None => log::debug!("Kontextmenü: kein Node in Reichweite"),
    }
}

/// Hebt Selektion und Drag auf.
pub fn clear(state: &mut AppState) {
    state.selection.clear();
}
