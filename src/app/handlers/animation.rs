//! Handler für den Morph-Animator.

use crate::app::state::MorphTarget;
use crate::app::AppState;
use anyhow::Context;

/// Startet den Morph; interaktive Selektion wird dabei aufgehoben.
pub fn start(state: &mut AppState, target: MorphTarget) -> anyhow::Result<()> {
    state
        .model
        .check_topology(match target {
            MorphTarget::Circle => &state.circle_target,
            MorphTarget::Original => &state.initial_model,
        })
        .context("Morph-Ziel passt nicht zur Kontur")?;

    state.morph_target = target;
    state.selection.clear();
    state.morph.start();
    log::info!("Morph gestartet (Ziel: {:?})", target);
    Ok(())
}

/// Hält den Morph an; die Geometrie bleibt auf dem letzten Stand.
pub fn stop(state: &mut AppState) {
    if state.morph.is_running() {
        state.morph.stop();
        log::info!("Morph nach {} Ticks angehalten", state.morph.ticks());
    }
}

/// Ein Glättungsschritt; stoppt optional unterhalb der konfigurierten Abweichung.
pub fn advance(state: &mut AppState) -> anyhow::Result<()> {
    let target = match state.morph_target {
        MorphTarget::Circle => &state.circle_target,
        MorphTarget::Original => &state.initial_model,
    };
    state
        .morph
        .tick(&mut state.model, target)
        .context("Morph-Tick fehlgeschlagen")?;

    if let Some(threshold) = state.options.morph_auto_stop_distance {
        let deviation = state.model.max_deviation(state.active_morph_target())?;
        if deviation < threshold {
            state.morph.stop();
            log::info!(
                "Morph nach {} Ticks beendet (Abweichung {:.4} < {})",
                state.morph.ticks(),
                deviation,
                threshold
            );
        }
    }
    Ok(())
}
