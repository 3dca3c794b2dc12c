//! Morph-Animator: asymptotische Annäherung einer Kontur an ein Ziel.

use super::geometry::{smooth_scalar_toward, smooth_toward};
use super::{ModelError, NodeModel};

/// Standard-Glättungsfaktor pro Tick.
pub const DEFAULT_MORPH_SMOOTHING: f32 = 0.05;

/// Zustand des Animators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MorphState {
    #[default]
    Idle,
    Morphing,
}

/// Zwei-Zustands-Animator mit festem exponentiellem Glättungsschritt.
///
/// Jeder Tick bewegt alle Punkte und Gewichte um denselben Anteil `k` auf das
/// Ziel zu; das Ziel wird nie exakt erreicht.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphAnimator {
    state: MorphState,
    smoothing: f32,
    ticks: u64,
}

impl MorphAnimator {
    /// `smoothing` wird auf `(0, 1]` begrenzt.
    pub fn new(smoothing: f32) -> Self {
        let smoothing = if smoothing.is_finite() && smoothing > 0.0 {
            smoothing.min(1.0)
        } else {
            DEFAULT_MORPH_SMOOTHING
        };
        Self {
            state: MorphState::Idle,
            smoothing,
            ticks: 0,
        }
    }

    pub fn state(&self) -> MorphState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == MorphState::Morphing
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Anzahl der Ticks seit dem letzten Start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Idle → Morphing. Ein laufender Morph wird nicht neu gestartet.
    pub fn start(&mut self) {
        if self.state == MorphState::Idle {
            self.ticks = 0;
        }
        self.state = MorphState::Morphing;
    }

    /// Morphing → Idle; die Geometrie bleibt auf dem letzten Stand.
    pub fn stop(&mut self) {
        self.state = MorphState::Idle;
    }

    /// Ein Glättungsschritt auf `model` Richtung `target`.
    ///
    /// Gibt `false` zurück (ohne Änderung), wenn der Animator Idle ist.
    pub fn tick(&mut self, model: &mut NodeModel, target: &NodeModel) -> Result<bool, ModelError> {
        if self.state == MorphState::Idle {
            return Ok(false);
        }
        model.check_topology(target)?;

        let k = self.smoothing;
        for (node, goal) in model.nodes_mut().iter_mut().zip(target.nodes()) {
            node.position = smooth_toward(node.position, goal.position, k);
            node.handle_in = smooth_toward(node.handle_in, goal.handle_in, k);
            node.handle_out = smooth_toward(node.handle_out, goal.handle_out, k);
            node.weight_position = smooth_scalar_toward(node.weight_position, goal.weight_position, k);
            node.weight_in = smooth_scalar_toward(node.weight_in, goal.weight_in, k);
            node.weight_out = smooth_scalar_toward(node.weight_out, goal.weight_out, k);
        }
        self.ticks += 1;
        Ok(true)
    }
}

impl Default for MorphAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_MORPH_SMOOTHING)
    }
}
