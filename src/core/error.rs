//! Typisierte Fehler an der Mutationsgrenze des Kontur-Modells.

use thiserror::Error;

/// Abgelehnte Eingaben für [`NodeModel`](super::NodeModel) und Kurven-Parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Node-Index liegt außerhalb der Sequenz
    #[error("Node-Index {index} außerhalb des Bereichs (Anzahl: {len})")]
    NodeIndexOutOfRange { index: usize, len: usize },
    /// Gewicht außerhalb des konfigurierten Bereichs
    #[error("Gewicht {value} außerhalb von [{min}, {max}]")]
    WeightOutOfRange { value: f32, min: f32, max: f32 },
    /// Tension außerhalb von [-2, 2]
    #[error("Tension {value} außerhalb von [-2, 2]")]
    TensionOutOfRange { value: f32 },
    /// NaN oder Inf als Eingabe
    #[error("Nicht-endlicher Wert als Eingabe")]
    NonFiniteValue,
    /// Geschlossene Kontur braucht mindestens vier Nodes
    #[error("Kontur braucht mindestens 4 Nodes, erhalten: {count}")]
    TooFewNodes { count: usize },
    /// Morph-Ziel hat eine andere Node-Anzahl
    #[error("Morph-Ziel hat {actual} Nodes, erwartet: {expected}")]
    TopologyMismatch { expected: usize, actual: usize },
}
