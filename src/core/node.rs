//! Einzelner Kontur-Node mit Tangenten-Handles und Gewichten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stetigkeitsklasse eines Nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Continuity {
    /// Handles liegen auf der Position (Knick)
    #[default]
    Corner,
    /// Handles sind punktgespiegelt (gleiche Länge, Gegenrichtung)
    Smooth,
}

/// Welches der beiden Handles eines Nodes?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    /// Eingehendes Handle (Segment endet an diesem Node)
    In,
    /// Ausgehendes Handle (Segment beginnt an diesem Node)
    Out,
}

impl HandleSide {
    /// Die jeweils andere Seite.
    pub fn opposite(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }
}

/// Welches der drei Gewichte eines Nodes?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightComponent {
    /// Gewicht der Node-Position (w0/w3 im rationalen Segment)
    Position,
    /// Gewicht des eingehenden Handles (w2)
    In,
    /// Gewicht des ausgehenden Handles (w1)
    Out,
}

/// Anker der Kontur.
///
/// Die Handles werden nur vom rationalen Evaluator gelesen; der Cardinal-Spline
/// arbeitet ausschließlich mit `position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub position: Vec2,
    pub handle_in: Vec2,
    pub handle_out: Vec2,
    pub continuity: Continuity,
    pub weight_position: f32,
    pub weight_in: f32,
    pub weight_out: f32,
}

impl Node {
    /// Erstellt einen Node mit auf die Position kollabierten Handles und Gewicht 1.
    pub fn new(position: Vec2, continuity: Continuity) -> Self {
        Self {
            position,
            handle_in: position,
            handle_out: position,
            continuity,
            weight_position: 1.0,
            weight_in: 1.0,
            weight_out: 1.0,
        }
    }

    /// Handle-Position der gewählten Seite.
    #[inline]
    pub fn handle(&self, side: HandleSide) -> Vec2 {
        match side {
            HandleSide::In => self.handle_in,
            HandleSide::Out => self.handle_out,
        }
    }

    pub(crate) fn handle_mut(&mut self, side: HandleSide) -> &mut Vec2 {
        match side {
            HandleSide::In => &mut self.handle_in,
            HandleSide::Out => &mut self.handle_out,
        }
    }

    /// Gewicht der gewählten Komponente.
    pub fn weight(&self, component: WeightComponent) -> f32 {
        match component {
            WeightComponent::Position => self.weight_position,
            WeightComponent::In => self.weight_in,
            WeightComponent::Out => self.weight_out,
        }
    }

    pub(crate) fn weight_mut(&mut self, component: WeightComponent) -> &mut f32 {
        match component {
            WeightComponent::Position => &mut self.weight_position,
            WeightComponent::In => &mut self.weight_in,
            WeightComponent::Out => &mut self.weight_out,
        }
    }

    /// Legt beide Handles auf die Position.
    pub(crate) fn collapse_handles(&mut self) {
        self.handle_in = self.position;
        self.handle_out = self.position;
    }

    /// Prüft die Stetigkeits-Invariante innerhalb von `epsilon`.
    pub fn satisfies_continuity(&self, epsilon: f32) -> bool {
        match self.continuity {
            Continuity::Corner => {
                self.handle_in.abs_diff_eq(self.position, epsilon)
                    && self.handle_out.abs_diff_eq(self.position, epsilon)
            }
            Continuity::Smooth => {
                let mirrored = super::geometry::reflect_through(self.position, self.handle_in);
                self.handle_out.abs_diff_eq(mirrored, epsilon)
            }
        }
    }

    /// Größte Abweichung eines Felds (Punkte und Gewichte) gegenüber `other`.
    pub fn max_deviation(&self, other: &Node) -> f32 {
        let points = [
            self.position.distance(other.position),
            self.handle_in.distance(other.handle_in),
            self.handle_out.distance(other.handle_out),
        ];
        let weights = [
            (self.weight_position - other.weight_position).abs(),
            (self.weight_in - other.weight_in).abs(),
            (self.weight_out - other.weight_out).abs(),
        ];
        points.into_iter().chain(weights).fold(0.0, f32::max)
    }
}
