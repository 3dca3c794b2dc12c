//! Zyklische Node-Sequenz mit Stetigkeits-Constraints.
//!
//! Segment `i` verläuft immer von Node `i` nach Node `(i + 1) mod n`.
//! Alle Mutationen laufen über die Methoden hier, damit die
//! Corner-/Smooth-Invariante nach jeder Änderung gilt.

use super::geometry::{is_finite_point, point_on_circle, reflect_through};
use super::{Continuity, HandleSide, ModelError, Node, WeightComponent};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Minimale Node-Anzahl einer geschlossenen Kontur.
pub const MIN_NODES: usize = 4;
/// Tangenten-Skalierung für automatisch abgeleitete Handles.
pub const DEFAULT_TANGENT_SCALE: f32 = 0.2;
/// Standard-Untergrenze für Gewichte.
pub const DEFAULT_WEIGHT_MIN: f32 = 0.1;
/// Standard-Obergrenze für Gewichte.
pub const DEFAULT_WEIGHT_MAX: f32 = 50.0;

/// Gewichts-Schema der Nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeightScheme {
    /// Drei unabhängige Gewichte pro Node (Position, In, Out)
    #[default]
    PerHandle,
    /// Ein Gewicht für beide Handles, `weight_position` bleibt 1.0
    Uniform,
}

/// Silhouette (Segelboot) als Start-Kontur: Position und Stetigkeit je Node.
const SILHOUETTE: [(f32, f32, Continuity); 14] = [
    (0.0, 200.0, Continuity::Corner),
    (25.0, 160.0, Continuity::Smooth),
    (50.0, 100.0, Continuity::Smooth),
    (65.0, 50.0, Continuity::Corner),
    (10.0, 50.0, Continuity::Corner),
    (150.0, 20.0, Continuity::Corner),
    (100.0, -30.0, Continuity::Smooth),
    (40.0, -45.0, Continuity::Smooth),
    (-40.0, -45.0, Continuity::Smooth),
    (-100.0, -30.0, Continuity::Smooth),
    (-150.0, 20.0, Continuity::Corner),
    (-10.0, 50.0, Continuity::Corner),
    (-70.0, 50.0, Continuity::Corner),
    (-35.0, 140.0, Continuity::Smooth),
];

/// Geschlossene Kontur aus mindestens vier Nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeModel {
    nodes: Vec<Node>,
    weight_scheme: WeightScheme,
    weight_min: f32,
    weight_max: f32,
    tangent_scale: f32,
}

impl NodeModel {
    /// Erstellt ein Modell aus fertigen Nodes (Handles werden unverändert übernommen).
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self, ModelError> {
        if nodes.len() < MIN_NODES {
            return Err(ModelError::TooFewNodes { count: nodes.len() });
        }
        Ok(Self {
            nodes,
            weight_scheme: WeightScheme::PerHandle,
            weight_min: DEFAULT_WEIGHT_MIN,
            weight_max: DEFAULT_WEIGHT_MAX,
            tangent_scale: DEFAULT_TANGENT_SCALE,
        })
    }

    /// Erstellt ein Modell aus nackten Positionen und leitet die Handles ab.
    pub fn from_positions(points: &[(Vec2, Continuity)]) -> Result<Self, ModelError> {
        let nodes = points
            .iter()
            .map(|&(position, continuity)| Node::new(position, continuity))
            .collect();
        let mut model = Self::from_nodes(nodes)?;
        model.auto_derive_handles();
        Ok(model)
    }

    /// Die vierzehnteilige Segelboot-Silhouette mit abgeleiteten Handles.
    pub fn silhouette() -> Self {
        let nodes = SILHOUETTE
            .iter()
            .map(|&(x, y, continuity)| Node::new(Vec2::new(x, y), continuity))
            .collect();
        let mut model = Self {
            nodes,
            weight_scheme: WeightScheme::PerHandle,
            weight_min: DEFAULT_WEIGHT_MIN,
            weight_max: DEFAULT_WEIGHT_MAX,
            tangent_scale: DEFAULT_TANGENT_SCALE,
        };
        model.auto_derive_handles();
        model
    }

    /// Morph-Ziel: gleiche Node-Anzahl, Positionen auf einem regelmäßigen Kreis.
    ///
    /// Winkel `2π·i/n + π/2` (Node 0 oben), alle Nodes Smooth mit auf die
    /// Position kollabierten Handles und Gewicht 1.
    pub fn circle_target(&self, radius: f32) -> Self {
        let n = self.nodes.len();
        let nodes = (0..n)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / n as f32
                    + std::f32::consts::FRAC_PI_2;
                Node::new(point_on_circle(radius, angle), Continuity::Smooth)
            })
            .collect();
        Self {
            nodes,
            weight_scheme: self.weight_scheme,
            weight_min: self.weight_min,
            weight_max: self.weight_max,
            tangent_scale: self.tangent_scale,
        }
    }

    /// Setzt Gewichts-Schema und -Bereich (Builder-Stil).
    pub fn with_weight_config(mut self, scheme: WeightScheme, min: f32, max: f32) -> Self {
        self.weight_scheme = scheme;
        self.weight_min = min;
        self.weight_max = max;
        if scheme == WeightScheme::Uniform {
            for node in &mut self.nodes {
                node.weight_position = 1.0;
                node.weight_in = node.weight_out;
            }
        }
        self
    }

    /// Setzt die Tangenten-Skalierung für abgeleitete Handles.
    pub fn with_tangent_scale(mut self, tangent_scale: f32) -> Self {
        self.tangent_scale = tangent_scale;
        self
    }

    /// Anzahl der Nodes (= Anzahl der Segmente).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Immer `false` (mindestens vier Nodes), vorhanden für Clippy.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn weight_scheme(&self) -> WeightScheme {
        self.weight_scheme
    }

    /// Erlaubter Gewichtsbereich (inklusive).
    pub fn weight_range(&self) -> (f32, f32) {
        (self.weight_min, self.weight_max)
    }

    /// Vorgänger-Index (zyklisch).
    #[inline]
    pub fn prev_index(&self, index: usize) -> usize {
        let len = self.nodes.len();
        (index % len + len - 1) % len
    }

    /// Nachfolger-Index (zyklisch).
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index % self.nodes.len() + 1) % self.nodes.len()
    }

    /// Start- und End-Node von Segment `index`.
    pub fn segment(&self, index: usize) -> (&Node, &Node) {
        let i = index % self.nodes.len();
        (&self.nodes[i], &self.nodes[self.next_index(i)])
    }

    fn check_index(&self, index: usize) -> Result<(), ModelError> {
        if index < self.nodes.len() {
            Ok(())
        } else {
            Err(ModelError::NodeIndexOutOfRange {
                index,
                len: self.nodes.len(),
            })
        }
    }

    /// Ändert die Stetigkeitsklasse und stellt die Invariante sofort her.
    ///
    /// Smooth: das eingehende Handle wird aus dem ausgehenden gespiegelt.
    /// Sind beide Handles auf die Position kollabiert (ehemaliger Corner),
    /// wird die Tangente aus den Nachbarn abgeleitet.
    /// Corner: beide Handles wandern auf die Position.
    pub fn set_continuity(&mut self, index: usize, continuity: Continuity) -> Result<(), ModelError> {
        self.check_index(index)?;
        self.nodes[index].continuity = continuity;
        match continuity {
            Continuity::Corner => self.nodes[index].collapse_handles(),
            Continuity::Smooth => {
                let node = self.nodes[index];
                if node.handle_out == node.position && node.handle_in == node.position {
                    self.derive_node_handles(index);
                } else {
                    self.nodes[index].handle_in = reflect_through(node.position, node.handle_out);
                }
            }
        }
        log::debug!("Node {} auf {:?} gesetzt", index, continuity);
        Ok(())
    }

    /// Verschiebt den Node samt Handles starr auf `new_position`.
    pub fn move_node(&mut self, index: usize, new_position: Vec2) -> Result<(), ModelError> {
        self.check_index(index)?;
        if !is_finite_point(new_position) {
            return Err(ModelError::NonFiniteValue);
        }
        let node = &mut self.nodes[index];
        let delta = new_position - node.position;
        node.position = new_position;
        node.handle_in += delta;
        node.handle_out += delta;
        Ok(())
    }

    /// Setzt ein Handle direkt; bei Smooth wird das Gegen-Handle gespiegelt.
    ///
    /// Gibt `false` zurück, wenn der Node ein Corner ist (keine Änderung).
    pub fn move_handle(
        &mut self,
        index: usize,
        side: HandleSide,
        new_position: Vec2,
    ) -> Result<bool, ModelError> {
        self.check_index(index)?;
        if !is_finite_point(new_position) {
            return Err(ModelError::NonFiniteValue);
        }
        let node = &mut self.nodes[index];
        if node.continuity == Continuity::Corner {
            log::debug!("Handle-Drag auf Corner-Node {} ignoriert", index);
            return Ok(false);
        }
        *node.handle_mut(side) = new_position;
        let mirrored = reflect_through(node.position, new_position);
        *node.handle_mut(side.opposite()) = mirrored;
        Ok(true)
    }

    /// Setzt ein Gewicht innerhalb des konfigurierten Bereichs.
    ///
    /// Im `Uniform`-Schema schreibt `In`/`Out` beide Handle-Gewichte, und
    /// `Position` bleibt fest auf 1.0 (Rückgabe `false`).
    pub fn set_weight(
        &mut self,
        index: usize,
        component: WeightComponent,
        value: f32,
    ) -> Result<bool, ModelError> {
        self.check_index(index)?;
        if !value.is_finite() {
            return Err(ModelError::NonFiniteValue);
        }
        if value < self.weight_min || value > self.weight_max {
            return Err(ModelError::WeightOutOfRange {
                value,
                min: self.weight_min,
                max: self.weight_max,
            });
        }
        let node = &mut self.nodes[index];
        match (self.weight_scheme, component) {
            (WeightScheme::PerHandle, _) => *node.weight_mut(component) = value,
            (WeightScheme::Uniform, WeightComponent::Position) => return Ok(false),
            (WeightScheme::Uniform, _) => {
                node.weight_in = value;
                node.weight_out = value;
            }
        }
        Ok(true)
    }

    /// Leitet alle Handles aus den Nachbarpositionen ab.
    ///
    /// Smooth: `handle_out = pos + (next − prev)·k`, `handle_in = pos − (next − prev)·k`.
    /// Corner: Handles auf die Position.
    pub fn auto_derive_handles(&mut self) {
        for i in 0..self.nodes.len() {
            match self.nodes[i].continuity {
                Continuity::Corner => self.nodes[i].collapse_handles(),
                Continuity::Smooth => self.derive_node_handles(i),
            }
        }
    }

    fn derive_node_handles(&mut self, index: usize) {
        let prev = self.nodes[self.prev_index(index)].position;
        let next = self.nodes[self.next_index(index)].position;
        let tangent = (next - prev) * self.tangent_scale;
        let node = &mut self.nodes[index];
        node.handle_in = node.position - tangent;
        node.handle_out = node.position + tangent;
    }

    /// Mutabler Zugriff für den Morph-Animator.
    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Prüft, ob `other` dieselbe Topologie (Node-Anzahl) hat.
    pub fn check_topology(&self, other: &NodeModel) -> Result<(), ModelError> {
        if self.nodes.len() == other.nodes.len() {
            Ok(())
        } else {
            Err(ModelError::TopologyMismatch {
                expected: self.nodes.len(),
                actual: other.nodes.len(),
            })
        }
    }

    /// Größte Feld-Abweichung gegenüber einem topologisch gleichen Modell.
    pub fn max_deviation(&self, other: &NodeModel) -> Result<f32, ModelError> {
        self.check_topology(other)?;
        Ok(self
            .nodes
            .iter()
            .zip(&other.nodes)
            .map(|(a, b)| a.max_deviation(b))
            .fold(0.0, f32::max))
    }

    /// Positionen aller Nodes in Reihenfolge.
    pub fn positions(&self) -> Vec<Vec2> {
        self.nodes.iter().map(|n| n.position).collect()
    }
}
