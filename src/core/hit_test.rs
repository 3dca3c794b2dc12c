//! Hit-Test: Bildschirmpunkt → Node-/Handle-Selektion.
//!
//! Handles haben Vorrang vor Node-Positionen; innerhalb einer Gruppe gewinnt
//! der erste Treffer in Index-Reihenfolge. Handles von Corner-Nodes liegen auf
//! der Position und werden übersprungen, damit der Node selbst gegriffen wird.

use super::geometry::DistanceMetric;
use super::{Continuity, HandleSide, NodeModel, ViewTransform, WeightComponent};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Welcher Teil eines Nodes ist selektiert?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SelectionPart {
    Position,
    HandleIn,
    HandleOut,
    #[default]
    None,
}

impl SelectionPart {
    /// Handle-Seite, falls ein Handle selektiert ist.
    pub fn handle_side(self) -> Option<HandleSide> {
        match self {
            Self::HandleIn => Some(HandleSide::In),
            Self::HandleOut => Some(HandleSide::Out),
            Self::Position | Self::None => None,
        }
    }

    /// Zugehöriges Gewicht für das Info-Panel.
    pub fn weight_component(self) -> Option<WeightComponent> {
        match self {
            Self::Position => Some(WeightComponent::Position),
            Self::HandleIn => Some(WeightComponent::In),
            Self::HandleOut => Some(WeightComponent::Out),
            Self::None => None,
        }
    }
}

/// Aktuelle exklusive Selektion (höchstens ein Node-Teil).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    pub node_index: Option<usize>,
    pub part: SelectionPart,
}

impl Selection {
    /// Keine Selektion (Pan-Modus).
    pub const NONE: Self = Self {
        node_index: None,
        part: SelectionPart::None,
    };

    pub fn new(node_index: usize, part: SelectionPart) -> Self {
        Self {
            node_index: Some(node_index),
            part,
        }
    }

    pub fn is_none(&self) -> bool {
        self.node_index.is_none()
    }
}

/// In welchem Raum werden die Pick-Radien gemessen?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RadiusSpace {
    /// Radien in logischen Einheiten (skalieren mit dem Zoom)
    #[default]
    Logical,
    /// Radien in Bildschirm-Pixeln (zoom-unabhängig)
    Screen,
}

/// Parameter eines Hit-Tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTestParams {
    pub handle_radius: f32,
    pub node_radius: f32,
    /// Handles nur prüfen, wenn das Skelett sichtbar ist
    pub show_handles: bool,
    pub radius_space: RadiusSpace,
    pub metric: DistanceMetric,
}

impl Default for HitTestParams {
    fn default() -> Self {
        Self {
            handle_radius: 10.0,
            node_radius: 15.0,
            show_handles: true,
            radius_space: RadiusSpace::Logical,
            metric: DistanceMetric::Manhattan,
        }
    }
}

/// Löst einen Bildschirmpunkt in eine Selektion auf.
///
/// Liefert [`Selection::NONE`], wenn nichts getroffen wurde oder die
/// View-Transformation singulär ist.
pub fn hit_test(
    model: &NodeModel,
    view: &ViewTransform,
    screen_point: Vec2,
    params: &HitTestParams,
) -> Selection {
    let Some(logical) = view.to_logical(screen_point) else {
        log::debug!("Hit-Test übersprungen: View-Transformation singulär");
        return Selection::NONE;
    };

    let within = |candidate: Vec2, radius: f32| -> bool {
        let distance = match params.radius_space {
            RadiusSpace::Logical => params.metric.distance(candidate, logical),
            RadiusSpace::Screen => params
                .metric
                .distance(view.to_screen(candidate), screen_point),
        };
        distance < radius
    };

    if params.show_handles {
        for (i, node) in model.nodes().iter().enumerate() {
            if node.continuity == Continuity::Corner {
                continue;
            }
            if within(node.handle_in, params.handle_radius) {
                return Selection::new(i, SelectionPart::HandleIn);
            }
            if within(node.handle_out, params.handle_radius) {
                return Selection::new(i, SelectionPart::HandleOut);
            }
        }
    }

    model
        .nodes()
        .iter()
        .position(|node| within(node.position, params.node_radius))
        .map(|i| Selection::new(i, SelectionPart::Position))
        .unwrap_or(Selection::NONE)
}

/// Nächster Node innerhalb von `radius_px` Bildschirm-Pixeln (Kontextmenü).
///
/// Anders als [`hit_test`] gewinnt hier der nächstgelegene Node, nicht der erste.
pub fn nearest_node_on_screen(
    model: &NodeModel,
    view: &ViewTransform,
    screen_point: Vec2,
    radius_px: f32,
    metric: DistanceMetric,
) -> Option<usize> {
    model
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, node)| (i, metric.distance(view.to_screen(node.position), screen_point)))
        .filter(|&(_, distance)| distance < radius_px)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Node;

    /// Identitäts-Ansicht: Bildschirm = (x, −y) um den Ursprung.
    fn view() -> ViewTransform {
        ViewTransform::new(Vec2::ZERO)
    }

    fn screen(p: Vec2) -> Vec2 {
        Vec2::new(p.x, -p.y)
    }

    fn model() -> NodeModel {
        let mut smooth = Node::new(Vec2::new(0.0, 0.0), Continuity::Smooth);
        smooth.handle_in = Vec2::new(-8.0, 0.0);
        smooth.handle_out = Vec2::new(8.0, 0.0);
        NodeModel::from_nodes(vec![
            smooth,
            Node::new(Vec2::new(100.0, 0.0), Continuity::Corner),
            Node::new(Vec2::new(100.0, 100.0), Continuity::Corner),
            Node::new(Vec2::new(104.0, 100.0), Continuity::Corner),
        ])
        .unwrap()
    }

    #[test]
    fn test_handle_wins_over_position() {
        let sel = hit_test(&model(), &view(), screen(Vec2::new(6.0, 0.0)), &HitTestParams::default());
        assert_eq!(sel, Selection::new(0, SelectionPart::HandleOut));
    }

    #[test]
    fn test_hidden_handles_fall_back_to_position() {
        let params = HitTestParams {
            show_handles: false,
            ..HitTestParams::default()
        };
        let sel = hit_test(&model(), &view(), screen(Vec2::new(6.0, 0.0)), &params);
        assert_eq!(sel, Selection::new(0, SelectionPart::Position));
    }

    #[test]
    fn test_corner_node_grabbed_by_position() {
        let sel = hit_test(&model(), &view(), screen(Vec2::new(101.0, 1.0)), &HitTestParams::default());
        assert_eq!(sel, Selection::new(1, SelectionPart::Position));
    }

    #[test]
    fn test_first_match_wins_in_index_order() {
        let sel = hit_test(&model(), &view(), screen(Vec2::new(103.0, 100.0)), &HitTestParams::default());
        assert_eq!(sel, Selection::new(2, SelectionPart::Position));
    }

    #[test]
    fn test_miss_clears_selection() {
        let sel = hit_test(&model(), &view(), screen(Vec2::new(50.0, 50.0)), &HitTestParams::default());
        assert!(sel.is_none());
        assert_eq!(sel.part, SelectionPart::None);
    }

    #[test]
    fn test_manhattan_radius_is_strict() {
        // |dx| + |dy| = 15 = node_radius → kein Treffer
        let sel = hit_test(&model(), &view(), screen(Vec2::new(110.0, -5.0)), &HitTestParams::default());
        assert!(sel.is_none());
        let params = HitTestParams {
            metric: DistanceMetric::Euclidean,
            ..HitTestParams::default()
        };
        let sel = hit_test(&model(), &view(), screen(Vec2::new(110.0, -5.0)), &params);
        assert_eq!(sel, Selection::new(1, SelectionPart::Position));
    }

    #[test]
    fn test_singular_view_yields_no_selection() {
        let mut v = view();
        v.scale = Vec2::ZERO;
        let sel = hit_test(&model(), &v, Vec2::ZERO, &HitTestParams::default());
        assert_eq!(sel, Selection::NONE);
    }

    #[test]
    fn test_screen_radius_space_ignores_zoom() {
        let mut v = view();
        v.scale = Vec2::splat(4.0);
        // logisch 3 Einheiten neben Node 1 → 12 Pixel auf dem Bildschirm
        let query = v.to_screen(Vec2::new(103.0, 0.0));
        let logical = HitTestParams {
            show_handles: false,
            ..HitTestParams::default()
        };
        assert_eq!(
            hit_test(&model(), &v, query, &logical),
            Selection::new(1, SelectionPart::Position)
        );
        let screen_space = HitTestParams {
            radius_space: RadiusSpace::Screen,
            ..logical
        };
        assert_eq!(
            hit_test(&model(), &v, query, &screen_space),
            Selection::new(1, SelectionPart::Position)
        );
        let query = v.to_screen(Vec2::new(105.0, 0.0));
        assert!(hit_test(&model(), &v, query, &screen_space).is_none());
    }

    #[test]
    fn test_nearest_node_on_screen_picks_closest() {
        let m = model();
        let v = view();
        let hit = nearest_node_on_screen(&m, &v, screen(Vec2::new(103.0, 100.0)), 20.0, DistanceMetric::Manhattan);
        assert_eq!(hit, Some(3));
        let miss = nearest_node_on_screen(&m, &v, screen(Vec2::new(50.0, 50.0)), 20.0, DistanceMetric::Manhattan);
        assert_eq!(miss, None);
    }

    #[test]
    fn test_selection_part_mapping() {
        assert_eq!(SelectionPart::HandleIn.handle_side(), Some(HandleSide::In));
        assert_eq!(SelectionPart::Position.handle_side(), None);
        assert_eq!(
            SelectionPart::HandleOut.weight_component(),
            Some(WeightComponent::Out)
        );
        assert_eq!(SelectionPart::None.weight_component(), None);
    }
}
