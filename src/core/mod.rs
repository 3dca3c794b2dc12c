//! Core-Domänentypen: Nodes, Kontur-Modell, Kurven-Evaluator, Hit-Test, Morph.

pub mod curve;
mod error;
pub mod geometry;
pub mod hit_test;
pub mod morph;
/// Kontur-Datenmodell
///
/// - Node: Anker mit Handles, Stetigkeit und Gewichten
/// - NodeModel: zyklische Node-Sequenz mit Constraint-Engine
pub mod node;
pub mod node_model;
pub mod view_transform;

pub use curve::{
    cardinal_point, rational_cubic_point, sample_outline, CardinalSegment, CurveScheme,
    CurveSettings, RationalSegment, SegmentCurve, SegmentSamples,
};
pub use error::ModelError;
pub use geometry::{DistanceMetric, Point2D};
pub use hit_test::{
    hit_test, nearest_node_on_screen, HitTestParams, RadiusSpace, Selection, SelectionPart,
};
pub use morph::{MorphAnimator, MorphState};
pub use node::{Continuity, HandleSide, Node, WeightComponent};
pub use node_model::{NodeModel, WeightScheme};
pub use view_transform::ViewTransform;
