//! Interaktiver Kontur-Editor (Cardinal-Spline / rationale Bézier-Kurven).
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, MorphTarget, PointerButton, SelectionChange,
    SelectionObserver,
};
pub use core::{
    Continuity, CurveScheme, CurveSettings, HandleSide, ModelError, Node, NodeModel, Selection,
    SelectionPart, ViewTransform, WeightComponent, WeightScheme,
};
pub use shared::{EditorOptions, OutlineScene, SkeletonOverlay};
