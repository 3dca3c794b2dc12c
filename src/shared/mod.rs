//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem externen Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod outline_scene;

pub use options::EditorOptions;
pub use outline_scene::{NodeFrame, OutlineScene, SkeletonOverlay};
