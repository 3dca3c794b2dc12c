//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{
    CurveSettings, HandleSide, MorphAnimator, NodeModel, Selection, ViewTransform,
};
use crate::shared::EditorOptions;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Laufender Pointer-Drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragMode {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Node wird starr verschoben; `grab_offset` = Greifpunkt − Position (logisch)
    Node { index: usize, grab_offset: Vec2 },
    /// Handle folgt dem Pointer
    Handle { index: usize, side: HandleSide },
    /// Ansicht wird verschoben; letzte Pointer-Position in Bildschirm-Koordinaten
    Pan { last_screen: Vec2 },
}

/// Wohin der Morph läuft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MorphTarget {
    /// Regelmäßiger Kreis mit gleicher Node-Anzahl
    #[default]
    Circle,
    /// Zurück zur Kontur vom Sitzungsstart
    Original,
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Exklusive Selektion (Node-Teil oder keine)
    pub current: Selection,
    /// Aktueller Drag
    pub drag: DragMode,
    /// Ziel-Node des Kontextmenüs
    pub context_node: Option<usize>,
}

impl SelectionState {
    /// Hebt Selektion, Drag und Kontext-Node auf.
    pub fn clear(&mut self) {
        self.current = Selection::NONE;
        self.drag = DragMode::Idle;
        self.context_node = None;
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Pan/Zoom/Rotation
    pub transform: ViewTransform,
    /// Skelett (Kontrollpolygon bzw. Handles) sichtbar
    pub show_skeleton: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new(show_skeleton: bool) -> Self {
        Self {
            transform: ViewTransform::default(),
            show_skeleton,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Editierbare Kontur
    pub model: NodeModel,
    /// Kontur vom Sitzungsstart (Reset und Rück-Morph)
    pub initial_model: NodeModel,
    /// Kreis-Ziel, einmal beim Start berechnet
    pub circle_target: NodeModel,
    /// Aktuelles Morph-Ziel
    pub morph_target: MorphTarget,
    /// Morph-Zustandsmaschine
    pub morph: MorphAnimator,
    /// Kurven-Evaluator-Konfiguration
    pub curve: CurveSettings,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt den Standard-Zustand mit Default-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt den Zustand für die gegebenen Optionen (Silhouette als Start-Kontur).
    pub fn with_options(options: EditorOptions) -> Self {
        let mut model = NodeModel::silhouette()
            .with_tangent_scale(options.tangent_scale)
            .with_weight_config(options.weight_scheme, options.weight_min, options.weight_max);
        model.auto_derive_handles();
        let circle_target = model.circle_target(options.target_circle_radius);

        Self {
            initial_model: model.clone(),
            circle_target,
            model,
            morph_target: MorphTarget::default(),
            morph: MorphAnimator::new(options.morph_smoothing),
            curve: options.curve_settings(),
            view: ViewState::new(options.show_skeleton),
            selection: SelectionState::default(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Das aktuell gewählte Morph-Ziel.
    pub fn active_morph_target(&self) -> &NodeModel {
        match self.morph_target {
            MorphTarget::Circle => &self.circle_target,
            MorphTarget::Original => &self.initial_model,
        }
    }

    /// Läuft gerade ein Morph? (Interaktive Selektion ist dann gesperrt.)
    pub fn is_morphing(&self) -> bool {
        self.morph.is_running()
    }

    /// Gewicht des selektierten Teils (für das Info-Panel).
    pub fn selected_weight(&self) -> Option<f32> {
        let index = self.selection.current.node_index?;
        let component = self.selection.current.part.weight_component()?;
        self.model.node(index).map(|node| node.weight(component))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
