use crate::app::state::MorphTarget;
use crate::core::{Continuity, CurveScheme};
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Ansicht ===
    /// Viewport-Größe setzen
    SetViewportSize { size: Vec2 },
    /// Um einen Bildschirmpunkt zoomen
    ZoomView { factor: f32, focus_screen: Vec2 },
    /// Offset, Rotation und Skalierung direkt setzen
    SetViewParams {
        offset: Vec2,
        rotation_deg: f32,
        scale: Vec2,
    },
    /// Ansicht zurücksetzen
    ResetView,

    // === Selektion & Drag ===
    /// Hit-Test am Bildschirmpunkt; Treffer startet Drag, sonst Pan
    HitTestAt { screen_pos: Vec2 },
    /// Pan-Drag starten, ohne Hit-Test
    BeginPan { screen_pos: Vec2 },
    /// Selektierten Node bzw. Handle an die Pointer-Position ziehen
    DragSelectionTo { screen_pos: Vec2 },
    /// Pan-Drag fortsetzen
    DragPanTo { screen_pos: Vec2 },
    /// Laufenden Drag beenden (Selektion bleibt)
    EndDrag,
    /// Nächsten Node für das Kontextmenü bestimmen
    PickContextNode { screen_pos: Vec2 },
    /// Selektion aufheben
    ClearSelection,

    // === Editing ===
    /// Tension setzen
    SetTension { value: f32 },
    /// Gewicht des selektierten Teils setzen
    SetSelectedWeight { value: f32 },
    /// Stetigkeit eines Nodes setzen
    SetNodeContinuity {
        node_index: usize,
        continuity: Continuity,
    },
    /// Skelett-Sichtbarkeit setzen
    SetSkeletonVisible { visible: bool },
    /// Auswertungs-Verfahren setzen
    SetCurveScheme { scheme: CurveScheme },
    /// Kontur auf den Sitzungsstart zurücksetzen
    ResetOutline,

    // === Animation ===
    /// Morph zum Ziel starten
    StartMorph { target: MorphTarget },
    /// Morph anhalten
    StopMorph,
    /// Einen Morph-Tick ausführen
    AdvanceMorph,
}
