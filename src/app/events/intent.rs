use crate::app::state::MorphTarget;
use crate::core::{Continuity, CurveScheme};
use glam::Vec2;

/// Maustaste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste: Selektion und Drag
    Primary,
    /// Rechte Taste: Kontextmenü (Stetigkeit)
    Secondary,
    /// Mittlere Taste: immer Pan
    Middle,
}

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Taste über dem Canvas gedrückt (Bildschirm-Koordinaten)
    PointerPressed { screen_pos: Vec2, button: PointerButton },
    /// Pointer bewegt; `button_held` ist die noch gedrückte Taste
    PointerMoved {
        screen_pos: Vec2,
        button_held: Option<PointerButton>,
    },
    /// Taste losgelassen
    PointerReleased,
    /// Mausrad (positive `delta` = hineinzoomen, in Rasten)
    Scrolled { screen_pos: Vec2, delta: f32 },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: Vec2 },
    /// Ansicht direkt über das Parameter-Panel setzen
    ViewParamsChanged {
        offset: Vec2,
        rotation_deg: f32,
        scale: Vec2,
    },
    /// Ansicht zurücksetzen
    ResetViewRequested,
    /// Tension-Regler geändert
    TensionChanged { value: f32 },
    /// Gewicht des selektierten Teils im Info-Panel geändert
    WeightChanged { value: f32 },
    /// Eintrag im Kontextmenü gewählt (gilt für den Kontext-Node)
    ContextContinuityChosen { continuity: Continuity },
    /// Stetigkeit eines Nodes direkt setzen
    ContinuityToggleRequested {
        node_index: usize,
        continuity: Continuity,
    },
    /// Skelett ein-/ausblenden
    SkeletonVisibilityChanged { visible: bool },
    /// Auswertungs-Verfahren wechseln
    CurveSchemeChanged { scheme: CurveScheme },
    /// Morph starten
    MorphStartRequested { target: MorphTarget },
    /// Morph anhalten
    MorphStopRequested,
    /// Timer-Tick des Hosts
    AnimationTick,
    /// Kontur auf den Sitzungsstart zurücksetzen
    OutlineResetRequested,
    /// Selektion explizit aufheben
    ClearSelectionRequested,
}
