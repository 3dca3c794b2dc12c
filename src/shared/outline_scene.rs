//! Kontur-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der (externe) Renderer bzw.
//! das Info-Panel sie konsumieren.

use crate::core::{Continuity, CurveScheme, Selection, ViewTransform};
use glam::Vec2;
use serde::Serialize;

/// Lokaler Rahmen eines Nodes für das Skelett-Overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeFrame {
    pub position: Vec2,
    pub handle_in: Vec2,
    pub handle_out: Vec2,
    pub continuity: Continuity,
}

/// Skelett-Overlay je nach Auswertungs-Verfahren.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SkeletonOverlay {
    /// Geschlossenes Kontrollpolygon durch alle Node-Positionen (Cardinal)
    ControlPolygon(Vec<Vec2>),
    /// Node-Positionen mit ihren Handles (rational)
    HandleFrames(Vec<NodeFrame>),
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone, Serialize)]
pub struct OutlineScene {
    /// Abgetastete, geschlossene Kontur (letzter Punkt = erster Punkt)
    pub outline: Vec<Vec2>,
    /// Skelett-Overlay (`None` wenn ausgeblendet)
    pub skeleton: Option<SkeletonOverlay>,
    /// Aktive Auswertung
    pub scheme: CurveScheme,
    /// Aktuelle Selektion für Hervorhebung und Info-Panel
    pub selection: Selection,
    /// Gewicht des selektierten Teils
    pub selected_weight: Option<f32>,
    /// View-Transformation für Gitter und Achsen
    #[serde(skip)]
    pub view: ViewTransform,
    /// Läuft gerade ein Morph?
    pub morphing: bool,
}

impl OutlineScene {
    /// Gibt zurück, ob ein Skelett gezeichnet werden soll.
    pub fn has_skeleton(&self) -> bool {
        self.skeleton.is_some()
    }

    /// Kontur auf den Bildschirm abgebildet.
    pub fn outline_on_screen(&self) -> Vec<Vec2> {
        self.outline.iter().map(|&p| self.view.to_screen(p)).collect()
    }
}
