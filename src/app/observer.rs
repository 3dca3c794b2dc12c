//! Beobachter-Schnittstelle für Selektionswechsel (z.B. Info-Panel).

use crate::core::{Continuity, Selection};

/// Was ein Panel nach einem Selektionswechsel anzeigen muss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionChange {
    pub selection: Selection,
    /// Gewicht des selektierten Teils (`None` = Eingabefeld deaktivieren)
    pub weight: Option<f32>,
    pub continuity: Option<Continuity>,
}

/// Empfänger von Selektionswechseln.
pub trait SelectionObserver {
    fn selection_changed(&mut self, change: &SelectionChange);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&SelectionChange),
{
    fn selection_changed(&mut self, change: &SelectionChange) {
        self(change)
    }
}
