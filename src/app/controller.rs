//! Application Controller für zentrale Event-Verarbeitung.

use super::observer::{SelectionChange, SelectionObserver};
use super::scene;
use super::{AppCommand, AppIntent, AppState};
use crate::core::Selection;
use crate::shared::OutlineScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController {
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Beobachter für Selektionswechsel.
    pub fn subscribe(&mut self, observer: impl SelectionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Beobachter werden auch dann benachrichtigt, wenn ein späterer Command
    /// des Intents fehlschlägt.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let before = state.selection.current;
        let commands = self.map_intent_to_commands(state, intent);
        let result = commands
            .into_iter()
            .try_for_each(|command| self.handle_command(state, command));
        self.notify_if_changed(state, before);
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Ansicht ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ZoomView {
                factor,
                focus_screen,
            } => handlers::view::zoom_about(state, factor, focus_screen),
            AppCommand::SetViewParams {
                offset,
                rotation_deg,
                scale,
            } => handlers::view::set_params(state, offset, rotation_deg, scale)?,
            AppCommand::ResetView => handlers::view::reset(state),

            // === Selektion & Drag ===
            AppCommand::HitTestAt { screen_pos } => {
                handlers::selection::hit_test_at(state, screen_pos)
            }
            AppCommand::BeginPan { screen_pos } => handlers::selection::begin_pan(state, screen_pos),
            AppCommand::DragSelectionTo { screen_pos } => {
                handlers::selection::drag_to(state, screen_pos)?
            }
            AppCommand::DragPanTo { screen_pos } => handlers::selection::pan_to(state, screen_pos),
            AppCommand::EndDrag => handlers::selection::end_drag(state),
            AppCommand::PickContextNode { screen_pos } => {
                handlers::selection::pick_context_node(state, screen_pos)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Editing ===
            AppCommand::SetTension { value } => handlers::editing::set_tension(state, value)?,
            AppCommand::SetSelectedWeight { value } => {
                handlers::editing::set_selected_weight(state, value)?
            }
            AppCommand::SetNodeContinuity {
                node_index,
                continuity,
            } => handlers::editing::set_node_continuity(state, node_index, continuity)?,
            AppCommand::SetSkeletonVisible { visible } => {
                handlers::editing::set_skeleton_visible(state, visible)
            }
            AppCommand::SetCurveScheme { scheme } => {
                handlers::editing::set_curve_scheme(state, scheme)
            }
            AppCommand::ResetOutline => handlers::editing::reset_outline(state),

            // === Animation ===
            AppCommand::StartMorph { target } => handlers::animation::start(state, target)?,
            AppCommand::StopMorph => handlers::animation::stop(state),
            AppCommand::AdvanceMorph => handlers::animation::advance(state)?,
        }

        Ok(())
    }

    /// Baut die Szene für den Renderer und das Info-Panel.
    pub fn build_scene(&self, state: &AppState) -> OutlineScene {
        scene::build(state)
    }

    fn notify_if_changed(&mut self, state: &AppState, before: Selection) {
        let selection = state.selection.current;
        if selection == before || self.observers.is_empty() {
            return;
        }
        let continuity = selection
            .node_index
            .and_then(|i| state.model.node(i))
            .map(|node| node.continuity);
        let change = SelectionChange {
            selection,
            weight: state.selected_weight(),
            continuity,
        };
        log::debug!("Selektionswechsel an {} Beobachter", self.observers.len());
        for observer in &mut self.observers {
            observer.selection_changed(&change);
        }
    }
}
