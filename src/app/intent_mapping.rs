//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Während eines Morphs gibt es keine Hit-Tests und keine Stetigkeits-Änderung
//! über das Kontextmenü; ein Klick startet dann nur einen Pan.

use super::state::DragMode;
use super::{AppCommand, AppIntent, AppState, PointerButton};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { screen_pos, button } => match button {
            PointerButton::Primary if state.is_morphing() => vec![
                AppCommand::ClearSelection,
                AppCommand::BeginPan { screen_pos },
            ],
            PointerButton::Primary => vec![AppCommand::HitTestAt { screen_pos }],
            PointerButton::Secondary if state.is_morphing() => vec![],
            PointerButton::Secondary => vec![AppCommand::PickContextNode { screen_pos }],
            PointerButton::Middle => vec![AppCommand::BeginPan { screen_pos }],
        },
        AppIntent::PointerMoved {
            screen_pos,
            button_held,
        } => {
            if button_held.is_none() {
                return vec![];
            }
            match state.selection.drag {
                DragMode::Idle => vec![],
                DragMode::Pan { .. } => vec![AppCommand::DragPanTo { screen_pos }],
                DragMode::Node { .. } | DragMode::Handle { .. } => {
                    vec![AppCommand::DragSelectionTo { screen_pos }]
                }
            }
        }
        AppIntent::PointerReleased => match state.selection.drag {
            DragMode::Idle => vec![],
            _ => vec![AppCommand::EndDrag],
        },
        AppIntent::Scrolled { screen_pos, delta } => {
            if delta == 0.0 || !delta.is_finite() {
                return vec![];
            }
            vec![AppCommand::ZoomView {
                factor: state.options.scroll_zoom_step.powf(delta),
                focus_screen: screen_pos,
            }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ViewParamsChanged {
            offset,
            rotation_deg,
            scale,
        } => vec![AppCommand::SetViewParams {
            offset,
            rotation_deg,
            scale,
        }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::TensionChanged { value } => vec![AppCommand::SetTension { value }],
        AppIntent::WeightChanged { value } => {
            if state.selection.current.is_none() {
                log::debug!("Gewichtsänderung ohne Selektion ignoriert");
                return vec![];
            }
            vec![AppCommand::SetSelectedWeight { value }]
        }
        AppIntent::ContextContinuityChosen { continuity } => {
            match (state.selection.context_node, state.is_morphing()) {
                (Some(node_index), false) => vec![AppCommand::SetNodeContinuity {
                    node_index,
                    continuity,
                }],
                _ => vec![],
            }
        }
        AppIntent::ContinuityToggleRequested {
            node_index,
            continuity,
        } => {
            if state.is_morphing() {
                return vec![];
            }
            vec![AppCommand::SetNodeContinuity {
                node_index,
                continuity,
            }]
        }
        AppIntent::SkeletonVisibilityChanged { visible } => {
            vec![AppCommand::SetSkeletonVisible { visible }]
        }
        AppIntent::CurveSchemeChanged { scheme } => vec![AppCommand::SetCurveScheme { scheme }],
        AppIntent::MorphStartRequested { target } => vec![AppCommand::StartMorph { target }],
        AppIntent::MorphStopRequested => vec![AppCommand::StopMorph],
        AppIntent::AnimationTick => {
            if state.is_morphing() {
                vec![AppCommand::AdvanceMorph]
            } else {
                vec![]
            }
        }
        AppIntent::OutlineResetRequested => vec![AppCommand::ResetOutline],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
    }
}
