//! Builder für Kontur-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{sample_outline, CurveScheme};
use crate::shared::{NodeFrame, OutlineScene, SkeletonOverlay};

/// Baut eine OutlineScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> OutlineScene {
    let skeleton = state.view.show_skeleton.then(|| match state.curve.scheme {
        CurveScheme::Cardinal => {
            let mut polygon = state.model.positions();
            polygon.push(polygon[0]);
            SkeletonOverlay::ControlPolygon(polygon)
        }
        CurveScheme::RationalCubic => SkeletonOverlay::HandleFrames(
            state
                .model
                .nodes()
                .iter()
                .map(|node| NodeFrame {
                    position: node.position,
                    handle_in: node.handle_in,
                    handle_out: node.handle_out,
                    continuity: node.continuity,
                })
                .collect(),
        ),
    });

    OutlineScene {
        outline: sample_outline(&state.model, &state.curve),
        skeleton,
        scheme: state.curve.scheme,
        selection: state.selection.current,
        selected_weight: state.selected_weight(),
        view: state.view.transform,
        morphing: state.is_morphing(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::CurveScheme;
    use crate::shared::SkeletonOverlay;

    #[test]
    fn build_samples_closed_outline() {
        let state = AppState::new();
        let scene = build(&state);
        assert_eq!(scene.outline.len(), 14 * 40 + 1);
        assert!(!scene.morphing);
        assert!(scene.selected_weight.is_none());
    }

    #[test]
    fn skeleton_follows_scheme_and_visibility() {
        let mut state = AppState::new();
        assert!(matches!(
            build(&state).skeleton,
            Some(SkeletonOverlay::HandleFrames(ref frames)) if frames.len() == 14
        ));

        state.curve.scheme = CurveScheme::Cardinal;
        match build(&state).skeleton {
            Some(SkeletonOverlay::ControlPolygon(polygon)) => {
                assert_eq!(polygon.len(), 15);
                assert_eq!(polygon.first(), polygon.last());
            }
            other => panic!("Unerwartetes Skelett: {other:?}"),
        }

        state.view.show_skeleton = false;
        assert!(!build(&state).has_skeleton());
    }

    #[test]
    fn outline_on_screen_follows_view() {
        let mut state = AppState::new();
        state.view.transform.pan(glam::Vec2::new(30.0, -12.0));
        state.view.transform.rotation_deg = 90.0;
        let scene = build(&state);

        let screen = scene.outline_on_screen();
        assert_eq!(screen.len(), scene.outline.len());
        let first = state.view.transform.to_screen(state.model.nodes()[0].position);
        assert!((screen[0] - first).length() < 1e-4);
        assert!(screen
            .iter()
            .zip(&scene.outline)
            .all(|(&s, &p)| (s - state.view.transform.to_screen(p)).length() < 1e-4));
    }
}
