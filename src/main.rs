//! Kontur-Editor (Headless-Demo).
//!
//! Spielt eine feste Bearbeitungs- und Morph-Sequenz über den Controller ab
//! und gibt die abgetastete Kontur als JSON aus. Fenster und Renderer sind
//! externe Kollaborateure und nicht Teil dieses Programms.

use glam::Vec2;
use outline_editor::{
    AppController, AppIntent, AppState, Continuity, CurveScheme, EditorOptions, MorphTarget,
    PointerButton,
};

/// Anzahl der Timer-Ticks der Demo-Animation.
const DEMO_MORPH_TICKS: usize = 60;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Kontur-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();
    controller.subscribe(|change: &outline_editor::SelectionChange| {
        log::info!(
            "Info-Panel: Selektion {:?}, Gewicht {:?}",
            change.selection,
            change.weight
        );
    });

    for intent in demo_script(&state) {
        if let Err(e) = controller.handle_intent(&mut state, intent.clone()) {
            log::warn!("Intent {:?} fehlgeschlagen: {:#}", intent, e);
        }
    }

    let scene = controller.build_scene(&state);
    log::info!(
        "Kontur mit {} Punkten ({:?}), Morph-Ticks: {}",
        scene.outline.len(),
        scene.scheme,
        state.morph.ticks()
    );
    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}

/// Feste Eingabesequenz: Handle ziehen, Gewicht setzen, Stetigkeit umschalten,
/// Zoom, Verfahren wechseln und zum Kreis morphen.
fn demo_script(state: &AppState) -> Vec<AppIntent> {
    let view = state.view.transform;
    let node = state.model.nodes()[6];
    let handle_screen = view.to_screen(node.handle_out);
    let drag_target = view.to_screen(node.handle_out + Vec2::new(15.0, -10.0));
    let corner_screen = view.to_screen(state.model.nodes()[3].position);

    let mut script = vec![
        AppIntent::ViewportResized {
            size: view.viewport_size(),
        },
        AppIntent::PointerPressed {
            screen_pos: handle_screen,
            button: PointerButton::Primary,
        },
        AppIntent::PointerMoved {
            screen_pos: drag_target,
            button_held: Some(PointerButton::Primary),
        },
        AppIntent::PointerReleased,
        AppIntent::WeightChanged { value: 4.0 },
        AppIntent::PointerPressed {
            screen_pos: corner_screen,
            button: PointerButton::Secondary,
        },
        AppIntent::ContextContinuityChosen {
            continuity: Continuity::Smooth,
        },
        AppIntent::Scrolled {
            screen_pos: view.viewport_center(),
            delta: 1.0,
        },
        AppIntent::CurveSchemeChanged {
            scheme: CurveScheme::RationalCubic,
        },
        AppIntent::MorphStartRequested {
            target: MorphTarget::Circle,
        },
    ];
    script.extend(std::iter::repeat(AppIntent::AnimationTick).take(DEMO_MORPH_TICKS));
    script.push(AppIntent::MorphStopRequested);
    script
}
