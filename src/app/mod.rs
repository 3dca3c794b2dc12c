//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod observer;
pub mod scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kontur, View, Selektion, Morph).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PointerButton};
pub use observer::{SelectionChange, SelectionObserver};
pub use scene::build as build_scene;
pub use state::{AppState, DragMode, MorphTarget, SelectionState, ViewState};
