use exo_core::{
    CameraView, Configurator, GestureConfig, GestureInterpreter, GestureState, HandFrame,
    OrbitRig, Section, SuitNamer, UiAction, UiActions,
};
use crate::scroll::ScrollCarry;
use instant::Instant;

/// Shared between the detector callback, the RAF loop and DOM listeners.
pub struct AppState {
    pub interpreter: GestureInterpreter,
    pub configurator: Configurator,
    pub rig: OrbitRig,
    /// Latest gesture output; the RAF loop reads its velocities.
    pub gesture: GestureState,
    pub scroll: ScrollCarry,
    pub suit_name: String,
    pub version_id: String,
}

impl AppState {
    pub fn new() -> Self {
        let mut namer = SuitNamer::from_entropy();
        let suit_name = namer.suit_name();
        let version_id = namer.version_id();
        log::info!("[app] build {} v{}", suit_name, version_id);
        Self {
            interpreter: GestureInterpreter::new(GestureConfig::default()),
            configurator: Configurator::new(),
            rig: OrbitRig::new(),
            gesture: GestureState::default(),
            scroll: ScrollCarry::default(),
            suit_name,
            version_id,
        }
    }

    /// Run one detector frame through the interpreter and configurator.
    pub fn handle_frame(&mut self, frame: &HandFrame, now: Instant) -> UiActions {
        self.gesture = self.interpreter.process_frame(frame, now);
        let actions = self.configurator.apply_gesture(&self.gesture);
        if actions.contains(&UiAction::ResetCamera) {
            self.rig.reset();
        }
        actions
    }

    pub fn set_view(&mut self, view: CameraView) {
        self.configurator.set_view(view);
        self.rig.set_view(view);
    }

    pub fn reset_camera(&mut self) {
        self.configurator.reset_camera();
        self.rig.reset();
    }

    pub fn step_section(&mut self, step: i32) -> Section {
        let next = self.configurator.active_section.offset(step);
        self.configurator.select_section(next);
        next
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
