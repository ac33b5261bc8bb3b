//! Keyboard commands
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use stlview_core::Camera;

use crate::config::ViewerConfig;

/// Key actions for the viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    None,
    Quit,
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    Up,
    Down,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
    FovUp,
    FovDown,
}

/// Parse keyboard input into actions
pub fn parse_key_event(event: KeyEvent) -> Action {
    if event.kind == KeyEventKind::Release {
        return Action::None;
    }
    // Raw mode swallows SIGINT
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match event.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Action::Forward,
            's' => Action::Back,
            'a' => Action::StrafeLeft,
            'd' => Action::StrafeRight,
            'r' => Action::Up,
            'f' => Action::Down,
            'q' => Action::RollLeft,
            'e' => Action::RollRight,
            'o' => Action::FovUp,
            'p' => Action::FovDown,
            'x' => Action::Quit,
            _ => Action::None,
        },
        KeyCode::Left => Action::YawLeft,
        KeyCode::Right => Action::YawRight,
        KeyCode::Up => Action::PitchUp,
        KeyCode::Down => Action::PitchDown,
        KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

impl Action {
    /// Apply this action to the camera. Quit and None leave it unchanged.
    pub fn apply(self, camera: &mut Camera, config: &ViewerConfig) {
        let step = config.move_step;
        let turn = config.turn_step;
        match self {
            Action::Forward => camera.advance(step),
            Action::Back => camera.advance(-step),
            Action::StrafeLeft => camera.strafe(-step),
            Action::StrafeRight => camera.strafe(step),
            Action::Up => camera.ascend(step),
            Action::Down => camera.ascend(-step),
            Action::YawLeft => camera.yaw -= turn,
            Action::YawRight => camera.yaw += turn,
            Action::PitchUp => camera.pitch = (camera.pitch - turn).max(-config.max_pitch),
            Action::PitchDown => camera.pitch = (camera.pitch + turn).min(config.max_pitch),
            Action::RollLeft => camera.roll += turn,
            Action::RollRight => camera.roll -= turn,
            Action::FovUp => camera.fov += config.fov_step,
            Action::FovDown => camera.fov -= config.fov_step,
            Action::Quit | Action::None => {}
        }
    }
}
