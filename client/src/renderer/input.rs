use libgame::{config::LifeConfig, intent::Intent};
use winit::{
    event::{ElementState, MouseButton, WindowEvent},
    keyboard::{Key, ModifiersState, NamedKey},
};

/// Turns raw window events into game intents. Actions fire on release, the
/// way key-up and button-up work in most editors.
#[derive(Debug, Default)]
pub struct InputMapper {
    modifiers: ModifiersState,
}

impl InputMapper {
    pub fn map(
        &mut self,
        event: &WindowEvent,
        cursor: Option<[u32; 2]>,
        config: &LifeConfig,
    ) -> Option<Intent> {
        match event {
            WindowEvent::CloseRequested => Some(Intent::Quit),

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                None
            }

            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => cursor.map(|[x, y]| Intent::ToggleAt { x, y }),

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Released => {
                key_intent(&event.logical_key, self.modifiers.control_key(), config)
            }

            _ => None,
        }
    }
}

pub fn key_intent(key: &Key, ctrl: bool, config: &LifeConfig) -> Option<Intent> {
    let tempo_step = config.tempo_step as i64;

    match key {
        Key::Character(c) if c.eq_ignore_ascii_case("s") => Some(if ctrl {
            Intent::Save(config.save_path.clone())
        } else {
            Intent::StepOnce
        }),
        Key::Character(c) if ctrl && c.eq_ignore_ascii_case("l") => {
            Some(Intent::Load(config.save_path.clone()))
        }
        Key::Character(c) if c.eq_ignore_ascii_case("r") => Some(Intent::Reset),
        Key::Named(NamedKey::Space) => Some(Intent::TogglePlay),
        // Left slows the simulation down, right speeds it up.
        Key::Named(NamedKey::ArrowLeft) => Some(Intent::AdjustTempo(tempo_step)),
        Key::Named(NamedKey::ArrowRight) => Some(Intent::AdjustTempo(-tempo_step)),
        _ => None,
    }
}
