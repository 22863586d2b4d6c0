use std::time::Duration;

/// Discrete notifications raised by the simulation for the audio side.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    Moved,
    AteApple,
    AteGolden,
    AteSpeed,
    AteGhost,
    AteBomb,
    Died,
    MenuNavigate,
    ConfirmSelect,
}

/// A square-wave cue: pitch, length and relative volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration: Duration,
    pub volume: f32,
}

const fn tone(frequency_hz: f32, duration_ms: u64, volume: f32) -> Tone {
    Tone {
        frequency_hz,
        duration: Duration::from_millis(duration_ms),
        volume,
    }
}

pub const TONE_EAT: Tone = tone(440.0, 100, 1.0);
pub const TONE_DEATH: Tone = tone(110.0, 500, 1.0);
pub const TONE_MOVE: Tone = tone(220.0, 20, 0.05);
pub const TONE_LEVEL_UP: Tone = tone(880.0, 300, 1.0);
pub const TONE_MENU: Tone = tone(660.0, 150, 1.0);
pub const TONE_SELECT: Tone = tone(523.0, 200, 1.0);

impl GameEvent {
    /// The retro cue played for this event.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Moved => TONE_MOVE,
            Self::AteApple => TONE_EAT,
            Self::AteGolden => TONE_LEVEL_UP,
            Self::AteSpeed | Self::MenuNavigate => TONE_MENU,
            Self::AteGhost | Self::ConfirmSelect => TONE_SELECT,
            Self::AteBomb | Self::Died => TONE_DEATH,
        }
    }
}

/// Receiver for fire-and-forget game events.
pub trait AudioSink {
    fn play(&mut self, event: GameEvent);
}
