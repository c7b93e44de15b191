use crate::domain::ClipDescriptor;
use anyhow::{Result, anyhow};

pub const EQ_BANDS: usize = 10;
pub const EQ_MIN: f64 = -10.0;
pub const EQ_MAX: f64 = 10.0;
pub const START_MAX: f64 = 200.0;
pub const STEP: f64 = 0.1;

/// Everything a new player process is started with, besides the clip.
///
/// Owned by the application shell and lent to sessions on `play()`.
/// Running players never see later changes.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSettings {
    pub player: String,
    pub equalizer: Equalizer,
    pub start_override: StartOverride,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        PlaybackSettings {
            player: String::from("mplayer"),
            equalizer: Equalizer::default(),
            start_override: StartOverride::default(),
        }
    }
}

impl PlaybackSettings {
    pub fn new(player: &str) -> Self {
        PlaybackSettings {
            player: player.to_string(),
            ..Default::default()
        }
    }

    pub fn seek_for(&self, clip: &ClipDescriptor) -> f64 {
        match self.start_override.enabled {
            true => self.start_override.seconds,
            false => clip.offset.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Equalizer {
    gains: [f64; EQ_BANDS],
}

impl Equalizer {
    pub fn gains(&self) -> &[f64; EQ_BANDS] {
        &self.gains
    }

    pub fn get(&self, band: usize) -> Option<f64> {
        self.gains.get(band).copied()
    }

    /// Nudge one band by `steps` increments of 0.1 dB
    pub fn adjust(&mut self, band: usize, steps: i32) {
        if let Some(gain) = self.gains.get_mut(band) {
            *gain = snap(*gain + steps as f64 * STEP).clamp(EQ_MIN, EQ_MAX);
        }
    }

    pub fn reset(&mut self) {
        self.gains = [0.0; EQ_BANDS];
    }

    /// mplayer's `-af` value: `equalizer=0.0:1.5:...`
    pub fn to_filter(&self) -> String {
        let bands = self
            .gains
            .iter()
            .map(|g| format!("{g:.1}"))
            .collect::<Vec<_>>()
            .join(":");

        format!("equalizer={bands}")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartOverride {
    pub enabled: bool,
    pub seconds: f64,
}

impl StartOverride {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled
    }

    pub fn adjust(&mut self, steps: i32) {
        self.seconds = snap(self.seconds + steps as f64 * STEP).clamp(0.0, START_MAX);
    }

    /// Parse user input such as `"12.5"`
    pub fn set_from_str(&mut self, input: &str) -> Result<()> {
        let value = input
            .trim()
            .parse::<f64>()
            .map_err(|_| anyhow!("Not a number: \"{}\"", input.trim()))?;

        if !(0.0..=START_MAX).contains(&value) {
            return Err(anyhow!("Start time must be between 0 and {START_MAX} seconds"));
        }

        self.seconds = snap(value);
        Ok(())
    }
}

/// Round to the nearest 0.1 so repeated nudges do not drift
fn snap(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
