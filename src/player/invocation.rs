use crate::{domain::ClipDescriptor, player::settings::PlaybackSettings};

/// Command line for one player process:
/// `<player> -ss <seek> -af equalizer=<g1>:..:<g10> <file>`
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInvocation {
    pub program: String,
    pub seek: f64,
    pub args: Vec<String>,
}

impl PlayerInvocation {
    pub fn new(clip: &ClipDescriptor, settings: &PlaybackSettings) -> Self {
        let seek = settings.seek_for(clip);

        let args = vec![
            String::from("-ss"),
            format_seconds(seek),
            String::from("-af"),
            settings.equalizer.to_filter(),
            clip.path.to_string_lossy().into_owned(),
        ];

        PlayerInvocation {
            program: settings.player.clone(),
            seek,
            args,
        }
    }
}

/// Tenths of a second, without trailing zeros: `2.5`, `0`, `12`
pub fn format_seconds(secs: f64) -> String {
    let rounded = (secs * 10.0).round() / 10.0;
    format!("{rounded}")
}
