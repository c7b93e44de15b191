use crate::capitalize_label;
use std::path::{Path, PathBuf};

/// Encoded offsets are stored in tenths of a second: `solo#25.mp3` starts at 2.5s
const OFFSET_DIVISOR: f64 = 10.0;
const OFFSET_SEPARATOR: char = '#';

#[derive(Debug, Clone, PartialEq)]
pub struct ClipDescriptor {
    pub path: PathBuf,
    pub file_name: String,
    pub name: String,
    pub label: String,
    pub offset: Option<f64>,
}

impl ClipDescriptor {
    /// Parse `<name>[#<offset>].<ext>`.
    ///
    /// Only a stem that splits into exactly two parts carries an offset.
    /// `a#b#c.mp3` is named `a` and has none.
    pub fn from_path<P: AsRef<Path>>(path: P, label_width: usize) -> Self {
        let path = path.as_ref();

        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let parts = stem.split(OFFSET_SEPARATOR).collect::<Vec<_>>();
        let name = parts[0].to_string();

        let offset = match parts.as_slice() {
            [_, encoded] => match encoded.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => Some(v / OFFSET_DIVISOR),
                _ => {
                    tracing::warn!(file = %file_name, "Ignoring unparsable start offset");
                    None
                }
            },
            _ => None,
        };

        ClipDescriptor {
            label: capitalize_label(&name, label_width),
            path: path.to_path_buf(),
            file_name,
            name,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_tenths_of_a_second() {
        let clip = ClipDescriptor::from_path("sounds/rock/guitar/solo#25.mp3", 15);
        assert_eq!(clip.name, "solo");
        assert_eq!(clip.label, "Solo");
        assert_eq!(clip.offset, Some(2.5));
        assert_eq!(clip.file_name, "solo#25.mp3");
    }

    #[test]
    fn missing_separator_yields_no_offset() {
        let clip = ClipDescriptor::from_path("riff.wav", 15);
        assert_eq!(clip.name, "riff");
        assert_eq!(clip.offset, None);
    }

    #[test]
    fn label_is_capitalized_and_truncated() {
        let clip = ClipDescriptor::from_path("THE LONGEST INTRO EVER#100.ogg", 15);
        assert_eq!(clip.label, "The longest int");
        assert_eq!(clip.offset, Some(10.0));
    }

    #[test]
    fn inner_dots_stay_in_the_name() {
        let clip = ClipDescriptor::from_path("take.2#5.flac", 15);
        assert_eq!(clip.name, "take.2");
        assert_eq!(clip.offset, Some(0.5));
    }

    #[test]
    fn more_than_one_separator_yields_no_offset() {
        let clip = ClipDescriptor::from_path("a#1#2.mp3", 15);
        assert_eq!(clip.name, "a");
        assert_eq!(clip.offset, None);
    }

    #[test]
    fn garbage_offset_is_ignored() {
        let clip = ClipDescriptor::from_path("drop#soon.mp3", 15);
        assert_eq!(clip.name, "drop");
        assert_eq!(clip.offset, None);
    }

    #[test]
    fn decimal_offsets_are_accepted() {
        let clip = ClipDescriptor::from_path("bell#7.5.mp3", 15);
        // file_stem strips only the final extension
        assert_eq!(clip.offset, Some(0.75));
    }
}
