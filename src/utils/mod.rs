use std::path::PathBuf;

use crate::domain::VariantKind;

/// Sanitize filename to remove invalid characters
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            _ => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Output filename for one download leg, derived from the title with
/// whitespace runs normalized to `-`. Falls back to a fixed per-leg name
/// when the title sanitizes to nothing.
pub fn output_file_name(title: &str, kind: VariantKind) -> String {
    let sanitized = sanitize_filename(title);
    let base = sanitized
        .trim_matches(|c| c == '.' || c == ' ' || c == '_')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");

    match kind {
        VariantKind::Video if base.is_empty() => "video.mp4".to_string(),
        VariantKind::Audio if base.is_empty() => "audio.m4a".to_string(),
        VariantKind::Video => format!("{}.mp4", base),
        VariantKind::Audio => format!("{}.m4a", base),
    }
}

/// Default destination directory at startup: the user's home directory.
pub fn default_download_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("test/file.mp3"), "test_file.mp3");
        assert_eq!(sanitize_filename("normal-name.mp3"), "normal-name.mp3");
    }

    #[test]
    fn output_name_is_derived_from_title() {
        assert_eq!(
            output_file_name("Demo Video  Clip", VariantKind::Video),
            "Demo-Video-Clip.mp4"
        );
        assert_eq!(
            output_file_name("Demo Video Clip", VariantKind::Audio),
            "Demo-Video-Clip.m4a"
        );
    }

    #[test]
    fn output_name_falls_back_to_fixed_leg_names() {
        assert_eq!(output_file_name("", VariantKind::Video), "video.mp4");
        assert_eq!(output_file_name("???", VariantKind::Audio), "audio.m4a");
    }

    #[test]
    fn default_dir_is_never_empty() {
        assert!(!default_download_dir().as_os_str().is_empty());
    }
}
