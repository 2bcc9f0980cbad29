use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

use crate::domain::TranscodeError;

/// Converts a completed download to MP3 by shelling out to ffmpeg.
/// The source file is left intact; the output is a sibling `.mp3`.
#[derive(Debug, Clone)]
pub struct Transcoder {
    ffmpeg: PathBuf,
}

impl Default for Transcoder {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from("ffmpeg"),
        }
    }
}

impl Transcoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_path_for(source: &Path) -> PathBuf {
        source.with_extension("mp3")
    }

    pub async fn transcode_audio(&self, source: &Path) -> Result<PathBuf, TranscodeError> {
        let already_mp3 = source
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"));
        if already_mp3 {
            return Err(TranscodeError::UnsupportedInput(format!(
                "{} is already an MP3 file",
                source.display()
            )));
        }

        let output = Self::output_path_for(source);
        tracing::info!(source = %source.display(), output = %output.display(), "transcoding to mp3");

        let result = Command::new(&self.ffmpeg)
            .arg("-y")
            .arg("-i")
            .arg(source)
            .arg("-vn")
            .args(["-codec:a", "libmp3lame", "-q:a", "2"])
            .arg(&output)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| TranscodeError::Spawn(e.to_string()))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let reason = stderr
                .lines()
                .last()
                .unwrap_or("ffmpeg exited with an error")
                .to_string();
            return Err(TranscodeError::Encoder(reason));
        }

        Ok(output)
    }
}
