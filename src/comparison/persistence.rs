use std::path::Path;

use super::ComparisonReport;

impl ComparisonReport {
    /// Save the report as pretty-printed JSON.
    ///
    /// The file maps each solver label to `{front, volume, front_size}`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or written. No
    /// temporary file is left behind on failure.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();

        // Write to a sibling temp file and rename, so readers never see a
        // half-written report.
        let parent = path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            path.file_name().unwrap_or_default().to_string_lossy()
        ));
        let file = std::fs::File::create(&tmp_path)?;
        let saved = serde_json::to_writer_pretty(file, self)
            .map_err(std::io::Error::other)
            .and_then(|()| std::fs::rename(&tmp_path, path));
        if saved.is_err() {
            std::fs::remove_file(&tmp_path).ok();
        }
        saved
    }

    /// Load a report saved with [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or parsed, including
    /// a front whose members differ in length.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = std::fs::File::open(path)?;
        serde_json::from_reader(file)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Serialize the report to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
