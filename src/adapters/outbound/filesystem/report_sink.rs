use crate::ports::outbound::ReportSink;
use crate::shared::error::EnrichError;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// OutputDirWriter adapter for writing report artifacts into an output
/// directory.
///
/// Implements the ReportSink port. The directory is created on first
/// write; existing artifacts are overwritten, except when the target is
/// a symbolic link, which is rejected.
pub struct OutputDirWriter {
    output_dir: PathBuf,
}

impl OutputDirWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            EnrichError::FileWriteError {
                path: self.output_dir.clone(),
                details: format!("Failed to create output directory: {}", e),
            }
            .into()
        })
    }

    fn validate_target(&self, target: &PathBuf) -> Result<()> {
        // Security: refuse to write through a symbolic link
        if target.exists() {
            let metadata =
                fs::symlink_metadata(target).map_err(|e| EnrichError::FileWriteError {
                    path: target.clone(),
                    details: format!("Failed to read file metadata: {}", e),
                })?;

            if metadata.is_symlink() {
                return Err(EnrichError::SecurityError {
                    path: target.clone(),
                    reason: "Output path is a symbolic link".to_string(),
                    hint: "Remove the symbolic link or choose a different output directory"
                        .to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl ReportSink for OutputDirWriter {
    fn write_report(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        self.ensure_output_dir()?;

        let target = self.output_dir.join(file_name);
        self.validate_target(&target)?;

        fs::write(&target, content).map_err(|e| EnrichError::FileWriteError {
            path: target.clone(),
            details: e.to_string(),
        })?;

        eprintln!("💾 Exported: {}", target.display());
        Ok(target)
    }
}
