use crate::license_gap::domain::PackageRecord;
use crate::ports::outbound::AnalyzerResultReader;
use crate::shared::error::EnrichError;
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

// Deserialization shape of an ORT analyzer-result.yml. Everything below
// the `analyzer` section is default-tolerant: a package entry may omit
// any field without failing the load.

#[derive(Debug, Deserialize)]
struct AnalyzerResultDocument {
    analyzer: AnalyzerSection,
}

#[derive(Debug, Default, Deserialize)]
struct AnalyzerSection {
    #[serde(default)]
    result: AnalyzerResult,
}

#[derive(Debug, Default, Deserialize)]
struct AnalyzerResult {
    #[serde(default)]
    packages: Vec<RawPackage>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPackage {
    #[serde(default)]
    id: String,
    #[serde(default)]
    purl: String,
    #[serde(default)]
    declared_licenses: Vec<String>,
    #[serde(default)]
    declared_licenses_processed: ProcessedLicenses,
    #[serde(default)]
    homepage_url: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    source_artifact: ArtifactRef,
    #[serde(default)]
    vcs: VcsRef,
}

#[derive(Debug, Default, Deserialize)]
struct ProcessedLicenses {
    #[serde(default)]
    spdx_expression: String,
}

#[derive(Debug, Default, Deserialize)]
struct ArtifactRef {
    #[serde(default)]
    url: String,
}

#[derive(Debug, Default, Deserialize)]
struct VcsRef {
    #[serde(rename = "type", default)]
    vcs_type: String,
    #[serde(default)]
    url: String,
}

impl From<RawPackage> for PackageRecord {
    fn from(raw: RawPackage) -> Self {
        PackageRecord {
            id: raw.id,
            purl: raw.purl,
            declared_licenses: raw.declared_licenses,
            spdx_expression: raw.declared_licenses_processed.spdx_expression,
            homepage_url: raw.homepage_url,
            description: raw.description,
            source_artifact_url: raw.source_artifact.url,
            vcs_url: raw.vcs.url,
            vcs_type: raw.vcs.vcs_type,
        }
    }
}

/// YamlAnalyzerReader adapter for loading ORT analyzer results from disk.
///
/// Implements the AnalyzerResultReader port with the same file-safety
/// checks applied to every input: no symlinks, regular files only, and a
/// size limit.
pub struct YamlAnalyzerReader;

impl YamlAnalyzerReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate the path is a regular file
    /// - Check the size limit
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| EnrichError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        if metadata.is_symlink() {
            return Err(EnrichError::SecurityError {
                path: path.to_path_buf(),
                reason: "Analyzer result path is a symbolic link".to_string(),
                hint: "For security reasons, symbolic links are not allowed. Point to the regular file instead.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(EnrichError::FileReadError {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(EnrichError::SecurityError {
                path: path.to_path_buf(),
                reason: format!(
                    "File is too large ({} bytes). Maximum allowed size is {} bytes",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
                hint: "Split the analysis or verify the file is a real analyzer result".to_string(),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            EnrichError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn parse_document(&self, path: &Path, content: &str) -> Result<Vec<PackageRecord>> {
        let document: AnalyzerResultDocument =
            serde_yaml_ng::from_str(content).map_err(|e| EnrichError::AnalyzerResultParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(document
            .analyzer
            .result
            .packages
            .into_iter()
            .map(PackageRecord::from)
            .collect())
    }
}

impl Default for YamlAnalyzerReader {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzerResultReader for YamlAnalyzerReader {
    fn read_packages(&self, path: &Path) -> Result<Vec<PackageRecord>> {
        let content = self.safe_read_file(path)?;
        self.parse_document(path, &content)
    }
}
