/// Ecosystem tag used by ORT for packages resolved from PyPI.
pub const PYPI_ECOSYSTEM: &str = "PyPI";

/// Parsed form of an ORT package coordinate string.
///
/// ORT identifies packages with coordinates of the shape
/// `<Ecosystem>::<name>:<version>`, e.g. `PyPI::requests:2.31.0`.
/// Parsing is deliberately lenient: a coordinate that does not match the
/// expected shape yields all-empty fields instead of an error, and the
/// package is then simply not eligible for a registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageCoordinates {
    pub ecosystem: String,
    pub name: String,
    pub version: String,
}

impl PackageCoordinates {
    /// Parses an ORT coordinate string into (ecosystem, name, version).
    ///
    /// Splits on the first `::` to separate the ecosystem, then on the
    /// last `:` of the remainder to separate name from version. Any
    /// failure to split returns empty coordinates. No validation is
    /// performed on the segment contents.
    pub fn parse(id: &str) -> Self {
        let Some((ecosystem, rest)) = id.split_once("::") else {
            return Self::default();
        };
        let Some((name, version)) = rest.rsplit_once(':') else {
            return Self::default();
        };

        Self {
            ecosystem: ecosystem.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    /// Returns true if the coordinate string could not be parsed.
    pub fn is_empty(&self) -> bool {
        self.ecosystem.is_empty() && self.name.is_empty() && self.version.is_empty()
    }

    /// Returns true if this package can be looked up on PyPI:
    /// the ecosystem tag matches and both name and version are present.
    pub fn is_registry_eligible(&self) -> bool {
        self.ecosystem == PYPI_ECOSYSTEM && !self.name.is_empty() && !self.version.is_empty()
    }
}

impl std::fmt::Display for PackageCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.version)
    }
}
