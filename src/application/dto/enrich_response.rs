use crate::license_gap::domain::{FetchStatistics, GapPackage};

/// EnrichResponse - Result of one enrichment run.
///
/// Holds the full gap package set in analyzer input order, the indices
/// of packages whose fetch yielded a usable license, and the aggregate
/// counters. Exporters consume this read-only.
#[derive(Debug, Clone)]
pub struct EnrichResponse {
    /// All gap packages, in the order they appeared in the input
    pub packages: Vec<GapPackage>,
    /// Indices into `packages` of the accepted results, input-ordered
    pub accepted: Vec<usize>,
    /// Counters describing the run
    pub statistics: FetchStatistics,
}

impl EnrichResponse {
    pub fn new(packages: Vec<GapPackage>, accepted: Vec<usize>, statistics: FetchStatistics) -> Self {
        Self {
            packages,
            accepted,
            statistics,
        }
    }

    /// The packages whose fetch resolved a license, in input order.
    pub fn accepted_packages(&self) -> Vec<&GapPackage> {
        self.accepted
            .iter()
            .filter_map(|&index| self.packages.get(index))
            .collect()
    }

    /// The packages still without a license after the run - the deep-scan
    /// workload that remains.
    pub fn unresolved_packages(&self) -> Vec<&GapPackage> {
        self.packages
            .iter()
            .filter(|pkg| !pkg.has_resolved_license())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_gap::domain::{FetchOutcome, PackageRecord};

    fn gap(id: &str, license: Option<&str>) -> GapPackage {
        let mut pkg = GapPackage::new(PackageRecord {
            id: id.to_string(),
            ..PackageRecord::default()
        });
        if let Some(license) = license {
            pkg.fetched_license = Some(FetchOutcome {
                succeeded: true,
                license: license.to_string(),
                ..FetchOutcome::default()
            });
        }
        pkg
    }

    #[test]
    fn test_accepted_and_unresolved_partition() {
        let packages = vec![
            gap("PyPI::a:1.0", Some("MIT")),
            gap("PyPI::b:1.0", Some("")),
            gap("NPM::c:1.0", None),
        ];
        let response = EnrichResponse::new(packages, vec![0], FetchStatistics::default());

        let accepted = response.accepted_packages();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].record.id, "PyPI::a:1.0");

        let unresolved = response.unresolved_packages();
        assert_eq!(unresolved.len(), 2);
        assert_eq!(unresolved[0].record.id, "PyPI::b:1.0");
        assert_eq!(unresolved[1].record.id, "NPM::c:1.0");
    }
}
