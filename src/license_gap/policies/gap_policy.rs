/// Declared-license values that express uncertainty rather than an
/// actual license. A package whose metadata only carries these needs
/// follow-up just like one with no license data at all.
const UNCERTAIN_VALUES: [&str; 4] = ["NOASSERTION", "UNKNOWN", "NONE", ""];

/// GapPolicy decides whether a package's license data counts as missing.
///
/// The policy is intentionally permissive: license absence and license
/// uncertainty are treated identically, since both require human or
/// registry follow-up. An unnecessary registry lookup is cheap; a missed
/// gap is a compliance risk.
pub struct GapPolicy;

impl GapPolicy {
    /// Returns true if the package's license information is missing or
    /// uncertain.
    ///
    /// Decision order:
    /// 1. No declared licenses at all
    /// 2. Every declared license is an uncertain sentinel
    /// 3. The processed SPDX expression is empty or itself a sentinel
    pub fn is_license_missing(declared_licenses: &[String], spdx_expression: &str) -> bool {
        if declared_licenses.is_empty() {
            return true;
        }

        if declared_licenses
            .iter()
            .all(|license| Self::is_uncertain(license))
        {
            return true;
        }

        if Self::is_uncertain(spdx_expression) {
            return true;
        }

        false
    }

    fn is_uncertain(value: &str) -> bool {
        UNCERTAIN_VALUES.contains(&value)
    }
}
