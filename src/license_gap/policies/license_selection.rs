/// Registry license values that carry no information. A determined value
/// matching one of these (case-insensitively) is treated the same as an
/// absent license.
const GARBAGE_VALUES: [&str; 3] = ["unknown", "none", "n/a"];

/// Classifier prefix PyPI uses for licensing metadata.
const LICENSE_CLASSIFIER_PREFIX: &str = "License ::";

/// LicenseSelection encodes the precedence rules for the license fields
/// of a PyPI response.
///
/// Priority order:
/// 1. `license_expression` (the modern SPDX-style field)
/// 2. `license` (the legacy free-text field)
///
/// Classifiers are not used as a fallback; they are captured separately
/// so a human reviewer can see them alongside whichever field won.
pub struct LicenseSelection;

impl LicenseSelection {
    /// Determines the best single license string from the two raw PyPI
    /// fields, normalizing garbage values to empty.
    pub fn determine(license_expression: &str, license_field: &str) -> String {
        let determined = if !license_expression.is_empty() {
            license_expression
        } else {
            license_field
        };

        if Self::is_garbage(determined) {
            String::new()
        } else {
            determined.to_string()
        }
    }

    /// Filters a PyPI classifier list down to the licensing entries,
    /// preserving order and duplicates.
    pub fn license_classifiers(classifiers: &[String]) -> Vec<String> {
        classifiers
            .iter()
            .filter(|c| c.starts_with(LICENSE_CLASSIFIER_PREFIX))
            .cloned()
            .collect()
    }

    fn is_garbage(value: &str) -> bool {
        value.is_empty()
            || GARBAGE_VALUES
                .iter()
                .any(|garbage| value.eq_ignore_ascii_case(garbage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_prefers_expression() {
        assert_eq!(LicenseSelection::determine("MIT", "Apache-2.0"), "MIT");
    }

    #[test]
    fn test_determine_falls_back_to_legacy_field() {
        assert_eq!(LicenseSelection::determine("", "Apache-2.0"), "Apache-2.0");
    }

    #[test]
    fn test_determine_both_empty() {
        assert_eq!(LicenseSelection::determine("", ""), "");
    }

    #[test]
    fn test_determine_normalizes_garbage_values() {
        assert_eq!(LicenseSelection::determine("", "UNKNOWN"), "");
        assert_eq!(LicenseSelection::determine("", "unknown"), "");
        assert_eq!(LicenseSelection::determine("", "None"), "");
        assert_eq!(LicenseSelection::determine("", "n/a"), "");
        assert_eq!(LicenseSelection::determine("N/A", "MIT"), "");
    }

    #[test]
    fn test_determine_keeps_real_expressions() {
        assert_eq!(
            LicenseSelection::determine("MIT OR Apache-2.0", ""),
            "MIT OR Apache-2.0"
        );
    }

    #[test]
    fn test_license_classifiers_filters_by_prefix() {
        let classifiers = vec![
            "Development Status :: 5 - Production/Stable".to_string(),
            "License :: OSI Approved :: MIT License".to_string(),
            "Programming Language :: Python :: 3".to_string(),
            "License :: OSI Approved :: Apache Software License".to_string(),
        ];
        let filtered = LicenseSelection::license_classifiers(&classifiers);
        assert_eq!(
            filtered,
            vec![
                "License :: OSI Approved :: MIT License".to_string(),
                "License :: OSI Approved :: Apache Software License".to_string(),
            ]
        );
    }

    #[test]
    fn test_license_classifiers_preserves_duplicates_and_order() {
        let classifiers = vec![
            "License :: OSI Approved :: MIT License".to_string(),
            "License :: OSI Approved :: MIT License".to_string(),
        ];
        let filtered = LicenseSelection::license_classifiers(&classifiers);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_license_classifiers_empty_input() {
        assert!(LicenseSelection::license_classifiers(&[]).is_empty());
    }
}
