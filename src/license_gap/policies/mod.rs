mod gap_policy;
mod license_selection;

pub use gap_policy::GapPolicy;
pub use license_selection::LicenseSelection;
