/// Compile-time metadata embedded by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_date: &'static str,
    pub profile: &'static str,
}

impl BuildMetadata {
    /// One-line label for an "About" panel, e.g. `Personal Finance Tracker - Version 1.0.0`.
    pub fn about(&self) -> String {
        format!("Personal Finance Tracker - Version {}", self.version)
    }
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("FINANCE_CORE_BUILD_HASH").unwrap_or("unknown"),
        build_date: option_env!("FINANCE_CORE_BUILD_DATE").unwrap_or("unknown"),
        profile: option_env!("FINANCE_CORE_BUILD_PROFILE").unwrap_or("unknown"),
    }
}
