//! Property-test run profile parsing for CI and local overrides.
//!
//! Every property suite in the workspace reads its case count and fork mode
//! through [`ProptestRunProfile`], so one pair of environment variables
//! tunes them all.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const ARBOR_PBT_FORK_ENV_KEY: &str = "ARBOR_PBT_FORK";

/// Reasons an override is ignored.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The case count was not a positive integer.
    #[error("expected a positive case count, found `{0}`")]
    Cases(String),
    /// The fork switch was not a recognised boolean.
    #[error("expected one of true/false/1/0/yes/no/on/off, found `{0}`")]
    Fork(String),
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment with provided defaults.
    ///
    /// Invalid overrides are logged at `warn` and replaced by the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Loads a profile from an arbitrary key lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::from_lookup(64, false, |key| {
    ///     (key == "PROGTEST_CASES").then(|| "8".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 8);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn from_lookup(
        default_cases: u32,
        default_fork: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let cases = resolve(PROGTEST_CASES_ENV_KEY, default_cases, &lookup, parse_cases);
        let fork = resolve(ARBOR_PBT_FORK_ENV_KEY, default_fork, &lookup, parse_fork);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

fn resolve<T: Copy>(
    key: &'static str,
    default: T,
    lookup: &impl Fn(&str) -> Option<String>,
    parse: fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, %error, "ignoring property-test profile override");
        default
    })
}

/// Parses a positive case count.
///
/// # Errors
/// Returns [`OverrideError::Cases`] for zero or non-numeric input.
pub fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(cases) if cases > 0 => Ok(cases),
        _ => Err(OverrideError::Cases(raw.to_owned())),
    }
}

/// Parses a fork switch.
///
/// # Errors
/// Returns [`OverrideError::Fork`] for unrecognised input.
pub fn parse_fork(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::Fork(raw.to_owned())),
    }
}
