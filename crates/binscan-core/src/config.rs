//! Inspection configuration.

/// How a member's last path segment is compared with the target binary name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The segment starts with the target name.
    #[default]
    Prefix,
    /// The first four bytes of the segment equal the target name.
    ///
    /// Matches manifests produced by older tooling. A target whose length is
    /// not exactly four never matches.
    FixedWidth,
}

impl MatchMode {
    /// Width of the comparison window in [`MatchMode::FixedWidth`].
    pub const FIXED_WIDTH: usize = 4;

    /// Returns `true` if `segment` names the target binary under this mode.
    ///
    /// An empty target never matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use binscan_core::MatchMode;
    ///
    /// assert!(MatchMode::Prefix.matches("geth.exe", "geth"));
    /// assert!(MatchMode::Prefix.matches("swarm", "swarm"));
    /// assert!(!MatchMode::FixedWidth.matches("swarm", "swarm"));
    /// ```
    #[must_use]
    pub fn matches(self, segment: &str, target: &str) -> bool {
        if target.is_empty() {
            return false;
        }
        match self {
            Self::Prefix => segment.starts_with(target),
            Self::FixedWidth => segment
                .get(..Self::FIXED_WIDTH)
                .is_some_and(|head| head == target),
        }
    }
}

/// Configuration for [`inspect_archive`](crate::inspect_archive).
///
/// # Examples
///
/// ```
/// use binscan_core::InspectionConfig;
/// use binscan_core::MatchMode;
///
/// let legacy = InspectionConfig {
///     match_mode: MatchMode::FixedWidth,
/// };
/// assert_ne!(legacy.match_mode, InspectionConfig::default().match_mode);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InspectionConfig {
    /// Rule used to recognise the target binary among archive members.
    pub match_mode: MatchMode,
}
