//! Target binary lookup among archive members.

use crate::MatchMode;

/// A member recognised as the target binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMatch {
    /// Last path segment, e.g. `geth`.
    pub name: String,
    /// Full path inside the archive, e.g. `geth-1.9-linux-amd64/geth`.
    pub path: String,
}

/// Last `/`-separated segment of a member path.
fn last_segment(member: &str) -> &str {
    member.rsplit_once('/').map_or(member, |(_, segment)| segment)
}

/// Returns the first member whose last path segment matches `target`.
///
/// Members after the first match are not examined.
///
/// # Examples
///
/// ```
/// use binscan_core::MatchMode;
/// use binscan_core::inspection::find_binary;
///
/// let members = ["geth-1.9/README.md", "geth-1.9/geth", "geth-1.9/geth.sig"];
/// let found = find_binary(members, "geth", MatchMode::Prefix).unwrap();
/// assert_eq!(found.name, "geth");
/// assert_eq!(found.path, "geth-1.9/geth");
/// ```
pub fn find_binary<I, S>(members: I, target: &str, mode: MatchMode) -> Option<BinaryMatch>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    members.into_iter().find_map(|member| {
        let member = member.as_ref();
        let segment = last_segment(member);
        mode.matches(segment, target).then(|| BinaryMatch {
            name: segment.to_string(),
            path: member.to_string(),
        })
    })
}
