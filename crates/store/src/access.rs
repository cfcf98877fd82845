//! # Access Policy Input
//!
//! The caller's role set, as supplied per request by the authentication
//! layer. This crate never computes roles; it only consumes them to decide
//! projection.

/// Role granting full visibility, including redacted fields.
pub const ADMIN_ROLE: &str = "ADMIN";

/// The set of role strings held by the calling principal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet {
    roles: Vec<String>,
}

impl RoleSet {
    /// Create a role set from the roles the caller holds.
    pub fn new(roles: Vec<String>) -> Self {
        Self {
            roles,
        }
    }

    /// Whether the caller holds the given role.
    pub fn contains(&self, role: &str) -> bool { self.roles.iter().any(|r| r == role) }

    /// Whether the caller holds the `ADMIN` role.
    pub fn is_admin(&self) -> bool { self.contains(ADMIN_ROLE) }

    /// The role strings, in the order supplied.
    pub fn roles(&self) -> &[String] { &self.roles }
}

impl From<Vec<String>> for RoleSet {
    fn from(roles: Vec<String>) -> Self { Self::new(roles) }
}

impl FromIterator<String> for RoleSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self { Self::new(iter.into_iter().collect()) }
}
