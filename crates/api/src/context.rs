/// Authenticated caller for a request.
///
/// This is immutable and must be present for all domain routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    subject: String,
}

impl AuthContext {
    pub fn new(subject: String) -> Self {
        Self { subject }
    }

    /// Email of the authenticated employee, taken from the token's `sub`.
    pub fn subject(&self) -> &str {
        &self.subject
    }
}
