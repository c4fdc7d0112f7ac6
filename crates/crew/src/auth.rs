use std::sync::Arc;

use chrono::Utc;

use backline_auth::{AuthError, Hs256TokenCodec, password};
use backline_store::EntityStore;

use crate::employee::{Employee, find_by_email};

/// Credential check + session token issuance.
///
/// Two outcomes, no intermediate state: a signed token, or
/// [`AuthError::InvalidCredentials`].
pub struct AuthService<S> {
    employees: S,
    tokens: Arc<Hs256TokenCodec>,
}

impl<S: EntityStore<Employee>> AuthService<S> {
    pub fn new(employees: S, tokens: Arc<Hs256TokenCodec>) -> Self {
        Self { employees, tokens }
    }

    /// Verify `password` against the employee's stored hash and issue a
    /// token with their email as subject.
    pub fn authenticate(&self, email: &str, password_plain: &str) -> Result<String, AuthError> {
        let employee =
            find_by_email(&self.employees, email).ok_or(AuthError::InvalidCredentials)?;

        if !password::verify(password_plain, &employee.password_hash) {
            tracing::debug!(email, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&employee.email, Utc::now())?;
        tracing::info!(email, "issued session token");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::{EmployeeService, NewEmployee};
    use crate::role::Role;
    use backline_store::InMemoryStore;

    fn fixture() -> (
        AuthService<Arc<InMemoryStore<Employee>>>,
        Arc<Hs256TokenCodec>,
    ) {
        let employee_store = Arc::new(InMemoryStore::new());
        let role_store: Arc<InMemoryStore<Role>> = Arc::new(InMemoryStore::new());
        let employees = EmployeeService::new(employee_store.clone(), role_store);
        employees
            .create(NewEmployee {
                first_name: "Jo".to_string(),
                last_name: "Breen".to_string(),
                address1: String::new(),
                address2: String::new(),
                email: "a@b.com".to_string(),
                mobile_phone: String::new(),
                password: "secret".to_string(),
            })
            .unwrap();

        let tokens = Arc::new(Hs256TokenCodec::new(b"test-secret"));
        (AuthService::new(employee_store, tokens.clone()), tokens)
    }

    #[test]
    fn valid_credentials_yield_a_token_for_the_email() {
        let (auth, tokens) = fixture();

        let token = auth.authenticate("a@b.com", "secret").unwrap();
        assert!(!token.is_empty());
        assert!(tokens.validate(&token, "a@b.com"));
        assert!(!tokens.validate(&token, "other@b.com"));
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let (auth, _) = fixture();
        assert!(matches!(
            auth.authenticate("a@b.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn unknown_email_is_invalid_credentials() {
        let (auth, _) = fixture();
        assert!(matches!(
            auth.authenticate("nobody@b.com", "secret"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
