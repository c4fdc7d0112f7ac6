use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use backline_auth::{AuthError, password};
use backline_core::{DomainError, DomainResult, Entity, EntityKind, entity_id};
use backline_store::{EntityStore, resolve_all};

use crate::role::{Role, RoleId};

entity_id! {
    /// Unique identifier for an employee.
    pub struct EmployeeId
}

/// A crew member.
///
/// # Invariants
/// - `password_hash` holds a bcrypt hash, never plaintext, and is never
///   serialized into responses.
/// - `roles` is the only stored side of the Employee↔Role association;
///   [`EmployeeService::update_roles`] is its sole mutation path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: String,
    pub email: String,
    pub mobile_phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub roles: BTreeSet<RoleId>,
}

impl Entity for Employee {
    type Id = EmployeeId;
    const KIND: EntityKind = EntityKind::Employee;

    fn id(&self) -> EmployeeId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: String,
    pub email: String,
    pub mobile_phone: String,
    /// Plaintext at the API boundary only; hashed before it reaches the store.
    pub password: String,
}

/// Full overwrite of the mutable fields. Password and roles are mutated
/// through their dedicated operations, never here.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeUpdate {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: String,
    pub email: String,
    pub mobile_phone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

#[derive(Debug, Error)]
pub enum PasswordChangeError {
    #[error(transparent)]
    NotFound(#[from] DomainError),

    #[error("current password does not match")]
    WrongCurrentPassword,

    #[error("new password and confirmation do not match")]
    ConfirmationMismatch,

    #[error(transparent)]
    Hash(#[from] AuthError),
}

/// Exact email match against the employee store.
pub fn find_by_email<S: EntityStore<Employee>>(store: &S, email: &str) -> Option<Employee> {
    store.list().into_iter().find(|e| e.email == email)
}

pub struct EmployeeService<S, R> {
    store: S,
    roles: R,
}

impl<S, R> EmployeeService<S, R>
where
    S: EntityStore<Employee>,
    R: EntityStore<Role>,
{
    pub fn new(store: S, roles: R) -> Self {
        Self { store, roles }
    }

    pub fn list(&self) -> Vec<Employee> {
        self.store.list()
    }

    pub fn get(&self, id: EmployeeId) -> DomainResult<Employee> {
        self.store
            .get(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Employee, id))
    }

    pub fn find_by_email(&self, email: &str) -> DomainResult<Employee> {
        find_by_email(&self.store, email)
            .ok_or_else(|| DomainError::not_found_unkeyed(EntityKind::Employee))
    }

    /// Case-insensitive match on first + last name; first hit wins.
    pub fn find_by_name(&self, first_name: &str, last_name: &str) -> DomainResult<Employee> {
        self.store
            .list()
            .into_iter()
            .find(|e| {
                e.first_name.eq_ignore_ascii_case(first_name)
                    && e.last_name.eq_ignore_ascii_case(last_name)
            })
            .ok_or_else(|| DomainError::not_found_unkeyed(EntityKind::Employee))
    }

    pub fn create(&self, new: NewEmployee) -> Result<Employee, AuthError> {
        let employee = Employee {
            id: EmployeeId::new(),
            first_name: new.first_name,
            last_name: new.last_name,
            address1: new.address1,
            address2: new.address2,
            email: new.email,
            mobile_phone: new.mobile_phone,
            password_hash: password::hash(&new.password)?,
            roles: BTreeSet::new(),
        };
        self.store.upsert(employee.clone());
        Ok(employee)
    }

    pub fn update(&self, id: EmployeeId, changes: EmployeeUpdate) -> DomainResult<Employee> {
        let mut employee = self.get(id)?;
        employee.first_name = changes.first_name;
        employee.last_name = changes.last_name;
        employee.address1 = changes.address1;
        employee.address2 = changes.address2;
        employee.email = changes.email;
        employee.mobile_phone = changes.mobile_phone;
        self.store.upsert(employee.clone());
        Ok(employee)
    }

    pub fn delete(&self, id: EmployeeId) -> DomainResult<()> {
        self.get(id)?;
        self.store.remove(&id);
        Ok(())
    }

    /// Add or remove roles on an employee's edge set.
    ///
    /// Every requested role must resolve or the whole operation fails before
    /// any mutation. Adding a present role and removing an absent one are
    /// both no-ops.
    pub fn update_roles(
        &self,
        id: EmployeeId,
        role_ids: &[RoleId],
        remove: bool,
    ) -> DomainResult<Employee> {
        let mut employee = self.get(id)?;
        let roles: Vec<Role> = resolve_all(&self.roles, role_ids)?;

        if remove {
            for role in &roles {
                employee.roles.remove(&role.id);
            }
        } else {
            for role in &roles {
                employee.roles.insert(role.id);
            }
        }

        self.store.upsert(employee.clone());
        Ok(employee)
    }

    /// The employee's roles, resolved to full records.
    ///
    /// Edges to roles deleted since assignment are skipped.
    pub fn roles_of(&self, id: EmployeeId) -> DomainResult<Vec<Role>> {
        let employee = self.get(id)?;
        Ok(self.resolve_roles(&employee))
    }

    pub fn roles_by_email(&self, email: &str) -> DomainResult<Vec<Role>> {
        let employee = self.find_by_email(email)?;
        Ok(self.resolve_roles(&employee))
    }

    fn resolve_roles(&self, employee: &Employee) -> Vec<Role> {
        employee
            .roles
            .iter()
            .filter_map(|role_id| self.roles.get(role_id))
            .collect()
    }

    pub fn change_password(
        &self,
        id: EmployeeId,
        change: PasswordChange,
    ) -> Result<Employee, PasswordChangeError> {
        let mut employee = self.get(id)?;

        if !password::verify(&change.current_password, &employee.password_hash) {
            return Err(PasswordChangeError::WrongCurrentPassword);
        }
        if change.new_password != change.confirm_new_password {
            return Err(PasswordChangeError::ConfirmationMismatch);
        }

        employee.password_hash = password::hash(&change.new_password)?;
        self.store.upsert(employee.clone());
        Ok(employee)
    }
}
