//! In-memory store implementations.
//!
//! Back the domain trait seams with plain maps behind std locks. Locks are
//! only held for map operations, never across an await point.

use std::collections::{HashMap, HashSet};
use std::sync::{
    Mutex, RwLock,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{Form, NewForm, User};
use crate::domain::repositories::{FormStore, PermissionStore, StoreError, UserStore};

/// Token-to-account map.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account reachable through `token`.
    pub fn insert(&self, token: impl Into<String>, user: User) {
        self.users
            .write()
            .expect("user store lock poisoned")
            .insert(token.into(), user);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_by_token(&self, token: &str) -> Result<User, StoreError> {
        self.users
            .read()
            .expect("user store lock poisoned")
            .get(token)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

/// Per-account permission grants.
#[derive(Default)]
pub struct MemoryPermissionStore {
    grants: RwLock<HashMap<i64, HashSet<String>>>,
}

impl MemoryPermissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&self, user_id: i64, code: impl Into<String>) {
        self.grants
            .write()
            .expect("permission store lock poisoned")
            .entry(user_id)
            .or_default()
            .insert(code.into());
    }
}

#[async_trait]
impl PermissionStore for MemoryPermissionStore {
    async fn get_for_user(&self, user_id: i64) -> Result<HashSet<String>, StoreError> {
        Ok(self
            .grants
            .read()
            .expect("permission store lock poisoned")
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Form records keyed by id, with ids handed out sequentially.
pub struct MemoryFormStore {
    forms: Mutex<HashMap<i64, Form>>,
    next_id: AtomicI64,
}

impl MemoryFormStore {
    pub fn new() -> Self {
        Self {
            forms: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl FormStore for MemoryFormStore {
    async fn create(&self, new_form: NewForm) -> Result<Form, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let form = Form {
            id,
            user_id: new_form.user_id,
            status: new_form.status,
            archived: new_form.archived,
            full_name: new_form.full_name,
            other_names: new_form.other_names,
            has_changed_name: new_form.has_changed_name,
            social_security_number: new_form.social_security_number,
            social_security_date: new_form.social_security_date,
            social_security_country: new_form.social_security_country,
            passport_number: new_form.passport_number,
            passport_date: new_form.passport_date,
            passport_country: new_form.passport_country,
            date_of_birth: new_form.date_of_birth,
            place_of_birth: new_form.place_of_birth,
            nationality: new_form.nationality,
            acquired_nationality: new_form.acquired_nationality,
            spouse_name: new_form.spouse_name,
            address: new_form.address,
            phone_number: new_form.phone_number,
            fax_number: new_form.fax_number,
            residential_email: new_form.residential_email,
            created_at: Utc::now(),
            version: 1,
        };

        self.forms
            .lock()
            .expect("form store lock poisoned")
            .insert(id, form.clone());
        Ok(form)
    }

    async fn get(&self, id: i64) -> Result<Form, StoreError> {
        self.forms
            .lock()
            .expect("form store lock poisoned")
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}
