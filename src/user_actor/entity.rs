//! ActorEntity trait implementation for the User domain type.
//!
//! Holds the user validation rules: name length, age range and email
//! uniqueness at creation time.

use super::UserError;
use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserFilter, UserId, UserUpdate, MAX_AGE, MAX_NAME_LEN};
use chrono::Utc;

impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Filter = UserFilter;
    type Error = UserError;

    /// Rejects invalid fields and emails already held by a stored user.
    fn validate_create<'a, I>(params: &UserCreate, mut existing: I) -> Result<(), UserError>
    where
        I: Iterator<Item = &'a Self>,
    {
        validate_name(&params.name)?;
        validate_age(params.age)?;
        if existing.any(|user| user.email == params.email) {
            return Err(UserError::AlreadyExists(params.email.clone()));
        }
        Ok(())
    }

    /// Creates a new User from creation parameters, stamping `created_at`.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            age: params.age,
            is_active: params.is_active,
            created_at: Utc::now(),
        })
    }

    /// Handles updates to the User entity.
    ///
    /// # Fields Updated
    /// - `name`, `email`, `age`, `is_active`, each only when supplied
    /// - `age: Some(None)` clears the age
    ///
    /// `id` and `created_at` never change. The email is not checked against
    /// other users here.
    fn on_update(&mut self, update: UserUpdate) -> Result<(), UserError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        validate_age(update.age.flatten())?;

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        filter.is_active.map_or(true, |active| self.is_active == active)
    }
}

fn validate_name(name: &str) -> Result<(), UserError> {
    if name.is_empty() {
        return Err(UserError::ValidationError("name must not be empty".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(UserError::ValidationError(format!(
            "name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_age(age: Option<u32>) -> Result<(), UserError> {
    match age {
        Some(age) if age > MAX_AGE => Err(UserError::ValidationError(format!(
            "age must be between 0 and {MAX_AGE}"
        ))),
        _ => Ok(()),
    }
}
