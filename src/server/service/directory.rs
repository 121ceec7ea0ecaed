//! Account directory lookups.
//!
//! The production directory lives in MongoDB; an in-memory variant backs
//! development without a database and the test suite.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use serde::Deserialize;

use crate::{
    model::user::{Role, SessionUser},
    server::error::Error,
};

/// Name of the MongoDB collection holding portal accounts.
pub const USERS_COLLECTION: &str = "users";

/// The account directory consulted by login and password reset.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up `username` and check `password` against the stored secret.
    ///
    /// Returns `None` both when the account does not exist and when the
    /// password is wrong, the caller cannot tell the two apart.
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<SessionUser>, Error>;

    /// Find the account a password reset email would go to.
    async fn find_by_email(&self, email: &str) -> Result<Option<SessionUser>, Error>;

    /// Replace the stored password for `username`.
    async fn set_password(&self, username: &str, new_password: &str) -> Result<(), Error>;
}

/// Directory document as stored in the `users` collection.
#[derive(Debug, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    username: String,
    display_name: String,
    role: Role,
    password_hash: String,
}

impl UserDocument {
    fn into_session_user(self) -> SessionUser {
        SessionUser {
            id: self.id.to_hex(),
            username: self.username,
            display_name: self.display_name,
            role: self.role,
        }
    }
}

/// Directory backed by the portal's MongoDB instance.
///
/// Holds `None` when `MONGO_URI` was never configured; every operation then
/// fails with [`Error::DatabaseUnavailable`] instead of panicking at startup.
pub struct MongoDirectory {
    db: Option<mongodb::Database>,
}

impl MongoDirectory {
    pub fn new(db: Option<mongodb::Database>) -> Self {
        Self { db }
    }

    fn users(&self) -> Result<mongodb::Collection<UserDocument>, Error> {
        let db = self
            .db
            .as_ref()
            .ok_or_else(|| Error::DatabaseUnavailable("MONGO_URI is not set".to_string()))?;

        Ok(db.collection(USERS_COLLECTION))
    }
}

#[async_trait]
impl UserDirectory for MongoDirectory {
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<SessionUser>, Error> {
        let Some(document) = self
            .users()?
            .find_one(doc! { "username": username })
            .await?
        else {
            return Ok(None);
        };

        let Ok(stored) = PasswordHash::new(&document.password_hash) else {
            tracing::error!(username, "stored password hash is not parseable");
            return Ok(None);
        };
        if Argon2::default()
            .verify_password(password.as_bytes(), &stored)
            .is_err()
        {
            return Ok(None);
        }

        Ok(Some(document.into_session_user()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<SessionUser>, Error> {
        Ok(self
            .users()?
            .find_one(doc! { "email": email })
            .await?
            .map(UserDocument::into_session_user))
    }

    async fn set_password(&self, username: &str, new_password: &str) -> Result<(), Error> {
        let hash = hash_password(new_password)?;

        self.users()?
            .update_one(
                doc! { "username": username },
                doc! { "$set": { "password_hash": hash } },
            )
            .await?;

        Ok(())
    }
}

fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| Error::InternalError(format!("failed to hash password: {err}")))
}

/// Account as held by the in-memory directory.
struct MemoryAccount {
    user: SessionUser,
    email: String,
    password: String,
}

/// In-memory directory for development and tests.
///
/// Passwords are compared as plain text; this double never backs a real
/// deployment.
#[derive(Default)]
pub struct MemoryDirectory {
    accounts: Mutex<HashMap<String, MemoryAccount>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account, replacing any previous one under the same
    /// username. The record id is derived from the username.
    pub fn add_user(&self, username: &str, password: &str, email: &str, display_name: &str, role: Role) {
        self.accounts().insert(
            username.to_string(),
            MemoryAccount {
                user: SessionUser {
                    id: format!("local-{username}"),
                    username: username.to_string(),
                    display_name: display_name.to_string(),
                    role,
                },
                email: email.to_string(),
                password: password.to_string(),
            },
        );
    }

    fn accounts(&self) -> MutexGuard<'_, HashMap<String, MemoryAccount>> {
        self.accounts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<SessionUser>, Error> {
        Ok(self
            .accounts()
            .get(username)
            .filter(|account| account.password == password)
            .map(|account| account.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<SessionUser>, Error> {
        Ok(self
            .accounts()
            .values()
            .find(|account| account.email == email)
            .map(|account| account.user.clone()))
    }

    async fn set_password(&self, username: &str, new_password: &str) -> Result<(), Error> {
        if let Some(account) = self.accounts().get_mut(username) {
            account.password = new_password.to_string();
        }

        Ok(())
    }
}
