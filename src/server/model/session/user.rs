use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{model::user::SessionUser, server::error::Error};

pub const SESSION_USER_KEY: &str = "heimdall:user";

#[derive(Deserialize, Serialize, Debug)]
pub struct SessionCurrentUser(pub SessionUser);

impl SessionCurrentUser {
    /// Insert the logged-in user into the session
    pub async fn insert(session: &Session, user: &SessionUser) -> Result<(), Error> {
        session
            .insert(SESSION_USER_KEY, SessionCurrentUser(user.clone()))
            .await?;

        Ok(())
    }

    /// Get the logged-in user from the session, `None` while anonymous
    pub async fn get(session: &Session) -> Result<Option<SessionUser>, Error> {
        Ok(session
            .get::<SessionCurrentUser>(SESSION_USER_KEY)
            .await?
            .map(|SessionCurrentUser(user)| user))
    }
}
