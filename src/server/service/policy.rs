//! Route-group access decisions.

use crate::{
    model::user::{Role, SessionUser},
    server::error::{auth::AuthError, Error},
};

/// Route groups that sit behind a role check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGroup {
    /// `/api/admin` pages
    Admin,
    /// Everything nested under `/dean`
    Dean,
}

/// Decides whether a user may enter a gated route group.
///
/// The policy is consulted with the session identity only after the gate has
/// established one; anonymous requests never reach [`AccessPolicy::allows`].
pub trait AccessPolicy: Send + Sync {
    /// Role check for a logged-in user.
    fn allows(&self, user: &SessionUser, group: RouteGroup) -> bool;

    /// Full gate decision, yielding the user the group may trust.
    ///
    /// Anonymous requests are rejected before the role check so 401 and 403
    /// stay distinguishable.
    fn ensure<'a>(
        &self,
        user: Option<&'a SessionUser>,
        group: RouteGroup,
    ) -> Result<&'a SessionUser, Error> {
        match user {
            None => Err(AuthError::Unauthorized.into()),
            Some(user) if self.allows(user, group) => Ok(user),
            Some(user) => {
                tracing::debug!(
                    username = %user.username,
                    role = ?user.role,
                    group = ?group,
                    "role check failed"
                );

                Err(AuthError::Forbidden.into())
            }
        }
    }
}

/// Policy requiring exactly the role a group is named after.
///
/// Roles do not stack: an admin is turned away from the dean section just
/// like any member.
pub struct RolePolicy;

impl AccessPolicy for RolePolicy {
    fn allows(&self, user: &SessionUser, group: RouteGroup) -> bool {
        match group {
            RouteGroup::Admin => user.role == Role::Admin,
            RouteGroup::Dean => user.role == Role::Dean,
        }
    }
}
