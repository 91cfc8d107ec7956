use crate::modules::timesheets::core::visibility::CurrentUser;
use crate::shared::infrastructure::session_store::{SESSION_USER_KEY, SessionStore};

/// Resolves who is looking at the screen.
///
/// The session snapshot wins. A malformed snapshot yields no viewer, which
/// makes visibility filtering fail open. Without a snapshot the shared
/// context user is used.
pub async fn resolve_viewer(
    session: &dyn SessionStore,
    context_user: Option<&CurrentUser>,
) -> Option<CurrentUser> {
    let stored = match session.get(SESSION_USER_KEY).await {
        Ok(stored) => stored,
        Err(error) => {
            tracing::warn!(error = %error, "session store unavailable, using context user");
            None
        }
    };

    if let Some(raw) = stored {
        return match serde_json::from_str::<CurrentUser>(&raw) {
            Ok(user) => {
                tracing::info!(user_name = ?user.user_name, "user loaded from session");
                Some(user)
            }
            Err(error) => {
                tracing::error!(error = %error, "could not parse session user");
                None
            }
        };
    }

    match context_user {
        Some(user) => {
            tracing::info!(user_name = ?user.user_name, "user loaded from context");
            Some(user.clone())
        }
        None => {
            tracing::warn!("no user found in session or context");
            None
        }
    }
}
