//! Session keys and the few operations the endpoints perform on a session.

use tower_sessions::session::Error;
use tower_sessions::{Expiry, Session};
use uuid::Uuid;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";
/// Rewritten on every session fetch so the inactivity expiry keeps sliding.
pub const SESSION_TOUCHED_AT_KEY: &str = "touched_at";
/// `false` pins the session to the browser lifetime on every request.
pub const SESSION_REMEMBER_ME_KEY: &str = "remember_me";

/// Bind `user_id` to a fresh session id.
pub async fn start_session(session: &Session, user_id: Uuid, remember_me: bool) -> Result<(), Error> {
    session.cycle_id().await?;
    session.insert(SESSION_REMEMBER_ME_KEY, remember_me).await?;
    keep_browser_session(session).await?;
    session.insert(SESSION_USER_ID_KEY, user_id.to_string()).await
}

/// The session layer rebuilds each session with its default expiry, so a
/// browser-session login has to be re-applied per request.
async fn keep_browser_session(session: &Session) -> Result<(), Error> {
    if session.get::<bool>(SESSION_REMEMBER_ME_KEY).await? == Some(false) {
        session.set_expiry(Some(Expiry::OnSessionEnd));
    }
    Ok(())
}

/// The signed-in user id, or `None` when the session is anonymous. A session
/// holding something other than a UUID is flushed.
pub async fn current_user_id(session: &Session) -> Result<Option<Uuid>, Error> {
    let Some(raw) = session.get::<String>(SESSION_USER_ID_KEY).await? else {
        return Ok(None);
    };
    match Uuid::parse_str(&raw) {
        Ok(id) => {
            keep_browser_session(session).await?;
            Ok(Some(id))
        }
        Err(_) => {
            tracing::warn!("malformed user id in session");
            session.flush().await?;
            Ok(None)
        }
    }
}

pub async fn touch_session(session: &Session) -> Result<(), Error> {
    keep_browser_session(session).await?;
    session
        .insert(SESSION_TOUCHED_AT_KEY, chrono::Utc::now().timestamp())
        .await
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;
    use tower_sessions::cookie::time;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    use super::*;

    fn status(result: Result<(), Error>) -> StatusCode {
        match result {
            Ok(()) => StatusCode::OK,
            Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Sign-in routes plus a route doing what `get_session` does.
    fn app() -> Router {
        let layer = SessionManagerLayer::new(MemoryStore::default())
            .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

        Router::new()
            .route(
                "/sign-in",
                get(|session: Session| async move {
                    status(start_session(&session, Uuid::new_v4(), false).await)
                }),
            )
            .route(
                "/sign-in-remembered",
                get(|session: Session| async move {
                    status(start_session(&session, Uuid::new_v4(), true).await)
                }),
            )
            .route(
                "/session",
                get(|session: Session| async move {
                    match current_user_id(&session).await {
                        Ok(Some(_)) => status(touch_session(&session).await),
                        Ok(None) => StatusCode::UNAUTHORIZED,
                        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    }
                }),
            )
            .layer(layer)
    }

    async fn call(app: &Router, path: &str, cookie: Option<&str>) -> (StatusCode, Option<String>) {
        let mut request = Request::builder().uri(path);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let response = app
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .map(|value| value.to_str().unwrap().to_string());
        (response.status(), set_cookie)
    }

    fn cookie_pair(set_cookie: &str) -> &str {
        set_cookie.split(';').next().unwrap()
    }

    #[tokio::test]
    async fn browser_session_survives_a_session_fetch() {
        let app = app();

        let (status, set_cookie) = call(&app, "/sign-in", None).await;
        assert_eq!(status, StatusCode::OK);
        let set_cookie = set_cookie.expect("sign-in sets a cookie");
        assert!(!set_cookie.contains("Max-Age"), "{set_cookie}");

        let (status, refreshed) = call(&app, "/session", Some(cookie_pair(&set_cookie))).await;
        assert_eq!(status, StatusCode::OK);
        if let Some(refreshed) = refreshed {
            assert!(!refreshed.contains("Max-Age"), "{refreshed}");
        }
    }

    #[tokio::test]
    async fn remembered_session_keeps_its_inactivity_window() {
        let app = app();

        let (_, set_cookie) = call(&app, "/sign-in-remembered", None).await;
        let set_cookie = set_cookie.expect("sign-in sets a cookie");
        assert!(set_cookie.contains("Max-Age=604800"), "{set_cookie}");

        let (status, refreshed) = call(&app, "/session", Some(cookie_pair(&set_cookie))).await;
        assert_eq!(status, StatusCode::OK);
        let refreshed = refreshed.expect("touch re-issues the cookie");
        assert!(refreshed.contains("Max-Age=604800"), "{refreshed}");
    }

    #[tokio::test]
    async fn anonymous_fetch_has_no_user() {
        let (status, _) = call(&app(), "/session", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
