use dioxus::prelude::*;

use ui::{AuthNotice, AuthRefreshToken, Toaster};
use views::{Auth, Secret};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/auth?:..notice")]
    Auth { notice: AuthNotice },
    #[route("/secret")]
    Secret {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        dotenvy::dotenv().ok();
        init_tracing();

        let result = tokio::runtime::Runtime::new()
            .map_err(anyhow::Error::from)
            .and_then(|runtime| runtime.block_on(launch_server()));

        if let Err(e) = result {
            tracing::error!("{e:#}");
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[cfg(feature = "server")]
async fn launch_server() -> anyhow::Result<()> {
    use anyhow::Context;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{ExpiredDeletion, Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    // Nothing starts until both variable sets validate.
    let env = api::env::Env::from_process()?;
    tracing::info!(
        node_env = env.server.node_env.as_str(),
        app_url = %env.public.app_url,
        "environment validated"
    );

    let pool = api::db::init_pool(env.server.database_url()).await?;

    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("session store migration failed")?;

    tokio::task::spawn(
        session_store
            .clone()
            .continuously_delete_expired(tokio::time::Duration::from_secs(60 * 60)),
    );

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(env.secure_cookies())
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into()?,
        )); // 7 days

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Toaster {
            AuthRefreshToken {}
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/auth`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Auth {
        notice: AuthNotice::None,
    });
    rsx! {}
}
