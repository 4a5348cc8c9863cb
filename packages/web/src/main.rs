use dioxus::prelude::*;

use views::{EditNote, Home, NewNote, NoteDetail, Notes, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/notes")]
    Notes {},
    #[route("/notes/new")]
    NewNote {},
    #[route("/notes/:id")]
    NoteDetail { id: String },
    #[route("/notes/:id/edit")]
    EditNote { id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use api::db::Backend;
    use api::BackendConfig;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "web=info,api=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Reads .env as well
    let config = BackendConfig::from_env().expect("Invalid backend configuration");
    let backend = Backend::connect(&config)
        .await
        .expect("Failed to connect to note backend");

    if let Backend::Postgres(store) = &backend {
        sqlx::migrate!("../api/migrations")
            .run(store.pool())
            .await
            .expect("Failed to run migrations");
    }

    // Server functions pull the backend out of the request extensions
    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(axum::Extension(backend));

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }

        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn routes_match_shared_paths() {
        let id = "7d1f0c9e-3b7a-4d1e-9a55-0f4b7c2d9e11".to_string();
        assert_eq!(Route::Home {}.to_string(), ui::paths::HOME);
        assert_eq!(Route::Notes {}.to_string(), ui::paths::NOTES);
        assert_eq!(Route::NewNote {}.to_string(), ui::paths::NEW_NOTE);
        assert_eq!(Route::NoteDetail { id: id.clone() }.to_string(), ui::paths::note(&id));
        assert_eq!(Route::EditNote { id: id.clone() }.to_string(), ui::paths::edit_note(&id));
    }

    #[test]
    fn new_note_path_is_not_an_id() {
        assert_eq!("/notes/new".parse::<Route>().ok(), Some(Route::NewNote {}));
        assert_eq!(
            "/notes/abc".parse::<Route>().ok(),
            Some(Route::NoteDetail { id: "abc".to_string() })
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert!(matches!(
            "/nope/at/all".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}
