//! Wishlist Client - Main entry point
//!
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use wishlist_client::{AuthProvider, ClientConfig, Route, SocketProvider};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("wishlist_client=debug")),
            )
            .init();
        tracing::info!("starting wishlist client");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ClientConfig::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }

        AuthProvider {
            SocketProvider {
                Router::<Route> {}
            }
        }
    }
}
