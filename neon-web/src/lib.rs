pub mod actions;
pub mod api;
pub mod app_service;
pub mod config;
pub mod demo_data;
pub mod pages;

use app_service::AppService;
use config::EndpointConfig;
use dioxus::prelude::*;
use pages::{AppLayout, Catalog};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Catalog {},
}

#[component]
pub fn App() -> Element {
    // Provide AppService as context for all components
    use_context_provider(|| AppService::new(EndpointConfig::from_build_env()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen dark", Router::<Route> {} }
    }
}
