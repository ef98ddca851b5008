// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
mod screens;
pub mod swap_form;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use screens::swap::SwapScreen;
use swap_form::SwapForm;

const PICO_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        background-color: var(--pico-muted-border-color);
    }

    .app-main-container {
        display: flex;
        justify-content: center;
        padding: 2rem 1rem;
    }

    .app-main-container main.container {
        max-width: 28rem;
        width: 100%;
        margin: 0;
        padding: 0;
    }
    "#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS_URL}",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let initial_data_future =
        use_server_future(move || async move { api::swap_defaults().await })?;

    // Read from the single future to ensure it's polled during SSR.
    let body = match &*initial_data_future.read() {
        Some(Ok(defaults)) => {
            rsx! {
                LoadedApp {
                    app_state: AppState::new(defaults.clone()),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    let defaults = app_state.defaults.clone();

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    // Create signals for mutable state at the top level of the component.
    let catalog_signal = use_signal(|| None);
    let form_signal = use_signal(move || SwapForm::new(defaults.clone()));

    // Provide the mutable state by passing the already created signals.
    use_context_provider(|| AppStateMut {
        catalog: catalog_signal,
        form: form_signal,
    });

    rsx! {
        div {
            class: "app-main-container",
            Container {
                SwapScreen {}
            }
        }
    }
}
