//=============================================================================
// File: src/screens/swap.rs
//=============================================================================
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::components::pico::{Button, ButtonType, Card};
use crate::components::token_amount_input::TokenAmountInput;
use crate::components::token_chooser::TokenChooser;
use crate::swap_form::{Side, TokenPatch};
use dioxus::prelude::*;
use std::time::Duration;

const CATALOG_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// The symbol the per-side value sub-line is quoted in.
const REFERENCE_SYMBOL: &str = "USD";

/// Formats an amount for display; the calculator's output is shown as-is,
/// no rounding or precision clamping.
fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        "0".to_string()
    } else {
        format!("{amount}")
    }
}

/// One side of the swap form: an amount input, a token chooser, and a small
/// reference-value line underneath.
#[component]
fn SwapSidePanel(label: String, side: Side) -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut form = app_state_mut.form;
    let catalog = app_state_mut.catalog;

    // The driving side mirrors the user's raw keystrokes; the dependent side
    // always displays the recomputed amount.
    let default_from_amount = app_state.defaults.from.amount;
    let mut amount_str = use_signal(move || format_amount(default_from_amount));
    let display_value = match side {
        Side::From => amount_str(),
        Side::To => format_amount(form.read().to_side().amount),
    };

    let (selected, exclude) = {
        let form = form.read();
        match side {
            Side::From => (
                form.from_side().currency.clone(),
                form.to_side().currency.clone(),
            ),
            Side::To => (
                form.to_side().currency.clone(),
                form.from_side().currency.clone(),
            ),
        }
    };

    let reference_line = form
        .read()
        .side_value_in(side, REFERENCE_SYMBOL, catalog.read().as_ref())
        .map(|value| format!("≈ {} {}", format_amount(value), REFERENCE_SYMBOL));

    rsx! {
        div {
            style: "border: 1px solid var(--pico-muted-border-color); border-radius: var(--pico-border-radius); padding: 1rem; margin-bottom: 0.5rem;",
            label {
                style: "margin-bottom: 0.25rem;",
                "{label}"
            }
            div {
                style: "display: flex; gap: 0.5rem; align-items: center;",
                TokenAmountInput {
                    value: display_value,
                    placeholder: "0.0",
                    max_integers: 12,
                    max_decimals: 6,
                    on_input: move |sanitized: String| {
                        let amount = sanitized.parse::<f64>().unwrap_or(0.0);
                        if side == Side::From {
                            amount_str.set(sanitized);
                        }
                        // The edit and the dependent-side recomputation are
                        // one synchronous step.
                        form.write()
                            .set_side(side, TokenPatch::amount(amount), catalog.read().as_ref());
                    },
                }
                TokenChooser {
                    selected,
                    exclude,
                    catalog,
                    on_select: move |symbol: String| {
                        form.write()
                            .set_side(side, TokenPatch::currency(symbol), catalog.read().as_ref());
                    },
                }
            }
            if let Some(line) = reference_line {
                small {
                    style: "color: var(--pico-muted-color);",
                    "{line}"
                }
            }
        }
    }
}

/// The unit-price line under the form: "1 FROM = X TO".
#[component]
fn SwapMetadata() -> Element {
    let app_state_mut = use_context::<AppStateMut>();

    let price_line = {
        let form = app_state_mut.form.read();
        form.unit_price(app_state_mut.catalog.read().as_ref())
            .map(|rate| {
                format!(
                    "1 {} = {} {}",
                    form.from_side().currency,
                    format_amount(rate),
                    form.to_side().currency
                )
            })
    };

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; margin-top: 0.5rem;",
            p { style: "margin-bottom: 0;", "Price:" }
            p {
                style: "margin-bottom: 0;",
                if let Some(line) = price_line {
                    "{line}"
                }
            }
        }
    }
}

#[component]
pub fn SwapScreen() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();

    // 1. `use_resource` runs the catalog fetch in the background and
    //    returns a `Resource` signal the view can match on.
    let mut catalog_resource = use_resource(move || async move { api::tokens().await });

    // Periodically pick up fresh prices; the server caches, so this is cheap.
    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut res = catalog_resource;
        async move {
            loop {
                compat::sleep(CATALOG_REFRESH_INTERVAL).await;
                res.restart();
            }
        }
    });

    // Apply each new snapshot wholesale, then resync the form once against it.
    use_effect(move || {
        if let Some(Ok(catalog)) = catalog_resource.read().as_ref() {
            // This check prevents infinite loops if the resource returns the same data.
            if app_state_mut.catalog.peek().as_ref() != Some(catalog) {
                app_state_mut.catalog.set(Some(catalog.clone()));
                app_state_mut.form.write().resync(Some(catalog));
                dioxus_logger::tracing::info!("catalog snapshot applied: {} tokens", catalog.len());
            }
        }
    });

    let have_catalog = app_state_mut.catalog.read().is_some();

    rsx! {
        // A refresh keeps showing the last good snapshot; the loading and
        // error cards only appear before the first one arrives.
        match (&*catalog_resource.read(), have_catalog) {
            (Some(Err(e)), false) => {
                rsx! {
                    Card {
                        h3 { "Swap" }
                        p { "The price catalog is unavailable: {e}" }
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| catalog_resource.restart(),
                            "Retry"
                        }
                    }
                }
            }
            (None, false) => {
                rsx! {
                    Card {
                        h3 { "Swap" }
                        p { "Loading token prices..." }
                        progress {} // An indeterminate progress bar
                    }
                }
            }
            _ => {
                rsx! {
                    Card {
                        h3 { "Swap" }
                        SwapSidePanel { label: "From", side: Side::From }
                        div {
                            style: "display: flex; justify-content: center; margin: 0.5rem 0;",
                            "↓"
                        }
                        SwapSidePanel { label: "To", side: Side::To }
                        SwapMetadata {}
                    }
                }
            }
        }
    }
}
