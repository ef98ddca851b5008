// ui/src/components/token_chooser.rs
#![allow(non_snake_case)]

use api::catalog::TokenCatalog;
use dioxus::prelude::*;

use crate::components::token_icon::TokenIcon;

#[derive(Props, PartialEq, Clone)]
pub struct TokenChooserProps {
    /// The symbol currently selected on this side of the form.
    pub selected: String,
    /// The symbol selected on the *other* side. It is never offered here,
    /// so the two sides can never select the same token.
    pub exclude: String,
    /// The current catalog snapshot; the option list is empty while loading.
    pub catalog: Signal<Option<TokenCatalog>>,
    pub on_select: EventHandler<String>,
    #[props(optional)]
    pub style: Option<String>,
}

/// A searchable dropdown for selecting one side's token.
pub fn TokenChooser(props: TokenChooserProps) -> Element {
    let mut is_open = use_signal(|| false);
    let mut filter_text = use_signal(|| "".to_string());

    let filtered_tokens: Vec<String> = props
        .catalog
        .read()
        .iter()
        .flat_map(|catalog| catalog.iter())
        .filter(|token| token.currency != props.exclude)
        .filter(|token| {
            let filter_lower = filter_text.read().to_lowercase();
            token.currency.to_lowercase().contains(&filter_lower)
        })
        .map(|token| token.currency.clone())
        .collect();

    let selected = props.selected.clone();
    let on_select = props.on_select;

    rsx! {
        div {
            style: "{props.style.as_deref().unwrap_or(\"\")}",
            div {
                style: "position: relative;",
                div {
                    class: "secondary",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 0.4rem;
                        padding: 0.375rem 0.5rem;
                        line-height: 1.2;
                        cursor: pointer;
                        border: 1px solid var(--pico-secondary-border);
                        border-radius: var(--pico-border-radius);
                        ",
                    title: "Choose token.",
                    onclick: move |_| is_open.toggle(),
                    TokenIcon { symbol: selected.clone() }
                    strong { "{props.selected}" }
                    span { "↓" }
                }
                if is_open() {
                    // Backdrop to catch clicks outside the dropdown
                    div {
                        style: "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 9; background: transparent;",
                        onclick: move |_| is_open.set(false),
                    }
                    div {
                        // Stop click propagation to prevent the backdrop from closing the dropdown
                        onclick: |e| e.stop_propagation(),
                        style: "
                            position: absolute;
                            min-width: 100%;
                            z-index: 10;
                            background-color: var(--pico-card-background-color);
                            border: 1px solid var(--pico-card-border-color);
                            border-radius: var(--pico-border-radius);
                            padding: 0.5rem;
                            margin-top: 0.25rem;
                        ",
                        input {
                            r#type: "text",
                            placeholder: "Search tokens...",
                            value: "{filter_text}",
                            oninput: move |evt| filter_text.set(evt.value()),
                            style: "margin-bottom: 0.5rem; width: 100%;",
                            onmounted: move |mounted| {
                                spawn(async move {
                                    mounted.data.set_focus(true).await.ok();
                                });
                            },
                        }
                        ul {
                            role: "listbox",
                            style: "list-style: none; margin: 0; padding: 0; max-height: 250px; overflow-y: auto;",
                            {
                                filtered_tokens
                                    .into_iter()
                                    .map(|symbol| {
                                        let is_selected = props.selected == symbol;
                                        let symbol_for_click = symbol.clone();
                                        rsx! {
                                            li {
                                                key: "{symbol}",
                                                style: "display: flex; align-items: center; gap: 0.4rem; cursor: pointer; padding: 0.3rem; white-space: nowrap;",
                                                onclick: move |_| {
                                                    on_select.call(symbol_for_click.clone());
                                                    is_open.set(false);
                                                },
                                                if is_selected {
                                                    span {
                                                        style: "width: 1.5rem;",
                                                        "✓"
                                                    }
                                                } else {
                                                    span {
                                                        style: "width: 1.5rem; visibility: hidden;",
                                                        "✓"
                                                    }
                                                }
                                                TokenIcon { symbol: symbol.clone() }
                                                span {
                                                    "{symbol}"
                                                }
                                            }
                                        }
                                    })
                            }
                        }
                    }
                }
            }
        }
    }
}
