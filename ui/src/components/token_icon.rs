// ui/src/components/token_icon.rs
#![allow(non_snake_case)]

use dioxus::prelude::*;

const TOKEN_ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";
const DEFAULT_TOKEN_ICON: &str = "/default-token.svg";

/// Resolves a token symbol to its icon URL.
pub fn token_icon_url(symbol: &str) -> String {
    format!("{TOKEN_ICON_BASE_URL}/{symbol}.svg")
}

/// A small token icon with a generic fallback when the symbol has no icon
/// in the icon set. Purely presentational.
#[component]
pub fn TokenIcon(symbol: String, #[props(default = 24)] size: u32) -> Element {
    // Remember which symbol failed, so a symbol change retries the real icon.
    let mut failed_symbol = use_signal(|| None::<String>);

    let src = if failed_symbol.read().as_deref() == Some(symbol.as_str()) {
        DEFAULT_TOKEN_ICON.to_string()
    } else {
        token_icon_url(&symbol)
    };

    let symbol_for_error = symbol.clone();
    rsx! {
        img {
            src: "{src}",
            alt: "{symbol}",
            width: "{size}",
            height: "{size}",
            style: "flex-shrink: 0;",
            onerror: move |_| failed_symbol.set(Some(symbol_for_error.clone())),
        }
    }
}
