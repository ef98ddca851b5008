// ui/src/components/token_amount_input.rs
use dioxus::prelude::*;

/// Reduces raw keystrokes to a plain decimal string: digits and at most one
/// decimal point, capped at `max_integers`/`max_decimals` digits per part.
fn sanitize_amount(raw: &str, max_integers: u8, max_decimals: u8) -> String {
    let mut sanitized = String::new();
    let mut has_decimal = false;
    let mut integer_digits = 0;
    let mut decimal_digits = 0;
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            if has_decimal {
                if decimal_digits < max_decimals {
                    sanitized.push(ch);
                    decimal_digits += 1;
                }
            } else if integer_digits < max_integers {
                sanitized.push(ch);
                integer_digits += 1;
            }
        } else if ch == '.' && !has_decimal {
            sanitized.push(ch);
            has_decimal = true;
        }
    }
    sanitized
}

#[component]
pub fn TokenAmountInput(
    value: String,
    on_input: EventHandler<String>,
    max_integers: u8,
    max_decimals: u8,
    placeholder: String,
) -> Element {
    let is_numerically_zero = value.trim().parse::<f64>() == Ok(0.0);

    // A fully controlled input: the caller owns the string, this component
    // only sanitizes keystrokes before reporting them.
    let handle_new_input = move |new_value: String| {
        on_input.call(sanitize_amount(&new_value, max_integers, max_decimals));
    };

    let handle_interaction = move || {
        if is_numerically_zero {
            on_input.call("".to_string());
        }
    };
    let handle_interaction_click = handle_interaction;

    let show_placeholder = value.is_empty();
    let display_value = if show_placeholder { "" } else { &value };

    let focus_css = r#"
        input.hide-placeholder-focus:focus::placeholder {
            color: transparent;
            opacity: 0;
        }
    "#;

    rsx! {
        style { "{focus_css}" }
        div {
            style: "flex-grow: 1; display: flex;",
            input {
                r#type: "text",
                class: "pico-input hide-placeholder-focus",
                style: "margin-bottom: 0; width: 100%; font-size: 1.5rem;",
                inputmode: "decimal",

                placeholder: "{placeholder}",
                value: "{display_value}",

                onfocus: move |_| handle_interaction(),
                oninput: move |event| { handle_new_input(event.value()) },
                onclick: move |e| {
                    e.stop_propagation();
                    handle_interaction_click();
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_everything_but_digits_and_one_decimal_point() {
        assert_eq!(sanitize_amount("12a.3.4x", 12, 6), "12.34");
        assert_eq!(sanitize_amount("-1e5", 12, 6), "15");
        assert_eq!(sanitize_amount(".", 12, 6), ".");
    }

    #[test]
    fn caps_integer_and_decimal_digits() {
        assert_eq!(sanitize_amount("123456", 3, 6), "123");
        assert_eq!(sanitize_amount("1.23456", 12, 2), "1.23");
    }

    #[test]
    fn sanitized_output_parses_or_is_empty() {
        for raw in ["", "abc", "1.5", "0007", "..9"] {
            let sanitized = sanitize_amount(raw, 12, 6);
            assert!(
                sanitized.is_empty()
                    || sanitized == "."
                    || sanitized.parse::<f64>().is_ok(),
                "{raw:?} -> {sanitized:?}"
            );
        }
    }
}
