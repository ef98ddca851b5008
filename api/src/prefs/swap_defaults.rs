use crate::token::TokenAmount;
use serde::Deserialize;
use serde::Serialize;
use std::env;

/// Represents the initial contents of the swap form. Intended for saving to a
/// file, editing in a settings dialog, etc.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SwapDefaults {
    pub from: TokenAmount,
    pub to: TokenAmount,
}

impl SwapDefaults {
    /// Creates a SwapDefaults instance from environment variables,
    /// with conservative in-code fallbacks.
    ///
    /// # Environment Variables:
    /// - `SWAP_FROM_CURRENCY`: default "from" symbol, defaults to "BUSD"
    /// - `SWAP_FROM_AMOUNT`: default "from" amount, defaults to 0
    /// - `SWAP_TO_CURRENCY`: default "to" symbol, defaults to "USD"
    /// - `SWAP_TO_AMOUNT`: default "to" amount, defaults to 0
    pub fn from_env() -> Self {
        const FROM_CURRENCY: &str = "BUSD";
        const TO_CURRENCY: &str = "USD";

        let symbol_var = |name: &str, fallback: &str| -> String {
            env::var(name)
                .ok()
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };
        let amount_var = |name: &str| -> f64 {
            env::var(name)
                .ok()
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|a| a.is_finite() && *a >= 0.0)
                .unwrap_or(0.0)
        };

        let mut from_currency = symbol_var("SWAP_FROM_CURRENCY", FROM_CURRENCY);
        let mut to_currency = symbol_var("SWAP_TO_CURRENCY", TO_CURRENCY);

        // The two sides must never select the same token.
        if from_currency == to_currency {
            from_currency = FROM_CURRENCY.to_string();
            to_currency = TO_CURRENCY.to_string();
        }

        Self {
            from: TokenAmount::new(from_currency, amount_var("SWAP_FROM_AMOUNT")),
            to: TokenAmount::new(to_currency, amount_var("SWAP_TO_AMOUNT")),
        }
    }
}

impl Default for SwapDefaults {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = [
        "SWAP_FROM_CURRENCY",
        "SWAP_FROM_AMOUNT",
        "SWAP_TO_CURRENCY",
        "SWAP_TO_AMOUNT",
    ];

    // One test covers all the env cases so they cannot race each other.
    #[test]
    fn env_overrides_and_fallbacks() {
        for var in VARS {
            env::remove_var(var);
        }
        let defaults = SwapDefaults::from_env();
        assert_eq!(defaults.from, TokenAmount::new("BUSD", 0.0));
        assert_eq!(defaults.to, TokenAmount::new("USD", 0.0));

        env::set_var("SWAP_FROM_CURRENCY", "eth");
        env::set_var("SWAP_FROM_AMOUNT", "1.5");
        env::set_var("SWAP_TO_CURRENCY", "ATOM");
        env::set_var("SWAP_TO_AMOUNT", "-3");
        let defaults = SwapDefaults::from_env();
        assert_eq!(defaults.from, TokenAmount::new("ETH", 1.5));
        // A negative amount is not a usable default.
        assert_eq!(defaults.to, TokenAmount::new("ATOM", 0.0));

        // The two sides may not name the same token.
        env::set_var("SWAP_FROM_CURRENCY", "USD");
        env::set_var("SWAP_TO_CURRENCY", "USD");
        let defaults = SwapDefaults::from_env();
        assert_eq!(defaults.from.currency, "BUSD");
        assert_eq!(defaults.to.currency, "USD");

        for var in VARS {
            env::remove_var(var);
        }
    }
}
