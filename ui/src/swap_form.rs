//! The two-sided swap form state and its synchronization rule.
//!
//! Every edit flows through an explicit reducer (`set_side`) that merges the
//! edit and recomputes the dependent side in the same synchronous step, so a
//! rendered frame never shows the two sides out of agreement.

use api::catalog::TokenCatalog;
use api::prefs::swap_defaults::SwapDefaults;
use api::token::TokenAmount;

/// Names one side of the swap form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

/// A field-level edit of one side: a changed token, a changed amount, or both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenPatch {
    pub currency: Option<String>,
    pub amount: Option<f64>,
}

impl TokenPatch {
    pub fn currency(symbol: impl Into<String>) -> Self {
        Self {
            currency: Some(symbol.into()),
            ..Default::default()
        }
    }

    pub fn amount(amount: f64) -> Self {
        Self {
            amount: Some(amount),
            ..Default::default()
        }
    }
}

/// The swap form state pair.
///
/// The "from" side drives: its amount and either token selection determine
/// the displayed "to" amount. An edit of the "to" amount itself is accepted
/// and then immediately overwritten by the recomputed value.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapForm {
    from: TokenAmount,
    to: TokenAmount,
    defaults: SwapDefaults,
}

impl SwapForm {
    pub fn new(defaults: SwapDefaults) -> Self {
        Self {
            from: defaults.from.clone(),
            to: defaults.to.clone(),
            defaults,
        }
    }

    pub fn from_side(&self) -> &TokenAmount {
        &self.from
    }

    pub fn to_side(&self) -> &TokenAmount {
        &self.to
    }

    pub fn defaults(&self) -> &SwapDefaults {
        &self.defaults
    }

    /// Merges `patch` into the named side, then resynchronizes.
    ///
    /// The merge is field-level: an amount edit preserves the side's token,
    /// a token edit preserves the side's amount. A token patch equal to the
    /// opposite side's selection is ignored; the choosers never offer that
    /// option, so `from.currency != to.currency` holds by construction.
    pub fn set_side(&mut self, side: Side, patch: TokenPatch, catalog: Option<&TokenCatalog>) {
        let opposite = match side {
            Side::From => self.to.currency.clone(),
            Side::To => self.from.currency.clone(),
        };
        let target = match side {
            Side::From => &mut self.from,
            Side::To => &mut self.to,
        };

        if let Some(currency) = patch.currency {
            if currency != opposite {
                target.currency = currency;
            }
        }
        if let Some(amount) = patch.amount {
            target.amount = if amount.is_finite() { amount } else { 0.0 };
        }

        self.resync(catalog);
    }

    /// Recomputes the dependent "to" amount from the current "from" side,
    /// leaving the "to" token untouched.
    ///
    /// While the catalog is not ready, or a selected symbol is unknown to
    /// it, the displayed amount degrades to zero. Also called once when a
    /// fresh catalog snapshot arrives.
    pub fn resync(&mut self, catalog: Option<&TokenCatalog>) {
        self.to.amount = catalog
            .and_then(|c| c.convert(&self.from, &self.to.currency))
            .unwrap_or(0.0);
    }

    /// The unit price of one "from" token in "to" units, when computable.
    /// Rendered as "1 FROM = X TO".
    pub fn unit_price(&self, catalog: Option<&TokenCatalog>) -> Option<f64> {
        catalog?.rate(&self.from.currency, &self.to.currency)
    }

    /// The reference-unit (USD) value of one side's current amount, when
    /// computable. Shown as a small sub-line under each input.
    pub fn side_value_in(
        &self,
        side: Side,
        symbol: &str,
        catalog: Option<&TokenCatalog>,
    ) -> Option<f64> {
        let token = match side {
            Side::From => &self.from,
            Side::To => &self.to,
        };
        catalog?.convert(token, symbol)
    }
}
