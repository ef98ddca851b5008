//! Defines the mutable, reactive state for the application's UI.

use api::catalog::TokenCatalog;
use dioxus::prelude::*;

use crate::swap_form::SwapForm;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view. It is separate from the core,
/// immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// A signal holding the current catalog snapshot. `None` while loading;
    /// replaced wholesale on every refresh, never mutated in place.
    pub catalog: Signal<Option<TokenCatalog>>,
    /// A signal holding the swap form state pair; mutated only through the
    /// form's reducer.
    pub form: Signal<SwapForm>,
}
