use api::prefs::swap_defaults::SwapDefaults;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub defaults: SwapDefaults,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(defaults: SwapDefaults) -> Self {
        Self(Arc::new(AppStateData { defaults }))
    }
}
