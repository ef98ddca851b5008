//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, forms, and modals.
pub mod pico;
pub mod token_amount_input;
pub mod token_chooser;
pub mod token_icon;
