pub mod swap_defaults;
