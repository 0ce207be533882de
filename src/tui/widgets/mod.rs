pub mod action_button;
pub mod filter_panel;
pub mod overflow_menu;
pub mod search_input;
pub mod select;
