//! UI Components

pub mod export_buttons;
pub mod fields;
pub mod header;
pub mod map_dialog;
pub mod position_card;
pub mod preview_panel;
pub mod token_panel;
