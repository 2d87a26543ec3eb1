pub mod card_error;
pub mod card_plugin;
pub mod components;
pub mod curve;
pub mod heart;
pub mod oscillator;
