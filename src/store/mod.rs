pub mod script_store;
pub mod settings_store;
