pub mod about_modal;
pub mod editor;
pub mod script_list;
pub mod status_bar;
pub mod toolbar;
