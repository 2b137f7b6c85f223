pub mod csrf;
pub mod item_form;
