pub mod badges;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod interaction;
pub mod placeholders;
pub mod toast;
pub mod widget_init;
