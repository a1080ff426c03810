pub mod links;
pub mod screen_model;
pub mod session;
pub mod site_basics;
pub mod strings;
pub mod widgets;
