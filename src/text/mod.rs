pub mod composer;
pub mod interpolate;
pub mod rich_text;
pub mod template;
