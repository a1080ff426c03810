pub mod choice_group;
pub mod field_model;
pub mod input;
pub mod resolver;
