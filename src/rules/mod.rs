pub mod builder;
pub mod hydrate;
pub mod option_map;
pub mod render;
pub mod row_model;
