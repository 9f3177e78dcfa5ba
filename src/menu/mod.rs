pub mod hover;
pub mod menu_model;
pub mod scheduler;
