pub mod api;
pub mod model;
pub mod ui;
pub mod view_model;
