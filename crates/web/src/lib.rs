pub mod app;
pub mod components;
