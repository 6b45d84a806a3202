pub mod app;
pub mod component;
pub mod components;
pub mod handlers;
pub mod ui;
