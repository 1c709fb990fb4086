pub mod app;
pub mod entries;
