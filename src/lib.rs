pub mod config;
pub mod factory;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod persistence;
pub mod presenter;
pub mod search;
pub mod service;
pub mod startup;
pub mod ui;
