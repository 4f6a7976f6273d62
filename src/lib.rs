pub mod article;
pub mod catalog;
pub mod config;
pub mod form;
pub mod formatting;
pub mod tui;
