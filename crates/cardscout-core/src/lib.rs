pub mod catalog;
pub mod models;
pub mod persistence;
pub mod pipeline;
pub mod providers;
pub mod registry;
