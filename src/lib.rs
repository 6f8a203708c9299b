#[macro_use]
extern crate log;

#[macro_use]
extern crate derive_builder;

pub mod app;
pub mod configuration;
pub mod naming;
pub mod reporter;
pub mod time;
pub mod tree;
