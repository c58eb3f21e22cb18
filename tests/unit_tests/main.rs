#[path = "../helpers/mod.rs"]
mod helpers;

mod domain;
mod presentation;
