//! Fruit Dodge: keep your finger on the screen and away from the falling fruit.

pub mod compute;
pub mod config;
pub mod entities;
pub mod history;
pub mod platform;
pub mod screens;
pub mod spr;
