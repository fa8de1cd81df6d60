#![cfg_attr(not(test), no_std)]

//! Platform-independent core of the Fragrance Maker handheld app: recipe
//! selection, button model, text console surfaces, and the polling loop.

pub mod app;
pub mod config;
pub mod console;
pub mod input;
pub mod platform;
pub mod recipe;
pub mod render;
pub mod runner;
