//! All internal logic for interacting with and downloading from the wallpaper gallery.

extern crate walldrop_common;

pub mod auth;
pub mod error;
pub mod extractor;
pub mod extractor_config;
pub mod html;
pub mod wallhaven;

pub use crate::extractor::caps::Auth;
pub use crate::extractor::Gallery;
pub use crate::wallhaven::WallhavenClient;

#[cfg(test)]
mod test;
