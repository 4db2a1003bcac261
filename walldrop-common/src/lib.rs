//! Common data structs shared by the walldrop crates.
//!
//! Everything that describes *what* a wallpaper is lives here: the parsed [`Wallpaper`](wallpaper::Wallpaper)
//! record, its purity and category classification, and the [`SearchQuery`](search::SearchQuery)
//! sent to the gallery's search page.

// Public Exports
pub use bitflags;
pub use log;
pub use reqwest;
pub use serde;
pub use tokio;

pub mod search;
pub mod wallpaper;

/// User-agent used for every request sent to the gallery.
///
/// It will always follow the version declared inside ```Cargo.toml```
pub const USER_AGENT: &str = concat!("Walldrop/", env!("CARGO_PKG_VERSION"));
