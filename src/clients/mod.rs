//! Manga site client implementations with conditional compilation support.
//!
//! Each client is behind its own feature flag so minimal builds only include
//! the sites they need:
//! - `client-readmanga` - Enables the ReadManga client
//! - `all-clients` - Enables all clients (default)
//!
//! ```bash
//! cargo build --no-default-features --features client-readmanga
//! ```

#[cfg(feature = "client-readmanga")]
pub mod readmanga;

#[cfg(feature = "client-readmanga")]
pub use readmanga::ReadMangaClient;
