//! UI layer for the desktop GUI: the single-page app shell and its
//! section renderers.

pub mod app;

pub use app::{PortfolioApp, StartupConfig};
