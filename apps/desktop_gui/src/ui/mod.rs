//! UI layer for the steering panel: app shell and preview painting.

pub mod app;

pub use app::SteerPanelApp;
