pub mod aggregate;
pub mod app;
pub mod chart;
pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod interval;
pub mod models;
pub mod state;
pub mod ui;

pub use aggregate::aggregate;
pub use app::router;
pub use client::SignupClient;
pub use config::Config;
pub use controller::Dashboard;
pub use interval::Interval;
pub use state::AppState;
