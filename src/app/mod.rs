mod banking_app;
mod config;

pub use banking_app::BankingApp;
pub use config::AppConfig;
