//! HTTP dashboard over the mock XEM ledger: node status, account and
//! transaction tabs plus a per-process session of watched accounts.

pub mod config;
pub mod errors;
pub mod routes;
pub mod session;
pub mod ui;

pub use config::{Args, Config};
pub use routes::{AppState, router};
pub use session::SessionContext;
