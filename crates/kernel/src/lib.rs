//! Toolbox Backend Kernel
//!
//! Role-based access control and menu tree composition for the toolbox
//! admin backend. HTTP routing, credential verification, and response
//! rendering live in the consuming service; this crate owns the admission
//! decisions and the tree reads behind them.

pub mod access;
pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod store;

pub use config::Config;
pub use error::{KernelError, KernelResult};
