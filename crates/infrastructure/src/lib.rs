//! PowerDNS Remote Backend Infrastructure Layer
pub mod database;
pub mod remote;
pub mod repositories;
pub mod suffix;
