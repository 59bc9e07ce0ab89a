pub mod account;
pub mod error;
pub mod handshake;
pub mod keeper;
pub mod msg;
pub mod port;
pub mod query;
pub mod state;
