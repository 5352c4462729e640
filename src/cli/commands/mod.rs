//! One module per mode flag

pub mod add;
pub mod connect;
pub mod delete;
pub mod output;
pub mod show;
