//! Core domain: record store, selector expansion, picker adapter, session launch

pub mod picker;
pub mod range;
pub mod session;
pub mod store;
