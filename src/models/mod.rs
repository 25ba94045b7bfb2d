//! Data models for address book entities.

pub mod record;

pub use record::Record;
