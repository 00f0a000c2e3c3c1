//! Access flag persistence

pub mod file_store;

pub use file_store::FileAccessStore;
