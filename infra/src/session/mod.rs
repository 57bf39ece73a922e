//! Session storage implementations

pub mod memory;

pub use memory::MemorySessionStore;
