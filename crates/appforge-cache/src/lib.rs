#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod file_cache;
mod memory;

pub use file_cache::FileCache;
pub use memory::MemoryCache;
