//! Hash collections backed by AHash.

pub use ahash::AHashMap as HashMap;
