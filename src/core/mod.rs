// src/core/mod.rs

pub mod net;
pub mod table;

pub use net::{Fetch, HttpFetcher};
pub use table::{Cell, CellKind, CellTable};
