// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Comparator-driven, in-place quicksort, and the structural packet ordering it is used with.
//!
//! ```ignore
//! let mut packets = [packet_quicksort::packet![9], packet_quicksort::packet![[8, 7, 6]]];
//! packet_quicksort::sort_by(&mut packets, packet_quicksort::packet::is_ordered)?;
//! ```

mod error;
pub mod packet;
pub mod quicksort;

pub use error::Error;
pub use quicksort::{sort, sort_by, sort_by_ordering, sort_with, Driver};
