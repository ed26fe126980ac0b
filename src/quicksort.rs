// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! In-place quicksort over a caller-supplied “is ordered” predicate.
//!
//! The predicate answers whether `a` may stay before (or level with) `b`; an `Err` from it
//! aborts the sort and is handed back as-is. The pivot is always the last element of the
//! range being partitioned.

use std::{cmp::Ordering, ops::Range};
use crate::Error;


/// How pending ranges are walked; both produce the same comparator calls in the same order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
	#[default]
	Recursive,
	/// Keeps pending ranges on the heap instead of the call stack.
	Stacked,
}


pub fn swap<T>(v: &mut [T], i: usize, j: usize) {
	if i == j { return }
	v.swap(i, j)
}

/// Maps a three-way ordering onto the predicate contract, refusing to decide ties.
pub fn ordered_strictly(ordering: Ordering) -> Result<bool, Error> {
	match ordering {
		Ordering::Less => Ok(true),
		Ordering::Greater => Ok(false),
		Ordering::Equal => Err(Error::IndeterminateOrder),
	}
}


// Returns where the second (pivot) element ended up.
fn order_pair<T, F>(v: &mut [T], start: usize, is_ordered: &mut F) -> Result<usize, Error>
where F: FnMut(&T, &T) -> Result<bool, Error> {
	if is_ordered(&v[start], &v[start + 1])? {
		Ok(start + 1)
	} else {
		swap(v, start, start + 1);
		Ok(start)
	}
}

/// Splits `v[start..end]` around its last element and returns that element’s new index.
pub fn partition<T, F>(v: &mut [T], start: usize, end: usize, is_ordered: &mut F)
-> Result<usize, Error>
where F: FnMut(&T, &T) -> Result<bool, Error> {
	if end > v.len() || end <= start {
		return Err(Error::InvalidRange { start, end, len: v.len() })
	}

	match end - start {
		1 => return Ok(start),
		2 => return order_pair(v, start, is_ordered),
		_ => (),
	}

	// `v[high..end - 1]` holds everything found to belong after the pivot.
	let pivot = end - 1;
	let mut high = pivot;
	let mut i = start;
	while i < high {
		if is_ordered(&v[i], &v[pivot])? {
			i += 1
		} else {
			high -= 1;
			swap(v, i, high);
		}
	}
	swap(v, high, pivot);

	tracing::trace!(start, end, pivot = high, "partitioned");
	Ok(high)
}


fn check_range(len: usize, start: usize, end: usize) -> Result<(), Error> {
	if end > len || end < start { return Err(Error::InvalidRange { start, end, len }) }
	Ok(())
}

pub fn sort_range<T, F>(v: &mut [T], start: usize, end: usize, is_ordered: &mut F)
-> Result<(), Error>
where F: FnMut(&T, &T) -> Result<bool, Error> {
	check_range(v.len(), start, end)?;
	match end - start {
		0 | 1 => Ok(()),
		2 => order_pair(v, start, is_ordered).map(drop),
		_ => {
			let p = partition(v, start, end, is_ordered)?;
			sort_range(v, start, p, is_ordered)?;
			sort_range(v, p + 1, end, is_ordered)
		}
	}
}

pub fn sort_range_stacked<T, F>(v: &mut [T], start: usize, end: usize, is_ordered: &mut F)
-> Result<(), Error>
where F: FnMut(&T, &T) -> Result<bool, Error> {
	check_range(v.len(), start, end)?;

	// Ranges shorter than 2 never reach the comparator, so they are not queued.
	let mut pending = vec![start..end];
	while let Some(Range { start, end }) = pending.pop() {
		match end - start {
			0 | 1 => (),
			2 => { order_pair(v, start, is_ordered)?; }
			_ => {
				let p = partition(v, start, end, is_ordered)?;
				// Right first, so the left side is popped (and sorted) first.
				for range in [p + 1..end, start..p] {
					if range.len() >= 2 { pending.push(range) }
				}
			}
		}
	}
	Ok(())
}


#[tracing::instrument(level = "debug", skip_all, fields(len = v.len(), driver = %driver))]
pub fn sort_with<T, F>(v: &mut [T], driver: Driver, mut is_ordered: F) -> Result<&mut [T], Error>
where F: FnMut(&T, &T) -> Result<bool, Error> {
	let len = v.len();
	let result = match driver {
		Driver::Recursive => sort_range(v, 0, len, &mut is_ordered),
		Driver::Stacked => sort_range_stacked(v, 0, len, &mut is_ordered),
	};
	if let Err(e) = result {
		tracing::debug!(error = %e, "sort aborted");
		return Err(e)
	}
	Ok(v)
}

pub fn sort_by<T, F>(v: &mut [T], is_ordered: F) -> Result<&mut [T], Error>
where F: FnMut(&T, &T) -> Result<bool, Error> {
	sort_with(v, Driver::default(), is_ordered)
}

/// Like [`sort_by`], but `Equal` from `cmp` aborts with [`Error::IndeterminateOrder`].
pub fn sort_by_ordering<T, F>(v: &mut [T], mut cmp: F) -> Result<&mut [T], Error>
where F: FnMut(&T, &T) -> Ordering {
	sort_by(v, |a, b| ordered_strictly(cmp(a, b)))
}

/// Sorts with `a <= b`, which settles ties on its own.
pub fn sort<T: PartialOrd>(v: &mut [T]) -> Result<&mut [T], Error> {
	sort_by(v, |a, b| Ok(a <= b))
}

pub fn is_sorted_by<T, F>(v: &[T], mut is_ordered: F) -> Result<bool, Error>
where F: FnMut(&T, &T) -> Result<bool, Error> {
	use itertools::Itertools as _;
	for (a, b) in v.iter().tuple_windows() {
		if !is_ordered(a, b)? { return Ok(false) }
	}
	Ok(true)
}


mod parsing {
	use std::{fmt, str::FromStr};
	use super::Driver;

	#[derive(Debug, PartialEq, Eq, thiserror::Error)]
	#[error("unknown driver {0:?} (expected \"recursive\" or \"stacked\")")]
	pub struct DriverError(String);

	impl FromStr for Driver {
		type Err = DriverError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s {
				"recursive" => Ok(Driver::Recursive),
				"stacked" => Ok(Driver::Stacked),
				_ => Err(DriverError(s.to_owned())),
			}
		}
	}

	impl fmt::Display for Driver {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str(match self {
				Driver::Recursive => "recursive",
				Driver::Stacked => "stacked",
			})
		}
	}
}

pub use parsing::DriverError;
