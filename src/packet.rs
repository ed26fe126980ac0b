// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Nested integer/list packets and their structural ordering.

use std::{cmp::Ordering, fmt};
use crate::{quicksort::ordered_strictly, Error};


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	Int(u32),
	List(Vec<Value>),
}

impl Value {
	pub fn divider(int: u32) -> Self {
		Value::List(vec![Value::List(vec![Value::Int(int)])])
	}

	pub fn is_divider(&self) -> bool {
		let Value::List(values) = self else { return false };
		if values.len() != 1 { return false }
		let Value::List(values) = &values[0] else { return false };
		if values.len() != 1 { return false }
		matches!(&values[0], Value::Int(2 | 6))
	}

	// An integer reads as the singleton list holding it.
	fn items(&self) -> impl Iterator<Item = &Value> + '_ {
		use {std::iter::once, either::Either};
		match self {
			Value::Int(_) => Either::Left(once(self)),
			Value::List(values) => Either::Right(values.iter()),
		}
	}

	/// Integers numerically, lists element-wise and then by length.
	pub fn compare(&self, other: &Value) -> Ordering {
		use {itertools::{EitherOrBoth::*, Itertools as _}, Value::*};
		match (self, other) {
			(Int(left), Int(right)) => left.cmp(right),
			_ => self.items()
				.zip_longest(other.items())
				.map(|pair| match pair {
					Both(left, right) => left.compare(right),
					Left(_) => Ordering::Greater,
					Right(_) => Ordering::Less,
				})
				.find(|ordering| ordering.is_ne())
				.unwrap_or(Ordering::Equal),
		}
	}
}

/// Sort key predicate: fails when neither packet comes first.
pub fn is_ordered(left: &Value, right: &Value) -> Result<bool, Error> {
	ordered_strictly(left.compare(right))
}


impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use itertools::Itertools as _;
		match self {
			Value::Int(int) => write!(f, "{int}"),
			Value::List(values) => write!(f, "[{}]", values.iter().format(",")),
		}
	}
}


#[macro_export]
macro_rules! packet {
	( @value [ $( $item:tt ),* $(,)? ] ) => {
		$crate::packet::Value::List(vec![ $( $crate::packet!(@value $item) ),* ])
	};
	( @value $int:literal ) => { $crate::packet::Value::Int($int) };
	( $( $item:tt ),* $(,)? ) => { $crate::packet!(@value [ $( $item ),* ]) };
}
