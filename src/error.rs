// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("invalid range {start}..{end} for a sequence of length {len}")]
	InvalidRange { start: usize, end: usize, len: usize },
	#[error("could not determine relative order")]
	IndeterminateOrder,
}


#[test]
fn messages() {
	assert_eq!(Error::InvalidRange { start: 3, end: 2, len: 4 }.to_string(),
		"invalid range 3..2 for a sequence of length 4");
	assert_eq!(Error::IndeterminateOrder.to_string(), "could not determine relative order");
}
