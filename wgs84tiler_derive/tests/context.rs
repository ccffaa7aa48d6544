use anyhow::{Result, bail};
use wgs84tiler_derive::context;

#[context("loading tile {}/{}", x, y)]
fn failing(x: u32, y: u32) -> Result<u32> {
	bail!("file not found")
}

#[context("adding {a} and {b}")]
fn passing(a: u32, b: u32) -> Result<u32> {
	Ok(a + b)
}

struct Counter(u32);

impl Counter {
	#[context("incrementing counter at {}", self.0)]
	fn increment(&mut self, limit: u32) -> Result<u32> {
		if self.0 >= limit {
			bail!("limit {limit} reached");
		}
		self.0 += 1;
		Ok(self.0)
	}
}

#[test]
fn error_gets_context() {
	let err = failing(3, 4).unwrap_err();
	assert_eq!(err.to_string(), "loading tile 3/4");
	assert_eq!(err.root_cause().to_string(), "file not found");
}

#[test]
fn ok_passes_through() {
	assert_eq!(passing(2, 5).unwrap(), 7);
}

#[test]
fn methods_with_mutable_self() {
	let mut counter = Counter(0);
	assert_eq!(counter.increment(1).unwrap(), 1);
	let err = counter.increment(1).unwrap_err();
	assert_eq!(format!("{err:#}"), "incrementing counter at 1: limit 1 reached");
}
