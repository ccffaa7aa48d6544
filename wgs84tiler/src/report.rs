use crate::{TileOutcome, TileWriteError};
use std::{
	fmt::{self, Display},
	time::Duration,
};

/// Result of a slicing run.
///
/// `total` is the number of tiles actually written, so `total == new + merged` holds even for
/// runs that stopped early.
#[derive(Debug, Default)]
pub struct SliceReport {
	pub total: u64,
	pub new: u64,
	pub merged: u64,
	/// tiles that could not be written, in plan order
	pub failures: Vec<TileWriteError>,
	pub elapsed: Duration,
}

impl SliceReport {
	pub fn add(&mut self, outcome: TileOutcome) {
		match outcome {
			TileOutcome::Created => self.new += 1,
			TileOutcome::Merged => self.merged += 1,
		}
		self.total += 1;
	}

	pub fn add_failure(&mut self, failure: TileWriteError) {
		self.failures.push(failure);
	}

	pub fn is_complete(&self) -> bool {
		self.failures.is_empty()
	}
}

impl Display for SliceReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} tiles written ({} new, {} merged) in {:.2?}",
			self.total, self.new, self.merged, self.elapsed
		)?;
		if !self.failures.is_empty() {
			write!(f, ", {} failed", self.failures.len())?;
		}
		Ok(())
	}
}
