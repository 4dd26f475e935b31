//! IDs for depots in the product catalog.

use std::fmt;

/// An ID for a depot: a logical grouping of files delivered to a customer as a single unit.
///
/// See <https://partner.steamgames.com/doc/store/application/depots>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DepotId(u32);

impl DepotId {
	/// A value used to represent an invalid depot.
	pub const INVALID: Self = Self(0);

	/// Creates a new [`DepotId`].
	pub const fn new(value: u32) -> Self {
		Self(value)
	}

	/// Returns the underlying integer value.
	pub const fn as_u32(self) -> u32 {
		self.0
	}
}

impl fmt::Display for DepotId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl From<DepotId> for u32 {
	fn from(depot_id: DepotId) -> Self {
		depot_id.as_u32()
	}
}

impl From<u32> for DepotId {
	fn from(value: u32) -> Self {
		Self::new(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn conversions_round_trip() {
		for value in [0_u32, 1, u32::MAX] {
			assert_eq!(u32::from(DepotId::from(value)), value);
		}
	}

	#[test]
	fn displays_as_bare_number() {
		assert_eq!(DepotId::new(53).to_string(), "53");
	}
}
