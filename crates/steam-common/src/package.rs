//! IDs for packages in the product catalog.

use std::fmt;

/// An ID for a package: a collection of applications and depots that can be sold as one unit
/// or granted based on the activation of a product key.
///
/// See <https://partner.steamgames.com/doc/store/application/packages>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PackageId(u32);

impl PackageId {
	/// A value used to represent an invalid package.
	pub const INVALID: Self = Self(0xFFFF_FFFF);

	/// The package granted to every account for free.
	pub const FREE_SUB: Self = Self(0);

	/// Creates a new [`PackageId`].
	pub const fn new(value: u32) -> Self {
		Self(value)
	}

	/// Returns the underlying integer value.
	pub const fn as_u32(self) -> u32 {
		self.0
	}
}

impl fmt::Display for PackageId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl From<PackageId> for u32 {
	fn from(package_id: PackageId) -> Self {
		package_id.as_u32()
	}
}

impl From<u32> for PackageId {
	fn from(value: u32) -> Self {
		Self::new(value)
	}
}
