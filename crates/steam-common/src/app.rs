//! IDs for applications in the product catalog.

use std::fmt;

/// The highest representable app ID.
const MAX: u32 = 16_777_215;

/// An ID for the main representation of a product.
///
/// See <https://partner.steamgames.com/doc/store/application>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(try_from = "u32", into = "u32")
)]
pub struct AppId(u32);

/// Error type for conversions from [`u32`] to [`AppId`].
#[allow(missing_copy_implementations)]
#[derive(Debug, PartialEq, Eq, Error)]
#[error("app ID cannot be more than {}", MAX)]
pub struct InvalidAppId(());

impl AppId {
	/// A value used to represent an invalid app.
	pub const INVALID: Self = Self(0);

	/// The highest valid app ID.
	pub const MAX: Self = Self(MAX);

	/// Creates a new [`AppId`].
	///
	/// Fails if `value` is bigger than [`AppId::MAX`].
	pub const fn new(value: u32) -> Result<Self, InvalidAppId> {
		if value > MAX {
			return Err(InvalidAppId(()));
		}

		Ok(Self(value))
	}

	/// Returns the underlying integer value.
	pub const fn as_u32(self) -> u32 {
		self.0
	}
}

impl fmt::Display for AppId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl From<AppId> for u32 {
	fn from(app_id: AppId) -> Self {
		app_id.as_u32()
	}
}

impl TryFrom<u32> for AppId {
	type Error = InvalidAppId;

	fn try_from(value: u32) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn in_range_values_are_accepted() {
		assert_eq!(AppId::new(1).map(AppId::as_u32), Ok(1_u32));
		assert_eq!(AppId::new(16_777_215), Ok(AppId::MAX));
	}

	#[test]
	fn out_of_range_values_are_rejected() {
		assert!(AppId::new(16_777_216).is_err());
		assert!(AppId::try_from(u32::MAX).is_err());
	}

	#[test]
	fn displays_as_bare_number() {
		assert_eq!(AppId::new(730).unwrap().to_string(), "730");
	}
}
