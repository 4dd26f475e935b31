//! The account type field of a [`SteamId`].
//!
//! [`SteamId`]: crate::SteamId

use std::fmt;

/// The type of account a [`SteamId`] refers to.
///
/// Known account types are a closed set of small integers, but the bits of a packed ID are
/// never validated, so values outside the known set must survive a round-trip through this
/// type unchanged. It is therefore a thin wrapper around the underlying integer with named
/// constants for the known types, rather than an enum; [`SteamId::is_valid()`] is the place
/// where unknown values get rejected.
///
/// [`SteamId`]: crate::SteamId
/// [`SteamId::is_valid()`]: crate::SteamId::is_valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountType(u8);

impl AccountType {
	/// An invalid account type.
	pub const INVALID: Self = Self(0);

	/// Individual user accounts.
	pub const INDIVIDUAL: Self = Self(1);

	/// Multiseat cybercafe accounts.
	pub const MULTISEAT: Self = Self(2);

	/// Persistent game server accounts.
	pub const GAME_SERVER: Self = Self(3);

	/// Anonymous game server accounts.
	pub const ANON_GAME_SERVER: Self = Self(4);

	/// Pending individual user accounts.
	pub const PENDING: Self = Self(5);

	/// Content server accounts.
	pub const CONTENT_SERVER: Self = Self(6);

	/// Clan accounts.
	pub const CLAN: Self = Self(7);

	/// Chat room accounts.
	pub const CHAT: Self = Self(8);

	/// Faked accounts for console (PSN) friends.
	pub const CONSOLE_USER: Self = Self(9);

	/// Anonymous user accounts.
	pub const ANON_USER: Self = Self(10);

	/// Creates an [`AccountType`] from its underlying integer value.
	///
	/// Values outside the known set are carried as-is.
	pub const fn from_u8(value: u8) -> Self {
		Self(value)
	}

	/// Returns the underlying integer value.
	pub const fn as_u8(self) -> u8 {
		self.0
	}
}

impl fmt::Display for AccountType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			AccountType::INVALID => f.write_str("Invalid"),
			AccountType::INDIVIDUAL => f.write_str("Individual"),
			AccountType::MULTISEAT => f.write_str("Multiseat"),
			AccountType::GAME_SERVER => f.write_str("GameServer"),
			AccountType::ANON_GAME_SERVER => f.write_str("AnonGameServer"),
			AccountType::PENDING => f.write_str("Pending"),
			AccountType::CONTENT_SERVER => f.write_str("ContentServer"),
			AccountType::CLAN => f.write_str("Clan"),
			AccountType::CHAT => f.write_str("Chat"),
			AccountType::CONSOLE_USER => f.write_str("ConsoleUser"),
			AccountType::ANON_USER => f.write_str("AnonUser"),
			AccountType(value) => write!(f, "{value}"),
		}
	}
}

impl From<AccountType> for u8 {
	fn from(account_type: AccountType) -> Self {
		account_type.as_u8()
	}
}

impl From<u8> for AccountType {
	fn from(value: u8) -> Self {
		Self::from_u8(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_values_round_trip() {
		assert_eq!(AccountType::from_u8(11).as_u8(), 11_u8);
		assert_eq!(AccountType::from_u8(0xFF).as_u8(), 0xFF_u8);
	}

	#[test]
	fn display_uses_known_names() {
		assert_eq!(AccountType::CLAN.to_string(), "Clan");
		assert_eq!(AccountType::ANON_USER.to_string(), "AnonUser");
		assert_eq!(AccountType::from_u8(12).to_string(), "12");
	}
}
