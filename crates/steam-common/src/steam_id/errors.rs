//! Error types used by the [`steam_id`] module.
//!
//! Two kinds of failure exist: parse errors, for input strings that do not match one of the
//! textual ID grammars, and [`WrongAccountType`], for operations handed an ID whose account
//! type they do not support. The latter is a contract violation by the caller rather than a
//! data quality problem, which is why it is a separate type.
//!
//! [`steam_id`]: crate::steam_id

use std::num::ParseIntError;

use crate::AccountType;

/// An operation was given a [`SteamId`] whose account type it does not support.
///
/// Returned by [`SteamId::to_steam2()`], [`SteamId::clan_to_chat()`],
/// [`SteamId::chat_to_clan()`], and their delegates.
///
/// [`SteamId`]: super::SteamId
/// [`SteamId::to_steam2()`]: super::SteamId::to_steam2
/// [`SteamId::clan_to_chat()`]: super::SteamId::clan_to_chat
/// [`SteamId::chat_to_clan()`]: super::SteamId::chat_to_clan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected}, but the account type is `{actual}`")]
pub struct WrongAccountType {
	/// What the operation required.
	pub expected: &'static str,

	/// The account type that was actually supplied.
	pub actual: AccountType,
}

/// Errors returned from [`SteamId::parse_steam2()`].
///
/// [`SteamId::parse_steam2()`]: super::SteamId::parse_steam2
#[derive(Debug, PartialEq, Error)]
pub enum ParseSteam2IdError<'a> {
	/// Steam2 IDs all start with `STEAM_`.
	#[error("missing `STEAM_` prefix")]
	MissingPrefix,

	/// The X segment in `STEAM_X:Y:Z` was missing.
	#[error("missing X segment")]
	MissingX,

	/// The X segment in `STEAM_X:Y:Z` was not a universe digit.
	#[error("X segment should be a digit between 0 and 4 but is `{actual}`")]
	InvalidX {
		/// The actual value.
		actual: &'a str,
	},

	/// The Y segment in `STEAM_X:Y:Z` was missing.
	#[error("missing Y segment")]
	MissingY,

	/// The Y segment in `STEAM_X:Y:Z` was not 0 or 1.
	#[error("Y segment should be 0 or 1 but is `{actual}`")]
	InvalidY {
		/// The actual value.
		actual: &'a str,
	},

	/// The Z segment in `STEAM_X:Y:Z` was missing.
	#[error("missing Z segment")]
	MissingZ,

	/// The Z segment in `STEAM_X:Y:Z` contained something other than digits.
	#[error("invalid Z segment: `{actual}`")]
	InvalidZ {
		/// The actual value.
		actual: &'a str,
	},

	/// The Z segment in `STEAM_X:Y:Z` was a number too big for an account number.
	#[error("Z segment `{actual}` does not fit a 32-bit account number")]
	OutOfRangeZ {
		/// The actual value.
		actual: &'a str,

		/// The source error we got from trying to parse the segment.
		source: ParseIntError,
	},
}

/// Errors returned from [`SteamId::parse_steam3()`].
///
/// [`SteamId::parse_steam3()`]: super::SteamId::parse_steam3
#[derive(Debug, PartialEq, Error)]
pub enum ParseSteam3IdError<'a> {
	/// The `[]` brackets surrounding the ID were missing or unbalanced.
	#[error("missing `[]` brackets surrounding the ID")]
	MissingBrackets,

	/// The account type segment was missing.
	#[error("missing account type segment")]
	MissingType,

	/// The account type segment was not a known type character.
	#[error("unknown account type segment `{actual}`")]
	InvalidType {
		/// The actual value.
		actual: &'a str,
	},

	/// The account type segment matches the grammar but has no account type mapped to it.
	#[error("account type segment `{actual}` cannot be parsed into an ID")]
	UnsupportedType {
		/// The actual value.
		actual: &'a str,
	},

	/// The universe segment was missing.
	#[error("missing universe segment")]
	MissingUniverse,

	/// The universe segment was not a universe digit.
	#[error("universe segment should be a digit between 0 and 4 but is `{actual}`")]
	InvalidUniverse {
		/// The actual value.
		actual: &'a str,
	},

	/// The account ID segment was missing.
	#[error("missing account ID segment")]
	MissingAccountId,

	/// The account ID segment contained something other than digits.
	#[error("invalid account ID segment: `{actual}`")]
	InvalidAccountId {
		/// The actual value.
		actual: &'a str,
	},

	/// The account ID segment was a number too big for an account ID.
	#[error("account ID segment `{actual}` does not fit 32 bits")]
	OutOfRangeAccountId {
		/// The actual value.
		actual: &'a str,

		/// The source error we got from trying to parse the segment.
		source: ParseIntError,
	},

	/// The instance segment contained something other than digits.
	#[error("invalid instance segment: `{actual}`")]
	InvalidInstance {
		/// The actual value.
		actual: &'a str,
	},

	/// The instance segment was a number too big for an instance field.
	#[error("instance segment `{actual}` does not fit 32 bits")]
	OutOfRangeInstance {
		/// The actual value.
		actual: &'a str,

		/// The source error we got from trying to parse the segment.
		source: ParseIntError,
	},
}

/// Errors returned by [`SteamId`]'s [`FromStr`] implementation.
///
/// [`SteamId`]: super::SteamId
/// [`FromStr`]: std::str::FromStr
#[non_exhaustive]
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseSteamIdError {
	/// The string did not match any known formats.
	#[error("unrecognized SteamID format")]
	UnrecognizedFormat,
}
