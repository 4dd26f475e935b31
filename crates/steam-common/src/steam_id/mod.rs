//! A transparent wrapper around [`u64`] for working with [SteamID]s.
//!
//! [SteamID]: https://developer.valvesoftware.com/wiki/SteamID

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::{AccountType, Instance, Universe};

mod errors;
pub use errors::{ParseSteam2IdError, ParseSteam3IdError, ParseSteamIdError, WrongAccountType};

#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "rand")]
mod rand;

/// Mask for the account ID bits.
const ACCOUNT_ID_MASK: u64 = 0xFFFF_FFFF;

/// Mask for the instance bits, before shifting.
const INSTANCE_MASK: u64 = 0xF_FFFF;

/// Offset of the instance bits.
const INSTANCE_SHIFT: u64 = 32;

/// Mask for the account type bits, before shifting.
const ACCOUNT_TYPE_MASK: u64 = 0xF;

/// Offset of the account type bits.
const ACCOUNT_TYPE_SHIFT: u64 = 52;

/// Offset of the universe bits.
const UNIVERSE_SHIFT: u64 = 56;

/// The portion of the instance field that is meaningful for chat rooms.
const CHAT_INSTANCE_MASK: u32 = 0xFFF;

/// A globally unique identifier for Steam accounts, groups, lobbies, and chat rooms.
///
/// A `SteamId` packs four fields into one 64-bit value (bit 0 is the least significant):
///
/// | field | bits |
/// |---|---|
/// | account ID | 0..=31 |
/// | instance | 32..=51 |
/// | account type | 52..=55 |
/// | universe | 56..=63 |
///
/// None of the constructors validate anything: every bit pattern is representable, and every
/// accessor and predicate is total over all of them. [`SteamId::is_valid()`] is the one place
/// that decides whether an ID makes sense.
///
/// Equality, ordering, and hashing all work on the raw 64-bit value. To compare two IDs while
/// ignoring their instance bits, use [`SteamId::static_equals()`].
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamId(u64);

impl SteamId {
	/// Instance flag marking the chat room of a clan.
	pub const CLAN_FLAG: u32 = (CHAT_INSTANCE_MASK + 1) >> 1;

	/// Instance flag marking a lobby chat.
	pub const LOBBY_FLAG: u32 = (CHAT_INSTANCE_MASK + 1) >> 2;

	/// The ID with every field blank.
	pub const ZERO: Self = Self(0);

	/// Reported for user connections coming from an out of date game server that has not
	/// implemented the part of the protocol that provides its own ID.
	pub const OUT_OF_DATE_GAME_SERVER: Self = Self(0);

	/// Reported for user connections to a game server running in LAN mode.
	pub const LAN_MODE_GAME_SERVER: Self = Self(0);

	/// Reported for user connections to a game server that has just booted but has not yet
	/// logged on.
	pub const NOT_YET_INITIALIZED_GAME_SERVER: Self =
		Self::from_parts(1, AccountType::INVALID, Universe::INVALID, 0);

	/// Reported for user connections to a game server that skips Steam authentication but
	/// still wants to support the "Join Game" option in the friends list.
	pub const NON_STEAM_GAME_SERVER: Self =
		Self::from_parts(2, AccountType::INVALID, Universe::INVALID, 0);

	/// Creates a [`SteamId`] from its raw 64-bit representation.
	pub const fn from_u64(value: u64) -> Self {
		Self(value)
	}

	/// Returns the raw 64-bit representation of this ID.
	pub const fn as_u64(self) -> u64 {
		self.0
	}

	/// Packs the four parts of an ID into one value.
	///
	/// Nothing is validated; parts wider than their bit slot carry into the neighboring
	/// fields, matching the unchecked arithmetic of the wire format.
	pub const fn from_parts(
		account_id: u32,
		account_type: AccountType,
		universe: Universe,
		instance: u32,
	) -> Self {
		Self(
			(account_id as u64)
				.wrapping_add((instance as u64) << INSTANCE_SHIFT)
				.wrapping_add((account_type.as_u8() as u64) << ACCOUNT_TYPE_SHIFT)
				.wrapping_add((universe.as_u8() as u64) << UNIVERSE_SHIFT),
		)
	}

	/// Creates the anonymous user ID of the given universe.
	pub const fn anonymous_user(universe: Universe) -> Self {
		Self::from_parts(0, AccountType::ANON_USER, universe, 0)
	}

	/// Creates the anonymous game server ID of the given universe.
	pub const fn anonymous_game_server(universe: Universe) -> Self {
		Self::from_parts(0, AccountType::ANON_GAME_SERVER, universe, 0)
	}

	/// Creates an individual account ID with the given instance flags.
	pub const fn individual_account(
		account_id: u32,
		universe: Universe,
		instance: Instance,
	) -> Self {
		Self::from_parts(account_id, AccountType::INDIVIDUAL, universe, instance.as_u32())
	}

	/// Returns the account ID of this ID.
	pub const fn account_id(self) -> u32 {
		(self.0 & ACCOUNT_ID_MASK) as u32
	}

	/// Returns the dynamic instance bits of this ID.
	pub const fn account_instance(self) -> u32 {
		((self.0 >> INSTANCE_SHIFT) & INSTANCE_MASK) as u32
	}

	/// Returns the type of account this ID refers to.
	pub const fn account_type(self) -> AccountType {
		AccountType::from_u8(((self.0 >> ACCOUNT_TYPE_SHIFT) & ACCOUNT_TYPE_MASK) as u8)
	}

	/// Returns the universe this ID lives in.
	pub const fn universe(self) -> Universe {
		Universe::from_u8((self.0 >> UNIVERSE_SHIFT) as u8)
	}

	/// Returns whether this ID's account type matches `account_type`.
	const fn has_type(self, account_type: AccountType) -> bool {
		self.account_type().as_u8() == account_type.as_u8()
	}

	/// Returns whether this ID is considered valid.
	///
	/// Validity rejects out-of-range account type and universe bits, and enforces the extra
	/// constraints individual, clan, and game server accounts have on their account ID and
	/// instance fields. Every other operation on [`SteamId`] tolerates invalid IDs.
	pub const fn is_valid(self) -> bool {
		let account_type = self.account_type().as_u8();

		if account_type <= AccountType::INVALID.as_u8()
			|| account_type > AccountType::ANON_USER.as_u8()
		{
			return false;
		}

		let universe = self.universe().as_u8();

		if universe <= Universe::INVALID.as_u8() || universe > Universe::DEV.as_u8() {
			return false;
		}

		if self.has_type(AccountType::INDIVIDUAL)
			&& (self.account_id() == 0 || self.account_instance() > Instance::WEB.as_u32())
		{
			return false;
		}

		if self.has_type(AccountType::CLAN)
			&& (self.account_id() == 0 || self.account_instance() != 0)
		{
			return false;
		}

		if self.has_type(AccountType::GAME_SERVER) && self.account_id() == 0 {
			return false;
		}

		true
	}

	/// Returns whether this is a blank anonymous ID, i.e. a login ID waiting to be filled in.
	pub const fn is_blank_anonymous_account(self) -> bool {
		self.account_id() == 0 && self.is_anonymous_account() && self.account_instance() == 0
	}

	/// Returns whether this is a persistent game server ID.
	pub const fn is_persistent_game_server(self) -> bool {
		self.has_type(AccountType::GAME_SERVER)
	}

	/// Returns whether this is a game server ID, either persistent or anonymous.
	pub const fn is_game_server(self) -> bool {
		self.is_persistent_game_server() || self.is_anonymous_game_server()
	}

	/// Returns whether this is a content server ID.
	pub const fn is_content_server(self) -> bool {
		self.has_type(AccountType::CONTENT_SERVER)
	}

	/// Returns whether this is a clan ID.
	pub const fn is_clan(self) -> bool {
		self.has_type(AccountType::CLAN)
	}

	/// Returns whether this is a chat ID.
	pub const fn is_chat(self) -> bool {
		self.has_type(AccountType::CHAT)
	}

	/// Returns whether this is an individual user ID or a faked console user ID.
	pub const fn is_individual_account(self) -> bool {
		self.has_type(AccountType::INDIVIDUAL) || self.is_console_user()
	}

	/// Returns whether this is a faked ID for a console (PSN) friend account.
	pub const fn is_console_user(self) -> bool {
		self.has_type(AccountType::CONSOLE_USER)
	}

	/// Returns whether this is an anonymous game server ID.
	pub const fn is_anonymous_game_server(self) -> bool {
		self.has_type(AccountType::ANON_GAME_SERVER)
	}

	/// Returns whether this is an anonymous user ID.
	pub const fn is_anonymous_user(self) -> bool {
		self.has_type(AccountType::ANON_USER)
	}

	/// Returns whether this is an anonymous account, either a user or a game server.
	pub const fn is_anonymous_account(self) -> bool {
		self.is_anonymous_user() || self.is_anonymous_game_server()
	}

	/// Returns whether this is a lobby chat ID.
	pub const fn is_lobby(self) -> bool {
		self.is_chat() && (self.account_instance() & Self::LOBBY_FLAG) != 0
	}

	/// Returns whether `self` and `other` are equal when ignoring their instance bits.
	pub const fn static_equals(self, other: Self) -> bool {
		self.account_id() == other.account_id()
			&& self.account_type().as_u8() == other.account_type().as_u8()
			&& self.universe().as_u8() == other.universe().as_u8()
	}

	/// Converts this ID to its static account key: the same ID with the dynamic instance
	/// bits cleared.
	///
	/// Two IDs share a static account key if and only if they compare equal under
	/// [`SteamId::static_equals()`].
	pub const fn static_account_key(self) -> u64 {
		(self.account_id() as u64)
			.wrapping_add((self.account_type().as_u8() as u64) << ACCOUNT_TYPE_SHIFT)
			.wrapping_add((self.universe().as_u8() as u64) << UNIVERSE_SHIFT)
	}

	/// Returns the chat ID matching a clan ID.
	///
	/// Fails if `self` is not a clan ID.
	pub const fn clan_to_chat(self) -> Result<Self, WrongAccountType> {
		if !self.has_type(AccountType::CLAN) {
			return Err(WrongAccountType {
				expected: "a clan ID",
				actual: self.account_type(),
			});
		}

		Ok(Self::from_parts(
			self.account_id(),
			AccountType::CHAT,
			self.universe(),
			Self::CLAN_FLAG,
		))
	}

	/// Returns the clan ID matching a clan chat ID.
	///
	/// Fails if `self` is not a chat ID carrying the clan flag.
	pub const fn chat_to_clan(self) -> Result<Self, WrongAccountType> {
		if !self.has_type(AccountType::CHAT)
			|| (self.account_instance() & Self::CLAN_FLAG) == 0
		{
			return Err(WrongAccountType {
				expected: "a clan chat ID",
				actual: self.account_type(),
			});
		}

		Ok(Self::from_parts(
			self.account_id(),
			AccountType::CLAN,
			self.universe(),
			0,
		))
	}

	/// Returns the chat ID matching this ID, converting from a clan ID if necessary.
	///
	/// Fails if `self` is neither a chat nor a clan ID.
	pub const fn to_chat(self) -> Result<Self, WrongAccountType> {
		if self.has_type(AccountType::CHAT) {
			Ok(self)
		} else {
			self.clan_to_chat()
		}
	}

	/// Returns the clan ID matching this ID, converting from a clan chat ID if necessary.
	///
	/// Fails if `self` is neither a clan ID nor a chat ID carrying the clan flag.
	pub const fn to_clan(self) -> Result<Self, WrongAccountType> {
		if self.has_type(AccountType::CLAN) {
			Ok(self)
		} else {
			self.chat_to_clan()
		}
	}

	/// Parses a [`SteamId`] in the legacy `STEAM_X:Y:Z` format.
	///
	/// The resulting ID is always an individual account with instance 1.
	///
	/// # Examples
	///
	/// ```
	/// use steam_common::SteamId;
	///
	/// let steam_id = SteamId::parse_steam2("STEAM_1:1:30210334");
	///
	/// assert!(steam_id.is_ok());
	/// ```
	pub fn parse_steam2(value: &str) -> Result<Self, ParseSteam2IdError<'_>> {
		let value = value
			.strip_prefix("STEAM_")
			.ok_or(ParseSteam2IdError::MissingPrefix)?;

		let mut segments = value.splitn(3, ':');

		let universe = match segments.next() {
			Some("0") => Universe::INVALID,
			Some("1") => Universe::PUBLIC,
			Some("2") => Universe::BETA,
			Some("3") => Universe::INTERNAL,
			Some("4") => Universe::DEV,
			Some("") | None => return Err(ParseSteam2IdError::MissingX),
			Some(actual) => return Err(ParseSteam2IdError::InvalidX { actual }),
		};

		let y = match segments.next() {
			Some("0") => 0_u32,
			Some("1") => 1_u32,
			Some("") | None => return Err(ParseSteam2IdError::MissingY),
			Some(actual) => return Err(ParseSteam2IdError::InvalidY { actual }),
		};

		let z = segments
			.next()
			.filter(|segment| !segment.is_empty())
			.ok_or(ParseSteam2IdError::MissingZ)?;

		// `u32::from_str` would also accept a leading `+`, which the format does not
		if !z.bytes().all(|byte| byte.is_ascii_digit()) {
			return Err(ParseSteam2IdError::InvalidZ { actual: z });
		}

		let z = z
			.parse::<u32>()
			.map_err(|source| ParseSteam2IdError::OutOfRangeZ { actual: z, source })?;

		Ok(Self::from_parts(
			z.wrapping_mul(2).wrapping_add(y),
			AccountType::INDIVIDUAL,
			universe,
			1,
		))
	}

	/// Renders this ID in the legacy `STEAM_X:Y:Z` format.
	///
	/// Only individual account IDs have a Steam2 rendering; anything else fails.
	pub fn to_steam2(self) -> Result<String, WrongAccountType> {
		if !self.has_type(AccountType::INDIVIDUAL) {
			return Err(WrongAccountType {
				expected: "an individual account ID",
				actual: self.account_type(),
			});
		}

		Ok(format!(
			"STEAM_{}:{}:{}",
			self.universe().as_u8(),
			self.account_id() & 1,
			self.account_id() / 2,
		))
	}

	/// Parses a [`SteamId`] in the modern `[W:X:Y]` / `[W:X:Y:Z]` format.
	///
	/// The instance of the returned ID depends on the type character `W`: `c` and `L` force
	/// the clan and lobby chat flags, `U`, `I`, and `i` force instance 1, `g` and `T` force
	/// instance 0, and the remaining types take the `Z` segment, defaulting to 0 when it is
	/// absent.
	///
	/// # Examples
	///
	/// ```
	/// use steam_common::SteamId;
	///
	/// let steam_id = SteamId::parse_steam3("[A:1:123432:412332]");
	///
	/// assert!(steam_id.is_ok());
	/// ```
	pub fn parse_steam3(value: &str) -> Result<Self, ParseSteam3IdError<'_>> {
		let value = value
			.strip_prefix('[')
			.and_then(|value| value.strip_suffix(']'))
			.ok_or(ParseSteam3IdError::MissingBrackets)?;

		let mut segments = value.splitn(4, ':');

		let type_segment = match segments.next() {
			Some("") | None => return Err(ParseSteam3IdError::MissingType),
			Some(segment) => segment,
		};

		let universe = match segments.next() {
			Some("0") => Universe::INVALID,
			Some("1") => Universe::PUBLIC,
			Some("2") => Universe::BETA,
			Some("3") => Universe::INTERNAL,
			Some("4") => Universe::DEV,
			Some("") | None => return Err(ParseSteam3IdError::MissingUniverse),
			Some(actual) => return Err(ParseSteam3IdError::InvalidUniverse { actual }),
		};

		let account_id = segments
			.next()
			.filter(|segment| !segment.is_empty())
			.ok_or(ParseSteam3IdError::MissingAccountId)?;

		if !account_id.bytes().all(|byte| byte.is_ascii_digit()) {
			return Err(ParseSteam3IdError::InvalidAccountId { actual: account_id });
		}

		let account_id = account_id.parse::<u32>().map_err(|source| {
			ParseSteam3IdError::OutOfRangeAccountId {
				actual: account_id,
				source,
			}
		})?;

		let captured_instance = match segments.next() {
			None => None,
			Some(segment) => {
				if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit()) {
					return Err(ParseSteam3IdError::InvalidInstance { actual: segment });
				}

				Some(segment.parse::<u32>().map_err(|source| {
					ParseSteam3IdError::OutOfRangeInstance {
						actual: segment,
						source,
					}
				})?)
			}
		};

		let (account_type, instance) = match type_segment {
			"A" => (AccountType::ANON_GAME_SERVER, captured_instance.unwrap_or(0)),
			"G" => (AccountType::GAME_SERVER, captured_instance.unwrap_or(0)),
			"C" => (AccountType::CONTENT_SERVER, captured_instance.unwrap_or(0)),
			"g" => (AccountType::CLAN, 0),
			"c" => (AccountType::CHAT, Self::CLAN_FLAG),
			"L" => (AccountType::CHAT, Self::LOBBY_FLAG),
			"T" => (AccountType::CHAT, 0),
			"U" => (AccountType::INDIVIDUAL, 1),
			"I" | "i" => (AccountType::INVALID, 1),
			"M" | "P" | "a" => {
				return Err(ParseSteam3IdError::UnsupportedType {
					actual: type_segment,
				});
			}
			actual => return Err(ParseSteam3IdError::InvalidType { actual }),
		};

		Ok(Self::from_parts(account_id, account_type, universe, instance))
	}

	/// Renders this ID in the modern `[W:X:Y]` / `[W:X:Y:Z]` format.
	///
	/// This never fails: account types without a type character of their own render with the
	/// catch-all character `i`. Together with the instance rules of
	/// [`SteamId::parse_steam3()`] this makes the rendering lossy for some IDs; a console
	/// user ID, for example, renders as `[i:…]` and re-parses as an invalid-type ID with
	/// instance 1.
	pub fn to_steam3(self) -> String {
		self.to_string()
	}
}

impl fmt::Display for SteamId {
	/// Formats this ID in the modern `[W:X:Y]` format, the same as
	/// [`SteamId::to_steam3()`].
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let universe = self.universe().as_u8();
		let account_id = self.account_id();
		let instance = self.account_instance();

		match self.account_type() {
			AccountType::ANON_GAME_SERVER => write!(f, "[A:{universe}:{account_id}:{instance}]"),
			AccountType::GAME_SERVER => write!(f, "[G:{universe}:{account_id}]"),
			AccountType::MULTISEAT => write!(f, "[M:{universe}:{account_id}:{instance}]"),
			AccountType::PENDING => write!(f, "[P:{universe}:{account_id}]"),
			AccountType::CONTENT_SERVER => write!(f, "[C:{universe}:{account_id}]"),
			AccountType::CLAN => write!(f, "[g:{universe}:{account_id}]"),
			AccountType::CHAT => {
				if instance & Self::CLAN_FLAG != 0 {
					write!(f, "[c:{universe}:{account_id}]")
				} else if instance & Self::LOBBY_FLAG != 0 {
					write!(f, "[L:{universe}:{account_id}]")
				} else {
					write!(f, "[T:{universe}:{account_id}]")
				}
			}
			AccountType::INVALID => write!(f, "[I:{universe}:{account_id}]"),
			AccountType::INDIVIDUAL => {
				if instance == Instance::DESKTOP.as_u32() {
					write!(f, "[U:{universe}:{account_id}]")
				} else {
					write!(f, "[U:{universe}:{account_id}:{instance}]")
				}
			}
			AccountType::ANON_USER => write!(f, "[a:{universe}:{account_id}]"),
			_ => write!(f, "[i:{universe}:{account_id}]"),
		}
	}
}

impl fmt::Debug for SteamId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			f.debug_struct("SteamId")
				.field("account_id", &self.account_id())
				.field("account_type", &self.account_type())
				.field("universe", &self.universe())
				.field("instance", &self.account_instance())
				.finish()
		} else {
			write!(f, "\"{self}\"")
		}
	}
}

impl Borrow<u64> for SteamId {
	fn borrow(&self) -> &u64 {
		&self.0
	}
}

impl AsRef<u64> for SteamId {
	fn as_ref(&self) -> &u64 {
		self.borrow()
	}
}

impl PartialEq<u64> for SteamId {
	fn eq(&self, other: &u64) -> bool {
		self.0 == *other
	}
}

impl PartialEq<SteamId> for u64 {
	fn eq(&self, other: &SteamId) -> bool {
		*self == other.0
	}
}

impl From<SteamId> for u64 {
	fn from(steam_id: SteamId) -> Self {
		steam_id.as_u64()
	}
}

impl From<u64> for SteamId {
	fn from(value: u64) -> Self {
		Self::from_u64(value)
	}
}

impl FromStr for SteamId {
	type Err = ParseSteamIdError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		if let Ok(steam_id) = Self::parse_steam2(value) {
			return Ok(steam_id);
		}

		if let Ok(steam_id) = Self::parse_steam3(value) {
			return Ok(steam_id);
		}

		if let Ok(raw) = value.parse::<u64>() {
			return Ok(Self::from_u64(raw));
		}

		Err(ParseSteamIdError::UnrecognizedFormat)
	}
}
