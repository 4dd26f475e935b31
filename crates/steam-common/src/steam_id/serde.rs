//! Trait implementations for the [`serde`] crate.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

use super::SteamId;

impl Serialize for SteamId {
	/// Serializes a [`SteamId`] using the Steam3 rendering, the same as its [`Display`]
	/// implementation.
	///
	/// If you want to use a different format, use the `#[serde(serialize_with = "…")]`
	/// attribute with one of the inherent `serialize_*` methods on [`SteamId`].
	///
	/// [`Display`]: std::fmt::Display
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.serialize_steam3(serializer)
	}
}

impl<'de> Deserialize<'de> for SteamId {
	/// Deserializes a [`SteamId`] trying to catch as many formats as possible.
	///
	/// If you expect a specific format, use the `#[serde(deserialize_with = "…")]` attribute
	/// with one of the inherent `deserialize_*` methods on [`SteamId`].
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Helper {
			U64(u64),
			Str(Box<str>),
		}

		Helper::deserialize(deserializer).and_then(|value| match value {
			Helper::U64(value) => Ok(Self::from_u64(value)),
			Helper::Str(value) => value.parse::<Self>().map_err(de::Error::custom),
		})
	}
}

impl SteamId {
	/// Serializes a [`SteamId`] as its raw 64-bit value.
	pub fn serialize_u64<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.as_u64().serialize(serializer)
	}

	/// Deserializes a 64-bit value into a [`SteamId`].
	pub fn deserialize_u64<'de, D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		u64::deserialize(deserializer).map(Self::from_u64)
	}

	/// Serializes a [`SteamId`] using the legacy `STEAM_X:Y:Z` format.
	///
	/// This fails for IDs that are not individual accounts.
	pub fn serialize_steam2<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.to_steam2()
			.map_err(ser::Error::custom)?
			.serialize(serializer)
	}

	/// Deserializes a [`SteamId`] using the legacy `STEAM_X:Y:Z` format.
	pub fn deserialize_steam2<'de, D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Self::parse_steam2(&String::deserialize(deserializer)?).map_err(de::Error::custom)
	}

	/// Serializes a [`SteamId`] using the modern `[W:X:Y]` format.
	pub fn serialize_steam3<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		format_args!("{self}").serialize(serializer)
	}

	/// Deserializes a [`SteamId`] using the modern `[W:X:Y]` format.
	pub fn deserialize_steam3<'de, D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Self::parse_steam3(&String::deserialize(deserializer)?).map_err(de::Error::custom)
	}
}
