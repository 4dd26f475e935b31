//! Trait implementations for the [`rand`] crate.

use rand::Rng;
use rand::distributions::{Distribution, Standard};

use super::SteamId;
use crate::{Instance, Universe};

impl Distribution<SteamId> for Standard {
	/// Generates a random, valid individual account ID in the public universe.
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SteamId {
		let account_id = rng.gen_range(1..=u32::MAX);

		SteamId::individual_account(account_id, Universe::PUBLIC, Instance::DESKTOP)
	}
}
