//! REPL session state
//!
//! Pagination cursor, caught pokemon and the RNG used for throws.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::api::PokeApiClient;
use crate::models::Pokemon;

/// State carried between commands for one interactive session.
pub struct Session {
    client: PokeApiClient,
    /// Link to the following location page, `None` before the first `map`
    /// and after the last page
    next: Option<String>,
    /// Link to the preceding location page, `None` on the first page
    previous: Option<String>,
    /// Caught pokemon by the name they were caught as
    pokedex: BTreeMap<String, Pokemon>,
    rng: Box<dyn RngCore + Send + Sync>,
}

impl Session {
    /// Creates a session with an entropy-seeded RNG.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, Box::new(StdRng::from_entropy()))
    }

    /// Creates a session with a caller-supplied RNG.
    pub fn with_rng(client: PokeApiClient, rng: Box<dyn RngCore + Send + Sync>) -> Self {
        Self {
            client,
            next: None,
            previous: None,
            pokedex: BTreeMap::new(),
            rng,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    /// Ends the session, handing back the client and its cache.
    pub fn into_client(self) -> PokeApiClient {
        self.client
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous_page(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Moves the cursor to the page whose links are given.
    pub fn set_page_links(&mut self, next: Option<String>, previous: Option<String>) {
        self.next = next;
        self.previous = previous;
    }

    /// Adds a pokemon to the Pokedex under `name`, the argument given to
    /// `catch`, replacing an earlier catch of the same name.
    pub fn record_catch(&mut self, name: impl Into<String>, pokemon: Pokemon) {
        self.pokedex.insert(name.into(), pokemon);
    }

    pub fn caught(&self, name: &str) -> Option<&Pokemon> {
        self.pokedex.get(name)
    }

    /// Caught pokemon, ordered by the name they were caught as.
    pub fn pokedex(&self) -> impl Iterator<Item = &Pokemon> {
        self.pokedex.values()
    }

    pub fn rng(&mut self) -> &mut (dyn RngCore + Send + Sync) {
        self.rng.as_mut()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("client", &self.client)
            .field("next", &self.next)
            .field("previous", &self.previous)
            .field("pokedex", &self.pokedex.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
