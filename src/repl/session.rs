//! Session state and command execution

use std::collections::BTreeMap;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;
use crate::repl::commands::{Command, COMMANDS};

/// A catch roll below this value succeeds
pub const CATCH_THRESHOLD: u32 = 40;

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Mutable state carried between commands.
#[derive(Debug)]
pub struct Session {
    /// Page `map` will show next
    pub next: Option<String>,
    /// Page `mapb` will show next
    pub previous: Option<String>,
    /// Caught Pokémon by name
    pub pokedex: BTreeMap<String, Pokemon>,
    rng: StdRng,
}

impl Session {
    /// Starts a session whose first `map` shows `first_page_url`.
    pub fn new(first_page_url: impl Into<String>) -> Self {
        Self::with_rng(first_page_url, StdRng::from_entropy())
    }

    /// Like [`Session::new`] but with reproducible catch rolls.
    pub fn with_seed(first_page_url: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(first_page_url, StdRng::seed_from_u64(seed))
    }

    fn with_rng(first_page_url: impl Into<String>, rng: StdRng) -> Self {
        Self {
            next: Some(first_page_url.into()),
            previous: None,
            pokedex: BTreeMap::new(),
            rng,
        }
    }

    /// Runs one command, writing its output to `out`.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        client: &PokeApiClient,
        out: &mut W,
    ) -> Result<Flow> {
        debug!(?command, "Executing command");

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(client, out, Direction::Forward).await?,
            Command::MapBack => self.map(client, out, Direction::Backward).await?,
            Command::Explore(area) => self.explore(client, out, &area).await?,
            Command::Catch(name) => self.catch(client, out, &name).await?,
            Command::Inspect(name) => self.inspect(out, &name)?,
            Command::Pokedex => self.list_pokedex(out)?,
            Command::CacheStats => self.cache_stats(client, out).await?,
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for info in COMMANDS {
            writeln!(out, "{}: {}", info.usage, info.description)?;
        }
        Ok(())
    }

    async fn map<W: Write>(
        &mut self,
        client: &PokeApiClient,
        out: &mut W,
        direction: Direction,
    ) -> Result<()> {
        let target = match direction {
            Direction::Forward => self.next.clone(),
            Direction::Backward => self.previous.clone(),
        };

        let Some(url) = target else {
            writeln!(out, "no more areas {}", direction.as_str())?;
            return Ok(());
        };

        let page = client.location_areas(&url).await?;
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }

        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }

    async fn explore<W: Write>(
        &self,
        client: &PokeApiClient,
        out: &mut W,
        area_name: &str,
    ) -> Result<()> {
        writeln!(out, "Exploring {}...", area_name)?;
        let area = client.location_area(area_name).await?;

        writeln!(out, "Found Pokemon:")?;
        for name in area.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(
        &mut self,
        client: &PokeApiClient,
        out: &mut W,
        name: &str,
    ) -> Result<()> {
        let pokemon = client.pokemon(name).await?;
        writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;

        if attempt_catch(&mut self.rng, pokemon.base_experience.unwrap_or(0)) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.pokedex.insert(pokemon.name.clone(), pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, out: &mut W, name: &str) -> Result<()> {
        let pokemon = self
            .pokedex
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.keys() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn cache_stats<W: Write>(&self, client: &PokeApiClient, out: &mut W) -> Result<()> {
        let stats = client.cache().stats().await;

        writeln!(out, "Cached responses: {}", stats.total_entries)?;
        writeln!(out, "Hits: {}", stats.hits)?;
        writeln!(out, "Misses: {}", stats.misses)?;
        writeln!(out, "Expired: {}", stats.reaped)?;
        writeln!(out, "Hit rate: {:.1}%", stats.hit_rate() * 100.0)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

/// Rolls against a Pokémon's base experience.
///
/// The roll is uniform in `[0, base_experience)` and succeeds below
/// [`CATCH_THRESHOLD`], so anything with base experience at or under the
/// threshold is always caught.
pub fn attempt_catch<R: Rng>(rng: &mut R, base_experience: u32) -> bool {
    rng.gen_range(0..base_experience.max(1)) < CATCH_THRESHOLD
}
