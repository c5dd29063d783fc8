//! REPL session and loop

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::client::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::pokedex::{is_caught, roll_catch, Pokedex};
use crate::repl::command::{clean_input, Command, COMMANDS};

const PROMPT: &str = "Pokedex > ";
const BANNER: &str = "Welcome to the Pokedex!";

/// Whether the loop should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Session ==
/// State carried between commands: the API client, caught Pokemon, and
/// the location-area pagination cursor.
pub struct Session {
    client: PokeApiClient,
    pokedex: Pokedex,
    next_page: Option<String>,
    previous_page: Option<String>,
    roll: Box<dyn FnMut() -> u32 + Send>,
}

impl Session {
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client,
            pokedex: Pokedex::new(),
            next_page: None,
            previous_page: None,
            roll: Box::new(roll_catch),
        }
    }

    /// Replaces the random catch roll, e.g. with a fixed value.
    pub fn with_catch_roll(mut self, roll: impl FnMut() -> u32 + Send + 'static) -> Self {
        self.roll = Box::new(roll);
        self
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    // == Execute ==
    /// Runs one command, writing user-facing output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => {
                let url = self.next_page.clone();
                self.show_page(url, out).await?;
            }
            Command::MapBack => {
                let url = self.previous_page.clone();
                self.show_page(url, out).await?;
            }
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
        }
        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for (name, description) in COMMANDS {
            writeln!(out, "{name}: {description}")?;
        }
        Ok(())
    }

    /// Prints one page of area names and moves the cursor to it.
    /// An unset cursor means the first page.
    async fn show_page<W: Write>(&mut self, url: Option<String>, out: &mut W) -> Result<()> {
        let page = self.client.location_areas(url.as_deref()).await?;
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        self.next_page = page.next;
        self.previous_page = page.previous;
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {area}...")?;
        let location = match self.client.location_area(area).await {
            Ok(location) => location,
            Err(err) if err.is_not_found() => {
                writeln!(out, "{area} is not a location area")?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        writeln!(out, "Found Pokemon:")?;
        for name in location.pokemon_names() {
            writeln!(out, " - {name}")?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Throwing a Pokeball at {name}...")?;
        let pokemon = match self.client.pokemon(name).await {
            Ok(pokemon) => pokemon,
            Err(err) if err.is_not_found() => {
                writeln!(out, "{name} is not a pokemon or correct id")?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let roll = (self.roll)();
        if is_caught(pokemon.base_experience, roll) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            info!(pokemon = %pokemon.name, roll, "Pokemon caught");
            self.pokedex.insert(pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let caught = self
            .pokedex
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;
        let pokemon = &caught.pokemon;

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
        writeln!(
            out,
            "Caught: {}",
            caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty")?;
            return Ok(());
        }
        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.names() {
            writeln!(out, " - {name}")?;
        }
        Ok(())
    }
}

// == Run ==
/// Prints the welcome banner, then reads commands line by line from `input`
/// until `exit` or end of input.
///
/// Command failures are reported to `out` and the loop continues; only
/// I/O errors on `input` or `out` end it early.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "{BANNER}")?;

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let command = match Command::parse(&clean_input(&line)) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match session.execute(command, out).await {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(err @ PokedexError::Io(_)) => return Err(err),
            Err(err) => {
                warn!(error = %err, "Command failed");
                writeln!(out, "{err}")?;
            }
        }
    }

    Ok(())
}
