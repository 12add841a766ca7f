//! Command table and handlers
//!
//! Each handler writes its user-facing output to the supplied writer and
//! returns an error only for failed API calls or broken output.

use std::io::Write;

use tracing::info;

use crate::catch::{attempt_catch, catch_chance};
use crate::error::Result;
use crate::repl::Session;

/// What the REPL should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// Static description of one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub command: Command,
    /// Word typed at the prompt
    pub name: &'static str,
    /// Name plus arguments, as shown by `help`
    pub usage: &'static str,
    pub description: &'static str,
}

/// All commands, in `help` order.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        command: Command::Help,
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    CommandInfo {
        command: Command::Exit,
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
    },
    CommandInfo {
        command: Command::Map,
        name: "map",
        usage: "map",
        description: "Show the next 20 location areas",
    },
    CommandInfo {
        command: Command::MapBack,
        name: "mapb",
        usage: "mapb",
        description: "Show the previous 20 location areas",
    },
    CommandInfo {
        command: Command::Explore,
        name: "explore",
        usage: "explore <location area>",
        description: "List the pokemon found in a location area",
    },
    CommandInfo {
        command: Command::Catch,
        name: "catch",
        usage: "catch <pokemon>",
        description: "Try to catch a pokemon",
    },
    CommandInfo {
        command: Command::Inspect,
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Show details of a caught pokemon",
    },
    CommandInfo {
        command: Command::Pokedex,
        name: "pokedex",
        usage: "pokedex",
        description: "List all caught pokemon",
    },
];

/// Finds the command typed as `name`.
pub fn lookup(name: &str) -> Option<Command> {
    COMMANDS
        .iter()
        .find(|cmd| cmd.name == name)
        .map(|cmd| cmd.command)
}

impl Command {
    /// Runs the command against `session`.
    pub async fn execute<W: Write>(
        self,
        session: &mut Session,
        args: &[String],
        out: &mut W,
    ) -> Result<Outcome> {
        match self {
            Command::Help => help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Outcome::Exit);
            }
            Command::Map => map(session, out).await?,
            Command::MapBack => map_back(session, out).await?,
            Command::Explore => explore(session, args, out).await?,
            Command::Catch => catch(session, args, out).await?,
            Command::Inspect => inspect(session, args, out)?,
            Command::Pokedex => pokedex(session, out)?,
        }
        Ok(Outcome::Continue)
    }
}

fn help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for cmd in COMMANDS {
        writeln!(out, "{}: {}", cmd.usage, cmd.description)?;
    }
    Ok(())
}

async fn map<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    // Past the last page `next` is empty again, so this wraps to the start
    let page = session
        .client()
        .location_areas(session.next_page())
        .await?;

    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    session.set_page_links(page.next, page.previous);
    Ok(())
}

async fn map_back<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let Some(url) = session.previous_page().map(str::to_string) else {
        writeln!(out, "You're on the first page")?;
        return Ok(());
    };

    let page = session.client().location_areas(Some(&url)).await?;

    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    session.set_page_links(page.next, page.previous);
    Ok(())
}

async fn explore<W: Write>(session: &mut Session, args: &[String], out: &mut W) -> Result<()> {
    let Some(area) = args.first() else {
        writeln!(out, "You must provide a location area name")?;
        return Ok(());
    };

    writeln!(out, "Exploring {}...", area)?;
    let details = session.client().location_area(area).await?;

    writeln!(out, "Found Pokemon:")?;
    for encounter in &details.pokemon_encounters {
        writeln!(out, " - {}", encounter.pokemon.name)?;
    }
    Ok(())
}

async fn catch<W: Write>(session: &mut Session, args: &[String], out: &mut W) -> Result<()> {
    let Some(name) = args.first() else {
        writeln!(out, "You must provide a pokemon name")?;
        return Ok(());
    };

    writeln!(out, "Throwing a Pokeball at {}...", name)?;
    let pokemon = session.client().pokemon(name).await?;

    if attempt_catch(session.rng(), pokemon.base_experience) {
        info!(
            pokemon = %pokemon.name,
            chance = catch_chance(pokemon.base_experience),
            "Caught"
        );
        writeln!(out, "{} was caught!", name)?;
        session.record_catch(name.as_str(), pokemon);
    } else {
        writeln!(out, "{} escaped!", name)?;
    }
    Ok(())
}

fn inspect<W: Write>(session: &Session, args: &[String], out: &mut W) -> Result<()> {
    let Some(name) = args.first() else {
        writeln!(out, "You must provide a pokemon name")?;
        return Ok(());
    };

    let Some(pokemon) = session.caught(name) else {
        writeln!(out, "You haven't caught this pokemon yet!")?;
        return Ok(());
    };

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

fn pokedex<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let mut caught = session.pokedex().peekable();
    if caught.peek().is_none() {
        writeln!(out, "You haven't caught any pokemon yet!")?;
        return Ok(());
    }

    writeln!(out, "Your Pokedex:")?;
    for pokemon in caught {
        writeln!(out, " - {}", pokemon.name)?;
    }
    Ok(())
}
