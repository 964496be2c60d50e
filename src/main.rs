use crate::cache::OccupancyCache;
use crate::command::Command;
use crate::date::Date;
use crate::hotel::RoomTypeSummary;
use crate::inventory::Inventory;
use crate::service::AvailabilityService;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::path::PathBuf;
use tabled::settings::Style;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod availability;
mod booking;
mod cache;
mod command;
mod date;
mod error;
mod hotel;
mod inventory;
mod response;
mod service;

#[derive(Parser)]
#[command(about = "Room availability over a hotel and booking snapshot")]
struct Args {
    /// Path to the JSON hotels file
    #[arg(long, value_name = "FILE")]
    hotels: PathBuf,

    /// Path to the JSON bookings file
    #[arg(long, value_name = "FILE")]
    bookings: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log_level: String,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                // call-style commands continue with arguments, no space
                let replacement = if cmd.ends_with('(') { cmd.clone() } else { format!("{} ", cmd) };
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement,
                });
            }
        }

        Ok((0, candidates))
    }
}

const HELP: &str = "
Available Commands:
  Availability(<hotel>, <YYYYMMDD[-YYYYMMDD]>, <room type>) - Fewest free rooms over the date range
  Search(<hotel>, <days>, <room type>)                      - Date ranges with free rooms from today
  hotels                                                    - List hotels, room types and room counts
  reload                                                    - Re-read the hotels and bookings files
  stats                                                     - Show occupancy cache counters
  help / ?                                                  - Show this help menu
  exit / quit / <blank line>                                - Exit
";

#[derive(Debug, PartialEq)]
enum Outcome {
    Print(String),
    Fail(String),
    Exit,
}

struct Session {
    hotels_path: PathBuf,
    bookings_path: PathBuf,
    inventory: Inventory,
    cache: OccupancyCache,
}

impl Session {
    fn handle(&mut self, line: &str, today: Date) -> Outcome {
        match line {
            "" | "exit" | "quit" => Outcome::Exit,
            "help" | "?" => Outcome::Print(HELP.to_string()),
            "hotels" => {
                let rows = self
                    .inventory
                    .hotels()
                    .into_iter()
                    .flat_map(RoomTypeSummary::for_hotel)
                    .collect::<Vec<_>>();
                if rows.is_empty() {
                    return Outcome::Print("No hotels loaded.".to_string());
                }
                let mut table = tabled::Table::new(&rows);
                table.with(Style::rounded());
                table.with(tabled::settings::Alignment::left());
                Outcome::Print(table.to_string())
            }
            "reload" => match Inventory::load_from_files(&self.hotels_path, &self.bookings_path) {
                Ok(fresh) => {
                    // swap only after a complete load, then drop counts from the old snapshot
                    self.inventory = fresh;
                    self.cache.invalidate();
                    Outcome::Print(format!(
                        "Reloaded {} hotels and {} bookings.",
                        self.inventory.hotels().len(),
                        self.inventory.booking_count()
                    ))
                }
                Err(e) => Outcome::Fail(format!("{e}; keeping previous data")),
            },
            "stats" => {
                let stats = self.cache.stats();
                Outcome::Print(format!(
                    "Cache entries: {}, hits: {}, misses: {}",
                    stats.entries, stats.hits, stats.misses
                ))
            }
            _ => {
                let service = AvailabilityService::new(&self.inventory, &self.cache);
                match line.parse::<Command>().and_then(|cmd| service.execute(&cmd, today)) {
                    Ok(response) => Outcome::Print(response.to_string()),
                    Err(e) => Outcome::Fail(e.to_string()),
                }
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let inventory = match Inventory::load_from_files(&args.hotels, &args.bookings) {
        Ok(inventory) => inventory,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    println!(
        "Hotel Room Availability Manager. Loaded {} hotels and {} bookings.",
        inventory.hotels().len(),
        inventory.booking_count()
    );
    println!("Type 'help' for commands, a blank line to exit.");

    let mut session = Session {
        hotels_path: args.hotels,
        bookings_path: args.bookings,
        inventory,
        cache: OccupancyCache::new(),
    };

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "Availability(".to_string(),
            "Search(".to_string(),
            "hotels".to_string(),
            "reload".to_string(),
            "stats".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline("> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    rl.add_history_entry(trimmed)?;
                }

                match session.handle(trimmed, Date::today()) {
                    Outcome::Print(output) => println!("{}", output),
                    Outcome::Fail(message) => eprintln!("{} {}", "Error:".red().bold(), message),
                    Outcome::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{} {:?}", "Error:".red().bold(), err);
                break;
            }
        }
    }
    info!("command loop ended");
    Ok(())
}
