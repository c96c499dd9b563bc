use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser, Debug)]
#[command(
    name = "fleetrent",
    version,
    about = "Vehicle fleet rental management: availability, rentals and pricing"
)]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fleet overview after replaying the scenario's rentals
    Fleet(cmd::fleet::FleetCommand),
    /// Search fleet vehicles by brand, model, year, availability or type
    Search(cmd::search::SearchCommand),
    /// Show rental summaries with duration and price
    Rentals(cmd::rentals::RentalsCommand),
    /// Price a hypothetical rental
    Quote(cmd::quote::QuoteCommand),
    /// Approximate number of days between two dates
    DateDiff(cmd::dates::DateDiffCommand),
    /// Print the scenario input schema or an example
    Schema(cmd::schema::SchemaCommand),
    /// Walk through a built-in fleet and rental scenario
    Demo(cmd::demo::DemoCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    match opts.command {
        Command::Fleet(fleet) => fleet.exec(),
        Command::Search(search) => search.exec(),
        Command::Rentals(rentals) => rentals.exec(),
        Command::Quote(quote) => quote.exec(),
        Command::DateDiff(date_diff) => date_diff.exec(),
        Command::Schema(schema) => schema.exec(),
        Command::Demo(demo) => demo.exec(),
    }
}
