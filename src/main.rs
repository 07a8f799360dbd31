use chrono::{Local, NaiveDate};
use clap::Parser;
use extally::application::manage_config::CONFIG_KEYS;
use extally::application::{ConfigService, ExerciseRepository, InitService};
use extally::cli::{format_leaderboard, format_record_list, format_user_list, Cli, Commands};
use extally::domain::{MonthReference, RecordId, TimeReference};
use extally::error::{ExtallyError, Result};
use extally::infrastructure::{SqliteStore, Workspace};
use extally::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_repository(workspace: &Workspace) -> Result<ExerciseRepository<SqliteStore>> {
    Ok(ExerciseRepository::new(workspace.open_store()?))
}

/// An empty `--date` means no date filter, like an empty `--name`.
fn parse_date(date: Option<&str>, today: NaiveDate) -> Result<Option<NaiveDate>> {
    date.filter(|d| !d.trim().is_empty())
        .map(|d| TimeReference::parse(d).map(|r| r.resolve(today)))
        .transpose()
}

fn run(cli: Cli) -> Result<()> {
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Init { path } => {
            InitService::execute(&path)?;
            println!("Initialized extally workspace at {}", path.display());
            Ok(())
        }
        Commands::Record { name } => {
            let workspace = Workspace::discover()?;
            let name = match name {
                Some(n) => n,
                None => workspace
                    .load_config()?
                    .user
                    .ok_or(ExtallyError::InvalidName)?,
            };
            let record = open_repository(&workspace)?.record_exercise(&name)?;
            println!(
                "Recorded {} for {} (id {})",
                record.name,
                record.iso_date(),
                record.id
            );
            Ok(())
        }
        Commands::Search { name, date } => {
            let date = parse_date(date.as_deref(), today)?;
            let repo = open_repository(&Workspace::discover()?)?;
            let records = repo.search_records(name.as_deref(), date)?;
            print!("{}", format_record_list(&records));
            if records.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Delete { id } => {
            let repo = open_repository(&Workspace::discover()?)?;
            let id = RecordId(id);
            if repo.delete_record(id)? {
                println!("Deleted record {}", id);
            } else {
                println!("No record with id {}", id);
            }
            Ok(())
        }
        Commands::Users => {
            let repo = open_repository(&Workspace::discover()?)?;
            let users = repo.list_users()?;
            print!("{}", format_user_list(&users));
            if users.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Leaderboard { month } => {
            let month = MonthReference::parse(&month)?.resolve(today);
            let repo = open_repository(&Workspace::discover()?)?;
            let entries = repo.get_leaderboard(&month)?;
            print!("{}", format_leaderboard(&month, &entries));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Export { name, date, output } => {
            let date = parse_date(date.as_deref(), today)?;
            let repo = open_repository(&Workspace::discover()?)?;
            let records = repo.search_records(name.as_deref(), date)?;
            let csv = ExerciseRepository::<SqliteStore>::export_to_csv(&records);

            match output {
                Some(path) => {
                    std::fs::write(&path, csv)?;
                    eprintln!("Exported {} records to {}", records.len(), path.display());
                }
                None => println!("{}", csv),
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Workspace::discover()?);

            if list {
                let config = service.list()?;
                println!("user = {}", config.user.unwrap_or_default());
                println!("database = {}", config.database);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v.trim());
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: extally config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS);
            }
            Ok(())
        }
    }
}
