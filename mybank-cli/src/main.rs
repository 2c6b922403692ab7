use anyhow::{Result, bail};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use mybank_client::{
    BanksRepository, BanksService, BanksState, BanksStore, FileBanksService, HttpBanksService,
    OperationsStore,
};
use mybank_core::{Bank, Operation};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod browse;
mod config;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "mybank",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("MYBANK_GIT_VERSION"), ")"),
    about = "Browse bank accounts and their operations"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List banks (featured first) with their accounts and balances
    Banks {
        /// Read the banks JSON from a file instead of the endpoint
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print normalized banks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the operations of one account, most recent first
    Operations {
        /// Bank name, exact match
        #[arg(long)]
        bank: String,

        /// Account label, exact match
        #[arg(long)]
        account: String,

        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Interactive two-screen browser
    Browse {
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Manage ~/.mybank/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,

    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    init_tracing(&cfg.log.level);

    match cli.command {
        Command::Banks { file, json } => {
            let banks = load_banks(file, &cfg).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&banks)?);
            } else {
                print_banks(&banks);
            }
        }

        Command::Operations {
            bank,
            account,
            file,
        } => {
            let tz = cfg.timezone()?;
            let banks = load_banks(file, &cfg).await?;
            let ops = OperationsStore::new(bank, account, &banks);
            print_operations(&ops, tz);
        }

        Command::Browse { file } => {
            let tz = cfg.timezone()?;
            match file {
                Some(path) => {
                    browse::run_browse(&BanksRepository::new(FileBanksService::new(path)), tz)?
                }
                None => browse::run_browse(&BanksRepository::new(http_service(&cfg)?), tz)?,
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg)?);
            }
        },
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    // RUST_LOG wins over the config file; logs go to stderr so stdout stays clean.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn http_service(cfg: &Config) -> Result<HttpBanksService> {
    HttpBanksService::new(&cfg.endpoint.base_url, &cfg.endpoint.banks_path, cfg.timeout())
}

/// Featured banks first, then the others
async fn load_banks(file: Option<PathBuf>, cfg: &Config) -> Result<Vec<Bank>> {
    debug!(file = ?file, "loading banks");
    match file {
        Some(path) => load_with(&BanksRepository::new(FileBanksService::new(path))).await,
        None => load_with(&BanksRepository::new(http_service(cfg)?)).await,
    }
}

async fn load_with<S: BanksService>(repository: &BanksRepository<S>) -> Result<Vec<Bank>> {
    let mut store = BanksStore::new();
    store.load(repository).await;
    match store.state() {
        BanksState::Failed(msg) => bail!("{msg}"),
        state => Ok(state.banks().cloned().collect()),
    }
}

pub(crate) fn format_date(op: &Operation, tz: Option<Tz>) -> String {
    match tz {
        Some(tz) => op.formatted_date_in(tz),
        None => op.formatted_date(),
    }
}

fn print_banks(banks: &[Bank]) {
    let (featured, others): (Vec<&Bank>, Vec<&Bank>) = banks.iter().partition(|b| b.is_featured);

    for (title, group) in [("Crédit Agricole", featured), ("Autres banques", others)] {
        if group.is_empty() {
            continue;
        }
        println!("## {title} ({})\n", group.len());
        for bank in group {
            println!("{} - {} compte(s)", bank.name, bank.accounts.len());
            for account in &bank.accounts {
                println!("  {:<30} {:>16}", account.label, account.balance);
            }
            println!();
        }
    }
}

fn print_operations(ops: &OperationsStore, tz: Option<Tz>) {
    println!("# {} / {}\n", ops.bank_name, ops.account_label);
    if ops.operations.is_empty() {
        println!("Aucune opération");
        return;
    }
    for op in &ops.operations {
        println!(
            "{:<14} {:<32} {:>14}",
            format_date(op, tz),
            op.title,
            op.formatted_amount()
        );
    }
}
