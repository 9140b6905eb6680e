//! Procurely CLI — inspect roles, permissions and record visibility.
//!
//! ```bash
//! procurely roles
//! procurely permissions --role manager --department IT
//! procurely filter --user me.json --records invoices.json --collection invoices
//! ```
//!
//! See `procurely --help` for all available commands and options.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use procurely_core::config::{ProcurelyConfig, DEFAULT_CONFIG_FILE};
use procurely_core::rbac::{AccessResolver, Collection};
use std::path::PathBuf;

use commands::filter::FilterArgs;
use commands::permissions::UserSource;

#[derive(Parser)]
#[command(
    name = "procurely",
    about = "Procurely role and visibility inspector",
    version
)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every role in the catalog
    Roles {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one role of the catalog
    Role {
        /// Role key (e.g. procurement_sme)
        key: String,

        /// Check whether the role lists this permission tag
        #[arg(long)]
        tag: Option<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Derive the permission set of a user
    Permissions {
        /// User JSON file
        #[arg(long, conflicts_with_all = ["role", "department"])]
        user: Option<PathBuf>,

        /// Role key
        #[arg(long, requires = "department")]
        role: Option<String>,

        /// Department label
        #[arg(long, requires = "role")]
        department: Option<String>,

        /// Grant the cross-department override
        #[arg(long, requires = "role")]
        view_all_departments: bool,
    },

    /// Print the records a user may see
    Filter {
        /// User JSON file
        #[arg(long)]
        user: PathBuf,

        /// JSON array of records
        #[arg(long)]
        records: PathBuf,

        /// JSON array of users used to resolve requestors
        #[arg(long)]
        directory: Option<PathBuf>,

        /// Collection to scope: requisitions, approvals, contracts, purchase_orders,
        /// invoices or vendors
        #[arg(long)]
        collection: Option<Collection>,
    },
}

fn run(cli: Cli) -> Result<String> {
    let mut config = ProcurelyConfig::load_from(&cli.config)?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    config.validate()?;
    procurely_core::logging::init_logging(&config.logging)?;

    let resolver = AccessResolver::new(&config.access);

    match cli.command {
        Commands::Roles { json } => commands::roles::list(json),
        Commands::Role { key, tag, json } => commands::roles::show(&key, tag.as_deref(), json),
        Commands::Permissions { user, role, department, view_all_departments } => {
            let source = match (&user, &role, &department) {
                (Some(path), _, _) => UserSource::File(path),
                (None, Some(role), Some(department)) => {
                    UserSource::Inline { role, department, view_all_departments }
                }
                _ => anyhow::bail!("either --user or --role with --department is required"),
            };
            commands::permissions::run(source)
        }
        Commands::Filter { user, records, directory, collection } => {
            let args = FilterArgs {
                user: &user,
                records: &records,
                directory: directory.as_deref(),
                collection,
            };
            commands::filter::run(args, &resolver)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
