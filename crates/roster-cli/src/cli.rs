//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use roster_domain::model::Gender;
use roster_types::OutputFormat;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Person record management - list, filter, page, mutate, export")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// People data file. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

/// Person fields shared by the add and update commands
#[derive(Args)]
pub struct PersonArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long, value_enum)]
    pub gender: Gender,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub date_of_birth: NaiveDate,

    /// Phone number, 10 digits
    #[arg(long)]
    pub phone_number: String,

    #[arg(long)]
    pub birth_place: String,

    /// Mark the person as graduated
    #[arg(long)]
    pub graduated: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every person
    List,

    /// Show one person by identifier
    Show {
        id: Uuid,
    },

    /// Add a person
    Add {
        #[command(flatten)]
        person: PersonArgs,

        /// Identifier to assign instead of a random one
        #[arg(long)]
        id: Option<Uuid>,
    },

    /// Update a person by identifier
    Update {
        id: Uuid,

        #[command(flatten)]
        person: PersonArgs,
    },

    /// Delete a person by identifier
    Delete {
        id: Uuid,
    },

    /// List the male persons
    Males,

    /// Show the person with the earliest date of birth
    Oldest,

    /// Show full names, for everyone or for one identifier
    FullNames {
        /// Limit to a single identifier
        #[arg(long)]
        id: Option<Uuid>,
    },

    /// Filter persons by birth year
    Filter {
        /// Year to compare against, between 0 and the current year
        #[arg(allow_negative_numbers = true)]
        year: i32,

        /// Comparison: equal, greater or less. Anything else lists everyone.
        #[arg(default_value = "equal")]
        choice: String,
    },

    /// Show one page of the listing
    Page {
        /// 1-based page number
        #[arg(allow_negative_numbers = true)]
        page_number: i64,

        /// Records per page
        #[arg(default_value_t = 10)]
        page_size: i64,
    },

    /// Export every person to an Excel workbook
    Export {
        /// Output file path. Defaults to PeopleData.xlsx
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Write the sample records to the data file
    Init {
        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the default people data file
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// Set the default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,
    },
}
