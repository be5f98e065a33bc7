//! # tome CLI
//!
//! Command-line interface for the tabtome music tab catalog.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use tabtome::{
    commands::{
        self, AddArgs, BrowseArgs, EditArgs, ExportArgs, ImportArgs, ListArgs, RemoveArgs,
        ShowArgs,
    },
    constants::LOG_ENV_VAR,
    import::ImportFormat,
    ui::InteractiveArgs,
};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/tabtome/config    Global configuration (data dir, editor, piano URL)
  ~/.local/share/tabtome      Default data directory (music-tabs.json)

Tab Markup:
  ( ... )   Highlighted red in tab bodies
  [ ... ]   Highlighted blue in tab bodies

Getting Started:
  tome setup                            Write the default config
  tome add -a \"Alice\" -s \"Song\" --content \"1 2 (3)\"
  tome import old-tabs.xml              Bring in a legacy XML collection
  tome browse                           Search and read tabs

Environment:
  TOME_LOG=debug                        Verbose logging on stderr

Learn more:
  tome <COMMAND> --help                 Show detailed help for a command";

#[derive(Parser)]
#[command(name = "tome")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Personal catalog of music tabs for in-game instruments")]
#[command(
    long_about = "tome keeps a personal catalog of music tabs: note sequences for playing \
songs on in-game instruments. Each tab records an artist, a song, a category and the tab \
body, and the whole collection is stored as a single JSON record.\n\n\
Tabs can be browsed with live search and artist or category filters, backed up to a \
portable JSON file, and merged in from backups or the legacy XML format."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default config and create the data directory
    #[command(
        long_about = "Write the default global config and create the data directory.\n\n\
The configuration file contains all available options with comments. An existing \
config is left untouched.",
        after_help = "Examples:\n  \
tome setup"
    )]
    Setup,

    /// Add a new tab
    #[command(
        long_about = "Add a new tab to the collection.\n\n\
Any field not given as a flag is asked for in the entry form, and the tab body is \
written in your editor. Without a terminal (or with --no-interactive) all of artist, \
song and content must be passed as flags. An empty category becomes 'Uncategorized'.",
        after_help = "Examples:\n  \
tome add                                       Fill in everything interactively\n  \
tome add -a \"Alice\" -s \"Sunrise\" --content \"1 2 3 (4 5)\"\n  \
tome add -a \"Alice\" -s \"Sunrise\" -c Flute --file sunrise.txt\n  \
cat tab.txt | tome add -a \"Alice\" -s \"Sunrise\" --file -"
    )]
    Add {
        /// Artist name
        #[arg(short, long)]
        artist: Option<String>,

        /// Song title
        #[arg(short, long)]
        song: Option<String>,

        /// Category (defaults to Uncategorized)
        #[arg(short, long)]
        category: Option<String>,

        /// Tab body
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,

        /// Read the tab body from a file ('-' for stdin)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Force interactive mode
        #[arg(long, conflicts_with = "no_interactive")]
        interactive: bool,

        /// Never open the form or the editor
        #[arg(long)]
        no_interactive: bool,
    },

    /// Edit an existing tab
    #[command(
        long_about = "Edit an existing tab. The id never changes.\n\n\
With field flags only those fields change. Without any, the entry form and your \
editor open on the current values. Without --id the tab is picked from a list.\n\n\
The --id option supports prefix matching.",
        after_help = "Examples:\n  \
tome edit --id 1716000000000 --song \"Sunrise (Live)\"\n  \
tome edit --id 1716 -c Harp\n  \
tome edit --id 1716 --file fixed.txt\n  \
tome edit                                Pick a tab and edit it interactively"
    )]
    Edit {
        /// Tab ID (prefix match supported)
        #[arg(long)]
        id: Option<String>,

        /// New artist
        #[arg(short, long)]
        artist: Option<String>,

        /// New song title
        #[arg(short, long)]
        song: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New tab body
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,

        /// Read the new tab body from a file ('-' for stdin)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Force interactive mode
        #[arg(long, conflicts_with = "no_interactive")]
        interactive: bool,

        /// Never open the form or the editor
        #[arg(long)]
        no_interactive: bool,
    },

    /// Remove a tab
    #[command(
        long_about = "Remove a tab from the collection after confirmation.\n\n\
Without a terminal the confirmation cannot be shown, so --yes is required.",
        after_help = "Examples:\n  \
tome remove --id 1716000000000\n  \
tome remove --id 1716 --yes"
    )]
    Remove {
        /// Tab ID (prefix match supported)
        #[arg(long)]
        id: Option<String>,

        /// Skip the confirmation dialog
        #[arg(short, long)]
        yes: bool,
    },

    /// Print a tab
    #[command(
        long_about = "Print a tab with its annotations highlighted.\n\n\
'( ... )' spans are shown in red and '[ ... ]' spans in blue. Use --plain for the \
raw body.",
        after_help = "Examples:\n  \
tome show --id 1716000000000\n  \
tome show --id 1716 --plain > sunrise.txt"
    )]
    Show {
        /// Tab ID (prefix match supported)
        #[arg(long)]
        id: Option<String>,

        /// Print only the raw tab body
        #[arg(long)]
        plain: bool,
    },

    /// List tabs
    #[command(
        long_about = "List tabs sorted by song title.\n\n\
Prints one tab per line as tab-separated id, song, artist and category. In \
interactive mode the browser opens with the same search and filters instead.",
        after_help = "Examples:\n  \
tome list\n  \
tome list --search sun\n  \
tome list --artist \"Alice\" --category Flute\n  \
tome list --no-interactive | cut -f1"
    )]
    List {
        /// Case-insensitive substring of song or artist
        #[arg(long)]
        search: Option<String>,

        /// Only tabs by this artist
        #[arg(short, long)]
        artist: Option<String>,

        /// Only tabs in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Open the browser
        #[arg(long, conflicts_with = "no_interactive")]
        interactive: bool,

        /// Print the list
        #[arg(long)]
        no_interactive: bool,
    },

    /// Browse tabs in a full-screen view
    #[command(
        long_about = "Browse tabs in a full-screen view.\n\n\
Type to search song and artist, pick artist and category filters, and read the \
selected tab with highlighted annotations. Tabs can be added, edited and deleted \
from the browser.",
        after_help = "Keys:\n  \
/ or Tab      Focus search          a / c     Artist / category filter\n  \
j / k         Move                  x         Clear filters\n  \
n             New tab               e, Enter  Edit tab\n  \
d             Delete tab            q, Esc    Quit"
    )]
    Browse {
        /// Initial search text
        #[arg(long)]
        search: Option<String>,

        /// Initial artist filter
        #[arg(short, long)]
        artist: Option<String>,

        /// Initial category filter
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List distinct artists
    Artists,

    /// List distinct categories
    Categories,

    /// Merge tabs from a backup or legacy file
    #[command(
        long_about = "Merge tabs from a JSON backup or a legacy XML file.\n\n\
Tabs whose id is already present are skipped, so importing the same file twice \
changes nothing. Incomplete records are skipped as well. The format is detected \
from the file extension unless given.",
        after_help = "Examples:\n  \
tome import tome-backup.json\n  \
tome import old-tabs.xml\n  \
tome import export.txt --format legacy"
    )]
    Import {
        /// File to import
        file: PathBuf,

        /// File format (detected from the extension when absent)
        #[arg(long, value_enum)]
        format: Option<ImportFormat>,
    },

    /// Write a JSON backup of every tab
    #[command(
        long_about = "Write a JSON backup of every tab.\n\n\
The backup is an array of tab records that 'tome import' reads back without loss. \
An existing file is only overwritten with --force.",
        after_help = "Examples:\n  \
tome export                          Write the configured backup file\n  \
tome export backups/tabs.json --force\n  \
tome export --stdout | gzip > tabs.json.gz"
    )]
    Export {
        /// Output file (defaults to the configured export file)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,

        /// Print the backup to stdout
        #[arg(long, conflicts_with = "path")]
        stdout: bool,
    },

    /// Open the virtual piano in a browser
    Piano,

    /// Generate shell completions
    #[command(after_help = "Examples:\n  \
tome completions zsh > ~/.zfunc/_tome\n  \
tome completions bash > /etc/bash_completion.d/tome")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV_VAR, "warn"))
        .format_timestamp(None)
        .init();

    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Setup => commands::setup(),

        Commands::Add {
            artist,
            song,
            category,
            content,
            file,
            interactive,
            no_interactive,
        } => commands::add(AddArgs {
            artist,
            song,
            category,
            content,
            file,
            interactive: InteractiveArgs {
                interactive,
                no_interactive,
            },
        }),

        Commands::Edit {
            id,
            artist,
            song,
            category,
            content,
            file,
            interactive,
            no_interactive,
        } => commands::edit(EditArgs {
            id,
            artist,
            song,
            category,
            content,
            file,
            interactive: InteractiveArgs {
                interactive,
                no_interactive,
            },
        }),

        Commands::Remove { id, yes } => commands::remove(&RemoveArgs { id, yes }),

        Commands::Show { id, plain } => commands::show(&ShowArgs { id, plain }),

        Commands::List {
            search,
            artist,
            category,
            interactive,
            no_interactive,
        } => commands::list(ListArgs {
            search,
            artist,
            category,
            interactive: InteractiveArgs {
                interactive,
                no_interactive,
            },
        }),

        Commands::Browse {
            search,
            artist,
            category,
        } => commands::browse(BrowseArgs {
            search,
            artist,
            category,
        }),

        Commands::Artists => commands::artists(),

        Commands::Categories => commands::categories(),

        Commands::Import { file, format } => commands::import(&ImportArgs { file, format }),

        Commands::Export {
            path,
            force,
            stdout,
        } => commands::export(ExportArgs {
            path,
            force,
            stdout,
        }),

        Commands::Piano => commands::piano(),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
