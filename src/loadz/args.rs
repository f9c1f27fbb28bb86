use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "loadz")]
#[command(about = "Browse a catalog of loading animations from the command line", long_about = None)]
#[command(version, long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("GIT_HASH"), " ", env!("GIT_COMMIT_DATE"), ")"
))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use a catalog JSON file instead of the built-in dataset
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<std::path::PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List loaders, one page at a time
    #[command(alias = "ls")]
    List {
        /// Search term (matches name, category, description, and tags)
        #[arg(short, long)]
        search: Option<String>,

        /// Category ("all" for no constraint)
        #[arg(short, long)]
        category: Option<String>,

        /// Complexity: simple, medium, complex
        #[arg(long)]
        complexity: Option<String>,

        /// Size: xs, sm, md, lg, xl
        #[arg(long)]
        size: Option<String>,

        /// Speed: slow, normal, fast
        #[arg(long)]
        speed: Option<String>,

        /// Sort key: name, downloads, likes, created
        #[arg(long, default_value = "name")]
        sort: String,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,

        /// Page number (1-based, 24 loaders per page)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Search loaders (shorthand for list --search)
    Search { term: String },

    /// Show one loader in full
    #[command(alias = "v")]
    Show {
        /// Loader id (e.g. classic-spinner-1)
        id: String,

        /// Also print the copy-ready snippet
        #[arg(long)]
        code: bool,
    },

    /// Copy a loader's snippet to the clipboard
    #[command(alias = "c")]
    Copy {
        /// Loader id
        id: String,
    },

    /// Export loaders as a tar.gz of snippet files
    Export {
        /// Loader ids (all loaders when omitted)
        #[arg(num_args = 0..)]
        ids: Vec<String>,
    },

    /// Show the category table with loader counts
    #[command(alias = "cats")]
    Categories,

    /// Get or set configuration
    Config {
        /// Configuration key (catalog, line-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
