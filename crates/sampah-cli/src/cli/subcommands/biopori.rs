use clap::{Args, Subcommand};

/// Biopori commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BioporiCommands {
    /// List biopori holes.
    List {
        /// Case-insensitive name filter.
        #[arg(long)]
        search: Option<String>,
        /// active, full, or harvested.
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a biopori hole by ID.
    Get { id: String },
    /// Register a new biopori hole.
    Create(BioporiCreateArgs),
    /// Edit a biopori hole.
    Update(BioporiUpdateArgs),
    /// Mark an active hole as full.
    Full { id: String },
    /// Mark a full hole as harvested.
    Harvest { id: String },
    /// Preview the end of the active period for a start date.
    Schedule {
        /// yyyy-MM-dd
        #[arg(long)]
        date: String,
        /// HH:mm (defaults to 00:00)
        #[arg(long)]
        time: Option<String>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct BioporiCreateArgs {
    #[arg(long)]
    pub name: String,
    /// Start date, yyyy-MM-dd (defaults to today).
    #[arg(long)]
    pub date: Option<String>,
    /// Start time, HH:mm (defaults to now).
    #[arg(long)]
    pub time: Option<String>,
    /// Photo reference stored with the record.
    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct BioporiUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long, conflicts_with = "clear_image")]
    pub image_url: Option<String>,
    /// Remove the photo reference.
    #[arg(long)]
    pub clear_image: bool,
}
