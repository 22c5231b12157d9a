use clap::ValueEnum;

/// How command results are written to stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Aligned columns
    #[default]
    Table,
    /// Compact single-line JSON
    Raw,
}

/// Flags every command handler sees, wherever they appeared on the command line.
#[derive(Clone, Copy, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
}

impl GlobalFlags {
    #[must_use]
    pub fn is_table(&self) -> bool {
        self.format == OutputFormat::Table
    }
}
