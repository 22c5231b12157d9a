use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::GlobalFlags;

/// Terminal capabilities resolved once at startup.
#[derive(Clone, Copy, Debug, Default)]
pub struct Terminal {
    pub colored_tables: bool,
    pub spinner: bool,
    pub columns: Option<usize>,
}

static TERMINAL: OnceLock<Terminal> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let color_allowed = std::env::var_os("NO_COLOR").is_none();
    let terminal = Terminal {
        colored_tables: flags.is_table()
            && !flags.quiet
            && color_allowed
            && std::io::stdout().is_terminal(),
        // indicatif draws on stderr.
        spinner: !flags.quiet && std::io::stderr().is_terminal(),
        columns: columns_from_env(),
    };
    let _ = TERMINAL.set(terminal);
}

#[must_use]
pub fn terminal() -> Terminal {
    TERMINAL.get().copied().unwrap_or_default()
}

fn columns_from_env() -> Option<usize> {
    let columns = std::env::var("COLUMNS").ok()?.trim().parse::<usize>().ok()?;
    (columns >= 40).then_some(columns)
}
