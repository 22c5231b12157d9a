use sampah_core::catalog;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut locations = catalog::locations();
    locations.truncate(ctx.limit(limit, flags.limit));
    output(&locations, flags.format)
}

pub fn get(id: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let location = catalog::location(id)
        .ok_or_else(|| anyhow::anyhow!("no bank sampah with id '{id}'"))?;
    output(&location, flags.format)
}
