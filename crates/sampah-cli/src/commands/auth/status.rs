use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = ctx.session.status();
    if status.expired {
        tracing::warn!("stored token has expired; run `sampah auth login`");
    }
    output(&status, flags.format)
}
