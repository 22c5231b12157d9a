use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct EducationRow {
    title: String,
    category: String,
    published: String,
    video_url: Option<String>,
}

/// Handle `sampah edukasi`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = sampah_core::catalog::education_feed()
        .into_iter()
        .take(ctx.limit(None, flags.limit))
        .map(|item| EducationRow {
            video_url: item.video_url(),
            title: item.title,
            category: item.category,
            published: item.published,
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
