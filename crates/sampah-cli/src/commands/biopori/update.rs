use super::create::saved_response;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::biopori::BioporiUpdateArgs;
use crate::commands::shared::parse::{parse_date, parse_time};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(args: &BioporiUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let date = args.date.as_deref().map(parse_date).transpose()?;
    let time = args.time.as_deref().map(parse_time).transpose()?;

    let mut form = Progress::wrap("Loading biopori", ctx.edit_form(&args.id)).await?;
    if let Some(name) = &args.name {
        form.set_name(name.as_str());
    }
    if args.clear_image {
        form.set_image_url(None);
    } else if let Some(image_url) = &args.image_url {
        form.set_image_url(Some(image_url.clone()));
    }
    if let Some(date) = date {
        form.set_date(date);
    }
    if let Some(time) = time {
        form.set_time(time);
    }

    let saved = Progress::wrap("Saving biopori", form.submit()).await?;
    let response = saved_response(ctx, saved.as_ref(), &form.validate()?.payload()?).await?;
    output(&response, flags.format)
}
