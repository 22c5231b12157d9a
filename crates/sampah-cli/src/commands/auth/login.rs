use std::io::BufRead;

use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    username: String,
    token_source: Option<String>,
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => read_password_line(std::io::stdin().lock())?,
    };

    Progress::wrap(
        "Logging in",
        sampah_auth::flows::login(ctx.client.as_ref(), &ctx.session, &args.username, &password),
    )
    .await
    .context("login failed")?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            username: args.username.trim().to_string(),
            token_source: ctx.session.source().map(|s| s.to_string()),
        },
        flags.format,
    )
}

fn read_password_line(mut input: impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
