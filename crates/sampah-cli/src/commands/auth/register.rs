use anyhow::Context;
use sampah_auth::flows::RegisterForm;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct AuthRegisterResponse {
    registered: bool,
    username: String,
    /// False when the backend returned no token; run `sampah auth login` next.
    authenticated: bool,
}

pub async fn handle(args: &AuthRegisterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = RegisterForm {
        username: args.username.clone(),
        phone_number: args.phone_number.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        confirm_password: args.confirm_password.clone(),
    };

    let authenticated = Progress::wrap(
        "Creating account",
        sampah_auth::flows::register(ctx.client.as_ref(), &ctx.session, &form),
    )
    .await
    .context("registration failed")?;

    output(
        &AuthRegisterResponse {
            registered: true,
            username: form.username.trim().to_string(),
            authenticated,
        },
        flags.format,
    )
}
