use sampah_core::entities::SaleRequest;
use sampah_core::enums::WasteKind;
use sampah_core::responses::SaleResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::bank::BankSellArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &BankSellArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut response = prepare(args, &ctx.config.bank_sampah.whatsapp_number)?;
    if args.open {
        match open::that(&response.whatsapp_url) {
            Ok(()) => response.opened = true,
            Err(error) => tracing::warn!(%error, "could not open browser; use the link instead"),
        }
    }
    output(&response, flags.format)
}

fn prepare(args: &BankSellArgs, whatsapp_number: &str) -> anyhow::Result<SaleResponse> {
    let kind = parse_enum::<WasteKind>(&args.kind, "kind")?;
    let sale = SaleRequest::new(&args.address, args.weight, kind)?;
    Ok(SaleResponse {
        message: sale.message(),
        whatsapp_url: sale.whatsapp_url(whatsapp_number),
        opened: false,
    })
}
