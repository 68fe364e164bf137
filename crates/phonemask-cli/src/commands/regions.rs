use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use phonemask_core::CallingCode;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct RegionsArgs {
    /// Only show regions using this calling code
    #[arg(long)]
    pub calling_code: Option<String>,
}

#[derive(Debug, Serialize)]
struct RegionDto {
    region: String,
    calling_code: String,
    prefix: String,
}

pub fn list_regions(ctx: &Context<'_>, args: RegionsArgs) -> Result<()> {
    let filter = args
        .calling_code
        .as_deref()
        .map(CallingCode::new)
        .transpose()?;

    let items: Vec<RegionDto> = ctx
        .config
        .regions
        .iter()
        .filter(|(_, code)| filter.as_ref().map_or(true, |wanted| wanted == *code))
        .map(|(region, code)| RegionDto {
            region: region.to_string(),
            calling_code: code.to_string(),
            prefix: code.prefix(),
        })
        .collect();

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    if items.is_empty() {
        println!("no regions");
        return Ok(());
    }

    for item in items {
        println!("{} {}", item.region, item.prefix);
    }
    Ok(())
}
