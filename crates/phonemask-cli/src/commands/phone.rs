use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use phonemask_core::{
    clean_raw_input_value, make_partial_value, normalize_input, trim_country_calling_code,
    CallingCode, PartialInput,
};
use serde::Serialize;
use std::io::{self, BufRead};
use tracing::debug;

#[derive(Debug, Args)]
pub struct CallingCodeArgs {
    /// Calling code, with or without the leading `+`
    #[arg(long)]
    pub calling_code: Option<String>,
    /// Region code such as HK; ignored when --calling-code is given
    #[arg(long)]
    pub region: Option<String>,
}

#[derive(Debug, Args)]
pub struct CleanArgs {
    #[arg(allow_hyphen_values = true)]
    pub raw: String,
}

#[derive(Debug, Args)]
pub struct TrimArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: String,
    #[command(flatten)]
    pub code: CallingCodeArgs,
}

#[derive(Debug, Args)]
pub struct PartialArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: String,
    #[command(flatten)]
    pub code: CallingCodeArgs,
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    #[arg(allow_hyphen_values = true)]
    pub inputs: Vec<String>,
    /// Read one input per line from stdin
    #[arg(long)]
    pub stdin: bool,
    #[command(flatten)]
    pub code: CallingCodeArgs,
}

#[derive(Debug, Serialize)]
struct ValueDto<'a> {
    input: &'a str,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    calling_code: Option<&'a CallingCode>,
}

#[derive(Debug, Serialize)]
struct NormalizedDto {
    input: String,
    #[serde(flatten)]
    partial: PartialInput,
}

fn resolve_code(ctx: &Context<'_>, args: &CallingCodeArgs) -> Result<CallingCode> {
    let code = ctx
        .config
        .resolve_calling_code(args.calling_code.as_deref(), args.region.as_deref())
        .with_context(|| "resolve calling code")?;
    debug!(calling_code = %code, "calling code resolved");
    Ok(code)
}

fn emit_value(ctx: &Context<'_>, dto: ValueDto<'_>) -> Result<()> {
    if ctx.json {
        print_json(&dto)?;
    } else {
        println!("{}", dto.value);
    }
    Ok(())
}

pub fn clean(ctx: &Context<'_>, args: CleanArgs) -> Result<()> {
    let value = clean_raw_input_value(&args.raw);
    emit_value(
        ctx,
        ValueDto {
            input: &args.raw,
            value,
            calling_code: None,
        },
    )
}

pub fn trim(ctx: &Context<'_>, args: TrimArgs) -> Result<()> {
    let code = resolve_code(ctx, &args.code)?;
    let cleaned = clean_raw_input_value(&args.value);
    let value = trim_country_calling_code(&cleaned, code.as_str());
    emit_value(
        ctx,
        ValueDto {
            input: &args.value,
            value,
            calling_code: Some(&code),
        },
    )
}

pub fn partial(ctx: &Context<'_>, args: PartialArgs) -> Result<()> {
    let code = resolve_code(ctx, &args.code)?;
    let cleaned = clean_raw_input_value(&args.value);
    let value = make_partial_value(&cleaned, code.as_str());
    emit_value(
        ctx,
        ValueDto {
            input: &args.value,
            value,
            calling_code: Some(&code),
        },
    )
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let code = resolve_code(ctx, &args.code)?;

    let mut inputs = args.inputs;
    if args.stdin {
        for line in io::stdin().lock().lines() {
            inputs.push(line.with_context(|| "read stdin")?);
        }
    }
    if inputs.is_empty() {
        return Err(invalid_input("no input: pass values or --stdin"));
    }
    debug!(count = inputs.len(), "normalizing input");

    let items: Vec<NormalizedDto> = inputs
        .into_iter()
        .map(|input| {
            let partial = normalize_input(&input, &code);
            NormalizedDto { input, partial }
        })
        .collect();

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    for item in items {
        println!("{}", item.partial.value);
    }
    Ok(())
}
