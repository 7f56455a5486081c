use std::str::FromStr;

use navscrape_core::{
    serialize_delimited, serialize_json, DedupPolicy, Engine, FundMetadata, FundProfile,
    StrategyId,
};

use crate::cli::{DedupArg, ExtractArgs, OutputFormat};
use crate::error::CliError;
use crate::input::load_document;
use crate::output::{write_file, SeriesSummary};

const FLAGS_PROFILE_ID: &str = "cli";

pub fn run(args: &ExtractArgs) -> Result<(), CliError> {
    let profile = resolve_profile(args)?;
    log::debug!(
        "profile '{}': strategies {:?}, value index {}",
        profile.id,
        profile.extraction.strategies,
        profile.extraction.value_index
    );

    let document = load_document(&args.input, args.html)?;
    let extraction = Engine::new(&profile.extraction).extract(&document, &profile.fund)?;
    for warning in &extraction.warnings {
        log::warn!("{}: {warning}", profile.fund.name);
    }

    let mut wrote_file = false;
    if let Some(path) = &args.json_out {
        write_file(path, &serialize_json(&extraction.series, &profile.fund)?)?;
        wrote_file = true;
    }
    if let Some(path) = &args.csv_out {
        write_file(path, &serialize_delimited(&extraction.series))?;
        wrote_file = true;
    }

    let summary = SeriesSummary::new(&extraction, &profile.fund);
    if !wrote_file {
        match args.format {
            OutputFormat::Json => println!("{}", serialize_json(&extraction.series, &profile.fund)?),
            OutputFormat::Csv => print!("{}", serialize_delimited(&extraction.series)),
            OutputFormat::Summary => {
                println!("{summary}");
                return Ok(());
            }
        }
    }

    if !args.quiet {
        eprintln!("{summary}");
    }
    Ok(())
}

/// Picks the base profile and layers the command-line flags over it.
fn resolve_profile(args: &ExtractArgs) -> Result<FundProfile, CliError> {
    let mut profile = match (&args.profile, &args.profile_file) {
        (Some(id), _) => FundProfile::builtin(id)?,
        (None, Some(path)) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|error| CliError::io(path.display().to_string(), error))?;
            FundProfile::from_yaml_str(&contents)?
        }
        (None, None) => {
            let name = args.name.as_deref().ok_or_else(|| {
                CliError::Command(String::from(
                    "--name is required without --profile or --profile-file",
                ))
            })?;
            let source = args.source.clone().unwrap_or_else(|| args.input.clone());
            FundProfile {
                id: String::from(FLAGS_PROFILE_ID),
                fund: FundMetadata::new(name, source)?,
                extraction: Default::default(),
            }
        }
    };

    if let Some(name) = &args.name {
        profile.fund.name = name.clone();
    }
    if let Some(isin) = &args.isin {
        profile.fund = profile.fund.with_isin(isin.as_str());
    }
    if let Some(currency) = &args.currency {
        profile.fund = profile.fund.with_currency(currency)?;
    }
    if let Some(source) = &args.source {
        profile.fund.source = source.clone();
    }
    profile.fund.validate()?;

    let extraction = &mut profile.extraction;
    if let Some(value_index) = args.value_index {
        extraction.value_index = value_index;
    }
    if let Some(label) = &args.series_label {
        extraction.series_label = Some(label.clone());
    }
    if !args.strategies.is_empty() {
        extraction.strategies = args
            .strategies
            .iter()
            .map(|value| StrategyId::from_str(value))
            .collect::<Result<Vec<_>, _>>()?;
    }
    if let Some(dedup) = args.dedup {
        extraction.dedup = match dedup {
            DedupArg::First => DedupPolicy::First,
            DedupArg::Last => DedupPolicy::Last,
        };
    }

    Ok(profile)
}
