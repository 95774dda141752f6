//! Command implementations for the hunstem CLI.

use log::debug;

use crate::analysis::language::hungarian::LOCALE;
use crate::analysis::token::PipelineToken;
use crate::analysis::token_filter::stem::Stemmer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DictionaryConfig;
use crate::error::Result;
use crate::host::{HostNamespace, IndexBuilder};
use crate::morphology::Morphology;
use crate::morphology::hunspell::Hunspell;
use crate::plugin::HungarianPlugin;

/// Execute a CLI command.
pub async fn execute_command(args: HunstemArgs) -> Result<()> {
    let config = DictionaryConfig::load(args.config.as_deref(), args.dict_dir.as_deref())?;
    debug!("dictionary directory: {}", config.base_dir.display());
    let plugin = HungarianPlugin::load(&config).await?;

    match &args.command {
        Command::Stem(stem_args) => stem_words(&plugin, stem_args, &args),
        Command::Check(check_args) => check_words(&plugin, check_args, &args),
        Command::Analyze(analyze_args) => analyze_text(&plugin, analyze_args, &args),
        Command::Pipeline(pipeline_args) => show_pipeline(&plugin, pipeline_args, &args),
    }
}

/// Stem each word with the analyzer and the stemming filter.
fn stem_words(
    plugin: &HungarianPlugin<Hunspell>,
    args: &StemArgs,
    cli_args: &HunstemArgs,
) -> Result<()> {
    let stemmer = plugin.stemmer();
    let reports: Vec<StemReport> = args
        .words
        .iter()
        .map(|word| StemReport {
            word: word.clone(),
            candidates: plugin.handle().stem(word),
            stem: stemmer.stemmer().stem(word),
        })
        .collect();

    output_result("Stems", &Reports(reports), cli_args)
}

fn check_words(
    plugin: &HungarianPlugin<Hunspell>,
    args: &CheckArgs,
    cli_args: &HunstemArgs,
) -> Result<()> {
    let reports: Vec<CheckReport> = args
        .words
        .iter()
        .map(|word| CheckReport {
            word: word.clone(),
            recognized: plugin.handle().check(word),
        })
        .collect();

    output_result("Recognized words", &Reports(reports), cli_args)
}

/// Register with a fresh host and return a builder with the locale activated.
fn activated_builder(plugin: &HungarianPlugin<Hunspell>, legacy: bool) -> Result<IndexBuilder> {
    let mut host = HostNamespace::new();
    let locale = plugin.register(&mut host)?;

    let mut builder = if legacy {
        host.legacy_builder()
    } else {
        host.builder()
    };
    builder.use_plugin(locale.as_ref());
    Ok(builder)
}

fn analyze_text(
    plugin: &HungarianPlugin<Hunspell>,
    args: &AnalyzeArgs,
    cli_args: &HunstemArgs,
) -> Result<()> {
    let builder = activated_builder(plugin, args.legacy)?;

    let (pipeline, tokens) = if args.query {
        let pipeline = builder.search_pipeline().unwrap_or(builder.pipeline());
        (pipeline.labels(), builder.analyze_query(&args.text)?)
    } else {
        (builder.pipeline().labels(), builder.analyze(&args.text)?)
    };

    let report = AnalysisReport {
        text: args.text.clone(),
        pipeline,
        tokens: tokens.into_iter().map(PipelineToken::into_text).collect(),
    };
    output_result("Analysis", &report, cli_args)
}

fn show_pipeline(
    plugin: &HungarianPlugin<Hunspell>,
    args: &PipelineArgs,
    cli_args: &HunstemArgs,
) -> Result<()> {
    let builder = activated_builder(plugin, args.legacy)?;

    let report = PipelineReport {
        locale: LOCALE.to_string(),
        pipeline: builder.pipeline().labels(),
        search_pipeline: builder.search_pipeline().map(|pipeline| pipeline.labels()),
    };
    output_result("Pipelines", &report, cli_args)
}
