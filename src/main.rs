// src/main.rs

// Modules defined in the crate
mod api;
mod config;
mod constants;
mod error;
mod formatting;
mod model;
mod output;
mod pipeline;
mod types;

// Specific imports
use crate::config::{CommandLineInput, PipelineConfig};
use crate::error::AppError;
use crate::formatting::MenuReport;
use crate::model::MenuPage;
use crate::pipeline::{MenuSource, ReportComposer, ReportDelivery};
use chrono::Local;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("menu2gist.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the three-stage menu pipeline: fetch → compose → deliver.
fn execute_pipeline(config: &PipelineConfig) -> Result<(), AppError> {
    let pipeline = MenuMirror::new(config);

    let page = pipeline.fetch()?;
    let report = pipeline.compose(&page)?;
    pipeline.deliver(&report)?;

    Ok(())
}

/// Orchestrates the retrieval, assembly, and delivery of the daily menu.
struct MenuMirror<'a> {
    config: &'a PipelineConfig,
}

impl<'a> MenuMirror<'a> {
    fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }
}

impl MenuSource for MenuMirror<'_> {
    fn fetch(&self) -> Result<MenuPage, AppError> {
        log::info!("Retrieving menu page {}", self.config.page_id);

        let client = api::NotionSiteClient::new(&self.config.host, &self.config.cookie)?;
        let fetcher =
            api::PageFetcher::new(&client, &self.config.page_id, self.config.chunk_limit);
        let page = fetcher.fetch_page()?;

        log::info!(
            "Retrieved root with {} children, {} records in the block table",
            page.root.children().len(),
            page.blocks.len()
        );

        Ok(page)
    }
}

impl ReportComposer for MenuMirror<'_> {
    fn compose(&self, page: &MenuPage) -> Result<MenuReport, AppError> {
        let today = Local::now().date_naive();
        Ok(formatting::assemble(
            &page.root,
            &page.blocks,
            &self.config.end_marker,
            today,
        ))
    }
}

impl ReportDelivery for MenuMirror<'_> {
    fn deliver(&self, report: &MenuReport) -> Result<(), AppError> {
        output::print_report(report);

        let Some(gist) = &self.config.gist else {
            log::debug!("No gist target configured; report printed to stdout only");
            return Ok(());
        };

        let document = output::layout_snippet(report);
        let publisher = output::GistPublisher::new(
            &gist.token,
            gist.id.clone(),
            self.config.gist_file.clone(),
        )?;
        publisher.publish(&document)?;

        println!("✓ Menu published to gist {}", gist.id);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = PipelineConfig::resolve(cli)?;

    execute_pipeline(&config)?;

    Ok(())
}
