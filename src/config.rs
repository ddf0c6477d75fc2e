// src/config.rs
use crate::constants::{
    BROWSER_COOKIE, DEFAULT_GIST_FILE, MENU_END_MARKER_ID, MENU_HOST, MENU_PAGE_ID,
    PAGE_CHUNK_LIMIT,
};
use crate::error::AppError;
use crate::types::{BlockId, GistId, GistToken};
use clap::Parser;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Print the report without updating the gist
    #[arg(long, default_value_t = false)]
    pub no_publish: bool,

    /// Menu page block id (defaults to the built-in page)
    #[arg(long)]
    pub page_id: Option<String>,

    /// Hosted-page host (defaults to the built-in host)
    #[arg(long)]
    pub host: Option<String>,

    /// File name inside the target gist
    #[arg(long, default_value = DEFAULT_GIST_FILE)]
    pub gist_file: String,
}

/// The configured snippet destination.
#[derive(Debug, Clone)]
pub struct GistTarget {
    pub token: GistToken,
    pub id: GistId,
}

/// Resolved pipeline configuration — validated and ready to drive all
/// three stages.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub page_id: BlockId,
    pub end_marker: BlockId,
    pub host: String,
    pub cookie: String,
    pub chunk_limit: u32,
    pub gist: Option<GistTarget>,
    pub gist_file: String,
    #[allow(dead_code)] // Used by bin crate
    pub verbose: bool,
}

impl PipelineConfig {
    /// Resolves a complete pipeline configuration from CLI input and
    /// environment.
    ///
    /// Publishing is enabled only when both `GIST_TOKEN` and `GIST_ID`
    /// are set (and `--no-publish` is not); fetching and printing run
    /// either way.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let page_id = BlockId::parse(cli.page_id.as_deref().unwrap_or(MENU_PAGE_ID))?;
        let end_marker = BlockId::parse(MENU_END_MARKER_ID)?;

        let host = cli
            .host
            .unwrap_or_else(|| MENU_HOST.to_string())
            .trim_end_matches('/')
            .to_string();

        let gist = if cli.no_publish {
            None
        } else {
            Self::resolve_gist_target()?
        };

        Ok(PipelineConfig {
            page_id,
            end_marker,
            host,
            cookie: BROWSER_COOKIE.to_string(),
            chunk_limit: PAGE_CHUNK_LIMIT,
            gist,
            gist_file: cli.gist_file,
            verbose: cli.verbose,
        })
    }

    fn resolve_gist_target() -> Result<Option<GistTarget>, AppError> {
        match (std::env::var("GIST_TOKEN"), std::env::var("GIST_ID")) {
            (Ok(token), Ok(id)) => Ok(Some(GistTarget {
                token: GistToken::new(token)?,
                id: GistId::new(id)?,
            })),
            _ => {
                log::info!("GIST_TOKEN/GIST_ID not set — publishing disabled");
                Ok(None)
            }
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            page_id: BlockId::parse(MENU_PAGE_ID).expect("built-in page id should be valid"),
            end_marker: BlockId::parse(MENU_END_MARKER_ID)
                .expect("built-in end marker id should be valid"),
            host: MENU_HOST.to_string(),
            cookie: BROWSER_COOKIE.to_string(),
            chunk_limit: PAGE_CHUNK_LIMIT,
            gist: None,
            gist_file: DEFAULT_GIST_FILE.to_string(),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses_built_in_ids() {
        let config = PipelineConfig::default();
        assert_eq!(config.page_id.as_str(), MENU_PAGE_ID);
        assert_eq!(config.end_marker.as_str(), MENU_END_MARKER_ID);
        assert!(config.gist.is_none());
    }
}
