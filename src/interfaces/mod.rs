//! Text-in/text-out conversion interfaces
//!
//! The calling layer (CLI, UI, tests) hands the core a text blob and a
//! direction and gets back either the converted text or a typed failure.
//! Conversions are single synchronous calls over in-memory text; nothing is
//! retained between invocations.

use log::debug;
use thiserror::Error;

use crate::generator::links::link_to_uri;
use crate::models::ImportedConfig;
use crate::parser::config::{extract_link_info, parse_documents, parse_outbound};
use crate::parser::explodes::explode;
use crate::parser::ParseOptions;
use crate::utils::base64::DecodeError;

/// Conversion failure kinds.
///
/// Per-item failures inside a batch (one bad outbound, one bad line) are
/// skipped silently; a call only fails when the whole batch yields nothing
/// usable. Every failure is recoverable by re-supplying different input.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No configs found")]
    NoConfigsFound,

    #[error("No valid links")]
    NoValidLinks,

    #[error("Invalid Base64: {0}")]
    Decode(#[from] DecodeError),
}

/// Conversion direction selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ConfigToLinks,
    LinksToConfig,
}

/// Convert `input` in the given direction.
pub fn convert(
    input: &str,
    direction: Direction,
    options: &ParseOptions,
) -> Result<String, ConvertError> {
    match direction {
        Direction::ConfigToLinks => config_to_links(input),
        Direction::LinksToConfig => links_to_config(input, options),
    }
}

/// Convert a JSON configuration document (or array of documents) into share
/// links, one per line, preserving document and outbound order.
pub fn config_to_links(input: &str) -> Result<String, ConvertError> {
    let documents = parse_documents(input)?;

    let mut links = Vec::new();
    for document in documents {
        let remarks = document.remarks;
        for value in document.outbounds {
            let Some(outbound) = parse_outbound(value) else {
                continue;
            };
            if let Some(info) = extract_link_info(remarks.as_deref(), &outbound) {
                links.push(link_to_uri(outbound.protocol(), &info));
            }
        }
    }

    if links.is_empty() {
        return Err(ConvertError::NoConfigsFound);
    }
    Ok(links.join("\n"))
}

/// Convert share links into a JSON configuration document.
///
/// The input is split on whitespace runs; tokens that do not parse as a
/// supported link are skipped, so pasted text may carry noise.
pub fn links_to_config(input: &str, options: &ParseOptions) -> Result<String, ConvertError> {
    let mut outbounds = Vec::new();
    for line in input.split_whitespace() {
        match explode(line, options) {
            Some(outbound) => outbounds.push(outbound),
            None => debug!("skipping unrecognized link: {}", line),
        }
    }

    if outbounds.is_empty() {
        return Err(ConvertError::NoValidLinks);
    }

    let config = ImportedConfig {
        remarks: "Imported".to_string(),
        outbounds,
    };
    Ok(serde_json::to_string_pretty(&config)?)
}
