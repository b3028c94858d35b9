//! Request handling: validate, scan, classify, respond.

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use mutascan_core::Summarizable;
use mutascan_seq::{Grid, ScanConfig, Scanner};

use crate::error::ApiError;
use crate::request::{parse_request, DnaRequest};
use crate::response::ApiResponse;

/// Body `data` for a mutant grid.
pub const MUTANT_MESSAGE: &str = "DNA is a mutant.";

/// Body `error` for a grid that is not mutant.
pub const HUMAN_MESSAGE: &str = "DNA is not a mutant.";

/// Outcome of scanning a well-formed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Mutant,
    Human,
}

/// Configuration for the request handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Reject requests with more rows than this (default: no limit).
    pub max_rows: Option<usize>,
    /// Scanner settings.
    pub scan: ScanConfig,
}

/// Scan a validated request.
pub fn classify(request: &DnaRequest, scanner: &Scanner) -> Verdict {
    let grid = Grid::new(&request.dna);
    match scanner.find_run(&grid) {
        Some(run) => {
            debug!("{}: mutant, {}", grid.summary(), run);
            Verdict::Mutant
        }
        None => {
            debug!("{}: not mutant", grid.summary());
            Verdict::Human
        }
    }
}

/// Turns request bodies into responses.
#[derive(Debug, Clone, Default)]
pub struct Handler {
    scanner: Scanner,
    config: HandlerConfig,
}

impl Handler {
    /// A handler with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler with custom settings.
    ///
    /// Fails if the scan configuration is invalid.
    pub fn with_config(config: HandlerConfig) -> Result<Self, ApiError> {
        let scanner = Scanner::with_config(config.scan.clone())?;
        Ok(Self { scanner, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Validate and scan a request body.
    pub fn evaluate(&self, body: &str) -> Result<Verdict, ApiError> {
        let request = parse_request(body)?;
        if let Some(max) = self.config.max_rows {
            if request.dna.len() > max {
                return Err(ApiError::Validation(format!(
                    "DNA must contain at most {} rows, received {}",
                    max,
                    request.dna.len()
                )));
            }
        }
        Ok(classify(&request, &self.scanner))
    }

    /// Handle a raw request body end to end.
    pub fn handle(&self, body: &str) -> ApiResponse {
        match self.evaluate(body) {
            Ok(Verdict::Mutant) => ApiResponse::ok(MUTANT_MESSAGE),
            Ok(Verdict::Human) => ApiResponse::rejected(HUMAN_MESSAGE),
            Err(err) => {
                match &err {
                    ApiError::Validation(msg) => warn!("rejected request: {}", msg),
                    ApiError::Internal(msg) => error!("request failed: {}", msg),
                }
                ApiResponse::from(err)
            }
        }
    }
}

/// Handle a raw request body with a default [`Handler`].
pub fn handle(body: &str) -> ApiResponse {
    Handler::new().handle(body)
}
