use std::fs;
use std::io::{self, Read};

use crate::models::{AnalyzeRequest, AnalyzeResponse};
use crate::opts::AnalyzeOpts;
use crate::prelude::*;
use crate::regression::{fit_and_predict, FitError};

pub fn analyze(request: &AnalyzeRequest) -> StdResult<AnalyzeResponse, FitError> {
    fit_and_predict(&request.data, request.predict_x).map(AnalyzeResponse::from)
}

/// Runs a single analysis offline and prints the response to the standard output.
#[instrument(skip_all)]
pub fn run(opts: AnalyzeOpts) -> Result {
    let body = match &opts.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?,
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("failed to read the standard input")?;
            body
        }
    };
    let response = parse_and_analyze(&body)?;
    let output = if opts.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);
    Ok(())
}

fn parse_and_analyze(body: &str) -> Result<AnalyzeResponse> {
    let request: AnalyzeRequest =
        serde_json::from_str(body).context("failed to parse the analysis request")?;
    debug!(n_points = request.data.len(), request.predict_x);
    let response =
        analyze(&request).map_err(|error| anyhow!("{} ({})", error, error.kind()))?;
    info!(response.prediction, response.coefficient, response.intercept);
    Ok(response)
}
