//! Delivery of a lead to the form relay

use gloo_net::http::Request;
use lead_core::{Lead, RelayConfig, SubmitError, SubmitOutcome};

/// POST the lead as JSON and classify the result.
///
/// Exactly one attempt is made; whether to retry is the visitor's call.
/// Runs in the browser, on the fetch transport.
pub async fn send_lead(relay: &RelayConfig, lead: &Lead) -> SubmitOutcome {
    let request = match Request::post(relay.endpoint())
        .header("Content-Type", "application/json")
        .json(lead)
    {
        Ok(request) => request,
        Err(err) => return SubmitOutcome::Failed(SubmitError::Transport(err.to_string())),
    };

    match request.send().await {
        Ok(response) => SubmitOutcome::from_status(response.status()),
        Err(err) => SubmitOutcome::Failed(SubmitError::Transport(err.to_string())),
    }
}
