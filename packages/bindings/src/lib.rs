use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Quote pipeline
// ---------------------------------------------------------------------------

/// Process a raw loan request end to end. Returns either the quote envelope
/// or the per-field validation error record, serialized as JSON; engine
/// errors (e.g. an unknown payment schedule) become JS exceptions.
#[napi]
pub fn calculate_payment(input_json: String) -> NapiResult<String> {
    let request: mortgage_core::validation::RawMortgageRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let outcome = mortgage_core::quote::process_request(&request).map_err(to_napi_error)?;
    serde_json::to_string(&outcome).map_err(to_napi_error)
}

/// Validate a raw loan request without computing a quote. An empty JSON
/// object means the request is valid.
#[napi]
pub fn validate_request(input_json: String) -> NapiResult<String> {
    let request: mortgage_core::validation::RawMortgageRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let errors = mortgage_core::validation::validate_request(&request);
    serde_json::to_string(&errors).map_err(to_napi_error)
}
