use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Build the amortisation schedule for a fixed-rate loan.
///
/// Takes the loan request as a JSON string and returns the full result
/// envelope as a JSON string; monetary fields travel as strings so no
/// precision is lost crossing into JavaScript.
#[napi]
pub fn build_amortisation(input_json: String) -> NapiResult<String> {
    let input: emi_core::amortisation::AmortisationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        emi_core::amortisation::build_amortisation(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
