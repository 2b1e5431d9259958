//! AWS Lambda HTTP entry point
//!
//! POST a single company profile as JSON; the response is the rated
//! company as JSON. Set `SACRM_TABLES` to a JSON overrides file to adjust
//! the reference tables at cold start.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde_json::json;

use sacrm::{ProfileError, ProfileRecord, RatingEngine, ReferenceTables};

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?;
    Ok(response)
}

async fn handle(tables: &ReferenceTables, event: Request) -> Result<Response<Body>, Error> {
    let record: ProfileRecord = match serde_json::from_slice(event.body().as_ref()) {
        Ok(record) => record,
        Err(err) => {
            let body = json!({ "error": ProfileError::from(err).to_string() });
            return json_response(400, body.to_string());
        }
    };

    let profile = match record.validate() {
        Ok(profile) => profile,
        Err(err) => {
            log::warn!("Rejected request: {}", err);
            let body = match &err {
                ProfileError::MissingField { fields, .. } => {
                    json!({ "error": err.to_string(), "missing_fields": fields })
                }
                _ => json!({ "error": err.to_string() }),
            };
            return json_response(422, body.to_string());
        }
    };

    let rated = RatingEngine::new(tables).rate_company(&profile);
    log::info!("Rated {}: {} ({})", rated.company_name, rated.rating.grade, rated.rating.composite);
    json_response(200, serde_json::to_string(&rated)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let tables = match std::env::var_os("SACRM_TABLES") {
        Some(path) => ReferenceTables::from_overrides_file(path)?,
        None => ReferenceTables::default(),
    };
    let tables = &tables;

    run(service_fn(move |event: Request| async move { handle(tables, event).await })).await
}
