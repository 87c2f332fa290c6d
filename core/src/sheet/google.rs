/// Google Sheets values API client
use super::{Row, SheetError, SheetService};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Blocking client for one spreadsheet. Token acquisition lives with
/// the caller; this only attaches the bearer token it is given.
pub struct GoogleSheets {
    client: Client,
    spreadsheet_id: String,
    access_token: String,
}

impl GoogleSheets {
    pub fn new(spreadsheet_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            spreadsheet_id: spreadsheet_id.into(),
            access_token: access_token.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ValueRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    values: Option<Vec<Row>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateResponse {
    #[serde(default)]
    updated_rows: Option<usize>,
}

fn check_status(
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, SheetError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(SheetError::Service {
        status: status.as_u16(),
        body,
    })
}

impl SheetService for GoogleSheets {
    fn get(&self, range: &str) -> Result<Vec<Row>, SheetError> {
        let url = format!("{SHEETS_API}/{}/values/{}", self.spreadsheet_id, range);
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()?;

        let body: ValueRange = check_status(response)?.json()?;
        Ok(body.values.unwrap_or_default())
    }

    fn update(&self, range: &str, rows: &[Row]) -> Result<usize, SheetError> {
        let url = format!("{SHEETS_API}/{}/values/{}", self.spreadsheet_id, range);
        let body = ValueRange {
            range: Some(range.to_string()),
            values: Some(rows.to_vec()),
        };
        let response = self
            .client
            .put(url)
            .bearer_auth(&self.access_token)
            .query(&[("valueInputOption", "RAW")])
            .json(&body)
            .send()?;

        let result: UpdateResponse = check_status(response)?.json()?;
        Ok(result.updated_rows.unwrap_or(0))
    }
}
