use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::shared::{
    domain::model::value_objects::third_party_access_token::ThirdPartyAccessToken,
    infrastructure::google_sheets::spreadsheet_gateway::{
        FIRST_DATA_ROW, SheetRow, SpreadsheetGateway, SpreadsheetGatewayError,
    },
};

const LAST_COLUMN: &str = "Z";

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendValuesResponse {
    updates: Option<AppendUpdates>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    updated_range: Option<String>,
}

#[derive(Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetMetadata>,
}

#[derive(Deserialize)]
struct SheetMetadata {
    properties: SheetProperties,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    sheet_id: i64,
    title: String,
}

#[derive(Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Deserialize)]
struct GoogleErrorBody {
    message: String,
}

/// Google Sheets v4 REST client bound to one spreadsheet.
pub struct GoogleSheetsGatewayImpl {
    http: Client,
    base_url: String,
    spreadsheet_id: String,
}

impl GoogleSheetsGatewayImpl {
    pub fn new(http: Client, base_url: String, spreadsheet_id: String) -> Self {
        Self {
            http,
            base_url,
            spreadsheet_id,
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SpreadsheetGatewayError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| SpreadsheetGatewayError::Unavailable(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| {
                SpreadsheetGatewayError::Unavailable("sheets base url is not a base".to_string())
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn values_endpoint(&self, range: &str) -> Result<Url, SpreadsheetGatewayError> {
        self.endpoint(&["v4", "spreadsheets", &self.spreadsheet_id, "values", range])
    }

    async fn get_values(
        &self,
        access_token: &ThirdPartyAccessToken,
        range: &str,
    ) -> Result<Vec<Vec<Value>>, SpreadsheetGatewayError> {
        let response = self
            .http
            .get(self.values_endpoint(range)?)
            .bearer_auth(access_token.expose())
            .send()
            .await
            .map_err(map_transport_error)?;

        let response = ensure_success(response).await?;
        let body: ValueRange = response.json().await.map_err(map_transport_error)?;
        Ok(body.values)
    }

    async fn resolve_sheet_id(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
    ) -> Result<i64, SpreadsheetGatewayError> {
        let response = self
            .http
            .get(self.endpoint(&["v4", "spreadsheets", &self.spreadsheet_id])?)
            .query(&[("fields", "sheets.properties")])
            .bearer_auth(access_token.expose())
            .send()
            .await
            .map_err(map_transport_error)?;

        let response = ensure_success(response).await?;
        let metadata: SpreadsheetMetadata = response.json().await.map_err(map_transport_error)?;

        metadata
            .sheets
            .into_iter()
            .find(|sheet| sheet.properties.title == tab_name)
            .map(|sheet| sheet.properties.sheet_id)
            .ok_or_else(|| SpreadsheetGatewayError::TabNotFound(tab_name.to_string()))
    }
}

#[async_trait]
impl SpreadsheetGateway for GoogleSheetsGatewayImpl {
    async fn read_header(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
    ) -> Result<Vec<Value>, SpreadsheetGatewayError> {
        let range = format!("'{tab_name}'!A1:{LAST_COLUMN}1");
        let rows = self.get_values(access_token, &range).await?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }

    async fn read_rows(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
    ) -> Result<Vec<SheetRow>, SpreadsheetGatewayError> {
        let range = format!("'{tab_name}'!A{FIRST_DATA_ROW}:{LAST_COLUMN}");
        let rows = self.get_values(access_token, &range).await?;

        Ok(rows
            .into_iter()
            .zip(FIRST_DATA_ROW..)
            .map(|(values, row_number)| SheetRow { row_number, values })
            .collect())
    }

    async fn append_row(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
        values: &[Value],
    ) -> Result<Option<u32>, SpreadsheetGatewayError> {
        let range = format!("'{tab_name}'!A:{LAST_COLUMN}:append");
        let response = self
            .http
            .post(self.values_endpoint(&range)?)
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(access_token.expose())
            .json(&json!({ "values": [values] }))
            .send()
            .await
            .map_err(map_transport_error)?;

        let response = ensure_success(response).await?;
        let body: AppendValuesResponse = response.json().await.map_err(map_transport_error)?;

        Ok(body
            .updates
            .and_then(|updates| updates.updated_range)
            .and_then(|range| row_number_from_range(&range)))
    }

    async fn update_row(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
        row_number: u32,
        values: &[Value],
    ) -> Result<(), SpreadsheetGatewayError> {
        let range = format!("'{tab_name}'!A{row_number}:{LAST_COLUMN}{row_number}");
        let response = self
            .http
            .put(self.values_endpoint(&range)?)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(access_token.expose())
            .json(&json!({ "range": range, "majorDimension": "ROWS", "values": [values] }))
            .send()
            .await
            .map_err(map_transport_error)?;

        ensure_success(response).await?;
        Ok(())
    }

    async fn delete_row(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
        row_number: u32,
    ) -> Result<(), SpreadsheetGatewayError> {
        let sheet_id = self.resolve_sheet_id(access_token, tab_name).await?;
        let batch_update = format!("{}:batchUpdate", self.spreadsheet_id);

        let response = self
            .http
            .post(self.endpoint(&["v4", "spreadsheets", &batch_update])?)
            .bearer_auth(access_token.expose())
            .json(&json!({
                "requests": [{
                    "deleteDimension": {
                        "range": {
                            "sheetId": sheet_id,
                            "dimension": "ROWS",
                            "startIndex": row_number - 1,
                            "endIndex": row_number,
                        }
                    }
                }]
            }))
            .send()
            .await
            .map_err(map_transport_error)?;

        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response, SpreadsheetGatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<GoogleErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .unwrap_or(body);

    Err(SpreadsheetGatewayError::Rejected {
        status: status.as_u16(),
        message,
    })
}

fn map_transport_error(error: reqwest::Error) -> SpreadsheetGatewayError {
    SpreadsheetGatewayError::Unavailable(error.to_string())
}

/// `'Users'!A5:D5` -> 5
pub fn row_number_from_range(range: &str) -> Option<u32> {
    let cells = range.rsplit('!').next()?;
    let first_cell = cells.split(':').next()?;
    first_cell
        .trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .parse()
        .ok()
}
