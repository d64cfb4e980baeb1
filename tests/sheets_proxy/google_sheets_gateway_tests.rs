use httpmock::prelude::*;
use serde_json::json;
use sheets_auth_gateway::shared::{
    domain::model::value_objects::third_party_access_token::ThirdPartyAccessToken,
    infrastructure::google_sheets::{
        google_sheets_gateway_impl::{GoogleSheetsGatewayImpl, row_number_from_range},
        spreadsheet_gateway::{SpreadsheetGateway, SpreadsheetGatewayError},
    },
};

const SPREADSHEET_ID: &str = "sheet-123";
const TOKEN: &str = "ya29.sheets-token";

fn token() -> ThirdPartyAccessToken {
    ThirdPartyAccessToken::new(TOKEN.to_string()).expect("valid token")
}

fn gateway(server: &MockServer) -> GoogleSheetsGatewayImpl {
    GoogleSheetsGatewayImpl::new(
        reqwest::Client::new(),
        server.base_url(),
        SPREADSHEET_ID.to_string(),
    )
}

#[tokio::test]
async fn reads_header_from_the_first_row() {
    let server = MockServer::start_async().await;
    let authorization = format!("Bearer {TOKEN}");
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v4/spreadsheets/sheet-123/values/'Orders'!A1:Z1")
                .header("authorization", authorization.as_str());
            then.status(200).json_body(json!({
                "range": "'Orders'!A1:Z1",
                "majorDimension": "ROWS",
                "values": [["sku", "qty"]]
            }));
        })
        .await;

    let header = gateway(&server)
        .read_header(&token(), "Orders")
        .await
        .expect("header read");

    mock.assert_async().await;
    assert_eq!(header, vec![json!("sku"), json!("qty")]);
}

#[tokio::test]
async fn empty_tab_has_an_empty_header_and_no_rows() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({ "range": "'Orders'!A1:Z1" }));
        })
        .await;

    let gateway = gateway(&server);
    let header = gateway.read_header(&token(), "Orders").await.expect("header read");
    let rows = gateway.read_rows(&token(), "Orders").await.expect("rows read");

    assert!(header.is_empty());
    assert!(rows.is_empty());
}

#[tokio::test]
async fn numbers_data_rows_from_row_two() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v4/spreadsheets/sheet-123/values/'Orders'!A2:Z");
            then.status(200).json_body(json!({
                "values": [["A-100", "3"], [], ["C-300"]]
            }));
        })
        .await;

    let rows = gateway(&server)
        .read_rows(&token(), "Orders")
        .await
        .expect("rows read");

    mock.assert_async().await;
    let numbers: Vec<u32> = rows.iter().map(|row| row.row_number).collect();
    assert_eq!(numbers, vec![2, 3, 4]);
    assert!(rows[1].values.is_empty());
    assert_eq!(rows[2].values, vec![json!("C-300")]);
}

#[tokio::test]
async fn append_inserts_rows_and_parses_the_updated_range() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v4/spreadsheets/sheet-123/values/'Orders'!A:Z:append")
                .query_param("valueInputOption", "USER_ENTERED")
                .query_param("insertDataOption", "INSERT_ROWS")
                .json_body(json!({ "values": [["C-300", 7, true]] }));
            then.status(200).json_body(json!({
                "spreadsheetId": SPREADSHEET_ID,
                "updates": { "updatedRange": "'Orders'!A5:C5", "updatedRows": 1 }
            }));
        })
        .await;

    let row_number = gateway(&server)
        .append_row(&token(), "Orders", &[json!("C-300"), json!(7), json!(true)])
        .await
        .expect("row appended");

    mock.assert_async().await;
    assert_eq!(row_number, Some(5));
}

#[tokio::test]
async fn update_overwrites_a_single_row_range() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/v4/spreadsheets/sheet-123/values/'Orders'!A5:Z5")
                .query_param("valueInputOption", "USER_ENTERED")
                .json_body(json!({
                    "range": "'Orders'!A5:Z5",
                    "majorDimension": "ROWS",
                    "values": [["C-300", 8]]
                }));
            then.status(200).json_body(json!({ "updatedRows": 1 }));
        })
        .await;

    gateway(&server)
        .update_row(&token(), "Orders", 5, &[json!("C-300"), json!(8)])
        .await
        .expect("row updated");

    mock.assert_async().await;
}

#[tokio::test]
async fn delete_resolves_the_sheet_id_then_removes_the_dimension() {
    let server = MockServer::start_async().await;
    let metadata = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v4/spreadsheets/sheet-123")
                .query_param("fields", "sheets.properties");
            then.status(200).json_body(json!({
                "sheets": [
                    { "properties": { "sheetId": 0, "title": "Users" } },
                    { "properties": { "sheetId": 918273, "title": "Orders" } }
                ]
            }));
        })
        .await;
    let batch_update = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v4/spreadsheets/sheet-123:batchUpdate")
                .json_body(json!({
                    "requests": [{
                        "deleteDimension": {
                            "range": {
                                "sheetId": 918273,
                                "dimension": "ROWS",
                                "startIndex": 3,
                                "endIndex": 4
                            }
                        }
                    }]
                }));
            then.status(200).json_body(json!({ "replies": [{}] }));
        })
        .await;

    gateway(&server)
        .delete_row(&token(), "Orders", 4)
        .await
        .expect("row deleted");

    metadata.assert_async().await;
    batch_update.assert_async().await;
}

#[tokio::test]
async fn delete_on_unknown_tab_is_tab_not_found() {
    let server = MockServer::start_async().await;
    let batch_update = server
        .mock_async(|when, then| {
            when.method(POST).path("/v4/spreadsheets/sheet-123:batchUpdate");
            then.status(200);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/spreadsheets/sheet-123");
            then.status(200).json_body(json!({
                "sheets": [{ "properties": { "sheetId": 0, "title": "Users" } }]
            }));
        })
        .await;

    let result = gateway(&server).delete_row(&token(), "Orders", 2).await;

    assert!(matches!(result, Err(SpreadsheetGatewayError::TabNotFound(tab)) if tab == "Orders"));
    assert_eq!(batch_update.hits_async().await, 0);
}

#[tokio::test]
async fn google_error_envelope_becomes_a_rejection() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(403).json_body(json!({
                "error": {
                    "code": 403,
                    "message": "The caller does not have permission",
                    "status": "PERMISSION_DENIED"
                }
            }));
        })
        .await;

    let result = gateway(&server).read_rows(&token(), "Orders").await;

    match result {
        Err(error @ SpreadsheetGatewayError::Rejected { .. }) => {
            assert!(error.is_authorization_failure());
            assert!(error.to_string().contains("The caller does not have permission"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn plain_text_errors_keep_their_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(500).body("backend exploded");
        })
        .await;

    let result = gateway(&server).read_header(&token(), "Orders").await;

    assert!(matches!(
        result,
        Err(SpreadsheetGatewayError::Rejected { status: 500, ref message }) if message == "backend exploded"
    ));
}

#[tokio::test]
async fn unreachable_api_is_unavailable() {
    let gateway = GoogleSheetsGatewayImpl::new(
        reqwest::Client::new(),
        "http://127.0.0.1:9".to_string(),
        SPREADSHEET_ID.to_string(),
    );

    let result = gateway.read_rows(&token(), "Orders").await;

    assert!(matches!(result, Err(SpreadsheetGatewayError::Unavailable(_))));
}

#[test]
fn row_number_is_taken_from_the_first_cell_of_a_range() {
    assert_eq!(row_number_from_range("'Users'!A5:D5"), Some(5));
    assert_eq!(row_number_from_range("Orders!AB12"), Some(12));
    assert_eq!(row_number_from_range("'Orders'!A:Z"), None);
    assert_eq!(row_number_from_range("garbage"), None);
}
