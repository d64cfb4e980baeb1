use serde_json::json;
use sheets_auth_gateway::sheets_proxy::domain::{
    model::{
        commands::{
            append_row_command::AppendRowCommand,
            delete_row_command::DeleteRowCommand,
            update_row_command::{UpdateRowCommand, UpdateRowCommandParts},
        },
        enums::sheets_proxy_domain_error::SheetsProxyDomainError,
    },
    services::sheets_proxy_command_service::SheetsProxyCommandService,
};

use crate::support::{
    FailureMode, GatewayCall, ROSTER_TAB, admin_caller, create_sheets_proxy_harness, user_caller,
};

#[tokio::test]
async fn append_forwards_values_and_reports_the_new_row() {
    let harness = create_sheets_proxy_harness();
    let values = vec![json!("C-300"), json!(7), json!(false)];

    let row_number = harness
        .command_service
        .handle_append(
            AppendRowCommand::new(user_caller(), "Orders".to_string(), values.clone())
                .expect("valid command"),
        )
        .await
        .expect("row appended");

    assert_eq!(row_number, Some(4));
    assert_eq!(
        harness.gateway.calls(),
        vec![GatewayCall::Append {
            tab: "Orders".to_string(),
            values
        }]
    );
}

#[tokio::test]
async fn update_targets_the_requested_row() {
    let harness = create_sheets_proxy_harness();

    harness
        .command_service
        .handle_update(
            UpdateRowCommand::new(UpdateRowCommandParts {
                caller: user_caller(),
                tab: "Orders".to_string(),
                row_number: 3,
                values: vec![json!("B-200"), json!(2), json!(true)],
            })
            .expect("valid command"),
        )
        .await
        .expect("row updated");

    assert_eq!(
        harness.gateway.calls(),
        vec![GatewayCall::Update {
            tab: "Orders".to_string(),
            row_number: 3,
            values: vec![json!("B-200"), json!(2), json!(true)],
        }]
    );
}

#[tokio::test]
async fn delete_is_reserved_for_admins() {
    let harness = create_sheets_proxy_harness();

    let denied = harness
        .command_service
        .handle_delete(
            DeleteRowCommand::new(user_caller(), "Orders".to_string(), 2).expect("valid command"),
        )
        .await;
    harness
        .command_service
        .handle_delete(
            DeleteRowCommand::new(admin_caller(), "Orders".to_string(), 2).expect("valid command"),
        )
        .await
        .expect("admin deletes");

    assert!(matches!(denied, Err(SheetsProxyDomainError::AccessDenied)));
    assert_eq!(
        harness.gateway.calls(),
        vec![GatewayCall::Delete {
            tab: "Orders".to_string(),
            row_number: 2
        }]
    );
}

#[tokio::test]
async fn roster_tab_cannot_be_written_through_the_proxy() {
    let harness = create_sheets_proxy_harness();

    let append = harness
        .command_service
        .handle_append(
            AppendRowCommand::new(admin_caller(), "users".to_string(), vec![json!("x@x.com")])
                .expect("valid command"),
        )
        .await;
    let update = harness
        .command_service
        .handle_update(
            UpdateRowCommand::new(UpdateRowCommandParts {
                caller: admin_caller(),
                tab: ROSTER_TAB.to_string(),
                row_number: 2,
                values: vec![json!("x@x.com"), json!("admin")],
            })
            .expect("valid command"),
        )
        .await;
    let delete = harness
        .command_service
        .handle_delete(
            DeleteRowCommand::new(admin_caller(), ROSTER_TAB.to_string(), 2)
                .expect("valid command"),
        )
        .await;

    assert!(matches!(append, Err(SheetsProxyDomainError::ProtectedTab)));
    assert!(matches!(update, Err(SheetsProxyDomainError::ProtectedTab)));
    assert!(matches!(delete, Err(SheetsProxyDomainError::ProtectedTab)));
    assert!(harness.gateway.calls().is_empty());
}

#[tokio::test]
async fn upstream_rejection_keeps_status_and_message() {
    let harness = create_sheets_proxy_harness();
    harness.gateway.fail_with(FailureMode::Rejected(403));

    let result = harness
        .command_service
        .handle_append(
            AppendRowCommand::new(user_caller(), "Orders".to_string(), vec![json!(1)])
                .expect("valid command"),
        )
        .await;

    assert!(matches!(
        result,
        Err(SheetsProxyDomainError::UpstreamRejected { status: 403, ref message }) if message == "upstream said 403"
    ));
}

#[test]
fn commands_validate_their_inputs() {
    assert!(matches!(
        AppendRowCommand::new(user_caller(), "Bad!Tab".to_string(), vec![json!(1)]),
        Err(SheetsProxyDomainError::InvalidTabName)
    ));
    assert!(matches!(
        DeleteRowCommand::new(admin_caller(), "Orders".to_string(), 1),
        Err(SheetsProxyDomainError::InvalidRowNumber)
    ));
    assert!(matches!(
        UpdateRowCommand::new(UpdateRowCommandParts {
            caller: user_caller(),
            tab: "Orders".to_string(),
            row_number: 2,
            values: vec![],
        }),
        Err(SheetsProxyDomainError::InvalidRowValues(_))
    ));
}
