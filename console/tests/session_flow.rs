use std::path::PathBuf;
use std::time::Duration;

use admin_console::{AppContext, ConsoleConfig, LoginError};
use common_access::visible_entries;
use httpmock::prelude::*;
use tempfile::TempDir;

fn config_for(server: &MockServer, dir: &TempDir) -> ConsoleConfig {
    ConsoleConfig {
        api_base_url: server.base_url(),
        session_file: dir.path().join("session.json"),
        http_timeout: Duration::from_secs(2),
        offline_fallback: false,
    }
}

fn mock_login(server: &MockServer, body: &str) {
    let body = body.to_string();
    server.mock(move |when, then| {
        when.method(POST).path("/admin/auth/login");
        then.status(200)
            .header("content-type", "application/json")
            .body(body.clone());
    });
}

#[tokio::test]
async fn fresh_bootstrap_is_anonymous_and_ready() {
    let server = MockServer::start();
    let dir = TempDir::new().unwrap();

    let context = AppContext::bootstrap(config_for(&server, &dir)).await.unwrap();
    assert!(!context.store.is_loading());
    assert!(!context.store.is_authenticated());
    assert!(visible_entries(&context.gate).is_empty());
}

#[tokio::test]
async fn login_establishes_session_and_survives_restart() {
    let server = MockServer::start();
    let dir = TempDir::new().unwrap();
    mock_login(
        &server,
        r#"{"token":"t1","roles":["Admin"],"permissions":[],"user":{"id":"u-1"}}"#,
    );

    let context = AppContext::bootstrap(config_for(&server, &dir)).await.unwrap();
    context.login("admin@example.com", "secret").await.unwrap();

    assert!(context.store.is_authenticated());
    assert!(context.gate.has_permission("view_orders"));
    assert!(!context.gate.has_permission("manage_role_permissions"));
    let menu_before: Vec<&str> = visible_entries(&context.gate)
        .iter()
        .map(|entry| entry.path)
        .collect();

    // Restart: a second bootstrap over the same session file.
    let restarted = AppContext::bootstrap(config_for(&server, &dir)).await.unwrap();
    assert!(restarted.store.is_authenticated());
    assert_eq!(
        restarted.store.snapshot().unwrap().permissions,
        context.store.snapshot().unwrap().permissions
    );
    let menu_after: Vec<&str> = visible_entries(&restarted.gate)
        .iter()
        .map(|entry| entry.path)
        .collect();
    assert_eq!(menu_before, menu_after);
}

#[tokio::test]
async fn invalid_credentials_create_no_session() {
    let server = MockServer::start();
    let dir = TempDir::new().unwrap();
    server.mock(|when, then| {
        when.method(POST).path("/admin/auth/login");
        then.status(401);
    });

    let context = AppContext::bootstrap(config_for(&server, &dir)).await.unwrap();
    let err = context.login("admin@example.com", "wrong").await.unwrap_err();
    assert!(matches!(err, LoginError::InvalidCredentials));
    assert!(!context.store.is_authenticated());
}

#[tokio::test]
async fn rehydrated_super_admin_gets_authoritative_permissions() {
    let server = MockServer::start();
    let dir = TempDir::new().unwrap();
    let session_file = dir.path().join("session.json");
    std::fs::write(
        &session_file,
        r#"{"authToken":"t2","userRoles":["SUPER_ADMIN"],"userPermissions":["view_orders"],"userId":"u-2"}"#,
    )
    .unwrap();

    let refresh = server.mock(|when, then| {
        when.method(GET).path("/admin/auth/permissions");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"permissions":["view_orders","manage_role_permissions"]}"#);
    });

    let context = AppContext::bootstrap(config_for(&server, &dir)).await.unwrap();
    refresh.assert();

    let session = context.store.snapshot().unwrap();
    assert!(session.permissions.contains("manage_role_permissions"));
}

#[tokio::test]
async fn failed_permission_refresh_keeps_the_session() {
    let server = MockServer::start();
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("session.json"),
        r#"{"authToken":"t2","userRoles":["SUPER_ADMIN"],"userPermissions":["view_orders"],"userId":"u-2"}"#,
    )
    .unwrap();

    server.mock(|when, then| {
        when.method(GET).path("/admin/auth/permissions");
        then.status(500);
    });

    let context = AppContext::bootstrap(config_for(&server, &dir)).await.unwrap();
    assert!(context.store.is_authenticated());
    assert!(context.store.snapshot().unwrap().permissions.contains("view_orders"));
}

#[tokio::test]
async fn staff_logout_uses_the_staff_endpoint_and_clears_locally() {
    let server = MockServer::start();
    let dir = TempDir::new().unwrap();
    mock_login(&server, r#"{"token":"t1","roles":["Admin"],"permissions":[]}"#);
    let staff_logout = server.mock(|when, then| {
        when.method(POST).path("/admin/staff/logout");
        then.status(200);
    });

    let context = AppContext::bootstrap(config_for(&server, &dir)).await.unwrap();
    context.login("admin@example.com", "secret").await.unwrap();
    context.logout().await;

    staff_logout.assert();
    assert!(!context.store.is_authenticated());
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn super_admin_logout_uses_the_super_admin_endpoint() {
    let server = MockServer::start();
    let dir = TempDir::new().unwrap();
    mock_login(&server, r#"{"token":"t2","roles":[{"code":"super_admin"}]}"#);
    let admin_logout = server.mock(|when, then| {
        when.method(POST).path("/admin/auth/logout");
        then.status(200);
    });

    let context = AppContext::bootstrap(config_for(&server, &dir)).await.unwrap();
    context.login("root@example.com", "secret").await.unwrap();
    context.logout().await;

    admin_logout.assert();
    assert!(!context.store.is_authenticated());
}

#[tokio::test]
async fn logout_endpoint_failure_never_blocks_local_logout() {
    let server = MockServer::start();
    let dir = TempDir::new().unwrap();
    mock_login(&server, r#"{"token":"t1","roles":["Vendor"],"permissions":[]}"#);
    server.mock(|when, then| {
        when.method(POST).path("/admin/staff/logout");
        then.status(500).body("broken");
    });

    let context = AppContext::bootstrap(config_for(&server, &dir)).await.unwrap();
    context.login("vendor@example.com", "secret").await.unwrap();
    context.logout().await;

    assert!(!context.store.is_authenticated());
    assert!(context.store.snapshot().is_none());
}

#[tokio::test]
async fn legacy_stored_role_selects_the_logout_endpoint_when_roles_are_empty() {
    let server = MockServer::start();
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("session.json"),
        r#"{"authToken":"t3","userRoles":[],"userPermissions":["view_orders"],"userId":"u-3","userRole":"super_admin"}"#,
    )
    .unwrap();
    let admin_logout = server.mock(|when, then| {
        when.method(POST).path("/admin/auth/logout");
        then.status(200);
    });

    let context = AppContext::bootstrap(config_for(&server, &dir)).await.unwrap();
    context.logout().await;

    admin_logout.assert();
    assert!(!context.store.is_authenticated());
}

#[tokio::test]
async fn a_401_on_any_resource_call_forces_reauthentication() {
    let server = MockServer::start();
    let dir = TempDir::new().unwrap();
    mock_login(&server, r#"{"token":"t1","roles":["Admin"],"permissions":[]}"#);
    server.mock(|when, then| {
        when.method(GET).path("/admin/orders");
        then.status(401);
    });

    let context = AppContext::bootstrap(config_for(&server, &dir)).await.unwrap();
    context.login("admin@example.com", "secret").await.unwrap();

    let err = context.api.list_orders().await.unwrap_err();
    assert!(matches!(err, admin_api::ApiError::Unauthorized));
    assert!(!context.store.is_authenticated());
    assert!(!dir.path().join("session.json").exists());
    assert!(visible_entries(&context.gate).is_empty());
}

#[test]
fn console_config_is_plain_data() {
    let config = ConsoleConfig {
        api_base_url: "http://localhost:8080".into(),
        session_file: PathBuf::from("/tmp/session.json"),
        http_timeout: Duration::from_secs(30),
        offline_fallback: true,
    };
    assert!(config.offline_fallback);
}
