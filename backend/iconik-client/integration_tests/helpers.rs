use iconik_client::{ClientConfig, Credentials, IconikClient};

use wiremock::MockServer;

pub const APP_ID: &str = "test-app-id";
pub const AUTH_TOKEN: &str = "test-auth-token";

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        host: format!("{}/API/", server.uri()),
        ..ClientConfig::default()
    }
}

pub async fn start() -> (MockServer, IconikClient) {
    let server = MockServer::start().await;
    let credentials = Credentials::new(APP_ID, AUTH_TOKEN).unwrap();
    let client = IconikClient::new(credentials, &config_for(&server)).unwrap();
    (server, client)
}
