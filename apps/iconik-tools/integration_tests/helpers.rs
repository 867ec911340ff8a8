use iconik_client::{ClientConfig, Credentials, IconikClient};

use wiremock::MockServer;

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        host: format!("{}/API/", server.uri()),
        ..ClientConfig::default()
    }
}

pub async fn start() -> (MockServer, IconikClient, ClientConfig) {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let credentials = Credentials::new("app", "token").unwrap();
    let client = IconikClient::new(credentials, &config).unwrap();
    (server, client, config)
}
