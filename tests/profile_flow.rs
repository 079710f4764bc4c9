use async_trait::async_trait;
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use emodak_space::api::router;
use emodak_space::client::{
    HttpProfileApi, ProfileApi, ProfileCard, ProfileField, Session, SessionError, SessionState,
    Wallet, WalletError,
};
use emodak_space::models::profile::{defaults, UpsertProfile};
use emodak_space::service::ProfileService;
use emodak_space::store::MemoryStore;

const ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

struct InjectedWallet;

#[async_trait]
impl Wallet for InjectedWallet {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        Ok(vec![ADDRESS.to_string()])
    }
}

/// Serve the real router over a fresh memory store, returning the API base URL.
async fn spawn_server() -> String {
    let app = router(ProfileService::new(Arc::new(MemoryStore::new())));
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let server = axum::Server::bind(&addr).serve(app.into_make_service());
    let bound = server.local_addr();
    tokio::spawn(server);
    format!("http://{}/api", bound)
}

/// A base URL nothing is listening on.
fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

fn open_page(base_url: &str) -> Session {
    Session::new(
        Some(Arc::new(InjectedWallet)),
        Arc::new(HttpProfileApi::new(base_url)),
    )
}

#[test_log::test(tokio::test)]
async fn first_fetch_creates_default_profile() {
    let api = HttpProfileApi::new(spawn_server().await);

    let profile = api.fetch(ADDRESS).await.unwrap();
    assert_eq!(profile.wallet_address, ADDRESS);
    assert_eq!(profile.display_name, defaults::DISPLAY_NAME);
    assert_eq!(profile.bio, defaults::BIO);
    assert_eq!(profile.hero_image_url, defaults::HERO_IMAGE_URL);

    // the row now exists and reads back unchanged
    assert_eq!(api.fetch(ADDRESS).await.unwrap(), profile);
}

#[test_log::test(tokio::test)]
async fn partial_post_on_fresh_store_uses_defaults() {
    let api = HttpProfileApi::new(spawn_server().await);

    let mut write = UpsertProfile::new("0xabc");
    write.display_name = Some("X".to_string());
    let saved = api.save(&write).await.unwrap();

    assert_eq!(saved.display_name, "X");
    assert_eq!(saved.status, defaults::STATUS);
    assert_eq!(saved.interests, defaults::INTERESTS);
    assert_eq!(api.fetch("0xabc").await.unwrap(), saved);
}

#[test_log::test(tokio::test)]
async fn connect_edit_save_round_trip() {
    let base_url = spawn_server().await;
    let mut session = open_page(&base_url);

    assert_eq!(session.connect().await.unwrap(), ADDRESS);
    assert_eq!(session.state(), SessionState::Connected);
    assert_eq!(session.profile().display_name, defaults::DISPLAY_NAME);

    session.begin_edit().unwrap();
    session.update_field(ProfileField::DisplayName, "Raven").unwrap();
    session.update_field(ProfileField::AvatarUrl, "https://example.com/raven.png").unwrap();
    session.save().await.unwrap();

    assert_eq!(session.state(), SessionState::Connected);
    assert_eq!(session.profile().display_name, "Raven");

    // a fresh page load sees the saved row
    let mut reloaded = open_page(&base_url);
    reloaded.connect().await.unwrap();
    assert_eq!(reloaded.profile(), session.profile());
    assert_eq!(reloaded.profile().avatar_url, "https://example.com/raven.png");
}

#[test_log::test(tokio::test)]
async fn unreachable_api_degrades_to_placeholder() {
    let mut session = open_page(&dead_endpoint());

    session.connect().await.unwrap();
    assert_eq!(session.state(), SessionState::Connected);
    assert_eq!(session.profile(), &ProfileCard::default());

    session.begin_edit().unwrap();
    session.update_field(ProfileField::Status, "offline and sad").unwrap();
    assert!(matches!(
        session.save().await,
        Err(SessionError::ServiceUnavailable(_))
    ));
    assert_eq!(session.state(), SessionState::Editing);
    assert_eq!(session.draft().unwrap().status, "offline and sad");
}

#[test_log::test(tokio::test)]
async fn rejected_post_surfaces_as_unavailable() {
    let api = HttpProfileApi::new(spawn_server().await);

    let result = api.save(&UpsertProfile::new("")).await;
    assert!(matches!(result, Err(SessionError::ServiceUnavailable(_))));
}

#[test_log::test(tokio::test)]
async fn reserved_characters_stay_in_the_address() {
    let api = HttpProfileApi::new(spawn_server().await);

    let mut write = UpsertProfile::new("0xab/c?d#e");
    write.display_name = Some("X".to_string());
    let saved = api.save(&write).await.unwrap();

    let read = api.fetch("0xab/c?d#e").await.unwrap();
    assert_eq!(read.wallet_address, "0xab/c?d#e");
    assert_eq!(read, saved);
}
