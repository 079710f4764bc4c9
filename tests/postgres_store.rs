//! Runs against a live Postgres. Set `DATABASE_URL` and pass `--ignored`.

use chrono::{Duration, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

use emodak_space::config::{DatabaseConfig, StoreBackend};
use emodak_space::db::Database;
use emodak_space::models::profile::{defaults, Profile, UpsertProfile};
use emodak_space::store::{ProfileStore, StoreError};

async fn database() -> Option<Database> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let config = DatabaseConfig {
        url,
        max_connections: 4,
        backend: StoreBackend::Postgres,
    };
    Some(Database::new(&config).await.unwrap())
}

/// A wallet address no other run has used.
fn fresh_address(tag: &str) -> String {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    format!("0x{}{}", tag, nanos)
}

fn assert_recent(profile: &Profile) {
    let skew = (Utc::now().naive_utc() - profile.last_updated).num_seconds().abs();
    assert!(
        skew < Duration::minutes(1).num_seconds(),
        "last_updated {} is {}s away from UTC now",
        profile.last_updated,
        skew
    );
}

#[tokio::test]
#[ignore]
async fn create_default_then_conflict() {
    let Some(db) = database().await else { return };
    let address = fresh_address("pgc");

    assert!(matches!(db.get(&address).await, Err(StoreError::NotFound(_))));

    let created = db.create_default(&address).await.unwrap();
    assert_eq!(created.wallet_address, address);
    assert_eq!(created.display_name, defaults::DISPLAY_NAME);
    assert_eq!(created.status, defaults::STATUS);
    assert_eq!(created.bio, defaults::BIO);
    assert_eq!(created.avatar_url, defaults::AVATAR_URL);
    assert_eq!(created.hero_image_url, defaults::HERO_IMAGE_URL);
    assert_eq!(created.music_url, defaults::MUSIC_URL);
    assert_eq!(created.interests, defaults::INTERESTS);
    assert_recent(&created);

    assert!(matches!(
        db.create_default(&address).await,
        Err(StoreError::Conflict(_))
    ));
    assert_eq!(db.get(&address).await.unwrap(), created);
}

#[tokio::test]
#[ignore]
async fn upsert_matches_in_memory_resolution() {
    let Some(db) = database().await else { return };
    let address = fresh_address("pgu");

    let mut full = UpsertProfile::new(&address);
    full.display_name = Some("Raven".to_string());
    full.status = Some("crying".to_string());
    full.bio = Some("<i>hi</i>".to_string());
    full.music_url = Some("https://example.com/song.mp3".to_string());
    let first = db.upsert(&full).await.unwrap();
    assert_eq!(first.status, "crying");
    assert_recent(&first);

    // omitted fields go back to their defaults on conflict
    let mut partial = UpsertProfile::new(&address);
    partial.display_name = Some("Crow".to_string());
    let second = db.upsert(&partial).await.unwrap();

    let expected = partial.apply(Some(first.clone()), second.last_updated);
    assert_eq!(second, expected);
    assert_eq!(second.status, defaults::STATUS);
    assert_eq!(second.hero_image_url, first.hero_image_url);
    assert!(second.last_updated >= first.last_updated);
    assert_recent(&second);

    assert_eq!(db.get(&address).await.unwrap(), second);
}

#[tokio::test]
#[ignore]
async fn over_long_display_name_is_rejected_whole() {
    let Some(db) = database().await else { return };
    let address = fresh_address("pgl");

    let mut write = UpsertProfile::new(&address);
    write.display_name = Some("x".repeat(51));

    assert!(db.upsert(&write).await.is_err());
    assert!(matches!(db.get(&address).await, Err(StoreError::NotFound(_))));
}

#[tokio::test]
#[ignore]
async fn ping_reaches_the_server() {
    let Some(db) = database().await else { return };
    db.ping().await.unwrap();
}
