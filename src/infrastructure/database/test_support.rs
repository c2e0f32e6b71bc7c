//! Shared fixtures for tests that need a migrated database

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use super::migrator::Migrator;
use crate::domain::{
    Client, Hotel, NewClient, NewHotel, NewRoom, NewUser, RepositoryProvider, Room, User,
};

/// Fresh in-memory SQLite database with every migration applied.
///
/// A single pooled connection keeps every query on the same in-memory file.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("Failed to create test database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// One hotel with one vacant room, an unapproved staff user and a guest.
pub struct FrontDesk {
    pub hotel: Hotel,
    pub room: Room,
    pub staff: User,
    pub client: Client,
}

pub async fn seed_front_desk(repos: &dyn RepositoryProvider) -> FrontDesk {
    let hotel = repos.hotels().create(new_hotel("Harbour View")).await.unwrap();
    let room = repos
        .rooms()
        .create(new_room(hotel.id, "A1", 100.0))
        .await
        .unwrap();
    let staff = repos
        .users()
        .create(new_user("desk@harbour.test", "front-desk-1"))
        .await
        .unwrap();
    let client = repos.clients().create(new_client("Grace")).await.unwrap();
    FrontDesk {
        hotel,
        room,
        staff,
        client,
    }
}

pub fn new_hotel(name: &str) -> NewHotel {
    NewHotel {
        name: name.to_string(),
        phone_num: Some("+1 555 0100".into()),
        address: Some("1 Quay Street".into()),
        email: Some("stay@harbour.test".into()),
        website: Some("https://harbour.test".into()),
        room_prefixes: vec!["A".into(), "B".into()],
    }
}

pub fn new_room(hotel_id: i32, name: &str, price: f64) -> NewRoom {
    NewRoom {
        hotel_id,
        name: name.to_string(),
        location: Some("first floor".into()),
        amenities: vec!["wifi".into(), "tv".into()],
        pictures: vec![],
        price,
    }
}

pub fn new_user(email: &str, password: &str) -> NewUser {
    NewUser {
        first_name: "Sam".into(),
        last_name: "Reyes".into(),
        phone_num: None,
        address: None,
        email: email.to_string(),
        password: password.to_string(),
        hotel_id: None,
        role_id: None,
    }
}

pub fn new_client(first_name: &str) -> NewClient {
    NewClient {
        first_name: first_name.to_string(),
        last_name: "Hopper".into(),
        phone_num: None,
        address: None,
        email: None,
        identity_type: Some("passport".into()),
        identity_num: Some("X1234567".into()),
        identity_pic: None,
    }
}
