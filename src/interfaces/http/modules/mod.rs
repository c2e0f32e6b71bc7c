pub mod auth;
pub mod clients;
pub mod home;
pub mod hotels;
pub mod request_id;
pub mod roles;
pub mod rooms;
pub mod stays;
pub mod users;
