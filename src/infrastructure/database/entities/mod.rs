//! Database entities module

pub mod check_in;
pub mod check_out;
pub mod client;
pub mod hotel;
pub mod role;
pub mod room;
pub mod string_list;
pub mod user;

pub use check_in::Entity as CheckIn;
pub use check_out::Entity as CheckOut;
pub use client::Entity as Client;
pub use hotel::Entity as Hotel;
pub use role::Entity as Role;
pub use room::Entity as Room;
pub use string_list::{decode_list, encode_list};
pub use user::Entity as User;
