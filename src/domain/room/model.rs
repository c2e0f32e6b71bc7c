use chrono::{DateTime, Utc};
use validator::Validate;

use crate::domain::repositories::{DomainResult, Record, Repository, RepositoryProvider};
use crate::shared::DomainError;

/// Occupancy state of a room, derived from its `occupied` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Vacant,
    Occupied,
}

impl std::fmt::Display for Occupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vacant => write!(f, "vacant"),
            Self::Occupied => write!(f, "occupied"),
        }
    }
}

/// A bookable room.
///
/// `occupied` is owned by the check-in/check-out workflow: it is true exactly
/// while an open check-in references the room, and CRUD updates never touch it.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub location: Option<String>,
    pub amenities: Vec<String>,
    pub pictures: Vec<String>,
    pub price: f64,
    pub occupied: bool,
    /// Last occupancy change (or creation)
    pub last_update: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn occupancy(&self) -> Occupancy {
        if self.occupied {
            Occupancy::Occupied
        } else {
            Occupancy::Vacant
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct NewRoom {
    pub hotel_id: i32,
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub name: String,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[validate(length(max = 64))]
    pub amenities: Vec<String>,
    #[validate(length(max = 64))]
    pub pictures: Vec<String>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: f64,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct RoomChanges {
    pub hotel_id: Option<i32>,
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[validate(length(max = 64))]
    pub amenities: Option<Vec<String>>,
    #[validate(length(max = 64))]
    pub pictures: Option<Vec<String>>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: Option<f64>,
}

impl Record for Room {
    const ENTITY: &'static str = "Room";

    type Draft = NewRoom;
    type Changes = RoomChanges;

    fn id(&self) -> i32 {
        self.id
    }

    fn repository(repos: &dyn RepositoryProvider) -> &dyn Repository<Self> {
        repos.rooms()
    }

    /// An open check-in records the room's hotel, so an occupied room
    /// stays where it is.
    fn guard_update(&self, changes: &RoomChanges) -> DomainResult<()> {
        match (self.occupancy(), changes.hotel_id) {
            (Occupancy::Occupied, Some(hotel_id)) if hotel_id != self.hotel_id => {
                Err(DomainError::RoomUnavailable(self.id))
            }
            _ => Ok(()),
        }
    }

    fn guard_delete(&self) -> DomainResult<()> {
        match self.occupancy() {
            Occupancy::Vacant => Ok(()),
            Occupancy::Occupied => Err(DomainError::RoomUnavailable(self.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(occupied: bool) -> Room {
        Room {
            id: 4,
            hotel_id: 1,
            name: "A4".into(),
            location: None,
            amenities: vec![],
            pictures: vec![],
            price: 100.0,
            occupied,
            last_update: Utc::now(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn occupancy_follows_flag() {
        assert_eq!(room(false).occupancy(), Occupancy::Vacant);
        assert_eq!(room(true).occupancy(), Occupancy::Occupied);
    }

    #[test]
    fn occupied_room_refuses_delete() {
        assert!(room(false).guard_delete().is_ok());
        assert!(matches!(
            room(true).guard_delete(),
            Err(DomainError::RoomUnavailable(4))
        ));
    }

    #[test]
    fn occupied_room_cannot_change_hotel() {
        let move_to = |hotel_id| RoomChanges {
            hotel_id: Some(hotel_id),
            ..RoomChanges::default()
        };

        assert!(room(false).guard_update(&move_to(2)).is_ok());
        assert!(matches!(
            room(true).guard_update(&move_to(2)),
            Err(DomainError::RoomUnavailable(4))
        ));
        assert!(room(true).guard_update(&move_to(1)).is_ok());
        let reprice = RoomChanges {
            price: Some(120.0),
            ..RoomChanges::default()
        };
        assert!(room(true).guard_update(&reprice).is_ok());
    }

    #[test]
    fn negative_price_is_invalid() {
        let draft = NewRoom {
            hotel_id: 1,
            name: "B1".into(),
            location: None,
            amenities: vec![],
            pictures: vec![],
            price: -1.0,
        };
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }
}
