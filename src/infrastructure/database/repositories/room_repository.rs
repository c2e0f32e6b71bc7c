use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue::NotSet, Set};

use super::record_repository::EntityMapping;
use crate::domain::{DomainResult, NewRoom, Room, RoomChanges};
use crate::infrastructure::database::entities::{decode_list, encode_list, room};

pub(crate) fn room_model_to_domain(model: room::Model) -> Room {
    Room {
        id: model.id,
        hotel_id: model.hotel_id,
        name: model.name,
        location: model.location,
        amenities: decode_list(&model.amenities),
        pictures: decode_list(&model.pictures),
        price: model.price,
        occupied: model.occupied,
        last_update: model.last_update,
        created_at: model.created_at,
    }
}

impl EntityMapping for Room {
    type Entity = room::Entity;
    type ActiveModel = room::ActiveModel;

    fn id_column() -> room::Column {
        room::Column::Id
    }

    fn from_model(model: room::Model) -> Self {
        room_model_to_domain(model)
    }

    fn draft_into_active(draft: NewRoom, now: DateTime<Utc>) -> DomainResult<room::ActiveModel> {
        Ok(room::ActiveModel {
            id: NotSet,
            hotel_id: Set(draft.hotel_id),
            name: Set(draft.name),
            location: Set(draft.location),
            amenities: Set(encode_list(&draft.amenities)?),
            pictures: Set(encode_list(&draft.pictures)?),
            price: Set(draft.price),
            occupied: Set(false),
            last_update: Set(now),
            created_at: Set(now),
        })
    }

    // `occupied` and `last_update` belong to the check-in workflow
    fn apply_changes(active: &mut room::ActiveModel, changes: RoomChanges) -> DomainResult<()> {
        if let Some(hotel_id) = changes.hotel_id {
            active.hotel_id = Set(hotel_id);
        }
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(location) = changes.location {
            active.location = Set(Some(location));
        }
        if let Some(amenities) = changes.amenities {
            active.amenities = Set(encode_list(&amenities)?);
        }
        if let Some(pictures) = changes.pictures {
            active.pictures = Set(encode_list(&pictures)?);
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{CheckInRequest, CheckOutRequest, DomainError, RepositoryProvider, RoomChanges};
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_support::{
        new_hotel, new_room, seed_front_desk, setup_test_db,
    };

    #[tokio::test]
    async fn new_room_starts_vacant() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let hotel = repos.hotels().create(new_hotel("Pines")).await.unwrap();
        let room = repos
            .rooms()
            .create(new_room(hotel.id, "P1", 100.0))
            .await
            .unwrap();

        assert!(!room.occupied);
        assert_eq!(room.price, 100.0);
        assert_eq!(room.amenities, vec!["wifi".to_string(), "tv".to_string()]);
        assert_eq!(room.last_update, room.created_at);
    }

    #[tokio::test]
    async fn room_requires_existing_hotel() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let err = repos
            .rooms()
            .create(new_room(31, "Z9", 50.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn price_update_keeps_occupancy() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let hotel = repos.hotels().create(new_hotel("Dunes")).await.unwrap();
        let room = repos
            .rooms()
            .create(new_room(hotel.id, "D1", 100.0))
            .await
            .unwrap();

        let changes = RoomChanges {
            price: Some(120.5),
            ..RoomChanges::default()
        };
        let updated = repos.rooms().update(room.id, changes).await.unwrap();
        assert_eq!(updated.price, 120.5);
        assert!(!updated.occupied);
        assert_eq!(updated.last_update, room.last_update);
    }

    #[tokio::test]
    async fn occupied_room_keeps_its_hotel() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let desk = seed_front_desk(&repos).await;
        let annex = repos.hotels().create(new_hotel("Annex")).await.unwrap();
        let stay = repos
            .stays()
            .check_in(CheckInRequest {
                room_id: desk.room.id,
                staff_user_id: desk.staff.id,
                client_id: desk.client.id,
            })
            .await
            .unwrap();

        let move_to_annex = RoomChanges {
            hotel_id: Some(annex.id),
            ..RoomChanges::default()
        };
        let err = repos
            .rooms()
            .update(desk.room.id, move_to_annex.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RoomUnavailable(id) if id == desk.room.id));

        let room = repos.rooms().get(desk.room.id).await.unwrap();
        assert_eq!(room.hotel_id, stay.hotel_id);

        repos
            .stays()
            .check_out(CheckOutRequest {
                check_in_id: stay.id,
                staff_user_id: desk.staff.id,
            })
            .await
            .unwrap();
        let moved = repos
            .rooms()
            .update(desk.room.id, move_to_annex)
            .await
            .unwrap();
        assert_eq!(moved.hotel_id, annex.id);
    }
}
