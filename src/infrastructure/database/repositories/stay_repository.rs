//! Check-in / check-out persistence
//!
//! Both workflow steps run inside one transaction. The room is claimed with a
//! conditional update so two racing check-ins cannot both succeed, and the
//! partial unique indexes on `check_ins` back that up for rooms and clients.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::domain::{
    CheckIn, CheckInFilter, CheckInRequest, CheckOut, CheckOutRequest, DomainError, DomainResult,
    StayRepository,
};
use crate::infrastructure::database::db_err;
use crate::infrastructure::database::entities::{check_in, check_out, client, room, user};
use crate::shared::{PageRequest, PaginatedResult};

pub struct SeaOrmStayRepository {
    db: DatabaseConnection,
}

impl SeaOrmStayRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn check_in_model_to_domain(model: check_in::Model) -> CheckIn {
    CheckIn {
        id: model.id,
        room_id: model.room_id,
        checked_in_by: model.checked_in_by,
        client_id: model.client_id,
        hotel_id: model.hotel_id,
        is_open: model.is_open,
        created_at: model.created_at,
    }
}

fn check_out_model_to_domain(model: check_out::Model) -> CheckOut {
    CheckOut {
        id: model.id,
        checked_out_by: model.checked_out_by,
        check_in_id: model.check_in_id,
        created_at: model.created_at,
    }
}

/// Maps a unique-index hit on `check_ins` back to the occupancy error it stands for.
fn open_stay_conflict(err: DomainError, request: &CheckInRequest) -> DomainError {
    match err {
        DomainError::ConstraintViolation(msg) if msg.contains("client_id") => {
            DomainError::ClientAlreadyCheckedIn(request.client_id)
        }
        DomainError::ConstraintViolation(msg) if msg.contains("room_id") => {
            DomainError::RoomUnavailable(request.room_id)
        }
        other => other,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl StayRepository for SeaOrmStayRepository {
    async fn check_in(&self, request: CheckInRequest) -> DomainResult<CheckIn> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let room = room::Entity::find_by_id(request.room_id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Room", request.room_id))?;

        user::Entity::find_by_id(request.staff_user_id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("User", request.staff_user_id))?;

        client::Entity::find_by_id(request.client_id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Client", request.client_id))?;

        if room.occupied {
            return Err(DomainError::RoomUnavailable(room.id));
        }

        let client_stay = check_in::Entity::find()
            .filter(check_in::Column::ClientId.eq(request.client_id))
            .filter(check_in::Column::IsOpen.eq(true))
            .one(&txn)
            .await
            .map_err(db_err)?;
        if client_stay.is_some() {
            return Err(DomainError::ClientAlreadyCheckedIn(request.client_id));
        }

        let now = Utc::now();
        let claimed = room::Entity::update_many()
            .col_expr(room::Column::Occupied, Expr::value(true))
            .col_expr(room::Column::LastUpdate, Expr::value(now))
            .filter(room::Column::Id.eq(room.id))
            .filter(room::Column::Occupied.eq(false))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        if claimed.rows_affected == 0 {
            return Err(DomainError::RoomUnavailable(room.id));
        }

        let model = check_in::ActiveModel {
            id: NotSet,
            room_id: Set(room.id),
            checked_in_by: Set(request.staff_user_id),
            client_id: Set(request.client_id),
            hotel_id: Set(room.hotel_id),
            is_open: Set(true),
            created_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| open_stay_conflict(db_err(e), &request))?;

        txn.commit().await.map_err(db_err)?;

        debug!(
            "Check-in {} opened: room {} client {}",
            model.id, model.room_id, model.client_id
        );
        Ok(check_in_model_to_domain(model))
    }

    async fn check_out(&self, request: CheckOutRequest) -> DomainResult<CheckOut> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let stay = check_in::Entity::find_by_id(request.check_in_id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("CheckIn", request.check_in_id))?;

        user::Entity::find_by_id(request.staff_user_id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("User", request.staff_user_id))?;

        if !stay.is_open {
            return Err(DomainError::AlreadyCheckedOut(stay.id));
        }

        let closed = check_in::Entity::update_many()
            .col_expr(check_in::Column::IsOpen, Expr::value(false))
            .filter(check_in::Column::Id.eq(stay.id))
            .filter(check_in::Column::IsOpen.eq(true))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        if closed.rows_affected == 0 {
            return Err(DomainError::AlreadyCheckedOut(stay.id));
        }

        let now = Utc::now();
        let model = check_out::ActiveModel {
            id: NotSet,
            checked_out_by: Set(request.staff_user_id),
            check_in_id: Set(stay.id),
            created_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| match db_err(e) {
            DomainError::ConstraintViolation(msg) if msg.contains("check_in_id") => {
                DomainError::AlreadyCheckedOut(stay.id)
            }
            other => other,
        })?;

        room::Entity::update_many()
            .col_expr(room::Column::Occupied, Expr::value(false))
            .col_expr(room::Column::LastUpdate, Expr::value(now))
            .filter(room::Column::Id.eq(stay.room_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        debug!("Check-in {} closed by check-out {}", stay.id, model.id);
        Ok(check_out_model_to_domain(model))
    }

    async fn find_check_in(&self, id: i32) -> DomainResult<Option<CheckIn>> {
        let model = check_in::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(check_in_model_to_domain))
    }

    async fn list_check_ins(
        &self,
        filter: CheckInFilter,
        page: PageRequest,
    ) -> DomainResult<PaginatedResult<CheckIn>> {
        let mut query = check_in::Entity::find();

        if let Some(open) = filter.open {
            query = query.filter(check_in::Column::IsOpen.eq(open));
        }
        if let Some(room_id) = filter.room_id {
            query = query.filter(check_in::Column::RoomId.eq(room_id));
        }
        query = query.order_by_asc(check_in::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let models = query
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = models.into_iter().map(check_in_model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page.page, page.limit))
    }

    async fn find_check_out(&self, id: i32) -> DomainResult<Option<CheckOut>> {
        let model = check_out::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(check_out_model_to_domain))
    }

    async fn list_check_outs(&self, page: PageRequest) -> DomainResult<PaginatedResult<CheckOut>> {
        let query = check_out::Entity::find().order_by_asc(check_out::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let models = query
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = models.into_iter().map(check_out_model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page.page, page.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Occupancy, RepositoryProvider};
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_support::{
        new_client, new_room, seed_front_desk, setup_test_db,
    };

    fn request(room_id: i32, staff_user_id: i32, client_id: i32) -> CheckInRequest {
        CheckInRequest {
            room_id,
            staff_user_id,
            client_id,
        }
    }

    #[tokio::test]
    async fn check_in_then_check_out_cycles_occupancy() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let desk = seed_front_desk(&repos).await;

        let stay = repos
            .stays()
            .check_in(request(desk.room.id, desk.staff.id, desk.client.id))
            .await
            .unwrap();
        assert!(stay.is_open);
        assert_eq!(stay.hotel_id, desk.hotel.id);
        assert_eq!(stay.checked_in_by, desk.staff.id);

        let room = repos.rooms().get(desk.room.id).await.unwrap();
        assert_eq!(room.occupancy(), Occupancy::Occupied);
        assert!(room.last_update >= desk.room.last_update);

        let out = repos
            .stays()
            .check_out(CheckOutRequest {
                check_in_id: stay.id,
                staff_user_id: desk.staff.id,
            })
            .await
            .unwrap();
        assert_eq!(out.check_in_id, stay.id);
        assert_eq!(out.checked_out_by, desk.staff.id);

        let room = repos.rooms().get(desk.room.id).await.unwrap();
        assert_eq!(room.occupancy(), Occupancy::Vacant);
        let closed = repos.stays().find_check_in(stay.id).await.unwrap().unwrap();
        assert!(!closed.is_open);
        assert_eq!(
            repos.stays().find_check_out(out.id).await.unwrap(),
            Some(out)
        );
    }

    #[tokio::test]
    async fn occupied_room_rejects_second_check_in() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let desk = seed_front_desk(&repos).await;
        let other = repos.clients().create(new_client("Lin")).await.unwrap();

        repos
            .stays()
            .check_in(request(desk.room.id, desk.staff.id, desk.client.id))
            .await
            .unwrap();
        let err = repos
            .stays()
            .check_in(request(desk.room.id, desk.staff.id, other.id))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RoomUnavailable(id) if id == desk.room.id));

        let open = repos
            .stays()
            .list_check_ins(CheckInFilter::open(), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(open.total, 1);
    }

    #[tokio::test]
    async fn client_cannot_hold_two_rooms() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let desk = seed_front_desk(&repos).await;
        let second_room = repos
            .rooms()
            .create(new_room(desk.hotel.id, "A2", 90.0))
            .await
            .unwrap();

        repos
            .stays()
            .check_in(request(desk.room.id, desk.staff.id, desk.client.id))
            .await
            .unwrap();
        let err = repos
            .stays()
            .check_in(request(second_room.id, desk.staff.id, desk.client.id))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "client_already_checked_in");

        let room = repos.rooms().get(second_room.id).await.unwrap();
        assert!(!room.occupied);
    }

    #[tokio::test]
    async fn missing_parties_are_not_found() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let desk = seed_front_desk(&repos).await;

        let err = repos
            .stays()
            .check_in(request(999, desk.staff.id, desk.client.id))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Room", .. }));

        let err = repos
            .stays()
            .check_in(request(desk.room.id, 999, desk.client.id))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "User", .. }));

        let err = repos
            .stays()
            .check_in(request(desk.room.id, desk.staff.id, 999))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Client", .. }));

        let err = repos
            .stays()
            .check_out(CheckOutRequest {
                check_in_id: 999,
                staff_user_id: desk.staff.id,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "CheckIn", .. }));

        let room = repos.rooms().get(desk.room.id).await.unwrap();
        assert!(!room.occupied);
    }

    #[tokio::test]
    async fn double_check_out_is_rejected() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let desk = seed_front_desk(&repos).await;
        let stay = repos
            .stays()
            .check_in(request(desk.room.id, desk.staff.id, desk.client.id))
            .await
            .unwrap();
        let out = CheckOutRequest {
            check_in_id: stay.id,
            staff_user_id: desk.staff.id,
        };

        repos.stays().check_out(out).await.unwrap();
        let err = repos.stays().check_out(out).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyCheckedOut(id) if id == stay.id));

        let outs = repos
            .stays()
            .list_check_outs(PageRequest::default())
            .await
            .unwrap();
        assert_eq!(outs.total, 1);
    }

    #[tokio::test]
    async fn room_can_be_reused_after_check_out() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let desk = seed_front_desk(&repos).await;
        let next_guest = repos.clients().create(new_client("Omar")).await.unwrap();

        let first = repos
            .stays()
            .check_in(request(desk.room.id, desk.staff.id, desk.client.id))
            .await
            .unwrap();
        repos
            .stays()
            .check_out(CheckOutRequest {
                check_in_id: first.id,
                staff_user_id: desk.staff.id,
            })
            .await
            .unwrap();
        repos
            .stays()
            .check_in(request(desk.room.id, desk.staff.id, next_guest.id))
            .await
            .unwrap();

        let history = repos
            .stays()
            .list_check_ins(
                CheckInFilter {
                    open: None,
                    room_id: Some(desk.room.id),
                },
                PageRequest::default(),
            )
            .await
            .unwrap();
        assert_eq!(history.total, 2);
        let open = repos
            .stays()
            .list_check_ins(CheckInFilter::open(), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(open.items.len(), 1);
        assert_eq!(open.items[0].client_id, next_guest.id);
    }

    #[tokio::test]
    async fn history_blocks_deleting_referenced_rows() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let desk = seed_front_desk(&repos).await;
        let stay = repos
            .stays()
            .check_in(request(desk.room.id, desk.staff.id, desk.client.id))
            .await
            .unwrap();
        repos
            .stays()
            .check_out(CheckOutRequest {
                check_in_id: stay.id,
                staff_user_id: desk.staff.id,
            })
            .await
            .unwrap();

        let err = repos.clients().delete(desk.client.id).await.unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));
        let err = repos.users().delete(desk.staff.id).await.unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));
        let err = repos.rooms().delete(desk.room.id).await.unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));
        let err = repos.hotels().delete(desk.hotel.id).await.unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));

        assert!(repos.rooms().find(desk.room.id).await.unwrap().is_some());
        assert!(repos.clients().find(desk.client.id).await.unwrap().is_some());
    }

    /// Writes an open check-in row without touching the room flag.
    async fn insert_open_row(
        repos: &SeaOrmRepositoryProvider,
        room_id: i32,
        hotel_id: i32,
        staff_user_id: i32,
        client_id: i32,
    ) -> Result<check_in::Model, DomainError> {
        check_in::ActiveModel {
            id: NotSet,
            room_id: Set(room_id),
            checked_in_by: Set(staff_user_id),
            client_id: Set(client_id),
            hotel_id: Set(hotel_id),
            is_open: Set(true),
            created_at: Set(Utc::now()),
        }
        .insert(repos.connection())
        .await
        .map_err(db_err)
    }

    #[tokio::test]
    async fn open_room_index_backs_up_stale_flag() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let desk = seed_front_desk(&repos).await;
        let other = repos.clients().create(new_client("Lin")).await.unwrap();

        // Room flag says vacant while an open stay exists
        insert_open_row(&repos, desk.room.id, desk.hotel.id, desk.staff.id, other.id)
            .await
            .unwrap();

        let err = repos
            .stays()
            .check_in(request(desk.room.id, desk.staff.id, desk.client.id))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RoomUnavailable(id) if id == desk.room.id));

        // The room claim rolled back with the failed insert
        let room = repos.rooms().get(desk.room.id).await.unwrap();
        assert!(!room.occupied);
        assert_eq!(room.last_update, desk.room.last_update);
        let open = repos
            .stays()
            .list_check_ins(CheckInFilter::open(), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(open.total, 1);
    }

    #[tokio::test]
    async fn open_client_index_rejects_second_open_row() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let desk = seed_front_desk(&repos).await;
        let second_room = repos
            .rooms()
            .create(new_room(desk.hotel.id, "A2", 90.0))
            .await
            .unwrap();

        insert_open_row(&repos, desk.room.id, desk.hotel.id, desk.staff.id, desk.client.id)
            .await
            .unwrap();
        let err = insert_open_row(
            &repos,
            second_room.id,
            desk.hotel.id,
            desk.staff.id,
            desk.client.id,
        )
        .await
        .unwrap_err();

        let mapped = open_stay_conflict(err, &request(second_room.id, desk.staff.id, desk.client.id));
        assert!(matches!(mapped, DomainError::ClientAlreadyCheckedIn(id) if id == desk.client.id));
    }

    #[test]
    fn unique_index_hits_map_to_occupancy_errors() {
        let req = request(3, 1, 7);

        let room_hit = DomainError::ConstraintViolation(
            "unique constraint failed: UNIQUE constraint failed: check_ins.room_id".into(),
        );
        assert!(matches!(
            open_stay_conflict(room_hit, &req),
            DomainError::RoomUnavailable(3)
        ));

        let client_hit = DomainError::ConstraintViolation(
            "unique constraint failed: UNIQUE constraint failed: check_ins.client_id".into(),
        );
        assert!(matches!(
            open_stay_conflict(client_hit, &req),
            DomainError::ClientAlreadyCheckedIn(7)
        ));

        let fk_hit = DomainError::ConstraintViolation("FOREIGN KEY constraint failed".into());
        assert_eq!(open_stay_conflict(fk_hit, &req).kind(), "constraint_violation");
    }

    #[tokio::test]
    async fn existing_check_out_row_blocks_second_close() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let desk = seed_front_desk(&repos).await;
        let stay = repos
            .stays()
            .check_in(request(desk.room.id, desk.staff.id, desk.client.id))
            .await
            .unwrap();

        // Check-out row written while the stay is still flagged open
        check_out::ActiveModel {
            id: NotSet,
            checked_out_by: Set(desk.staff.id),
            check_in_id: Set(stay.id),
            created_at: Set(Utc::now()),
        }
        .insert(repos.connection())
        .await
        .unwrap();

        let err = repos
            .stays()
            .check_out(CheckOutRequest {
                check_in_id: stay.id,
                staff_user_id: desk.staff.id,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::AlreadyCheckedOut(id) if id == stay.id));

        // Closing the stay rolled back, the room is still taken
        let still_open = repos.stays().find_check_in(stay.id).await.unwrap().unwrap();
        assert!(still_open.is_open);
        assert!(repos.rooms().get(desk.room.id).await.unwrap().occupied);
    }
}
