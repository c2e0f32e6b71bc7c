use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue::NotSet, Set};

use super::record_repository::EntityMapping;
use crate::domain::{DomainResult, Hotel, HotelChanges, NewHotel};
use crate::infrastructure::database::entities::{decode_list, encode_list, hotel};

impl EntityMapping for Hotel {
    type Entity = hotel::Entity;
    type ActiveModel = hotel::ActiveModel;

    fn id_column() -> hotel::Column {
        hotel::Column::Id
    }

    fn from_model(model: hotel::Model) -> Self {
        Hotel {
            id: model.id,
            name: model.name,
            phone_num: model.phone_num,
            address: model.address,
            email: model.email,
            website: model.website,
            room_prefixes: decode_list(&model.room_prefixes),
            created_at: model.created_at,
        }
    }

    fn draft_into_active(draft: NewHotel, now: DateTime<Utc>) -> DomainResult<hotel::ActiveModel> {
        Ok(hotel::ActiveModel {
            id: NotSet,
            name: Set(draft.name),
            phone_num: Set(draft.phone_num),
            address: Set(draft.address),
            email: Set(draft.email),
            website: Set(draft.website),
            room_prefixes: Set(encode_list(&draft.room_prefixes)?),
            created_at: Set(now),
        })
    }

    fn apply_changes(active: &mut hotel::ActiveModel, changes: HotelChanges) -> DomainResult<()> {
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(phone_num) = changes.phone_num {
            active.phone_num = Set(Some(phone_num));
        }
        if let Some(address) = changes.address {
            active.address = Set(Some(address));
        }
        if let Some(email) = changes.email {
            active.email = Set(Some(email));
        }
        if let Some(website) = changes.website {
            active.website = Set(Some(website));
        }
        if let Some(room_prefixes) = changes.room_prefixes {
            active.room_prefixes = Set(encode_list(&room_prefixes)?);
        }
        Ok(())
    }
}
