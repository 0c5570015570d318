//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod common_area;
pub mod condo;
pub mod condo_unit;
pub mod notification;
pub mod quota;
pub mod reservation;
pub mod user;

pub use common_area::{CommonAreaEntity, CommonAreaTypeDb};
pub use condo::CondoEntity;
pub use condo_unit::{CondoUnitEntity, ResidentRoleDb, UnitRequestEntity, UnitRequestStatusDb};
pub use notification::{NotificationEntity, NotificationTypeDb};
pub use quota::UnitReservationQuotaEntity;
pub use reservation::{
    PaymentStatusDb, ReservationEntity, ReservationStatusDb, ReservationWithAreaEntity,
};
pub use user::UserEntity;
