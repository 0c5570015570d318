//! Repository implementations.

pub mod common_area;
pub mod condo;
pub mod condo_unit;
pub mod notification;
pub mod quota;
pub mod reservation;
pub mod user;

pub use common_area::CommonAreaRepository;
pub use condo::{CondoRepository, NewCondoRow};
pub use condo_unit::{CondoUnitRepository, UnitRequestRepository};
pub use notification::NotificationRepository;
pub use quota::QuotaRepository;
pub use reservation::{NewReservationRow, ReservationRepository};
pub use user::UserRepository;
