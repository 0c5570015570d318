//! Domain model definitions.

pub mod common_area;
pub mod condo;
pub mod condo_unit;
pub mod notification;
pub mod quota;
pub mod reservation;
pub mod user;

pub use common_area::{
    CommonArea, CommonAreaType, CommonAreaWithAvailability, CreateCommonAreaRequest, DaySchedule,
    UpdateCommonAreaRequest, WeeklySchedule,
};
pub use condo::{Condo, CreateCondoRequest, CreateCondoResponse};
pub use condo_unit::{
    ApproveUnitRequestResponse, CondoUnit, CreateUnitRequestRequest, ResidentRole, UnitRequest,
    UnitRequestStatus,
};
pub use notification::{
    ListNotificationsQuery, ListNotificationsResponse, NewNotification, Notification,
    NotificationType, UnreadCountResponse,
};
pub use quota::{SetQuotaRequest, UnitReservationQuota};
pub use reservation::{
    CreateReservationRequest, CreateReservationResponse, ListReservationsQuery,
    ListReservationsResponse, PaymentStatus, Reservation, ReservationItem, ReservationStatus,
};
pub use user::User;
