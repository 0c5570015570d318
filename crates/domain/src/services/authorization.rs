//! Authorization predicates.
//!
//! The ownership chain (common area -> condo -> admins) is resolved once by
//! the caller; every operation that needs "is admin of the condo owning X"
//! goes through these predicates instead of re-deriving the chain inline.

use uuid::Uuid;

/// Whether `user_id` administers the condo with the given admin set.
pub fn is_condo_admin(user_id: Uuid, admin_ids: &[Uuid]) -> bool {
    admin_ids.contains(&user_id)
}

/// Whether `requester` may cancel or otherwise manage a reservation: the
/// owning user, or an admin of the condo owning the reserved area.
pub fn can_manage_reservation(
    requester: Uuid,
    reservation_owner: Uuid,
    condo_admin_ids: &[Uuid],
) -> bool {
    requester == reservation_owner || is_condo_admin(requester, condo_admin_ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_condo_admin() {
        let admin = Uuid::new_v4();
        let other = Uuid::new_v4();
        let admins = vec![admin];

        assert!(is_condo_admin(admin, &admins));
        assert!(!is_condo_admin(other, &admins));
        assert!(!is_condo_admin(admin, &[]));
    }

    #[test]
    fn test_owner_can_manage_own_reservation() {
        let owner = Uuid::new_v4();
        assert!(can_manage_reservation(owner, owner, &[]));
    }

    #[test]
    fn test_admin_can_manage_any_reservation() {
        let owner = Uuid::new_v4();
        let admin = Uuid::new_v4();
        assert!(can_manage_reservation(admin, owner, &[admin]));
    }

    #[test]
    fn test_stranger_cannot_manage() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let admin = Uuid::new_v4();
        assert!(!can_manage_reservation(stranger, owner, &[admin]));
    }
}
