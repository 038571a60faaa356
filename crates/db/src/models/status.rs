//! Status helper enums mapping to SMALLSERIAL/SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding `*_statuses` database table. Project and stage
//! statuses are the canonical `lingkod_core` enums because the transition
//! engine operates on them; the enums here cover the office workflows
//! (complaints, document requests) that have no transition rules.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Look up a variant by its database status ID.
            pub fn from_id(id: StatusId) -> Option<Self> {
                match id {
                    $( $val => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Complaint handling status.
    ComplaintStatus {
        Pending = 1,
        InProgress = 2,
        Resolved = 3,
        Dismissed = 4,
    }
}

define_status_enum! {
    /// Document request fulfilment status.
    DocumentRequestStatus {
        Pending = 1,
        Processing = 2,
        ReadyForPickup = 3,
        Released = 4,
        Rejected = 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complaint_status_ids_match_seed_data() {
        assert_eq!(ComplaintStatus::Pending.id(), 1);
        assert_eq!(ComplaintStatus::InProgress.id(), 2);
        assert_eq!(ComplaintStatus::Resolved.id(), 3);
        assert_eq!(ComplaintStatus::Dismissed.id(), 4);
    }

    #[test]
    fn document_request_status_ids_match_seed_data() {
        assert_eq!(DocumentRequestStatus::Pending.id(), 1);
        assert_eq!(DocumentRequestStatus::Processing.id(), 2);
        assert_eq!(DocumentRequestStatus::ReadyForPickup.id(), 3);
        assert_eq!(DocumentRequestStatus::Released.id(), 4);
        assert_eq!(DocumentRequestStatus::Rejected.id(), 5);
    }

    #[test]
    fn from_id_rejects_unknown_ids() {
        assert_eq!(ComplaintStatus::from_id(3), Some(ComplaintStatus::Resolved));
        assert_eq!(ComplaintStatus::from_id(9), None);
        assert_eq!(DocumentRequestStatus::from_id(0), None);
    }

    #[test]
    fn status_into_status_id() {
        let id: StatusId = ComplaintStatus::Pending.into();
        assert_eq!(id, 1);
    }
}
