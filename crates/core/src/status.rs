//! Status and priority enums mapping to SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding lookup table (`candidate_statuses`, `task_statuses`,
//! `priorities`). Names are the lowercase strings used in URLs and JSON;
//! ids never leave the server.

use crate::error::CoreError;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Lowercase name used in URLs and response bodies.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Resolve a database status ID.
            pub fn from_id(id: StatusId) -> Result<Self, CoreError> {
                match id {
                    $( $val => Ok($name::$variant), )+
                    other => Err(CoreError::Internal(format!(
                        concat!("Unknown ", stringify!($name), " id {}"),
                        other
                    ))),
                }
            }

            /// Serialize a stored id as its name, for
            /// `#[serde(serialize_with = "...")]` on row fields.
            pub fn serialize_id<S: serde::Serializer>(
                id: &StatusId,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                let value = $name::from_id(*id).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(value.as_str())
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok($name::$variant), )+
                    other => {
                        let names: Vec<&str> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        Err(CoreError::Validation(format!(
                            "Invalid value '{other}'. Must be one of: {}",
                            names.join(", ")
                        )))
                    }
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_status_enum! {
    /// Recruitment status of a candidate.
    CandidateStatus {
        Applied = 1 => "applied",
        Interviewing = 2 => "interviewing",
        Hired = 3 => "hired",
        Rejected = 4 => "rejected",
    }
}

define_status_enum! {
    /// Status shared by tasks, onboarding tasks, HR projects and HR project tasks.
    TaskStatus {
        Pending = 1 => "pending",
        InProgress = 2 => "in_progress",
        Done = 3 => "done",
        Rejected = 4 => "rejected",
    }
}

define_status_enum! {
    /// Priority shared by task-like records.
    Priority {
        Low = 1 => "low",
        Medium = 2 => "medium",
        High = 3 => "high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_status_ids_match_seed_data() {
        assert_eq!(CandidateStatus::Applied.id(), 1);
        assert_eq!(CandidateStatus::Interviewing.id(), 2);
        assert_eq!(CandidateStatus::Hired.id(), 3);
        assert_eq!(CandidateStatus::Rejected.id(), 4);
    }

    #[test]
    fn task_status_ids_match_seed_data() {
        assert_eq!(TaskStatus::Pending.id(), 1);
        assert_eq!(TaskStatus::InProgress.id(), 2);
        assert_eq!(TaskStatus::Done.id(), 3);
        assert_eq!(TaskStatus::Rejected.id(), 4);
    }

    #[test]
    fn priority_ids_match_seed_data() {
        assert_eq!(Priority::Low.id(), 1);
        assert_eq!(Priority::Medium.id(), 2);
        assert_eq!(Priority::High.id(), 3);
    }

    #[test]
    fn status_into_status_id() {
        let id: StatusId = TaskStatus::InProgress.into();
        assert_eq!(id, 2);
    }

    #[test]
    fn from_id_rejects_unknown_values() {
        assert_eq!(TaskStatus::from_id(3).unwrap(), TaskStatus::Done);
        assert!(TaskStatus::from_id(0).is_err());
        assert!(Priority::from_id(4).is_err());
    }

    #[test]
    fn names_parse_and_serialize() {
        assert_eq!("in_progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert!("urgent".parse::<Priority>().is_err());
        assert_eq!(
            serde_json::to_string(&CandidateStatus::Interviewing).unwrap(),
            "\"interviewing\""
        );
        let p: Priority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(p, Priority::High);
    }

    #[test]
    fn stored_ids_serialize_as_names() {
        #[derive(serde::Serialize)]
        struct Row {
            #[serde(rename = "status", serialize_with = "TaskStatus::serialize_id")]
            status_id: StatusId,
            #[serde(rename = "priority", serialize_with = "Priority::serialize_id")]
            priority_id: StatusId,
        }

        let json = serde_json::to_value(Row {
            status_id: TaskStatus::InProgress.id(),
            priority_id: Priority::High.id(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "status": "in_progress", "priority": "high" }));

        let unknown = Row {
            status_id: 9,
            priority_id: 1,
        };
        assert!(serde_json::to_value(unknown).is_err());
    }
}
