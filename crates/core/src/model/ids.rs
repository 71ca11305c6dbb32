use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(u64);

        impl $name {
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the underlying u64 value
            #[must_use]
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

catalog_id!(
    /// Identifier of a language offered for assessment
    LanguageId
);
catalog_id!(
    /// Identifier of a skill focus area
    FocusAreaId
);
catalog_id!(
    /// Identifier of an interviewer
    InterviewerId
);
catalog_id!(
    /// Identifier of a bookable time slot
    SlotId
);
catalog_id!(
    /// Identifier of a personality framework
    FrameworkId
);
catalog_id!(
    /// Identifier of a personality assessment type
    AssessmentTypeId
);
catalog_id!(
    /// Identifier of a canned report
    ReportId
);
catalog_id!(TipId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_includes_type_name() {
        assert_eq!(format!("{:?}", InterviewerId::new(7)), "InterviewerId(7)");
        assert_eq!(LanguageId::new(3).to_string(), "3");
    }

    #[test]
    fn ids_deserialize_from_plain_numbers() {
        let id: SlotId = serde_json::from_str("42").unwrap();
        assert_eq!(id.value(), 42);
    }
}
