//! Offer status axes.
//!
//! Each axis is stored as TEXT and decoded straight into its enum, so an
//! unexpected value in the database fails loudly at the model boundary.

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! text_status {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> anyhow::Result<Self> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(anyhow!("Invalid {}: {}", stringify!($name), s)),
                }
            }
        }

        impl sqlx::Type<sqlx::Postgres> for $name {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl sqlx::Encode<'_, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut sqlx::postgres::PgArgumentBuffer,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
            }
        }

        impl sqlx::Decode<'_, sqlx::Postgres> for $name {
            fn decode(
                value: sqlx::postgres::PgValueRef<'_>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let text = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
                text.parse::<$name>().map_err(Into::into)
            }
        }
    };
}

text_status! {
    /// Legacy moderation status, still shown to administrators
    LegacyStatus {
        New => "NEW",
        Active => "ACTIVE",
        Suspended => "SUSPENDED",
    }
}

text_status! {
    /// Publication axis: only published offers are listed publicly
    OfferStatus {
        Unpublished => "unpublished",
        Published => "published",
    }
}

text_status! {
    /// Whether the organization still accepts applicants
    RecruitmentStatus {
        Open => "open",
        Closed => "closed",
    }
}

text_status! {
    /// Whether the volunteering action itself has ended
    ActionStatus {
        Ongoing => "ongoing",
        Finished => "finished",
    }
}

impl ActionStatus {
    /// Derive the action status from the offer's end date.
    ///
    /// An offer without an end date is ongoing.
    pub fn from_dates(finished_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        match finished_at {
            Some(end) if end < now => ActionStatus::Finished,
            _ => ActionStatus::Ongoing,
        }
    }
}

impl LegacyStatus {
    /// Human readable label for forms and badges
    pub fn label(&self) -> &'static str {
        match self {
            LegacyStatus::New => "New",
            LegacyStatus::Active => "Active",
            LegacyStatus::Suspended => "Suspended",
        }
    }
}
