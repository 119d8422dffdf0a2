//! Listing enums: content categories, seller plans, billing kinds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Declared type of a listing.
///
/// Drives both the platform-fee rate and the upload size/type rules.
/// `Chat`, `Booking`, and `Membership` are service listings with no
/// uploadable file of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    Video,
    Audio,
    DigitalProduct,
    Image,
    Blog,
    Chat,
    Booking,
    Membership,
}

/// All content categories, in display order.
pub const ALL_CATEGORIES: [ContentCategory; 8] = [
    ContentCategory::Video,
    ContentCategory::Audio,
    ContentCategory::DigitalProduct,
    ContentCategory::Image,
    ContentCategory::Blog,
    ContentCategory::Chat,
    ContentCategory::Booking,
    ContentCategory::Membership,
];

impl ContentCategory {
    /// The snake_case wire name, matching the frontend and the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCategory::Video => "video",
            ContentCategory::Audio => "audio",
            ContentCategory::DigitalProduct => "digital_product",
            ContentCategory::Image => "image",
            ContentCategory::Blog => "blog",
            ContentCategory::Chat => "chat",
            ContentCategory::Booking => "booking",
            ContentCategory::Membership => "membership",
        }
    }
}

impl FromStr for ContentCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(ContentCategory::Video),
            "audio" => Ok(ContentCategory::Audio),
            "digital_product" => Ok(ContentCategory::DigitalProduct),
            "image" => Ok(ContentCategory::Image),
            "blog" => Ok(ContentCategory::Blog),
            "chat" => Ok(ContentCategory::Chat),
            "booking" => Ok(ContentCategory::Booking),
            "membership" => Ok(ContentCategory::Membership),
            other => Err(ParseError::UnknownCategory(other.to_string())),
        }
    }
}

/// Seller subscription plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SellerPlan {
    Free,
    Pro,
}

impl SellerPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            SellerPlan::Free => "free",
            SellerPlan::Pro => "pro",
        }
    }
}

impl FromStr for SellerPlan {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(SellerPlan::Free),
            "pro" => Ok(SellerPlan::Pro),
            other => Err(ParseError::UnknownPlan(other.to_string())),
        }
    }
}

/// Whether a listing is bought once or billed on a recurring cycle.
///
/// Determines which minimum-price floor applies at publish time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BillingKind {
    OneTime,
    Subscription,
}
