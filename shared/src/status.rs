use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ServiceError;

/// Status of a single menu-item line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailStatus {
    #[default]
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "ON_DELIVERY")]
    OnDelivery,
    #[serde(rename = "COMPLETED")]
    Completed,
}

impl DetailStatus {
    pub const ALLOWED: [&'static str; 3] = ["PENDING", "ON_DELIVERY", "COMPLETED"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::OnDelivery => "ON_DELIVERY",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for DetailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailStatus {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "ON_DELIVERY" => Ok(Self::OnDelivery),
            "COMPLETED" => Ok(Self::Completed),
            other => Err(ServiceError::InvalidArgument(format!(
                "status must be one of {:?}, got '{}'",
                Self::ALLOWED,
                other
            ))),
        }
    }
}

/// Status of a bundled menu-package line. Packages have one extra state
/// over details: PACKED.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageStatus {
    #[default]
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "ON_DELIVERY")]
    OnDelivery,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "PACKED")]
    Packed,
}

impl PackageStatus {
    pub const ALLOWED: [&'static str; 4] = ["PENDING", "ON_DELIVERY", "COMPLETED", "PACKED"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::OnDelivery => "ON_DELIVERY",
            Self::Completed => "COMPLETED",
            Self::Packed => "PACKED",
        }
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageStatus {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "ON_DELIVERY" => Ok(Self::OnDelivery),
            "COMPLETED" => Ok(Self::Completed),
            "PACKED" => Ok(Self::Packed),
            other => Err(ServiceError::InvalidArgument(format!(
                "status must be one of {:?}, got '{}'",
                Self::ALLOWED,
                other
            ))),
        }
    }
}

/// Classification of a top-level order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    #[default]
    #[serde(rename = "DINE_IN")]
    DineIn,
    #[serde(rename = "TAKEAWAY")]
    Takeaway,
    #[serde(rename = "DELIVERY")]
    Delivery,
}

impl OrderType {
    pub const ALLOWED: [&'static str; 3] = ["DINE_IN", "TAKEAWAY", "DELIVERY"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DineIn => "DINE_IN",
            Self::Takeaway => "TAKEAWAY",
            Self::Delivery => "DELIVERY",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DINE_IN" => Ok(Self::DineIn),
            "TAKEAWAY" => Ok(Self::Takeaway),
            "DELIVERY" => Ok(Self::Delivery),
            other => Err(ServiceError::InvalidArgument(format!(
                "order type must be one of {:?}, got '{}'",
                Self::ALLOWED,
                other
            ))),
        }
    }
}
