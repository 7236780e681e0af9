use crate::error::FnolError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossType {
    Fire,
    Water,
    Hail,
    Wind,
    Theft,
}

impl LossType {
    pub const ALL: [LossType; 5] = [
        LossType::Fire,
        LossType::Water,
        LossType::Hail,
        LossType::Wind,
        LossType::Theft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LossType::Fire => "Fire",
            LossType::Water => "Water",
            LossType::Hail => "Hail",
            LossType::Wind => "Wind",
            LossType::Theft => "Theft",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, FnolError> {
        match s.trim().to_lowercase().as_str() {
            "fire" => Ok(LossType::Fire),
            "water" => Ok(LossType::Water),
            "hail" => Ok(LossType::Hail),
            "wind" => Ok(LossType::Wind),
            "theft" => Ok(LossType::Theft),
            _ => Err(FnolError::InvalidArguments(format!(
                "Unsupported loss type '{}'. Expected one of: Fire, Water, Hail, Wind, Theft",
                s
            ))),
        }
    }
}

impl fmt::Display for LossType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw image bytes as supplied by the claimant. Nothing about the content is
/// trusted until the analyzer decodes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimImage {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ClaimImage {
    pub fn new<S: Into<String>>(name: S, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimInput {
    pub description: String,
    pub loss_type: LossType,
    pub images: Vec<ClaimImage>,
}

impl ClaimInput {
    pub fn new<S: Into<String>>(description: S, loss_type: LossType) -> Self {
        Self {
            description: description.into(),
            loss_type,
            images: Vec::new(),
        }
    }

    pub fn with_images(mut self, images: Vec<ClaimImage>) -> Self {
        self.images = images;
        self
    }
}

/// Everything the claimant enters on the intake form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimForm {
    pub policy_number: String,
    pub state: String,
    pub loss_date: NaiveDate,
    pub loss_type: Option<LossType>,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub images: Vec<ClaimImage>,
}

impl ClaimForm {
    /// Builds the analyzer input. Returns `None` until a loss type is chosen.
    pub fn to_claim_input(&self) -> Option<ClaimInput> {
        let loss_type = self.loss_type?;
        Some(ClaimInput::new(self.description.clone(), loss_type).with_images(self.images.clone()))
    }
}
