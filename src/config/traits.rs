use crate::error::PixgeneError;
use serde::{de::DeserializeOwned, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + DeserializeOwned + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), PixgeneError>;
}
