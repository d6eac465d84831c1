use serde::Serialize;

use super::enums::ConsultationType;
use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doctor {
    pub id: u32,
    pub name: &'static str,
    pub specialty: &'static str,
    /// 0.0 to 5.0
    pub rating: f32,
    pub consultation: ConsultationType,
    pub fee: Money,
}
