//! Registration fees

use serde::Serialize;

use crate::registration::RegistrantType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fee {
    pub registrant_type: RegistrantType,
    pub amount_inr: u32,
    pub display: &'static str,
}

/// Covers all events, workshops, lunch and the event kit
pub const FEES: &[Fee] = &[
    Fee {
        registrant_type: RegistrantType::Student,
        amount_inr: 500,
        display: "₹500",
    },
    Fee {
        registrant_type: RegistrantType::Professional,
        amount_inr: 1_000,
        display: "₹1,000",
    },
];

pub fn fee_for(registrant_type: RegistrantType) -> &'static Fee {
    match registrant_type {
        RegistrantType::Student => &FEES[0],
        RegistrantType::Professional => &FEES[1],
    }
}
