use serde::{Deserialize, Serialize};

use crate::{Amount, BlockHeight};

/// Accrued waste for one account.
///
/// Field names serialize in kebab-case (`total-waste`, `last-update`) to match
/// the record shape callers read through the contract surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WasteRecord {
    pub total_waste: Amount,
    pub last_update: BlockHeight,
}

impl WasteRecord {
    pub const ZERO: WasteRecord = WasteRecord {
        total_waste: 0,
        last_update: BlockHeight::GENESIS,
    };
}

/// Verified recycling credit for one account. Monotonically non-decreasing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RecyclingRecord {
    pub total_recycled: Amount,
    pub last_verification: BlockHeight,
}

impl RecyclingRecord {
    pub const ZERO: RecyclingRecord = RecyclingRecord {
        total_recycled: 0,
        last_verification: BlockHeight::GENESIS,
    };
}
