use serde::Serialize;

use crate::domain::format::format_address;
use crate::domain::oui::MatchRecord;
use crate::pagination::Paginated;

/// Message shown when the backend reports no matches and gives no reason.
pub const NO_DATA_MESSAGE: &str = "No data available";

/// One match shaped for the results list.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DisplayRecord {
    pub registry: String,
    pub organization_name: String,
    pub organization_address: String,
    /// Canonical colon-delimited hardware address.
    pub address: String,
}

impl From<MatchRecord> for DisplayRecord {
    fn from(record: MatchRecord) -> Self {
        let address = match format_address(&record.assignment) {
            Ok(address) => address,
            Err(err) => {
                log::warn!(
                    "Displaying assignment {:?} unformatted: {err}",
                    record.assignment
                );
                record.assignment.to_ascii_uppercase()
            }
        };

        Self {
            registry: record.registry,
            organization_name: record.organization_name,
            organization_address: record.organization_address,
            address,
        }
    }
}

/// Everything the results template needs for one page.
#[derive(Serialize)]
pub struct ResultsPageData {
    pub query: String,
    pub results: Paginated<DisplayRecord>,
    /// Total matches across all pages.
    pub total: usize,
    /// Info text shown instead of the list when the page is empty.
    pub message: Option<String>,
    /// Human-readable fetch failure.
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_record_formats_assignment() {
        let record = MatchRecord {
            registry: "MA-L".to_string(),
            assignment: "286fb9".to_string(),
            organization_name: "Nokia Shanghai Bell Co., Ltd.".to_string(),
            organization_address: "Shanghai CN".to_string(),
        };

        let display = DisplayRecord::from(record);
        assert_eq!(display.address, "28:6F:B9:00:00:00");
        assert_eq!(display.registry, "MA-L");
    }

    #[test]
    fn test_display_record_falls_back_to_raw_assignment() {
        let record = MatchRecord {
            assignment: "not-hex!".to_string(),
            ..MatchRecord::default()
        };

        let display = DisplayRecord::from(record);
        assert_eq!(display.address, "NOT-HEX!");
    }
}
