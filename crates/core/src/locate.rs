//! Header-row column location for the spreadsheet path.
//!
//! Each target field is matched to a column index by case-insensitive
//! substring search over the header cells, left to right, first match wins.
//! Missing headers resolve to `None` and are handled downstream by
//! positional fallback.

/// Resolved column indices for the five record fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub client: Option<usize>,
    pub module: Option<usize>,
    pub description: Option<usize>,
    pub deployment_status: Option<usize>,
    pub delivery_date: Option<usize>,
}

impl ColumnMap {
    /// Locate the five target fields in a header row.
    ///
    /// Keyword sets per field:
    /// client → "client"; module → "module"; description → "description"
    /// or "task"; status → "status" or "deployment"; date → "date" or
    /// "delivery".
    pub fn locate<S: AsRef<str>>(headers: &[S]) -> Self {
        let lowered: Vec<String> = headers
            .iter()
            .map(|h| h.as_ref().to_lowercase())
            .collect();

        let find = |keywords: &[&str]| {
            lowered
                .iter()
                .position(|header| keywords.iter().any(|k| header.contains(k)))
        };

        Self {
            client: find(&["client"]),
            module: find(&["module"]),
            description: find(&["description", "task"]),
            deployment_status: find(&["status", "deployment"]),
            delivery_date: find(&["date", "delivery"]),
        }
    }

    /// True when no target field matched any header.
    pub fn is_unmapped(&self) -> bool {
        self.client.is_none()
            && self.module.is_none()
            && self.description.is_none()
            && self.deployment_status.is_none()
            && self.delivery_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_exact_headers() {
        let headers = ["Client", "Module", "Task", "Status", "Date"];
        let map = ColumnMap::locate(&headers);

        assert_eq!(map.client, Some(0));
        assert_eq!(map.module, Some(1));
        assert_eq!(map.description, Some(2));
        assert_eq!(map.deployment_status, Some(3));
        assert_eq!(map.delivery_date, Some(4));
    }

    #[test]
    fn test_locate_fuzzy_headers() {
        // Substring match on lower-cased text, per header cell.
        let headers = [
            "Client Name",
            "Mod",
            "Task Desc",
            "Dep. Status",
            "Delivery Date",
        ];
        let map = ColumnMap::locate(&headers);

        assert_eq!(map.client, Some(0));
        assert_eq!(map.module, None); // "Mod" does not contain "module"
        assert_eq!(map.description, Some(2));
        assert_eq!(map.deployment_status, Some(3));
        assert_eq!(map.delivery_date, Some(4));
    }

    #[test]
    fn test_locate_is_case_insensitive() {
        let headers = ["CLIENT", "MODULE", "DESCRIPTION", "DEPLOYMENT", "DELIVERY"];
        let map = ColumnMap::locate(&headers);

        assert_eq!(map.client, Some(0));
        assert_eq!(map.module, Some(1));
        assert_eq!(map.description, Some(2));
        assert_eq!(map.deployment_status, Some(3));
        assert_eq!(map.delivery_date, Some(4));
    }

    #[test]
    fn test_locate_first_match_wins() {
        // "Delivery Status" matches the status keywords before the real
        // status column; first match is kept.
        let headers = ["Status A", "Status B"];
        let map = ColumnMap::locate(&headers);

        assert_eq!(map.deployment_status, Some(0));
    }

    #[test]
    fn test_locate_no_match() {
        let headers = ["One", "Two", "Three"];
        let map = ColumnMap::locate(&headers);

        assert!(map.is_unmapped());
    }

    #[test]
    fn test_locate_empty_headers() {
        let headers: [&str; 0] = [];
        assert!(ColumnMap::locate(&headers).is_unmapped());
    }
}
