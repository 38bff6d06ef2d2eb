//! Publication record model.
//!
//! Contains the structure describing one search result and its display helpers.

/// Represents one publication entry in the results catalog.
///
/// Records are compiled into the binary and never change while the
/// application runs, so every text field borrows static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRecord {
    /// Unique record ID
    pub id: u32,
    /// Publication title
    pub title: &'static str,
    /// Authors in display order
    pub authors: &'static [&'static str],
    /// Publication year
    pub year: i32,
    /// Publishing institution
    pub institution: &'static str,
    /// Abstract text
    pub abstract_text: &'static str,
    /// Keywords (order carries no meaning)
    pub keywords: &'static [&'static str],
    /// Citation count
    pub citations: u32,
    /// Match percentage in [0, 100]
    pub relevance: u8,
}

impl ResultRecord {
    /// Format the author list for display.
    ///
    /// # Returns
    /// * `String` - Authors joined by ", " in their original order
    pub fn authors_line(&self) -> String {
        self.authors.join(", ")
    }

    /// Format the relevance badge.
    ///
    /// # Returns
    /// * `String` - e.g. "98% Match"
    pub fn relevance_badge(&self) -> String {
        format!("{}% Match", self.relevance)
    }

    /// Format the citation count.
    ///
    /// # Returns
    /// * `String` - e.g. "45 citations" or "1 citation"
    pub fn citations_label(&self) -> String {
        if self.citations == 1 {
            "1 citation".to_string()
        } else {
            format!("{} citations", self.citations)
        }
    }

    /// Format how long ago the record was published.
    ///
    /// # Arguments
    /// * `current_year` - Year to measure against
    ///
    /// # Returns
    /// * `String` - "this year", "1 year ago", "N years ago" or "upcoming"
    pub fn age_label(&self, current_year: i32) -> String {
        match current_year - self.year {
            age if age < 0 => "upcoming".to_string(),
            0 => "this year".to_string(),
            1 => "1 year ago".to_string(),
            age => format!("{} years ago", age),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(citations: u32, year: i32) -> ResultRecord {
        ResultRecord {
            id: 1,
            title: "Test",
            authors: &["Smith, J.", "Johnson, M."],
            year,
            institution: "Institution",
            abstract_text: "Abstract",
            keywords: &["Keyword"],
            citations,
            relevance: 98,
        }
    }

    #[test]
    fn test_record_authors_line() {
        let record = create_test_record(45, 2023);
        assert_eq!(record.authors_line(), "Smith, J., Johnson, M.");
    }

    #[test]
    fn test_record_labels() {
        let record = create_test_record(45, 2023);
        assert_eq!(record.relevance_badge(), "98% Match");
        assert_eq!(record.citations_label(), "45 citations");
        assert_eq!(create_test_record(1, 2023).citations_label(), "1 citation");
    }

    #[test]
    fn test_record_age_label() {
        let record = create_test_record(0, 2023);
        assert_eq!(record.age_label(2023), "this year");
        assert_eq!(record.age_label(2024), "1 year ago");
        assert_eq!(record.age_label(2026), "3 years ago");
        assert_eq!(record.age_label(2020), "upcoming");
    }
}
