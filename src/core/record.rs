use std::time::Duration;

/// A DNS record as seen by callers, independent of any provider's wire format.
///
/// `id` is empty until the provider has created the record. Before that, `name`
/// and `record_type` are what identify it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Record {
    pub id: String,
    /// Host label relative to the zone, `"@"` for the apex.
    pub name: String,
    pub record_type: String,
    pub value: String,
    pub ttl: Duration,
    pub priority: Option<u32>,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        value: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            record_type: record_type.into(),
            value: value.into(),
            ttl,
            priority: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_no_id() {
        let rec = Record::new("www", "A", "1.2.3.4", Duration::from_secs(300));
        assert!(!rec.has_id());
        assert_eq!(rec.priority, None);
    }

    #[test]
    fn test_with_id_and_priority() {
        let rec = Record::new("@", "MX", "mail.example.com", Duration::from_secs(600))
            .with_id("12345")
            .with_priority(10);
        assert!(rec.has_id());
        assert_eq!(rec.id, "12345");
        assert_eq!(rec.priority, Some(10));
    }
}
