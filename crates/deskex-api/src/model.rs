//! Wire models for the helpdesk API.
//!
//! The list endpoint returns a JSON array of customer objects of which only
//! `id` is consumed. The detail endpoint wraps each customer in a
//! `{ "client": { ... } }` envelope and returns a one-element array.

use serde::Deserialize;

/// One record of the paginated customer list. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerSummary {
    pub id: i64,
}

/// Full per-customer record from the detail endpoint.
///
/// Every field other than `id` may be absent on the wire; absent collections
/// decode as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDetail {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tickets: Vec<i64>,
    #[serde(default)]
    pub emails: Vec<EmailEntry>,
    #[serde(default)]
    pub phones: Vec<PhoneEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailEntry {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhoneEntry {
    pub phone: String,
}

/// Envelope object of the detail endpoint response.
#[derive(Debug, Deserialize)]
pub struct DetailEnvelope {
    pub client: CustomerDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_ignores_extra_fields() {
        let json = r#"{"id": 7, "name": "irrelevant", "tag": null}"#;
        let summary: CustomerSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 7);
    }

    #[test]
    fn detail_defaults_missing_collections() {
        let json = r#"[{"client": {"id": 3}}]"#;
        let envelopes: Vec<DetailEnvelope> = serde_json::from_str(json).unwrap();
        let detail = &envelopes[0].client;
        assert_eq!(detail.id, 3);
        assert!(detail.name.is_empty());
        assert!(detail.tickets.is_empty());
        assert!(detail.emails.is_empty());
        assert!(detail.phones.is_empty());
    }

    #[test]
    fn detail_decodes_nested_entries() {
        let json = r#"[{"client": {
            "id": 1,
            "name": "Ada",
            "tickets": [10, 20],
            "emails": [{"email": "a@x.com"}, {"email": "b@x.com"}],
            "phones": [{"phone": "+100"}]
        }}]"#;
        let envelopes: Vec<DetailEnvelope> = serde_json::from_str(json).unwrap();
        let detail = &envelopes[0].client;
        assert_eq!(detail.tickets, vec![10, 20]);
        assert_eq!(detail.emails[1].email, "b@x.com");
        assert_eq!(detail.phones[0].phone, "+100");
    }
}
