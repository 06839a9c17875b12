// src/services/client_directory.rs
use std::sync::Arc;

use crate::message::{ClientQuery, ClientRecord, ClientStatus};

/// Read-only client list served to the CRM view.
#[derive(Debug, Clone)]
pub struct ClientDirectory {
    clients: Arc<[ClientRecord]>,
}

impl ClientDirectory {
    pub fn new(clients: Vec<ClientRecord>) -> Self {
        Self { clients: clients.into() }
    }

    /// The demo clients the dashboard ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            ClientRecord {
                id: "1".into(),
                name: "Sarah Johnson".into(),
                phone: "(555) 123-4567".into(),
                email: "sarah.j@email.com".into(),
                city: "New York".into(),
                tags: vec!["Anxiety".into(), "CBT".into()],
                status: ClientStatus::Active,
                notes: "Making great progress with anxiety management techniques.".into(),
                last_contact: "2024-01-15".into(),
            },
            ClientRecord {
                id: "2".into(),
                name: "Mike Chen".into(),
                phone: "(555) 234-5678".into(),
                email: "mike.chen@email.com".into(),
                city: "Los Angeles".into(),
                tags: vec!["Depression".into(), "EMDR".into()],
                status: ClientStatus::FollowUp,
                notes: "Missed last appointment, needs follow-up call.".into(),
                last_contact: "2024-01-10".into(),
            },
        ])
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Clients matching every filter present in `query`.
    pub fn list(&self, query: &ClientQuery) -> Vec<ClientRecord> {
        let status = non_blank(&query.status);
        let tag = non_blank(&query.tag);
        let search = non_blank(&query.search).map(str::to_lowercase);

        self.clients
            .iter()
            .filter(|c| status.is_none_or(|s| c.status.label().eq_ignore_ascii_case(s)))
            .filter(|c| tag.is_none_or(|t| c.tags.iter().any(|ct| ct.eq_ignore_ascii_case(t))))
            .filter(|c| search.as_deref().is_none_or(|needle| matches_search(c, needle)))
            .cloned()
            .collect()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn matches_search(client: &ClientRecord, needle: &str) -> bool {
    [&client.name, &client.email, &client.phone, &client.city]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
