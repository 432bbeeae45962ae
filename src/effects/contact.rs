//! Contact form forwarding to the hosted form collector.

use url::form_urlencoded;

pub const FORM_ENDPOINT: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSdtMiO6hY7KrZuU-hb0NvW9_XP9j2NTX7J1KNR_Bqad103H3Q/formResponse";
pub const RESTORE_DELAY_MS: u32 = 2_000;
pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "Message Sent! ✓";
pub const ERROR_LABEL: &str = "Error - Try Again";

/// Form field name paired with the collector's entry key, in submission order.
pub const FIELD_KEYS: [(&str, &str); 4] = [
    ("name", "entry.954099316"),
    ("email", "entry.1392803094"),
    ("project", "entry.1742873809"),
    ("message", "entry.1601031012"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub project: String,
    pub message: String,
}

impl ContactFields {
    /// Builds the fields from a lookup by form field name; missing fields become empty.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut value = |name: &str| lookup(name).unwrap_or_default();
        Self {
            name: value("name"),
            email: value("email"),
            project: value("project"),
            message: value("message"),
        }
    }

    fn values(&self) -> [&str; 4] {
        [&self.name, &self.email, &self.project, &self.message]
    }

    /// `application/x-www-form-urlencoded` body with the collector's entry keys.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for ((_, key), value) in FIELD_KEYS.iter().zip(self.values()) {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

impl SubmitOutcome {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sent => SENT_LABEL,
            Self::Failed => ERROR_LABEL,
        }
    }

    pub fn resets_form(self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Submit button lifecycle: label and disabled state from submission until the restore delay elapses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    original_label: String,
    label: String,
    disabled: bool,
    outcome: Option<SubmitOutcome>,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            original_label: label.clone(),
            label,
            disabled: false,
            outcome: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Starts a submission; returns `false` while a previous one is still in flight.
    pub fn submit(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.label = SENDING_LABEL.to_string();
        self.disabled = true;
        true
    }

    pub fn settle(&mut self, outcome: SubmitOutcome) {
        self.label = outcome.label().to_string();
        self.outcome = Some(outcome);
    }

    /// Runs [`RESTORE_DELAY_MS`] after settling; returns whether the form should be cleared.
    pub fn restore(&mut self) -> bool {
        self.label.clone_from(&self.original_label);
        self.disabled = false;
        self.outcome.take().is_some_and(SubmitOutcome::resets_form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactFields {
        ContactFields {
            name: "A".into(),
            email: "b@x.com".into(),
            project: "Web".into(),
            message: "Hi".into(),
        }
    }

    #[test]
    fn payload_maps_fields_to_entry_keys_in_order() {
        assert_eq!(
            sample().encode(),
            "entry.954099316=A&entry.1392803094=b%40x.com&entry.1742873809=Web&entry.1601031012=Hi"
        );
    }

    #[test]
    fn payload_contains_exactly_four_keys() {
        let encoded = sample().encode();
        let keys: Vec<String> = form_urlencoded::parse(encoded.as_bytes())
            .map(|(key, _)| key.into_owned())
            .collect();
        let expected: Vec<&str> = FIELD_KEYS.iter().map(|(_, key)| *key).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn payload_escapes_spaces_and_newlines() {
        let fields = ContactFields {
            message: "hello there\nbye & thanks".into(),
            ..ContactFields::default()
        };
        let encoded = fields.encode();
        assert!(encoded.ends_with("entry.1601031012=hello+there%0Abye+%26+thanks"));
        assert!(encoded.starts_with("entry.954099316=&"));
    }

    #[test]
    fn lookup_fills_missing_fields_with_empty() {
        let fields = ContactFields::from_lookup(|name| (name == "email").then(|| "me@x.com".to_string()));
        assert_eq!(fields.email, "me@x.com");
        assert!(fields.name.is_empty() && fields.message.is_empty());
    }

    #[test]
    fn outcome_labels_and_reset() {
        assert_eq!(SubmitOutcome::Failed.label(), "Error - Try Again");
        assert!(!SubmitOutcome::Failed.resets_form());
        assert!(SubmitOutcome::Sent.resets_form());
    }

    #[test]
    fn successful_submit_restores_label_and_resets_form() {
        let mut button = SubmitButton::new("Send Message");
        assert!(button.submit());
        assert_eq!(button.label(), "Sending...");
        assert!(button.is_disabled());

        button.settle(SubmitOutcome::Sent);
        assert_eq!(button.label(), "Message Sent! ✓");
        assert!(button.is_disabled());

        assert!(button.restore());
        assert_eq!(button.label(), "Send Message");
        assert!(!button.is_disabled());
    }

    #[test]
    fn failed_submit_restores_label_without_reset() {
        let mut button = SubmitButton::new("Send Message");
        button.submit();
        button.settle(SubmitOutcome::Failed);
        assert_eq!(button.label(), "Error - Try Again");

        assert!(!button.restore());
        assert_eq!(button, SubmitButton::new("Send Message"));
    }

    #[test]
    fn submit_is_ignored_while_in_flight() {
        let mut button = SubmitButton::new("Send");
        assert!(button.submit());
        assert!(!button.submit());
        button.settle(SubmitOutcome::Sent);
        assert!(!button.submit());
        button.restore();
        assert!(button.submit());
    }

    #[test]
    fn label_comes_back_after_two_seconds() {
        assert_eq!(RESTORE_DELAY_MS, 2_000);
    }
}
