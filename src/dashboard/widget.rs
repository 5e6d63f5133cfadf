use chrono::{DateTime, Duration, Utc};
use serde_json::{Map, Value};

use crate::records::{Record, ValidationError};

/// How long a success or error banner stays up
pub const BANNER_TTL: Duration = Duration::seconds(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

impl Banner {
    fn new(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            shown_at: now,
        }
    }

    fn expired(&self, now: DateTime<Utc>) -> bool {
        now - self.shown_at >= BANNER_TTL
    }
}

/// A write produced by submitting the modal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<R> {
    Create(R),
    /// `original_key` is the key of the record the form was opened from
    Update { original_key: String, record: R },
}

impl<R: Record> Submission<R> {
    /// JSON body for the matching proxy route
    pub fn body(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let (record, original_key) = match self {
            Self::Create(record) => (record, None),
            Self::Update {
                original_key,
                record,
            } => (record, Some(original_key)),
        };

        let mut body = match serde_json::to_value(record)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        if let Some(original_key) = original_key {
            body.insert(
                R::RENAME.name.to_string(),
                Value::from(original_key.as_str()),
            );
        }
        Ok(body)
    }
}

/// Case-insensitive substring match over a record's searchable text. A
/// blank query matches everything.
pub fn matches_query<R: Record>(record: &R, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    record
        .search_text()
        .iter()
        .any(|text| text.to_lowercase().contains(&query))
}

/// List, search box and edit modal for one resource.
///
/// Fetching and submitting happen outside; the widget only records the
/// transitions so failed calls never clobber what is on screen.
#[derive(Debug, Clone)]
pub struct ManagementWidget<R> {
    list: Vec<R>,
    filtered: Vec<R>,
    search_query: String,
    selected: Option<R>,
    form: Option<R>,
    modal_open: bool,
    is_loading: bool,
    error: Option<Banner>,
    success: Option<Banner>,
}

impl<R: Record> Default for ManagementWidget<R> {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            filtered: Vec::new(),
            search_query: String::new(),
            selected: None,
            form: None,
            modal_open: false,
            is_loading: false,
            error: None,
            success: None,
        }
    }
}

impl<R: Record> ManagementWidget<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[R] {
        &self.list
    }

    pub fn filtered(&self) -> &[R] {
        &self.filtered
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected(&self) -> Option<&R> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> Option<&R> {
        self.form.as_ref()
    }

    /// Edit the form in place while the modal is open
    pub fn form_mut(&mut self) -> Option<&mut R> {
        self.form.as_mut()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&Banner> {
        self.error.as_ref()
    }

    pub fn success(&self) -> Option<&Banner> {
        self.success.as_ref()
    }

    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
    }

    pub fn populate(&mut self, list: Vec<R>) {
        self.list = list;
        self.is_loading = false;
        self.apply_filter();
    }

    pub fn fetch_failed(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.is_loading = false;
        self.error = Some(Banner::new(message, now));
    }

    pub fn search(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.apply_filter();
    }

    /// Keys for the autocomplete dropdown, hidden until something is typed
    pub fn suggestions(&self, limit: usize) -> Vec<&str> {
        if self.search_query.trim().is_empty() {
            return Vec::new();
        }
        self.filtered.iter().take(limit).map(|r| r.key()).collect()
    }

    /// Open the modal prefilled from the record with `key`. Returns false
    /// when no such record is listed.
    pub fn select(&mut self, key: &str) -> bool {
        let Some(record) = self.list.iter().find(|r| r.key() == key).cloned() else {
            return false;
        };
        self.form = Some(record.clone());
        self.selected = Some(record);
        self.modal_open = true;
        true
    }

    /// Open the modal with a blank form for a new record
    pub fn open_new(&mut self, blank: R) {
        self.selected = None;
        self.form = Some(blank);
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.selected = None;
        self.form = None;
    }

    /// Turn the open form into a write. The form stays open until the
    /// outcome is reported back.
    pub fn submit(&mut self) -> Result<Submission<R>, ValidationError> {
        let record = self
            .form
            .clone()
            .filter(|r| !r.key().trim().is_empty())
            .ok_or(ValidationError::Missing(R::KEY.name))?;

        self.is_loading = true;
        Ok(match &self.selected {
            Some(selected) => Submission::Update {
                original_key: selected.key().to_string(),
                record,
            },
            None => Submission::Create(record),
        })
    }

    /// The write went through; the caller is expected to re-fetch.
    pub fn submit_succeeded(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.is_loading = false;
        self.error = None;
        self.success = Some(Banner::new(message, now));
        self.close_modal();
    }

    pub fn submit_failed(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.is_loading = false;
        self.error = Some(Banner::new(message, now));
    }

    /// Drop banners that have been up for [`BANNER_TTL`]
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.error.as_ref().is_some_and(|b| b.expired(now)) {
            self.error = None;
        }
        if self.success.as_ref().is_some_and(|b| b.expired(now)) {
            self.success = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.error = None;
        self.success = None;
    }

    fn apply_filter(&mut self) {
        self.filtered = self
            .list
            .iter()
            .filter(|r| matches_query(*r, &self.search_query))
            .cloned()
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{GuestRecord, update_payload};

    fn guest(name: &str, email: &str) -> GuestRecord {
        GuestRecord {
            name: name.to_string(),
            email: email.to_string(),
            rsvp: String::new(),
            guest: String::from("1"),
            message: String::new(),
        }
    }

    fn populated() -> ManagementWidget<GuestRecord> {
        let mut widget = ManagementWidget::new();
        widget.begin_fetch();
        assert!(widget.is_loading());
        widget.populate(vec![
            guest("Jane Doe", "jane@example.com"),
            guest("John Smith", "Pending"),
            guest("Janet Reyes", "janet@example.com"),
        ]);
        widget
    }

    #[test]
    fn it_filters_case_insensitively() {
        let mut widget = populated();
        assert!(!widget.is_loading());
        assert_eq!(widget.filtered().len(), 3);

        widget.search("JAN");
        let names: Vec<_> = widget.filtered().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Doe", "Janet Reyes"]);
        assert_eq!(widget.suggestions(1), vec!["Jane Doe"]);

        // Email is searchable too
        widget.search("pending");
        assert_eq!(widget.filtered().len(), 1);

        widget.search("  ");
        assert_eq!(widget.filtered().len(), 3);
        assert!(widget.suggestions(5).is_empty());
    }

    #[test]
    fn it_keeps_the_filter_across_refetches() {
        let mut widget = populated();
        widget.search("smith");
        widget.populate(vec![guest("John Smith", "Pending"), guest("Ann Smith", "Pending")]);
        assert_eq!(widget.filtered().len(), 2);
    }

    #[test]
    fn it_submits_a_rename_as_an_update() {
        let mut widget = populated();
        assert!(widget.select("Jane Doe"));
        assert!(widget.is_modal_open());
        assert_eq!(widget.form().unwrap().email, "jane@example.com");

        let form = widget.form_mut().unwrap();
        form.name = String::from("Jane D.");
        form.rsvp = String::from("Yes");

        let submission = widget.submit().unwrap();
        assert!(widget.is_loading());
        assert_eq!(
            submission,
            Submission::Update {
                original_key: String::from("Jane Doe"),
                record: GuestRecord {
                    name: String::from("Jane D."),
                    rsvp: String::from("Yes"),
                    ..guest("Jane D.", "jane@example.com")
                },
            }
        );

        // The body feeds straight into the update route
        let payload = update_payload::<GuestRecord>(&submission.body().unwrap()).unwrap();
        assert_eq!(payload.original_name.as_deref(), Some("Jane Doe"));
        assert_eq!(payload.record.name, "Jane D.");
    }

    #[test]
    fn it_submits_a_new_record_as_a_create() {
        let mut widget = populated();
        widget.open_new(guest("", ""));
        assert_eq!(widget.submit(), Err(ValidationError::Missing("Name")));

        widget.form_mut().unwrap().name = String::from("New Guest");
        let submission = widget.submit().unwrap();
        assert!(matches!(submission, Submission::Create(ref g) if g.name == "New Guest"));
        assert!(!submission.body().unwrap().contains_key("originalName"));
    }

    #[test]
    fn it_ignores_unknown_selections() {
        let mut widget = populated();
        assert!(!widget.select("Nobody"));
        assert!(!widget.is_modal_open());
    }

    #[test]
    fn it_leaves_state_intact_on_failure() {
        let now = Utc::now();
        let mut widget = populated();
        widget.select("John Smith");
        widget.submit().unwrap();
        widget.submit_failed("Failed to update guest", now);

        assert!(!widget.is_loading());
        assert!(widget.is_modal_open());
        assert_eq!(widget.list().len(), 3);
        assert_eq!(widget.form().unwrap().name, "John Smith");
        assert_eq!(widget.error().unwrap().message, "Failed to update guest");

        widget.fetch_failed("Failed to fetch guests", now);
        assert_eq!(widget.list().len(), 3);
    }

    #[test]
    fn it_auto_dismisses_banners() {
        let now = Utc::now();
        let mut widget = populated();
        widget.select("John Smith");
        widget.submit().unwrap();
        widget.submit_succeeded("Guest updated", now);

        assert!(!widget.is_modal_open());
        assert!(widget.selected().is_none());

        widget.tick(now + Duration::seconds(1));
        assert!(widget.success().is_some());

        widget.tick(now + BANNER_TTL);
        assert!(widget.success().is_none());
    }

    #[test]
    fn it_dismisses_banners_manually() {
        let now = Utc::now();
        let mut widget = populated();
        widget.fetch_failed("Failed to fetch guests", now);
        widget.dismiss();
        assert!(widget.error().is_none());
    }
}
