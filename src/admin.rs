//! Declarative configuration of the built-in admin pages.
//!
//! A [`ModelAdmin`] describes how the records of one model are listed: which
//! columns are shown, which fields offer filters, which fields the search box
//! looks at and how rows are ordered. An [`AdminSite`] maps model names to
//! their configuration; the admin services turn that configuration into
//! repository queries.

use pushkind_common::pagination::DEFAULT_ITEMS_PER_PAGE;

use crate::domain::content::Content;
use crate::domain::playlist::Playlist;

/// Pseudo column rendering the record label.
pub const LABEL_COLUMN: &str = "__str__";

/// Admin model name of content records.
pub const CONTENT_MODEL: &str = "content";
/// Admin model name of playlist records.
pub const PLAYLIST_MODEL: &str = "playlist";

/// Listing configuration of a model in the admin pages.
pub trait ModelAdmin: Send + Sync {
    /// Name used in admin URLs.
    fn model_name(&self) -> &'static str;

    /// Columns shown in the changelist.
    fn list_display(&self) -> &'static [&'static str] {
        &[LABEL_COLUMN]
    }

    /// Fields that get a filter control.
    fn list_filter(&self) -> &'static [&'static str] {
        &[]
    }

    /// Fields the search box is matched against. Empty disables search.
    fn search_fields(&self) -> &'static [&'static str] {
        &[]
    }

    /// Ordering terms; a leading `-` sorts descending.
    fn ordering(&self) -> &'static [&'static str] {
        &["-id"]
    }

    /// Rows shown per changelist page.
    fn list_per_page(&self) -> usize {
        DEFAULT_ITEMS_PER_PAGE
    }

    /// Whether `field` has a filter control.
    fn has_filter(&self, field: &str) -> bool {
        self.list_filter().contains(&field)
    }
}

/// Admin configuration for content records.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentAdmin;

impl ModelAdmin for ContentAdmin {
    fn model_name(&self) -> &'static str {
        CONTENT_MODEL
    }

    fn list_display(&self) -> &'static [&'static str] {
        &[
            "title",
            "file_url",
            "content_type",
            "is_public",
            "upload_date",
        ]
    }

    fn list_filter(&self) -> &'static [&'static str] {
        &["content_type", "is_public"]
    }

    fn search_fields(&self) -> &'static [&'static str] {
        &["title", "description"]
    }

    fn ordering(&self) -> &'static [&'static str] {
        &["-upload_date"]
    }
}

/// Admin configuration that keeps every default.
#[derive(Debug, Clone, Copy)]
pub struct DefaultModelAdmin {
    model_name: &'static str,
}

impl DefaultModelAdmin {
    pub fn new(model_name: &'static str) -> Self {
        Self { model_name }
    }
}

impl ModelAdmin for DefaultModelAdmin {
    fn model_name(&self) -> &'static str {
        self.model_name
    }
}

/// Registry of the models exposed in the admin pages.
#[derive(Default)]
pub struct AdminSite {
    models: Vec<Box<dyn ModelAdmin>>,
}

impl AdminSite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `admin`, replacing any earlier registration of the same model.
    pub fn register(&mut self, admin: impl ModelAdmin + 'static) {
        self.models
            .retain(|registered| registered.model_name() != admin.model_name());
        self.models.push(Box::new(admin));
    }

    /// Configuration registered for `model_name`.
    pub fn get(&self, model_name: &str) -> Option<&dyn ModelAdmin> {
        self.models
            .iter()
            .find(|admin| admin.model_name() == model_name)
            .map(|admin| admin.as_ref())
    }

    /// Registered model names in registration order.
    pub fn model_names(&self) -> Vec<&'static str> {
        self.models.iter().map(|admin| admin.model_name()).collect()
    }
}

/// Admin site with the streaming models registered.
pub fn streaming_admin_site() -> AdminSite {
    let mut site = AdminSite::new();
    site.register(ContentAdmin);
    site.register(DefaultModelAdmin::new(PLAYLIST_MODEL));
    site
}

/// Record that can be rendered as a changelist row.
pub trait AdminRow {
    fn id(&self) -> i32;

    /// Text shown in the label column.
    fn label(&self) -> String;

    /// Text shown for a named column, `None` for unknown columns.
    fn column(&self, field: &str) -> Option<String>;

    /// Cells for every column in `admin.list_display()`.
    fn cells(&self, admin: &dyn ModelAdmin) -> Vec<String> {
        admin
            .list_display()
            .iter()
            .map(|field| {
                if *field == LABEL_COLUMN {
                    self.label()
                } else {
                    self.column(field).unwrap_or_default()
                }
            })
            .collect()
    }
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

impl AdminRow for Content {
    fn id(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        self.to_string()
    }

    fn column(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.to_string()),
            "title" => Some(self.title.clone()),
            "file_url" => Some(self.file_url.clone()),
            "content_type" => Some(self.content_type.clone()),
            "is_public" => Some(yes_no(self.is_public)),
            "upload_date" => Some(self.upload_date.format(DATETIME_FORMAT).to_string()),
            "description" => Some(self.description.clone()),
            _ => None,
        }
    }
}

impl AdminRow for Playlist {
    fn id(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        self.to_string()
    }

    fn column(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "created_at" => Some(self.created_at.format(DATETIME_FORMAT).to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_content() -> Content {
        Content {
            id: 3,
            title: "Launch trailer".to_string(),
            file_url: "https://cdn.example.com/trailer.mp4".to_string(),
            content_type: "video".to_string(),
            is_public: true,
            upload_date: NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|date| date.and_hms_opt(9, 15, 0))
                .expect("valid timestamp"),
            description: "First look".to_string(),
        }
    }

    #[test]
    fn content_admin_matches_listing_configuration() {
        let admin = ContentAdmin;

        assert_eq!(
            admin.list_display(),
            &[
                "title",
                "file_url",
                "content_type",
                "is_public",
                "upload_date"
            ]
        );
        assert_eq!(admin.list_filter(), &["content_type", "is_public"]);
        assert_eq!(admin.search_fields(), &["title", "description"]);
        assert_eq!(admin.ordering(), &["-upload_date"]);
        assert!(admin.has_filter("is_public"));
        assert!(!admin.has_filter("title"));
    }

    #[test]
    fn default_admin_uses_label_and_id_ordering() {
        let admin = DefaultModelAdmin::new(PLAYLIST_MODEL);

        assert_eq!(admin.list_display(), &[LABEL_COLUMN]);
        assert!(admin.list_filter().is_empty());
        assert!(admin.search_fields().is_empty());
        assert_eq!(admin.ordering(), &["-id"]);
        assert_eq!(admin.list_per_page(), DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn streaming_site_registers_content_and_playlist() {
        let site = streaming_admin_site();

        assert_eq!(site.model_names(), vec![CONTENT_MODEL, PLAYLIST_MODEL]);
        assert!(site.get(CONTENT_MODEL).is_some());
        assert!(site.get("order").is_none());
    }

    #[test]
    fn register_replaces_existing_model() {
        let mut site = AdminSite::new();
        site.register(DefaultModelAdmin::new(CONTENT_MODEL));
        site.register(ContentAdmin);

        assert_eq!(site.model_names(), vec![CONTENT_MODEL]);
        let admin = site.get(CONTENT_MODEL).expect("registered");
        assert_eq!(admin.ordering(), &["-upload_date"]);
    }

    #[test]
    fn content_cells_follow_list_display() {
        let cells = sample_content().cells(&ContentAdmin);

        assert_eq!(
            cells,
            vec![
                "Launch trailer".to_string(),
                "https://cdn.example.com/trailer.mp4".to_string(),
                "video".to_string(),
                "yes".to_string(),
                "2024-05-01 09:15".to_string(),
            ]
        );
    }
}
