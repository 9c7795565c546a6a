//! Changelist data shared by the admin pages.

use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::pagination::Paginated;
use pushkind_common::routes::check_role;
use serde::{Deserialize, Serialize};

use crate::SERVICE_ACCESS_ROLE;
use crate::admin::{AdminRow, LABEL_COLUMN, ModelAdmin, streaming_admin_site};
use crate::domain::SortKey;
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by every changelist page.
#[derive(Debug, Default, Deserialize)]
pub struct ChangeListParams {
    /// Search term matched against the configured search fields.
    pub q: Option<String>,
    /// Exact content type filter.
    pub content_type: Option<String>,
    /// Visibility filter, `1` for public and `0` for private.
    pub is_public: Option<String>,
    /// Page number requested by the UI (1-based).
    pub page: Option<usize>,
}

impl ChangeListParams {
    /// Non-blank search term, trimmed.
    pub fn search_term(&self) -> Option<&str> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Visibility filter value; unknown values are ignored.
    pub fn visibility(&self) -> Option<bool> {
        match self.is_public.as_deref().map(str::trim) {
            Some("1") | Some("true") => Some(true),
            Some("0") | Some("false") => Some(false),
            _ => None,
        }
    }
}

/// Column header of a changelist table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChangeListColumn {
    pub field: String,
    pub title: String,
}

/// Rendered row of a changelist table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChangeListRow {
    pub id: i32,
    pub cells: Vec<String>,
}

/// One selectable value of a list filter.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterChoice {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Filter control rendered next to the changelist.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListFilter {
    pub field: String,
    pub title: String,
    pub choices: Vec<FilterChoice>,
}

/// Data required to render a changelist template.
#[derive(Serialize)]
pub struct ChangeList {
    pub model_name: String,
    pub columns: Vec<ChangeListColumn>,
    pub rows: Paginated<ChangeListRow>,
    /// Search term echoed back to the template when present.
    pub search: Option<String>,
    /// Whether the model has search fields configured.
    pub searchable: bool,
    pub filters: Vec<ListFilter>,
}

impl ChangeList {
    /// Build the changelist page for `admin` from loaded records.
    pub fn build<T: AdminRow>(
        admin: &dyn ModelAdmin,
        params: &ChangeListParams,
        total: usize,
        records: &[T],
        filters: Vec<ListFilter>,
    ) -> Self {
        let total_pages = total.div_ceil(admin.list_per_page());
        // Out of range pages render as the last page with no rows.
        let page = params.page().min(total_pages.max(1));
        let rows = records
            .iter()
            .map(|record| ChangeListRow {
                id: record.id(),
                cells: record.cells(admin),
            })
            .collect();

        Self {
            model_name: admin.model_name().to_string(),
            columns: admin
                .list_display()
                .iter()
                .map(|field| ChangeListColumn {
                    field: (*field).to_string(),
                    title: column_title(field, admin.model_name()),
                })
                .collect(),
            rows: Paginated::new(rows, page, total_pages),
            search: params.search_term().map(str::to_string),
            searchable: !admin.search_fields().is_empty(),
            filters,
        }
    }
}

/// Human-readable header of a column, `file_url` becomes `File url`.
pub fn column_title(field: &str, model_name: &str) -> String {
    let text = if field == LABEL_COLUMN {
        model_name.replace('_', " ")
    } else {
        field.replace('_', " ")
    };
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolve the configured ordering terms, skipping unknown fields.
pub fn ordering_keys<F>(
    admin: &dyn ModelAdmin,
    resolve: impl Fn(&str) -> Option<F> + Copy,
) -> Vec<SortKey<F>> {
    admin
        .ordering()
        .iter()
        .filter_map(|term| SortKey::parse(term, resolve))
        .collect()
}

/// Resolve the configured search fields, skipping unknown fields.
pub fn search_fields<F>(admin: &dyn ModelAdmin, resolve: impl Fn(&str) -> Option<F>) -> Vec<F> {
    admin
        .search_fields()
        .iter()
        .filter_map(|field| resolve(*field))
        .collect()
}

/// Registered admin models shown on the admin index page.
pub fn list_admin_models(user: &AuthenticatedUser) -> ServiceResult<Vec<&'static str>> {
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    Ok(streaming_admin_site().model_names())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::{ContentAdmin, DefaultModelAdmin, PLAYLIST_MODEL};
    use crate::domain::SortDirection;
    use crate::domain::content::ContentField;
    use crate::services::test_support::user_with_roles;

    #[test]
    fn params_parse_visibility_values() {
        let mut params = ChangeListParams {
            is_public: Some("1".to_string()),
            ..Default::default()
        };
        assert_eq!(params.visibility(), Some(true));

        params.is_public = Some("0".to_string());
        assert_eq!(params.visibility(), Some(false));

        params.is_public = Some("maybe".to_string());
        assert_eq!(params.visibility(), None);
    }

    #[test]
    fn params_ignore_blank_search_and_zero_page() {
        let params = ChangeListParams {
            q: Some("   ".to_string()),
            page: Some(0),
            ..Default::default()
        };

        assert_eq!(params.search_term(), None);
        assert_eq!(params.page(), 1);
    }

    #[test]
    fn ordering_keys_follow_admin_configuration() {
        let keys = ordering_keys(&ContentAdmin, ContentField::from_name);

        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].field, ContentField::UploadDate);
        assert_eq!(keys[0].direction, SortDirection::Descending);
    }

    #[test]
    fn search_fields_follow_admin_configuration() {
        let fields = search_fields(&ContentAdmin, ContentField::from_name);

        assert_eq!(fields, vec![ContentField::Title, ContentField::Description]);
    }

    #[test]
    fn column_title_humanizes_names() {
        assert_eq!(column_title("file_url", "content"), "File url");
        assert_eq!(column_title(LABEL_COLUMN, PLAYLIST_MODEL), "Playlist");
    }

    #[test]
    fn default_admin_is_not_searchable() {
        let admin = DefaultModelAdmin::new(PLAYLIST_MODEL);
        let rows: Vec<crate::domain::playlist::Playlist> = Vec::new();

        let change_list =
            ChangeList::build(&admin, &ChangeListParams::default(), 0, &rows, Vec::new());

        assert!(!change_list.searchable);
        assert_eq!(change_list.columns.len(), 1);
        assert_eq!(change_list.model_name, PLAYLIST_MODEL);
    }

    #[test]
    fn out_of_range_page_builds_empty_changelist() {
        let admin = DefaultModelAdmin::new(PLAYLIST_MODEL);
        let rows: Vec<crate::domain::playlist::Playlist> = Vec::new();
        let params = ChangeListParams {
            page: Some(usize::MAX),
            ..Default::default()
        };

        let change_list = ChangeList::build(&admin, &params, 3, &rows, Vec::new());

        let value = serde_json::to_value(&change_list.rows).expect("serialize rows");
        let items = value
            .get("items")
            .and_then(serde_json::Value::as_array)
            .expect("items");
        assert!(items.is_empty());
    }

    #[test]
    fn list_admin_models_requires_role() {
        let user = user_with_roles(&[]);

        assert!(matches!(
            list_admin_models(&user),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn list_admin_models_lists_registered_models() {
        let user = user_with_roles(&[SERVICE_ACCESS_ROLE]);

        let models = list_admin_models(&user).expect("expected success");

        assert_eq!(models, vec!["content", "playlist"]);
    }
}
