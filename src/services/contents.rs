use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::check_role;

use crate::SERVICE_ACCESS_ROLE;
use crate::admin::{ContentAdmin, ModelAdmin};
use crate::domain::content::{Content, ContentField, ContentListQuery};
use crate::forms::content::AddContentForm;
use crate::repository::{ContentReader, ContentWriter};
use crate::services::admin::{
    ChangeList, ChangeListParams, FilterChoice, ListFilter, column_title, ordering_keys,
    search_fields,
};
use crate::services::{ServiceError, ServiceResult};

/// Translate the changelist parameters into a query shaped by `admin`.
///
/// Filters on fields missing from `list_filter` are dropped.
fn content_query(admin: &dyn ModelAdmin, params: &ChangeListParams) -> ContentListQuery {
    let mut query = ContentListQuery::new();

    if let Some(term) = params.search_term() {
        let fields = search_fields(admin, ContentField::from_name);
        if !fields.is_empty() {
            query = query.search(term, fields);
        }
    }

    if admin.has_filter(ContentField::ContentType.as_str()) {
        let content_type = params
            .content_type
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());
        if let Some(content_type) = content_type {
            query = query.content_type(content_type);
        }
    }

    if admin.has_filter(ContentField::IsPublic.as_str()) {
        if let Some(is_public) = params.visibility() {
            query = query.is_public(is_public);
        }
    }

    for key in ordering_keys(admin, ContentField::from_name) {
        query = query.order_by(key);
    }

    query.paginate(params.page(), admin.list_per_page())
}

fn content_filters<R>(
    repo: &R,
    admin: &dyn ModelAdmin,
    params: &ChangeListParams,
) -> ServiceResult<Vec<ListFilter>>
where
    R: ContentReader + ?Sized,
{
    let mut filters = Vec::new();

    for field in admin.list_filter() {
        let choices = match ContentField::from_name(field) {
            Some(ContentField::ContentType) => {
                let selected = params.content_type.as_deref().map(str::trim);
                repo.list_content_types()?
                    .into_iter()
                    .map(|content_type| FilterChoice {
                        selected: selected == Some(content_type.as_str()),
                        label: content_type.clone(),
                        value: content_type,
                    })
                    .collect()
            }
            Some(ContentField::IsPublic) => {
                let selected = params.visibility();
                vec![
                    FilterChoice {
                        value: "1".to_string(),
                        label: "Yes".to_string(),
                        selected: selected == Some(true),
                    },
                    FilterChoice {
                        value: "0".to_string(),
                        label: "No".to_string(),
                        selected: selected == Some(false),
                    },
                ]
            }
            _ => continue,
        };

        filters.push(ListFilter {
            field: (*field).to_string(),
            title: column_title(field, admin.model_name()),
            choices,
        });
    }

    Ok(filters)
}

/// Loads the content changelist: filtered, searched, ordered and paginated.
pub fn load_content_changelist<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ChangeListParams,
) -> ServiceResult<ChangeList>
where
    R: ContentReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let admin = ContentAdmin;
    let query = content_query(&admin, &params);
    let (total, contents) = repo.list_contents(query)?;
    let filters = content_filters(repo, &admin, &params)?;

    Ok(ChangeList::build(&admin, &params, total, &contents, filters))
}

/// Validates the admin form and stores a new content item.
pub fn create_content<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddContentForm,
) -> ServiceResult<Content>
where
    R: ContentWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let new_content = form
        .into_new_content()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_content(&new_content)
        .map_err(ServiceError::from)
}

pub fn delete_content<R>(repo: &R, user: &AuthenticatedUser, content_id: i32) -> ServiceResult<()>
where
    R: ContentWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_content(content_id).map_err(ServiceError::from)
}
