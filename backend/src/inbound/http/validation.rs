//! Request validation helpers for the recipe and list endpoints.
//!
//! Every failure is an `invalid_request` [`Error`] whose details carry the
//! offending `field`, a machine-readable `code`, and the rejected `value`
//! where one was supplied.

use pagination::PageRequest;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    Error, ListId, ListTitle, NewRecipeList, Recipe, RecipeDraft, is_slug, slugify,
};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    MissingQuery,
    InvalidPage,
    InvalidLimit,
    InvalidSlug,
    InvalidListId,
    EmptyTitle,
    EmptyName,
    InvalidUrl,
    MalformedBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::MissingQuery => "missing_query",
            Self::InvalidPage => "invalid_page",
            Self::InvalidLimit => "invalid_limit",
            Self::InvalidSlug => "invalid_slug",
            Self::InvalidListId => "invalid_list_id",
            Self::EmptyTitle => "empty_title",
            Self::EmptyName => "empty_name",
            Self::InvalidUrl => "invalid_url",
            Self::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for request field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const PAGE: FieldName = FieldName::new("page");
pub(crate) const LIMIT: FieldName = FieldName::new("limit");
pub(crate) const SLUG: FieldName = FieldName::new("slug");
pub(crate) const QUERY: FieldName = FieldName::new("q");
pub(crate) const LIST_ID: FieldName = FieldName::new("listId");
pub(crate) const RECIPE_NAME: FieldName = FieldName::new("recipeName");
pub(crate) const TITLE: FieldName = FieldName::new("title");
pub(crate) const BODY: FieldName = FieldName::new("body");

fn validation_error(field: FieldName, code: ValidationCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn validation_error_with_value(
    field: FieldName,
    code: ValidationCode,
    message: impl Into<String>,
    value: &str,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
        "value": value,
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    validation_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {name}"),
    )
}

/// Wrap a body deserialisation failure in the validation envelope.
pub(crate) fn malformed_body_error(reason: impl std::fmt::Display) -> Error {
    Error::invalid_request("request body is not valid JSON for this endpoint").with_details(json!({
        "field": BODY.as_str(),
        "code": ValidationCode::MalformedBody.as_str(),
        "reason": reason.to_string(),
    }))
}

fn parse_positive(value: &str, field: FieldName, code: ValidationCode) -> Result<u64, Error> {
    let invalid = || {
        let name = field.as_str();
        validation_error_with_value(
            field,
            code,
            format!("{name} must be a positive integer"),
            value,
        )
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match value.parse::<u64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(invalid()),
    }
}

/// Build a page request from optional path segments.
///
/// Absent segments fall back to page 1 and `default_limit`.
pub(crate) fn parse_page_request(
    page: Option<&str>,
    limit: Option<&str>,
    default_limit: u64,
) -> Result<PageRequest, Error> {
    let page = page
        .map(|raw| parse_positive(raw, PAGE, ValidationCode::InvalidPage))
        .transpose()?
        .unwrap_or(1);
    let limit = limit
        .map(|raw| parse_positive(raw, LIMIT, ValidationCode::InvalidLimit))
        .transpose()?
        .unwrap_or(default_limit);
    PageRequest::new(page, limit)
        .map_err(|err| validation_error(LIMIT, ValidationCode::InvalidLimit, err.to_string()))
}

pub(crate) fn parse_slug(value: &str) -> Result<&str, Error> {
    if value.is_empty() {
        return Err(missing_field_error(SLUG));
    }
    if !is_slug(value) {
        return Err(validation_error_with_value(
            SLUG,
            ValidationCode::InvalidSlug,
            "Invalid slug format",
            value,
        ));
    }
    Ok(value)
}

pub(crate) fn parse_search_query(value: Option<String>) -> Result<String, Error> {
    match value {
        Some(term) if !slugify(&term).is_empty() => Ok(term),
        _ => Err(validation_error(
            QUERY,
            ValidationCode::MissingQuery,
            "Invalid or missing query string",
        )),
    }
}

pub(crate) fn parse_list_id(value: &str) -> Result<ListId, Error> {
    value.parse().map_err(|_| {
        validation_error_with_value(
            LIST_ID,
            ValidationCode::InvalidListId,
            "listId must be a positive integer",
            value,
        )
    })
}

pub(crate) fn parse_recipe_name(value: &str) -> Result<&str, Error> {
    if value.trim().is_empty() {
        return Err(missing_field_error(RECIPE_NAME));
    }
    Ok(value)
}

/// Recipe body as sent by clients. Every field is optional here so missing
/// fields produce field-level errors rather than a generic body error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RecipeBody {
    #[serde(rename = "Name")]
    #[schema(example = "Chicken Curry")]
    pub name: Option<String>,
    #[schema(example = "https://example.org/chicken-curry")]
    pub url: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Author", default)]
    pub author: Option<String>,
    #[serde(rename = "Ingredients")]
    pub ingredients: Option<Vec<String>>,
    #[serde(rename = "Method")]
    pub method: Option<Vec<String>>,
}

/// List creation body.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewListBody {
    #[schema(example = "Favorites")]
    pub title: Option<String>,
    pub recipe: Option<RecipeBody>,
}

pub(crate) fn parse_recipe(body: RecipeBody) -> Result<Recipe, Error> {
    let name = body
        .name
        .ok_or_else(|| missing_field_error(FieldName::new("Name")))?;
    if name.trim().is_empty() {
        return Err(validation_error(
            FieldName::new("Name"),
            ValidationCode::EmptyName,
            "Recipe name must not be empty",
        ));
    }
    let url = body
        .url
        .ok_or_else(|| missing_field_error(FieldName::new("url")))?;
    let ingredients = body
        .ingredients
        .ok_or_else(|| missing_field_error(FieldName::new("Ingredients")))?;
    let method = body
        .method
        .ok_or_else(|| missing_field_error(FieldName::new("Method")))?;

    let invalid_url = validation_error_with_value(
        FieldName::new("url"),
        ValidationCode::InvalidUrl,
        "url must be an absolute URL",
        &url,
    );
    Recipe::new(RecipeDraft {
        name,
        url,
        description: body.description,
        author: body.author,
        ingredients,
        method,
    })
    .map_err(|_| invalid_url)
}

pub(crate) fn parse_new_list(body: NewListBody) -> Result<NewRecipeList, Error> {
    let raw_title = body.title.ok_or_else(|| missing_field_error(TITLE))?;
    let title = ListTitle::new(raw_title).map_err(|_| {
        validation_error(TITLE, ValidationCode::EmptyTitle, "List name is required")
    })?;
    let recipe = body.recipe.map(parse_recipe).transpose()?;
    Ok(NewRecipeList { title, recipe })
}
