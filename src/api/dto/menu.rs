//! DTOs for the `menus` resource.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Menu, MenuPatch, NewMenu};
use crate::error::AppError;

/// Request body for `POST /menus` and `PUT /menus/{id}`. Only `name` is required.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMenuRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    pub price: Option<i32>,
    pub detail: Option<String>,
    pub ingredient: Option<String>,
    pub is_published: Option<bool>,
}

impl TryFrom<CreateMenuRequest> for NewMenu {
    type Error = AppError;

    fn try_from(req: CreateMenuRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        let Some(name) = req.name else {
            return Err(AppError::missing_fields(["name"]));
        };

        Ok(NewMenu {
            name,
            price: req.price,
            detail: req.detail,
            ingredient: req.ingredient,
            is_published: req.is_published,
        })
    }
}

/// Request body for `PATCH /menus/{id}`.
///
/// Every field except `name` accepts `null` to clear the stored value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMenuRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub price: Option<Option<i32>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub detail: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub ingredient: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub is_published: Option<Option<bool>>,
}

impl TryFrom<UpdateMenuRequest> for MenuPatch {
    type Error = AppError;

    fn try_from(req: UpdateMenuRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        Ok(MenuPatch {
            name: req.name,
            price: req.price,
            detail: req.detail,
            ingredient: req.ingredient,
            is_published: req.is_published,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: Option<i32>,
    pub detail: Option<String>,
    pub ingredient: Option<String>,
    pub is_published: Option<bool>,
}

impl From<Menu> for MenuItem {
    fn from(m: Menu) -> Self {
        Self {
            id: m.id,
            name: m.name,
            price: m.price,
            detail: m.detail,
            ingredient: m.ingredient,
            is_published: m.is_published,
        }
    }
}
