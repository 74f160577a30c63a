//! Menu entity.

use crate::domain::resource::Resource;

/// A menu item. Only `name` is mandatory.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub price: Option<i32>,
    pub detail: Option<String>,
    pub ingredient: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMenu {
    pub name: String,
    pub price: Option<i32>,
    pub detail: Option<String>,
    pub ingredient: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuPatch {
    pub name: Option<String>,
    pub price: Option<Option<i32>>,
    pub detail: Option<Option<String>>,
    pub ingredient: Option<Option<String>>,
    pub is_published: Option<Option<bool>>,
}

impl Resource for Menu {
    type Id = i64;
    type New = NewMenu;
    type Patch = MenuPatch;

    const LABEL: &'static str = "Menu";

    fn id(&self) -> &i64 {
        &self.id
    }
}
