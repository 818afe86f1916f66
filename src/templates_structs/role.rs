use askama::Template;

use crate::console::RoleCatalog;
use super::{PageContext, SelectOption, access_options, role_options};

/// One catalog row; `index` is its only identity.
pub struct CatalogRow {
    pub index: usize,
    pub roles: Vec<SelectOption>,
    pub levels: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "roles/list.html")]
pub struct RoleCatalogTemplate {
    pub ctx: PageContext,
    pub rows: Vec<CatalogRow>,
    pub loading: bool,
    pub is_updating: bool,
    pub status: Option<String>,
}

impl RoleCatalogTemplate {
    pub fn build(ctx: PageContext, catalog: &RoleCatalog) -> Self {
        let rows = catalog
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| CatalogRow {
                index,
                roles: role_options(Some(entry.role)),
                levels: access_options(Some(entry.access_level)),
            })
            .collect();
        Self {
            ctx,
            rows,
            loading: catalog.is_loading(),
            is_updating: catalog.is_updating(),
            status: catalog.status().map(str::to_string),
        }
    }
}
