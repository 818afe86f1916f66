use askama::Template;

use crate::console::UserDirectory;
use crate::models::user::UserRecord;
use super::{PageContext, SelectOption, access_options, role_options};

/// Inline role editor shown under the user being edited.
pub struct RoleEditor {
    pub roles: Vec<SelectOption>,
    pub levels: Vec<SelectOption>,
}

pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub roles_label: String,
    pub editor: Option<RoleEditor>,
}

/// One of the two registration partitions.
pub struct UserSection {
    pub title: &'static str,
    pub rows: Vec<UserRow>,
}

pub struct AddUserForm {
    pub name: String,
    pub email: String,
    pub roles: Vec<SelectOption>,
}

pub struct DeletePrompt {
    pub id: String,
    pub name: String,
}

#[derive(Template)]
#[template(path = "users/list.html")]
pub struct UserListTemplate {
    pub ctx: PageContext,
    pub search: String,
    pub role_filter: Vec<SelectOption>,
    pub loading: bool,
    pub sections: Vec<UserSection>,
    pub add_form: Option<AddUserForm>,
    pub delete_prompt: Option<DeletePrompt>,
}

impl UserListTemplate {
    pub fn build(ctx: PageContext, directory: &UserDirectory) -> Self {
        let row = |user: &&UserRecord| {
            let editor = (directory.editing() == Some(&user.id)).then(|| RoleEditor {
                roles: role_options(directory.scratch_role()),
                levels: access_options(directory.scratch_permission()),
            });
            UserRow {
                id: user.id.to_string(),
                name: user.display_name().to_string(),
                email: user.email.clone(),
                roles_label: user.roles_label(),
                editor,
            }
        };

        let view = directory.view();
        let add_form = directory.is_add_form_open().then(|| AddUserForm {
            name: directory.draft().name.clone(),
            email: directory.draft().email.clone(),
            roles: role_options(directory.draft().role),
        });
        let delete_prompt = directory.pending_delete().map(|id| DeletePrompt {
            id: id.to_string(),
            name: directory
                .find(id)
                .map(|u| u.display_name().to_string())
                .unwrap_or_else(|| id.to_string()),
        });

        Self {
            ctx,
            search: directory.filter().search.clone(),
            role_filter: role_options(directory.filter().role),
            loading: directory.is_loading(),
            sections: vec![
                UserSection {
                    title: "Registered Users",
                    rows: view.registered.iter().map(row).collect(),
                },
                UserSection {
                    title: "Users Not Registered",
                    rows: view.not_registered.iter().map(row).collect(),
                },
            ],
            add_form,
            delete_prompt,
        }
    }
}
