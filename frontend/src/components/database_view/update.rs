use super::messages::Msg;
use super::state::DatabaseView;
use crate::api;
use crate::helpers::show_toast;
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};
use yew::platform::spawn_local;
use yew::prelude::*;

pub fn update(component: &mut DatabaseView, ctx: &Context<DatabaseView>, msg: Msg) -> bool {
    match msg {
        Msg::Reload => {
            let database_id = ctx.props().database_id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let database = api::get_database(&database_id).await;
                let loaded = database.is_ok();
                link.send_message(Msg::DatabaseLoaded(database));
                // No point asking for entries of a database that failed to load.
                if loaded {
                    link.send_message(Msg::EntriesLoaded(api::list_entries(&database_id).await));
                }
            });
            false
        }
        Msg::DatabaseLoaded(result) => {
            component.database = Some(result);
            true
        }
        Msg::EntriesLoaded(result) => {
            component.entries = Some(result);
            true
        }
        Msg::OpenCreate => {
            component.form_generation += 1;
            open_top_sheet(component.create_dialog_ref.clone());
            true
        }
        Msg::OpenEdit(entry) => {
            component.form_generation += 1;
            component.editing = Some(entry);
            open_top_sheet(component.edit_dialog_ref.clone());
            true
        }
        Msg::EntrySaved => {
            ctx.link().send_message_batch(vec![Msg::CloseEntryDialogs, Msg::Reload]);
            false
        }
        Msg::CloseEntryDialogs => {
            close_top_sheet(component.create_dialog_ref.clone());
            close_top_sheet(component.edit_dialog_ref.clone());
            component.editing = None;
            true
        }
        Msg::AskDelete(entry) => {
            component.pending_delete = Some(entry);
            open_top_sheet(component.delete_dialog_ref.clone());
            true
        }
        Msg::ConfirmDelete => {
            let Some(entry) = component.pending_delete.clone() else {
                return false;
            };
            component.deleting = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Deleted(api::delete_entry(&entry.id).await));
            });
            true
        }
        Msg::Deleted(result) => {
            component.deleting = false;
            match result {
                Ok(_) => {
                    show_toast("Entry deleted");
                    component.pending_delete = None;
                    close_top_sheet(component.delete_dialog_ref.clone());
                    ctx.link().send_message(Msg::Reload);
                }
                Err(e) => show_toast(&format!("Error: {}", e)),
            }
            true
        }
        Msg::OpenAddPage => {
            open_top_sheet(component.add_page_dialog_ref.clone());
            false
        }
    }
}
