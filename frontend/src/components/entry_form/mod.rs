//! # Entry Form
//!
//! Create or edit one entry of a database. The form keeps a flat
//! `ValuesRecord` keyed by property name; on submit it is sent to the backend
//! together with the database schema, where `common::codec::encode` turns it
//! into the remote property payload.
//!
//! In edit mode the record is seeded with `decode_page`, so every supported
//! property starts with its stored value. The parent remounts the form (via
//! `key`) each time a dialog opens, which resets it.

mod fields;

use crate::api;
use crate::helpers::show_toast;
use common::codec::decode_page;
use common::model::database::Database;
use common::model::page::Page;
use common::model::values::{FormValue, ValuesRecord};
use common::requests::{CreateEntryRequest, UpdateEntryRequest};
use std::collections::BTreeMap;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EntryFormProps {
    pub database: Database,
    /// The entry being edited; `None` creates a new one.
    #[prop_or_default]
    pub entry: Option<Page>,
    pub on_saved: Callback<()>,
    pub on_cancel: Callback<()>,
}

pub enum Msg {
    SetValue(String, FormValue),
    /// Raw text of a multi-select input, kept so commas can be typed.
    SetDraft(String, String),
    Submit,
    Submitted(Result<Page, String>),
}

pub struct EntryForm {
    values: ValuesRecord,
    drafts: BTreeMap<String, String>,
    submitting: bool,
}

impl Component for EntryForm {
    type Message = Msg;
    type Properties = EntryFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let values = ctx.props().entry.as_ref().map(decode_page).unwrap_or_default();
        Self {
            values,
            drafts: BTreeMap::new(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetValue(key, value) => {
                self.values.insert(key, value);
                true
            }
            Msg::SetDraft(key, text) => {
                self.values
                    .insert(key.clone(), common::forms::parse_multi_select_input(&text));
                self.drafts.insert(key, text);
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                self.submitting = true;
                submit(ctx, self.values.clone());
                true
            }
            Msg::Submitted(result) => {
                self.submitting = false;
                let editing = ctx.props().entry.is_some();
                match result {
                    Ok(_) => {
                        show_toast(if editing { "Entry updated" } else { "Entry created" });
                        ctx.props().on_saved.emit(());
                    }
                    Err(e) => show_toast(&format!("Error: {}", e)),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let on_cancel = {
            let on_cancel = props.on_cancel.clone();
            Callback::from(move |_: MouseEvent| on_cancel.emit(()))
        };
        let submit_label = match (self.submitting, props.entry.is_some()) {
            (true, _) => "Saving...",
            (false, true) => "Update Entry",
            (false, false) => "Create Entry",
        };

        html! {
            <div class="entry-form">
                { for props.database.properties.iter().map(|(key, definition)| html! {
                    <div class="form-field" key={key.clone()}>
                        <label for={key.clone()}>{ key.clone() }</label>
                        { fields::field(key, definition, self.values.get(key), self.drafts.get(key), link) }
                    </div>
                }) }
                <div class="dialog-actions">
                    <button class="btn outline" onclick={on_cancel} disabled={self.submitting}>{"Cancel"}</button>
                    <button class="btn" onclick={link.callback(|_| Msg::Submit)} disabled={self.submitting}>
                        { submit_label }
                    </button>
                </div>
            </div>
        }
    }
}

fn submit(ctx: &Context<EntryForm>, values: ValuesRecord) {
    let props = ctx.props();
    let database_id = props.database.id.clone();
    let properties = props.database.properties.clone();
    let entry_id = props.entry.as_ref().map(|e| e.id.clone());
    let link = ctx.link().clone();

    spawn_local(async move {
        let result = match entry_id {
            Some(page_id) => {
                let request = UpdateEntryRequest {
                    database_id,
                    properties,
                    values,
                };
                api::update_entry(&page_id, &request).await
            }
            None => {
                let request = CreateEntryRequest { properties, values };
                api::create_entry(&database_id, &request).await
            }
        };
        link.send_message(Msg::Submitted(result));
    });
}
