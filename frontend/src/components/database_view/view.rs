use super::messages::Msg;
use super::state::DatabaseView;
use crate::app::View;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::create_page::AddPageDialog;
use crate::components::entry_form::EntryForm;
use crate::components::home::error_alert;
use crate::tops_sheet::top_sheet::TopSheet;
use common::forms::{cell, display_title, Cell};
use common::model::database::Database;
use common::model::page::Page;
use common::model::property::PropertyDefinition;
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &DatabaseView, ctx: &Context<DatabaseView>) -> Html {
    let link = ctx.link();
    let back = {
        let on_navigate = ctx.props().on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(View::Home))
    };

    let body = match &component.database {
        None => html! { <p class="muted">{"Loading..."}</p> },
        Some(Err(e)) => html! {
            <>
                <h1>{"Database"}</h1>
                { error_alert(e) }
            </>
        },
        Some(Ok(database)) => html! {
            <>
                <h1>{ display_title(database.title_text()) }</h1>
                { properties_card(database, link) }
                { entries_card(component, database, link) }
                { dialogs(component, database, link) }
            </>
        },
    };

    html! {
        <div class="database-view">
            <button class="btn link" onclick={back}>{"← All databases"}</button>
            { body }
        </div>
    }
}

fn kind_label(definition: &PropertyDefinition) -> &'static str {
    definition
        .kind
        .property_type()
        .map(|t| t.label())
        .unwrap_or("Unsupported")
}

fn properties_card(database: &Database, link: &Scope<DatabaseView>) -> Html {
    let has_parent = database.parent_page_id().is_some();
    html! {
        <div class="card">
            <div class="card-header">
                <div>
                    <h2>{"Database Properties"}</h2>
                    <p class="muted">{ format!("This database has {} properties.", database.properties.len()) }</p>
                </div>
                <div class="inline">
                    <button class="btn" onclick={link.callback(|_| Msg::OpenCreate)}>
                        <i class="material-icons">{"add_circle"}</i>{"Add Entry"}
                    </button>
                    <button class="btn outline" onclick={link.callback(|_| Msg::OpenAddPage)} disabled={!has_parent}>
                        <i class="material-icons">{"description"}</i>{"Add Page"}
                    </button>
                </div>
            </div>
            { for database.properties.iter().map(|(name, definition)| html! {
                <div class="property-row" key={name.clone()}>
                    <div>
                        <p class="property-name">{ name.clone() }</p>
                        <p class="muted">{ kind_label(definition) }</p>
                    </div>
                </div>
            }) }
        </div>
    }
}

fn entries_card(component: &DatabaseView, database: &Database, link: &Scope<DatabaseView>) -> Html {
    let content = match &component.entries {
        None => html! { <p class="muted">{"Loading..."}</p> },
        Some(Err(e)) => error_alert(e),
        Some(Ok(entries)) if entries.is_empty() => html! {
            <div class="empty-state">
                <p class="muted">{"No entries found. Add your first entry to get started."}</p>
                <button class="btn" onclick={link.callback(|_| Msg::OpenCreate)}>{"Add Entry"}</button>
            </div>
        },
        Some(Ok(entries)) => entries_table(database, entries, link),
    };
    let count = match &component.entries {
        Some(Ok(entries)) => format!("This database has {} entries.", entries.len()),
        _ => String::new(),
    };

    html! {
        <div class="card">
            <h2>{"Database Entries"}</h2>
            <p class="muted">{ count }</p>
            { content }
        </div>
    }
}

fn entries_table(database: &Database, entries: &[Page], link: &Scope<DatabaseView>) -> Html {
    html! {
        <div class="table-wrapper">
            <table class="entries">
                <thead>
                    <tr>
                        { for database.properties.keys().map(|key| html! { <th key={key.clone()}>{ key.clone() }</th> }) }
                        <th class="actions">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for entries.iter().map(|entry| {
                        let edit = entry.clone();
                        let delete = entry.clone();
                        html! {
                            <tr key={entry.id.clone()}>
                                { for database.properties.keys().map(|key| html! {
                                    <td key={key.clone()}>{ render_cell(cell(entry.properties.get(key))) }</td>
                                }) }
                                <td class="actions">
                                    <button class="icon-btn" title="Edit"
                                        onclick={link.callback(move |_| Msg::OpenEdit(edit.clone()))}>
                                        <i class="material-icons">{"edit"}</i>
                                    </button>
                                    <button class="icon-btn" title="Delete"
                                        onclick={link.callback(move |_| Msg::AskDelete(delete.clone()))}>
                                        <i class="material-icons">{"delete"}</i>
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}

fn render_cell(cell: Cell) -> Html {
    match cell {
        Cell::Text(text) => html! { <>{ text }</> },
        Cell::Link { href, label } => {
            let external = !href.starts_with("mailto:");
            html! {
                <a class="link" href={href} target={external.then_some("_blank")}
                    rel={external.then_some("noopener noreferrer")}>
                    { label }
                </a>
            }
        }
        Cell::Chips(names) => html! {
            <>{ for names.into_iter().map(|name| html! { <span class="chip">{ name }</span> }) }</>
        },
        Cell::Unsupported => html! { <span class="muted">{"Unsupported"}</span> },
    }
}

fn dialogs(component: &DatabaseView, database: &Database, link: &Scope<DatabaseView>) -> Html {
    let on_saved = link.callback(|_: ()| Msg::EntrySaved);
    let on_cancel = link.callback(|_: ()| Msg::CloseEntryDialogs);
    let generation = component.form_generation;

    html! {
        <>
            <TopSheet node_ref={component.create_dialog_ref.clone()} title="Add New Entry"
                on_close={on_cancel.clone()}>
                <p class="muted">{"Create a new entry in this database."}</p>
                <EntryForm key={format!("create-{}", generation)} database={database.clone()}
                    on_saved={on_saved.clone()} on_cancel={on_cancel.clone()} />
            </TopSheet>

            <TopSheet node_ref={component.edit_dialog_ref.clone()} title="Edit Entry"
                on_close={on_cancel.clone()}>
                <p class="muted">{"Update this database entry."}</p>
                {
                    match &component.editing {
                        Some(entry) => html! {
                            <EntryForm key={format!("edit-{}-{}", entry.id, generation)} database={database.clone()}
                                entry={entry.clone()} on_saved={on_saved} on_cancel={on_cancel} />
                        },
                        None => html! {},
                    }
                }
            </TopSheet>

            <ConfirmDialog node_ref={component.delete_dialog_ref.clone()}
                title="Confirm Deletion"
                message="Are you sure you want to delete this entry? It will be archived in your Notion workspace."
                warning="The entry disappears from this database."
                busy={component.deleting}
                on_confirm={link.callback(|_: ()| Msg::ConfirmDelete)} />

            <AddPageDialog node_ref={component.add_page_dialog_ref.clone()}
                parent_id={database.parent_page_id().unwrap_or_default().to_string()} />
        </>
    }
}
