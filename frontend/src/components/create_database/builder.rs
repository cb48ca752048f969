use crate::api;
use crate::components::create_page::parent_select;
use crate::helpers::{event_value, show_toast};
use common::model::database::{Database, NewProperty};
use common::model::page::Page;
use common::model::property::{PropertyType, SelectOption};
use common::requests::CreateDatabaseRequest;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BuilderFormProps {
    pub pages: Vec<Page>,
    pub on_created: Callback<()>,
}

pub enum Msg {
    SetTitle(String),
    SetParent(String),
    SetPropertyName(String),
    SetPropertyType(String),
    SetOption(String),
    AddOption,
    RemoveOption(usize),
    AddProperty,
    RemoveProperty(usize),
    Submit,
    Submitted(Result<Database, String>),
}

/// Builds the property list one property at a time. The `Name` title column
/// is added by the backend, so it is not offered here.
pub struct BuilderForm {
    title: String,
    parent_id: String,
    properties: Vec<NewProperty>,
    property_name: String,
    property_type: Option<PropertyType>,
    options: Vec<String>,
    option: String,
    submitting: bool,
}

impl BuilderForm {
    fn can_add_property(&self) -> bool {
        !self.property_name.is_empty() && self.property_type.is_some()
    }

    fn can_submit(&self) -> bool {
        !self.submitting && !self.title.is_empty() && !self.parent_id.is_empty()
    }
}

impl Component for BuilderForm {
    type Message = Msg;
    type Properties = BuilderFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            title: String::new(),
            parent_id: ctx.props().pages.first().map(|p| p.id.clone()).unwrap_or_default(),
            properties: Vec::new(),
            property_name: String::new(),
            property_type: None,
            options: Vec::new(),
            option: String::new(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTitle(title) => self.title = title,
            Msg::SetParent(parent_id) => self.parent_id = parent_id,
            Msg::SetPropertyName(name) => self.property_name = name,
            Msg::SetPropertyType(name) => self.property_type = PropertyType::from_wire(&name),
            Msg::SetOption(option) => self.option = option,
            Msg::AddOption => {
                if self.option.is_empty() {
                    return false;
                }
                self.options.push(std::mem::take(&mut self.option));
            }
            Msg::RemoveOption(index) => {
                if index < self.options.len() {
                    self.options.remove(index);
                }
            }
            Msg::AddProperty => {
                let Some(property_type) = self.property_type.filter(|_| self.can_add_property()) else {
                    return false;
                };
                let options = if property_type.has_options() {
                    self.options.drain(..).map(SelectOption::named).collect()
                } else {
                    Vec::new()
                };
                self.properties.push(NewProperty {
                    name: std::mem::take(&mut self.property_name),
                    property_type,
                    options,
                });
                self.property_type = None;
                self.options.clear();
                self.option.clear();
            }
            Msg::RemoveProperty(index) => {
                if index < self.properties.len() {
                    self.properties.remove(index);
                }
            }
            Msg::Submit => {
                if !self.can_submit() {
                    show_toast("Please provide a title and select a parent page.");
                    return false;
                }
                self.submitting = true;
                let request = CreateDatabaseRequest {
                    title: self.title.clone(),
                    parent_page_id: self.parent_id.clone(),
                    properties: self.properties.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Submitted(api::create_database(&request).await));
                });
            }
            Msg::Submitted(result) => {
                self.submitting = false;
                match result {
                    Ok(_) => {
                        show_toast("Database created");
                        ctx.props().on_created.emit(());
                    }
                    Err(e) => show_toast(&format!("Error: {}", e)),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let selected_type = self.property_type.map(|t| t.as_str()).unwrap_or_default();

        html! {
            <div class="form-stack">
                <div class="card form-card">
                    <h2>{"Database Information"}</h2>
                    <div class="form-field">
                        <label for="title">{"Database Title"}</label>
                        <input id="title" type="text" placeholder="Enter database title" value={self.title.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetTitle(event_value(&e)))} />
                    </div>
                    <div class="form-field">
                        <label for="parent">{"Parent Page"}</label>
                        { parent_select(&ctx.props().pages, &self.parent_id, link.callback(|e: Event| Msg::SetParent(event_value(&e)))) }
                        <p class="muted">{"The database will be created as a child of this page."}</p>
                    </div>
                </div>

                <div class="card form-card">
                    <h2>{"Database Properties"}</h2>
                    { for self.properties.iter().enumerate().map(|(index, property)| html! {
                        <div class="property-row" key={index}>
                            <div>
                                <p class="property-name">{ property.name.clone() }</p>
                                <p class="muted">
                                    { property.property_type.label() }
                                    { if property.options.is_empty() { String::new() } else { format!(" ({} options)", property.options.len()) } }
                                </p>
                            </div>
                            <button class="icon-btn" title="Remove" onclick={link.callback(move |_| Msg::RemoveProperty(index))}>
                                { "✕" }
                            </button>
                        </div>
                    }) }

                    <div class="form-grid">
                        <div class="form-field">
                            <label for="property-name">{"Property Name"}</label>
                            <input id="property-name" type="text" placeholder="e.g., Status, Priority"
                                value={self.property_name.clone()}
                                oninput={link.callback(|e: InputEvent| Msg::SetPropertyName(event_value(&e)))} />
                        </div>
                        <div class="form-field">
                            <label for="property-type">{"Property Type"}</label>
                            <select id="property-type" onchange={link.callback(|e: Event| Msg::SetPropertyType(event_value(&e)))}>
                                <option value="" selected={selected_type.is_empty()}>{"Select type"}</option>
                                { for PropertyType::USER_DEFINED.iter().map(|t| html! {
                                    <option value={t.as_str()} selected={t.as_str() == selected_type}>{ t.label() }</option>
                                }) }
                            </select>
                        </div>
                    </div>

                    { self.options_editor(link) }

                    <button class="btn outline wide" onclick={link.callback(|_| Msg::AddProperty)}
                        disabled={!self.can_add_property()}>
                        {"Add Property"}
                    </button>
                </div>

                <button class="btn wide" onclick={link.callback(|_| Msg::Submit)} disabled={!self.can_submit()}>
                    { if self.submitting { "Creating..." } else { "Create Database" } }
                </button>
            </div>
        }
    }
}

impl BuilderForm {
    fn options_editor(&self, link: &Scope<Self>) -> Html {
        if !self.property_type.is_some_and(|t| t.has_options()) {
            return html! {};
        }
        html! {
            <div class="options-editor">
                <label>{"Options"}</label>
                <div class="inline">
                    <input type="text" placeholder="Add an option" value={self.option.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetOption(event_value(&e)))}
                        onkeydown={link.batch_callback(|e: KeyboardEvent| {
                            if e.key() == "Enter" {
                                e.prevent_default();
                                vec![Msg::AddOption]
                            } else {
                                vec![]
                            }
                        })} />
                    <button class="btn outline" onclick={link.callback(|_| Msg::AddOption)}>{"Add"}</button>
                </div>
                <div class="chips">
                    { for self.options.iter().enumerate().map(|(index, option)| html! {
                        <span class="chip" key={index}>
                            { option.clone() }
                            <button class="chip-remove" onclick={link.callback(move |_| Msg::RemoveOption(index))}>{ "✕" }</button>
                        </span>
                    }) }
                </div>
            </div>
        }
    }
}
