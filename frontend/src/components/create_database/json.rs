use crate::api;
use crate::components::create_page::parent_select;
use crate::helpers::{event_value, show_toast};
use common::forms::parse_properties_json;
use common::model::database::Database;
use common::model::page::Page;
use common::requests::CreateDatabaseJsonRequest;
use serde_json::{Map, Value};
use yew::platform::spawn_local;
use yew::prelude::*;

const EXAMPLE: &str = r#"{
  "Name": {
    "title": {}
  },
  "Status": {
    "select": {
      "options": [
        { "name": "To Do", "color": "red" },
        { "name": "In Progress", "color": "yellow" },
        { "name": "Done", "color": "green" }
      ]
    }
  },
  "Due Date": {
    "date": {}
  }
}"#;

#[derive(Properties, PartialEq)]
pub struct JsonFormProps {
    pub pages: Vec<Page>,
    pub on_created: Callback<()>,
}

pub enum Msg {
    SetTitle(String),
    SetParent(String),
    SetJson(String),
    ToggleExample,
    Submit,
    Submitted(Result<Database, String>),
}

/// Properties typed as JSON. The last input that parsed is what gets sent;
/// submitting is blocked while the current input does not parse.
pub struct JsonForm {
    title: String,
    parent_id: String,
    input: String,
    properties: Map<String, Value>,
    error: Option<String>,
    show_example: bool,
    submitting: bool,
}

impl JsonForm {
    fn can_submit(&self) -> bool {
        !self.submitting && !self.title.is_empty() && !self.parent_id.is_empty() && self.error.is_none()
    }
}

impl Component for JsonForm {
    type Message = Msg;
    type Properties = JsonFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            title: String::new(),
            parent_id: ctx.props().pages.first().map(|p| p.id.clone()).unwrap_or_default(),
            input: String::new(),
            properties: Map::new(),
            error: None,
            show_example: false,
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTitle(title) => self.title = title,
            Msg::SetParent(parent_id) => self.parent_id = parent_id,
            Msg::SetJson(input) => {
                match parse_properties_json(&input) {
                    Ok(properties) => {
                        self.properties = properties;
                        self.error = None;
                    }
                    Err(e) => self.error = Some(e),
                }
                self.input = input;
            }
            Msg::ToggleExample => self.show_example = !self.show_example,
            Msg::Submit => {
                if !self.can_submit() {
                    show_toast("Please provide a title and select a parent page.");
                    return false;
                }
                self.submitting = true;
                let request = CreateDatabaseJsonRequest {
                    title: self.title.clone(),
                    parent_page_id: self.parent_id.clone(),
                    properties: self.properties.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Submitted(api::create_database_json(&request).await));
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

        html! {
            <div class="form-stack">
                <div class="card form-card">
                    <h2>{"Database Information"}</h2>
                    <div class="form-field">
                        <label for="json-title">{"Database Title"}</label>
                        <input id="json-title" type="text" placeholder="Enter database title" value={self.title.clone()}
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
                    <div class="form-field">
                        <label for="properties">{"Properties (Notion JSON Format)"}</label>
                        <textarea id="properties" class="json-input" placeholder="Enter Notion-style properties. Example below."
                            value={self.input.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetJson(event_value(&e)))} />
                        {
                            match &self.error {
                                Some(error) => html! { <p class="field-error">{ error.clone() }</p> },
                                None => html! {},
                            }
                        }
                    </div>
                    <button class="btn link" onclick={link.callback(|_| Msg::ToggleExample)}>
                        { if self.show_example { "Hide example JSON" } else { "Show example JSON" } }
                    </button>
                    {
                        if self.show_example {
                            html! { <pre class="json-example">{ EXAMPLE }</pre> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <button class="btn wide" onclick={link.callback(|_| Msg::Submit)} disabled={!self.can_submit()}>
                    { if self.submitting { "Creating..." } else { "Create Database" } }
                </button>
            </div>
        }
    }
}
