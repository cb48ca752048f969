//! Page creation: the standalone form reached from the header, and the
//! dialog opened from a database view (`AddPageDialog`).

mod dialog;

pub use dialog::AddPageDialog;

use crate::api;
use crate::app::View;
use crate::components::home::error_alert;
use crate::helpers::{event_value, show_toast};
use common::forms::display_title;
use common::model::page::Page;
use common::requests::CreatePageRequest;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CreatePageProps {
    pub on_navigate: Callback<View>,
}

pub enum Msg {
    PagesLoaded(Result<Vec<Page>, String>),
    SetTitle(String),
    SetParent(String),
    SetContent(String),
    Submit,
    Submitted(Result<Page, String>),
}

pub struct CreatePage {
    pages: Option<Result<Vec<Page>, String>>,
    title: String,
    parent_id: String,
    content: String,
    submitting: bool,
}

impl CreatePage {
    fn can_submit(&self) -> bool {
        !self.submitting && !self.title.is_empty() && !self.parent_id.is_empty()
    }
}

impl Component for CreatePage {
    type Message = Msg;
    type Properties = CreatePageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::PagesLoaded(api::list_pages().await));
        });
        Self {
            pages: None,
            title: String::new(),
            parent_id: String::new(),
            content: String::new(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PagesLoaded(result) => self.pages = Some(result),
            Msg::SetTitle(title) => self.title = title,
            Msg::SetParent(parent_id) => self.parent_id = parent_id,
            Msg::SetContent(content) => self.content = content,
            Msg::Submit => {
                if !self.can_submit() {
                    show_toast("Please provide a title and select a parent page.");
                    return false;
                }
                self.submitting = true;
                let request = CreatePageRequest {
                    parent_id: self.parent_id.clone(),
                    title: self.title.clone(),
                    content: Some(self.content.clone()).filter(|c| !c.is_empty()),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Submitted(api::create_page(&request).await));
                });
            }
            Msg::Submitted(result) => {
                self.submitting = false;
                match result {
                    Ok(_) => {
                        show_toast("Page created");
                        ctx.props().on_navigate.emit(View::Home);
                    }
                    Err(e) => show_toast(&format!("Error: {}", e)),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let pages = match &self.pages {
            None => return html! { <p class="muted">{"Loading..."}</p> },
            Some(Err(e)) => {
                return html! {
                    <div>
                        <h1>{"Create New Page"}</h1>
                        { error_alert(e) }
                    </div>
                }
            }
            Some(Ok(pages)) => pages,
        };

        html! {
            <div class="card form-card">
                <h1>{"Create New Page"}</h1>
                <p class="muted">{"Enter the basic information for your new page."}</p>

                <div class="form-field">
                    <label for="title">{"Page Title"}</label>
                    <input id="title" type="text" placeholder="Enter page title" value={self.title.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetTitle(event_value(&e)))} />
                </div>
                <div class="form-field">
                    <label for="parent">{"Parent Page"}</label>
                    { parent_select(pages, &self.parent_id, link.callback(|e: Event| Msg::SetParent(event_value(&e)))) }
                    <p class="muted">{"The page will be created as a child of this page."}</p>
                </div>
                <div class="form-field">
                    <label for="content">{"Page Content (Optional)"}</label>
                    <textarea id="content" rows="5" placeholder="Enter page content" value={self.content.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetContent(event_value(&e)))} />
                </div>

                <button class="btn wide" onclick={link.callback(|_| Msg::Submit)} disabled={!self.can_submit()}>
                    { if self.submitting { "Creating..." } else { "Create Page" } }
                </button>
            </div>
        }
    }
}

/// `<select>` listing candidate parent pages by title.
pub fn parent_select(pages: &[Page], selected: &str, onchange: Callback<Event>) -> Html {
    html! {
        <select id="parent" {onchange}>
            <option value="" selected={selected.is_empty()}>{"Select a parent page"}</option>
            { for pages.iter().map(|page| html! {
                <option value={page.id.clone()} selected={page.id == selected}>
                    { display_title(page.title()) }
                </option>
            }) }
        </select>
    }
}
