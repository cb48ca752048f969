use crate::api;
use crate::helpers::{event_value, show_toast};
use crate::tops_sheet::top_sheet::{close_top_sheet, TopSheet};
use common::model::page::Page;
use common::requests::CreatePageRequest;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddPageDialogProps {
    pub node_ref: NodeRef,
    /// Page under which the new page is created.
    pub parent_id: AttrValue,
    #[prop_or_default]
    pub on_created: Callback<()>,
}

pub enum Msg {
    SetTitle(String),
    SetContent(String),
    Submit,
    Submitted(Result<Page, String>),
}

/// "Add Page" dialog of the database view.
pub struct AddPageDialog {
    title: String,
    content: String,
    submitting: bool,
}

impl Component for AddPageDialog {
    type Message = Msg;
    type Properties = AddPageDialogProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTitle(title) => self.title = title,
            Msg::SetContent(content) => self.content = content,
            Msg::Submit => {
                if self.title.is_empty() {
                    show_toast("Please provide a title for the page.");
                    return false;
                }
                self.submitting = true;
                let request = CreatePageRequest {
                    parent_id: ctx.props().parent_id.to_string(),
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
                        self.title.clear();
                        self.content.clear();
                        close_top_sheet(ctx.props().node_ref.clone());
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
        let on_cancel = {
            let node_ref = ctx.props().node_ref.clone();
            Callback::from(move |_: MouseEvent| close_top_sheet(node_ref.clone()))
        };

        html! {
            <TopSheet node_ref={ctx.props().node_ref.clone()} title="Add New Page">
                <p class="muted">{"Create a new page in your Notion workspace."}</p>
                <div class="form-field">
                    <label for="add-page-title">{"Page Title"}</label>
                    <input id="add-page-title" type="text" placeholder="Enter page title" value={self.title.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetTitle(event_value(&e)))} />
                </div>
                <div class="form-field">
                    <label for="add-page-content">{"Page Content (Optional)"}</label>
                    <textarea id="add-page-content" rows="5" placeholder="Enter page content" value={self.content.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetContent(event_value(&e)))} />
                </div>
                <div class="dialog-actions">
                    <button class="btn outline" onclick={on_cancel} disabled={self.submitting}>{"Cancel"}</button>
                    <button class="btn" onclick={link.callback(|_| Msg::Submit)}
                        disabled={self.submitting || self.title.is_empty()}>
                        { if self.submitting { "Creating..." } else { "Create Page" } }
                    </button>
                </div>
            </TopSheet>
        }
    }
}
