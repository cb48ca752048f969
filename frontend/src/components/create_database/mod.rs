//! # Database Creation
//!
//! Two ways to describe the new database's properties, in tabs:
//!
//! - `JsonForm`: the property map typed as JSON in the workspace API's own
//!   format and forwarded unchanged.
//! - `BuilderForm`: properties added one by one from the supported kinds,
//!   with options for select and multi-select.
//!
//! Both need a parent page, so the list of pages is loaded first.

mod builder;
mod json;

use crate::api;
use crate::app::View;
use crate::components::home::error_alert;
use builder::BuilderForm;
use common::model::page::Page;
use json::JsonForm;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CreateDatabaseProps {
    pub on_navigate: Callback<View>,
}

#[derive(Clone, Copy, PartialEq)]
pub enum Tab {
    Json,
    Builder,
}

pub enum Msg {
    PagesLoaded(Result<Vec<Page>, String>),
    SetTab(Tab),
}

pub struct CreateDatabase {
    pages: Option<Result<Vec<Page>, String>>,
    tab: Tab,
}

impl Component for CreateDatabase {
    type Message = Msg;
    type Properties = CreateDatabaseProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::PagesLoaded(api::list_pages().await));
        });
        Self {
            pages: None,
            tab: Tab::Json,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PagesLoaded(result) => self.pages = Some(result),
            Msg::SetTab(tab) => self.tab = tab,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_created = {
            let on_navigate = ctx.props().on_navigate.clone();
            Callback::from(move |_: ()| on_navigate.emit(View::Home))
        };
        let tab_class = |tab: Tab| classes!("tab-btn", (self.tab == tab).then_some("active"));

        let body = match &self.pages {
            None => html! { <p class="muted">{"Loading..."}</p> },
            Some(Err(e)) => error_alert(e),
            Some(Ok(pages)) => html! {
                <>
                    <div class="tab-bar">
                        <button class={tab_class(Tab::Json)} onclick={link.callback(|_| Msg::SetTab(Tab::Json))}>
                            {"With JSON"}
                        </button>
                        <button class={tab_class(Tab::Builder)} onclick={link.callback(|_| Msg::SetTab(Tab::Builder))}>
                            {"Base"}
                        </button>
                    </div>
                    {
                        match self.tab {
                            Tab::Json => html! { <JsonForm pages={pages.clone()} on_created={on_created} /> },
                            Tab::Builder => html! { <BuilderForm pages={pages.clone()} on_created={on_created} /> },
                        }
                    }
                </>
            },
        };

        html! {
            <div class="create-database">
                <h1>{"Create New Database"}</h1>
                { body }
            </div>
        }
    }
}
