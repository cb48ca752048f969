//! Workspace overview: the databases and pages shared with the integration,
//! in two tabs.

use crate::api;
use crate::app::View;
use common::forms::display_title;
use common::model::database::Database;
use common::model::page::Page;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<View>,
}

#[derive(Clone, Copy, PartialEq)]
pub enum Tab {
    Databases,
    Pages,
}

pub enum Msg {
    SetTab(Tab),
    DatabasesLoaded(Result<Vec<Database>, String>),
    PagesLoaded(Result<Vec<Page>, String>),
}

/// `None` while the request is in flight.
pub struct Home {
    tab: Tab,
    databases: Option<Result<Vec<Database>, String>>,
    pages: Option<Result<Vec<Page>, String>>,
}

impl Component for Home {
    type Message = Msg;
    type Properties = HomeProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::DatabasesLoaded(api::list_databases().await));
            link.send_message(Msg::PagesLoaded(api::list_pages().await));
        });
        Self {
            tab: Tab::Databases,
            databases: None,
            pages: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => self.tab = tab,
            Msg::DatabasesLoaded(result) => self.databases = Some(result),
            Msg::PagesLoaded(result) => self.pages = Some(result),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = ctx.props().on_navigate.clone();
        let tab_class = |tab: Tab| classes!("tab-btn", (self.tab == tab).then_some("active"));

        html! {
            <div class="home">
                <div class="page-title">
                    <h1>{"Your Notion Workspace"}</h1>
                </div>
                <div class="tab-bar">
                    <button class={tab_class(Tab::Databases)} onclick={link.callback(|_| Msg::SetTab(Tab::Databases))}>
                        {"Databases"}
                    </button>
                    <button class={tab_class(Tab::Pages)} onclick={link.callback(|_| Msg::SetTab(Tab::Pages))}>
                        {"Pages"}
                    </button>
                </div>
                {
                    match self.tab {
                        Tab::Databases => databases_tab(self.databases.as_ref(), &on_navigate),
                        Tab::Pages => pages_tab(self.pages.as_ref(), &on_navigate),
                    }
                }
            </div>
        }
    }
}

pub fn error_alert(error: &str) -> Html {
    html! {
        <div class="alert error">
            <i class="material-icons">{"error_outline"}</i>
            <div>
                <strong>{"Error"}</strong>
                <p>{ error }</p>
                <p class="muted">{"Please check your Notion API key."}</p>
            </div>
        </div>
    }
}

fn loading() -> Html {
    html! { <p class="muted">{"Loading..."}</p> }
}

fn empty_state(icon: &'static str, what: &'static str, target: View, on_navigate: &Callback<View>) -> Html {
    let on_navigate = on_navigate.clone();
    html! {
        <div class="empty-state">
            <i class="material-icons">{ icon }</i>
            <h2>{ format!("No {}s found", what) }</h2>
            <p class="muted">{ format!("Create your first Notion {} to get started.", what) }</p>
            <button class="btn" onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(target.clone()))}>
                { format!("Create {}", capitalize(what)) }
            </button>
        </div>
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn databases_tab(databases: Option<&Result<Vec<Database>, String>>, on_navigate: &Callback<View>) -> Html {
    match databases {
        None => loading(),
        Some(Err(e)) => error_alert(e),
        Some(Ok(databases)) if databases.is_empty() => {
            empty_state("storage", "database", View::CreateDatabase, on_navigate)
        }
        Some(Ok(databases)) => html! {
            <div class="card-grid">
                { for databases.iter().map(|database| {
                    let on_navigate = on_navigate.clone();
                    let id = database.id.clone();
                    html! {
                        <div class="card" key={database.id.clone()}>
                            <h3 class="truncate">{ display_title(database.title_text()) }</h3>
                            <p class="muted">{ short_date(database.created_time.as_deref()) }</p>
                            <p class="muted">{ format!("{} properties", database.properties.len()) }</p>
                            <button class="btn outline wide"
                                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(View::Database(id.clone())))}>
                                {"View Database"}
                            </button>
                        </div>
                    }
                }) }
            </div>
        },
    }
}

fn pages_tab(pages: Option<&Result<Vec<Page>, String>>, on_navigate: &Callback<View>) -> Html {
    match pages {
        None => loading(),
        Some(Err(e)) => error_alert(e),
        Some(Ok(pages)) if pages.is_empty() => {
            empty_state("description", "page", View::CreatePage, on_navigate)
        }
        Some(Ok(pages)) => html! {
            <div class="card-grid">
                { for pages.iter().map(|page| html! {
                    <div class="card" key={page.id.clone()}>
                        <h3 class="truncate">{ display_title(page.title()) }</h3>
                        <p class="muted">{ short_date(page.created_time.as_deref()) }</p>
                        <p class="muted">
                            { format!("Last edited: {}", page.last_edited_time.as_deref().unwrap_or("-")) }
                        </p>
                        {
                            match &page.url {
                                Some(url) => html! {
                                    <a class="btn outline wide" href={url.clone()} target="_blank" rel="noopener noreferrer">
                                        {"Open in Notion"}
                                    </a>
                                },
                                None => html! {},
                            }
                        }
                    </div>
                }) }
            </div>
        },
    }
}

/// Date part of an ISO timestamp.
fn short_date(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|t| t.split('T').next())
        .unwrap_or_default()
        .to_string()
}
