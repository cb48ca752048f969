use crate::api;
use crate::app::View;
use common::model::user::User;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_navigate: Callback<View>,
}

pub enum Msg {
    UserLoaded(User),
}

/// Top bar with navigation and the name of the integration in use.
pub struct Header {
    user: Option<User>,
}

impl Component for Header {
    type Message = Msg;
    type Properties = HeaderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::current_user().await {
                Ok(user) => link.send_message(Msg::UserLoaded(user)),
                Err(e) => gloo_console::warn!(format!("Could not load the integration user: {}", e)),
            }
        });
        Self { user: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UserLoaded(user) => {
                self.user = Some(user);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let navigate = |view: View| {
            let on_navigate = ctx.props().on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(view.clone()))
        };
        let user_name = self
            .user
            .as_ref()
            .and_then(|u| u.name.clone())
            .unwrap_or_default();

        html! {
            <header class="app-header">
                <button class="brand" onclick={navigate(View::Home)}>
                    <i class="material-icons">{"storage"}</i>
                    <span>{"Notion Database Manager"}</span>
                </button>
                <div class="header-actions">
                    <span class="user-name" title="Integration">{ user_name }</span>
                    <button class="btn outline" onclick={navigate(View::CreatePage)}>
                        <i class="material-icons">{"description"}</i>{"Create Page"}
                    </button>
                    <button class="btn outline" onclick={navigate(View::CreateDatabase)}>
                        <i class="material-icons">{"storage"}</i>{"Create Database"}
                    </button>
                </div>
            </header>
        }
    }
}
