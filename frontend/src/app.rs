use crate::components::create_database::CreateDatabase;
use crate::components::create_page::CreatePage;
use crate::components::database_view::DatabaseView;
use crate::components::header::Header;
use crate::components::home::Home;
use yew::{html, Callback, Component, Context, Html};

/// Screen currently shown below the header.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Home,
    Database(String),
    CreateDatabase,
    CreatePage,
}

pub enum Msg {
    Navigate(View),
}

pub struct App {
    view: View,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { view: View::Home }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(view) => {
                let changed = self.view != view;
                self.view = view;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate: Callback<View> = ctx.link().callback(Msg::Navigate);

        let content = match &self.view {
            View::Home => html! { <Home on_navigate={on_navigate.clone()} /> },
            View::Database(id) => html! {
                <DatabaseView key={id.clone()} database_id={id.clone()} on_navigate={on_navigate.clone()} />
            },
            View::CreateDatabase => html! { <CreateDatabase on_navigate={on_navigate.clone()} /> },
            View::CreatePage => html! { <CreatePage on_navigate={on_navigate.clone()} /> },
        };

        html! {
            <>
                <Header on_navigate={on_navigate} />
                <main class="container">
                    { content }
                </main>
            </>
        }
    }
}
