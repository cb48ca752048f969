//! Database view: the schema, the entries table and the dialogs that edit it.
//!
//! Split like the other stateful components:
//! - `state`: the component struct and its dialog refs.
//! - `messages`: `Msg`.
//! - `update`: loading, dialog handling, deletes.
//! - `view`: property list, entries table, dialogs.

mod messages;
mod state;
mod update;
mod view;

use crate::app::View;
use yew::prelude::*;

pub use messages::Msg;
pub use state::DatabaseView;

#[derive(Properties, PartialEq)]
pub struct DatabaseViewProps {
    pub database_id: String,
    pub on_navigate: Callback<View>,
}

impl Component for DatabaseView {
    type Message = Msg;
    type Properties = DatabaseViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Reload);
        DatabaseView::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
