//! Dialog that slides down from the top of the viewport.
//!
//! The sheet is always mounted; `open_top_sheet` and `close_top_sheet` toggle
//! its `show` class, which the stylesheet animates.

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::events::MouseEvent;
use yew::{html, AttrValue, Callback, Component, Context, Html, NodeRef, Properties};

/// Delay before toggling the class so a freshly rendered sheet still animates.
const TOGGLE_DELAY_MS: u32 = 50;
const SHOW_CLASS: &str = "show";

pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Called after the close button hides the sheet.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = {
            let node_ref = props.node_ref.clone();
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| {
                close_top_sheet(node_ref.clone());
                if let Some(on_close) = &on_close {
                    on_close.emit(());
                }
            })
        };

        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="top-sheet-header">
                    <h2>{ props.title.clone().unwrap_or_default() }</h2>
                    <button class="icon-btn" title="Close" onclick={on_close}>{ "✕" }</button>
                </div>
                <div class="top-sheet-body">
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}

fn toggle(top_sheet_ref: NodeRef, show: bool) {
    Timeout::new(TOGGLE_DELAY_MS, move || {
        if let Some(sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
            let classes = sheet.class_list();
            let _ = if show {
                classes.add_1(SHOW_CLASS)
            } else {
                classes.remove_1(SHOW_CLASS)
            };
        }
    })
    .forget();
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    toggle(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    toggle(top_sheet_ref, false);
}
