use crate::tops_sheet::top_sheet::{close_top_sheet, TopSheet};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub node_ref: NodeRef,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub warning: Option<AttrValue>,
    #[prop_or(AttrValue::Static("Delete"))]
    pub confirm_label: AttrValue,
    /// Disables both buttons while the action runs.
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
}

/// Asks before a destructive action.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_cancel = {
        let node_ref = props.node_ref.clone();
        Callback::from(move |_: MouseEvent| close_top_sheet(node_ref.clone()))
    };
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    html! {
        <TopSheet node_ref={props.node_ref.clone()} title={props.title.clone()}>
            <p>{ props.message.clone() }</p>
            {
                match &props.warning {
                    Some(warning) => html! {
                        <div class="alert error">
                            <i class="material-icons">{"warning"}</i>
                            <div>
                                <strong>{"Warning"}</strong>
                                <p>{ warning.clone() }</p>
                            </div>
                        </div>
                    },
                    None => html! {},
                }
            }
            <div class="dialog-actions">
                <button class="btn outline" onclick={on_cancel} disabled={props.busy}>{"Cancel"}</button>
                <button class="btn danger" onclick={on_confirm} disabled={props.busy}>
                    { if props.busy { AttrValue::Static("Deleting...") } else { props.confirm_label.clone() } }
                </button>
            </div>
        </TopSheet>
    }
}
