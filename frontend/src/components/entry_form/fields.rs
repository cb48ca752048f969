//! One input per property kind.

use super::{EntryForm, Msg};
use crate::helpers::{event_checked, event_value};
use common::forms::{
    input_checked, input_text, input_type, multi_select_input_text, parse_number_input,
};
use common::model::property::{PropertyDefinition, PropertyKind, PropertyType};
use common::model::values::FormValue;
use yew::html::Scope;
use yew::prelude::*;

pub fn field(
    key: &str,
    definition: &PropertyDefinition,
    value: Option<&FormValue>,
    draft: Option<&String>,
    link: &Scope<EntryForm>,
) -> Html {
    let Some(property_type) = definition.kind.property_type() else {
        return html! { <div class="muted">{"Unsupported property type"}</div> };
    };
    let placeholder = format!("Enter {}", key);
    let id = key.to_string();
    let name = key.to_string();

    match &definition.kind {
        PropertyKind::RichText => html! {
            <textarea id={id} placeholder={placeholder} value={input_text(value)}
                oninput={link.callback(move |e: InputEvent| Msg::SetValue(name.clone(), FormValue::Text(event_value(&e))))} />
        },
        PropertyKind::Number => html! {
            <input id={id} type="number" placeholder={placeholder} value={input_text(value)}
                oninput={link.callback(move |e: InputEvent| Msg::SetValue(name.clone(), parse_number_input(&event_value(&e))))} />
        },
        PropertyKind::Select { select } => {
            let current = input_text(value);
            html! {
                <select id={id}
                    onchange={link.callback(move |e: Event| Msg::SetValue(name.clone(), FormValue::Text(event_value(&e))))}>
                    <option value="" selected={current.is_empty()}>{ format!("Select {}", key) }</option>
                    { for select.options.iter().map(|option| html! {
                        <option value={option.name.clone()} selected={option.name == current}>
                            { option.name.clone() }
                        </option>
                    }) }
                </select>
            }
        }
        PropertyKind::MultiSelect { .. } => {
            let text = draft.cloned().unwrap_or_else(|| multi_select_input_text(value));
            html! {
                <input id={id} type="text" value={text}
                    placeholder={format!("Enter {} (comma-separated)", key)}
                    oninput={link.callback(move |e: InputEvent| Msg::SetDraft(name.clone(), event_value(&e)))} />
            }
        }
        PropertyKind::Checkbox => html! {
            <input id={id} type="checkbox" checked={input_checked(value)}
                onchange={link.callback(move |e: Event| Msg::SetValue(name.clone(), FormValue::Bool(event_checked(&e))))} />
        },
        // Title, date, url, email and phone are single-line text inputs that
        // differ only in their `type`.
        _ => text_input(id, name, property_type, placeholder, value, link),
    }
}

fn text_input(
    id: String,
    name: String,
    property_type: PropertyType,
    placeholder: String,
    value: Option<&FormValue>,
    link: &Scope<EntryForm>,
) -> Html {
    html! {
        <input id={id} type={input_type(property_type)} placeholder={placeholder}
            value={input_text(value)}
            oninput={link.callback(move |e: InputEvent| Msg::SetValue(name.clone(), FormValue::Text(event_value(&e))))} />
    }
}
