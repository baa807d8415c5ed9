//! Credential entry and sign out.

use common::credential::Credential;
use dioxus::prelude::*;

use crate::data_definitions::session::use_session;

#[component]
pub fn SessionBar() -> Element {
    let session = use_session();
    let mut draft = use_signal(String::new);
    let mut rejected = use_signal(|| false);

    if session.is_signed_in() {
        return rsx! {
            div {
                style: "display:flex; flex-direction: row; align-items: center; gap: 10px; font-size: 14px;",
                span { "API token set" }
                button {
                    style: "height: 30px; padding: 0 12px; border-radius: 8px; border: 1px solid #D1D5DB; background: white; color: #111827; cursor: pointer;",
                    onclick: move |_| session.sign_out(),
                    "Sign out"
                }
            }
        };
    }

    rsx! {
        form {
            style: "display:flex; flex-direction: row; align-items: center; gap: 10px; font-size: 14px;",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                let parsed = Credential::parse(&draft.read());
                match parsed {
                    Some(credential) => {
                        rejected.set(false);
                        draft.set(String::new());
                        session.sign_in(credential);
                    }
                    None => rejected.set(true),
                }
            },
            input {
                r#type: "password",
                placeholder: "API token",
                value: "{draft}",
                style: "height: 30px; width: 260px; border-radius: 8px; border: 1px solid #D1D5DB; padding: 0 10px;",
                oninput: move |e| {
                    *draft.write() = e.value();
                },
            }
            button {
                r#type: "submit",
                style: "height: 30px; padding: 0 12px; border-radius: 8px; border: 1px solid #D1D5DB; background: white; color: #111827; cursor: pointer;",
                "Use token"
            }
            if rejected() {
                span { style: "color: #FCA5A5;", "Enter a token first" }
            }
        }
    }
}
