use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color:black; font-size: 18px; border: 1px solid black; padding: 10px; border-radius: 5px; margin: 15px; width: fit-content;",
            "Loading..."
        }
    }
}
