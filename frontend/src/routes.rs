use dioxus::prelude::*;

use crate::components::page_shell::PageShell;
use crate::pages::folder_page::{FolderPage, RootFolderPage};

/// Every path is a folder: the path itself is the location being browsed.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PageShell)]


    #[route("/")]
    RootFolderPage {},


    #[route("/:..segments")]
    FolderPage { segments: Vec<String> },

}
