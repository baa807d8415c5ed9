pub mod folder_page;
