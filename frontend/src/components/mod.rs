pub mod error_boundary;
pub mod loading_indicator;
pub mod page_shell;
pub mod session_bar;
pub mod upload_form;
pub mod version_history_panel;
pub mod version_list_view;
