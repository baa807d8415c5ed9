pub mod files_api_client;
