pub mod lookup_client;
pub mod search_orchestrator;
pub mod suggestion_fetcher;
