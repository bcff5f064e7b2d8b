pub mod add_authorized_official;
pub mod complete_service;
pub mod initialize;
pub mod queries;
pub mod register_citizen;
pub mod request_service;
pub mod update_budget;

#[cfg(test)]
mod scenario_tests;
