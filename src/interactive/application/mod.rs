pub mod api_service;

#[cfg(test)]
mod api_service_test;
