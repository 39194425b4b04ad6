//! Integration tests against a mocked trading service

mod api_test;
mod app_test;
