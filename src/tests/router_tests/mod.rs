mod api_tests;
mod approval_tests;
mod dashboard_tests;
