mod common;
mod hosting_tests;
mod router_tests;
mod service_tests;
