//! Domain ports for the hexagonal boundary.
//!
//! Both ports are driving ports: the HTTP adapter calls them and tests swap
//! in `mockall` doubles.

mod dashboard_service;
mod login_service;

#[cfg(test)]
pub use dashboard_service::MockDashboardService;
pub use dashboard_service::DashboardService;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
