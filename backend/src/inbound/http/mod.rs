//! HTTP inbound adapter exposing REST endpoints.
//!
//! Every roster and settings route lives under `/api`; health probes are
//! mounted at the root by the server.

use actix_web::web;

pub mod error;
pub mod health;
pub mod login;
pub mod schemas;
pub mod settings;
pub mod state;
pub mod students;
#[cfg(test)]
pub mod test_utils;
pub mod upload;

pub use error::ApiResult;

/// Register the `/api` scope with every roster, settings and login route.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use roster::inbound::http::configure_api;
///
/// let app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(error::json_config())
            .service(login::login)
            .service(students::list_students)
            .service(students::add_students)
            .service(upload::upload_students)
            .service(students::remove_all_students)
            .service(students::remove_student)
            .service(settings::get_settings)
            .service(settings::update_settings),
    );
}
