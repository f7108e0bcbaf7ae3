// Route exports
pub mod auth;
pub mod messages;
pub mod offers;
pub mod search;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(search::configure)
            .configure(offers::configure)
            .configure(auth::configure)
            .configure(messages::configure),
    );
}
