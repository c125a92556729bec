use std::io;
use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, middleware, web};

use crate::api::{docs, scores};
use crate::database::ScoreStore;
use crate::routes;

/// Registers the score routes, shared store and fallbacks on an app.
///
/// Swagger UI is only mounted when `swagger` is set.
pub fn app_config(
    store: web::Data<ScoreStore>,
    swagger: bool,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(store.clone())
            .app_data(scores::json_config())
            .configure(scores::init_routes);
        if swagger {
            cfg.configure(docs::init_routes);
        }
        cfg.default_service(web::route().to(routes::not_found));
    }
}

/// Builds the HTTP server on an already bound listener. The returned
/// [`Server`] does nothing until awaited or spawned.
pub fn build(store: ScoreStore, swagger: bool, listener: TcpListener) -> io::Result<Server> {
    let configure = app_config(web::Data::new(store), swagger);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            // Log each incoming request with status, time, and size
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %T"))
            .configure(configure.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
