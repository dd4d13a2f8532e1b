//! src/startup.rs
use crate::configuration::Settings;
use crate::routes::{greeting, health_check};
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::middleware::NormalizePath;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, std::io::Error> {
    let address = config.application.address();
    let tcp_listener = TcpListener::bind(&address)?;
    let port = tcp_listener.local_addr()?.port();

    tracing::info!(%address, port, "Listening");

    let server = run(tcp_listener)?;

    Ok(Application { port, server })
}

/// Any origin, method and header is allowed on every route.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
}

pub fn run(listener: TcpListener) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(cors())
            .wrap(TracingLogger::default())
            .service(
                web::resource("/health")
                    .route(web::get().to(health_check))
                    .route(web::head().to(health_check)),
            )
            .service(
                web::resource("/")
                    .route(web::get().to(greeting))
                    .route(web::head().to(greeting)),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
