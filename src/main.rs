use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use tienda_api::config::ServerConfig;
use tienda_api::db::{establish_connection_pool, run_migrations};
use tienda_api::repository::DieselRepository;
use tienda_api::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    log::info!("Iniciando {}...", config.project_name);
    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to create database tables: {e}");
        std::process::exit(1);
    }
    log::info!("Base de datos y tablas listas");

    let repo = DieselRepository::new(pool);
    let bind_address = (config.address.clone(), config.port);
    let server_config = config.clone();

    HttpServer::new(move || {
        let api_prefix = server_config.api_prefix.clone();
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .configure(move |cfg| routes::configure(cfg, &api_prefix))
    })
    .bind(bind_address)?
    .run()
    .await?;

    log::info!("Cerrando {}", config.project_name);
    Ok(())
}
