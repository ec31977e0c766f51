use rollcall::{App, ConfigBuilder, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigBuilder::new().from_env().build()?;
    rollcall::init_tracing_with_config(&config);

    let app = App::with_config(config)
        .register_module(routes::HomeModule)
        .register_module(routes::PersonsModule)
        .register_module(routes::AuthModule)
        .register_module(routes::ContactModule)
        .register_module(routes::UploadsModule);

    app.serve().await?;
    Ok(())
}
