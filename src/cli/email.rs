use novatech::Config;
use novatech_notification::Dispatcher;

/// Resolves the configured provider without sending anything.
pub fn check(config: &Config) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::from_config(&config.email);

    match dispatcher.service() {
        Ok(service) => {
            tracing::info!(
                email_service = service,
                to = %config.email.to_address,
                "email provider is ready"
            );

            Ok(())
        }
        Err(err) => anyhow::bail!("email provider `{}` is not usable: {err}", config.email.service),
    }
}
