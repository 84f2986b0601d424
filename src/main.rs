use clap::Parser;
use stock_alert::utils::{logger, validation::Validate};
use stock_alert::{AppConfig, CliConfig, LineNotifier, Runner, TokioPacer, YahooQuoteClient};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();
    let verbose = cli.verbose;

    logger::init_cli_logger(verbose);

    tracing::info!("Starting stock-alert run");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match AppConfig::resolve(cli).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("❌ Watchlist evaluation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("✅ Watchlist evaluation completed");
}

async fn run(config: AppConfig) -> stock_alert::Result<()> {
    let quotes = YahooQuoteClient::new(config.quote_endpoint.clone(), TokioPacer)?;
    let notifier = LineNotifier::new(
        config.broadcast_endpoint.clone(),
        config.channel_token.clone(),
    )?;
    let runner = Runner::new(
        quotes,
        notifier,
        TokioPacer,
        config.market_suffix.clone(),
        config.pacing,
    );

    runner.run(&config.watchlist).await
}
