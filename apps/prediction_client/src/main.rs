use clap::Parser;
use dotenvy::dotenv;
use prediction_client::{
    app::{run_history, run_offline, run_predict},
    cli::{Cli, Command},
    logger, HistoryStore, PredictionApi,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let history = HistoryStore::new(cli.history);

    match cli.command {
        Command::Predict(args) => {
            let api = PredictionApi::new(cli.server);
            eprintln!("Consulting the stars...");

            match run_predict(&api, &history, args.form.into_request(), args.plain).await {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    tracing::error!("Prediction request failed: {:?}", e);
                    eprintln!("{}", e.user_message());
                    eprintln!(
                        "Try offline mode: rerun the same command with `offline` instead of `predict`."
                    );
                    std::process::exit(1);
                }
            }
        }
        Command::Offline(args) => {
            let output = run_offline(&history, args.form.into_request(), args.plain)?;
            println!("{}", output);
        }
        Command::History(args) => println!("{}", run_history(&history, args.limit)),
    }

    Ok(())
}
