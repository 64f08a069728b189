use clap::Parser;

use newsify::cli::{
    capture_and_submit, handle_config_action, list_styles, submit_file, Args, Command, RunContext,
};
use newsify::config::{default_path, Config};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let ctx = RunContext {
        base_url: config.base_url(args.endpoint.as_deref()),
        timeout: config.timeout(),
        result_page: config.result_page().to_string(),
        origin: args.origin.clone().or_else(|| config.results.origin.clone()),
        stylesheet: args
            .css_out
            .clone()
            .or_else(|| config.results.stylesheet.clone()),
    };

    let outcome = match args.command {
        Command::Submit { image, style } => {
            let style = style.unwrap_or(config.style.default);
            submit_file(&ctx, &image, style).await
        }
        Command::Capture { snapshot, style } => {
            let style = style.unwrap_or(config.style.default);
            let snapshot = snapshot.or_else(|| config.camera.snapshot.clone());
            capture_and_submit(&ctx, snapshot, style).await
        }
        Command::Styles => {
            list_styles(config.style.default);
            return;
        }
        Command::Config { action } => {
            let config_path = args.config.clone().unwrap_or_else(default_path);
            if let Err(e) = handle_config_action(action, &config, &ctx, &config_path) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            return;
        }
    };

    match outcome {
        Ok(url) => println!("{}", url),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
