use std::{env, path::PathBuf};

use clap::Parser;
use embed::embed_all;
use log::{info, warn};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

use crate::{
    anyway::AnyResult,
    command::Command,
    config::Config,
    publish::publish,
};

mod anyway;
mod command;
mod config;
mod dirs;
mod publish;
mod utils;

/// Renders DNS lookup widgets into an HTML page.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// config file, defaults to <config dir>/dns-embed/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// where to write the page, stdout when neither this nor [page].output is set
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// keep running and read `<widget> <TYPE>` refresh commands from stdin
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> AnyResult<()> {
    init_logger();

    let args = Args::parse();

    let config = Config::from_file(args.config.as_deref()).await?;
    let resolver = config.resolver()?;
    let options = config.render_options()?;
    let output = args.output.or_else(|| config.output());

    let mut document = config.document();
    let mut controllers = embed_all(&mut document, None, &resolver, &options).await;

    publish(config.title(), &controllers, output.as_deref()).await?;

    if !args.interactive {
        return Ok(());
    }

    for (widget, controller) in controllers.iter().enumerate() {
        info!(
            "#{} {} {:?}",
            widget,
            controller.state().domain(),
            controller.state().requested()
        );
    }

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Refresh {
                widget,
                record_type,
            }) => match controllers.get_mut(widget) {
                Some(controller) => {
                    controller.refresh(record_type).await;
                    publish(config.title(), &controllers, output.as_deref()).await?;
                }
                None => warn!("no widget #{}", widget),
            },
            Err(e) => warn!("{}", e),
        }
    }

    Ok(())
}

fn init_logger() {
    let log_name = "DNS_EMBED_LOG";
    if env::var(log_name).is_err() {
        env::set_var(log_name, "INFO");
    }
    pretty_env_logger::init_custom_env(log_name);
}
