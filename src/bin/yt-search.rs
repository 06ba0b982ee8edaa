//! Prints a list of videos based on a search term.
//!
//! Reads the API key from `youtube.properties`, prompts for a query,
//! performs one `search.list` call, and prints the matching videos.

use std::io;
use std::process;

use yt_cli::config::Config;
use yt_cli::error::Error;
use yt_cli::youtube::client::{ApiContext, SearchRequest};
use yt_cli::{input, render};

/// Max number of videos requested on the single page.
const MAX_RESULTS: u32 = 25;

/// Application name sent with every request.
const APPLICATION_NAME: &str = "youtube-cmdline-search-sample";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match Config::load(None) {
        Ok(config) => config,
        Err(err) => {
            report(&err);
            return;
        }
    };

    if let Err(err) = run(&config).await {
        report(&err);
    }
}

/// Run the linear pipeline: prompt, one API call, render.
async fn run(config: &Config) -> yt_cli::Result<()> {
    let context = ApiContext::new(config, APPLICATION_NAME)?;

    let stdin = io::stdin();
    let query = input::read_query(stdin.lock(), io::stdout())?;

    let request = SearchRequest::new(query.clone()).max_results(MAX_RESULTS);
    let response = context.execute_search(&request).await?;

    let mut stdout = io::stdout().lock();
    render::print_search_results(&mut stdout, &response.items, &query, MAX_RESULTS)?;

    Ok(())
}

/// Print the diagnostic for a failure; configuration errors are fatal.
fn report(err: &Error) {
    let _ = err.write_diagnostic(&mut io::stderr());
    if err.is_fatal() {
        process::exit(1);
    }
}
