//! Prints the comment threads of a video, replies included.
//!
//! Reads the API key from `youtube.properties`, prompts for a search
//! term (shown in the banner), performs one `commentThreads.list` call
//! for a fixed video, and prints each thread with its replies.

use std::io;
use std::process;

use yt_cli::config::Config;
use yt_cli::error::Error;
use yt_cli::youtube::client::{ApiContext, CommentThreadsRequest, DEFAULT_COMMENTS_VIDEO_ID};
use yt_cli::{input, render};

/// Result-count constant shown in the banner; the request itself keeps
/// the service's default page size.
const BANNER_RESULT_COUNT: u32 = 50;

/// Application name sent with every request.
const APPLICATION_NAME: &str = "youtube-cmdline-commentThreads-sample";

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

    let request = CommentThreadsRequest::new(DEFAULT_COMMENTS_VIDEO_ID);
    let response = context.execute_comment_threads(&request).await?;

    let mut stdout = io::stdout().lock();
    render::print_comment_threads(&mut stdout, &response.items, &query, BANNER_RESULT_COUNT)?;

    Ok(())
}

/// Print the diagnostic for a failure; configuration errors are fatal.
fn report(err: &Error) {
    let _ = err.write_diagnostic(&mut io::stderr());
    if err.is_fatal() {
        process::exit(1);
    }
}
