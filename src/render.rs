//! Terminal rendering of API results.
//!
//! Deterministic formatting only; the renderers take any writer so tests
//! can capture their output.

use crate::youtube::models::{CommentThread, KIND_COMMENT_THREAD, KIND_VIDEO, SearchResult};
use std::io::{self, Write};

const BANNER_RULE: &str = "=============================================================";
const ITEM_SEPARATOR: &str = "-------------------------------------------------------------";
const NO_RESULTS_LINE: &str = " There aren't any results for your query.";

/// Print the banner shared by both samples.
fn print_banner<W: Write>(out: &mut W, limit: u32, query: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out, "   First {limit} videos for search on \"{query}\".")?;
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out)?;
    Ok(())
}

/// Print the blank/separator/blank trailer after an item block.
fn print_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{ITEM_SEPARATOR}")?;
    writeln!(out)?;
    Ok(())
}

/// Print search hits.
///
/// # Arguments
/// * `out` - Destination writer
/// * `items` - Search hits in response order
/// * `query` - Query shown in the banner
/// * `limit` - Result-count constant shown in the banner
///
/// # Details
/// Items whose kind is not `youtube#video` are silently skipped. An
/// empty item list prints a single "no results" line instead of the
/// loop body. A missing video id or thumbnail renders as an empty
/// string rather than skipping the item.
pub fn print_search_results<W: Write>(
    out: &mut W,
    items: &[SearchResult],
    query: &str,
    limit: u32,
) -> io::Result<()> {
    print_banner(out, limit, query)?;

    if items.is_empty() {
        writeln!(out, "{NO_RESULTS_LINE}")?;
        return Ok(());
    }

    for item in items {
        if item.id.kind != KIND_VIDEO {
            continue;
        }

        let video_id = item.id.video_id.as_deref().unwrap_or_default();
        let thumbnail = item
            .snippet
            .thumbnails
            .default
            .as_ref()
            .map(|t| t.url.as_str())
            .unwrap_or_default();

        writeln!(out, " channel Id:{}", item.snippet.channel_id)?;
        writeln!(out, " Video Id:{video_id}")?;
        writeln!(out, " Title: {}", item.snippet.title)?;
        writeln!(out, " Thumbnail: {thumbnail}")?;
        print_separator(out)?;
    }

    Ok(())
}

/// Print comment threads.
///
/// # Arguments
/// * `out` - Destination writer
/// * `items` - Comment threads in response order
/// * `query` - Query shown in the banner
/// * `limit` - Result-count constant shown in the banner
///
/// # Details
/// Threads whose kind is not `youtube#commentThread` are silently
/// skipped. Reply lines appear only for threads that carry replies.
/// Non-ASCII labels are printed verbatim.
pub fn print_comment_threads<W: Write>(
    out: &mut W,
    items: &[CommentThread],
    query: &str,
    limit: u32,
) -> io::Result<()> {
    print_banner(out, limit, query)?;

    if items.is_empty() {
        writeln!(out, "{NO_RESULTS_LINE}")?;
        return Ok(());
    }

    for thread in items {
        if thread.kind != KIND_COMMENT_THREAD {
            continue;
        }

        let snippet = &thread.snippet;
        let top_level = &snippet.top_level_comment;

        writeln!(out, " Video Id:{}", snippet.video_id.as_deref().unwrap_or_default())?;
        writeln!(
            out,
            " Channel Id: {}",
            snippet.channel_id.as_deref().unwrap_or_default()
        )?;
        writeln!(out, " TopLevel Comment Id: {}", thread.id)?;
        writeln!(out, " TopLevel Comment: {}", top_level.snippet.text_display)?;
        writeln!(out, " いいね: {}", top_level.snippet.like_count)?;

        if let Some(replies) = &thread.replies {
            for comment in &replies.comments {
                writeln!(out, " Comment Id: {}", comment.id)?;
                writeln!(
                    out,
                    " Author Display Name: {}",
                    comment.snippet.author_display_name
                )?;
                writeln!(out, " コメント: {}", comment.snippet.text_display)?;
                writeln!(out, " いいね: {}", comment.snippet.like_count)?;
            }
        }

        print_separator(out)?;
    }

    Ok(())
}
