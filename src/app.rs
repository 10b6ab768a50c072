use crate::data_fetcher::StandingsFetcher;
use crate::display::{View, ViewData, render_view};
use crate::error::AppError;
use chrono::Local;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType, SetTitle},
};
use std::io::{Write, stdout};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

/// Terminal title shown while the viewer runs
pub const WINDOW_TITLE: &str = "F1 HUB";

/// Options for a watch session.
#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub view: View,
    pub season: String,
    pub refresh_interval: Duration,
    pub colors: bool,
    /// Keep previous output on screen instead of clearing before each redraw.
    pub debug: bool,
}

/// Loads the data behind `view`. Never fails: each fetch falls back to its
/// fixed table on error.
pub async fn load_view(fetcher: &StandingsFetcher, view: View, season: &str) -> ViewData {
    match view {
        View::Drivers => ViewData::Drivers(fetcher.fetch_standings(season).await),
        View::Constructors => {
            ViewData::Constructors(fetcher.fetch_constructor_standings(season).await)
        }
        View::Schedule => ViewData::Schedule(fetcher.fetch_race_schedule(season).await),
    }
}

/// Fetches once and writes the table to `out`.
pub async fn render_once<W: Write>(
    fetcher: &StandingsFetcher,
    out: &mut W,
    view: View,
    season: &str,
    colors: bool,
) -> Result<(), AppError> {
    let data = load_view(fetcher, view, season).await;
    render_view(out, season, &data, colors)
}

/// Re-fetches and redraws on a fixed interval until Ctrl-C.
///
/// Every tick is independent: a failed fetch shows the fallback table and
/// the next tick tries the API again.
pub async fn run_watch(fetcher: &StandingsFetcher, options: &WatchOptions) -> Result<(), AppError> {
    let mut out = stdout();
    execute!(out, SetTitle(WINDOW_TITLE))?;

    run_watch_until(fetcher, options, &mut out, tokio::signal::ctrl_c()).await
}

/// Refresh loop that stops as soon as `shutdown` resolves.
///
/// `shutdown` is polled for the whole session, including while a fetch is in
/// flight, so a single signal is never missed.
pub async fn run_watch_until<W, F>(
    fetcher: &StandingsFetcher,
    options: &WatchOptions,
    out: &mut W,
    shutdown: F,
) -> Result<(), AppError>
where
    W: Write,
    F: Future<Output = std::io::Result<()>>,
{
    tokio::pin!(shutdown);

    let mut ticker = interval(options.refresh_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            result = &mut shutdown => {
                result?;
                break;
            }
        }

        let data = tokio::select! {
            data = load_view(fetcher, options.view, &options.season) => data,
            result = &mut shutdown => {
                result?;
                info!("Fetch abandoned on shutdown");
                break;
            }
        };

        if !options.debug {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        render_view(out, &options.season, &data, options.colors)?;
        writeln!(
            out,
            "\nRefreshing every {}s, press Ctrl-C to quit",
            options.refresh_interval.as_secs()
        )?;
        out.flush()?;

        info!("Data updated at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    }

    info!("Stopping refresh loop");
    Ok(())
}
