use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use std::sync::Arc;

use cinescope::api::MovieService;
use cinescope::cli::{render_details, render_movie_list, Cli, Command};
use cinescope::config::Config;
use cinescope::logging;
use cinescope::models::Movie;
use cinescope::session::{ActiveView, SessionStore};
use cinescope::store::{filter_movies_with_baseline, MoviesStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let service = Arc::new(MovieService::new(&config).context("failed to build TMDB client")?);
    let baseline = config.filters.baseline_language.clone();
    let store = MoviesStore::new(service.clone()).with_baseline_language(baseline.clone());
    store.set_filters(cli.filters());

    let session_path = SessionStore::default_path();

    match cli.command {
        Command::NowPlaying { page, more } => {
            store.fetch_now_playing(page).await;
            load_more_pages(&store, more).await;
            ensure_ok(&store)?;
            show_list(&store.visible_movies(), &session_path, Some(ActiveView::NowPlaying))?;
        }
        Command::Popular { page } => {
            store.fetch_popular(page).await;
            ensure_ok(&store)?;
            show_list(&store.visible_popular_movies(), &session_path, Some(ActiveView::Popular))?;
        }
        Command::TopRated { page } => {
            let movies = service.top_rated(page).await?;
            let visible = filter_movies_with_baseline(&movies, &cli.filters(), &baseline);
            show_list(&visible, &session_path, None)?;
        }
        Command::Upcoming { page } => {
            let movies = service.upcoming(page).await?;
            let visible = filter_movies_with_baseline(&movies, &cli.filters(), &baseline);
            show_list(&visible, &session_path, None)?;
        }
        Command::Search { query, page, more } => {
            store.search(&query, page).await;
            load_more_pages(&store, more).await;
            ensure_ok(&store)?;
            show_list(&store.visible_movies(), &session_path, None)?;
        }
        Command::Details { id } => {
            show_details(&store, &service, id).await?;
        }
        Command::Select { index } => {
            let mut session = SessionStore::open(&session_path)?;
            let position = usize::try_from(index - 1)?;
            let movie = session
                .movies()
                .get(position)
                .cloned()
                .ok_or_else(|| anyhow!("no movie at position {} in the last list", index))?;
            session.select(movie.id, position)?;

            let selected = session.resolve_selected().cloned();
            store.set_selected_movie(selected);
            show_details(&store, &service, movie.id).await?;
        }
        Command::ClearSession => {
            SessionStore::open(&session_path)?.clear()?;
            println!("Session cleared.");
        }
    }

    Ok(())
}

/// Append up to `count` pages, stopping at the last page or on failure.
async fn load_more_pages(store: &MoviesStore, count: u32) {
    for _ in 0..count {
        let state = store.state();
        if state.has_error() || !state.has_more_pages() {
            break;
        }
        store.load_more().await;
    }
}

fn ensure_ok(store: &MoviesStore) -> Result<()> {
    match store.state().error {
        Some(message) => bail!(message),
        None => Ok(()),
    }
}

fn show_list(
    movies: &[Movie],
    session_path: &std::path::Path,
    view: Option<ActiveView>,
) -> Result<()> {
    let mut session = SessionStore::start(session_path)?;
    session.save_movies(movies)?;
    session.set_active_view(view)?;
    tracing::debug!(path = %session.path().display(), count = movies.len(), "Saved list to session");
    print!("{}", render_movie_list(movies));
    Ok(())
}

async fn show_details(store: &MoviesStore, service: &MovieService, id: u64) -> Result<()> {
    store.fetch_details(id).await;
    ensure_ok(store)?;
    let details = store
        .state()
        .movie_details
        .ok_or_else(|| anyhow!("no details returned for movie {}", id))?;
    let poster = service.full_image_url(details.movie.poster_path.as_deref());
    print!("{}", render_details(&details, &poster));
    Ok(())
}
