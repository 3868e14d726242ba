use crate::tracing_setup::tracing_init;
use futures_signals::signal::{Mutable, SignalExt};
use loadable::{combine_map_with, Loadable, LoadableMapExt, Value};
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

mod tracing_setup;

static AUTHOR_ATTEMPTS: AtomicU32 = AtomicU32::new(0);

#[derive(Debug, Clone, PartialEq)]
struct Post {
    id: u32,
    author_id: u32,
    title: String,
}

#[derive(Debug, Clone, Default)]
struct FeedState {
    posts: Loadable<String, Vec<Post>>,
    authors: HashMap<u32, Loadable<String, String>>,
}

impl FeedState {
    /// Each author once, however many posts they wrote.
    fn author_ids(&self) -> BTreeSet<u32> {
        self.posts
            .success_ref()
            .map(|posts| posts.iter().map(|post| post.author_id).collect())
            .unwrap_or_default()
    }

    /// Posts joined with their author names. Every failing author is reported.
    fn page(&self) -> Loadable<String, Vec<(String, String)>> {
        let posts = self.posts.clone();
        let authors = posts.clone().and_then(|posts| {
            combine_map_with(
                posts.iter().map(|post| post.author_id).collect::<Vec<_>>(),
                join_errors,
                |id| self.authors.get_loadable(&id),
            )
        });
        Loadable::succeed(|posts: Vec<Post>| {
            move |names: Vec<String>| {
                posts
                    .into_iter()
                    .zip(names)
                    .map(|(post, name)| (format!("#{} {}", post.id, post.title), name))
                    .collect::<Vec<_>>()
            }
        })
        .and_map(posts)
        .and_map(authors)
    }
}

fn join_errors(left: String, right: String) -> String {
    format!("{}; {}", left, right)
}

fn set_state<F>(state: &Mutable<FeedState>, reducer: F)
where
    F: FnOnce(FeedState) -> FeedState,
{
    let mut lock = state.lock_mut();
    let next = reducer(lock.clone());
    *lock = next;
}

fn render(state: &FeedState) {
    match state.posts.value() {
        Value::Empty if state.posts.is_loading() => info!("  View | posts: spinner"),
        Value::Empty => info!("  View | posts: nothing requested"),
        Value::Failed(error) => warn!(
            "  View | posts: error `{}`{}",
            error,
            refreshing_suffix(&state.posts)
        ),
        Value::Succeeded(posts) => info!(
            "  View | posts: {} item(s){}",
            posts.len(),
            refreshing_suffix(&state.posts)
        ),
    }
}

fn render_page(page: &Loadable<String, Vec<(String, String)>>) {
    match page.value() {
        Value::Succeeded(rows) => {
            for (title, author) in rows {
                info!("  View | {} by {}", title, author);
            }
        }
        Value::Failed(error) => warn!("  View | page: error `{}`", error),
        Value::Empty => info!("  View | page: nothing to show"),
    }
}

fn refreshing_suffix<E, A>(loadable: &Loadable<E, A>) -> &'static str {
    if loadable.is_loading() {
        " (refreshing)"
    } else {
        ""
    }
}

async fn fetch_posts(attempt: u32) -> Result<Vec<Post>, String> {
    sleep(Duration::from_millis(150)).await;
    if attempt == 2 {
        return Err("server busy".to_string());
    }
    Ok((1..=attempt.min(3))
        .map(|id| Post {
            id,
            author_id: match id {
                1 => 10,
                2 => 12,
                _ => 13,
            },
            title: format!("release notes v{}", attempt),
        })
        .collect())
}

async fn fetch_author(id: u32) -> Result<String, String> {
    sleep(Duration::from_millis(50 * u64::from(id % 3 + 1))).await;
    let attempt = AUTHOR_ATTEMPTS.fetch_add(1, Ordering::SeqCst);
    match id {
        10 => Ok("ada".to_string()),
        // Unknown until the first round of requests is over.
        12 if attempt >= 3 => Ok("grace".to_string()),
        13 if attempt >= 3 => Ok("linus".to_string()),
        _ => Err(format!("author {} not found", id)),
    }
}

fn request_posts(state: &Mutable<FeedState>, attempt: u32) {
    set_state(state, |feed| FeedState {
        posts: feed.posts.to_loading(),
        ..feed
    });
    let state = state.clone();
    tokio::spawn(async move {
        let result = fetch_posts(attempt).await;
        debug!(
            "Worker thread | posts attempt {} -> {:?}",
            attempt,
            result.as_ref().map(Vec::len)
        );
        set_state(&state, |feed| FeedState {
            posts: Loadable::from_result(result),
            ..feed
        });
    });
}

fn request_author(state: &Mutable<FeedState>, id: u32) {
    set_state(state, |mut feed| {
        feed.authors.to_loading_at(id);
        feed
    });
    let state = state.clone();
    tokio::spawn(async move {
        let result = fetch_author(id).await;
        debug!("Worker thread | author {} -> {:?}", id, result);
        set_state(&state, |mut feed| {
            feed.authors.insert_result(id, result);
            feed
        });
    });
}

async fn wait_until<F>(state: &Mutable<FeedState>, done: F)
where
    F: FnMut(&FeedState) -> bool,
{
    state
        .signal_cloned()
        .stop_if(done)
        .for_each(|feed| {
            render(&feed);
            async {}
        })
        .await;
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_init()?;

    let state = Mutable::new(FeedState::default());
    render(&state.get_cloned());

    info!("==========================================");
    warn!("A. first load shows a spinner, then the posts");
    request_posts(&state, 1);
    wait_until(&state, |feed| !feed.posts.is_loading()).await;

    info!("==========================================");
    warn!("B. refetch keeps the stale posts visible, then fails");
    request_posts(&state, 2);
    wait_until(&state, |feed| !feed.posts.is_loading()).await;

    info!("==========================================");
    warn!("C. retry after the failure keeps the error visible, then succeeds");
    request_posts(&state, 3);
    wait_until(&state, |feed| !feed.posts.is_loading()).await;

    info!("==========================================");
    warn!("D. load the authors of every post and join them");
    for id in state.get_cloned().author_ids() {
        request_author(&state, id);
    }
    wait_until(&state, |feed| {
        feed.authors.values().all(|author| !author.is_loading())
    })
    .await;

    render_page(&state.get_cloned().page());

    info!("==========================================");
    warn!("E. retrying the failed authors fills in the page");
    let failed_ids: Vec<u32> = state
        .get_cloned()
        .authors
        .iter()
        .filter(|(_, author)| author.is_fail())
        .map(|(id, _)| *id)
        .collect();
    for id in failed_ids {
        request_author(&state, id);
    }
    wait_until(&state, |feed| {
        feed.authors.values().all(|author| !author.is_loading())
    })
    .await;
    render_page(&state.get_cloned().page());

    info!("==========================================");
    info!("  Main thread | Finish");
    Ok(())
}
