use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;
use crate::error::ClientError;

/// Backend stub answering every call with a fixed result.
struct FakeApi {
    reply: Result<bool, ClientError>,
    calls: Cell<usize>,
}

impl FakeApi {
    fn replying(reply: Result<bool, ClientError>) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
        }
    }
}

impl FavoriteApi for FakeApi {
    async fn toggle_favorite(&self, _snippet_id: &str) -> Result<bool, ClientError> {
        self.calls.set(self.calls.get() + 1);
        self.reply.clone()
    }
}

/// Several buttons per snippet, recording every state they were shown.
struct FakeView {
    buttons: RefCell<HashMap<String, Vec<bool>>>,
    history: RefCell<Vec<bool>>,
}

impl FakeView {
    fn with_buttons(snippet_id: &str, count: usize, favorited: bool) -> Self {
        let mut buttons = HashMap::new();
        buttons.insert(snippet_id.to_owned(), vec![favorited; count]);
        Self {
            buttons: RefCell::new(buttons),
            history: RefCell::new(Vec::new()),
        }
    }

    fn shown(&self, snippet_id: &str) -> Vec<bool> {
        self.buttons.borrow().get(snippet_id).cloned().unwrap_or_default()
    }
}

impl FavoriteView for FakeView {
    fn render(&self, snippet_id: &str, favorited: bool) {
        if let Some(buttons) = self.buttons.borrow_mut().get_mut(snippet_id) {
            buttons.iter_mut().for_each(|b| *b = favorited);
        }
        self.history.borrow_mut().push(favorited);
    }
}

fn registry_with(snippet_id: &str, favorited: bool) -> RefCell<FavoriteRegistry> {
    let mut registry = FavoriteRegistry::default();
    registry.register(snippet_id, favorited);
    RefCell::new(registry)
}

#[test]
fn labels_describe_the_next_action() {
    assert_eq!(favorite_label(true), "Remove from favorites");
    assert_eq!(favorite_label(false), "Add to favorites");
}

#[test]
fn success_settles_favorited_on_every_button() {
    let registry = registry_with("42", false);
    let api = FakeApi::replying(Ok(true));
    let view = FakeView::with_buttons("42", 3, false);

    let state = block_on(toggle(&registry, &api, &view, "42"));

    assert_eq!(state, Some(FavoriteState::Favorited));
    assert_eq!(view.shown("42"), vec![true, true, true]);
    assert_eq!(*view.history.borrow(), vec![true, true]);
    assert_eq!(api.calls.get(), 1);
}

#[test]
fn failure_rolls_every_button_back() {
    let registry = registry_with("42", true);
    let api = FakeApi::replying(Err(ClientError::Status(500)));
    let view = FakeView::with_buttons("42", 2, true);

    let state = block_on(toggle(&registry, &api, &view, "42"));

    assert_eq!(state, Some(FavoriteState::Favorited));
    assert_eq!(view.shown("42"), vec![true, true]);
    assert_eq!(*view.history.borrow(), vec![false, true]);
}

#[test]
fn server_answer_overrides_optimistic_guess() {
    let registry = registry_with("7", false);
    let api = FakeApi::replying(Ok(false));
    let view = FakeView::with_buttons("7", 1, false);

    let state = block_on(toggle(&registry, &api, &view, "7"));

    assert_eq!(state, Some(FavoriteState::NotFavorited));
    assert_eq!(*view.history.borrow(), vec![true, false]);
    assert_eq!(registry.borrow().displayed("7"), Some(false));
}

#[test]
fn unknown_snippet_does_nothing() {
    let registry = registry_with("1", false);
    let api = FakeApi::replying(Ok(true));
    let view = FakeView::with_buttons("1", 1, false);

    assert_eq!(block_on(toggle(&registry, &api, &view, "2")), None);
    assert_eq!(api.calls.get(), 0);
    assert!(view.history.borrow().is_empty());
}

#[test]
fn other_snippets_are_untouched() {
    let registry = registry_with("1", false);
    registry.borrow_mut().register("2", true);
    let api = FakeApi::replying(Ok(true));
    let view = FakeView::with_buttons("1", 1, false);
    view.buttons.borrow_mut().insert("2".to_owned(), vec![true, true]);

    block_on(toggle(&registry, &api, &view, "1"));

    assert_eq!(view.shown("2"), vec![true, true]);
    assert_eq!(registry.borrow().state("2"), Some(FavoriteState::Favorited));
}

/// Backend whose calls stay pending until the test answers them, in call order.
struct GatedApi {
    replies: RefCell<VecDeque<oneshot::Receiver<Result<bool, ClientError>>>>,
}

impl GatedApi {
    fn with_calls(count: usize) -> (Self, Vec<oneshot::Sender<Result<bool, ClientError>>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) = (0..count).map(|_| oneshot::channel()).unzip();
        (
            Self {
                replies: RefCell::new(receivers),
            },
            senders,
        )
    }
}

impl FavoriteApi for GatedApi {
    async fn toggle_favorite(&self, _snippet_id: &str) -> Result<bool, ClientError> {
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(rx) => rx.await.unwrap_or(Err(ClientError::Unavailable)),
            None => Err(ClientError::Unavailable),
        }
    }
}

#[test]
fn overlapping_failed_clicks_end_on_server_state() {
    let registry = registry_with("42", false);
    let (api, mut senders) = GatedApi::with_calls(2);
    let view = FakeView::with_buttons("42", 2, false);
    let second_reply = senders.pop().unwrap();
    let first_reply = senders.pop().unwrap();

    let (first, second, ()) = block_on(async {
        let release = async {
            second_reply.send(Err(ClientError::Status(502))).unwrap();
            futures::pending!();
            first_reply.send(Err(ClientError::Request("offline".to_owned()))).unwrap();
        };
        futures::join!(
            toggle(&registry, &api, &view, "42"),
            toggle(&registry, &api, &view, "42"),
            release,
        )
    });

    assert_eq!(first, Some(FavoriteState::NotFavorited));
    assert_eq!(second, Some(FavoriteState::NotFavorited));
    assert_eq!(registry.borrow().displayed("42"), Some(false));
    assert_eq!(view.shown("42"), vec![false, false]);
    assert_eq!(*view.history.borrow(), vec![true, false, false]);
}

#[test]
fn overlapping_clicks_keep_latest_server_answer() {
    let registry = registry_with("42", false);
    let (api, mut senders) = GatedApi::with_calls(2);
    let view = FakeView::with_buttons("42", 1, false);
    let second_reply = senders.pop().unwrap();
    let first_reply = senders.pop().unwrap();

    block_on(async {
        let release = async {
            second_reply.send(Ok(false)).unwrap();
            futures::pending!();
            first_reply.send(Ok(true)).unwrap();
        };
        futures::join!(
            toggle(&registry, &api, &view, "42"),
            toggle(&registry, &api, &view, "42"),
            release,
        )
    });

    assert_eq!(registry.borrow().state("42"), Some(FavoriteState::NotFavorited));
    assert_eq!(view.shown("42"), vec![false]);
}
