//! Application Context
//!
//! Copyable handle the shell passes to its actions: the store, plus the
//! bookkeeping that keeps list responses and banner timers in order.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::NOTICE_DISMISS_MS;
use crate::generation::{Generation, Ticket};
use crate::models::Product;
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide state handles
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Listing/search requests; only the newest may write the collection
    requests: StoredValue<Generation>,
    /// Banner auto-dismiss timers; only the newest may clear
    notice_timer: StoredValue<Generation>,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            requests: StoredValue::new(Generation::default()),
            notice_timer: StoredValue::new(Generation::default()),
        }
    }

    /// Take a ticket for a new listing request, superseding older ones
    pub fn begin_request(&self) -> Ticket {
        let mut ticket = Ticket::default();
        self.requests.update_value(|generation| ticket = generation.next());
        ticket
    }

    /// False once a newer request started, or after the app is torn down
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.requests
            .try_with_value(|generation| generation.is_current(ticket))
            .unwrap_or(false)
    }

    pub fn show_error(&self, message: &str) {
        self.store.error().set(Some(message.to_string()));
        self.restart_notice_timer();
    }

    pub fn show_success(&self, message: &str) {
        self.store.success().set(Some(message.to_string()));
        self.restart_notice_timer();
    }

    /// Clear both banners and cancel the pending auto-dismiss
    pub fn dismiss_notices(&self) {
        self.notice_timer.update_value(Generation::invalidate);
        self.clear_notices();
    }

    fn clear_notices(&self) {
        self.store.error().set(None);
        self.store.success().set(None);
    }

    fn restart_notice_timer(&self) {
        let mut ticket = Ticket::default();
        self.notice_timer.update_value(|generation| ticket = generation.next());

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DISMISS_MS).await;
            let still_current = ctx
                .notice_timer
                .try_with_value(|generation| generation.is_current(ticket))
                .unwrap_or(false);
            if still_current {
                ctx.clear_notices();
            }
        });
    }

    /// Open the form; `None` means create mode
    pub fn open_form(&self, product: Option<Product>) {
        self.store.editing().set(product);
        self.store.show_form().set(true);
    }

    pub fn close_form(&self) {
        self.store.show_form().set(false);
        self.store.editing().set(None);
    }
}
