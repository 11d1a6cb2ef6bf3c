use crate::dto::{normalize_height, Alert, AppState, Symbol};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    ReplaceState(AppState),
    SetAlerts(Vec<Alert>),
    AddAlert(Alert),
    SetSymbols(Vec<Symbol>),
    SetHeaderHeight(f64),
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::ReplaceState(_) => "replace_state",
            Action::SetAlerts(_) => "set_alerts",
            Action::AddAlert(_) => "add_alert",
            Action::SetSymbols(_) => "set_symbols",
            Action::SetHeaderHeight(_) => "set_header_height",
        }
    }
}

pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::ReplaceState(replacement) => {
            next = replacement;
            next.ui.header_height = normalize_height(next.ui.header_height);
        }
        Action::SetAlerts(alerts) => next.db.alerts = alerts,
        Action::AddAlert(alert) => next.db.alerts.push(alert),
        Action::SetSymbols(symbols) => next.db.symbols = symbols,
        Action::SetHeaderHeight(height) => next.ui.header_height = normalize_height(height),
    }
    next
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&AppState)>;

#[derive(Default)]
struct Inner {
    state: AppState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Single-threaded state container. Clones share the same state.
#[derive(Clone, Default)]
pub struct Store {
    inner: Rc<RefCell<Inner>>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                ..Inner::default()
            })),
        }
    }

    pub fn snapshot(&self) -> AppState {
        self.inner.borrow().state.clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&AppState) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }

    /// Applies `action` and notifies listeners when the state changed.
    /// Listeners run with no borrow held, so they may dispatch again.
    pub fn dispatch(&self, action: Action) {
        let name = action.name();
        let (state, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let next = reduce(&inner.state, action);
            if next == inner.state {
                log::debug!("dispatch {name}: unchanged");
                return;
            }
            inner.state = next;
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (inner.state.clone(), listeners)
        };
        log::debug!(
            "dispatch {name}: alerts={} symbols={} notifying {}",
            state.db.alerts.len(),
            state.db.symbols.len(),
            listeners.len()
        );
        for listener in listeners {
            listener(&state);
        }
    }
}

thread_local! {
    static GLOBAL: Store = Store::default();
}

/// The process-wide store shared by the host bridge and the view tree.
pub fn global() -> Store {
    GLOBAL.with(Store::clone)
}
