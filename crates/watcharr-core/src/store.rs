use std::sync::Arc;
use tokio::sync::watch;
use watcharr_models::{MediaType, Watched};

/// Observable, owned list of watched entries.
///
/// Every mutation goes through the inner `watch` sender, so subscribers are
/// woken once per change and always observe the whole list. Mutations that
/// don't touch anything (unknown id) do not wake anyone.
#[derive(Clone)]
pub struct WatchedStore {
    tx: Arc<watch::Sender<Vec<Watched>>>,
}

impl WatchedStore {
    pub fn new(entries: Vec<Watched>) -> Self {
        let (tx, _rx) = watch::channel(entries);
        Self { tx: Arc::new(tx) }
    }

    /// Receive a notification after each change. The current contents count
    /// as already seen.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Watched>> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> Vec<Watched> {
        self.tx.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    pub fn find(&self, id: u64) -> Option<Watched> {
        self.tx.borrow().iter().find(|w| w.id == id).cloned()
    }

    /// Look up the entry tracking TMDB item `(tmdb_id, media_type)`
    pub fn find_by_content(&self, tmdb_id: u64, media_type: MediaType) -> Option<Watched> {
        self.tx
            .borrow()
            .iter()
            .find(|w| w.content.is(tmdb_id, media_type))
            .cloned()
    }

    pub fn push(&self, entry: Watched) {
        self.tx.send_modify(|list| list.push(entry));
    }

    /// Mutate one entry in place. Returns false (and notifies nobody) if the
    /// id is not in the list.
    pub fn update_entry<F>(&self, id: u64, f: F) -> bool
    where
        F: FnOnce(&mut Watched),
    {
        self.tx.send_if_modified(|list| match list.iter_mut().find(|w| w.id == id) {
            Some(entry) => {
                f(entry);
                true
            }
            None => false,
        })
    }

    pub fn remove(&self, id: u64) -> bool {
        self.tx.send_if_modified(|list| {
            let before = list.len();
            list.retain(|w| w.id != id);
            list.len() != before
        })
    }

    /// Swap in a freshly fetched list
    pub fn replace(&self, entries: Vec<Watched>) {
        self.tx.send_replace(entries);
    }
}

impl Default for WatchedStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
