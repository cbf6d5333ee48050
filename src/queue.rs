//! Add Queue
//!
//! New items are added through a single consumer so that id allocation
//! (which awaits the backend) never races with another add.

use std::time::Duration;

use futures::channel::{mpsc, oneshot};
use futures::StreamExt;

use crate::api;
use crate::error::{AppError, AppResult};
use crate::models::{ClientItem, NewItem};

/// A pending add with the channel its result goes back on
pub struct AddRequest {
    item: NewItem,
    reply: oneshot::Sender<AppResult<ClientItem>>,
}

/// Cloneable handle for submitting new items
#[derive(Clone)]
pub struct AddQueue {
    sender: mpsc::UnboundedSender<AddRequest>,
}

impl AddQueue {
    /// Create a queue handle and the receiver its consumer drains
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AddRequest>) {
        let (sender, receiver) = mpsc::unbounded();
        (Self { sender }, receiver)
    }

    /// Queue an item and wait until it is in the store
    pub async fn submit(&self, item: NewItem) -> AppResult<ClientItem> {
        let (reply, result) = oneshot::channel();
        self.sender
            .unbounded_send(AddRequest { item, reply })
            .map_err(|_| AppError::QueueClosed)?;
        result.await.map_err(|_| AppError::QueueClosed)?
    }
}

/// Drain add requests one at a time.
///
/// `snapshot` returns the current items (`None` once the store is gone,
/// which stops the consumer); `commit` prepends the created item.
pub async fn run_add_queue<S, C>(
    mut requests: mpsc::UnboundedReceiver<AddRequest>,
    id_latency: Duration,
    snapshot: S,
    commit: C,
) where
    S: Fn() -> Option<Vec<ClientItem>>,
    C: Fn(ClientItem) -> AppResult<()>,
{
    while let Some(AddRequest { item, reply }) = requests.next().await {
        let Some(items) = snapshot() else {
            log::debug!("store dropped, stopping add queue");
            let _ = reply.send(Err(AppError::Detached));
            break;
        };

        let result = match api::generate_id(&items, id_latency).await {
            Ok(id) => {
                let created = ClientItem::from_new(id, item);
                commit(created.clone()).map(|()| created)
            }
            Err(err) => Err(err),
        };
        match &result {
            Ok(created) => log::info!("added item #{} ({})", created.id, created.name),
            Err(err) => log::warn!("add failed: {}", err),
        }
        // Submitter may have stopped waiting
        let _ = reply.send(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use crate::store::ItemState;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn new_item(name: &str) -> NewItem {
        NewItem::new(name, "").unwrap()
    }

    #[tokio::test]
    async fn test_queue_allocates_distinct_ids_in_order() {
        let state = Rc::new(RefCell::new(ItemState::new()));
        state.borrow_mut().seed(vec![
            Item { id: 1, name: "A".to_string(), description: None },
            Item { id: 2, name: "B".to_string(), description: None },
        ]);

        let (queue, requests) = AddQueue::new();
        let consumer = run_add_queue(
            requests,
            Duration::ZERO,
            {
                let state = state.clone();
                move || Some(state.borrow().items.clone())
            },
            {
                let state = state.clone();
                move |item| state.borrow_mut().prepend(item)
            },
        );
        let producer = async move {
            let names = ["C", "D", "E", "F"];
            let results =
                futures::future::join_all(names.iter().map(|name| queue.submit(new_item(name)))).await;
            drop(queue);
            results
        };

        let ((), results) = futures::join!(consumer, producer);
        let created: Vec<ClientItem> = results.into_iter().map(|r| r.unwrap()).collect();

        let state = state.borrow();
        assert_eq!(state.len(), 6);
        let ids: HashSet<u32> = state.items.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 6);

        let names: Vec<&str> = state.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["F", "E", "D", "C", "A", "B"]);
        assert!(created.iter().all(|item| !item.is_favourite));
    }

    #[tokio::test]
    async fn test_queue_stops_when_store_is_gone() {
        let (queue, requests) = AddQueue::new();
        let consumer = run_add_queue(requests, Duration::ZERO, || None, |_| Ok(()));
        let producer = async {
            let first = queue.submit(new_item("late")).await;
            let second = queue.submit(new_item("later")).await;
            (first, second)
        };

        let ((), (first, second)) = futures::join!(consumer, producer);
        assert_eq!(first, Err(AppError::Detached));
        assert_eq!(second, Err(AppError::QueueClosed));
    }

    #[tokio::test]
    async fn test_commit_error_reaches_submitter() {
        let (queue, requests) = AddQueue::new();
        let consumer = run_add_queue(
            requests,
            Duration::ZERO,
            || Some(Vec::new()),
            |item: ClientItem| Err(AppError::DuplicateId(item.id)),
        );
        let producer = async move {
            let result = queue.submit(new_item("X")).await;
            drop(queue);
            result
        };

        let ((), result) = futures::join!(consumer, producer);
        assert_eq!(result, Err(AppError::DuplicateId(1)));
    }
}
