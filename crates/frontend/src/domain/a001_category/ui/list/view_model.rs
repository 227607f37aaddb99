use std::future::Future;
use std::rc::Rc;

use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::CategoryListState;
use crate::domain::a001_category::api::{CategoryApi, HttpCategoryApi};
use crate::shared::api_utils::ApiError;
use crate::shared::dialog::{BrowserConfirm, Confirm};
use crate::shared::notice::{Notice, NoticeService, Notifier};
use crate::system::auth::storage::{CredentialProvider, LocalStorageCredentials};

pub const LOAD_FAILED: &str = "Failed to load categories. Please try again.";
pub const AUTH_REQUIRED: &str = "Authentication required. Please login first.";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this category?";
pub const DELETE_SUCCEEDED: &str = "Category deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete category";
pub const DELETE_ERROR: &str = "Failed to delete category. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Server confirmed; the caller should drop the id from its snapshot
    Deleted,
    /// No token stored, nothing was sent
    Unauthenticated,
    /// User declined the confirmation prompt
    Cancelled,
    /// Server refused or the request failed; snapshot stays as is
    Failed,
}

#[derive(Clone)]
pub struct CategoryListDeps {
    pub api: Rc<dyn CategoryApi>,
    pub credentials: Rc<dyn CredentialProvider>,
    pub confirm: Rc<dyn Confirm>,
    pub notifier: Rc<dyn Notifier>,
}

impl CategoryListDeps {
    pub fn browser(notices: NoticeService) -> Self {
        Self {
            api: Rc::new(HttpCategoryApi::from_config()),
            credentials: Rc::new(LocalStorageCredentials::from_config()),
            confirm: Rc::new(BrowserConfirm),
            notifier: Rc::new(notices),
        }
    }
}

/// Fetch the collection. Errors are logged and mapped to the text shown in
/// place of the grid.
pub async fn fetch_categories(api: &dyn CategoryApi) -> Result<Vec<Category>, String> {
    match api.fetch_all().await {
        Ok(items) => {
            log::debug!("Loaded {} categories", items.len());
            Ok(items)
        }
        Err(err) => {
            log::error!("Failed to fetch categories: {}", err);
            Err(LOAD_FAILED.to_string())
        }
    }
}

/// Token check, confirmation, then the DELETE request.
///
/// Emits exactly one notice unless the user cancels.
pub async fn delete_category(deps: &CategoryListDeps, id: &str) -> DeleteOutcome {
    let Some(token) = deps.credentials.get_token() else {
        deps.notifier.notify(Notice::error(AUTH_REQUIRED));
        return DeleteOutcome::Unauthenticated;
    };

    if !deps.confirm.confirm(CONFIRM_DELETE) {
        return DeleteOutcome::Cancelled;
    }

    match deps.api.delete(id, &token).await {
        Ok(body) => {
            deps.notifier
                .notify(Notice::success(body.message_or(DELETE_SUCCEEDED)));
            DeleteOutcome::Deleted
        }
        Err(err @ ApiError::Status { .. }) => {
            log::warn!("Delete of category {} refused: {}", id, err);
            let text = err.server_message().unwrap_or(DELETE_FAILED).to_string();
            deps.notifier.notify(Notice::error(text));
            DeleteOutcome::Failed
        }
        Err(err) => {
            log::error!("Delete failed: {}", err);
            deps.notifier.notify(Notice::error(DELETE_ERROR));
            DeleteOutcome::Failed
        }
    }
}

/// Drop `id` from the snapshot when the server confirmed the delete.
/// Returns whether anything was removed.
pub fn apply_delete(state: &mut CategoryListState, id: &str, outcome: &DeleteOutcome) -> bool {
    match outcome {
        DeleteOutcome::Deleted => state.remove(id),
        _ => false,
    }
}

/// ViewModel for the category grid
#[derive(Clone, Copy)]
pub struct CategoryListViewModel {
    pub state: RwSignal<CategoryListState>,
    deps: StoredValue<CategoryListDeps, LocalStorage>,
}

impl CategoryListViewModel {
    pub fn new(deps: CategoryListDeps) -> Self {
        Self {
            state: RwSignal::new(CategoryListState::default()),
            deps: StoredValue::new_local(deps),
        }
    }

    /// Start the one fetch this screen makes. Later calls are ignored.
    pub fn load_once(&self) {
        if let Some(load) = self.start_load() {
            spawn_local(load);
        }
    }

    /// Claim the single fetch of this mount. `None` once it has been claimed.
    pub fn start_load(&self) -> Option<impl Future<Output = ()> + 'static> {
        let state = self.state;
        if state.with_untracked(|s| s.load_started) {
            return None;
        }
        state.update(|s| s.begin_load());

        let api = self.deps.with_value(|d| d.api.clone());
        Some(async move {
            let result = fetch_categories(api.as_ref()).await;
            // the page may be gone by now; a disposed signal swallows the result
            let _ = state.try_update(|s| match result {
                Ok(items) => s.apply_loaded(items),
                Err(message) => s.apply_load_error(message),
            });
        })
    }

    pub fn set_search(&self, query: String) {
        self.state.update(|s| s.set_search(query));
    }

    pub fn toggle_menu(&self, id: &str) {
        self.state.update(|s| s.menu.toggle(id));
    }

    /// Close whatever menu is open. No-op (and no re-render) when none is.
    pub fn close_menu(&self) {
        let any_open = self
            .state
            .try_with_untracked(|s| s.menu.open_id().is_some())
            .unwrap_or(false);
        if any_open {
            self.state.update(|s| s.menu.close());
        }
    }

    pub fn delete_command(&self, id: String) {
        self.close_menu();
        let state = self.state;
        let deps = self.deps.get_value();
        spawn_local(async move {
            let outcome = delete_category(&deps, &id).await;
            let _ = state.try_update(|s| apply_delete(s, &id, &outcome));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::shared::response::MessageResponse;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    struct FixedToken(Option<&'static str>);

    impl CredentialProvider for FixedToken {
        fn get_token(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    struct Answer {
        yes: bool,
        asked: Cell<usize>,
    }

    impl Confirm for Answer {
        fn confirm(&self, message: &str) -> bool {
            assert_eq!(message, CONFIRM_DELETE);
            self.asked.set(self.asked.get() + 1);
            self.yes
        }
    }

    struct FakeCategoryApi {
        list: Result<Vec<Category>, ApiError>,
        delete_reply: Result<MessageResponse, ApiError>,
        deletes: RefCell<Vec<(String, String)>>,
        fetches: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl CategoryApi for FakeCategoryApi {
        async fn fetch_all(&self) -> Result<Vec<Category>, ApiError> {
            self.fetches.set(self.fetches.get() + 1);
            self.list.clone()
        }

        async fn delete(&self, id: &str, token: &str) -> Result<MessageResponse, ApiError> {
            self.deletes
                .borrow_mut()
                .push((id.to_string(), token.to_string()));
            self.delete_reply.clone()
        }
    }

    struct Harness {
        api: Rc<FakeCategoryApi>,
        notifier: Rc<RecordingNotifier>,
        confirm: Rc<Answer>,
        deps: CategoryListDeps,
    }

    fn harness(
        token: Option<&'static str>,
        confirm: bool,
        delete_reply: Result<MessageResponse, ApiError>,
    ) -> Harness {
        let api = Rc::new(FakeCategoryApi {
            list: Ok(vec![Category::new("1", "Shirts"), Category::new("2", "Shoes")]),
            delete_reply,
            deletes: RefCell::new(Vec::new()),
            fetches: Cell::new(0),
        });
        let notifier = Rc::new(RecordingNotifier::default());
        let confirm = Rc::new(Answer {
            yes: confirm,
            asked: Cell::new(0),
        });
        let deps = CategoryListDeps {
            api: api.clone(),
            credentials: Rc::new(FixedToken(token)),
            confirm: confirm.clone(),
            notifier: notifier.clone(),
        };
        Harness {
            api,
            notifier,
            confirm,
            deps,
        }
    }

    fn deleted() -> Result<MessageResponse, ApiError> {
        Ok(MessageResponse {
            message: Some("deleted".into()),
        })
    }

    async fn loaded_state(h: &Harness) -> CategoryListState {
        let mut state = CategoryListState::default();
        state.begin_load();
        match fetch_categories(h.api.as_ref()).await {
            Ok(items) => state.apply_loaded(items),
            Err(message) => state.apply_load_error(message),
        }
        state
    }

    #[tokio::test]
    async fn test_load_end_to_end() {
        let h = harness(Some("tok"), true, deleted());
        let state = loaded_state(&h).await;

        let expected = vec![Category::new("1", "Shirts"), Category::new("2", "Shoes")];
        assert_eq!(state.items, expected);
        assert_eq!(state.filtered, expected);
    }

    #[tokio::test]
    async fn test_load_runs_once_per_mount() {
        let owner = Owner::new();
        owner.set();
        let h = harness(Some("tok"), true, deleted());
        let vm = CategoryListViewModel::new(h.deps.clone());

        let first = vm.start_load().expect("first load is claimed");
        assert!(vm.start_load().is_none());
        first.await;
        assert!(vm.start_load().is_none());

        assert_eq!(h.api.fetches.get(), 1);
        assert_eq!(vm.state.with_untracked(|s| s.items.len()), 2);
    }

    #[tokio::test]
    async fn test_load_failure_maps_to_error_text() {
        let api = FakeCategoryApi {
            list: Err(ApiError::Status {
                status: 502,
                message: None,
            }),
            delete_reply: deleted(),
            deletes: RefCell::new(Vec::new()),
            fetches: Cell::new(0),
        };
        assert_eq!(fetch_categories(&api).await, Err(LOAD_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_delete_end_to_end() {
        let h = harness(Some("tok"), true, deleted());
        let mut state = loaded_state(&h).await;

        let outcome = delete_category(&h.deps, "1").await;
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert!(apply_delete(&mut state, "1", &outcome));

        assert_eq!(state.items, vec![Category::new("2", "Shoes")]);
        assert_eq!(state.filtered, vec![Category::new("2", "Shoes")]);
        assert_eq!(*h.notifier.notices.borrow(), vec![Notice::success("deleted")]);
        assert_eq!(
            *h.api.deletes.borrow(),
            vec![("1".to_string(), "tok".to_string())]
        );
    }

    #[tokio::test]
    async fn test_delete_without_token_sends_nothing() {
        let h = harness(None, true, deleted());

        let outcome = delete_category(&h.deps, "1").await;

        assert_eq!(outcome, DeleteOutcome::Unauthenticated);
        assert!(h.api.deletes.borrow().is_empty());
        assert_eq!(h.confirm.asked.get(), 0);
        assert_eq!(*h.notifier.notices.borrow(), vec![Notice::error(AUTH_REQUIRED)]);
    }

    #[tokio::test]
    async fn test_declined_confirmation_has_no_effect() {
        let h = harness(Some("tok"), false, deleted());

        let outcome = delete_category(&h.deps, "1").await;

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(h.confirm.asked.get(), 1);
        assert!(h.api.deletes.borrow().is_empty());
        assert!(h.notifier.notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_refused_delete_shows_server_message() {
        let h = harness(
            Some("tok"),
            true,
            Err(ApiError::Status {
                status: 403,
                message: Some("Admins only".into()),
            }),
        );

        let outcome = delete_category(&h.deps, "1").await;

        assert_eq!(outcome, DeleteOutcome::Failed);
        assert_eq!(*h.notifier.notices.borrow(), vec![Notice::error("Admins only")]);
    }

    #[tokio::test]
    async fn test_refused_delete_without_message_uses_default() {
        let h = harness(
            Some("tok"),
            true,
            Err(ApiError::Status {
                status: 500,
                message: None,
            }),
        );

        delete_category(&h.deps, "1").await;

        assert_eq!(*h.notifier.notices.borrow(), vec![Notice::error(DELETE_FAILED)]);
    }

    #[tokio::test]
    async fn test_transport_error_keeps_snapshot() {
        let h = harness(Some("tok"), true, Err(ApiError::Network("offline".into())));
        let mut state = loaded_state(&h).await;

        let outcome = delete_category(&h.deps, "1").await;

        assert_eq!(outcome, DeleteOutcome::Failed);
        assert!(!apply_delete(&mut state, "1", &outcome));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.filtered.len(), 2);
        assert_eq!(*h.notifier.notices.borrow(), vec![Notice::error(DELETE_ERROR)]);
    }

    #[tokio::test]
    async fn test_refused_delete_keeps_snapshot() {
        let h = harness(
            Some("tok"),
            true,
            Err(ApiError::Status {
                status: 403,
                message: None,
            }),
        );
        let mut state = loaded_state(&h).await;

        let outcome = delete_category(&h.deps, "2").await;

        assert!(!apply_delete(&mut state, "2", &outcome));
        assert_eq!(state.items, vec![Category::new("1", "Shirts"), Category::new("2", "Shoes")]);
    }

    #[tokio::test]
    async fn test_decode_error_uses_generic_notice() {
        let h = harness(Some("tok"), true, Err(ApiError::Decode("eof".into())));

        delete_category(&h.deps, "1").await;

        assert_eq!(*h.notifier.notices.borrow(), vec![Notice::error(DELETE_ERROR)]);
    }
}
