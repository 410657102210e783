use crate::ctrl::{Envelope, User};

pub const CONFIRM_REMOVE: &str = "¿Estás seguro de que deseas eliminar este usuario?";

pub const LOAD_FAILED: &str = "No se pudieron cargar los usuarios";
pub const SAVE_FAILED: &str = "Error al guardar el usuario";
pub const REMOVE_FAILED: &str = "No se pudo eliminar el usuario";

pub const CREATED: &str = "Usuario creado exitosamente";
pub const UPDATED: &str = "Usuario actualizado exitosamente";
pub const REMOVED: &str = "Usuario eliminado exitosamente";

#[derive(Clone, Debug, PartialEq)]
pub enum AlertKind {
    Success,
    Danger,
}

/// Single-slot transient notification. Replaced wholesale on every
/// operation outcome, cleared on dismissal.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Alert { kind: AlertKind::Success, message: message.into() }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Alert { kind: AlertKind::Danger, message: message.into() }
    }
}

/// State owned by the users screen.
///
/// The list only ever changes through [`apply_load`](ScreenState::apply_load);
/// mutations re-fetch the authoritative list instead of patching locally.
pub struct ScreenState {
    pub users: Vec<User>,
    pub draft: User,
    pub show_modal: bool,
    pub loading: bool,
    pub alert: Option<Alert>,
}

impl ScreenState {
    pub fn new() -> Self {
        ScreenState {
            users: vec![],
            draft: User::empty(),
            show_modal: false,
            loading: false,
            alert: None,
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// A failed load keeps the previous list untouched.
    pub fn apply_load(&mut self, response: Envelope<Vec<User>>) {
        if response.success {
            self.users = response.data.unwrap_or_default();
        } else {
            let message = response.message.unwrap_or_else(|| LOAD_FAILED.to_string());
            self.alert = Some(Alert::danger(message));
        }
        self.loading = false;
    }

    pub fn open_new(&mut self) {
        self.draft = User::empty();
        self.show_modal = true;
    }

    pub fn open_edit(&mut self, user: User) {
        self.draft = user;
        self.show_modal = true;
    }

    /// The draft is kept; the next open overwrites it.
    pub fn close_modal(&mut self) {
        self.show_modal = false;
    }

    pub fn is_update(&self) -> bool {
        self.draft.id.is_some()
    }

    /// Required-field guard: an incomplete draft never reaches the network.
    pub fn draft_ready(&self) -> bool {
        !self.draft.full_name.trim().is_empty()
            && !self.draft.email.trim().is_empty()
            && !self.draft.phone.trim().is_empty()
    }

    /// Returns whether the list must be reloaded. On failure the modal and
    /// draft stay intact so the user can retry.
    pub fn apply_save(&mut self, updated: bool, response: Envelope<User>) -> bool {
        if response.success {
            self.alert = Some(Alert::success(if updated { UPDATED } else { CREATED }));
            self.show_modal = false;
            true
        } else {
            let message = response.message.unwrap_or_else(|| SAVE_FAILED.to_string());
            self.alert = Some(Alert::danger(message));
            false
        }
    }

    /// Returns whether the list must be reloaded.
    pub fn apply_remove(&mut self, response: Envelope<()>) -> bool {
        if response.success {
            self.alert = Some(Alert::success(REMOVED));
            true
        } else {
            let message = response.message.unwrap_or_else(|| REMOVE_FAILED.to_string());
            self.alert = Some(Alert::danger(message));
            false
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

#[cfg(test)]
mod screen_state_tests {
    use super::*;

    fn user(id: i64, name: &str) -> User {
        User {
            id: Some(id),
            full_name: name.to_string(),
            email: format!("{}@dominio.com", name.to_lowercase()),
            phone: "+52 777 123 4567".to_string(),
        }
    }

    fn loaded(users: Vec<User>) -> Envelope<Vec<User>> {
        Envelope { success: true, data: Some(users), message: None }
    }

    #[test]
    fn successful_load_populates_in_order_and_clears_loading() {
        let mut state = ScreenState::new();
        state.begin_load();
        assert!(state.loading);

        state.apply_load(loaded(vec![user(2, "Ana"), user(1, "Luis")]));

        assert!(!state.loading);
        assert_eq!(state.users.len(), 2);
        assert_eq!(state.users[0].id, Some(2));
        assert_eq!(state.users[1].id, Some(1));
        assert!(state.alert.is_none());
    }

    #[test]
    fn failed_load_raises_danger_alert_and_keeps_previous_list() {
        let mut state = ScreenState::new();
        state.apply_load(loaded(vec![user(1, "Luis")]));

        state.begin_load();
        state.apply_load(Envelope {
            success: false,
            data: None,
            message: Some("X".to_string()),
        });

        assert!(!state.loading);
        assert_eq!(state.alert, Some(Alert::danger("X")));
        assert_eq!(state.users.len(), 1);
    }

    #[test]
    fn failed_load_without_message_uses_fallback() {
        let mut state = ScreenState::new();
        state.apply_load(Envelope { success: false, data: None, message: None });

        assert_eq!(state.alert, Some(Alert::danger(LOAD_FAILED)));
        assert!(state.users.is_empty());
    }

    #[test]
    fn empty_list_response_is_not_an_error() {
        let mut state = ScreenState::new();
        state.apply_load(loaded(vec![]));

        assert!(state.users.is_empty());
        assert!(state.alert.is_none());
    }

    #[test]
    fn load_is_idempotent() {
        let mut state = ScreenState::new();
        state.apply_load(loaded(vec![user(1, "Luis"), user(2, "Ana")]));
        let first: Vec<Option<i64>> = state.users.iter().map(|u| u.id).collect();

        state.apply_load(loaded(vec![user(1, "Luis"), user(2, "Ana")]));
        let second: Vec<Option<i64>> = state.users.iter().map(|u| u.id).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn open_new_resets_draft_and_opens_modal() {
        let mut state = ScreenState::new();
        state.open_edit(user(5, "Eva"));
        state.open_new();

        assert!(state.show_modal);
        assert!(state.draft.id.is_none());
        assert!(state.draft.full_name.is_empty());
        assert!(!state.is_update());
    }

    #[test]
    fn open_edit_copies_record_and_dispatches_to_update() {
        let mut state = ScreenState::new();
        state.open_edit(user(5, "Eva"));

        assert!(state.show_modal);
        assert!(state.is_update());
        assert_eq!(state.draft.id, Some(5));
        assert_eq!(state.draft.full_name, "Eva");
    }

    #[test]
    fn close_modal_keeps_draft() {
        let mut state = ScreenState::new();
        state.open_edit(user(5, "Eva"));
        state.close_modal();

        assert!(!state.show_modal);
        assert_eq!(state.draft.id, Some(5));
    }

    #[test]
    fn incomplete_draft_is_not_ready() {
        let mut state = ScreenState::new();
        state.open_new();
        assert!(!state.draft_ready());

        state.draft.full_name = "Eva Ruiz".to_string();
        state.draft.email = "eva@dominio.com".to_string();
        assert!(!state.draft_ready());

        state.draft.phone = "+52 777 123 4567".to_string();
        assert!(state.draft_ready());
    }

    #[test]
    fn successful_create_closes_modal_and_requests_reload() {
        let mut state = ScreenState::new();
        state.open_new();

        let reload = state.apply_save(
            false,
            Envelope { success: true, data: Some(user(1, "Eva")), message: None },
        );

        assert!(reload);
        assert!(!state.show_modal);
        assert_eq!(state.alert, Some(Alert::success(CREATED)));
    }

    #[test]
    fn create_and_update_success_messages_are_distinguishable() {
        let mut state = ScreenState::new();
        state.apply_save(true, Envelope { success: true, data: None, message: None });

        assert_eq!(state.alert, Some(Alert::success(UPDATED)));
        assert_ne!(CREATED, UPDATED);
        assert_ne!(UPDATED, REMOVED);
    }

    #[test]
    fn failed_save_keeps_modal_open_with_draft_intact() {
        let mut state = ScreenState::new();
        state.open_edit(user(5, "Eva"));

        let reload = state.apply_save(
            true,
            Envelope { success: false, data: None, message: Some("correo duplicado".to_string()) },
        );

        assert!(!reload);
        assert!(state.show_modal);
        assert_eq!(state.draft.id, Some(5));
        assert_eq!(state.alert, Some(Alert::danger("correo duplicado")));
    }

    #[test]
    fn failed_save_without_message_uses_fallback() {
        let mut state = ScreenState::new();
        let reload = state.apply_save(false, Envelope { success: false, data: None, message: None });

        assert!(!reload);
        assert_eq!(state.alert, Some(Alert::danger(SAVE_FAILED)));
    }

    #[test]
    fn failed_remove_leaves_list_unchanged() {
        let mut state = ScreenState::new();
        state.apply_load(loaded(vec![user(1, "Luis")]));

        let reload = state.apply_remove(Envelope { success: false, data: None, message: None });

        assert!(!reload);
        assert_eq!(state.users.len(), 1);
        assert_eq!(state.alert, Some(Alert::danger(REMOVE_FAILED)));
    }

    #[test]
    fn successful_remove_requests_reload() {
        let mut state = ScreenState::new();
        let reload = state.apply_remove(Envelope { success: true, data: None, message: None });

        assert!(reload);
        assert_eq!(state.alert, Some(Alert::success(REMOVED)));
    }

    #[test]
    fn dismissing_clears_the_alert() {
        let mut state = ScreenState::new();
        state.apply_load(Envelope { success: false, data: None, message: None });
        assert!(state.alert.is_some());

        state.dismiss_alert();
        assert!(state.alert.is_none());
    }
}
