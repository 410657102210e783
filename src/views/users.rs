use std::rc::Rc;

use log::*;

use yew::prelude::*;
use yew::{html, Component, ComponentLink, Html, InputData, Properties, ShouldRender};

use wasm_bindgen_futures::futures_0_3::spawn_local;

use crate::ctrl::{ConfirmService, Envelope, User, UserController};
use crate::state::{self, ScreenState};
use crate::views::alert::AlertView;

pub enum UsersMsg {
    Load,
    Loaded(Envelope<Vec<User>>),
    OpenNew,
    OpenEdit(User),
    CloseModal,
    EditFullName(String),
    EditEmail(String),
    EditPhone(String),
    Save,
    Saved { updated: bool, response: Envelope<User> },
    Remove(i64),
    Removed(Envelope<()>),
    DismissAlert,
    Nope,
}

#[derive(Clone, Properties)]
pub struct UsersProps {
    pub users: UserController,
    pub confirm: Rc<dyn ConfirmService>,
}

/// The users screen: table, modal form and alert slot. Every mutation
/// re-fetches the list; nothing is patched optimistically.
pub struct UsersView {
    link: ComponentLink<Self>,
    props: UsersProps,
    state: ScreenState,
}

impl Component for UsersView {
    type Message = UsersMsg;
    type Properties = UsersProps;

    fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
        link.send_message(UsersMsg::Load);

        UsersView { link, props, state: ScreenState::new() }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        return match msg {
            UsersMsg::Load => {
                self.state.begin_load();

                let controller = self.props.users.clone();
                let link = self.link.clone();
                spawn_local(async move {
                    let response = controller.get_all().await;
                    link.send_message(UsersMsg::Loaded(response));
                });
                true
            }
            UsersMsg::Loaded(response) => {
                self.state.apply_load(response);
                true
            }
            UsersMsg::OpenNew => {
                self.state.open_new();
                true
            }
            UsersMsg::OpenEdit(user) => {
                self.state.open_edit(user);
                true
            }
            UsersMsg::CloseModal => {
                self.state.close_modal();
                true
            }
            UsersMsg::EditFullName(value) => {
                self.state.draft.full_name = value;
                true
            }
            UsersMsg::EditEmail(value) => {
                self.state.draft.email = value;
                true
            }
            UsersMsg::EditPhone(value) => {
                self.state.draft.phone = value;
                true
            }
            UsersMsg::Save => {
                if !self.state.draft_ready() {
                    return false;
                }

                let updated = self.state.is_update();
                let draft = self.state.draft.clone();

                info!("saving user (update: {})", updated);

                let controller = self.props.users.clone();
                let link = self.link.clone();
                spawn_local(async move {
                    let response = if updated {
                        controller.update(&draft).await
                    } else {
                        controller.create(&draft).await
                    };
                    link.send_message(UsersMsg::Saved { updated, response });
                });
                false
            }
            UsersMsg::Saved { updated, response } => {
                if self.state.apply_save(updated, response) {
                    self.link.send_message(UsersMsg::Load);
                }
                true
            }
            UsersMsg::Remove(id) => {
                if !removal_confirmed(self.props.confirm.as_ref()) {
                    return false;
                }

                info!("removing user {}", id);

                let controller = self.props.users.clone();
                let link = self.link.clone();
                spawn_local(async move {
                    let response = controller.remove(id).await;
                    link.send_message(UsersMsg::Removed(response));
                });
                false
            }
            UsersMsg::Removed(response) => {
                if self.state.apply_remove(response) {
                    self.link.send_message(UsersMsg::Load);
                }
                true
            }
            UsersMsg::DismissAlert => {
                self.state.dismiss_alert();
                true
            }
            UsersMsg::Nope => false,
        };
    }

    fn change(&mut self, _: Self::Properties) -> ShouldRender {
        // don't render
        false
    }

    fn view(&self) -> Html {
        html! {
        <div class="main-container">
            <div class="header-section">
                <div>
                    <h1 class="header-title">{ "Sistema de Gestión de Usuarios" }</h1>
                    <p class="header-subtitle">
                        { "Administra y organiza la información de usuarios del sistema" }
                    </p>
                </div>
                <button class="btn btn-primary" onclick=self.link.callback(|_| UsersMsg::OpenNew)>
                    { "Nuevo Usuario" }
                </button>
            </div>

            <div class="table-section">
                <AlertView
                    alert=self.state.alert.clone()
                    on_close=self.link.callback(|_| UsersMsg::DismissAlert) />

                <table class="table">
                    <thead>
                        <tr>
                            <th>{ "ID" }</th>
                            <th>{ "Nombre Completo" }</th>
                            <th>{ "Correo Electrónico" }</th>
                            <th>{ "Teléfono" }</th>
                            <th>{ "Acciones" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { self.table_body() }
                    </tbody>
                </table>
            </div>

            { self.modal() }
        </div>
        }
    }
}

impl UsersView {
    fn table_body(&self) -> Html {
        if self.state.loading {
            return html! {
            <tr>
                <td colspan="5" class="loading-state">{ "Cargando usuarios..." }</td>
            </tr>
            };
        }

        if self.state.users.is_empty() {
            return html! {
            <tr>
                <td colspan="5" class="empty-state">{ "No hay usuarios registrados" }</td>
            </tr>
            };
        }

        html! {
        { for self.state.users.iter().map(|user| self.user_row(user)) }
        }
    }

    fn user_row(&self, user: &User) -> Html {
        let edited = user.clone();
        let id = user.id;

        html! {
        <tr>
            <td>{ user.id.map(|id| id.to_string()).unwrap_or_default() }</td>
            <td>{ &user.full_name }</td>
            <td>{ &user.email }</td>
            <td>{ &user.phone }</td>
            <td>
                <button class="btn btn-warning btn-sm"
                    onclick=self.link.callback(move |_| UsersMsg::OpenEdit(edited.clone()))>
                    { "Editar" }
                </button>
                <button class="btn btn-danger btn-sm"
                    onclick=self.link.callback(move |_| match id {
                        Some(id) => UsersMsg::Remove(id),
                        None => UsersMsg::Nope,
                    })>
                    { "Eliminar" }
                </button>
            </td>
        </tr>
        }
    }

    fn modal(&self) -> Html {
        if !self.state.show_modal {
            return html! {};
        }

        let title = if self.state.is_update() { "Editar Usuario" } else { "Crear Nuevo Usuario" };
        let action = if self.state.is_update() { "Actualizar Usuario" } else { "Crear Usuario" };

        html! {
        <>
        <div class="modal-backdrop" onclick=self.link.callback(|_| UsersMsg::CloseModal)></div>
        <div class="modal">
            <div class="modal-header">
                <h2 class="modal-title">{ title }</h2>
                <button class="modal-close" onclick=self.link.callback(|_| UsersMsg::CloseModal)>
                    { "\u{00d7}" }
                </button>
            </div>

            <div class="modal-body">
                <form>
                    <div class="form-group">
                        <label class="form-label">{ "Nombre Completo" }</label>
                        <input class="form-input" required=true
                            placeholder="Ingresa el nombre completo"
                            value=&self.state.draft.full_name
                            oninput=self.link.callback(|e: InputData| UsersMsg::EditFullName(e.value)) />
                    </div>

                    <div class="form-group">
                        <label class="form-label">{ "Correo Electrónico" }</label>
                        <input type="email" class="form-input" required=true
                            placeholder="ejemplo@dominio.com"
                            value=&self.state.draft.email
                            oninput=self.link.callback(|e: InputData| UsersMsg::EditEmail(e.value)) />
                    </div>

                    <div class="form-group">
                        <label class="form-label">{ "Número de Teléfono" }</label>
                        <input class="form-input" required=true
                            placeholder="+52 777 123 4567"
                            value=&self.state.draft.phone
                            oninput=self.link.callback(|e: InputData| UsersMsg::EditPhone(e.value)) />
                    </div>
                </form>
            </div>

            <div class="modal-footer">
                <button class="btn btn-secondary" onclick=self.link.callback(|_| UsersMsg::CloseModal)>
                    { "Cancelar" }
                </button>
                <button class="btn btn-success" onclick=self.link.callback(|_| UsersMsg::Save)>
                    { action }
                </button>
            </div>
        </div>
        </>
        }
    }
}

fn removal_confirmed(confirm: &dyn ConfirmService) -> bool {
    confirm.confirm(state::CONFIRM_REMOVE)
}
