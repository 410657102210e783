use std::rc::Rc;

use log::*;

use wasm_bindgen::prelude::*;
use yew::{html, Callback, Component, ComponentLink, Html, ShouldRender};

use crate::ctrl::{ConfirmService, UserController, WindowConfirm};
use crate::views::users::UsersView;

#[wasm_bindgen]
extern "C" {
    fn alert(s: &str);
}

pub enum AppMessage {
    ApplicationError(String),
}

pub struct AppContainer {
    link: ComponentLink<Self>,
    users: UserController,
    confirm: Rc<dyn ConfirmService>,
}

impl Component for AppContainer {
    type Message = AppMessage;
    type Properties = ();

    fn create(_: Self::Properties, link: ComponentLink<Self>) -> Self {
        info!("Initialising app...");

        let on_error: Callback<String> = link.callback(AppMessage::ApplicationError);

        let users = match UserController::new() {
            Ok(users) => users,
            Err(error) => {
                on_error.emit(format!("Failed to reach the backend {:?}", error));
                panic!("{}", error)
            }
        };

        let confirm: Rc<dyn ConfirmService> = Rc::new(WindowConfirm);

        AppContainer { link, users, confirm }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        return match msg {
            AppMessage::ApplicationError(message) => {
                alert(&message);
                true
            }
        };
    }

    fn change(&mut self, _: Self::Properties) -> ShouldRender {
        // don't render
        false
    }

    fn view(&self) -> Html {
        html! {
        <div>
            <UsersView
                users=self.users.clone()
                confirm=Rc::clone(&self.confirm) />
        </div>
        }
    }
}
