use yew::prelude::*;
use yew::{html, Component, ComponentLink, Html, Properties, ShouldRender};

use crate::state::{Alert, AlertKind};

pub enum AlertViewMsg {
    Close,
}

#[derive(Clone, Properties)]
pub struct AlertProps {
    #[prop_or_default]
    pub alert: Option<Alert>,
    pub on_close: Callback<()>,
}

/// Dismissible success/danger banner. Renders nothing without a message.
pub struct AlertView {
    link: ComponentLink<Self>,
    props: AlertProps,
}

impl Component for AlertView {
    type Message = AlertViewMsg;
    type Properties = AlertProps;

    fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
        AlertView { link, props }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        return match msg {
            AlertViewMsg::Close => {
                self.props.on_close.emit(());
                false
            }
        };
    }

    fn change(&mut self, props: Self::Properties) -> ShouldRender {
        self.props = props;
        true
    }

    fn view(&self) -> Html {
        let alert = match &self.props.alert {
            Some(alert) if !alert.message.is_empty() => alert,
            _ => return html! {},
        };

        let class = match alert.kind {
            AlertKind::Success => "alert alert-success",
            AlertKind::Danger => "alert alert-danger",
        };

        html! {
        <div class=class role="alert">
            <span>{ &alert.message }</span>
            <button type="button" class="alert-close" aria-label="Cerrar"
                onclick=self.link.callback(|_| AlertViewMsg::Close)>
                { "\u{00d7}" }
            </button>
        </div>
        }
    }
}
