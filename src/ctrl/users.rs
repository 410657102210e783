use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::futures_0_3::JsFuture;

use log::*;
use serde::{Deserialize, Serialize};

use web_sys::{Request, RequestInit, Response};

use crate::ctrl::ControllerError;
use crate::transport;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<i64>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl User {
    /// An unsaved record; the backend assigns the id on creation.
    pub fn empty() -> Self {
        User {
            id: None,
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

/// Uniform response shape of every backend operation.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Transport-level failures are folded into the same shape the backend
    /// uses for application-level ones.
    pub fn failure(message: String) -> Self {
        Envelope { success: false, data: None, message: Some(message) }
    }
}

/// REST client for the users resource.
///
/// Every operation resolves to an [`Envelope`]; callers never see a raw
/// transport error.
#[derive(Clone)]
pub struct UserController {
    base_url: String,
}

impl UserController {
    pub fn new() -> Result<Self, ControllerError> {
        let base_url = format!("{}/api/users", transport::create_service_url()?);
        Ok(UserController { base_url })
    }

    pub async fn get_all(&self) -> Envelope<Vec<User>> {
        debug!("loading users");
        self.execute("GET", self.base_url.clone(), None).await
    }

    pub async fn create(&self, user: &User) -> Envelope<User> {
        debug!("creating user");
        let body = match serde_json::to_string(user) {
            Ok(body) => body,
            Err(cause) => return Envelope::failure(cause.to_string()),
        };
        self.execute("POST", self.base_url.clone(), Some(body)).await
    }

    pub async fn update(&self, user: &User) -> Envelope<User> {
        let id = match user.id {
            Some(id) => id,
            None => return Envelope::failure("Cannot update an unsaved user".to_string()),
        };

        debug!("updating user {}", id);
        let body = match serde_json::to_string(user) {
            Ok(body) => body,
            Err(cause) => return Envelope::failure(cause.to_string()),
        };
        self.execute("PUT", format!("{}/{}", self.base_url, id), Some(body)).await
    }

    pub async fn remove(&self, id: i64) -> Envelope<()> {
        debug!("removing user {}", id);
        self.execute("DELETE", format!("{}/{}", self.base_url, id), None).await
    }

    async fn execute<T>(&self, method: &str, url: String, body: Option<String>) -> Envelope<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        match request(method, &url, body).await {
            Ok(envelope) => envelope,
            Err(error) => {
                warn!("{} {} failed: {}", method, url, error);
                Envelope::failure(error.to_string())
            }
        }
    }
}

async fn request<T>(
    method: &str,
    url: &str,
    body: Option<String>,
) -> Result<Envelope<T>, ControllerError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut init = RequestInit::new();
    init.method(method);

    let json_body = body.map(|b| JsValue::from_str(&b));
    if let Some(ref json_body) = json_body {
        init.body(Some(json_body));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(transport_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport_error)?;

    let window = web_sys::window().ok_or(ControllerError::NoBrowserContext)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport_error)?;

    let response: Response = response.dyn_into().map_err(|_| ControllerError::Transport {
        message: "Unexpected fetch response".to_string(),
    })?;

    let json = JsFuture::from(response.json().map_err(transport_error)?)
        .await
        .map_err(transport_error)?;

    json.into_serde::<Envelope<T>>()
        .map_err(|cause| ControllerError::FailedSerialisation { message: cause.to_string() })
}

fn transport_error(value: JsValue) -> ControllerError {
    ControllerError::Transport {
        message: value
            .as_string()
            .unwrap_or_else(|| "Unknown transport error".to_string()),
    }
}

#[cfg(test)]
mod envelope_tests {
    use super::*;

    #[test]
    fn successful_list_keeps_order() {
        let raw = r#"{
            "success": true,
            "data": [
                {"id": 2, "fullName": "Ana Torres", "email": "ana@dominio.com", "phone": "+52 777 111 2222"},
                {"id": 1, "fullName": "Luis Mora", "email": "luis@dominio.com", "phone": "+52 777 333 4444"}
            ]
        }"#;

        let envelope: Envelope<Vec<User>> = serde_json::from_str(raw).unwrap();

        assert!(envelope.success);
        let users = envelope.data.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, Some(2));
        assert_eq!(users[0].full_name, "Ana Torres");
        assert_eq!(users[1].id, Some(1));
    }

    #[test]
    fn failure_carries_message_without_data() {
        let raw = r#"{"success": false, "message": "correo duplicado"}"#;

        let envelope: Envelope<User> = serde_json::from_str(raw).unwrap();

        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("correo duplicado"));
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let envelope: Envelope<Vec<User>> = serde_json::from_str(r#"{"success": true}"#).unwrap();

        assert!(envelope.success);
        assert!(envelope.data.is_none());
        assert!(envelope.message.is_none());
    }

    #[test]
    fn user_serialises_camel_case() {
        let user = User {
            id: None,
            full_name: "Eva Ruiz".to_string(),
            email: "eva@dominio.com".to_string(),
            phone: "+52 777 123 4567".to_string(),
        };

        let raw = serde_json::to_string(&user).unwrap();

        assert!(raw.contains(r#""fullName":"Eva Ruiz""#));
        assert!(raw.contains(r#""id":null"#));
    }

    #[test]
    fn transport_failure_folds_into_envelope() {
        let envelope: Envelope<Vec<User>> = Envelope::failure("backend unreachable".to_string());

        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("backend unreachable"));
    }
}
