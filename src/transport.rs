use crate::ctrl::ControllerError;

/// Derives the backend base URL from the current window location.
pub fn create_service_url() -> Result<String, ControllerError> {
    let location = web_sys::window()
        .ok_or(ControllerError::NoBrowserContext)?
        .location();

    let protocol = location.protocol().map_err(|_| ControllerError::NoBrowserContext)?;
    let host = location.host().map_err(|_| ControllerError::NoBrowserContext)?;

    Ok(format!("{}//{}", protocol, host))
}
