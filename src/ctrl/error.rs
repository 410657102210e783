use failure::Fail;

#[derive(Debug, Fail)]
pub enum ControllerError {
    #[fail(display = "No browser context available")]
    NoBrowserContext,
    #[fail(display = "Transport failed: {}", message)]
    Transport { message: String },
    #[fail(display = "Serialisation failed: {}", message)]
    FailedSerialisation { message: String },
}
