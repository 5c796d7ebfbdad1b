use labref_core::error::LabrefError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), LabrefError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
