use cupom_core::error::CupomError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), CupomError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
