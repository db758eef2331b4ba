use crate::Result;
use serde::{de, ser};

pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ser::Serialize + ?Sized,
{
    serde_json_wasm::to_string(value).map_err(|error| {
        log::error!("{:#?}", error);
        error.into()
    })
}

pub fn from_str<T>(s: &str) -> Result<T>
where
    T: de::DeserializeOwned,
{
    serde_json_wasm::from_str(s).map_err(|error| {
        log::error!("{:#?}", error);
        error.into()
    })
}
